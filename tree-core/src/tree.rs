//! The tree model: one tagged enum covering every variant.
//!
//! Each case carries only the state its variant needs. Growth and
//! rendering dispatch on the case; the shared arithmetic lives in
//! [`crate::growth`] and [`crate::render`].

use std::fmt;

use rand::Rng;
use tracing::{debug, trace};

use crate::{
    config::Conditions,
    error::Result,
    growth::{self, draw, fruit_or_level_bound, round_up_to_row},
    render::{self, FRUIT, LEAF},
    types::{Count, LEAVES_PER_ROW, ROW_WIDTH},
    variant::Variant,
};

/// Trunk plus a canopy of leaves wrapped into rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BroadLeaf {
    trunk_height: Count,
    leaf_count: Count,
}

/// A broadleaf crown with fruit layered above the leaves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fruiting {
    crown: BroadLeaf,
    fruit_count: Count,
}

/// Trunk plus a triangular canopy counted in levels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conifer {
    trunk_height: Count,
    leaf_height: Count,
}

impl BroadLeaf {
    pub fn new() -> Self {
        Self {
            trunk_height: 1,
            leaf_count: LEAVES_PER_ROW,
        }
    }

    fn grow(
        &mut self,
        sunlight: u32,
        water: u32,
        trunk_factor: Count,
        leaf_factor: Count,
        rng: &mut impl Rng,
    ) -> growth::Increments {
        growth::grow_trunk_and_leaves(
            &mut self.trunk_height,
            &mut self.leaf_count,
            sunlight,
            water,
            trunk_factor,
            leaf_factor,
            rng,
        )
    }

    fn leaves(&self) -> String {
        render::rows(self.leaf_count, LEAF, ROW_WIDTH)
    }

    fn trunk(&self) -> String {
        render::trunk(self.trunk_height, 0)
    }
}

impl Default for BroadLeaf {
    fn default() -> Self {
        Self::new()
    }
}

impl Fruiting {
    pub fn new() -> Self {
        Self {
            crown: BroadLeaf::new(),
            fruit_count: 1,
        }
    }

    fn fruit(&self) -> String {
        render::rows(self.fruit_count, FRUIT, ROW_WIDTH)
    }
}

impl Default for Fruiting {
    fn default() -> Self {
        Self::new()
    }
}

impl Conifer {
    pub fn new() -> Self {
        Self {
            trunk_height: 1,
            leaf_height: 1,
        }
    }

    fn needles(&self) -> String {
        render::pine_levels(self.leaf_height)
    }

    fn trunk(&self) -> String {
        render::trunk(
            self.trunk_height,
            render::pine_trunk_indent(self.leaf_height),
        )
    }
}

impl Default for Conifer {
    fn default() -> Self {
        Self::new()
    }
}

/// A growing tree of one of the [`Variant`]s.
///
/// Counters start at their variant's initial value and never decrease;
/// the only way to change them is [`Tree::grow`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tree {
    Plain(BroadLeaf),
    /// Leaves always fill whole rows.
    Even(BroadLeaf),
    /// Trunk is drawn above the leaves.
    UpsideDown(BroadLeaf),
    /// Leaf growth range doubled.
    Wide(BroadLeaf),
    /// Trunk and leaf growth ranges doubled.
    Quick(BroadLeaf),
    Fruit(Fruiting),
    Pine(Conifer),
}

impl Tree {
    /// Creates a tree of the given variant in its initial state.
    pub fn new(variant: Variant) -> Self {
        match variant {
            Variant::Plain => Tree::Plain(BroadLeaf::new()),
            Variant::Even => Tree::Even(BroadLeaf::new()),
            Variant::UpsideDown => Tree::UpsideDown(BroadLeaf::new()),
            Variant::Wide => Tree::Wide(BroadLeaf::new()),
            Variant::Quick => Tree::Quick(BroadLeaf::new()),
            Variant::Fruit => Tree::Fruit(Fruiting::new()),
            Variant::Pine => Tree::Pine(Conifer::new()),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Tree::Plain(_) => Variant::Plain,
            Tree::Even(_) => Variant::Even,
            Tree::UpsideDown(_) => Variant::UpsideDown,
            Tree::Wide(_) => Variant::Wide,
            Tree::Quick(_) => Variant::Quick,
            Tree::Fruit(_) => Variant::Fruit,
            Tree::Pine(_) => Variant::Pine,
        }
    }

    pub fn trunk_height(&self) -> Count {
        match self {
            Tree::Plain(c)
            | Tree::Even(c)
            | Tree::UpsideDown(c)
            | Tree::Wide(c)
            | Tree::Quick(c) => c.trunk_height,
            Tree::Fruit(f) => f.crown.trunk_height,
            Tree::Pine(p) => p.trunk_height,
        }
    }

    /// Number of leaves, or `None` for a pine, whose canopy is counted in
    /// levels instead.
    pub fn leaf_count(&self) -> Option<Count> {
        match self {
            Tree::Plain(c)
            | Tree::Even(c)
            | Tree::UpsideDown(c)
            | Tree::Wide(c)
            | Tree::Quick(c) => Some(c.leaf_count),
            Tree::Fruit(f) => Some(f.crown.leaf_count),
            Tree::Pine(_) => None,
        }
    }

    /// Number of fruit; only fruit trees carry any.
    pub fn fruit_count(&self) -> Option<Count> {
        match self {
            Tree::Fruit(f) => Some(f.fruit_count),
            _ => None,
        }
    }

    /// Number of pine levels; only pines have them.
    pub fn leaf_height(&self) -> Option<Count> {
        match self {
            Tree::Pine(p) => Some(p.leaf_height),
            _ => None,
        }
    }

    /// Applies one growth tick.
    ///
    /// Every variant grows its trunk from `water` and its canopy from
    /// `sunlight`; see [`Variant`] for how the ranges differ. Inputs of `0`
    /// are valid and simply give a zero-width range for that draw (except
    /// fruit and pine levels, whose range is never narrower than `[0, 1]`).
    ///
    /// ### Parameters
    /// - `sunlight` - Sunlight available this tick.
    /// - `water` - Water available this tick.
    /// - `rng` - Random source for every draw made during the tick.
    pub fn grow(&mut self, sunlight: u32, water: u32, rng: &mut impl Rng) {
        let variant = self.variant();
        match self {
            Tree::Plain(c) | Tree::UpsideDown(c) => {
                let inc = c.grow(sunlight, water, 1, 1, rng);
                debug!(%variant, trunk = inc.trunk, leaves = inc.leaves, "grew");
            }
            Tree::Even(c) => {
                let inc = c.grow(sunlight, water, 1, 1, rng);
                let before = c.leaf_count;
                c.leaf_count = round_up_to_row(c.leaf_count);
                debug!(
                    %variant,
                    trunk = inc.trunk,
                    leaves = inc.leaves,
                    filled = c.leaf_count - before,
                    "grew"
                );
            }
            Tree::Wide(c) => {
                let inc = c.grow(sunlight, water, 1, 2, rng);
                debug!(%variant, trunk = inc.trunk, leaves = inc.leaves, "grew");
            }
            Tree::Quick(c) => {
                let inc = c.grow(sunlight, water, 2, 2, rng);
                debug!(%variant, trunk = inc.trunk, leaves = inc.leaves, "grew");
            }
            Tree::Fruit(f) => {
                let inc = f.crown.grow(sunlight, water, 1, 1, rng);
                let fruit = draw(rng, fruit_or_level_bound(sunlight));
                f.fruit_count = f.fruit_count.saturating_add(fruit);
                debug!(%variant, trunk = inc.trunk, leaves = inc.leaves, fruit, "grew");
            }
            Tree::Pine(p) => {
                let trunk = draw(rng, Count::from(water));
                let levels = draw(rng, fruit_or_level_bound(sunlight));
                p.trunk_height = p.trunk_height.saturating_add(trunk);
                p.leaf_height = p.leaf_height.saturating_add(levels);
                debug!(%variant, trunk, levels, "grew");
            }
        }
    }

    /// Applies one growth tick from signed inputs.
    ///
    /// Accepted inputs are `0..=u32::MAX`, the domain of [`Tree::grow`].
    ///
    /// ### Returns
    /// Without touching the tree:
    /// - `Err(TreeError::InvalidArgument)` if either input is negative.
    /// - `Err(TreeError::OutOfRange)` if either input is above `u32::MAX`.
    pub fn try_grow(&mut self, sunlight: i64, water: i64, rng: &mut impl Rng) -> Result<()> {
        let Conditions { sunlight, water } = Conditions::try_new(sunlight, water)?;
        self.grow(sunlight, water, rng);
        Ok(())
    }

    /// Draws the tree as newline-terminated rows of ASCII art.
    pub fn render(&self) -> String {
        trace!(variant = %self.variant(), "render");
        match self {
            Tree::Plain(c) | Tree::Even(c) | Tree::Wide(c) | Tree::Quick(c) => {
                c.leaves() + &c.trunk()
            }
            Tree::UpsideDown(c) => c.trunk() + &c.leaves(),
            Tree::Fruit(f) => f.fruit() + &f.crown.leaves() + &f.crown.trunk(),
            Tree::Pine(p) => p.needles() + &p.trunk(),
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Tree::Plain(BroadLeaf::new())
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
