//! Growth rules shared by the tree variants.
//!
//! Every rule draws its randomness from a caller-supplied [`Rng`], so a
//! seeded generator makes a whole growth history reproducible.

use rand::Rng;

use crate::types::{Count, LEAVES_PER_ROW};

/// Draws a uniformly random increment in `[0, upper]`.
#[inline]
pub fn draw(rng: &mut impl Rng, upper: Count) -> Count {
    rng.random_range(0..=upper)
}

/// Upper bound for fruit and pine level growth.
///
/// Never less than `1`, so even a tick without sunlight still has a
/// two-value draw range.
#[inline]
pub fn fruit_or_level_bound(sunlight: u32) -> Count {
    Count::from(sunlight.max(1))
}

/// Smallest multiple of [`LEAVES_PER_ROW`] that is `>= count`.
pub fn round_up_to_row(count: Count) -> Count {
    match count % LEAVES_PER_ROW {
        0 => count,
        partial => count.saturating_add(LEAVES_PER_ROW - partial),
    }
}

/// Increments drawn during a single broadleaf growth tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Increments {
    pub trunk: Count,
    pub leaves: Count,
}

/// Grows a trunk and a leaf counter in place.
///
/// The trunk grows by a draw from `[0, water * trunk_factor]` and the
/// leaves by a draw from `[0, sunlight * leaf_factor]`. The trunk draw is
/// taken first.
///
/// ### Parameters
/// - `trunk_height` - Trunk counter to grow.
/// - `leaf_count` - Leaf counter to grow.
/// - `sunlight` - Sunlight available this tick.
/// - `water` - Water available this tick.
/// - `trunk_factor` - Multiplier applied to `water` for the trunk range.
/// - `leaf_factor` - Multiplier applied to `sunlight` for the leaf range.
/// - `rng` - Random source for both draws.
///
/// ### Returns
/// The increments that were applied.
pub fn grow_trunk_and_leaves(
    trunk_height: &mut Count,
    leaf_count: &mut Count,
    sunlight: u32,
    water: u32,
    trunk_factor: Count,
    leaf_factor: Count,
    rng: &mut impl Rng,
) -> Increments {
    let trunk = draw(rng, Count::from(water) * trunk_factor);
    let leaves = draw(rng, Count::from(sunlight) * leaf_factor);

    *trunk_height = trunk_height.saturating_add(trunk);
    *leaf_count = leaf_count.saturating_add(leaves);

    Increments { trunk, leaves }
}
