//! A row of trees grown side by side under the same conditions.
//!
//! The typical loop looks like:
//! 1. [`Garden::from_config`] plants one fresh tree per configured variant.
//! 2. [`Garden::step`] applies one growth tick to every tree.
//! 3. [`Garden::render`] draws every tree under its own heading.

use rand::Rng;
use tracing::{debug, info};

use crate::{config::Config, tree::Tree, variant::Variant};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Garden {
    trees: Vec<Tree>,
    ticks: usize,
}

impl Garden {
    /// Plants one fresh tree per variant, in the given order.
    pub fn new(variants: impl IntoIterator<Item = Variant>) -> Self {
        Self {
            trees: variants.into_iter().map(Tree::new).collect(),
            ticks: 0,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.variants.iter().copied())
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    /// Number of growth ticks applied since planting or the last reset.
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Grows every tree by one tick.
    ///
    /// Trees draw from `rng` in garden order, so a seeded generator
    /// reproduces the whole garden.
    pub fn step(&mut self, sunlight: u32, water: u32, rng: &mut impl Rng) {
        for tree in &mut self.trees {
            tree.grow(sunlight, water, rng);
        }
        self.ticks += 1;
        debug!(tick = self.ticks, sunlight, water, "garden step");
    }

    /// Applies `cfg.ticks` steps using the configured sunlight and water.
    pub fn run(&mut self, cfg: &Config, rng: &mut impl Rng) {
        info!(
            ticks = cfg.ticks,
            sunlight = cfg.sunlight,
            water = cfg.water,
            trees = self.trees.len(),
            "growing garden"
        );
        for _ in 0..cfg.ticks {
            self.step(cfg.sunlight, cfg.water, rng);
        }
    }

    /// Replants every tree in its initial state, keeping the same variants.
    pub fn reset(&mut self) {
        for tree in &mut self.trees {
            *tree = Tree::new(tree.variant());
        }
        self.ticks = 0;
        info!(trees = self.trees.len(), "garden reset");
    }

    /// Removes every tree.
    pub fn clear(&mut self) {
        self.trees.clear();
        self.ticks = 0;
    }

    /// Draws every tree under a `"<label>:"` heading, separated by blank
    /// lines.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for tree in &self.trees {
            out.push_str(tree.variant().label());
            out.push_str(":\n");
            out.push_str(&tree.render());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ZeroRng;
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn new_plants_variants_in_order() {
        let garden = Garden::new([Variant::Pine, Variant::Plain]);
        let variants: Vec<Variant> = garden.trees().iter().map(Tree::variant).collect();
        assert_eq!(variants, vec![Variant::Pine, Variant::Plain]);
        assert_eq!(garden.ticks(), 0);
    }

    #[test]
    fn from_default_config_plants_everything() {
        let garden = Garden::from_config(&Config::default());
        assert_eq!(garden.trees().len(), Variant::ALL.len());
    }

    #[test]
    fn step_counts_ticks() {
        let mut garden = Garden::new([Variant::Plain]);
        garden.step(1, 1, &mut ZeroRng);
        garden.step(1, 1, &mut ZeroRng);
        assert_eq!(garden.ticks(), 2);
    }

    #[test]
    fn run_applies_configured_ticks() {
        let cfg = Config {
            ticks: 4,
            seed: Some(1),
            ..Config::default()
        };
        let mut garden = Garden::from_config(&cfg);
        garden.run(&cfg, &mut cfg.rng());
        assert_eq!(garden.ticks(), 4);
    }

    #[test]
    fn seeded_runs_are_identical() {
        let cfg = Config {
            seed: Some(2024),
            ..Config::default()
        };
        let grow = || {
            let mut garden = Garden::from_config(&cfg);
            garden.run(&cfg, &mut cfg.rng());
            garden
        };
        assert_eq!(grow().render(), grow().render());
    }

    #[test]
    fn reset_restores_initial_trees() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut garden = Garden::new(Variant::ALL);
        for _ in 0..5 {
            garden.step(6, 6, &mut rng);
        }

        garden.reset();

        assert_eq!(garden, Garden::new(Variant::ALL));
    }

    #[test]
    fn clear_removes_all_trees() {
        let mut garden = Garden::new(Variant::ALL);
        garden.step(1, 1, &mut ZeroRng);
        garden.clear();
        assert!(garden.is_empty());
        assert_eq!(garden.ticks(), 0);
        assert_eq!(garden.render(), "");
    }

    #[test]
    fn render_heads_each_tree() {
        let garden = Garden::new([Variant::Plain, Variant::UpsideDown, Variant::Fruit]);
        let expected = concat!(
            "Tree:\n",
            "###\n",
            " | \n",
            "\n",
            "Upside-down tree:\n",
            " | \n",
            "###\n",
            "\n",
            "Fruit tree:\n",
            ".\n",
            "###\n",
            " | \n",
            "\n",
        );
        assert_eq!(garden.render(), expected);
    }
}
