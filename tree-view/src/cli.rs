//! Command-line arguments and the headless text mode.

use clap::{ArgAction, Parser};
use tracing::info;
use tree_core::{Garden, Variant, config::Conditions, config::Config};

use crate::error::ViewError;

/// Largest sunlight or water accepted on the command line.
///
/// Rendered rows grow linearly with these values on every tick.
pub const MAX_CONDITION: i64 = 1_000;

/// Grow ASCII-art trees, in a window or straight to stdout
#[derive(Parser, Debug)]
#[command(name = "ascii-trees")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the grown trees to stdout instead of opening a window
    #[arg(long)]
    pub headless: bool,

    /// Tree variant to plant; repeat for several (default: all)
    #[arg(short = 'v', long = "variant", value_name = "NAME")]
    pub variants: Vec<Variant>,

    /// Number of growth ticks to apply in headless mode
    #[arg(short, long, default_value_t = 5)]
    pub ticks: usize,

    /// Sunlight available on every tick (at most 1000)
    #[arg(
        short,
        long,
        default_value_t = 5,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(..=MAX_CONDITION)
    )]
    pub sunlight: i64,

    /// Water available on every tick (at most 1000)
    #[arg(
        short,
        long,
        default_value_t = 3,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(..=MAX_CONDITION)
    )]
    pub water: i64,

    /// Seed for reproducible growth
    #[arg(long)]
    pub seed: Option<u64>,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}

impl Cli {
    /// Validates the arguments into a run [`Config`].
    pub fn config(&self) -> Result<Config, ViewError> {
        let conditions = Conditions::try_new(self.sunlight, self.water)?;
        let variants = if self.variants.is_empty() {
            Variant::ALL.to_vec()
        } else {
            self.variants.clone()
        };

        Ok(Config {
            ticks: self.ticks,
            seed: self.seed,
            variants,
            ..Config::default()
        }
        .with_conditions(conditions))
    }
}

/// Grows a garden for `cfg.ticks` steps and renders it.
pub fn render_headless(cfg: &Config) -> String {
    let mut rng = cfg.rng();
    let mut garden = Garden::from_config(cfg);
    garden.run(cfg, &mut rng);
    info!(ticks = garden.ticks(), "headless run finished");
    garden.render()
}
