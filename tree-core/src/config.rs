use rand::{SeedableRng, rngs::StdRng};

use crate::{
    error::{Result, TreeError},
    variant::Variant,
};

/// Settings for growing a [`crate::garden::Garden`].
///
/// ### Fields
/// - `sunlight` - Sunlight available on every tick.
/// - `water` - Water available on every tick.
/// - `ticks` - Number of growth ticks applied by a full run.
/// - `seed` - Fixed seed for reproducible growth; `None` seeds from the
///   thread-local generator.
/// - `variants` - Which trees to plant, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub sunlight: u32,
    pub water: u32,
    pub ticks: usize,
    pub seed: Option<u64>,
    pub variants: Vec<Variant>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sunlight: 5,
            water: 3,
            ticks: 5,
            seed: None,
            variants: Variant::ALL.to_vec(),
        }
    }
}

impl Config {
    /// Builds the random source for a run.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Replaces sunlight and water with already-validated conditions.
    pub fn with_conditions(mut self, conditions: Conditions) -> Self {
        self.sunlight = conditions.sunlight;
        self.water = conditions.water;
        self
    }
}

/// Sunlight and water for a growth tick, checked to be in range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Conditions {
    pub sunlight: u32,
    pub water: u32,
}

impl Conditions {
    /// Validates signed inputs.
    ///
    /// ### Returns
    /// - `Err(TreeError::InvalidArgument)` for a negative value.
    /// - `Err(TreeError::OutOfRange)` for a value above `u32::MAX`.
    pub fn try_new(sunlight: i64, water: i64) -> Result<Self> {
        Ok(Self {
            sunlight: non_negative("sunlight", sunlight)?,
            water: non_negative("water", water)?,
        })
    }
}

fn non_negative(name: &'static str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(TreeError::InvalidArgument { name, value });
    }
    u32::try_from(value).map_err(|_| TreeError::OutOfRange { name, value })
}
