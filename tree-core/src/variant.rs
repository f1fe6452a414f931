use std::fmt;
use std::str::FromStr;

use crate::error::TreeError;

/// Tag naming one of the tree kinds.
///
/// The set is closed: every [`crate::tree::Tree`] is exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Plain,
    Even,
    UpsideDown,
    Wide,
    Quick,
    Fruit,
    Pine,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Variant; 7] = [
        Variant::Plain,
        Variant::Even,
        Variant::UpsideDown,
        Variant::Wide,
        Variant::Quick,
        Variant::Fruit,
        Variant::Pine,
    ];

    /// Stable lowercase name, as accepted by [`Variant::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Variant::Plain => "plain",
            Variant::Even => "even",
            Variant::UpsideDown => "upside-down",
            Variant::Wide => "wide",
            Variant::Quick => "quick",
            Variant::Fruit => "fruit",
            Variant::Pine => "pine",
        }
    }

    /// Human-readable title used as a heading.
    pub fn label(self) -> &'static str {
        match self {
            Variant::Plain => "Tree",
            Variant::Even => "Even tree",
            Variant::UpsideDown => "Upside-down tree",
            Variant::Wide => "Wide tree",
            Variant::Quick => "Quick tree",
            Variant::Fruit => "Fruit tree",
            Variant::Pine => "Pine tree",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == wanted)
            .ok_or_else(|| TreeError::UnknownVariant(s.to_string()))
    }
}
