//! Craft types and trait applicability.

use serde::{Deserialize, Serialize};

/// The kind of item being forged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CraftType {
    /// A weapon. Weapon outcomes may expand into variants.
    Weapon,
    /// A piece of armor.
    Armor,
}

impl CraftType {
    /// Parse a craft type from a user-supplied string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weapon" | "weapons" | "w" => Some(Self::Weapon),
            "armor" | "armour" | "a" => Some(Self::Armor),
            _ => None,
        }
    }

    /// All craft types.
    pub fn all() -> &'static [Self] {
        &[Self::Weapon, Self::Armor]
    }

    /// The label used for this craft type in the data files.
    pub fn label(self) -> &'static str {
        match self {
            Self::Weapon => "Weapon",
            Self::Armor => "Armor",
        }
    }
}

impl std::fmt::Display for CraftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which craft types an ore's traits transfer to.
///
/// Data files spell these as `"All"`, `"Weapon"` or `"Armor"`. Matching is
/// exact; any other label is kept as [`TraitType::Other`] and never applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TraitType {
    /// Traits transfer to every craft type.
    All,
    /// Traits transfer to one craft type only.
    Only(CraftType),
    /// An unrecognized label.
    Other(String),
}

impl TraitType {
    /// Returns true if traits of this type transfer to the given craft.
    pub fn applies_to(&self, craft: CraftType) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == craft,
            Self::Other(_) => false,
        }
    }
}

impl From<String> for TraitType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "All" => Self::All,
            "Weapon" => Self::Only(CraftType::Weapon),
            "Armor" => Self::Only(CraftType::Armor),
            _ => Self::Other(label),
        }
    }
}

impl From<TraitType> for String {
    fn from(kind: TraitType) -> Self {
        match kind {
            TraitType::All => "All".to_string(),
            TraitType::Only(craft) => craft.label().to_string(),
            TraitType::Other(label) => label,
        }
    }
}

impl std::fmt::Display for TraitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Only(craft) => write!(f, "{craft}"),
            Self::Other(label) => write!(f, "{label}"),
        }
    }
}
