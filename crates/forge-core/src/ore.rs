//! The ore catalog: every ingredient that can go into the forge.

use serde::{Deserialize, Serialize};

use crate::craft::TraitType;
use crate::ordered::OrderedMap;

/// One line of an ore's trait text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTrait", into = "RawTrait")]
pub struct Trait {
    /// Display text, e.g. "Increased Fire Damage".
    pub description: String,
    /// Stat value at full transfer. `None` marks a flavor-only line.
    pub max_stat: Option<f64>,
    /// A non-numeric `maxStat` (e.g. `"n/a"`). Shown in the catalog, never
    /// transferred.
    pub stat_label: Option<String>,
}

impl Trait {
    /// Create a trait with a numeric stat.
    pub fn stat(description: impl Into<String>, max_stat: f64) -> Self {
        Self {
            description: description.into(),
            max_stat: Some(max_stat),
            stat_label: None,
        }
    }

    /// Create a flavor-only trait.
    pub fn flavor(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            max_stat: None,
            stat_label: None,
        }
    }

    /// The line shown when browsing the catalog: `"<maxStat>% <description>"`,
    /// or just the description when the stat is absent, zero or empty.
    pub fn catalog_line(&self) -> String {
        match (self.max_stat, &self.stat_label) {
            (Some(stat), _) if stat != 0.0 => format!("{stat}% {}", self.description),
            (None, Some(label)) => format!("{label}% {}", self.description),
            _ => self.description.clone(),
        }
    }
}

/// Wire form of a trait. `maxStat` may be any JSON value; only numbers
/// transfer, and other truthy values are kept as catalog text.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTrait {
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_stat: Option<serde_json::Value>,
}

impl From<RawTrait> for Trait {
    fn from(raw: RawTrait) -> Self {
        let max_stat = raw.max_stat.as_ref().and_then(serde_json::Value::as_f64);
        let stat_label = match raw.max_stat {
            Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text),
            Some(serde_json::Value::Bool(true)) => Some("true".to_string()),
            _ => None,
        };
        Self {
            description: raw.description,
            max_stat,
            stat_label,
        }
    }
}

impl From<Trait> for RawTrait {
    fn from(t: Trait) -> Self {
        let max_stat = match (t.max_stat, t.stat_label) {
            (Some(stat), _) => serde_json::Number::from_f64(stat).map(serde_json::Value::Number),
            (None, Some(label)) => Some(serde_json::Value::String(label)),
            (None, None) => None,
        };
        Self {
            description: t.description,
            max_stat,
        }
    }
}

/// A single ore entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ore {
    /// Catalog key. Filled in from the JSON object key.
    #[serde(skip)]
    pub name: String,
    /// Damage/defense multiplier contributed per unit.
    pub multiplier: f64,
    /// Rarity label, e.g. "Legendary".
    #[serde(default)]
    pub rarity: String,
    /// Display color for the rarity (e.g. `"#ffb000"`). Ignored by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity_color: Option<String>,
    /// Which crafts the traits transfer to. Missing means none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trait_type: Option<TraitType>,
    /// Ordered trait lines. Adjacent lines may merge on transfer.
    #[serde(default)]
    pub traits: Vec<Trait>,
}

impl Ore {
    /// Create an ore with no traits.
    pub fn new(name: impl Into<String>, multiplier: f64, rarity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            multiplier,
            rarity: rarity.into(),
            rarity_color: None,
            trait_type: None,
            traits: Vec::new(),
        }
    }

    /// Set the trait applicability and trait lines.
    pub fn with_traits(mut self, trait_type: TraitType, traits: Vec<Trait>) -> Self {
        self.trait_type = Some(trait_type);
        self.traits = traits;
        self
    }

    /// Set the rarity display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.rarity_color = Some(color.into());
        self
    }

    /// Parse the rarity color as `#rrggbb` into RGB components.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.rarity_color.as_deref()?.trim().strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

/// All known ores, keyed by name in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "OrderedMap<Ore>", into = "OrderedMap<Ore>")]
pub struct OreCatalog {
    ores: OrderedMap<Ore>,
}

impl From<OrderedMap<Ore>> for OreCatalog {
    fn from(mut ores: OrderedMap<Ore>) -> Self {
        for (name, ore) in ores.iter_mut() {
            ore.name = name.to_string();
        }
        Self { ores }
    }
}

impl From<OreCatalog> for OrderedMap<Ore> {
    fn from(catalog: OreCatalog) -> Self {
        catalog.ores
    }
}

impl OreCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an ore, keyed by its name.
    pub fn insert(&mut self, ore: Ore) {
        self.ores.insert(ore.name.clone(), ore);
    }

    /// Builder form of [`OreCatalog::insert`].
    pub fn with(mut self, ore: Ore) -> Self {
        self.insert(ore);
        self
    }

    /// Look up an ore by exact name.
    pub fn get(&self, name: &str) -> Option<&Ore> {
        self.ores.get(name)
    }

    /// Returns true if the ore is known.
    pub fn contains(&self, name: &str) -> bool {
        self.ores.contains_key(name)
    }

    /// Number of ores.
    pub fn len(&self) -> usize {
        self.ores.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.ores.is_empty()
    }

    /// Iterate over ores in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Ore> {
        self.ores.values()
    }

    /// Ores whose name contains `filter` (case-insensitive), highest
    /// multiplier first. Equal multipliers keep document order.
    pub fn by_multiplier(&self, filter: &str) -> Vec<&Ore> {
        let needle = filter.to_lowercase();
        let mut ores: Vec<&Ore> = self
            .iter()
            .filter(|o| o.name.to_lowercase().contains(&needle))
            .collect();
        ores.sort_by(|a, b| b.multiplier.total_cmp(&a.multiplier));
        ores
    }
}
