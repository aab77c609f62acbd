//! Outcome odds tables: ingredient count → outcome → probability.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::craft::CraftType;
use crate::error::DataError;
use crate::ordered::OrderedMap;

/// One row of an odds table: outcome name → probability, in source order.
pub type OddsRow = OrderedMap<f64>;

/// The odds table for one craft type.
///
/// JSON keys are decimal ingredient counts (`"3"`, `"4"`, ...). Rows need not
/// be contiguous.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrderedMap<OddsRow>", into = "OrderedMap<OddsRow>")]
pub struct OddsTable {
    rows: BTreeMap<u32, OddsRow>,
}

impl TryFrom<OrderedMap<OddsRow>> for OddsTable {
    type Error = DataError;

    fn try_from(raw: OrderedMap<OddsRow>) -> Result<Self, Self::Error> {
        let mut rows = BTreeMap::new();
        for (key, row) in raw {
            let count = key
                .trim()
                .parse::<u32>()
                .map_err(|_| DataError::InvalidCount(key.clone()))?;
            rows.insert(count, row);
        }
        Ok(Self { rows })
    }
}

impl From<OddsTable> for OrderedMap<OddsRow> {
    fn from(table: OddsTable) -> Self {
        table
            .rows
            .into_iter()
            .map(|(count, row)| (count.to_string(), row))
            .collect()
    }
}

impl OddsTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the row for an ingredient count.
    pub fn insert_row(&mut self, count: u32, row: OddsRow) {
        self.rows.insert(count, row);
    }

    /// Builder form of [`OddsTable::insert_row`].
    pub fn with_row(mut self, count: u32, row: OddsRow) -> Self {
        self.insert_row(count, row);
        self
    }

    /// The row for an exact ingredient count.
    pub fn row(&self, count: u32) -> Option<&OddsRow> {
        self.rows.get(&count)
    }

    /// The row with the largest ingredient count.
    pub fn max_row(&self) -> Option<(u32, &OddsRow)> {
        self.rows.iter().next_back().map(|(count, row)| (*count, row))
    }

    /// The largest ingredient count with a row.
    pub fn max_count(&self) -> Option<u32> {
        self.rows.keys().next_back().copied()
    }

    /// Iterate over rows in ascending count order.
    pub fn rows(&self) -> impl Iterator<Item = (u32, &OddsRow)> {
        self.rows.iter().map(|(count, row)| (*count, row))
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Odds tables for every craft type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OddsTables {
    /// Weapon outcomes.
    pub weapon: OddsTable,
    /// Armor outcomes.
    pub armor: OddsTable,
}

impl OddsTables {
    /// Bundle a weapon and an armor table.
    pub fn new(weapon: OddsTable, armor: OddsTable) -> Self {
        Self { weapon, armor }
    }

    /// The table for a craft type.
    pub fn for_craft(&self, craft: CraftType) -> &OddsTable {
        match craft {
            CraftType::Weapon => &self.weapon,
            CraftType::Armor => &self.armor,
        }
    }
}
