//! Item → department resolution.
//!
//! A shopping list names items; routing needs the departments that stock
//! them.  [`DepartmentResolver`] is that lookup.  [`InventoryIndex`] is a
//! small CSV-backed implementation:
//!
//! ```csv
//! department,item
//! Dairy,milk
//! Dairy,butter
//! Bakery,bread
//! ```
//!
//! Resolution order is department first-seen order in the inventory, not the
//! order items were requested.  Each department appears at most once and the
//! checkout is always appended last.

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use aisle_core::WaypointName;

use crate::{LayoutError, LayoutResult};

/// Map requested items to the ordered stop list a route request needs.
pub trait DepartmentResolver: Send + Sync {
    /// Departments stocking at least one of `items`, de-duplicated, with
    /// `checkout` removed from the matches and appended as the final entry.
    fn resolve(&self, items: &[String], checkout: &WaypointName) -> Vec<WaypointName>;
}

#[derive(Deserialize)]
struct InventoryRecord {
    department: String,
    item:       String,
}

/// Department stock list, indexed by item name.
#[derive(Clone, Debug, Default)]
pub struct InventoryIndex {
    /// Departments in first-seen order; position doubles as rank.
    departments: Vec<WaypointName>,
    /// item → ranks of departments stocking it.
    by_item: HashMap<String, Vec<usize>>,
}

impl InventoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `department` stocks `item`.
    pub fn insert(&mut self, department: WaypointName, item: impl Into<String>) {
        let rank = match self.departments.iter().position(|d| *d == department) {
            Some(r) => r,
            None => {
                self.departments.push(department);
                self.departments.len() - 1
            }
        };
        let ranks = self.by_item.entry(item.into()).or_default();
        if !ranks.contains(&rank) {
            ranks.push(rank);
        }
    }

    pub fn load_csv(path: &Path) -> LayoutResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::load_reader(file)
    }

    pub fn load_reader<R: Read>(reader: R) -> LayoutResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut index = Self::new();
        for result in csv_reader.deserialize::<InventoryRecord>() {
            let row = result.map_err(|e| LayoutError::Parse(e.to_string()))?;
            if row.item.is_empty() {
                return Err(LayoutError::Parse(format!(
                    "department {:?} has an empty item",
                    row.department
                )));
            }
            index.insert(WaypointName::parse(&row.department)?, row.item);
        }
        Ok(index)
    }

    pub fn departments(&self) -> &[WaypointName] {
        &self.departments
    }

    pub fn item_count(&self) -> usize {
        self.by_item.len()
    }
}

impl DepartmentResolver for InventoryIndex {
    fn resolve(&self, items: &[String], checkout: &WaypointName) -> Vec<WaypointName> {
        let mut ranks: Vec<usize> = items
            .iter()
            .filter_map(|item| self.by_item.get(item.trim()))
            .flatten()
            .copied()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        ranks.sort_unstable();

        let mut stops: Vec<WaypointName> = ranks
            .into_iter()
            .map(|r| self.departments[r].clone())
            .filter(|d| d != checkout)
            .collect();
        debug!(?items, matched = ?stops, "resolved departments");
        stops.push(checkout.clone());
        stops
    }
}
