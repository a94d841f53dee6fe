//! Waypoint loaders.
//!
//! # JSON format
//!
//! An array of waypoint documents, the shape the layout editor persists:
//!
//! ```json
//! [
//!   { "name": "Entrance", "directions": { "straight": ["Produce"] } },
//!   { "name": "Produce",  "directions": { "left": ["Dairy"], "back": ["Entrance"] } }
//! ]
//! ```
//!
//! Extra document fields (`_id`, timestamps, …) are ignored.  Missing or
//! `null` `directions`, and a direction whose value is not an array, are
//! empty; unknown direction keys are skipped with a warning.
//!
//! Names are taken exactly as written, for records and successors alike.
//! Only a blank record name is rejected.  A successor naming no record (a
//! blank entry included) is kept and becomes a dangling edge.
//!
//! # CSV format
//!
//! One row per waypoint.  Successor cells hold `;`-separated names; a blank
//! cell is an empty list.
//!
//! ```csv
//! name,left,right,straight,back
//! Entrance,,,Produce,
//! Produce,Dairy,,,Entrance
//! Dairy,,Checkouts;Bakery,,Produce
//! ```

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use aisle_core::{Direction, Waypoint, WaypointName};

use crate::{LayoutError, LayoutResult};

// ── JSON ──────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WaypointDocument {
    name: String,
    #[serde(default)]
    directions: Option<BTreeMap<String, serde_json::Value>>,
}

/// Load all waypoint documents from a JSON file.
pub fn load_waypoints_json(path: &Path) -> LayoutResult<Vec<Waypoint>> {
    let file = std::fs::File::open(path)?;
    load_waypoints_json_reader(file)
}

/// Like [`load_waypoints_json`] but accepts any `Read` source.
pub fn load_waypoints_json_reader<R: Read>(reader: R) -> LayoutResult<Vec<Waypoint>> {
    let docs: Vec<WaypointDocument> = serde_json::from_reader(reader)
        .map_err(|e| LayoutError::Parse(e.to_string()))?;
    docs.into_iter().map(document_to_waypoint).collect()
}

fn document_to_waypoint(doc: WaypointDocument) -> LayoutResult<Waypoint> {
    let mut waypoint = Waypoint::new(doc.name);
    waypoint.validate()?;

    for (key, value) in doc.directions.unwrap_or_default() {
        let dir = match key.parse::<Direction>() {
            Ok(d) => d,
            Err(_) => {
                warn!(waypoint = %waypoint.name, direction = %key, "ignoring unknown direction");
                continue;
            }
        };
        let serde_json::Value::Array(entries) = value else {
            continue;
        };
        let successors = waypoint.directions.get_mut(dir);
        for entry in entries {
            match entry {
                serde_json::Value::String(s) => successors.push(WaypointName::from(s)),
                other => {
                    return Err(LayoutError::Parse(format!(
                        "waypoint {:?}: {dir} successor {other} is not a string",
                        waypoint.name.as_str()
                    )));
                }
            }
        }
    }
    Ok(waypoint)
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WaypointRecord {
    name:     String,
    #[serde(default)]
    left:     String,
    #[serde(default)]
    right:    String,
    #[serde(default)]
    straight: String,
    #[serde(default)]
    back:     String,
}

/// Load waypoints from a CSV file (one row per waypoint).
///
/// Cells and `;`-separated entries are trimmed, so names and successors
/// match each other after the same normalisation.
pub fn load_waypoints_csv(path: &Path) -> LayoutResult<Vec<Waypoint>> {
    let file = std::fs::File::open(path)?;
    load_waypoints_csv_reader(file)
}

/// Like [`load_waypoints_csv`] but accepts any `Read` source.
pub fn load_waypoints_csv_reader<R: Read>(reader: R) -> LayoutResult<Vec<Waypoint>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut waypoints = Vec::new();
    for result in csv_reader.deserialize::<WaypointRecord>() {
        let row = result.map_err(|e| LayoutError::Parse(e.to_string()))?;
        let waypoint = Waypoint::new(row.name)
            .with(Direction::Left, split_cell(&row.left))
            .with(Direction::Right, split_cell(&row.right))
            .with(Direction::Straight, split_cell(&row.straight))
            .with(Direction::Back, split_cell(&row.back));
        waypoint.validate()?;
        waypoints.push(waypoint);
    }
    Ok(waypoints)
}

/// `"A; B;C"` → `["A", "B", "C"]`; blank → `[]`; `"A;;B"` keeps the empty entry.
fn split_cell(cell: &str) -> Vec<&str> {
    if cell.trim().is_empty() {
        return Vec::new();
    }
    cell.split(';').map(str::trim).collect()
}
