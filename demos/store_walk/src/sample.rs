//! Built-in sample store, used when no `--layout` is given.
//!
//! ```text
//!              Dairy        Bakery       Pharmacy
//!                ↑            ↑             ↑
//! Entrance → Produce  →  Aisle1  →  Aisle2  →  Aisle3 → Checkouts → Exit
//!                ↓            ↓             ↓
//!              Meat        Frozen       Household
//! ```
//!
//! Aisles are walkable in both directions; every department leads back to
//! the aisle it hangs off.

use aisle_core::{Direction, Waypoint};
use aisle_layout::InMemoryWaypointStore;

/// One row per department/item pair.
pub const SAMPLE_INVENTORY_CSV: &str = "\
department,item\n\
Produce,apples\n\
Produce,bananas\n\
Dairy,milk\n\
Dairy,cheese\n\
Dairy,butter\n\
Meat,chicken\n\
Bakery,bread\n\
Bakery,bagels\n\
Frozen,ice cream\n\
Pharmacy,aspirin\n\
Household,detergent\n\
Checkouts,gum\n\
";

pub fn sample_store() -> InMemoryWaypointStore {
    InMemoryWaypointStore::new(vec![
        Waypoint::new("Entrance").with(Direction::Straight, ["Produce"]),
        Waypoint::new("Produce")
            .with(Direction::Left, ["Dairy"])
            .with(Direction::Right, ["Meat"])
            .with(Direction::Straight, ["Aisle1"])
            .with(Direction::Back, ["Entrance"]),
        Waypoint::new("Aisle1")
            .with(Direction::Left, ["Bakery"])
            .with(Direction::Right, ["Frozen"])
            .with(Direction::Straight, ["Aisle2"])
            .with(Direction::Back, ["Produce"]),
        Waypoint::new("Aisle2")
            .with(Direction::Left, ["Pharmacy"])
            .with(Direction::Right, ["Household"])
            .with(Direction::Straight, ["Aisle3"])
            .with(Direction::Back, ["Aisle1"]),
        Waypoint::new("Aisle3")
            .with(Direction::Straight, ["Checkouts"])
            .with(Direction::Back, ["Aisle2"]),
        Waypoint::new("Dairy").with(Direction::Back, ["Produce"]),
        Waypoint::new("Meat").with(Direction::Back, ["Produce"]),
        Waypoint::new("Bakery").with(Direction::Back, ["Aisle1"]),
        Waypoint::new("Frozen").with(Direction::Back, ["Aisle1"]),
        Waypoint::new("Pharmacy").with(Direction::Back, ["Aisle2"]),
        Waypoint::new("Household").with(Direction::Back, ["Aisle2"]),
        Waypoint::new("Checkouts").with(Direction::Straight, ["Exit"]),
        Waypoint::new("Exit"),
    ])
}
