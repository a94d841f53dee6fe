//! `aisle-layout` — where store layouts and inventory come from.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`store`]     | `WaypointStore` trait, `InMemoryWaypointStore`, `JsonWaypointStore`, `CsvWaypointStore` |
//! | [`loader`]    | `load_waypoints_json[_reader]`, `load_waypoints_csv[_reader]` |
//! | [`inventory`] | `DepartmentResolver` trait, `InventoryIndex`                  |
//! | [`error`]     | `LayoutError`, `LayoutResult<T>`                              |

pub mod error;
pub mod inventory;
pub mod loader;
pub mod store;


pub use error::{LayoutError, LayoutResult};
pub use inventory::{DepartmentResolver, InventoryIndex};
pub use loader::{
    load_waypoints_csv, load_waypoints_csv_reader, load_waypoints_json,
    load_waypoints_json_reader,
};
pub use store::{CsvWaypointStore, InMemoryWaypointStore, JsonWaypointStore, WaypointStore};
