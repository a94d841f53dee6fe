//! store_walk — plan one shopping route and print it as JSON.
//!
//! ```text
//! store_walk --departments Dairy,Bakery,Checkouts
//! store_walk --items milk,bread,aspirin
//! store_walk --layout store.csv --inventory stock.csv --items milk
//! ```
//!
//! Without `--layout` a built-in sample store is used; without `--inventory`
//! item lookups use the sample stock list.  The process exits non-zero when
//! the response is an error body.

mod sample;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use aisle_core::RouteConfig;
use aisle_graph::BreadthFirstFinder;
use aisle_layout::{CsvWaypointStore, InventoryIndex, JsonWaypointStore, WaypointStore};
use aisle_route::RouteRequest;
use aisle_service::{ItemsRequest, RouteServiceBuilder};

use sample::{SAMPLE_INVENTORY_CSV, sample_store};

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan the shortest walk through a store")]
struct Args {
    /// Layout file (`.csv` rows or a JSON document array).  Omit for the sample store.
    #[arg(long)]
    layout: Option<PathBuf>,
    /// Departments to visit, checkout last (comma separated)
    #[arg(long, value_delimiter = ',', conflicts_with = "items")]
    departments: Vec<String>,
    /// Items to buy (comma separated); departments come from the inventory
    #[arg(long, value_delimiter = ',')]
    items: Vec<String>,
    /// `department,item` CSV.  Omit for the sample stock list.
    #[arg(long)]
    inventory: Option<PathBuf>,
    /// Where the walk starts
    #[arg(long, default_value = "Entrance")]
    start: String,
    /// Where the walk ends
    #[arg(long, default_value = "Exit")]
    end: String,
    /// Waypoint visited last before the end
    #[arg(long, default_value = "Checkouts")]
    checkout: String,
    /// Largest number of departments to reorder
    #[arg(long, default_value_t = 8)]
    max_stops: usize,
    /// Abort the search after this many milliseconds
    #[arg(long)]
    budget_ms: Option<u64>,
    /// Pretty-print the JSON response
    #[arg(long)]
    pretty: bool,
}

fn open_layout(path: Option<PathBuf>) -> Box<dyn WaypointStore> {
    match path {
        Some(p) if p.extension().is_some_and(|e| e.eq_ignore_ascii_case("csv")) => {
            Box::new(CsvWaypointStore::new(p))
        }
        Some(p) => Box::new(JsonWaypointStore::new(p)),
        None => Box::new(sample_store()),
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    if args.departments.is_empty() && args.items.is_empty() {
        bail!("pass --departments or --items");
    }

    let config = RouteConfig {
        checkout:       args.checkout.as_str().into(),
        default_start:  args.start.as_str().into(),
        default_end:    args.end.as_str().into(),
        max_must_visit: args.max_stops,
        time_budget:    args.budget_ms.map(Duration::from_millis),
    };
    let inventory = match &args.inventory {
        Some(path) => InventoryIndex::load_csv(path)
            .with_context(|| format!("reading inventory {}", path.display()))?,
        None => InventoryIndex::load_reader(SAMPLE_INVENTORY_CSV.as_bytes())?,
    };
    info!(departments = inventory.departments().len(), items = inventory.item_count(), "inventory loaded");

    let service = RouteServiceBuilder::new(open_layout(args.layout), BreadthFirstFinder)
        .config(config)
        .resolver(inventory)
        .build()?;

    let response = if args.items.is_empty() {
        service.respond(RouteRequest::new(args.start, args.end, args.departments))
    } else {
        service.respond_items(ItemsRequest { items: args.items })
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&response.body)?
    } else {
        serde_json::to_string(&response.body)?
    };
    println!("{json}");

    Ok(if response.status == 200 { ExitCode::SUCCESS } else { ExitCode::from(1) })
}
