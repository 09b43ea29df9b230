//! NYC street tree census explorer
//!
//! Loads a municipal street tree census (one CSV row per surveyed tree) and
//! answers interactive species lookups with borough-level popularity
//! statistics. The crate is organized around the in-memory query layer:
//! - `model`: the record type and the borough/health/status label sets
//! - `store`: the deduplicated record set with counting queries
//! - `species`: the deduplicated species index with substring search
//! - `report`: keyword resolution and per-borough aggregation
//! - `data`: CSV ingestion (Polars) feeding store and index together
//! - `render` / `session`: console presentation and the interactive loop

pub mod data;
pub mod error;
pub mod model;
pub mod render;
pub mod report;
pub mod session;
pub mod species;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use data::CensusData;
pub use error::CensusError;
pub use model::{Borough, Health, Status, TreeRecord};
pub use report::{BoroughStat, ReportEngine, SpeciesReport};
pub use species::{SpeciesIndex, SpeciesKey};
pub use store::TreeStore;
