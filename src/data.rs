//! Census data loading and ingestion
//!
//! Wires the record store and the species index together behind a single
//! `add_record` entry point, and loads the NYC street tree census CSV export
//! with Polars. Column mapping is an explicit name table rather than
//! positional indexing — the census export carries 40+ columns and this layer
//! picks out the nine the model needs.
//!
//! Loading is fail-fast: the first row that does not validate aborts the load
//! with row context. The export is machine-generated, so a bad row means the
//! wrong file, and silently dropping rows would skew every proportion the
//! report layer computes.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::info;

use crate::error::CensusError;
use crate::model::TreeRecord;
use crate::species::SpeciesIndex;
use crate::store::TreeStore;

/// CSV column names in the 2015 street tree census export.
pub mod columns {
    pub const TREE_ID: &str = "tree_id";
    pub const STATUS: &str = "status";
    pub const HEALTH: &str = "health";
    pub const LATIN_NAME: &str = "spc_latin";
    pub const COMMON_NAME: &str = "spc_common";
    pub const POSTCODE: &str = "postcode";
    pub const BOROUGH: &str = "borough";
    pub const X: &str = "x_sp";
    pub const Y: &str = "y_sp";
}

/// The loaded census: every record plus the distinct species they imply.
///
/// `add_record` is the only write path, so the index always holds exactly the
/// species present in the store — no more, no fewer.
#[derive(Debug, Default)]
pub struct CensusData {
    store: TreeStore,
    index: SpeciesIndex,
}

impl CensusData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests one record: stores it and registers its species.
    ///
    /// Returns whether the record itself was new; re-adding an equal record
    /// changes nothing in either container.
    pub fn add_record(&mut self, record: TreeRecord) -> bool {
        self.index.add(record.species());
        self.store.add(record)
    }

    /// Builds from any record feed. Used by tests and alternative decoders.
    pub fn from_records(records: impl IntoIterator<Item = TreeRecord>) -> Self {
        let mut data = CensusData::new();
        for record in records {
            data.add_record(record);
        }
        data
    }

    /// Loads the census CSV at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .with_context(|| format!("failed to open census CSV: {}", path.display()))?
            .finish()
            .with_context(|| format!("failed to read census CSV: {}", path.display()))?;

        let data = Self::from_frame(&df)
            .with_context(|| format!("failed to decode census CSV: {}", path.display()))?;

        info!(
            trees = data.store.len(),
            species = data.index.len(),
            "loaded census"
        );

        Ok(data)
    }

    /// Decodes a census frame row by row.
    fn from_frame(df: &DataFrame) -> Result<Self> {
        // Numeric columns are cast explicitly so a quirk of dtype inference
        // (an all-integer coordinate column, say) cannot change the decode.
        let ids = df.column(columns::TREE_ID)?.cast(&DataType::Int64)?;
        let ids = ids.i64()?;
        let postcodes = df.column(columns::POSTCODE)?.cast(&DataType::Int64)?;
        let postcodes = postcodes.i64()?;
        let xs = df.column(columns::X)?.cast(&DataType::Float64)?;
        let xs = xs.f64()?;
        let ys = df.column(columns::Y)?.cast(&DataType::Float64)?;
        let ys = ys.f64()?;

        let statuses = df.column(columns::STATUS)?.str()?;
        let healths = df.column(columns::HEALTH)?.str()?;
        let latin_names = df.column(columns::LATIN_NAME)?.str()?;
        let common_names = df.column(columns::COMMON_NAME)?.str()?;
        let boroughs = df.column(columns::BOROUGH)?.str()?;

        let decode_row = |row: usize| -> Result<TreeRecord> {
            let id = ids.get(row).ok_or(CensusError::MissingValue {
                column: columns::TREE_ID,
                row,
            })?;
            let postcode = postcodes.get(row).ok_or(CensusError::MissingValue {
                column: columns::POSTCODE,
                row,
            })?;
            let x = xs.get(row).ok_or(CensusError::MissingValue {
                column: columns::X,
                row,
            })?;
            let y = ys.get(row).ok_or(CensusError::MissingValue {
                column: columns::Y,
                row,
            })?;

            // Absent labels and names decode as empty strings: the enum
            // parsers turn those into their `None` members, and an unnamed
            // tree (a stump, usually) keeps empty name fields.
            let status = statuses.get(row).unwrap_or("").parse()?;
            let health = healths.get(row).unwrap_or("").parse()?;
            let borough = boroughs.get(row).unwrap_or("").parse()?;
            let latin_name = latin_names.get(row).unwrap_or("");
            let common_name = common_names.get(row).unwrap_or("");

            Ok(TreeRecord::new(
                id,
                status,
                health,
                latin_name,
                common_name,
                postcode,
                borough,
                x,
                y,
            )?)
        };

        let mut data = CensusData::new();
        for row in 0..df.height() {
            let record = decode_row(row).with_context(|| format!("census row {row}"))?;
            data.add_record(record);
        }

        Ok(data)
    }

    pub fn store(&self) -> &TreeStore {
        &self.store
    }

    pub fn index(&self) -> &SpeciesIndex {
        &self.index
    }
}
