//! Error taxonomy for census ingestion
//!
//! Everything here is a data-validation failure raised while decoding or
//! constructing records. A lookup that matches nothing is not an error (the
//! report engine returns `None` for that), and an undefined proportion is a
//! sentinel on the stat, so neither appears in this enum.

use thiserror::Error;

/// Validation and decode failures surfaced to the ingestion caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CensusError {
    /// Tree identifiers are non-negative.
    #[error("tree id must be non-negative, got {0}")]
    IdOutOfRange(i64),

    /// Postcodes are five-digit values between 00000 and 99999, inclusive.
    #[error("postcode must be between 00000 and 99999, got {0}")]
    PostcodeOutOfRange(i64),

    /// A required cell was empty in the source data.
    #[error("row {row}: missing value in column `{column}`")]
    MissingValue {
        column: &'static str,
        row: usize,
    },

    /// A borough label that is neither empty nor one of the five boroughs.
    #[error("unrecognized borough label `{0}`")]
    UnknownBorough(String),

    /// A health label that is neither empty nor Good/Fair/Poor.
    #[error("unrecognized health label `{0}`")]
    UnknownHealth(String),

    /// A status label that is neither empty nor Alive/Dead/Stump.
    #[error("unrecognized status label `{0}`")]
    UnknownStatus(String),
}
