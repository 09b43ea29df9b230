//! Census record model
//!
//! One `TreeRecord` per census row, plus the three closed label sets the
//! source data uses. Each enumeration carries a `None` member meaning "value
//! absent in the source data" — a valid state, distinct from a parse error on
//! an unrecognized label.
//!
//! Record identity is (id, common name, Latin name) with both names compared
//! case-insensitively; status, health, postcode, borough, and coordinates
//! never participate in equality or ordering.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::Serialize;

use crate::error::CensusError;
use crate::species::SpeciesKey;
use crate::utils::text;

/// A New York City borough, or `None` when the row left it unspecified.
///
/// Declaration order is the canonical report order. `Borough::None` doubles
/// as the citywide pseudo-borough in aggregation, which is why it serializes
/// and displays as `NYC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Borough {
    #[default]
    #[serde(rename = "NYC")]
    None,
    Manhattan,
    Bronx,
    Brooklyn,
    Queens,
    #[serde(rename = "Staten Island")]
    StatenIsland,
}

impl Borough {
    /// Every borough value in declaration (report) order, `None` first.
    pub const ALL: [Borough; 6] = [
        Borough::None,
        Borough::Manhattan,
        Borough::Bronx,
        Borough::Brooklyn,
        Borough::Queens,
        Borough::StatenIsland,
    ];

    /// Display label; `None` renders as the citywide `NYC` row.
    pub fn label(self) -> &'static str {
        match self {
            Borough::None => "NYC",
            Borough::Manhattan => "Manhattan",
            Borough::Bronx => "Bronx",
            Borough::Brooklyn => "Brooklyn",
            Borough::Queens => "Queens",
            Borough::StatenIsland => "Staten Island",
        }
    }
}

impl FromStr for Borough {
    type Err = CensusError;

    /// Parses the census label, case-insensitively. The empty string is the
    /// absent sentinel; `"Staten Island"` is spelled with a space in the data.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            Ok(Borough::None)
        } else if s.eq_ignore_ascii_case("Manhattan") {
            Ok(Borough::Manhattan)
        } else if s.eq_ignore_ascii_case("Bronx") {
            Ok(Borough::Bronx)
        } else if s.eq_ignore_ascii_case("Brooklyn") {
            Ok(Borough::Brooklyn)
        } else if s.eq_ignore_ascii_case("Queens") {
            Ok(Borough::Queens)
        } else if s.eq_ignore_ascii_case("Staten Island") {
            Ok(Borough::StatenIsland)
        } else {
            Err(CensusError::UnknownBorough(s.to_string()))
        }
    }
}

/// Recorded health of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Health {
    #[default]
    None,
    Good,
    Fair,
    Poor,
}

impl FromStr for Health {
    type Err = CensusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            Ok(Health::None)
        } else if s.eq_ignore_ascii_case("Good") {
            Ok(Health::Good)
        } else if s.eq_ignore_ascii_case("Fair") {
            Ok(Health::Fair)
        } else if s.eq_ignore_ascii_case("Poor") {
            Ok(Health::Poor)
        } else {
            Err(CensusError::UnknownHealth(s.to_string()))
        }
    }
}

/// Recorded status of a tree: standing alive, standing dead, or a stump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    None,
    Alive,
    Dead,
    Stump,
}

impl FromStr for Status {
    type Err = CensusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            Ok(Status::None)
        } else if s.eq_ignore_ascii_case("Alive") {
            Ok(Status::Alive)
        } else if s.eq_ignore_ascii_case("Dead") {
            Ok(Status::Dead)
        } else if s.eq_ignore_ascii_case("Stump") {
            Ok(Status::Stump)
        } else {
            Err(CensusError::UnknownStatus(s.to_string()))
        }
    }
}

/// One census row: a single surveyed tree.
///
/// Construction validates the id (non-negative) and postcode (five digits);
/// everything else is carried as-is. Records are immutable once built — the
/// store holds them in a hash set, and the identity fields must not move
/// under it.
#[derive(Debug, Clone)]
pub struct TreeRecord {
    id: i64,
    status: Status,
    health: Health,
    latin_name: String,
    common_name: String,
    postcode: u32,
    borough: Borough,
    x: f64,
    y: f64,
}

impl TreeRecord {
    /// Builds a record from one decoded census row.
    ///
    /// Fails with [`CensusError::IdOutOfRange`] when `id` is negative and
    /// [`CensusError::PostcodeOutOfRange`] when `postcode` falls outside
    /// `[0, 99999]`. Out-of-range values are rejected, never clamped.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        status: Status,
        health: Health,
        latin_name: impl Into<String>,
        common_name: impl Into<String>,
        postcode: i64,
        borough: Borough,
        x: f64,
        y: f64,
    ) -> Result<Self, CensusError> {
        if id < 0 {
            return Err(CensusError::IdOutOfRange(id));
        }
        if !(0..=99_999).contains(&postcode) {
            return Err(CensusError::PostcodeOutOfRange(postcode));
        }

        Ok(TreeRecord {
            id,
            status,
            health,
            latin_name: latin_name.into(),
            common_name: common_name.into(),
            postcode: postcode as u32,
            borough,
            x,
            y,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn health(&self) -> Health {
        self.health
    }

    /// Scientific (Latin) name; empty when the row had none.
    pub fn latin_name(&self) -> &str {
        &self.latin_name
    }

    /// Common (English) name; empty when the row had none.
    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    pub fn postcode(&self) -> u32 {
        self.postcode
    }

    pub fn borough(&self) -> Borough {
        self.borough
    }

    /// State-plane x-coordinate. Carried through, unused by reporting.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// State-plane y-coordinate. Carried through, unused by reporting.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The species identity this record contributes to the index.
    pub fn species(&self) -> SpeciesKey {
        SpeciesKey::new(&self.common_name, &self.latin_name)
    }
}

impl PartialEq for TreeRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && text::eq_ignore_case(&self.common_name, &other.common_name)
            && text::eq_ignore_case(&self.latin_name, &other.latin_name)
    }
}

impl Eq for TreeRecord {}

impl Hash for TreeRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        text::hash_ignore_case(&self.common_name, state);
        text::hash_ignore_case(&self.latin_name, state);
    }
}

impl Ord for TreeRecord {
    /// Common name first (case-insensitive), ties broken by ascending id.
    /// The Latin name is a final tiebreak so that `Equal` coincides exactly
    /// with `==`, as `Ord` requires.
    fn cmp(&self, other: &Self) -> Ordering {
        text::cmp_ignore_case(&self.common_name, &other.common_name)
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| text::cmp_ignore_case(&self.latin_name, &other.latin_name))
    }
}

impl PartialOrd for TreeRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TreeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) #{}", self.common_name, self.latin_name, self.id)
    }
}
