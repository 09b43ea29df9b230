//! Species lookup and borough popularity aggregation
//!
//! The engine resolves a user keyword against the species index by common and
//! Latin name independently, unions the matches into one species set, and
//! aggregates per-borough frequencies against denominators captured once at
//! construction.
//!
//! Two invariants worth naming:
//! - The Latin name is the count key. Display strings may show either name,
//!   but every frequency is summed over `count_by_latin_name*`.
//! - A species matched through both of its names is displayed twice (once per
//!   matching name) and aggregated once.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::data::CensusData;
use crate::model::Borough;

/// Frequency and proportion of the matched species set in one borough.
///
/// `proportion` is `None` when the borough has no trees at all — the
/// undefined-denominator sentinel, rendered as `--` by the text output.
#[derive(Debug, Clone, Serialize)]
pub struct BoroughStat {
    pub borough: Borough,
    pub frequency: usize,
    pub total: usize,
    pub proportion: Option<f64>,
}

/// Structured result of one successful lookup.
#[derive(Debug, Clone, Serialize)]
pub struct SpeciesReport {
    /// Display names that matched, deduplicated case-insensitively and
    /// sorted ordinally. Common names for common-name matches, Latin names
    /// for Latin-name matches.
    pub matched_names: Vec<String>,
    /// One entry per borough in report order, the citywide `NYC` row first.
    pub boroughs: Vec<BoroughStat>,
}

/// Answers lookup queries over a loaded census.
#[derive(Debug)]
pub struct ReportEngine {
    data: CensusData,
    totals: FxHashMap<Borough, usize>,
}

impl ReportEngine {
    /// Wraps a loaded census and captures the per-borough denominators.
    ///
    /// `Borough::None` holds the citywide total (every record); each concrete
    /// borough holds its own record count, independent of species.
    pub fn new(data: CensusData) -> Self {
        let mut totals = FxHashMap::default();
        for &borough in Borough::ALL.iter() {
            let total = match borough {
                Borough::None => data.store().len(),
                _ => data.store().count_by_borough(borough),
            };
            totals.insert(borough, total);
        }

        ReportEngine { data, totals }
    }

    /// Denominator used for `borough` in every report.
    pub fn total(&self, borough: Borough) -> usize {
        self.totals[&borough]
    }

    pub fn data(&self) -> &CensusData {
        &self.data
    }

    /// Resolves `keyword` and aggregates the borough popularity table.
    ///
    /// Returns `None` when no species matches — the not-found outcome, a
    /// normal result rather than an error.
    pub fn lookup(&self, keyword: &str) -> Option<SpeciesReport> {
        let by_common = self.data.index().find_by_common_name(keyword);
        let by_latin = self.data.index().find_by_latin_name(keyword);

        if by_common.is_empty() && by_latin.is_empty() {
            return None;
        }

        // The union drives aggregation; the display list is collected
        // independently so the caller sees the name that actually matched.
        let mut matched = FxHashSet::default();
        let mut matched_names: Vec<String> = Vec::new();
        let mut seen_names = FxHashSet::default();

        for &key in &by_common {
            push_display_name(&mut matched_names, &mut seen_names, key.common_name());
            matched.insert(key);
        }
        for &key in &by_latin {
            push_display_name(&mut matched_names, &mut seen_names, key.latin_name());
            matched.insert(key);
        }

        matched_names.sort();

        let store = self.data.store();
        let boroughs = Borough::ALL
            .iter()
            .map(|&borough| {
                let frequency = matched
                    .iter()
                    .map(|key| match borough {
                        Borough::None => store.count_by_latin_name(key.latin_name()),
                        _ => store.count_by_latin_name_in_borough(key.latin_name(), borough),
                    })
                    .sum();
                let total = self.totals[&borough];
                let proportion = if total > 0 {
                    Some(frequency as f64 / total as f64)
                } else {
                    None
                };

                BoroughStat {
                    borough,
                    frequency,
                    total,
                    proportion,
                }
            })
            .collect();

        Some(SpeciesReport {
            matched_names,
            boroughs,
        })
    }
}

/// Appends `name` unless an equal spelling (up to case) is already listed.
fn push_display_name(names: &mut Vec<String>, seen: &mut FxHashSet<String>, name: &str) {
    if seen.insert(name.to_ascii_lowercase()) {
        names.push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Health, Status, TreeRecord};
    use approx::assert_relative_eq;

    fn record(id: i64, common: &str, latin: &str, borough: Borough) -> TreeRecord {
        TreeRecord::new(
            id,
            Status::Alive,
            Health::Good,
            latin,
            common,
            10007,
            borough,
            0.0,
            0.0,
        )
        .unwrap()
    }

    /// The three-record census used by several scenarios: two Red Maples in
    /// Manhattan (same species, case-variant rows) and a White Oak in Queens.
    fn maple_oak_engine() -> ReportEngine {
        ReportEngine::new(CensusData::from_records([
            record(1, "Red Maple", "Acer rubrum", Borough::Manhattan),
            record(2, "red maple", "ACER RUBRUM", Borough::Manhattan),
            record(3, "White Oak", "Quercus alba", Borough::Queens),
        ]))
    }

    fn stat(report: &SpeciesReport, borough: Borough) -> &BoroughStat {
        report
            .boroughs
            .iter()
            .find(|stat| stat.borough == borough)
            .unwrap()
    }

    #[test]
    fn test_totals_captured_at_construction() {
        let engine = maple_oak_engine();
        assert_eq!(engine.total(Borough::None), 3);
        assert_eq!(engine.total(Borough::Manhattan), 2);
        assert_eq!(engine.total(Borough::Queens), 1);
        assert_eq!(engine.total(Borough::Bronx), 0);
    }

    #[test]
    fn test_maple_lookup_scenario() {
        let engine = maple_oak_engine();
        let report = engine.lookup("maple").unwrap();

        // One display line despite two case-variant rows
        assert_eq!(report.matched_names, vec!["Red Maple"]);

        let manhattan = stat(&report, Borough::Manhattan);
        assert_eq!(manhattan.frequency, 2);
        assert_eq!(manhattan.total, 2);
        assert_relative_eq!(manhattan.proportion.unwrap(), 1.0);

        let queens = stat(&report, Borough::Queens);
        assert_eq!(queens.frequency, 0);
        assert_eq!(queens.total, 1);
        assert_relative_eq!(queens.proportion.unwrap(), 0.0);

        let citywide = stat(&report, Borough::None);
        assert_eq!(citywide.frequency, 2);
        assert_eq!(citywide.total, 3);
        assert_relative_eq!(citywide.proportion.unwrap(), 2.0 / 3.0);
    }

    #[test]
    fn test_borough_rows_in_report_order() {
        let engine = maple_oak_engine();
        let report = engine.lookup("oak").unwrap();

        let order: Vec<Borough> = report.boroughs.iter().map(|stat| stat.borough).collect();
        assert_eq!(order, Borough::ALL);
    }

    #[test]
    fn test_no_match_returns_none() {
        let engine = maple_oak_engine();
        assert!(engine.lookup("zzz").is_none());
    }

    #[test]
    fn test_latin_only_match_displays_latin_name() {
        let engine = maple_oak_engine();
        let report = engine.lookup("quercus").unwrap();

        // Matched through the Latin name, so that is the display string
        assert_eq!(report.matched_names, vec!["Quercus alba"]);
        assert_eq!(stat(&report, Borough::Queens).frequency, 1);
    }

    #[test]
    fn test_species_matching_by_both_names_listed_twice_counted_once() {
        let engine = ReportEngine::new(CensusData::from_records([record(
            10,
            "London Planetree",
            "Platanus x acerifolia",
            Borough::Brooklyn,
        )]));

        let report = engine.lookup("pla").unwrap();

        // Two display lines, sorted ordinally
        assert_eq!(
            report.matched_names,
            vec!["London Planetree", "Platanus x acerifolia"]
        );
        // One aggregation: the single tree is not double counted
        assert_eq!(stat(&report, Borough::Brooklyn).frequency, 1);
        assert_eq!(stat(&report, Borough::None).frequency, 1);
    }

    #[test]
    fn test_empty_keyword_matches_everything() {
        let engine = maple_oak_engine();
        let report = engine.lookup("").unwrap();

        assert_eq!(
            report.matched_names,
            vec!["Acer rubrum", "Quercus alba", "Red Maple", "White Oak"]
        );
        let citywide = stat(&report, Borough::None);
        assert_eq!(citywide.frequency, 3);
        assert_eq!(citywide.total, 3);
    }

    #[test]
    fn test_zero_total_borough_has_no_proportion() {
        let engine = maple_oak_engine();
        let report = engine.lookup("maple").unwrap();

        let bronx = stat(&report, Borough::Bronx);
        assert_eq!(bronx.frequency, 0);
        assert_eq!(bronx.total, 0);
        assert!(bronx.proportion.is_none());
    }

    #[test]
    fn test_counts_keyed_by_latin_name() {
        // Two species share a common name but differ in Latin name; a common
        // name match must still count each species through its own Latin key.
        let engine = ReportEngine::new(CensusData::from_records([
            record(1, "Hawthorn", "Crataegus monogyna", Borough::Bronx),
            record(2, "Hawthorn", "Crataegus viridis", Borough::Bronx),
        ]));

        let report = engine.lookup("hawthorn").unwrap();
        assert_eq!(report.matched_names, vec!["Hawthorn"]);
        assert_eq!(stat(&report, Borough::Bronx).frequency, 2);
    }
}
