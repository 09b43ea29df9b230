//! Report Integration Tests
//!
//! Drives the public API end-to-end over in-memory censuses: ingestion
//! through `CensusData`, keyword resolution and aggregation through
//! `ReportEngine`. The fixtures mirror the species that actually dominate
//! the NYC street tree census.

use approx::assert_relative_eq;
use tree_census::{Borough, BoroughStat, CensusData, Health, ReportEngine, Status, TreeRecord};

fn record(id: i64, common: &str, latin: &str, borough: Borough) -> TreeRecord {
    TreeRecord::new(
        id,
        Status::Alive,
        Health::Good,
        latin,
        common,
        10007,
        borough,
        995_000.0,
        195_000.0,
    )
    .unwrap()
}

fn stat(report: &tree_census::SpeciesReport, borough: Borough) -> &BoroughStat {
    report
        .boroughs
        .iter()
        .find(|stat| stat.borough == borough)
        .unwrap()
}

#[test]
fn test_case_variant_species_scenario() {
    // Two Red Maples in Manhattan recorded with inconsistent casing, plus a
    // White Oak in Queens.
    let data = CensusData::from_records([
        record(1, "Red Maple", "Acer rubrum", Borough::Manhattan),
        record(2, "red maple", "ACER RUBRUM", Borough::Manhattan),
        record(3, "White Oak", "Quercus alba", Borough::Queens),
    ]);

    // Three distinct ids, two distinct species
    assert_eq!(data.store().len(), 3);
    assert_eq!(data.index().len(), 2);

    let engine = ReportEngine::new(data);
    let report = engine.lookup("maple").expect("maple should match");

    assert_eq!(report.matched_names, vec!["Red Maple"]);

    let manhattan = stat(&report, Borough::Manhattan);
    assert_eq!((manhattan.frequency, manhattan.total), (2, 2));
    assert_relative_eq!(manhattan.proportion.unwrap(), 1.0);

    let queens = stat(&report, Borough::Queens);
    assert_eq!((queens.frequency, queens.total), (0, 1));

    let citywide = stat(&report, Borough::None);
    assert_eq!((citywide.frequency, citywide.total), (2, 3));
    assert_relative_eq!(citywide.proportion.unwrap(), 2.0 / 3.0);
}

#[test]
fn test_unmatched_keyword_is_not_found() {
    let engine = ReportEngine::new(CensusData::from_records([record(
        1,
        "Red Maple",
        "Acer rubrum",
        Borough::Manhattan,
    )]));

    assert!(engine.lookup("zzz").is_none());
}

#[test]
fn test_latin_substring_match_shows_latin_name() {
    let engine = ReportEngine::new(CensusData::from_records([
        record(1, "Red Maple", "Acer rubrum", Borough::Manhattan),
        record(2, "White Oak", "Quercus alba", Borough::Queens),
    ]));

    let report = engine.lookup("rubrum").unwrap();
    assert_eq!(report.matched_names, vec!["Acer rubrum"]);
}

#[test]
fn test_keyword_matching_several_species_aggregates_all() {
    let engine = ReportEngine::new(CensusData::from_records([
        record(1, "Red Maple", "Acer rubrum", Borough::Bronx),
        record(2, "Norway Maple", "Acer platanoides", Borough::Bronx),
        record(3, "Norway Maple", "Acer platanoides", Borough::Brooklyn),
        record(4, "White Oak", "Quercus alba", Borough::Queens),
    ]));

    let report = engine.lookup("maple").unwrap();

    // Sorted ordinally
    assert_eq!(report.matched_names, vec!["Norway Maple", "Red Maple"]);
    assert_eq!(stat(&report, Borough::Bronx).frequency, 2);
    assert_eq!(stat(&report, Borough::Brooklyn).frequency, 1);
    assert_eq!(stat(&report, Borough::None).frequency, 3);
}

#[test]
fn test_concrete_borough_counts_sum_to_citywide_total() {
    let data = CensusData::from_records([
        record(1, "Red Maple", "Acer rubrum", Borough::Manhattan),
        record(2, "Red Maple", "Acer rubrum", Borough::Bronx),
        record(3, "White Oak", "Quercus alba", Borough::Brooklyn),
        record(4, "Pin Oak", "Quercus palustris", Borough::Queens),
        record(5, "Willow Oak", "Quercus phellos", Borough::StatenIsland),
    ]);

    let summed: usize = Borough::ALL[1..]
        .iter()
        .map(|&borough| data.store().count_by_borough(borough))
        .sum();
    assert_eq!(summed, data.store().len());
}

#[test]
fn test_report_on_empty_census_has_no_proportions() {
    let engine = ReportEngine::new(CensusData::from_records([record(
        1,
        "Red Maple",
        "Acer rubrum",
        Borough::None,
    )]));

    let report = engine.lookup("maple").unwrap();
    for borough in Borough::ALL[1..].iter() {
        let stat = stat(&report, *borough);
        assert_eq!(stat.total, 0);
        assert!(stat.proportion.is_none());
    }

    // The citywide denominator still exists: one recorded tree
    assert_eq!(stat(&report, Borough::None).total, 1);
}
