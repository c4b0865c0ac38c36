//! Custom assertions for test verification
//!
//! This module provides domain-specific assertions for race reports.

use racelint_ir::features::race_detection::ReportedRace;
use racelint_ir::shared::models::{FunctionId, VarId};

/// Assert that no race was reported
pub fn assert_no_races(races: &[ReportedRace]) {
    assert!(
        races.is_empty(),
        "Expected no races, got: {:?}",
        races.iter().map(|r| r.description()).collect::<Vec<_>>()
    );
}

/// Assert the exact number of reports
pub fn assert_race_count(races: &[ReportedRace], expected: usize) {
    assert_eq!(
        races.len(),
        expected,
        "Expected {expected} races, got {}: {:?}",
        races.len(),
        races.iter().map(|r| r.description()).collect::<Vec<_>>()
    );
}

/// Assert that at least one report names `variable`
pub fn assert_race_on(races: &[ReportedRace], variable: &VarId) {
    assert!(
        races.iter().any(|r| &r.variable == variable),
        "Expected a race on {variable}, got: {:?}",
        races.iter().map(|r| r.variable.to_string()).collect::<Vec<_>>()
    );
}

/// Assert that every report involves two distinct functions
pub fn assert_cross_function(races: &[ReportedRace]) {
    for race in races {
        assert_ne!(
            race.access.function, race.conflicting_access.function,
            "Race within one function: {}",
            race.description()
        );
    }
}

/// Assert that every report has one side in `func`
pub fn assert_all_involve(races: &[ReportedRace], func: &FunctionId) {
    for race in races {
        assert!(race.involves(func), "{} does not involve {func}", race.description());
    }
}
