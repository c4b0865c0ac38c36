/// Reported race domain model
use super::{AccessKind, AccessRecord, RaceSeverity};
use crate::shared::models::{FunctionId, Pos, VarId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an access happened
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessSite {
    pub function: FunctionId,
    pub block: usize,
    pub position: Pos,
    pub kind: AccessKind,
    pub instruction: String,
}

impl AccessSite {
    /// Stable ordering key (function, block, position)
    pub fn sort_key(&self) -> (&FunctionId, usize, Pos) {
        (&self.function, self.block, self.position)
    }
}

impl From<&AccessRecord> for AccessSite {
    fn from(record: &AccessRecord) -> Self {
        Self {
            function: record.function.clone(),
            block: record.block,
            position: record.position,
            kind: record.kind,
            instruction: record.instruction.clone(),
        }
    }
}

impl fmt::Display for AccessSite {
    /// `package.function.block.position`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.function, self.block, self.position)
    }
}

/// Potential data race between two accesses
///
/// Detected when two accesses to the same canonical variable:
/// 1. belong to different functions
/// 2. at least one of which is a spawned unit
/// 3. are not ordered by the spawn (happens-before)
/// 4. share no lock
///
/// ## Example
/// ```go
/// i := 1
/// go func() { i = i + 3 }()  // spawned unit writes i
/// i = i + 2                 // RACE: creator writes i after the spawn
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportedRace {
    /// Canonical variable both accesses touch
    pub variable: VarId,

    /// The access that triggered the report
    pub access: AccessSite,

    /// The earlier recorded access it conflicts with
    pub conflicting_access: AccessSite,

    pub severity: RaceSeverity,
}

impl ReportedRace {
    pub fn new(access: &AccessRecord, prior: &AccessRecord) -> Self {
        Self {
            variable: access.variable.clone(),
            access: AccessSite::from(access),
            conflicting_access: AccessSite::from(prior),
            severity: RaceSeverity::from_accesses(access.kind, prior.kind),
        }
    }

    pub fn is_write_write(&self) -> bool {
        self.access.kind.is_write() && self.conflicting_access.kind.is_write()
    }

    /// Whether either side of the race is in `func`
    pub fn involves(&self, func: &FunctionId) -> bool {
        &self.access.function == func || &self.conflicting_access.function == func
    }

    /// Stable ordering used when reports are compared or printed
    pub fn sort_key(&self) -> (&VarId, (&FunctionId, usize, Pos), (&FunctionId, usize, Pos)) {
        (
            &self.variable,
            self.access.sort_key(),
            self.conflicting_access.sort_key(),
        )
    }

    /// Get human-readable description
    pub fn description(&self) -> String {
        format!(
            "{:?} race on '{}': {:?} at {} vs {:?} at {}",
            self.severity,
            self.variable,
            self.access.kind,
            self.access,
            self.conflicting_access.kind,
            self.conflicting_access
        )
    }
}

/// Sort reports into their stable order
pub fn sort_races(races: &mut [ReportedRace]) {
    races.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}
