/// Core race detection models
use crate::shared::models::{FunctionId, Pos, VarId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Variable access type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AccessKind {
    /// Load through a pointer dereference (e.g., `*t0`)
    Read,
    /// Store (e.g., `*t0 = t3`)
    Write,
}

impl AccessKind {
    pub fn is_write(&self) -> bool {
        matches!(self, AccessKind::Write)
    }

    pub fn is_read(&self) -> bool {
        matches!(self, AccessKind::Read)
    }
}

/// Race severity
///
/// Informational only: the conflict decision ignores access kinds, so a
/// read/read pair is still reported (with `Low`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RaceSeverity {
    /// Read-Read
    Low,
    /// Read-Write
    High,
    /// Write-Write (most severe)
    Critical,
}

impl RaceSeverity {
    /// Determine severity from two access kinds
    pub fn from_accesses(a: AccessKind, b: AccessKind) -> Self {
        match (a.is_write(), b.is_write()) {
            (true, true) => RaceSeverity::Critical,
            (true, false) | (false, true) => RaceSeverity::High,
            (false, false) => RaceSeverity::Low,
        }
    }
}

/// Lock-set snapshot stored with an access
pub type LockSnapshot = BTreeSet<VarId>;

/// One recorded access to a canonical variable
///
/// Immutable once appended to the history; `lock_set` is a copy taken at
/// access time, so later lock/unlock calls never change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRecord {
    pub function: FunctionId,
    pub block: usize,
    pub position: Pos,
    /// Canonical variable identity
    pub variable: VarId,
    pub kind: AccessKind,
    pub lock_set: LockSnapshot,
    /// Rendering of the accessing instruction
    pub instruction: String,
}

impl AccessRecord {
    pub fn is_write(&self) -> bool {
        self.kind.is_write()
    }

    pub fn is_read(&self) -> bool {
        self.kind.is_read()
    }

    /// First lock held by both accesses, if any
    pub fn common_lock<'a>(&'a self, other: &AccessRecord) -> Option<&'a VarId> {
        self.lock_set.iter().find(|lock| other.lock_set.contains(*lock))
    }
}
