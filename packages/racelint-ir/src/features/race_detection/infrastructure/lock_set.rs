//! Lock-set tracking
//!
//! A lock set is transient and per function: it is reset when the detector
//! enters a root and mutated in program order by lock/unlock calls on a
//! mutex-typed receiver. Stored accesses only ever see a snapshot.

use crate::config::SyncConfig;
use crate::features::program_model::Instruction;
use crate::features::race_detection::domain::LockSnapshot;
use crate::shared::models::VarId;

/// Mutex operation performed by a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockOp {
    Lock,
    Unlock,
}

/// Classify `instr` as a lock/unlock on a configured mutex type
///
/// Returns the operation and the receiver operand name.
pub fn classify_lock_op<'i>(instr: &'i Instruction, sync: &SyncConfig) -> Option<(LockOp, &'i str)> {
    let call = instr.method_call_view()?;
    if !sync.is_mutex_type(call.receiver_type) {
        return None;
    }

    if call.method == sync.lock_method {
        Some((LockOp::Lock, call.receiver))
    } else if call.method == sync.unlock_method {
        Some((LockOp::Unlock, call.receiver))
    } else {
        None
    }
}

/// Locks currently held in one function's linear scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockSet {
    held: LockSnapshot,
}

impl LockSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&mut self, lock: VarId) {
        self.held.insert(lock);
    }

    /// Release `lock`; releasing a lock that is not held is a no-op
    ///
    /// Returns whether the lock was held.
    pub fn release(&mut self, lock: &VarId) -> bool {
        self.held.remove(lock)
    }

    pub fn contains(&self, lock: &VarId) -> bool {
        self.held.contains(lock)
    }

    /// Copy of the held locks for an access record
    pub fn snapshot(&self) -> LockSnapshot {
        self.held.clone()
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}
