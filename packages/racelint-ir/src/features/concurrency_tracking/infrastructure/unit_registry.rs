//! Concurrent-unit registry
//!
//! Filled by the prepass (`ScopeScanner`) and read-only afterwards. A unit
//! spawned from several sites keeps the first creation record it was given.

use crate::features::concurrency_tracking::domain::CreationRecord;
use crate::shared::models::{FunctionId, Pos};
use rustc_hash::FxHashMap;

/// Spawned functions and their creation sites
#[derive(Debug, Clone, Default)]
pub struct ConcurrencyRegistry {
    units: FxHashMap<FunctionId, CreationRecord>,
}

impl ConcurrencyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callee` as spawned from `creator`
    ///
    /// Returns `false` when the callee was already registered (first spawn
    /// site wins).
    pub fn register_spawn(
        &mut self,
        callee: FunctionId,
        creator: &FunctionId,
        block: usize,
        position: Pos,
    ) -> bool {
        if self.units.contains_key(&callee) {
            tracing::debug!(
                "{} spawned again from {} at {}; keeping first creation record",
                callee,
                creator,
                position
            );
            return false;
        }
        self.units
            .insert(callee, CreationRecord::new(creator.clone(), block, position));
        true
    }

    pub fn is_concurrent_unit(&self, func: &FunctionId) -> bool {
        self.units.contains_key(func)
    }

    pub fn creation_record_of(&self, func: &FunctionId) -> Option<&CreationRecord> {
        self.units.get(func)
    }

    /// Registered units, sorted for stable output
    pub fn units(&self) -> Vec<&FunctionId> {
        let mut units: Vec<&FunctionId> = self.units.keys().collect();
        units.sort();
        units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
