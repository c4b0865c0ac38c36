//! Alias map and canonical resolution
//!
//! ## Entries
//! - Allocation `t0 = local (i)` in `p.main` block 0:
//!   `p.main.0.i → Terminal`, `p.main.0.t0 → p.main.0.i`
//! - Capture of `t0` by closure `main$1`:
//!   `p.main$1.0.i → p.main.0.i`
//!
//! ## Invariant
//! Chains are acyclic: a new entry only ever points at an identity that was
//! already resolved when the entry was built. `resolve` still carries a hop
//! bound so a corrupted map degrades to a partial answer instead of a hang.

use crate::shared::models::{FunctionId, VarId};
use rustc_hash::FxHashMap;

/// Right-hand side of an alias entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AliasTarget {
    /// The key is itself canonical
    Terminal,
    /// The key stands for another identity
    Alias(VarId),
}

/// Local access token → canonical identity
#[derive(Debug, Clone, Default)]
pub struct AliasMap {
    entries: FxHashMap<VarId, AliasTarget>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the two entries of an allocation
    ///
    /// Without a declared name the temporary itself becomes canonical.
    pub fn register_allocation(
        &mut self,
        func: &FunctionId,
        block: usize,
        temporary: &str,
        declared: Option<&str>,
    ) {
        match declared {
            Some(declared) if !declared.is_empty() => {
                let canonical = func.local(block, declared);
                self.entries
                    .insert(func.local(block, temporary), AliasTarget::Alias(canonical.clone()));
                self.entries.insert(canonical, AliasTarget::Terminal);
            }
            _ => {
                self.entries
                    .insert(func.local(block, temporary), AliasTarget::Terminal);
            }
        }
    }

    /// Register a closure-captured binding
    ///
    /// `binding` is the operand name in the enclosing scope. The closure sees
    /// the variable under its bare name in its entry block, so the new key is
    /// `(package, closure, 0, canonical.name)`.
    ///
    /// Returns the canonical identity the capture points at.
    pub fn register_capture(
        &mut self,
        enclosing: &FunctionId,
        block: usize,
        binding: &str,
        closure: &FunctionId,
    ) -> VarId {
        let canonical = self.resolve(&enclosing.local(block, binding));
        let key = closure.local(0, canonical.name.clone());

        // A self-pointing entry would break termination; keep it terminal.
        if key == canonical {
            self.entries.entry(key).or_insert(AliasTarget::Terminal);
        } else {
            self.entries
                .insert(key, AliasTarget::Alias(canonical.clone()));
        }
        canonical
    }

    /// Follow aliases until a lookup misses or reaches a terminal entry
    pub fn resolve(&self, local: &VarId) -> VarId {
        let mut current = local;
        // Each hop visits a distinct entry on an acyclic map.
        let mut budget = self.entries.len() + 1;

        while let Some(AliasTarget::Alias(next)) = self.entries.get(current) {
            if budget == 0 {
                tracing::warn!("Alias chain from {} exceeded map size; stopping at {}", local, current);
                break;
            }
            budget -= 1;
            current = next;
        }

        current.clone()
    }

    /// Resolve an operand of `func` in `block`
    pub fn resolve_operand(&self, func: &FunctionId, block: usize, operand: &str) -> VarId {
        self.resolve(&func.local(block, operand))
    }

    pub fn get(&self, key: &VarId) -> Option<&AliasTarget> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
