/// Concurrent unit models
use crate::shared::models::{FunctionId, Pos};
use serde::{Deserialize, Serialize};

/// Where a concurrent unit was spawned
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreationRecord {
    /// Spawning function
    pub creator: FunctionId,
    /// Block of the spawn instruction
    pub block: usize,
    /// Position of the spawn instruction
    pub position: Pos,
}

impl CreationRecord {
    pub fn new(creator: FunctionId, block: usize, position: Pos) -> Self {
        Self {
            creator,
            block,
            position,
        }
    }

    /// Whether an access at `pos` in `func` is ordered before the spawn
    ///
    /// Only accesses in the creator itself can be ordered this way. An
    /// unknown position on either side is answered as ordered, which keeps
    /// the pair out of the report rather than guessing.
    pub fn happens_before_spawn(&self, func: &FunctionId, pos: Pos) -> bool {
        if &self.creator != func {
            return false;
        }
        pos.strictly_before(&self.position).unwrap_or(true)
    }
}
