//! Source position type
//!
//! Positions are opaque but totally ordered tokens handed over by the IR
//! producer. Within one function they increase monotonically, which makes
//! them a usable proxy for program order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source position (byte offset style token)
///
/// `Pos(0)` is reserved for "no position available".
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Pos(pub u32);

impl Pos {
    /// The "unavailable" position
    pub const NONE: Pos = Pos(0);

    pub fn new(offset: u32) -> Self {
        Self(offset)
    }

    /// Whether the producer attached a real position
    pub fn is_known(&self) -> bool {
        self.0 != 0
    }

    /// Strict ordering that refuses to compare unknown positions
    ///
    /// Returns `None` when either side is `Pos::NONE`.
    pub fn strictly_before(&self, other: &Pos) -> Option<bool> {
        if self.is_known() && other.is_known() {
            Some(self.0 < other.0)
        } else {
            None
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
