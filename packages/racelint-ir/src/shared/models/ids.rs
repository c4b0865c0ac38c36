//! Identity types
//!
//! `FunctionId` names a function (top-level or literal) inside a package.
//! `VarId` is the canonical variable identity every alias resolves to. Both
//! are plain value types: equality, hashing and ordering are structural, so a
//! name containing a `.` can never collide with another identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fully-qualified function identity `(package, name)`
///
/// Function literals get synthetic names from the producer (e.g. `main$1`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FunctionId {
    pub package: String,
    pub name: String,
}

impl FunctionId {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Local access token for `operand` inside `block` of this function
    pub fn local(&self, block: usize, operand: impl Into<String>) -> VarId {
        VarId {
            package: self.package.clone(),
            function: self.name.clone(),
            block,
            name: operand.into(),
        }
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.package, self.name)
    }
}

/// Variable identity `(package, function, block, name)`
///
/// Used both for local access tokens (e.g. a temporary `t0`) and for the
/// canonical identity they resolve to (e.g. the declared variable `i`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VarId {
    pub package: String,
    pub function: String,
    pub block: usize,
    pub name: String,
}

impl VarId {
    pub fn new(
        package: impl Into<String>,
        function: impl Into<String>,
        block: usize,
        name: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            function: function.into(),
            block,
            name: name.into(),
        }
    }

    /// Owning function of this identity
    pub fn function_id(&self) -> FunctionId {
        FunctionId::new(self.package.clone(), self.function.clone())
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.package, self.function, self.block, self.name
        )
    }
}
