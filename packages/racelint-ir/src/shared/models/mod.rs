//! Common models (identities, positions)

pub mod ids;
pub mod position;

pub use ids::{FunctionId, VarId};
pub use position::Pos;
