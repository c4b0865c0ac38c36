//! Shared models used by every feature slice
//!
//! - `models/` : identities (`FunctionId`, `VarId`) and source positions (`Pos`)

pub mod models;
