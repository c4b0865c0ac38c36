/// Race analysis setup errors
///
/// Raised only when no meaningful root set can be built. Gaps found while
/// scanning never become errors.
use crate::shared::models::FunctionId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Entry point not found: {0}")]
    EntryPointNotFound(FunctionId),

    #[error("None of the requested roots exist in the program: {}", .0.iter().map(|f| f.to_string()).collect::<Vec<_>>().join(", "))]
    NoRootsInProgram(Vec<FunctionId>),
}

pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;
