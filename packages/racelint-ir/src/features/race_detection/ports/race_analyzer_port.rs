/// Race analyzer port trait
use crate::errors::Result;
use crate::features::program_model::Program;
use crate::features::race_detection::ReportedRace;
use crate::shared::models::FunctionId;

/// Port trait for race analyzers
///
/// Allows for different implementations (e.g., lock-set, vector-clock).
pub trait RaceAnalyzerPort {
    /// Analyze the roots selected by the analyzer's own policy
    fn analyze_program(&self, program: &Program) -> Result<Vec<ReportedRace>>;

    /// Analyze exactly the given roots, in order
    fn analyze_roots(&self, program: &Program, roots: &[FunctionId]) -> Vec<ReportedRace>;
}
