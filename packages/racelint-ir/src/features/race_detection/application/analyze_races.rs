//! Race Analysis Use Case
//!
//! Lock-set race detection over goroutine-like spawned units.
//!
//! ## Algorithm
//! 1. Select the root functions from the configured policy
//! 2. Prepass: alias map + concurrent-unit registry over the whole program
//! 3. Scan the roots in order, comparing every access against the history
//! 4. Sort the reports and summarize by severity
//!
//! ## Performance
//! - Time: O(I + F log F + Σ_v n_v²) where n_v = accesses to variable v
//! - Space: O(A) where A = number of recorded accesses

use crate::config::{AnalysisConfig, RootSelection, Validatable};
use crate::errors::Result;
use crate::features::alias_resolution::ScopeScanner;
use crate::features::program_model::Program;
use crate::features::race_detection::{
    sort_races, AnalysisError, AnalysisResult, RaceAnalyzerPort, RaceDetector, RaceSeverity,
    ReportedRace,
};
use crate::shared::models::{FunctionId, VarId};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Analyze a program for potential data races
///
/// High-level use case: root selection, prepass, detection and reporting.
pub struct RaceAnalysisUseCase {
    config: AnalysisConfig,
}

impl RaceAnalysisUseCase {
    /// Create a use case with a validated configuration
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Derive the root set from the configured policy
    ///
    /// - `EntryPoint`: the entry, then its direct function literals in
    ///   declaration order. A missing entry is an error.
    /// - `Explicit`: the listed functions that exist, in the given order.
    ///   Missing ones are skipped with a warning; if none exist it is an error.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn select_roots(&self, program: &Program) -> AnalysisResult<Vec<FunctionId>> {
        let roots = match &self.config.roots {
            RootSelection::EntryPoint { entry } => {
                if !program.contains(entry) {
                    return Err(AnalysisError::EntryPointNotFound(entry.clone()));
                }
                std::iter::once(entry.clone())
                    .chain(program.closures_of(entry).map(|f| f.id.clone()))
                    .collect::<Vec<_>>()
            }
            RootSelection::Explicit { functions } => {
                let present: Vec<FunctionId> = functions
                    .iter()
                    .filter(|id| {
                        let exists = program.contains(id);
                        if !exists {
                            tracing::warn!("Configured root {} not found in program; skipping", id);
                        }
                        exists
                    })
                    .cloned()
                    .collect();

                if present.is_empty() {
                    return Err(AnalysisError::NoRootsInProgram(functions.clone()));
                }
                present
            }
        };

        let mut seen = FxHashSet::default();
        Ok(roots.into_iter().filter(|id| seen.insert(id.clone())).collect())
    }

    /// Run the full analysis with the configured root policy
    pub fn analyze(&self, program: &Program) -> Result<RaceAnalysisReport> {
        let roots = self.select_roots(program)?;
        let races = self.analyze_roots(program, &roots);
        let summary = self.get_summary(&races);

        tracing::info!(
            "Race analysis complete: {} roots, {} races ({} critical, {} high, {} low)",
            roots.len(),
            summary.total_races,
            summary.critical,
            summary.high,
            summary.low
        );

        Ok(RaceAnalysisReport {
            roots,
            races,
            summary,
        })
    }

    /// Run the analysis over exactly these roots
    ///
    /// Reports come back sorted.
    pub fn analyze_roots(&self, program: &Program, roots: &[FunctionId]) -> Vec<ReportedRace> {
        let facts = ScopeScanner::new(&self.config).scan(program);
        let mut detector = RaceDetector::new(program, &facts, &self.config.sync);

        let mut races = detector.analyze(roots);
        sort_races(&mut races);
        races
    }

    /// Load a JSON program and analyze it
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<RaceAnalysisReport> {
        let program = Program::from_json_file(path)?;
        self.analyze(&program)
    }

    /// Get summary statistics
    pub fn get_summary(&self, races: &[ReportedRace]) -> RaceSummary {
        let mut critical = 0;
        let mut high = 0;
        let mut low = 0;

        for race in races {
            match race.severity {
                RaceSeverity::Critical => critical += 1,
                RaceSeverity::High => high += 1,
                RaceSeverity::Low => low += 1,
            }
        }

        RaceSummary {
            total_races: races.len(),
            critical,
            high,
            low,
        }
    }
}

impl Default for RaceAnalysisUseCase {
    fn default() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }
}

impl RaceAnalyzerPort for RaceAnalysisUseCase {
    fn analyze_program(&self, program: &Program) -> Result<Vec<ReportedRace>> {
        Ok(self.analyze(program)?.races)
    }

    fn analyze_roots(&self, program: &Program, roots: &[FunctionId]) -> Vec<ReportedRace> {
        RaceAnalysisUseCase::analyze_roots(self, program, roots)
    }
}

/// Race analysis summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceSummary {
    pub total_races: usize,
    pub critical: usize,
    pub high: usize,
    pub low: usize,
}

/// Result of one analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceAnalysisReport {
    /// Roots actually scanned, in scan order
    pub roots: Vec<FunctionId>,

    /// Reports in stable order
    pub races: Vec<ReportedRace>,

    pub summary: RaceSummary,
}

impl RaceAnalysisReport {
    pub fn has_races(&self) -> bool {
        !self.races.is_empty()
    }

    /// Reports on one canonical variable
    pub fn races_on<'a>(&'a self, variable: &'a VarId) -> impl Iterator<Item = &'a ReportedRace> + 'a {
        self.races.iter().filter(move |r| &r.variable == variable)
    }
}
