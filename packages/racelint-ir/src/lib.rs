/*
 * Racelint IR - Static Data-Race Detection
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (FunctionId, VarId, Pos)
 * - features/    : Vertical slices (program_model → alias_resolution → concurrency_tracking → race_detection)
 * - config/      : Analysis configuration (roots, packages, mutex names; YAML v1)
 * - errors       : Input-construction errors
 *
 * Analysis:
 * - Single pass over the selected roots after a whole-program prepass
 * - Lock-set pruning + spawn-site happens-before pruning
 */

// Crate-level lint configuration
#![allow(clippy::type_complexity)] // Sort keys are nested tuples
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::empty_line_after_doc_comments)] // Doc comment style

pub mod config;
pub mod errors;
pub mod features;
pub mod shared;

pub use config::{AnalysisConfig, RootSelection, SyncConfig};
pub use errors::{RacelintError, Result};
pub use features::program_model::{Block, Function, Instruction, InstructionKind, Program};
pub use features::race_detection::{
    RaceAnalysisReport, RaceAnalysisUseCase, RaceAnalyzerPort, RaceSummary, ReportedRace,
};
pub use shared::models::{FunctionId, Pos, VarId};
