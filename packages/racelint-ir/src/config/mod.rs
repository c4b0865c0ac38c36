//! Analysis configuration
//!
//! - Level 1: `AnalysisConfig::default()` (Go conventions: `main` plus the
//!   literals it creates, `*sync.Mutex` with `Lock`/`Unlock`)
//! - Level 2: builder overrides (`with_entry`, `with_roots`, `with_packages`)
//! - Level 3: YAML v1 file
//!
//! # Examples
//!
//! ```rust,ignore
//! use racelint_ir::config::AnalysisConfig;
//! use racelint_ir::shared::models::FunctionId;
//!
//! let config = AnalysisConfig::default()
//!     .with_roots(vec![FunctionId::new("app", "main"), FunctionId::new("app", "worker")]);
//!
//! let config = AnalysisConfig::from_yaml("racelint.yaml")?;
//! ```

pub mod analysis_config;
pub mod error;
pub mod io;
pub mod validation;

// Re-exports
pub use analysis_config::{AnalysisConfig, RootSelection, SyncConfig, DEFAULT_PACKAGE};
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigExportV1;
pub use validation::Validatable;
