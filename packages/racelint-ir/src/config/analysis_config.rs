//! Analysis configuration
//!
//! Holds the root selection policy, the package filter for the prepass and
//! the names that identify mutex operations.

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, SUPPORTED_VERSIONS};
use super::validation::Validatable;
use crate::shared::models::FunctionId;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Package name the Go toolchain gives to files passed on the command line
pub const DEFAULT_PACKAGE: &str = "command-line-arguments";

/// Which functions the detector scans for accesses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RootSelection {
    /// Exactly these functions, in this order
    Explicit { functions: Vec<FunctionId> },

    /// `entry` plus every function literal whose parent is `entry`
    ///
    /// One level only: literals nested inside those literals, and functions
    /// merely called from the entry, are not roots.
    EntryPoint { entry: FunctionId },
}

impl Default for RootSelection {
    fn default() -> Self {
        Self::EntryPoint {
            entry: FunctionId::new(DEFAULT_PACKAGE, "main"),
        }
    }
}

/// Names identifying lock and unlock calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    /// Receiver types treated as mutexes (`*sync.Mutex`)
    pub mutex_types: Vec<String>,
    pub lock_method: String,
    pub unlock_method: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            mutex_types: vec!["*sync.Mutex".to_string()],
            lock_method: "Lock".to_string(),
            unlock_method: "Unlock".to_string(),
        }
    }
}

impl SyncConfig {
    pub fn is_mutex_type(&self, type_name: &str) -> bool {
        self.mutex_types.iter().any(|t| t == type_name)
    }
}

impl Validatable for SyncConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.mutex_types.is_empty() || self.mutex_types.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::Range {
                field: "sync.mutex_types".to_string(),
                value: format!("{:?}", self.mutex_types),
                hint: "List at least one non-empty receiver type, e.g. '*sync.Mutex'.".to_string(),
            });
        }
        for (field, value) in [
            ("sync.lock_method", &self.lock_method),
            ("sync.unlock_method", &self.unlock_method),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Range {
                    field: field.to_string(),
                    value: format!("{:?}", value),
                    hint: "Method names must not be empty.".to_string(),
                });
            }
        }
        if self.lock_method == self.unlock_method {
            return Err(ConfigError::Range {
                field: "sync.unlock_method".to_string(),
                value: self.unlock_method.clone(),
                hint: "Lock and unlock method names must differ.".to_string(),
            });
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "SyncConfig"
    }
}

/// Complete analysis configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Root selection policy
    pub roots: RootSelection,

    /// Packages scanned by the prepass; empty means every function
    pub packages: Vec<String>,

    /// Mutex operation names
    pub sync: SyncConfig,
}

impl AnalysisConfig {
    /// Entry point convention with a different entry function
    pub fn with_entry(mut self, entry: FunctionId) -> Self {
        self.roots = RootSelection::EntryPoint { entry };
        self
    }

    /// Explicit root list
    pub fn with_roots(mut self, functions: Vec<FunctionId>) -> Self {
        self.roots = RootSelection::Explicit { functions };
        self
    }

    /// Restrict the prepass to these packages
    pub fn with_packages<I, S>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.packages = packages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sync(mut self, sync: SyncConfig) -> Self {
        self.sync = sync;
        self
    }

    /// Whether functions of `package` take part in the prepass
    pub fn includes_package(&self, package: &str) -> bool {
        self.packages.is_empty() || self.packages.iter().any(|p| p == package)
    }

    /// Load from a YAML v1 file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Load from a YAML v1 string
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(yaml)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let defaults = Self::default();
        let config = Self {
            roots: export.roots.unwrap_or(defaults.roots),
            packages: export.packages.unwrap_or(defaults.packages),
            sync: export.sync.unwrap_or(defaults.sync),
        };
        config.validate()?;
        Ok(config)
    }

    /// Export as YAML v1
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            roots: Some(self.roots.clone()),
            packages: Some(self.packages.clone()),
            sync: Some(self.sync.clone()),
        };
        Ok(serde_yaml::to_string(&export)?)
    }
}

impl Validatable for AnalysisConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let RootSelection::Explicit { functions } = &self.roots {
            if functions.is_empty() {
                return Err(ConfigError::EmptyRoots);
            }
        }
        if let Some(empty) = self.packages.iter().find(|p| p.trim().is_empty()) {
            return Err(ConfigError::Range {
                field: "packages".to_string(),
                value: format!("{:?}", empty),
                hint: "Remove empty package names; an empty list means all packages.".to_string(),
            });
        }
        self.sync.validate()
    }

    fn config_name(&self) -> &'static str {
        "AnalysisConfig"
    }
}
