//! Configuration I/O (YAML loading)
//!
//! Defines the YAML schema types. Loading and export live on
//! `AnalysisConfig` in analysis_config.rs.

use super::analysis_config::{RootSelection, SyncConfig};
use serde::{Deserialize, Serialize};

/// Schema versions this build understands
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
///
/// ```yaml
/// version: 1
/// roots:
///   mode: entry_point
///   entry: { package: command-line-arguments, name: main }
/// packages: [command-line-arguments]
/// sync:
///   mutex_types: ["*sync.Mutex"]
///   lock_method: Lock
///   unlock_method: Unlock
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1); optional only so a missing value
    /// can be reported with a dedicated error
    #[serde(default)]
    pub version: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roots: Option<RootSelection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync: Option<SyncConfig>,
}
