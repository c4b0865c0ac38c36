//! JSON hand-off loader
//!
//! The upstream IR producer serializes one program per document:
//!
//! ```json
//! {
//!   "functions": [
//!     { "package": "command-line-arguments", "name": "main",
//!       "blocks": [ { "index": 0, "instructions": [
//!         { "kind": "alloc", "name": "t0", "comment": "i", "pos": 120, "text": "new int (i)" }
//!       ] } ] }
//!   ]
//! }
//! ```
//!
//! Any failure here is an input-construction error: the run aborts and no
//! partial report is produced.

use crate::errors::Result;
use crate::features::program_model::domain::{Function, Instruction, Program};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialized program document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramDocument {
    #[serde(default)]
    pub functions: Vec<Function>,
}

impl ProgramDocument {
    /// Validate into a `Program`
    pub fn into_program(mut self) -> Result<Program> {
        for block in self.functions.iter_mut().flat_map(|f| f.blocks.iter_mut()) {
            block.instructions.iter_mut().for_each(Instruction::ensure_text);
        }
        Program::new(self.functions)
    }
}

impl Program {
    /// Parse and validate a program from a JSON string
    pub fn from_json_str(json: &str) -> Result<Program> {
        let document: ProgramDocument = serde_json::from_str(json)?;
        let program = document.into_program()?;
        tracing::debug!("Loaded program with {} functions", program.len());
        Ok(program)
    }

    /// Parse and validate a program from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Program> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        tracing::info!("Loading program from {}", path.display());
        Self::from_json_str(&contents)
    }

    /// Serialize back into the hand-off format
    pub fn to_json(&self) -> Result<String> {
        let document = ProgramDocument {
            functions: self.functions().to_vec(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
