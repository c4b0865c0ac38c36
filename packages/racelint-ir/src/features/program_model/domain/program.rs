/// Program, function and block model
use super::Instruction;
use crate::errors::{RacelintError, Result};
use crate::shared::models::FunctionId;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Basic block: instructions in program order
///
/// Control-flow edges are intentionally absent. The engine reads blocks
/// linearly in index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub index: usize,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

impl Block {
    pub fn new(index: usize, instructions: Vec<Instruction>) -> Self {
        Self {
            index,
            instructions,
        }
    }
}

/// Function (top-level or literal)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    #[serde(flatten)]
    pub id: FunctionId,

    /// Enclosing function for function literals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<FunctionId>,

    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Function {
    pub fn new(id: FunctionId) -> Self {
        Self {
            id,
            parent: None,
            blocks: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: FunctionId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Append a block; its index is its position in the function
    pub fn with_block(mut self, instructions: Vec<Instruction>) -> Self {
        let index = self.blocks.len();
        self.blocks.push(Block::new(index, instructions));
        self
    }

    pub fn is_closure(&self) -> bool {
        self.parent.is_some()
    }

    /// All instructions with their block index, blocks in index order
    pub fn instructions(&self) -> impl Iterator<Item = (usize, &Instruction)> + '_ {
        self.blocks
            .iter()
            .flat_map(|block| block.instructions.iter().map(move |i| (block.index, i)))
    }
}

/// Whole program handed over by the IR producer
///
/// Functions keep their declaration order; lookups go through an id index
/// built once at construction.
#[derive(Debug, Clone, Default)]
pub struct Program {
    functions: Vec<Function>,
    index: FxHashMap<FunctionId, usize>,
}

impl Program {
    /// Build and validate a program
    ///
    /// # Errors
    /// - duplicate function ids
    /// - a block whose `index` differs from its position
    /// - a closure whose `parent` is not part of the program
    pub fn new(functions: Vec<Function>) -> Result<Self> {
        let mut index = FxHashMap::default();

        for (slot, func) in functions.iter().enumerate() {
            if index.insert(func.id.clone(), slot).is_some() {
                return Err(RacelintError::invalid_program(format!(
                    "duplicate function '{}'",
                    func.id
                )));
            }

            for (position, block) in func.blocks.iter().enumerate() {
                if block.index != position {
                    return Err(RacelintError::invalid_program(format!(
                        "function '{}': block at position {} has index {}",
                        func.id, position, block.index
                    )));
                }
            }
        }

        for func in &functions {
            if let Some(parent) = &func.parent {
                if !index.contains_key(parent) {
                    return Err(RacelintError::invalid_program(format!(
                        "function '{}' names unknown parent '{}'",
                        func.id, parent
                    )));
                }
            }
        }

        Ok(Self { functions, index })
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn function(&self, id: &FunctionId) -> Option<&Function> {
        self.index.get(id).map(|&slot| &self.functions[slot])
    }

    pub fn contains(&self, id: &FunctionId) -> bool {
        self.index.contains_key(id)
    }

    /// Function literals whose enclosing function is exactly `parent`
    pub fn closures_of(&self, parent: &FunctionId) -> impl Iterator<Item = &Function> + '_ {
        let parent = parent.clone();
        self.functions
            .iter()
            .filter(move |f| f.parent.as_ref() == Some(&parent))
    }

    /// Number of literal levels between `id` and its top-level function
    ///
    /// Stops at the number of functions so a malformed parent cycle cannot
    /// spin forever.
    pub fn nesting_depth(&self, id: &FunctionId) -> usize {
        let mut depth = 0;
        let mut current = self.function(id);
        while let Some(parent) = current.and_then(|f| f.parent.as_ref()) {
            depth += 1;
            if depth >= self.functions.len() {
                break;
            }
            current = self.function(parent);
        }
        depth
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
