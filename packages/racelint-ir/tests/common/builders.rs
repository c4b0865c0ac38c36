//! Test data builders
//!
//! This module provides builder patterns for creating programs.

use racelint_ir::config::DEFAULT_PACKAGE;
use racelint_ir::features::program_model::{Function, Instruction, Program};
use racelint_ir::shared::models::FunctionId;

pub const MUTEX: &str = "*sync.Mutex";

/// Function id in the default package
pub fn fid(name: &str) -> FunctionId {
    FunctionId::new(DEFAULT_PACKAGE, name)
}

/// Builder for Program
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    functions: Vec<Function>,
}

impl ProgramBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a function
    pub fn with_function(mut self, function: Function) -> Self {
        self.functions.push(function);
        self
    }

    /// Build the final Program
    pub fn build(self) -> Program {
        Program::new(self.functions).expect("test program must be well formed")
    }
}

/// Builder for Function with automatic positions
///
/// Every emitted instruction takes the next position (step 10). Spawning a
/// closure emits the closure creation and the spawn at one position.
#[derive(Debug)]
pub struct FunctionBuilder {
    id: FunctionId,
    parent: Option<FunctionId>,
    blocks: Vec<Vec<Instruction>>,
    next_pos: u32,
}

impl FunctionBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            id: fid(name),
            parent: None,
            blocks: vec![Vec::new()],
            next_pos: 10,
        }
    }

    /// Function literal nested in `parent`
    pub fn closure(name: &str, parent: &str) -> Self {
        let mut builder = Self::new(name);
        builder.parent = Some(fid(parent));
        builder
    }

    /// Continue numbering from `pos`
    pub fn starting_at(mut self, pos: u32) -> Self {
        self.next_pos = pos;
        self
    }

    /// Current position counter (the position of the next instruction)
    pub fn next_pos(&self) -> u32 {
        self.next_pos
    }

    fn push(mut self, instr: Instruction) -> Self {
        self.next_pos += 10;
        self.blocks
            .last_mut()
            .expect("builder always has a block")
            .push(instr);
        self
    }

    fn pos(&self) -> u32 {
        self.next_pos
    }

    /// `temporary = local (declared)`
    pub fn alloc(self, temporary: &str, declared: &str) -> Self {
        let pos = self.pos();
        self.push(Instruction::alloc(pos, temporary, Some(declared)))
    }

    /// Anonymous allocation
    pub fn alloc_anonymous(self, temporary: &str) -> Self {
        let pos = self.pos();
        self.push(Instruction::alloc(pos, temporary, None))
    }

    /// Create `closure` capturing `bindings`, without spawning it
    pub fn make_closure(self, closure: &str, bindings: &[&str]) -> Self {
        let pos = self.pos();
        self.push(Instruction::make_closure(pos, fid(closure), bindings))
    }

    /// Create `closure` capturing `bindings` and spawn it
    pub fn spawn_closure(mut self, closure: &str, bindings: &[&str]) -> Self {
        let pos = self.pos();
        self.blocks
            .last_mut()
            .expect("builder always has a block")
            .push(Instruction::make_closure(pos, fid(closure), bindings));
        self.push(Instruction::go(pos, Some(fid(closure))))
    }

    /// Spawn a named function
    pub fn spawn(self, callee: &str) -> Self {
        let pos = self.pos();
        self.push(Instruction::go(pos, Some(fid(callee))))
    }

    pub fn call(self, callee: &str) -> Self {
        let pos = self.pos();
        self.push(Instruction::call(pos, fid(callee), &[]))
    }

    pub fn lock(self, receiver: &str) -> Self {
        let pos = self.pos();
        self.push(Instruction::method_call(pos, MUTEX, "Lock", receiver))
    }

    pub fn unlock(self, receiver: &str) -> Self {
        let pos = self.pos();
        self.push(Instruction::method_call(pos, MUTEX, "Unlock", receiver))
    }

    /// `*addr = v`
    pub fn write(self, addr: &str) -> Self {
        let pos = self.pos();
        self.push(Instruction::store(pos, addr, "v"))
    }

    /// `*addr`
    pub fn read(self, addr: &str) -> Self {
        let pos = self.pos();
        self.push(Instruction::deref(pos, addr))
    }

    /// `x = x + 1` through `addr`: dereference then store
    pub fn increment(self, addr: &str) -> Self {
        self.read(addr).write(addr)
    }

    /// Start a new block
    pub fn next_block(mut self) -> Self {
        self.blocks.push(Vec::new());
        self
    }

    /// Build the final Function
    pub fn build(self) -> Function {
        let mut function = Function::new(self.id);
        if let Some(parent) = self.parent {
            function = function.with_parent(parent);
        }
        for block in self.blocks {
            function = function.with_block(block);
        }
        function
    }
}
