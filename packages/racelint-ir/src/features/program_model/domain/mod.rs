/// Program Model Domain
pub mod instruction;
pub mod program;

pub use instruction::*;
pub use program::*;
