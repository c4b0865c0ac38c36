/// Instruction model
///
/// A tagged variant over the handful of SSA instruction shapes the race
/// engine cares about. Everything else the producer emits is carried as
/// `Other` so positions and renderings stay intact.
use crate::shared::models::{FunctionId, Pos};
use serde::{Deserialize, Serialize};

/// Unary operator of an `UnOp` instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Pointer dereference (`*x`), i.e. a load from an address
    #[serde(rename = "*")]
    Deref,
    #[serde(rename = "-")]
    Neg,
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "^")]
    Xor,
    /// Channel receive (`<-ch`), not modeled as synchronization
    #[serde(rename = "<-")]
    Recv,
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deref => "*",
            Self::Neg => "-",
            Self::Not => "!",
            Self::Xor => "^",
            Self::Recv => "<-",
        }
    }
}

/// Instruction variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InstructionKind {
    /// Allocation of a local (`t0 = local int (i)`)
    Alloc {
        /// Compiler-generated temporary name (`t0`)
        name: String,
        /// Declared variable name, when the source had one (`i`)
        #[serde(default)]
        comment: Option<String>,
    },

    /// Closure materialization with captured bindings
    MakeClosure {
        func: FunctionId,
        /// Operand names captured, in binding order
        #[serde(default)]
        bindings: Vec<String>,
    },

    /// Spawn of a concurrently executing unit
    Go {
        /// Statically resolved callee, absent for dynamic calls
        #[serde(default)]
        callee: Option<FunctionId>,
    },

    /// Function or method call
    Call {
        #[serde(default)]
        callee: Option<FunctionId>,
        /// Declared type of the receiver for method calls (`*sync.Mutex`)
        #[serde(default)]
        receiver_type: Option<String>,
        /// Invoked operation name (`Lock`)
        method: String,
        /// Argument operand names; the receiver comes first for methods
        #[serde(default)]
        args: Vec<String>,
    },

    /// Store through an address (`*t0 = t3`)
    Store { addr: String, value: String },

    /// Unary operation (`*t0`, `-t2`, ...)
    UnOp { op: UnaryOp, operand: String },

    /// Anything else the producer emitted
    Other,
}

/// Memory access performed by an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryAccess<'a> {
    /// Load through a pointer dereference of the named address
    Load(&'a str),
    /// Store to the named address
    Store(&'a str),
}

impl<'a> MemoryAccess<'a> {
    pub fn address(&self) -> &'a str {
        match self {
            Self::Load(addr) | Self::Store(addr) => addr,
        }
    }
}

/// Method call view (receiver type, operation name, receiver operand)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodCall<'a> {
    pub receiver_type: &'a str,
    pub method: &'a str,
    pub receiver: &'a str,
}

/// One IR instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    #[serde(flatten)]
    pub kind: InstructionKind,

    /// Source position (`Pos::NONE` when unavailable)
    #[serde(default)]
    pub pos: Pos,

    /// Stable textual rendering used in reports
    #[serde(default)]
    pub text: String,
}

impl Instruction {
    /// Build an instruction; the rendering is derived from the kind
    pub fn new(kind: InstructionKind, pos: Pos) -> Self {
        let text = render(&kind);
        Self { kind, pos, text }
    }

    /// Derive the rendering when the producer did not send one
    pub fn ensure_text(&mut self) {
        if self.text.is_empty() {
            self.text = render(&self.kind);
        }
    }

    /// Override the rendering (producers usually have a better one)
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn alloc(pos: u32, name: &str, comment: Option<&str>) -> Self {
        Self::new(
            InstructionKind::Alloc {
                name: name.to_string(),
                comment: comment.map(str::to_string),
            },
            Pos(pos),
        )
    }

    pub fn make_closure(pos: u32, func: FunctionId, bindings: &[&str]) -> Self {
        Self::new(
            InstructionKind::MakeClosure {
                func,
                bindings: bindings.iter().map(|b| b.to_string()).collect(),
            },
            Pos(pos),
        )
    }

    pub fn go(pos: u32, callee: Option<FunctionId>) -> Self {
        Self::new(InstructionKind::Go { callee }, Pos(pos))
    }

    /// Method call with `receiver` as the first argument
    pub fn method_call(pos: u32, receiver_type: &str, method: &str, receiver: &str) -> Self {
        Self::new(
            InstructionKind::Call {
                callee: None,
                receiver_type: Some(receiver_type.to_string()),
                method: method.to_string(),
                args: vec![receiver.to_string()],
            },
            Pos(pos),
        )
    }

    /// Plain function call
    pub fn call(pos: u32, callee: FunctionId, args: &[&str]) -> Self {
        let method = callee.name.clone();
        Self::new(
            InstructionKind::Call {
                callee: Some(callee),
                receiver_type: None,
                method,
                args: args.iter().map(|a| a.to_string()).collect(),
            },
            Pos(pos),
        )
    }

    pub fn store(pos: u32, addr: &str, value: &str) -> Self {
        Self::new(
            InstructionKind::Store {
                addr: addr.to_string(),
                value: value.to_string(),
            },
            Pos(pos),
        )
    }

    pub fn unop(pos: u32, op: UnaryOp, operand: &str) -> Self {
        Self::new(
            InstructionKind::UnOp {
                op,
                operand: operand.to_string(),
            },
            Pos(pos),
        )
    }

    /// Load through a pointer (`*addr`)
    pub fn deref(pos: u32, addr: &str) -> Self {
        Self::unop(pos, UnaryOp::Deref, addr)
    }

    pub fn other(pos: u32, text: &str) -> Self {
        Self::new(InstructionKind::Other, Pos(pos)).with_text(text)
    }

    /// Operand names this instruction refers to
    pub fn operands(&self) -> Vec<&str> {
        match &self.kind {
            InstructionKind::Alloc { .. } | InstructionKind::Go { .. } | InstructionKind::Other => {
                Vec::new()
            }
            InstructionKind::MakeClosure { bindings, .. } => {
                bindings.iter().map(String::as_str).collect()
            }
            InstructionKind::Call { args, .. } => args.iter().map(String::as_str).collect(),
            InstructionKind::Store { addr, value } => vec![addr.as_str(), value.as_str()],
            InstructionKind::UnOp { operand, .. } => vec![operand.as_str()],
        }
    }

    /// Memory access, if this instruction reads or writes through an address
    ///
    /// Only the dereference form of `UnOp` counts as a read: a plain value
    /// use that never goes through a pointer is not a tracked access.
    pub fn memory_access(&self) -> Option<MemoryAccess<'_>> {
        match &self.kind {
            InstructionKind::Store { addr, .. } => Some(MemoryAccess::Store(addr)),
            InstructionKind::UnOp {
                op: UnaryOp::Deref,
                operand,
            } => Some(MemoryAccess::Load(operand)),
            _ => None,
        }
    }

    /// Method call view; `None` for non-calls and receiver-less calls
    pub fn method_call_view(&self) -> Option<MethodCall<'_>> {
        match &self.kind {
            InstructionKind::Call {
                receiver_type: Some(receiver_type),
                method,
                args,
                ..
            } => args.first().map(|receiver| MethodCall {
                receiver_type,
                method,
                receiver,
            }),
            _ => None,
        }
    }
}

fn render(kind: &InstructionKind) -> String {
    match kind {
        InstructionKind::Alloc { name, comment } => match comment {
            Some(comment) => format!("{} = local ({})", name, comment),
            None => format!("{} = local", name),
        },
        InstructionKind::MakeClosure { func, bindings } => {
            format!("make closure {} [{}]", func.name, bindings.join(", "))
        }
        InstructionKind::Go { callee } => match callee {
            Some(callee) => format!("go {}()", callee.name),
            None => "go <dynamic>()".to_string(),
        },
        InstructionKind::Call {
            receiver_type,
            method,
            args,
            ..
        } => match receiver_type {
            Some(recv) => format!("({}).{}({})", recv, method, args.join(", ")),
            None => format!("{}({})", method, args.join(", ")),
        },
        InstructionKind::Store { addr, value } => format!("*{} = {}", addr, value),
        InstructionKind::UnOp { op, operand } => format!("{}{}", op.as_str(), operand),
        InstructionKind::Other => String::new(),
    }
}
