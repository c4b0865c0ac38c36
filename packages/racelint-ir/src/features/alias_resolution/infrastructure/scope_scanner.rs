//! ScopeScanner - prepass over every function under consideration
//!
//! Builds the alias map and the concurrent-unit registry in one logical scan,
//! before the detector looks at a single access.
//!
//! ## Algorithm
//! 1. Allocations of every function → declared/temporary alias entries
//! 2. Closure captures, enclosing functions first (ascending literal nesting
//!    depth, declaration order within a depth), so a capture always resolves
//!    against entries that already exist
//! 3. Spawns → concurrent units with their creation records
//!
//! Splitting the scan into phases makes forward references resolve no matter
//! in which order the producer listed the functions.
//!
//! ## Performance
//! - Time: O(I + F log F) where I = instructions, F = functions
//! - Space: O(A + C + S) alias, capture and spawn entries

use crate::config::AnalysisConfig;
use crate::features::alias_resolution::domain::AliasMap;
use crate::features::concurrency_tracking::ConcurrencyRegistry;
use crate::features::program_model::{Function, InstructionKind, Program};

/// Result of the prepass
#[derive(Debug, Clone, Default)]
pub struct ProgramFacts {
    pub aliases: AliasMap,
    pub units: ConcurrencyRegistry,
}

/// Prepass scanner
pub struct ScopeScanner<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> ScopeScanner<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Scan `program` and return its alias map and unit registry
    pub fn scan(&self, program: &Program) -> ProgramFacts {
        let functions: Vec<&Function> = program
            .functions()
            .iter()
            .filter(|f| self.config.includes_package(&f.id.package))
            .collect();

        let mut facts = ProgramFacts::default();

        self.register_allocations(&functions, &mut facts.aliases);

        let mut by_depth = functions.clone();
        by_depth.sort_by_key(|f| program.nesting_depth(&f.id));
        self.register_captures(&by_depth, &mut facts.aliases);

        self.register_spawns(&functions, &mut facts);

        tracing::debug!(
            "Prepass over {} functions: {} alias entries, {} concurrent units",
            functions.len(),
            facts.aliases.len(),
            facts.units.len()
        );

        facts
    }

    fn register_allocations(&self, functions: &[&Function], aliases: &mut AliasMap) {
        for func in functions {
            for (block, instr) in func.instructions() {
                if let InstructionKind::Alloc { name, comment } = &instr.kind {
                    aliases.register_allocation(&func.id, block, name, comment.as_deref());
                }
            }
        }
    }

    fn register_captures(&self, functions: &[&Function], aliases: &mut AliasMap) {
        for func in functions {
            for (block, instr) in func.instructions() {
                if let InstructionKind::MakeClosure {
                    func: closure,
                    bindings,
                } = &instr.kind
                {
                    for binding in bindings {
                        let canonical = aliases.register_capture(&func.id, block, binding, closure);
                        tracing::trace!("{} captures {} as {}", closure, binding, canonical);
                    }
                }
            }
        }
    }

    fn register_spawns(&self, functions: &[&Function], facts: &mut ProgramFacts) {
        for func in functions {
            for (block, instr) in func.instructions() {
                if let InstructionKind::Go { callee } = &instr.kind {
                    match callee {
                        Some(callee) => {
                            facts
                                .units
                                .register_spawn(callee.clone(), &func.id, block, instr.pos);
                        }
                        None => {
                            tracing::debug!(
                                "Unresolved spawn callee in {} at {}; skipping",
                                func.id,
                                instr.pos
                            );
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::program_model::Instruction;
    use crate::shared::models::{FunctionId, Pos};

    const PKG: &str = "command-line-arguments";

    fn fid(name: &str) -> FunctionId {
        FunctionId::new(PKG, name)
    }

    /// main allocates `i` and `l`, captures both into main$1 and spawns it
    fn sample_functions() -> Vec<Function> {
        let main = Function::new(fid("main")).with_block(vec![
            Instruction::alloc(10, "t0", Some("l")),
            Instruction::alloc(12, "t1", Some("i")),
            Instruction::store(14, "t1", "1:int"),
            Instruction::make_closure(20, fid("main$1"), &["t0", "t1"]),
            Instruction::go(20, Some(fid("main$1"))),
        ]);
        let closure = Function::new(fid("main$1"))
            .with_parent(fid("main"))
            .with_block(vec![Instruction::store(30, "i", "t5")]);
        vec![main, closure]
    }

    #[test]
    fn test_scan_builds_aliases_and_units() {
        let program = Program::new(sample_functions()).unwrap();
        let config = AnalysisConfig::default();
        let facts = ScopeScanner::new(&config).scan(&program);

        assert_eq!(
            facts.aliases.resolve_operand(&fid("main"), 0, "t1"),
            fid("main").local(0, "i")
        );
        assert_eq!(
            facts.aliases.resolve_operand(&fid("main$1"), 0, "i"),
            fid("main").local(0, "i")
        );
        assert_eq!(
            facts.aliases.resolve_operand(&fid("main$1"), 0, "l"),
            fid("main").local(0, "l")
        );

        assert!(facts.units.is_concurrent_unit(&fid("main$1")));
        assert!(!facts.units.is_concurrent_unit(&fid("main")));
        let record = facts.units.creation_record_of(&fid("main$1")).unwrap();
        assert_eq!(record.creator, fid("main"));
        assert_eq!(record.position, Pos(20));
    }

    #[test]
    fn test_forward_reference_order_independent() {
        // Closures listed before their enclosing function, nested one first
        let mut functions = sample_functions();
        let nested = Function::new(fid("main$1$1"))
            .with_parent(fid("main$1"))
            .with_block(vec![Instruction::deref(40, "i")]);
        functions[1] = Function::new(fid("main$1"))
            .with_parent(fid("main"))
            .with_block(vec![
                Instruction::store(30, "i", "t5"),
                Instruction::make_closure(35, fid("main$1$1"), &["i"]),
            ]);
        functions.reverse();
        functions.insert(0, nested);

        let program = Program::new(functions).unwrap();
        let config = AnalysisConfig::default();
        let facts = ScopeScanner::new(&config).scan(&program);

        assert_eq!(
            facts.aliases.resolve_operand(&fid("main$1$1"), 0, "i"),
            fid("main").local(0, "i")
        );
    }

    #[test]
    fn test_package_filter_limits_scan() {
        let mut functions = sample_functions();
        functions.push(
            Function::new(FunctionId::new("lib", "helper")).with_block(vec![
                Instruction::alloc(5, "t0", Some("x")),
                Instruction::go(6, Some(FunctionId::new("lib", "spin"))),
            ]),
        );
        let program = Program::new(functions).unwrap();
        let config = AnalysisConfig::default().with_packages([PKG]);
        let facts = ScopeScanner::new(&config).scan(&program);

        assert!(!facts.units.is_concurrent_unit(&FunctionId::new("lib", "spin")));
        assert!(facts.units.is_concurrent_unit(&fid("main$1")));
        assert!(facts
            .aliases
            .get(&FunctionId::new("lib", "helper").local(0, "x"))
            .is_none());
    }

    #[test]
    fn test_local_shadowing_capture_resolves_to_outer() {
        // main$1 declares its own `x := x`; the capture entry for `x` replaces
        // the local's terminal entry, so the copy aliases main's `x`
        let main = Function::new(fid("main")).with_block(vec![
            Instruction::alloc(10, "t0", Some("x")),
            Instruction::make_closure(20, fid("main$1"), &["t0"]),
            Instruction::go(20, Some(fid("main$1"))),
        ]);
        let closure = Function::new(fid("main$1"))
            .with_parent(fid("main"))
            .with_block(vec![
                Instruction::alloc(4, "t3", Some("x")),
                Instruction::store(5, "t3", "2:int"),
            ]);
        let program = Program::new(vec![main, closure]).unwrap();
        let config = AnalysisConfig::default();
        let facts = ScopeScanner::new(&config).scan(&program);

        let outer = fid("main").local(0, "x");
        assert_eq!(facts.aliases.resolve(&fid("main$1").local(0, "t3")), outer);
        assert_eq!(facts.aliases.resolve(&fid("main$1").local(0, "x")), outer);
    }

    #[test]
    fn test_unresolved_spawn_is_skipped() {
        let main = Function::new(fid("main")).with_block(vec![Instruction::go(3, None)]);
        let program = Program::new(vec![main]).unwrap();
        let config = AnalysisConfig::default();
        let facts = ScopeScanner::new(&config).scan(&program);

        assert!(facts.units.is_empty());
    }
}
