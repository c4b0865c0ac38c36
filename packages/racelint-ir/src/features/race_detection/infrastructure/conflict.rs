//! Conflict rule
//!
//! Decides whether two recorded accesses to the same canonical variable are
//! a potential race. Evaluated from `a`'s side against every earlier `b`.
//!
//! ## Rule
//! 1. Same function → no race (a linear scan is sequential)
//! 2. Neither function spawned → no race
//! 3. Spawn happens-before: `a` runs in a unit created by `b`'s function and
//!    `b` precedes the spawn (and symmetrically) → no race
//! 4. Common lock held → no race
//! 5. Otherwise → race
//!
//! Access kinds do not participate: read/read pairs are flagged as well.

use crate::features::concurrency_tracking::ConcurrencyRegistry;
use crate::features::race_detection::domain::AccessRecord;
use crate::shared::models::VarId;

/// Outcome of evaluating the rule for one pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictVerdict {
    SameFunction,
    NoConcurrentUnit,
    HappensBefore,
    CommonLock(VarId),
    Race,
}

impl ConflictVerdict {
    pub fn is_race(&self) -> bool {
        matches!(self, ConflictVerdict::Race)
    }
}

/// Pairwise conflict predicate over a populated unit registry
pub struct ConflictRule<'a> {
    units: &'a ConcurrencyRegistry,
}

impl<'a> ConflictRule<'a> {
    pub fn new(units: &'a ConcurrencyRegistry) -> Self {
        Self { units }
    }

    pub fn conflicts(&self, a: &AccessRecord, b: &AccessRecord) -> bool {
        self.evaluate(a, b).is_race()
    }

    /// Evaluate the rule and say which step decided
    pub fn evaluate(&self, a: &AccessRecord, b: &AccessRecord) -> ConflictVerdict {
        if a.function == b.function {
            return ConflictVerdict::SameFunction;
        }

        let a_spawned = self.units.is_concurrent_unit(&a.function);
        let b_spawned = self.units.is_concurrent_unit(&b.function);
        if !a_spawned && !b_spawned {
            return ConflictVerdict::NoConcurrentUnit;
        }

        if (a_spawned && self.ordered_before_unit(a, b))
            || (b_spawned && self.ordered_before_unit(b, a))
        {
            return ConflictVerdict::HappensBefore;
        }

        if let Some(lock) = a.common_lock(b) {
            return ConflictVerdict::CommonLock(lock.clone());
        }

        ConflictVerdict::Race
    }

    /// Whether `other` happened before the spawn of `spawned`'s function
    fn ordered_before_unit(&self, spawned: &AccessRecord, other: &AccessRecord) -> bool {
        self.units
            .creation_record_of(&spawned.function)
            .map(|record| record.happens_before_spawn(&other.function, other.position))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::race_detection::domain::AccessKind;
    use crate::shared::models::{FunctionId, Pos};

    fn fid(name: &str) -> FunctionId {
        FunctionId::new("p", name)
    }

    fn access(func: &str, pos: u32, locks: &[&str]) -> AccessRecord {
        AccessRecord {
            function: fid(func),
            block: 0,
            position: Pos(pos),
            variable: fid("main").local(0, "i"),
            kind: AccessKind::Write,
            lock_set: locks.iter().map(|l| fid("main").local(0, *l)).collect(),
            instruction: String::new(),
        }
    }

    /// main spawns main$1 at position 100
    fn registry() -> ConcurrencyRegistry {
        let mut units = ConcurrencyRegistry::new();
        units.register_spawn(fid("main$1"), &fid("main"), 0, Pos(100));
        units
    }

    #[test]
    fn test_same_function_never_races() {
        let units = registry();
        let rule = ConflictRule::new(&units);

        let verdict = rule.evaluate(&access("main$1", 120, &[]), &access("main$1", 110, &[]));
        assert_eq!(verdict, ConflictVerdict::SameFunction);
    }

    #[test]
    fn test_plain_functions_never_race() {
        let units = registry();
        let rule = ConflictRule::new(&units);

        let verdict = rule.evaluate(&access("main", 120, &[]), &access("Foo", 10, &[]));
        assert_eq!(verdict, ConflictVerdict::NoConcurrentUnit);
    }

    #[test]
    fn test_unlocked_after_spawn_races() {
        let units = registry();
        let rule = ConflictRule::new(&units);

        // Both orders: main after spawn vs closure
        assert!(rule.conflicts(&access("main", 150, &[]), &access("main$1", 120, &[])));
        assert!(rule.conflicts(&access("main$1", 120, &[]), &access("main", 150, &[])));
    }

    #[test]
    fn test_happens_before_spawn_suppresses() {
        let units = registry();
        let rule = ConflictRule::new(&units);

        let before_spawn = access("main", 50, &[]);
        let in_unit = access("main$1", 120, &[]);

        assert_eq!(rule.evaluate(&in_unit, &before_spawn), ConflictVerdict::HappensBefore);
        assert_eq!(rule.evaluate(&before_spawn, &in_unit), ConflictVerdict::HappensBefore);
    }

    #[test]
    fn test_spawn_position_itself_is_not_before() {
        let units = registry();
        let rule = ConflictRule::new(&units);

        assert!(rule.conflicts(&access("main$1", 120, &[]), &access("main", 100, &[])));
    }

    #[test]
    fn test_happens_before_only_for_creator() {
        let mut units = registry();
        units.register_spawn(fid("worker"), &fid("Foo"), 0, Pos(500));
        let rule = ConflictRule::new(&units);

        // main$1 was created by main, not by Foo: position 10 in Foo proves nothing
        assert!(rule.conflicts(&access("main$1", 120, &[]), &access("Foo", 10, &[])));
        // worker was created by Foo at 500: Foo@10 precedes it
        assert_eq!(
            rule.evaluate(&access("worker", 600, &[]), &access("Foo", 10, &[])),
            ConflictVerdict::HappensBefore
        );
    }

    #[test]
    fn test_common_lock_suppresses() {
        let units = registry();
        let rule = ConflictRule::new(&units);

        let verdict = rule.evaluate(&access("main", 150, &["l"]), &access("main$1", 120, &["l", "m"]));
        assert_eq!(verdict, ConflictVerdict::CommonLock(fid("main").local(0, "l")));
    }

    #[test]
    fn test_disjoint_locks_race() {
        let units = registry();
        let rule = ConflictRule::new(&units);

        assert!(rule.conflicts(&access("main", 150, &["l"]), &access("main$1", 120, &["m"])));
        assert!(rule.conflicts(&access("main", 150, &["l"]), &access("main$1", 120, &[])));
    }

    #[test]
    fn test_unknown_position_degrades_to_no_race() {
        let units = registry();
        let rule = ConflictRule::new(&units);

        let unknown = access("main", 0, &[]);
        assert_eq!(
            rule.evaluate(&access("main$1", 120, &[]), &unknown),
            ConflictVerdict::HappensBefore
        );
    }

    #[test]
    fn test_two_spawned_units_race() {
        let mut units = registry();
        units.register_spawn(fid("main$2"), &fid("main"), 0, Pos(200));
        let rule = ConflictRule::new(&units);

        assert!(rule.conflicts(&access("main$2", 220, &[]), &access("main$1", 120, &[])));
    }
}
