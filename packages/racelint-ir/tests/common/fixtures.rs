//! Test fixture generators
//!
//! Scenario programs shaped like a Go `main` that spawns one closure
//! (`main$1`) capturing a counter `i` and a mutex `l`.

use super::builders::{FunctionBuilder, ProgramBuilder};
use racelint_ir::features::program_model::Program;
use std::path::PathBuf;

/// Path of a file under `tests/fixtures/`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// JSON rendition of the canonical sample: the closure increments `i` under
/// `l`, `main` increments `i` after the spawn without the lock
pub fn sample_program_path() -> PathBuf {
    fixture_path("sample.json")
}

/// main: `l`, `i := 1`, spawn main$1, then whatever `after_spawn` appends
fn spawning_main(after_spawn: impl FnOnce(FunctionBuilder) -> FunctionBuilder) -> FunctionBuilder {
    let main = FunctionBuilder::new("main")
        .alloc("t0", "l")
        .alloc("t1", "i")
        .write("t1")
        .spawn_closure("main$1", &["t0", "t1"]);
    after_spawn(main)
}

/// Scenario A: unguarded counter, both sides increment after the spawn
pub fn scenario_unguarded_counter() -> Program {
    ProgramBuilder::new()
        .with_function(spawning_main(|main| main.increment("t1")).build())
        .with_function(
            FunctionBuilder::closure("main$1", "main")
                .starting_at(500)
                .increment("i")
                .build(),
        )
        .build()
}

/// Scenario B: every access to the counter holds `l`
pub fn scenario_all_locked() -> Program {
    ProgramBuilder::new()
        .with_function(
            spawning_main(|main| main.lock("t0").increment("t1").unlock("t0")).build(),
        )
        .with_function(
            FunctionBuilder::closure("main$1", "main")
                .starting_at(500)
                .lock("l")
                .increment("i")
                .unlock("l")
                .build(),
        )
        .build()
}

/// Scenario C: the counter is written before the spawn and only read inside
/// the closure
pub fn scenario_write_before_spawn() -> Program {
    ProgramBuilder::new()
        .with_function(spawning_main(|main| main.call("Foo")).build())
        .with_function(
            FunctionBuilder::closure("main$1", "main")
                .starting_at(500)
                .read("i")
                .read("i")
                .build(),
        )
        .with_function(FunctionBuilder::new("Foo").build())
        .build()
}
