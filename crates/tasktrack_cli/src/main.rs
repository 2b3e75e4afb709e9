//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tasktrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use tasktrack_core::{MemoryStorage, TaskDraft, TaskStore};

fn main() {
    println!("tasktrack_core ping={}", tasktrack_core::ping());
    println!("tasktrack_core version={}", tasktrack_core::core_version());

    // Exercise one create/toggle/delete cycle against the in-memory slot to
    // validate core wiring independently from any UI host.
    let store = TaskStore::new(MemoryStorage::default());
    match smoke_cycle(&store) {
        Ok(()) => println!("tasktrack_core smoke=ok"),
        Err(err) => {
            eprintln!("tasktrack_core smoke=error error={err}");
            std::process::exit(1);
        }
    }
}

fn smoke_cycle(
    store: &TaskStore<MemoryStorage>,
) -> Result<(), Box<dyn std::error::Error>> {
    let task = store.create(TaskDraft::new("smoke task"))?;
    store.toggle_completion(task.id)?;
    if !store.delete(task.id)? {
        return Err("created task was not deletable".into());
    }
    Ok(())
}
