#![allow(dead_code)]

use taskrank::task::Task;
use taskrank::TaskStore;

pub use taskrank_test_utils::init_tracing;

/// A store whose active list is exactly `tasks`, in order.
pub fn store_with(tasks: Vec<Task>) -> TaskStore {
    init_tracing();
    let mut store = TaskStore::new();
    for task in tasks {
        store.add(task.into()).expect("builder tasks are valid");
    }
    store
}

/// Dependency lists of the active tasks, in order.
pub fn deps_of(store: &TaskStore) -> Vec<Vec<usize>> {
    store
        .active()
        .iter()
        .map(|t| t.dependencies.clone())
        .collect()
}

pub fn titles_of(store: &TaskStore) -> Vec<String> {
    store.active().iter().map(|t| t.title.clone()).collect()
}
