mod common;

use std::sync::Arc;

use taskrank::fs::{FileSystem, MemoryFileSystem, RealFileSystem};
use taskrank::persist::{from_snapshot_json, to_snapshot_json, SnapshotStore, SNAPSHOT_KEY};
use taskrank::TaskStore;
use taskrank_test_utils::builders::{completed, TaskBuilder};
use tempfile::tempdir;

#[test]
fn snapshot_json_round_trips_completed_tasks() {
    let list = vec![completed("a", 1), completed("b", 2)];
    let text = to_snapshot_json(&list).unwrap();

    assert!(text.contains("\"completedAt\""));
    assert!(text.contains("\"completedOrder\": 2"));
    assert_eq!(from_snapshot_json(&text).unwrap(), list);
}

#[test]
fn completion_timestamps_survive_the_round_trip_exactly() {
    let mut store = common::store_with(vec![TaskBuilder::new("a").depends_on(2).build()]);
    store.complete(1).unwrap();

    let text = to_snapshot_json(store.completed()).unwrap();
    assert_eq!(from_snapshot_json(&text).unwrap(), store.completed());
}

#[test]
fn missing_or_blank_snapshot_is_empty() {
    let fs = MemoryFileSystem::new();
    let snapshots = SnapshotStore::new(Arc::new(fs.clone()), "state");
    assert!(snapshots.load().unwrap().is_empty());

    fs.add_file(snapshots.path(), "  ").unwrap();
    assert!(snapshots.load().unwrap().is_empty());
}

#[test]
fn store_rewrites_snapshot_after_each_completed_mutation() {
    common::init_tracing();
    let fs = MemoryFileSystem::new();
    let snapshots = SnapshotStore::new(Arc::new(fs.clone()), "state");
    let mut store = TaskStore::open(snapshots.clone()).unwrap();
    for title in ["a", "b", "c"] {
        store.add(TaskBuilder::new(title).draft()).unwrap();
    }
    // Active-only changes never write the snapshot.
    assert!(!fs.exists(snapshots.path()));

    store.complete(1).unwrap();
    store.complete(1).unwrap();
    assert_eq!(snapshots.load().unwrap(), store.completed());

    store.restore(1).unwrap();
    assert_eq!(snapshots.load().unwrap().len(), 1);

    store.remove_permanently(1).unwrap();
    assert!(snapshots.load().unwrap().is_empty());

    store.complete(1).unwrap();
    store.clear_all();
    assert!(snapshots.load().unwrap().is_empty());
}

#[test]
fn reopening_restores_the_completed_list() {
    let dir = tempdir().unwrap();
    let snapshots = SnapshotStore::new(Arc::new(RealFileSystem), dir.path().join("nested"));

    let saved = {
        let mut store = TaskStore::open(snapshots.clone()).unwrap();
        store.add(TaskBuilder::new("a").draft()).unwrap();
        store.add(TaskBuilder::new("b").depends_on(1).draft()).unwrap();
        store.complete(2).unwrap();
        store.complete(1).unwrap();
        store.completed().to_vec()
    };

    assert_eq!(
        snapshots.path(),
        dir.path().join("nested").join(format!("{SNAPSHOT_KEY}.json"))
    );

    let reopened = TaskStore::open(snapshots).unwrap();
    assert_eq!(reopened.completed(), saved.as_slice());
    assert!(reopened.active().is_empty());
    assert_eq!(reopened.progress().completion_rate, 100);
}

#[test]
fn corrupt_snapshot_fails_to_open() {
    let fs = MemoryFileSystem::new();
    let snapshots = SnapshotStore::new(Arc::new(fs.clone()), ".");
    fs.add_file(snapshots.path(), "[{\"title\": ").unwrap();

    assert!(TaskStore::open(snapshots).is_err());
}

#[test]
fn failed_writes_do_not_roll_back_the_mutation() {
    let dir = tempdir().unwrap();
    // A regular file where the snapshot directory should be makes every
    // write fail.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();
    let snapshots = SnapshotStore::new(Arc::new(RealFileSystem), blocker.join("state"));

    let mut store = TaskStore::open(snapshots.clone()).unwrap();
    store.add(TaskBuilder::new("a").draft()).unwrap();
    let done = store.complete(1).unwrap();

    assert_eq!(store.completed(), &[done]);
    assert!(store.active().is_empty());
    assert!(snapshots.save(store.completed()).is_err());
}
