mod common;

use common::{deps_of, store_with, titles_of};
use taskrank::errors::Collection;
use taskrank::task::TaskDraft;
use taskrank::{TaskStore, TaskrankError};
use taskrank_test_utils::builders::TaskBuilder;

fn four_tasks() -> TaskStore {
    store_with(vec![
        TaskBuilder::new("A").build(),
        TaskBuilder::new("B").depends_on(1).build(),
        TaskBuilder::new("C").build(),
        TaskBuilder::new("D").dependencies(&[2, 3]).build(),
    ])
}

#[test]
fn add_appends_and_returns_new_position() {
    let mut store = TaskStore::new();
    assert_eq!(store.add(TaskBuilder::new("first").draft()).unwrap(), 1);
    assert_eq!(store.add(TaskBuilder::new("second").draft()).unwrap(), 2);
    assert_eq!(titles_of(&store), vec!["first", "second"]);
}

#[test]
fn add_rejects_invalid_task_without_touching_the_list() {
    let mut store = four_tasks();
    let err = store
        .add(TaskDraft {
            title: Some("   ".to_string()),
            ..TaskBuilder::new("x").draft()
        })
        .unwrap_err();

    match err {
        TaskrankError::Validation(v) => assert_eq!(v.problems(), ["Title is required"]),
        other => panic!("expected Validation error, got {other:?}"),
    }
    assert_eq!(store.active().len(), 4);
}

#[test]
fn update_replaces_in_place_without_renumbering_others() {
    let mut store = four_tasks();
    store
        .update(3, TaskBuilder::new("C2").importance(9).depends_on(1).draft())
        .unwrap();

    assert_eq!(titles_of(&store), vec!["A", "B", "C2", "D"]);
    assert_eq!(store.get(3).unwrap().importance, 9);
    assert_eq!(deps_of(&store), vec![vec![], vec![1], vec![1], vec![2, 3]]);
}

#[test]
fn update_out_of_range_is_not_found() {
    let mut store = four_tasks();
    for position in [0, 5] {
        let err = store
            .update(position, TaskBuilder::new("x").draft())
            .unwrap_err();
        assert!(
            matches!(
                err,
                TaskrankError::NotFound {
                    collection: Collection::Active,
                    len: 4,
                    ..
                }
            ),
            "got {err:?}"
        );
    }
}

#[test]
fn delete_removes_and_renumbers_dependencies() {
    let mut store = four_tasks();
    let removed = store.delete(2).unwrap();

    assert_eq!(removed.title, "B");
    assert_eq!(titles_of(&store), vec!["A", "C", "D"]);
    // D depended on [2, 3]: 2 is gone, 3 shifts down to 2.
    assert_eq!(deps_of(&store), vec![vec![], vec![], vec![2]]);
}

#[test]
fn delete_first_task_shifts_every_reference() {
    let mut store = four_tasks();
    store.delete(1).unwrap();

    assert_eq!(titles_of(&store), vec!["B", "C", "D"]);
    assert_eq!(deps_of(&store), vec![vec![], vec![], vec![1, 2]]);
}

#[test]
fn delete_out_of_range_is_not_found_and_leaves_store_alone() {
    let mut store = four_tasks();
    assert!(matches!(
        store.delete(9),
        Err(TaskrankError::NotFound { position: 9, .. })
    ));
    assert_eq!(store.active().len(), 4);
}

#[test]
fn complete_moves_task_and_assigns_next_order() {
    let mut store = store_with(vec![
        TaskBuilder::new("A").build(),
        TaskBuilder::new("B").depends_on(1).build(),
        TaskBuilder::new("C").dependencies(&[1, 2]).build(),
    ]);

    let first = store.complete(1).unwrap();
    assert_eq!(first.task.title, "A");
    assert_eq!(first.completed_order, 1);
    assert_eq!(store.active().len(), 2);
    assert_eq!(store.completed().len(), 1);
    assert_eq!(deps_of(&store), vec![vec![], vec![1]]);

    let second = store.complete(2).unwrap();
    assert_eq!(second.task.title, "C");
    assert_eq!(second.completed_order, 2);
    assert!(second.completed_at >= first.completed_at);
    assert_eq!(titles_of(&store), vec!["B"]);
}

#[test]
fn restore_appends_to_end_with_stale_dependencies() {
    let mut store = four_tasks();
    // D (deps [2, 3]) is completed, then A is deleted, then D comes back.
    store.complete(4).unwrap();
    store.delete(1).unwrap();
    let restored = store.restore(1).unwrap();

    assert_eq!(restored.title, "D");
    assert_eq!(titles_of(&store), vec!["B", "C", "D"]);
    // Carried over untouched even though positions moved underneath it.
    assert_eq!(store.get(3).unwrap().dependencies, vec![2, 3]);
    assert!(store.completed().is_empty());
}

#[test]
fn restore_keeps_sibling_completed_order() {
    let mut store = four_tasks();
    store.complete(1).unwrap();
    store.complete(1).unwrap();
    store.complete(1).unwrap();

    store.restore(2).unwrap();

    let orders: Vec<_> = store.completed().iter().map(|c| c.completed_order).collect();
    assert_eq!(orders, vec![1, 3]);

    // The next completion counts the current length, not the highest order.
    let next = store.complete(1).unwrap();
    assert_eq!(next.completed_order, 3);
}

#[test]
fn remove_permanently_does_not_touch_active() {
    let mut store = four_tasks();
    store.complete(4).unwrap();
    let before = store.active().to_vec();

    let removed = store.remove_permanently(1).unwrap();
    assert_eq!(removed.task.title, "D");
    assert!(store.completed().is_empty());
    assert_eq!(store.active(), before.as_slice());

    assert!(matches!(
        store.remove_permanently(1),
        Err(TaskrankError::NotFound {
            collection: Collection::Completed,
            ..
        })
    ));
}

#[test]
fn clear_operations_empty_their_collections() {
    let mut store = four_tasks();
    store.complete(1).unwrap();

    store.clear_completed();
    assert!(store.completed().is_empty());
    assert_eq!(store.active().len(), 3);

    store.clear_active();
    assert!(store.active().is_empty());
}

#[test]
fn clear_all_resets_editing_cursor() {
    let mut store = four_tasks();
    store.complete(4).unwrap();
    store.begin_edit(2).unwrap();
    assert_eq!(store.editing(), Some(2));

    store.clear_all();
    assert!(store.active().is_empty());
    assert!(store.completed().is_empty());
    assert_eq!(store.editing(), None);
}

#[test]
fn editing_cursor_follows_its_task_across_removals() {
    let mut store = four_tasks();
    let task = store.begin_edit(3).unwrap().clone();
    assert_eq!(task.title, "C");

    store.delete(1).unwrap();
    assert_eq!(store.editing(), Some(2));
    assert_eq!(store.get(2).unwrap().title, "C");

    store.complete(3).unwrap();
    assert_eq!(store.editing(), Some(2));

    store.delete(2).unwrap();
    assert_eq!(store.editing(), None);
}

#[test]
fn saving_the_edited_task_ends_editing() {
    let mut store = four_tasks();
    store.begin_edit(2).unwrap();
    store.update(2, TaskBuilder::new("B2").depends_on(1).draft()).unwrap();
    assert_eq!(store.editing(), None);

    store.begin_edit(1).unwrap();
    store.cancel_edit();
    assert_eq!(store.editing(), None);
}

#[test]
fn begin_edit_out_of_range_is_not_found() {
    let mut store = TaskStore::new();
    assert!(matches!(
        store.begin_edit(1),
        Err(TaskrankError::NotFound { len: 0, .. })
    ));
    assert_eq!(store.editing(), None);
}

#[test]
fn dependents_of_lists_tasks_waiting_on_a_position() {
    let store = four_tasks();
    assert_eq!(store.dependents_of(1), vec![2]);
    assert_eq!(store.dependents_of(2), vec![4]);
    assert_eq!(store.dependents_of(4), Vec::<usize>::new());
}

#[test]
fn subscribers_see_a_snapshot_after_each_mutation() {
    let mut store = four_tasks();
    let mut rx = store.subscribe();
    assert!(!rx.has_changed().unwrap());

    store.complete(1).unwrap();
    assert!(rx.has_changed().unwrap());
    let snap = rx.borrow_and_update().clone();
    assert_eq!(snap.active.len(), 3);
    assert_eq!(snap.completed.len(), 1);
    assert_eq!(snap.progress.completion_rate, 25);

    store.begin_edit(1).unwrap();
    assert_eq!(rx.borrow_and_update().editing, Some(1));
}

#[test]
fn export_round_trips_through_bulk_load() {
    let store = four_tasks();
    let exported = store.export_active_json().unwrap();

    let mut other = TaskStore::new();
    let report = other.bulk_load_json(&exported).unwrap();
    assert_eq!(report.rejected_count, 0);
    assert_eq!(other.active(), store.active());
}
