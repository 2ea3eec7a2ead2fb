use taskrank::progress::{progress, Progress};
use taskrank::TaskStore;
use taskrank_test_utils::builders::{completed, TaskBuilder};

#[test]
fn two_active_one_completed_is_a_third_done() {
    let active = vec![TaskBuilder::new("t1").build(), TaskBuilder::new("t2").build()];
    let done = vec![completed("t3", 1)];

    assert_eq!(
        progress(&active, &done),
        Progress {
            total: 3,
            completed: 1,
            completion_rate: 33,
        }
    );
}

#[test]
fn empty_lists_have_zero_rate() {
    assert_eq!(progress(&[], &[]), Progress::default());
}

#[test]
fn rate_rounds_half_up() {
    let active = vec![TaskBuilder::new("a").build()];
    let done = vec![completed("b", 1), completed("c", 2), completed("d", 3),
        completed("e", 4), completed("f", 5), completed("g", 6), completed("h", 7)];
    // 7 / 8 = 87.5%
    assert_eq!(progress(&active, &done).completion_rate, 88);
    assert_eq!(progress(&[], &done).completion_rate, 100);
}

#[test]
fn store_progress_tracks_completions() {
    let mut store = TaskStore::new();
    for title in ["a", "b", "c", "d"] {
        store.add(TaskBuilder::new(title).draft()).unwrap();
    }
    store.complete(1).unwrap();
    store.complete(1).unwrap();

    let p = store.progress();
    assert_eq!((p.total, p.completed, p.completion_rate), (4, 2, 50));

    store.restore(1).unwrap();
    assert_eq!(store.progress().completion_rate, 25);
}
