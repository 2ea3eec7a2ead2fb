// src/dag/cycles.rs

//! Direct (two-task) circular dependency detection.
//!
//! Only mutual pairs are reported: if A lists B and B lists A. Longer loops
//! such as A -> B -> C -> A are deliberately not searched for.

use tracing::debug;

use crate::dag::graph::DependencyGraph;
use crate::task::Task;

/// Zero-based indices `(i, j)` with `i < j` of two mutually dependent tasks.
pub type MutualPair = (usize, usize);

/// Scan every pair of active tasks and return the mutually dependent ones in
/// ascending `(i, j)` order.
pub fn detect_mutual_dependencies(tasks: &[Task]) -> Vec<MutualPair> {
    let graph = DependencyGraph::from_tasks(tasks);
    let mut pairs = Vec::new();

    for i in 0..tasks.len() {
        for j in (i + 1)..tasks.len() {
            let (a, b) = (i + 1, j + 1);
            if graph.depends_on(a, b) && graph.depends_on(b, a) {
                pairs.push((i, j));
            }
        }
    }

    if !pairs.is_empty() {
        debug!(?pairs, "mutual dependencies detected");
    }

    pairs
}

/// Human-readable warning for a detected pair, using 1-based positions.
pub fn describe_pair(tasks: &[Task], pair: MutualPair) -> String {
    let (i, j) = pair;
    let title = |idx: usize| tasks.get(idx).map(|t| t.title.as_str()).unwrap_or("?");
    format!(
        "Circular dependency: task {} ({}) and task {} ({}) depend on each other",
        i + 1,
        title(i),
        j + 1,
        title(j)
    )
}
