// src/dag/graph.rs

use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;

use crate::task::{Position, Task};

/// Positional dependency graph of the active list.
///
/// Nodes are 1-based positions. For:
///
/// ```json
/// [ {"title": "A", "dependencies": []},
///   {"title": "B", "dependencies": [1]} ]
/// ```
///
/// we add the edge 2 -> 1 ("B depends on A").
///
/// References to positions past the end of the list (possible after a
/// restore) still get a node, so stale edges stay visible. Duplicate
/// references collapse into a single edge.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    graph: DiGraphMap<Position, ()>,
    len: usize,
}

impl DependencyGraph {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut graph: DiGraphMap<Position, ()> = DiGraphMap::new();

        for position in 1..=tasks.len() {
            graph.add_node(position);
        }

        for (idx, task) in tasks.iter().enumerate() {
            for &dep in task.dependencies.iter() {
                graph.add_edge(idx + 1, dep, ());
            }
        }

        Self {
            graph,
            len: tasks.len(),
        }
    }

    /// Number of tasks the graph was built from.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the task at `task` lists `dependency` among its dependencies.
    pub fn depends_on(&self, task: Position, dependency: Position) -> bool {
        self.graph.contains_edge(task, dependency)
    }

    /// Distinct positions the task at `task` depends on, ascending.
    pub fn dependencies_of(&self, task: Position) -> Vec<Position> {
        self.sorted_neighbors(task, Direction::Outgoing)
    }

    /// Positions of the tasks that list `task` as a dependency, ascending.
    pub fn dependents_of(&self, task: Position) -> Vec<Position> {
        self.sorted_neighbors(task, Direction::Incoming)
    }

    fn sorted_neighbors(&self, node: Position, dir: Direction) -> Vec<Position> {
        if !self.graph.contains_node(node) {
            return Vec::new();
        }
        let mut out: Vec<Position> = self.graph.neighbors_directed(node, dir).collect();
        out.sort_unstable();
        out
    }
}
