use petgraph::graph::NodeIndex;

use crate::core::Verdict;
use crate::graph::{Color, DependencyGraph};

/// A node on the DFS path and the position of the next edge to follow
struct Frame {
    node: NodeIndex,
    dependencies: Vec<NodeIndex>,
    next: usize,
}

impl Frame {
    fn enter(graph: &mut DependencyGraph, node: NodeIndex) -> Self {
        graph.set_color(node, Color::InProgress);
        Self {
            node,
            dependencies: graph.dependencies(node),
            next: 0,
        }
    }
}

/// Detector for circular dependencies in an entity graph
///
/// Runs a depth-first search with three-state coloring. `InProgress` marks
/// nodes on the current DFS path, so reaching one again means a back edge
/// and therefore a cycle. `Done` marks fully explored nodes, which are
/// skipped. The search uses an explicit stack, so long dependency chains
/// cannot overflow the call stack.
#[derive(Debug, Default)]
pub struct CycleDetector {
    verdict: Option<Verdict>,
    nodes_finished: usize,
}

impl CycleDetector {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether `graph` contains a cycle
    ///
    /// All colors are reset first, so calling this again on the same graph
    /// gives the same answer. Traversal stops at the first back edge found.
    pub fn detect_cycles(&mut self, graph: &mut DependencyGraph) -> Verdict {
        graph.reset_colors();
        self.nodes_finished = 0;

        let roots: Vec<NodeIndex> = graph.entities().map(|(idx, _)| idx).collect();
        let mut has_cycle = false;

        for root in roots {
            if graph.color(root) == Color::Unvisited && self.visit(graph, root) {
                has_cycle = true;
                break;
            }
        }

        let verdict = Verdict::from(has_cycle);
        self.verdict = Some(verdict);
        verdict
    }

    /// Depth-first search from `root`; returns true on the first back edge
    fn visit(&mut self, graph: &mut DependencyGraph, root: NodeIndex) -> bool {
        let mut stack = vec![Frame::enter(graph, root)];

        while let Some(frame) = stack.last_mut() {
            let Some(&neighbor) = frame.dependencies.get(frame.next) else {
                let node = frame.node;
                stack.pop();
                graph.set_color(node, Color::Done);
                self.nodes_finished += 1;
                continue;
            };
            frame.next += 1;

            match graph.color(neighbor) {
                Color::InProgress => return true,
                Color::Unvisited => stack.push(Frame::enter(graph, neighbor)),
                Color::Done => {}
            }
        }

        false
    }

    /// Verdict of the last run, if any
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Check if the last run found a cycle
    pub fn has_cycle(&self) -> bool {
        self.verdict.is_some_and(|v| v.is_cyclic())
    }

    /// Number of nodes that reached `Done` during the last run
    pub fn nodes_finished(&self) -> usize {
        self.nodes_finished
    }
}

/// Convenience wrapper around [`CycleDetector::detect_cycles`]
pub fn has_cycle(graph: &mut DependencyGraph) -> bool {
    CycleDetector::new().detect_cycles(graph).is_cyclic()
}
