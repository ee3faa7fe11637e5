//! # Cycle Detection Module
//!
//! This module decides whether a dependency graph contains a circular
//! dependency.
//!
//! ## Algorithm
//!
//! We use a three-color depth-first search. Every node starts `Unvisited`,
//! becomes `InProgress` while it is on the current DFS path and `Done` once
//! all of its dependencies are explored. Reaching an `InProgress` node again
//! is a back edge to an ancestor, which means a cycle; reaching a `Done`
//! node is safe. Roots are tried in node creation order, and the search
//! stops at the first cycle. This runs in O(V + E).
//!
//! ## Example
//!
//! ```
//! use depcycle::core::Verdict;
//! use depcycle::detector::CycleDetector;
//! use depcycle::graph::DependencyGraph;
//!
//! let mut graph = DependencyGraph::new();
//! let a = graph.add_entity("a");
//! let b = graph.add_entity("b");
//! let c = graph.add_entity("c");
//!
//! // Create a cycle: a -> b -> c -> a
//! graph.add_dependency(a, b);
//! graph.add_dependency(b, c);
//! graph.add_dependency(c, a);
//!
//! let mut detector = CycleDetector::new();
//! assert_eq!(detector.detect_cycles(&mut graph), Verdict::Cyclic);
//! assert!(detector.has_cycle());
//! ```

mod detector_impl;

pub use detector_impl::*;
