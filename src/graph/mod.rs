//! # Dependency Graph Module
//!
//! This module provides the graph that parsed dependency lists are resolved
//! into.
//!
//! ## Components
//!
//! - **EntityNode**: A declared entity with its traversal [`Color`]
//! - **DependencyGraph**: A petgraph `DiGraph` of entities plus a
//!   name-to-node index; edges mean "depends on"
//! - **DependencyGraphBuilder**: Resolves [`Declaration`]s into a graph,
//!   dropping dependency names that were never declared
//!
//! ## Example
//!
//! ```
//! use depcycle::config::ParseLimits;
//! use depcycle::graph::DependencyGraphBuilder;
//! use depcycle::parser::DependencyParser;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let declarations = DependencyParser::new().parse_str("app: core, missing\ncore:\n");
//!
//! let mut builder = DependencyGraphBuilder::new(ParseLimits::default());
//! builder.build_from_declarations(&declarations, None)?;
//!
//! let graph = builder.graph();
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! assert!(graph.find("missing").is_none());
//! assert_eq!(builder.dropped_dependencies(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! [`Declaration`]: crate::parser::Declaration

mod builder;
mod dependency_graph;
mod types;

// Re-export main types and builders
pub use builder::DependencyGraphBuilder;
pub use dependency_graph::DependencyGraph;
pub use types::{Color, EntityNode};
