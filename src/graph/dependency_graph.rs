use std::collections::HashMap;
use std::ops::Index;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{Color, EntityNode};
use crate::core::EntityName;

/// Directed graph of declared entities, keyed by name
///
/// Node indices are handed out in creation order and never change, so a
/// `NodeIndex` doubles as the entity's stable index. Edges point from an
/// entity to the entities it depends on.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<EntityNode, ()>,
    indices: HashMap<EntityName, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entity by name, creating it if this is the first mention
    pub fn add_entity(&mut self, name: impl AsRef<[u8]>) -> NodeIndex {
        let name = name.as_ref();
        if let Some(&idx) = self.indices.get(name) {
            return idx;
        }

        let name = EntityName::from(name);
        let idx = self.graph.add_node(EntityNode::new(name.clone()));
        self.indices.insert(name, idx);
        idx
    }

    /// Find an existing entity; never creates one
    pub fn find(&self, name: impl AsRef<[u8]>) -> Option<NodeIndex> {
        self.indices.get(name.as_ref()).copied()
    }

    pub fn contains(&self, name: impl AsRef<[u8]>) -> bool {
        self.indices.contains_key(name.as_ref())
    }

    /// Record that `from` depends on `to`
    pub fn add_dependency(&mut self, from: NodeIndex, to: NodeIndex) {
        self.graph.add_edge(from, to, ());
    }

    /// Dependencies of `idx`, in the order they were declared
    pub fn dependencies(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        // petgraph walks adjacency lists newest-first
        let mut deps: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .collect();
        deps.reverse();
        deps
    }

    /// All entities in creation order
    pub fn entities(&self) -> impl Iterator<Item = (NodeIndex, &EntityNode)> {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    pub fn color(&self, idx: NodeIndex) -> Color {
        self.graph[idx].color()
    }

    pub(crate) fn set_color(&mut self, idx: NodeIndex, color: Color) {
        debug_assert!(
            self.graph[idx].color() < color,
            "node colors only move forward within a run"
        );
        self.graph[idx].set_color(color);
    }

    /// Put every node back to `Unvisited` so detection can run again
    pub fn reset_colors(&mut self) {
        for node in self.graph.node_weights_mut() {
            node.set_color(Color::Unvisited);
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Borrow the underlying petgraph graph
    pub fn as_digraph(&self) -> &DiGraph<EntityNode, ()> {
        &self.graph
    }
}

impl Index<NodeIndex> for DependencyGraph {
    type Output = EntityNode;

    fn index(&self, idx: NodeIndex) -> &Self::Output {
        &self.graph[idx]
    }
}
