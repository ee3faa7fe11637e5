//! Core graph types
//!
//! This module contains the fundamental data structures stored in the
//! dependency graph.

use crate::core::EntityName;

/// Traversal marker used by the cycle detector
///
/// Within one detection run a node only ever moves forward:
/// `Unvisited` → `InProgress` → `Done`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    #[default]
    Unvisited,
    InProgress,
    Done,
}

/// Represents a declared entity in the dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityNode {
    name: EntityName,
    color: Color,
}

impl EntityNode {
    pub fn new(name: impl Into<EntityName>) -> Self {
        Self {
            name: name.into(),
            color: Color::Unvisited,
        }
    }

    pub fn name(&self) -> &EntityName {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
