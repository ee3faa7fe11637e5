use petgraph::graph::NodeIndex;

use super::dependency_graph::DependencyGraph;
use crate::config::ParseLimits;
use crate::core::{EntityName, GraphStats};
use crate::error::{DepCycleError, LimitKind};
use crate::parser::Declaration;
use crate::progress::ProgressReporter;

/// Builder for constructing dependency graphs from parsed declarations
///
/// Building happens in two phases. The first creates one node for every
/// declared entity, so that a dependency may refer to an entity declared
/// further down the file. The second resolves each dependency name against
/// that complete set: names that match no declared entity are dropped and
/// never become nodes.
pub struct DependencyGraphBuilder {
    graph: DependencyGraph,
    limits: ParseLimits,
    dropped_dependencies: usize,
    /// Resolved edges per entity, indexed by node
    dependency_counts: Vec<usize>,
}

impl Default for DependencyGraphBuilder {
    fn default() -> Self {
        Self::new(ParseLimits::default())
    }
}

impl DependencyGraphBuilder {
    /// Create a new dependency graph builder
    ///
    /// # Arguments
    /// * `limits` - Capacity limits to enforce; unbounded by default
    pub fn new(limits: ParseLimits) -> Self {
        Self {
            graph: DependencyGraph::new(),
            limits,
            dropped_dependencies: 0,
            dependency_counts: Vec::new(),
        }
    }

    /// Add all declarations to the graph
    pub fn build_from_declarations(
        &mut self,
        declarations: &[Declaration],
        progress: Option<&ProgressReporter>,
    ) -> Result<(), DepCycleError> {
        // Phase 1: establish the complete set of entities
        for declaration in declarations {
            self.declare_entity(declaration)?;
        }

        if let Some(p) = progress {
            p.entities_declared(self.graph.node_count());
        }

        // Phase 2: resolve dependency names to edges
        self.dependency_counts.resize(self.graph.node_count(), 0);
        for declaration in declarations {
            self.resolve_dependencies(declaration)?;
        }

        Ok(())
    }

    fn declare_entity(&mut self, declaration: &Declaration) -> Result<NodeIndex, DepCycleError> {
        self.check_name_length(&declaration.entity, declaration)?;

        if let Some(idx) = self.graph.find(&declaration.entity) {
            return Ok(idx);
        }

        if let Some(max) = self.limits.max_entities
            && self.graph.node_count() >= max
        {
            return Err(DepCycleError::LimitExceeded {
                limit: LimitKind::Entities,
                value: self.graph.node_count() + 1,
                max,
                entity: declaration.entity.to_string(),
                line: declaration.line,
            });
        }

        Ok(self.graph.add_entity(&declaration.entity))
    }

    fn resolve_dependencies(&mut self, declaration: &Declaration) -> Result<(), DepCycleError> {
        let Some(from) = self.graph.find(&declaration.entity) else {
            return Ok(());
        };

        for name in &declaration.dependencies {
            self.check_name_length(name, declaration)?;

            let Some(to) = self.graph.find(name) else {
                self.dropped_dependencies += 1;
                continue;
            };

            let count = &mut self.dependency_counts[from.index()];
            if let Some(max) = self.limits.max_dependencies
                && *count >= max
            {
                return Err(DepCycleError::LimitExceeded {
                    limit: LimitKind::Dependencies,
                    value: *count + 1,
                    max,
                    entity: declaration.entity.to_string(),
                    line: declaration.line,
                });
            }

            *count += 1;
            self.graph.add_dependency(from, to);
        }

        Ok(())
    }

    fn check_name_length(
        &self,
        name: &EntityName,
        declaration: &Declaration,
    ) -> Result<(), DepCycleError> {
        let Some(max) = self.limits.max_name_length else {
            return Ok(());
        };

        // Bytes, matching the fixed-size name buffers of the legacy format
        let length = name.len();
        if length > max {
            return Err(DepCycleError::LimitExceeded {
                limit: LimitKind::NameLength,
                value: length,
                max,
                entity: name.to_string(),
                line: declaration.line,
            });
        }

        Ok(())
    }

    /// Get a reference to the built graph
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Consume the builder and return the graph
    pub fn into_graph(self) -> DependencyGraph {
        self.graph
    }

    /// Number of dependency names that matched no declared entity
    pub fn dropped_dependencies(&self) -> usize {
        self.dropped_dependencies
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            entities: self.graph.node_count(),
            edges: self.graph.edge_count(),
            dropped_dependencies: self.dropped_dependencies,
        }
    }
}
