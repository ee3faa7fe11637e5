//! Capacity limits for parsed dependency lists

use crate::constants::legacy;

/// Optional caps on the size of a dependency graph
///
/// Every limit is `None` by default, meaning the graph grows as needed.
/// [`ParseLimits::legacy`] reproduces the fixed capacities of the original
/// tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseLimits {
    /// Maximum number of distinct declared entities
    pub max_entities: Option<usize>,
    /// Maximum number of resolved dependencies per entity
    pub max_dependencies: Option<usize>,
    /// Maximum length of any name, in bytes
    pub max_name_length: Option<usize>,
}

impl ParseLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn legacy() -> Self {
        Self {
            max_entities: Some(legacy::MAX_ENTITIES),
            max_dependencies: Some(legacy::MAX_DEPENDENCIES),
            max_name_length: Some(legacy::MAX_NAME_LENGTH),
        }
    }

    pub fn with_max_entities(mut self, max_entities: Option<usize>) -> Self {
        self.max_entities = max_entities;
        self
    }

    pub fn with_max_dependencies(mut self, max_dependencies: Option<usize>) -> Self {
        self.max_dependencies = max_dependencies;
        self
    }

    pub fn with_max_name_length(mut self, max_name_length: Option<usize>) -> Self {
        self.max_name_length = max_name_length;
        self
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_entities.is_none()
            && self.max_dependencies.is_none()
            && self.max_name_length.is_none()
    }
}

impl From<&crate::common::LimitArgs> for ParseLimits {
    fn from(args: &crate::common::LimitArgs) -> Self {
        let base = if args.legacy_limits {
            Self::legacy()
        } else {
            Self::unbounded()
        };

        // Explicit values win over the legacy preset
        Self {
            max_entities: args.max_entities.or(base.max_entities),
            max_dependencies: args.max_dependencies.or(base.max_dependencies),
            max_name_length: args.max_name_length.or(base.max_name_length),
        }
    }
}
