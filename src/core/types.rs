//! Core type definitions
//!
//! This module contains the value types produced by a check, with minimal
//! logic - focusing on data representation.

use std::borrow::Borrow;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::constants::output::{CYCLE_DETECTED, NO_CYCLE_DETECTED};

/// An entity name exactly as written in the dependency list
///
/// Names are raw bytes: a list need not be UTF-8, and two names are the same
/// entity only when their bytes match. `Display` decodes lossily and is meant
/// for messages only.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityName(Box<[u8]>);

impl EntityName {
    pub fn new(bytes: impl Into<Box<[u8]>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The name as text, if it is valid UTF-8
    pub fn to_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for EntityName {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<&str> for EntityName {
    fn from(name: &str) -> Self {
        Self::new(name.as_bytes())
    }
}

impl AsRef<[u8]> for EntityName {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for EntityName {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<str> for EntityName {
    fn eq(&self, other: &str) -> bool {
        *self.0 == *other.as_bytes()
    }
}

impl PartialEq<&str> for EntityName {
    fn eq(&self, other: &&str) -> bool {
        *self.0 == *other.as_bytes()
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0.escape_ascii())
    }
}

/// Result of running cycle detection over a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Cyclic,
    Acyclic,
}

impl Verdict {
    pub fn is_cyclic(&self) -> bool {
        matches!(self, Verdict::Cyclic)
    }
}

impl From<bool> for Verdict {
    fn from(has_cycle: bool) -> Self {
        if has_cycle {
            Verdict::Cyclic
        } else {
            Verdict::Acyclic
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Cyclic => write!(f, "{CYCLE_DETECTED}"),
            Verdict::Acyclic => write!(f, "{NO_CYCLE_DETECTED}"),
        }
    }
}

/// Size of a built graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Distinct declared entities
    pub entities: usize,
    /// Resolved dependency edges
    pub edges: usize,
    /// Dependency names that matched no declared entity
    pub dropped_dependencies: usize,
}

/// Everything a report needs to describe one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub file: PathBuf,
    pub verdict: Verdict,
    pub stats: GraphStats,
}

impl CheckOutcome {
    pub fn new(file: impl Into<PathBuf>, verdict: Verdict, stats: GraphStats) -> Self {
        Self {
            file: file.into(),
            verdict,
            stats,
        }
    }

    pub fn has_cycle(&self) -> bool {
        self.verdict.is_cyclic()
    }
}
