//! Core data types and structures
//!
//! This module contains the fundamental value types used throughout
//! depcycle, separated from their implementation logic.

pub mod types;

pub use types::*;
