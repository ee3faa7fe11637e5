//! # depcycle - Detect Circular Dependencies in Dependency Lists
//!
//! depcycle reads a plain-text dependency list, where every line names an
//! entity followed by the entities it depends on, and decides whether the
//! list contains a circular dependency.
//!
//! ```text
//! main.c: parser.c, lexer.c
//! parser.c: lexer.c, ast.c
//! lexer.c:
//! ast.c:
//! ```
//!
//! ## Main Components
//!
//! - **Parser**: Tokenizes lines into declarations
//! - **Graph**: Resolves declarations into a directed graph of entities;
//!   dependencies on undeclared names are ignored
//! - **Detector**: Three-color depth-first search that stops at the first
//!   cycle
//! - **Reports**: Human, JSON, JUnit and GitHub Actions output
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use depcycle::config::ParseLimits;
//!
//! # fn main() -> Result<(), depcycle::error::DepCycleError> {
//! let outcome = depcycle::check_path(Path::new("deps.txt"), ParseLimits::default())?;
//!
//! println!("{}", outcome.verdict);
//! println!(
//!     "{} entities, {} dependencies, {} ignored",
//!     outcome.stats.entities, outcome.stats.edges, outcome.stats.dropped_dependencies
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### Step by step
//!
//! ```
//! use depcycle::config::ParseLimits;
//! use depcycle::detector::CycleDetector;
//! use depcycle::graph::DependencyGraphBuilder;
//! use depcycle::parser::DependencyParser;
//!
//! # fn main() -> Result<(), depcycle::error::DepCycleError> {
//! let declarations = DependencyParser::new().parse_str("a: b\nb: c\nc: a\n");
//!
//! let mut builder = DependencyGraphBuilder::new(ParseLimits::default());
//! builder.build_from_declarations(&declarations, None)?;
//!
//! let mut graph = builder.into_graph();
//! let verdict = CycleDetector::new().detect_cycles(&mut graph);
//!
//! assert!(verdict.is_cyclic());
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::process::ExitCode;

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod parser;
pub mod reports;

pub use common::ConfigBuilder;

use crate::config::ParseLimits;
use crate::core::CheckOutcome;
use crate::detector::CycleDetector;
use crate::error::DepCycleError;
use crate::graph::DependencyGraphBuilder;
use crate::parser::DependencyParser;

/// Read the dependency list at `path` and resolve it into a graph
pub fn parse_path(
    path: &Path,
    limits: ParseLimits,
) -> Result<DependencyGraphBuilder, DepCycleError> {
    let declarations = DependencyParser::new().parse_file(path)?;

    let mut builder = DependencyGraphBuilder::new(limits);
    builder.build_from_declarations(&declarations, None)?;
    Ok(builder)
}

/// Read the dependency list at `path` and decide whether it has a cycle
pub fn check_path(path: &Path, limits: ParseLimits) -> Result<CheckOutcome, DepCycleError> {
    let builder = parse_path(path, limits)?;
    let stats = builder.stats();

    let mut graph = builder.into_graph();
    let verdict = CycleDetector::new().detect_cycles(&mut graph);

    Ok(CheckOutcome::new(path, verdict, stats))
}

// Main entry point for the library
pub fn run() -> miette::Result<ExitCode> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli)
}
