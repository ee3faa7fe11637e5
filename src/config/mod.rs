//! # Configuration Module
//!
//! Configuration structures for a depcycle run.
//!
//! - **CheckConfig**: validated options for one check, built through
//!   [`CheckConfigBuilder`]
//! - **ParseLimits**: optional capacity limits applied while building the
//!   graph
//!
//! ## Example
//!
//! ```
//! use depcycle::cli::OutputFormat;
//! use depcycle::common::ConfigBuilder;
//! use depcycle::config::{CheckConfig, ParseLimits};
//!
//! let config = CheckConfig::builder()
//!     .with_file("deps.txt".into())
//!     .with_format(OutputFormat::Human)
//!     .with_limits(ParseLimits::legacy())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.limits.max_entities, Some(1000));
//! ```

pub mod check;
pub mod limits;

pub use check::{CheckConfig, CheckConfigBuilder};
pub use limits::ParseLimits;
