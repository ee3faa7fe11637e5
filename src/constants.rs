//! Configuration constants for depcycle
//!
//! This module contains the constants used throughout the application.
//! Limits can be overridden through command line options or environment
//! variables.

use std::time::Duration;

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while parsing and detecting
    pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Human-readable verdict lines, worded as the legacy tool printed them
    pub const CYCLE_DETECTED: &str = "Cyclic Dependency";
    pub const NO_CYCLE_DETECTED: &str = "No cyclic dependency";
}

/// Fixed capacities of the legacy dependency format
pub mod legacy {
    pub const MAX_ENTITIES: usize = 1000;
    pub const MAX_DEPENDENCIES: usize = 100;
    /// Names were stored in 256-byte buffers including the terminator
    pub const MAX_NAME_LENGTH: usize = 255;
}

/// Process exit codes
///
/// 1 (read failure or violated limit) comes from miette and 2 (usage error)
/// from clap; only the cycle code is chosen here.
pub mod exit_code {
    /// A cycle was found and `--error-on-cycles` was given
    pub const CYCLE_FOUND: u8 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.last(), Some(&"✓"));
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
        assert_ne!(output::CYCLE_DETECTED, output::NO_CYCLE_DETECTED);
    }

    #[test]
    fn test_cycle_exit_code_is_distinct() {
        assert_eq!(exit_code::CYCLE_FOUND, 3);
    }
}
