//! Common functionality shared across the CLI and configuration layers

use clap::Args;

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value = crate::constants::output::DEFAULT_FORMAT,
        env = "DEPCYCLE_FORMAT"
    )]
    pub format: crate::cli::OutputFormat,
}

/// Capacity limits for the dependency list (unbounded unless given)
#[derive(Args, Debug, Clone)]
pub struct LimitArgs {
    /// Maximum number of declared entities
    #[arg(long, value_name = "N", env = "DEPCYCLE_MAX_ENTITIES")]
    pub max_entities: Option<usize>,

    /// Maximum number of resolved dependencies per entity
    #[arg(long, value_name = "N", env = "DEPCYCLE_MAX_DEPENDENCIES")]
    pub max_dependencies: Option<usize>,

    /// Maximum length of an entity name, in bytes
    #[arg(long, value_name = "N", env = "DEPCYCLE_MAX_NAME_LENGTH")]
    pub max_name_length: Option<usize>,

    /// Apply the legacy fixed capacities (1000 entities, 100 dependencies,
    /// 255-byte names); explicit --max-* values take precedence
    #[arg(long, env = "DEPCYCLE_LEGACY_LIMITS")]
    pub legacy_limits: bool,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::DepCycleError>;
}

/// Trait for configurations that can be created from parsed CLI arguments
pub trait FromCli: Sized {
    fn from_cli(cli: crate::cli::Cli) -> Result<Self, crate::error::DepCycleError>;
}

/// Macro to implement `TryFrom<Cli>` using [`FromCli`] trait
#[macro_export]
macro_rules! impl_try_from_cli {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Cli> for $config {
            type Error = $crate::error::DepCycleError;

            fn try_from(cli: $crate::cli::Cli) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCli>::from_cli(cli)
            }
        }
    };
}
