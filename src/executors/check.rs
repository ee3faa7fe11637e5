//! Check command executor

use std::process::ExitCode;

use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::CheckConfig;
use crate::constants::exit_code;
use crate::core::CheckOutcome;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::graph::DependencyGraphBuilder;
use crate::parser::DependencyParser;
use crate::progress::ProgressReporter;
use crate::reports::generator_for;

pub struct CheckExecutor;

impl CheckExecutor {
    /// Parse, resolve and check one dependency list
    pub fn check(
        config: &CheckConfig,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<CheckOutcome> {
        if let Some(p) = progress.as_deref_mut() {
            p.start_parsing(&config.file);
        }

        let declarations = DependencyParser::new()
            .parse_file(&config.file)
            .wrap_err("Failed to read dependency list")?;

        let mut graph_builder = DependencyGraphBuilder::new(config.limits);
        graph_builder
            .build_from_declarations(&declarations, progress.as_deref())
            .wrap_err("Failed to build dependency graph")?;

        let stats = graph_builder.stats();
        if let Some(p) = progress.as_deref_mut() {
            p.finish_parsing(stats.entities, stats.edges, stats.dropped_dependencies);
            p.start_cycle_detection();
        }

        let mut graph = graph_builder.into_graph();
        let verdict = CycleDetector::new().detect_cycles(&mut graph);

        if let Some(p) = progress.as_deref_mut() {
            p.finish_cycle_detection(verdict);
        }

        Ok(CheckOutcome::new(config.file.clone(), verdict, stats))
    }

    /// Process exit status for a finished check
    pub fn exit_status(config: &CheckConfig, outcome: &CheckOutcome) -> u8 {
        if config.error_on_cycles && outcome.has_cycle() {
            exit_code::CYCLE_FOUND
        } else {
            0
        }
    }
}

impl CommandExecutor for CheckExecutor {
    type Config = CheckConfig;

    fn execute(config: Self::Config) -> Result<ExitCode> {
        let mut progress = ProgressReporter::for_stderr(config.quiet);

        let outcome = Self::check(&config, progress.as_mut())?;

        let report = generator_for(config.format)
            .generate_report(&outcome)
            .into_diagnostic()
            .wrap_err("Failed to generate report")?;
        print!("{report}");

        Ok(ExitCode::from(Self::exit_status(&config, &outcome)))
    }
}
