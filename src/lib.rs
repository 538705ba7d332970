// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod output;
pub mod types;

use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::cli::{CliArgs, OutputFormat};
use crate::config::{load_and_validate, load_and_validate_as};
use crate::dag::{Schedule, schedule};
use crate::errors::Result;
use crate::types::InputFormat;

/// How a CLI invocation ended, for the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A schedule was written.
    Scheduled,
    /// The dependencies contain a cycle; the failure was written.
    Cyclic,
    /// `--dry-run`: the task set was listed, nothing was scheduled.
    DryRun,
}

/// Load, validate and schedule a plan file in one go.
///
/// Unlike [`run`], a cycle surfaces as [`errors::TaskdagError::DagCycle`].
pub fn schedule_file(path: impl AsRef<Path>) -> Result<Schedule> {
    let plan = load_and_validate(path)?;
    Ok(schedule(plan.tasks())?)
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - plan loading + validation
/// - the scheduler
/// - rendering to `out`
///
/// A dependency cycle is a normal outcome here ([`RunOutcome::Cyclic`]), not
/// an error. Errors are reserved for unreadable or invalid plans.
pub fn run(args: &CliArgs, out: &mut impl Write) -> Result<RunOutcome> {
    let format = args
        .input_format
        .unwrap_or_else(|| InputFormat::from_path(&args.input));
    let plan = load_and_validate_as(&args.input, format)?;
    debug!(
        input = %args.input.display(),
        ?format,
        tasks = plan.tasks().len(),
        "plan loaded"
    );

    if args.dry_run {
        out.write_all(output::dry_run_text(&plan).as_bytes())?;
        debug!("dry-run complete (no scheduling)");
        return Ok(RunOutcome::DryRun);
    }

    match schedule(plan.tasks()) {
        Ok(order) => {
            info!(tasks = order.len(), "schedule computed");
            let rendered = match args.format {
                OutputFormat::Text => output::schedule_text(&order, args.details),
                OutputFormat::Json => output::schedule_json(&order)? + "\n",
            };
            out.write_all(rendered.as_bytes())?;
            Ok(RunOutcome::Scheduled)
        }
        Err(cycle) => {
            info!(unresolved = cycle.unresolved.len(), "no schedule: dependency cycle");
            let rendered = match args.format {
                OutputFormat::Text => output::cycle_text(&cycle),
                OutputFormat::Json => output::cycle_json(&cycle)? + "\n",
            };
            out.write_all(rendered.as_bytes())?;
            Ok(RunOutcome::Cyclic)
        }
    }
}
