// src/main.rs

use std::io;
use std::process::ExitCode;

use taskdag::{RunOutcome, cli, logging, run};

fn main() -> ExitCode {
    match run_main() {
        Ok(RunOutcome::Cyclic) => ExitCode::from(2),
        Ok(RunOutcome::Scheduled | RunOutcome::DryRun) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("taskdag error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run_main() -> anyhow::Result<RunOutcome> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Ok(run(&args, &mut out)?)
}
