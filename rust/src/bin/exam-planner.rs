use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use exam_planner::sample::load_example_courses;
use exam_planner::{SchedulingConfig, Session, UnknownItemPolicy, DEFAULT_MAX_PER_SLOT};

/// Assign exam courses to time slots from a command script.
///
/// Commands: add-item <name>, remove-item <name>, add-conflict <name1> <name2>,
/// schedule [--max-per-slot N], report [--max-per-slot N], list, clear, load-example.
#[derive(Parser)]
#[command(name = "exam-planner", version)]
struct Args {
    /// Command script to run (reads stdin when omitted)
    script: Option<PathBuf>,

    /// Preload the example course catalogue
    #[arg(long)]
    example: bool,

    /// Default number of courses allowed per slot
    #[arg(long, default_value_t = DEFAULT_MAX_PER_SLOT)]
    max_per_slot: usize,

    /// Reject conflicts that name unregistered courses
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn read_script(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display())),
        None => {
            let mut script = String::new();
            io::stdin()
                .read_to_string(&mut script)
                .context("failed to read script from stdin")?;
            Ok(script)
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let policy = if args.strict {
        UnknownItemPolicy::Reject
    } else {
        UnknownItemPolicy::AutoRegister
    };
    let config = SchedulingConfig::new(Some(args.max_per_slot), Some(policy), Some(args.verbose));
    let mut session = Session::new(config);

    if args.example {
        load_example_courses(session.scheduler_mut())?;
    }

    let script = read_script(args.script.as_ref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = session.run_script(&script, &mut out);
    out.flush()?;

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            eprintln!("error: {err}");
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
