//! wispcheck - validate a wisp configuration file.
//!
//! Parses the given file exactly as the window manager would (variable
//! preprocessing plus the table-driven parse) and reports every syntax
//! error with source context. Exits 0 when the file is clean, 1 when it
//! has errors, 2 when the check itself could not run.

mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use error::{Result, WispcheckError};
use wispcfg_par::ParseContext;
use wispcfg_sem::parse_config;

/// Wispcheck - configuration checker for the wisp window manager
#[derive(Parser, Debug)]
#[command(name = "wispcheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate a wisp configuration file", long_about = None)]
struct Cli {
    /// Configuration file to check
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, env = "WISPCHECK_VERBOSE")]
    verbose: bool,

    /// Print machine-readable diagnostics as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Dump the parsed configuration as JSON on stdout
    #[arg(long)]
    dump: bool,

    /// Disable color output
    #[arg(long, env = "WISPCHECK_NO_COLOR")]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("wispcheck: {}", err);
            ExitCode::from(2)
        }
    }
}

/// Checks the file. Returns whether the configuration is clean.
fn run(cli: &Cli) -> Result<bool> {
    init_logging(cli.verbose, cli.no_color)?;

    let input = read_config(&cli.config)?;
    info!("checking {} ({} bytes)", cli.config.display(), input.len());

    let mut context = ParseContext::for_file(cli.config.display().to_string());
    let (config, output) = parse_config(&input, &mut context)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output.errors)?);
    }
    if cli.dump {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    if context.has_errors {
        eprintln!(
            "wispcheck: {}: {} error(s)",
            context.display_filename(),
            output.errors.len()
        );
        Ok(false)
    } else {
        if !cli.json && !cli.dump {
            println!("{}: OK", context.display_filename());
        }
        Ok(true)
    }
}

/// Initialize the logging system. Diagnostics go to stderr so JSON
/// output on stdout stays parseable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| WispcheckError::Logging(e.to_string()))?;

    Ok(())
}

/// Reads the configuration file.
fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| WispcheckError::ReadConfig {
        path: path.display().to_string(),
        source,
    })
}
