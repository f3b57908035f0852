use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use palindrome_analysis::PalindromeFinder;
use palindrome_core::config::palindrome_config::{CliOverrides, PalindromeConfig};
use palindrome_core::errors::{ConfigError, InputError, PalindromeErrorCode};
use palindrome_core::logging;
use tracing::debug;

mod output;

use output::{render, Report};

/// Inputs run by `palindrome samples`.
const SAMPLES: &[&str] = &["babad", "cbbd", "a", "ac", "racecar", "abcdef"];

#[derive(Parser)]
#[command(name = "palindrome")]
#[command(about = "Find the longest palindromic substring", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML config file (default: ./palindrome.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Reject inputs longer than this many characters
    #[arg(long, global = true)]
    max_input_chars: Option<usize>,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in sample inputs
    Samples,

    /// Find the longest palindrome in each argument
    Find {
        /// Strings to search
        #[arg(required = true)]
        inputs: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", coded_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let overrides = CliOverrides {
        max_input_chars: cli.max_input_chars,
        output_format: cli.format,
    };
    let config = match cli.config.as_deref() {
        Some(path) => PalindromeConfig::load_file(path, Some(&overrides))?,
        None => PalindromeConfig::load(Path::new("."), Some(&overrides))?,
    };
    debug!(?config, "resolved config");

    let inputs: Vec<&str> = match &cli.command {
        Commands::Samples => SAMPLES.to_vec(),
        Commands::Find { inputs } => inputs.iter().map(String::as_str).collect(),
    };

    let format = config.output.effective_format();
    let finder = PalindromeFinder::new(config.finder);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for input in inputs {
        let found = finder.find(input)?;
        render(&mut out, &Report::new(input, &found), format)?;
    }
    out.flush()?;

    Ok(())
}

/// Prefix known library errors with their stable code.
fn coded_message(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<ConfigError>() {
        e.coded_message()
    } else if let Some(e) = err.downcast_ref::<InputError>() {
        e.coded_message()
    } else {
        format!("{err:#}")
    }
}
