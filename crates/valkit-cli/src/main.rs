// SPDX-License-Identifier: MIT OR Apache-2.0
//! valkit CLI binary - sort, dedupe-check and query JSON

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use valkit_array::{SortKey, SortOrder};
use valkit_cli::commands::{self, Layout, Outcome};
use valkit_cli::logging;

#[derive(Parser)]
#[command(name = "valkit")]
#[command(version, about, long_about = None)]
struct Args {
    /// Single-line output
    #[arg(short = 'c', long = "compact", global = true)]
    compact: bool,

    /// Indentation for pretty output
    #[arg(short = 'i', long = "indent", default_value = "2", global = true)]
    indent: usize,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for valkit CLI
#[derive(Subcommand)]
enum Commands {
    /// Report whether a JSON array contains a repeated value
    Dups {
        /// JSON file (reads from stdin if not provided)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Sort a JSON array in place
    Sort {
        /// JSON file (reads from stdin if not provided)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Compare `element.field` or `element.field.nested`
        #[arg(short = 'k', long = "key", default_value = "")]
        key: SortKey,

        /// Largest first
        #[arg(short = 'd', long = "desc")]
        descending: bool,
    },
    /// Print the value at a dotted path
    Get {
        /// Dotted path, e.g. `users.0.name`
        path: String,

        /// JSON file (reads from stdin if not provided)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Print the value under the first key of an object
    First {
        /// JSON file (reads from stdin if not provided)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(&args).and_then(|value| write_output(&args, value.as_ref())) {
        Ok(code) => ExitCode::from(code),
        Err(e) => report(&e),
    }
}

fn report(e: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {e:#}");
    ExitCode::FAILURE
}

fn run(args: &Args) -> Result<Option<Value>> {
    match &args.command {
        Commands::Dups { input } => {
            let value = load(input.as_ref())?;
            Ok(Some(commands::dups(&value)?))
        }
        Commands::Sort {
            input,
            key,
            descending,
        } => {
            let order = if *descending {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            };
            let value = load(input.as_ref())?;
            Ok(Some(commands::sort(value, key, order)?))
        }
        Commands::Get { path, input } => {
            let value = load(input.as_ref())?;
            Ok(commands::get(&value, path))
        }
        Commands::First { input } => {
            let value = load(input.as_ref())?;
            Ok(commands::first(&value))
        }
    }
}

fn load(path: Option<&PathBuf>) -> Result<Value> {
    let text = commands::read_input(path.map(PathBuf::as_path)).with_context(|| match path {
        Some(p) => format!("reading {}", p.display()),
        None => "reading stdin".to_string(),
    })?;
    Ok(commands::parse_input(&text)?)
}

fn write_output(args: &Args, value: Option<&Value>) -> Result<u8> {
    let layout = if args.compact {
        Layout::Compact
    } else {
        Layout::Pretty(args.indent)
    };
    let outcome = commands::finish(value, layout)?;
    let Outcome::Print(output) = &outcome else {
        return Ok(outcome.exit_code());
    };

    if let Some(path) = &args.output {
        fs::write(path, output).with_context(|| format!("writing {}", path.display()))?;
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(output.as_bytes())?;
    }
    Ok(outcome.exit_code())
}
