mod command;
mod commands;
mod config;
mod render;
mod session;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use session::Session;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "datebook")]
#[command(version, about = "Keep a book of events by date, driven by line commands")]
#[command(long_about = "Reads commands from INPUT (or stdin) until it is exhausted:\n\n  \
    Add <date> <event>\n  \
    Del <date> [event]\n  \
    Find <date>\n  \
    Print\n\n\
    Dates are written YEAR-MONTH-DAY, e.g. 2017-11-18.")]
struct Cli {
    /// File to read commands from (defaults to stdin)
    input: Option<PathBuf>,

    /// Config file (defaults to ~/.config/datebook/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(cli.config.as_deref())?;

    init_logging(cli.verbose, &cfg.log_filter);

    let mut session = Session::new();
    let mut out = io::stdout().lock();

    match cli.input.or(cfg.input) {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open command file {}", path.display()))?;
            session.run(BufReader::new(file), &mut out)?;
        }
        None => {
            session.run(io::stdin().lock(), &mut out)?;
        }
    }

    Ok(())
}

/// Log to stderr; stdout carries command output only.
///
/// `-v` flags win over `RUST_LOG`, which wins over the config file.
fn init_logging(verbose: u8, configured: &str) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
