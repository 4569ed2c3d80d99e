//! Newcomb-Benford statistics on a list of numbers
//!
//! Reads white-space separated numbers from a file or standard input and
//! prints descriptive statistics followed by a Newcomb-Benford analysis.
//!
//! Usage:
//! ```text
//! nbstats [FILE]
//! nbstats data/amounts.txt --json
//! RUST_LOG=debug nbstats < data/amounts.txt
//! ```

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use nbstats::output::{JsonRenderer, TextRenderer};
use nbstats::tokenizer::{Tokenizer, CTRL_Z};
use nbstats::traits::Renderer;
use nbstats::Report;

#[derive(Parser, Debug)]
#[command(
    name = "nbstats",
    version,
    about = "Descriptive statistics and Newcomb-Benford analysis of a list of numbers"
)]
struct Args {
    /// File of white-space separated numbers; standard input when omitted
    file: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Do not print the banner and input prompt
    #[arg(short, long)]
    quiet: bool,
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .try_init()
        .ok();
}

fn banner(out: &mut impl Write, prompt: bool) -> io::Result<()> {
    writeln!(out, "Newcomb-Benford Stats (v{})", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "{}", "=".repeat(48))?;
    if prompt {
        let terminator = if cfg!(windows) { "^Z" } else { "^D" };
        writeln!(
            out,
            "Enter white-space separated real numbers. Terminate input with {}",
            terminator
        )?;
    }
    out.flush()
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args.log_level);

    let show_banner = !args.quiet && !args.json;

    let extraction = match &args.file {
        Some(path) => {
            if show_banner {
                banner(&mut io::stdout(), false)?;
            }
            Tokenizer::open(path)?
                .extract()
                .with_context(|| format!("cannot analyze <{}>", path.display()))?
        }
        None => {
            let stdin = io::stdin();
            if show_banner {
                banner(&mut io::stdout(), stdin.is_terminal())?;
            }
            Tokenizer::new(stdin.lock())
                .with_end_marker(CTRL_Z)
                .extract()
                .context("cannot analyze standard input")?
        }
    };

    let report = Report::build(extraction)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        JsonRenderer.render(&report, &mut out)?;
    } else {
        TextRenderer.render(&report, &mut out)?;
    }
    out.flush()?;

    Ok(())
}
