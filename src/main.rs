//! Command-line interface for fmock
//!
//! # Usage Examples
//!
//! ```bash
//! # Random strings and numbers
//! fmock '@string(5,10)' '@integer(1,100)'
//!
//! # Option form, as used in templates
//! fmock '@string|min=10&max=40' '@date|format=YYYY/MM/DD'
//!
//! # Custom generators, JSON output, several values per directive
//! fmock --config generators.yaml --json --count 5 '@color()'
//!
//! # Directives from stdin, one per line
//! cat directives.txt | fmock
//! ```
//!
//! Set `RUST_LOG=fmock=debug,mock_generator=debug` to see unknown opcodes.

use anyhow::Context;
use clap::Parser;
use fmock::{resolve_all, ResolverOpts};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "fmock")]
#[command(about = "Generate mock values from placeholder directives such as @string(5,10)")]
#[command(long_about = None)]
struct Cli {
    /// Directives to resolve (reads one per line from stdin when omitted)
    #[arg(value_name = "DIRECTIVE")]
    directives: Vec<String>,

    #[command(flatten)]
    opts: ResolverOpts,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let resolver = cli.opts.build_resolver()?;

    let directives = if cli.directives.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read directives from stdin")?
    } else {
        cli.directives
    };

    let lines = resolve_all(&resolver, &directives, &cli.opts)?;

    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}").context("Failed to write output")?;
    }
    Ok(())
}
