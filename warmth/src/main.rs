// main.rs - Batch heater-placement report over stdin/stdout

use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// `row col` lines, or "Too cold!"
    Text,
    /// Full per-sensor report
    Json,
}

/// Reads a sensor grid and prints the empty cells where an emitter would
/// help an under-warmed sensor.
#[derive(Parser, Debug)]
#[command(name = "warmth", version)]
struct Cli {
    /// Grid file; standard input when omitted
    input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let input = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading standard input")?;
            buf
        }
    };

    let layout = warmth::parse_input(&input).context("invalid grid")?;
    let (_, report) = warmth::run(&layout);
    info!(summary = ?report.summary(), "report ready");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.format {
        Format::Text => report.write_text(&mut out)?,
        Format::Json => report.write_json(&mut out)?,
    }
    out.flush()?;
    Ok(())
}
