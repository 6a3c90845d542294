//! `sumtiem` command line renderer.
//!
//! # Responsibility
//! - Read N-Triples facts from files or stdin.
//! - Run one layout pass and write SVG or a text dump of the layout.
//!
//! Usage:
//!   sumtiem facts.nt -o timeline.svg
//!   cat facts.nt | sumtiem --format text

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{Read, Write};
use std::path::PathBuf;
use sumtiem_core::{
    default_log_level, init_stderr_logging, parse_ntriples, LogObserver, TimelineConfig,
    TimelinePipeline,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Text,
}

/// Render a timeline diagram from semantic-web facts.
#[derive(Parser, Debug)]
#[command(name = "sumtiem", version)]
struct Args {
    /// N-Triples input files; stdin when none are given
    inputs: Vec<PathBuf>,

    /// JSON config overriding geometry, palette and vocabulary
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    /// Dump input facts and the resolved timeline to the log; implies at
    /// least `debug`
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = log_level(args.log_level.as_deref(), args.verbose);
    init_stderr_logging(&level).map_err(anyhow::Error::msg)?;

    let config = match &args.config {
        Some(path) => TimelineConfig::load(path)?,
        None => TimelineConfig::default(),
    };

    let mut facts = Vec::new();
    for text in read_inputs(&args.inputs)? {
        facts.extend(parse_ntriples(&text)?);
    }

    let mut pipeline = TimelinePipeline::new(config)?;
    let pass = pipeline.process(&facts, &LogObserver::new(args.verbose))?;
    let rendered = match args.format {
        Format::Svg => pass.svg.clone(),
        Format::Text => pass.timeline.describe(),
    };

    match &args.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write `{}`", path.display()))?,
        None => std::io::stdout().write_all(rendered.as_bytes())?,
    }
    Ok(())
}

/// Requested (or build default) level, raised to `debug` for verbose dumps.
fn log_level(requested: Option<&str>, verbose: bool) -> String {
    let level = requested.unwrap_or_else(|| default_log_level());
    let quieter_than_debug = matches!(
        level.trim().to_ascii_lowercase().as_str(),
        "info" | "warn" | "warning" | "error"
    );
    if verbose && quieter_than_debug {
        "debug".to_string()
    } else {
        level.to_string()
    }
}

fn read_inputs(paths: &[PathBuf]) -> Result<Vec<String>> {
    if paths.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(vec![text]);
    }
    paths
        .iter()
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read `{}`", path.display()))
        })
        .collect()
}
