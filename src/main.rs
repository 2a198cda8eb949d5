//! `ifcdot`: write a GraphViz graph of an IFC model.
//!
//! Usage:
//!     ifcdot input.ifc graph.dot
//!     neato -Tsvg graph.dot > graph.svg
//!
//! Focus on one entity and save its neighbours for the next run:
//!     ifcdot input.ifc graph.dot --interest 1234 --next-interest next.json
//!     ifcdot input.ifc graph.dot --interest-file next.json

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ifc_dot::{DotConfig, IfcModel, InterestSet};

#[derive(Debug, Parser)]
#[command(name = "ifcdot", version, about = "Render an IFC model as a GraphViz graph")]
struct Args {
    /// IFC (ISO 10303-21) file to read
    input: PathBuf,

    /// Dot file to write
    output: PathBuf,

    /// Comma separated entity ids to focus on (e.g. 1234,5678)
    #[arg(long, value_name = "IDS")]
    interest: Option<String>,

    /// JSON array of entity ids to focus on, as written by --next-interest
    #[arg(long, value_name = "FILE")]
    interest_file: Option<PathBuf>,

    /// Grow the interest set this many hops before drawing
    #[arg(long, value_name = "N", default_value_t = 0)]
    expand: usize,

    /// Write the next-interest set (JSON array) here
    #[arg(long, value_name = "FILE")]
    next_interest: Option<PathBuf>,

    /// TOML file overriding graph attributes, palette and type names
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => DotConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => DotConfig::default(),
    };

    let mut interest = read_interest(args)?;

    let (model, loaded) = IfcModel::open_step_with_stats(&args.input)
        .with_context(|| format!("Failed to open model: {}", args.input.display()))?;
    if loaded.entities == 0 {
        warn!(
            path = %args.input.display(),
            skipped = loaded.skipped,
            "no object definitions in input"
        );
    }

    if args.expand > 0 && !interest.is_empty() {
        let expansion = model.expand(&interest, &config, Some(args.expand))?;
        info!(
            rounds = expansion.rounds,
            converged = expansion.converged,
            size = expansion.interest.len(),
            "expanded interest"
        );
        interest = expansion.interest;
    }

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create output: {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    let out = model.write_dot_with(&mut writer, &interest, &config)?;
    writer.flush()?;
    info!(
        path = %args.output.display(),
        registered = out.stats.nodes_registered,
        virtual_skipped = out.stats.virtual_skipped,
        deferred = out.stats.edges_deferred,
        relationships_skipped = out.stats.relationships_skipped,
        "wrote graph"
    );

    if let Some(path) = &args.next_interest {
        write_interest(path, &out.next_interest)?;
    }

    Ok(())
}

fn read_interest(args: &Args) -> Result<InterestSet> {
    let mut interest = match &args.interest {
        Some(list) => InterestSet::parse_list(list)?,
        None => InterestSet::new(),
    };
    if let Some(path) = &args.interest_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read interest file: {}", path.display()))?;
        let from_file: InterestSet = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse interest file: {}", path.display()))?;
        interest.extend(from_file.iter());
    }
    Ok(interest)
}

fn write_interest(path: &Path, interest: &InterestSet) -> Result<()> {
    let json = serde_json::to_string(&interest.to_sorted_vec())?;
    std::fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write interest file: {}", path.display()))?;
    info!(path = %path.display(), size = interest.len(), "wrote next interest");
    Ok(())
}
