//! `gen-shacl`: compiles a resolved schema model (JSON) into a SHACL shapes graph.
//!
//! **Usage:**
//! ```text
//! gen-shacl <SCHEMA.json> [--format turtle|ntriples|jsonld] [--out <path>]
//!           [--open] [--suffix <S>] [--no-metadata]
//! ```
//!
//! Logging is controlled with `RUST_LOG` (default `warn`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use shaclgen::serializer::{jsonld, ntriples, turtle};
use shaclgen::{CompileOptions, SchemaModel, ShapeCompiler};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Output syntax for the shapes graph.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Turtle 1.1
    Turtle,
    /// N-Triples
    Ntriples,
    /// JSON-LD 1.1
    Jsonld,
}

/// Compile a schema model into SHACL shapes.
#[derive(Parser)]
#[command(name = "gen-shacl", about = "Generate SHACL shapes from a schema model")]
struct Args {
    /// Schema model as JSON.
    schema: PathBuf,

    /// Output syntax.
    #[arg(long, value_enum, default_value = "turtle")]
    format: Format,

    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Leave classes open unless they declare `closed` themselves.
    #[arg(long)]
    open: bool,

    /// Suffix appended to class URIs to form node shape IRIs.
    #[arg(long)]
    suffix: Option<String>,

    /// Omit sh:name, sh:description and sh:order.
    #[arg(long)]
    no_metadata: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let source = fs::read_to_string(&args.schema)
        .with_context(|| format!("Failed to read {}", args.schema.display()))?;
    let schema: SchemaModel = serde_json::from_str(&source)
        .with_context(|| format!("Failed to parse schema model {}", args.schema.display()))?;

    let options = CompileOptions {
        closed: !args.open,
        suffix: args.suffix,
        emit_metadata: !args.no_metadata,
    };
    let graph = ShapeCompiler::new(options)
        .compile(&schema)
        .with_context(|| format!("Failed to compile schema `{}`", schema.name))?;

    let rendered = match args.format {
        Format::Turtle => turtle::to_turtle(&graph),
        Format::Ntriples => ntriples::to_ntriples(&graph),
        Format::Jsonld => serde_json::to_string_pretty(&jsonld::to_json_ld(&graph))
            .context("Failed to serialize shapes graph to JSON-LD")?,
    };

    match &args.out {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), triples = graph.len(), "shapes written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
