//! Protoforge - read, convert and export Metin2 style proto files

mod load;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use load::Loader;
use protoforge_config::{CodecConfig, CONFIG_FILE};
use protoforge_core::{FileKind, FormatVersion};
use protoforge_formats::{chunked, prefixed_row};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "protoforge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Read, convert and export item and mob proto files")]
struct Cli {
    /// Codec settings file
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print parsed rows as JSON lines
    Inspect {
        /// File kind, e.g. item_proto or mob_drop_item
        kind: FileKind,
        /// Defaults to the kind's file inside `datadir`
        file: Option<PathBuf>,
        /// Column layout, overrides the configured one
        #[arg(short, long)]
        format: Option<FormatVersion>,
        /// item_names file used to resolve item names to vnums
        #[arg(long)]
        item_names: Option<PathBuf>,
    },
    /// Rewrite item_proto or mob_proto in another column layout
    Convert {
        kind: FileKind,
        input: PathBuf,
        output: PathBuf,
        #[arg(long)]
        from: FormatVersion,
        #[arg(long)]
        to: FormatVersion,
    },
    /// Print column-prefixed persistence rows in batches of `chunksize`
    Rows {
        kind: FileKind,
        file: Option<PathBuf>,
        #[arg(short, long)]
        format: Option<FormatVersion>,
        #[arg(long)]
        item_names: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the JSON output, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CodecConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {:?}", cli.config))?;

    match cli.command {
        Command::Inspect { kind, file, format, item_names } => {
            let loader = loader(&config, item_names.as_deref())?;
            let path = file.unwrap_or_else(|| config.path_for(kind));
            let version = format.unwrap_or_else(|| config.version_for(kind));

            for table in loader.load(kind, &path, version).await? {
                info!("{}: {} rows", table.name, table.rows.len());
                for row in &table.rows {
                    println!("{}", serde_json::to_string(row)?);
                }
            }
        }
        Command::Convert { kind, input, output, from, to } => {
            let count = loader(&config, None)?.convert(kind, &input, &output, from, to)?;
            info!("Wrote {} {} rows to {:?} ({} -> {})", count, kind, output, from, to);
        }
        Command::Rows { kind, file, format, item_names } => {
            let loader = loader(&config, item_names.as_deref())?;
            let path = file.unwrap_or_else(|| config.path_for(kind));
            let version = format.unwrap_or_else(|| config.version_for(kind));

            for table in loader.load(kind, &path, version).await? {
                let rows = table
                    .rows
                    .iter()
                    .map(|row| prefixed_row(row, table.name))
                    .collect::<protoforge_core::Result<Vec<_>>>()?;
                let batches = chunked(rows, config.chunk_size);
                info!("{}: {} batches of up to {} rows", table.name, batches.len(), config.chunk_size);
                for batch in batches {
                    println!("{}", serde_json::to_string(&batch)?);
                }
            }
        }
    }

    Ok(())
}

fn loader(config: &CodecConfig, item_names: Option<&Path>) -> Result<Loader> {
    let loader = Loader::new(config.line_ending);
    match item_names {
        Some(path) => loader.with_item_names(path),
        None => Ok(loader),
    }
}
