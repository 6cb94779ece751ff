//! `tagpack` — encode JSON (stdin or file) to the tagged binary format.
//!
//! Usage:
//!   tagpack [--input FILE] [--output FILE] [--hex] [--compat standard|reference]
//!           [--strict] [--max-depth N] [--config FILE] [-v...]

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tagpack::cli::{load_options, pack_json, to_hex};
use tagpack::{Compat, EncoderOptions};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Encode a JSON document into the compact tagged binary format.
///
/// Empty input means "no value" and produces no output at all.
#[derive(Parser)]
#[command(name = "tagpack", version, about)]
struct Cli {
    /// Read JSON from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write bytes to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the bytes as lowercase hex followed by a newline
    #[arg(long)]
    hex: bool,

    /// Load encoder options from a TOML file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tag table variant
    #[arg(long, value_enum)]
    compat: Option<CompatArg>,

    /// Fail on numbers that would lose magnitude when narrowed to f32
    #[arg(long)]
    strict: bool,

    /// Maximum nesting of arrays and objects
    #[arg(long)]
    max_depth: Option<usize>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CompatArg {
    Standard,
    Reference,
}

impl From<CompatArg> for Compat {
    fn from(arg: CompatArg) -> Self {
        match arg {
            CompatArg::Standard => Compat::Standard,
            CompatArg::Reference => Compat::Reference,
        }
    }
}

impl Cli {
    fn options(&self) -> Result<EncoderOptions> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => EncoderOptions::default(),
        };
        if let Some(compat) = self.compat {
            options.compat = compat.into();
        }
        if self.strict {
            options.strict_numbers = true;
        }
        if self.max_depth.is_some() {
            options.max_depth = self.max_depth;
        }
        Ok(options)
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            None => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read stdin")?;
                Ok(buf)
            }
        }
    }

    fn write_output(&self, bytes: &[u8]) -> Result<()> {
        let rendered;
        let out: &[u8] = if self.hex {
            rendered = format!("{}\n", to_hex(bytes));
            rendered.as_bytes()
        } else {
            bytes
        };
        match &self.output {
            Some(path) => std::fs::write(path, out)
                .with_context(|| format!("Failed to write {}", path.display())),
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(out).context("Failed to write stdout")?;
                stdout.flush().context("Failed to flush stdout")
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let options = cli.options()?;
    debug!(?options, "encoder options");

    let input = cli.read_input()?;
    match pack_json(&input, &options)? {
        Some(bytes) => {
            info!(len = bytes.len(), "encoded");
            cli.write_output(&bytes)
        }
        None => {
            info!("no value, nothing written");
            Ok(())
        }
    }
}
