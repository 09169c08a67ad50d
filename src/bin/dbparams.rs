// ABOUTME: dbparams CLI - builds parameter/type-code arrays from a JSON manifest
// ABOUTME: Prints the finalized arrays as JSON and lists the known SQL type codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Build arrays from a manifest and print them as JSON
//! dbparams build params.json
//!
//! # Same, pretty-printed
//! dbparams build params.json --pretty
//!
//! # List the named SQL type codes
//! dbparams types
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dbparams::logging::LoggingConfig;
use dbparams::{ParameterManifest, SqlType};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "dbparams",
    about = "Build parallel SQL parameter and type-code arrays",
    long_about = "Builds positional parameter values and matching JDBC type codes from a JSON manifest."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Build arrays from a manifest file and print them as JSON
    Build {
        /// Path to the JSON manifest
        manifest: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List every named SQL type code
    Types,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Build { manifest, pretty } => {
            let params = ParameterManifest::from_path(&manifest)
                .and_then(|loaded| loaded.build())
                .with_context(|| format!("failed to build parameters from {}", manifest.display()))?;
            info!(count = params.len(), "writing parameter arrays");

            if pretty {
                serde_json::to_writer_pretty(&mut out, &params)?;
            } else {
                serde_json::to_writer(&mut out, &params)?;
            }
            writeln!(out)?;
        }
        Command::Types => {
            for sql_type in SqlType::ALL {
                writeln!(out, "{sql_type}\t{}", sql_type.code())?;
            }
        }
    }

    Ok(())
}
