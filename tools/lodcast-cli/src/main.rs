//! lodcast command line interface
//!
//! Offline preprocessing for LOD tiles: encode point files into tile blobs
//! and inspect existing blobs.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{encode, inspect};
use crate::error::Result;

/// lodcast command line interface
///
/// Preprocess 2D point clouds into locality-sorted, LOD-indexed tile blobs.
#[derive(Parser, Debug)]
#[command(name = "lodcast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Input formats for point files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PointFormat {
    /// CSV rows of `x,y`
    Csv,
    /// Raw little-endian f32 scalars
    Raw,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode a point file into an LOD tile blob
    Encode {
        /// Path to the input point file
        input: PathBuf,

        /// LOD depth (the blob indexes 4^depth partitions)
        #[arg(short, long, default_value = "4")]
        depth: u32,

        /// Output blob path
        #[arg(short, long)]
        output: PathBuf,

        /// Format of the input file
        #[arg(short = 'F', long, value_enum, default_value = "csv")]
        format: PointFormat,
    },

    /// Decode a tile blob and print a summary
    Inspect {
        /// Path to the blob
        input: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { input, depth, output, format } => {
            encode::run(&input, depth, &output, format)
        }
        Commands::Inspect { input } => inspect::run(&input),
    }
}
