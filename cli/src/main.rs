//! seedrev CLI
//!
//! Recover golden-gamma generator seeds from observed outputs.

mod commands;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use commands::{check_mode, generate, recover_outputs, RecoverArgs};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "seedrev")]
#[command(about = "Recover PRNG seeds by inverting the output finalizer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Worker threads for the search (default: all cores)
    #[arg(short = 'j', long, global = true, value_name = "N")]
    threads: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Recover the seed from consecutive outputs
    Recover(RecoverArgs),
    /// Print outputs of a stream (forward simulation)
    Generate {
        /// Seed (state before the first output), hex with 0x or decimal
        #[arg(short, long, value_parser = commands::parse_u64)]
        seed: u64,
        /// Number of outputs
        #[arg(short = 'n', long, default_value_t = 3)]
        count: usize,
    },
    /// Verify seeds from file; each line: `<seed>  <o1> <o2> <o3>`
    Check {
        #[arg(value_name = "FILE")]
        vector_file: PathBuf,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure worker threads")?;
    }
    log::debug!("searching on {} worker(s)", rayon::current_num_threads());

    match &cli.command {
        Commands::Recover(args) => recover_outputs(args)?,
        Commands::Generate { seed, count } => generate(*seed, *count),
        Commands::Check { vector_file } => check_mode(vector_file)?,
    }

    Ok(())
}
