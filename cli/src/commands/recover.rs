//! Recover Command
//!
//! Seed recovery from outputs given on the command line.

use super::{parse_u32, parse_u64};
use anyhow::{Context, Result};
use clap::Args;
use seedrev::{Recoverer, SearchRange};

#[derive(Args)]
pub struct RecoverArgs {
    /// Consecutive outputs, hex with 0x or decimal (3+ unless --all)
    #[arg(value_name = "OUTPUT", required = true, value_parser = parse_u32)]
    outputs: Vec<u32>,

    /// First low-bit guess to try
    #[arg(long, value_parser = parse_u64, default_value = "0")]
    start: u64,

    /// One past the last low-bit guess to try
    #[arg(long, value_parser = parse_u64, default_value = "0x100000000")]
    end: u64,

    /// List every consistent seed (allows two outputs; exhaustive)
    #[arg(long)]
    all: bool,

    /// Also print this many outputs following the observed ones
    #[arg(short, long, default_value_t = 0)]
    predict: usize,
}

/// Run a recovery and print the seed(s).
pub fn recover_outputs(args: &RecoverArgs) -> Result<()> {
    let range = SearchRange::new(args.start, args.end).context("Bad --start/--end")?;
    let recoverer = Recoverer::new().with_range(range);
    log::debug!(
        "recovering from {} output(s), guesses {:#x}..{:#x}",
        args.outputs.len(),
        range.start(),
        range.end()
    );

    let found = if args.all {
        recoverer
            .recover_candidates(&args.outputs)
            .context("Candidate search failed")?
    } else {
        vec![recoverer
            .recover(&args.outputs)
            .context("Recovery failed")?]
    };

    if found.len() > 1 {
        log::warn!(
            "{} seeds match {} output(s); supply more outputs to disambiguate",
            found.len(),
            args.outputs.len()
        );
    }

    let observed = i64::try_from(args.outputs.len()).context("Too many outputs")?;
    for recovered in &found {
        println!("seed  {recovered}");
        println!("low   0x{:08x}", recovered.low_bits());
        for k in 0..i64::try_from(args.predict).context("Prediction count too large")? {
            let index = observed + k;
            println!("next  [{index}] 0x{:08x}", recovered.output_at(index));
        }
    }

    Ok(())
}
