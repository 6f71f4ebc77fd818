//! Check Command
//!
//! Verify seed recoveries listed in a file (like sha256sum -c).

use super::{parse_u32, parse_u64};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

// =============================================================================
// CHECK
// =============================================================================

/// Verify expected seeds from a vector file.
///
/// Each non-comment line holds the expected seed, two spaces, then three or
/// more whitespace-separated consecutive outputs.
pub fn check_mode(vector_file: &PathBuf) -> Result<()> {
    let file = File::open(vector_file)
        .with_context(|| format!("Failed to open: {}", vector_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Format: "seed  o1 o2 o3" (two spaces)
        let parts: Vec<&str> = line.splitn(2, "  ").collect();
        if parts.len() != 2 {
            eprintln!("Warning: Invalid format: {line}");
            continue;
        }

        let parsed = parse_u64(parts[0]).and_then(|seed| {
            let outputs = parts[1]
                .split_whitespace()
                .map(parse_u32)
                .collect::<Result<Vec<u32>>>()?;
            Ok((seed, outputs))
        });
        let (expected_seed, outputs) = match parsed {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Warning: {e}: {line}");
                continue;
            }
        };
        total += 1;

        match seedrev::recover(&outputs) {
            Ok(recovered) if recovered.seed() == expected_seed => {
                println!("{expected_seed:#018x}: OK");
            }
            Ok(recovered) => {
                println!("{expected_seed:#018x}: FAILED (recovered {recovered})");
                failed += 1;
            }
            Err(e) => {
                println!("{expected_seed:#018x}: FAILED ({e})");
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} seeds verified");
    } else {
        eprintln!("WARNING: {failed} of {total} seeds did NOT match");
        std::process::exit(1);
    }

    Ok(())
}
