//! CLI Commands
//!
//! All seedrev CLI commands organized as separate modules.

mod check;
mod generate;
mod recover;

pub use check::check_mode;
pub use generate::generate;
pub use recover::{recover_outputs, RecoverArgs};

use anyhow::{Context, Result};

// =============================================================================
// PARSING
// =============================================================================

/// Parse `0x`-prefixed hex or plain decimal.
pub fn parse_u64(s: &str) -> Result<u64> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse(),
    }
    .with_context(|| format!("Invalid number: {s}"))
}

/// Parse a 32-bit output (`0x`-prefixed hex or decimal).
pub fn parse_u32(s: &str) -> Result<u32> {
    let value = parse_u64(s)?;
    u32::try_from(value).with_context(|| format!("Output does not fit in 32 bits: {s}"))
}
