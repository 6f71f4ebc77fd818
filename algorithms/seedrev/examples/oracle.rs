//! Oracle-Assisted Recovery
//!
//! A single output does not determine the seed. Here the "oracle" replays two
//! later observations that the search itself never sees. One replayed output
//! is not enough: about one wrong seed matches any single 32-bit check.

#![allow(clippy::pedantic, clippy::nursery)]

use seedrev::{CancelToken, Recoverer, Stream};

const SEED: u64 = 0xC0FF_EE00_1234_5678;

fn main() -> Result<(), seedrev::RecoveryError> {
    let mut stream = Stream::new(SEED);
    let first = stream.next_u32();
    let second = stream.next_u32();
    let third = stream.next_u32();

    let token = CancelToken::new();
    let recoverer = Recoverer::new().with_cancel(token);

    let recovered = recoverer.recover_with_oracle(first, |candidate| {
        let mut replay = Stream::new(candidate);
        replay.nth(1) == Some(second) && replay.next() == Some(third)
    })?;
    assert_eq!(recovered.seed(), SEED);

    println!("Observed: {first:08x}");
    println!("Seed:     {recovered}");
    Ok(())
}
