#![no_main]

use libfuzzer_sys::fuzz_target;
use seedrev::{Recoverer, SearchRange, Stream};

fuzz_target!(|seed: u64| {
    let outputs: Vec<u32> = Stream::new(seed).take(3).collect();

    // Window of 1024 guesses that always contains the true low bits.
    let low = seedrev::finalizer::mix64(seed.wrapping_add(seedrev::GAMMA)) as u32;
    let start = u64::from(low & !0x3FF);
    let range = SearchRange::new(start, start + 0x400).unwrap();

    let recovered = Recoverer::new()
        .with_range(range)
        .with_partitions(1)
        .recover(&outputs)
        .unwrap();

    assert_eq!(recovered.seed(), seed, "Recovered a different seed");
});
