use bolero::check;
use seedrev::{Recoverer, SearchRange, Stream};

#[test]
fn fuzz_recover_in_window() {
    check!().with_type::<u64>().for_each(|&seed| {
        // =============================================================================
        // OBSERVATION
        // =============================================================================

        let outputs: Vec<u32> = Stream::new(seed).take(3).collect();
        let low = seedrev::finalizer::mix64(seed.wrapping_add(seedrev::GAMMA)) as u32;

        // =============================================================================
        // RECOVERY (SMALL WINDOW AROUND THE TRUE GUESS)
        // =============================================================================

        let start = u64::from(low & !0xFF);
        let Ok(range) = SearchRange::new(start, start + 0x100) else {
            return;
        };
        let recovered = Recoverer::new()
            .with_range(range)
            .with_partitions(2)
            .recover(&outputs);

        // =============================================================================
        // VERIFICATION
        // =============================================================================

        let recovered = recovered.unwrap_or_else(|e| panic!("seed {seed:#018x}: {e}"));
        assert_eq!(recovered.seed(), seed);
        assert_eq!(recovered.next().prev(), recovered);
        assert_eq!(recovered.next().output_at(0), outputs[1]);
    });
}

#[test]
fn fuzz_jump_matches_iteration() {
    check!().with_type::<(u64, u8)>().for_each(|&(seed, n)| {
        let mut walked = Stream::new(seed);
        for _ in 0..n {
            walked.next_u32();
        }

        let mut jumped = Stream::new(seed);
        jumped.jump(i64::from(n));
        assert_eq!(walked, jumped);

        jumped.jump(-i64::from(n));
        assert_eq!(jumped.state(), seed);
    });
}
