//! Generate Command
//!
//! Forward simulation: print the first outputs of a stream.

use seedrev::Stream;

/// Print `count` outputs of the stream seeded with `seed`, one per line.
pub fn generate(seed: u64, count: usize) {
    for (index, output) in Stream::new(seed).take(count).enumerate() {
        println!("{index:>4}  0x{output:08x}");
    }
}
