//! seedrev Basic Example
//!
//! Minimal usage: `let recovered = seedrev::recover(&outputs)?;`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() -> Result<(), seedrev::RecoveryError> {
    let mut stream = seedrev::Stream::new(0x1234_5678_1234_5678);
    let outputs = [stream.next_u32(), stream.next_u32(), stream.next_u32()];

    let recovered = seedrev::recover(&outputs)?;

    println!("Outputs: {outputs:08x?}");
    println!("Seed:    {recovered}");
    println!("Next:    {:08x}", recovered.output_at(3));
    Ok(())
}
