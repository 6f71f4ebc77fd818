//! Execution Engine
//!
//! Guess-space partitioning and the parallel search loop.

pub mod partition;
pub mod search;

pub use partition::SearchRange;
