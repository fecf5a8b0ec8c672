//! Poll pipeline for the watched branch
//!
//! Same shape as any gather/plan/execute flow:
//! 1. Gather - fetch the branch tip (effectful)
//! 2. Detect - compare against the stored tip (pure, testable)
//! 3. Execute - record the tip and request the merge (effectful)

mod detect;
mod execute;

pub use detect::detect_change;
pub use execute::{poll_once, run_poll};
