//! Shared utilities: change-gated alpha tracking and fixed-step tick timing.

pub mod alpha_gate;
/// Fixed-period tick scheduling.
pub mod frame_timing;
