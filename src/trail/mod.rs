//! Ribbon trail left behind by the last sphere of the chain.

/// Fixed-capacity circular triangle-strip buffer.
pub mod ribbon;

pub use ribbon::RibbonTrail;
