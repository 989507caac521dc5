//! Hierarchy of orbiting spheres.
//!
//! Every sphere but the root orbits an explicit parent that precedes it in
//! the chain, so a single ascending pass always sees up-to-date parent
//! centers.

/// Ordered chain of sphere instances and its update driver.
pub mod chain;
/// Per-instance orbital state and world-space vertex generation.
pub mod sphere;

pub use chain::SphereChain;
pub use sphere::{Appearance, ParentFrame, SphereInstance};
