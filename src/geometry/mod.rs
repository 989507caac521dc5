//! CPU-side procedural geometry shared by the sphere chain and the trail.
//!
//! Everything here is plain data and pure math; GPU upload lives in
//! [`crate::gpu`] and [`crate::renderer`].

/// Two-axis rotation primitives used by the orbital transform.
pub mod rotation;
/// Latitude/longitude unit sphere tessellation.
pub mod sphere_mesh;
/// The vertex record uploaded for every sphere and trail vertex.
pub mod vertex;

pub use sphere_mesh::UnitSphereMesh;
pub use vertex::{DrawStyle, Vertex};
