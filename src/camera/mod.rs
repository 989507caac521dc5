//! Perspective camera, its arcball rig and its GPU uniform.

/// Arcball rig and the camera bind group.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
