//! Crate-level error types.

use std::fmt;

/// Errors produced by the orrery crate.
#[derive(Debug)]
pub enum OrreryError {
    /// The window surface could not be created.
    Surface(wgpu::CreateSurfaceError),
    /// No adapter can present to the window surface.
    NoAdapter(wgpu::RequestAdapterError),
    /// The adapter refused the device request.
    Device(wgpu::RequestDeviceError),
    /// The adapter has no configuration for the window surface.
    UnsupportedSurface,
    /// Sphere tessellation too coarse or too dense for 16-bit indices.
    InvalidTessellation {
        /// Requested longitude steps per ring.
        segments: u32,
        /// Requested latitude rings.
        rings: u32,
    },
    /// Trail capacity outside the supported range.
    InvalidCapacity(usize),
    /// A sphere's parent must be an earlier member of the chain.
    InvalidParent {
        /// The referenced parent index.
        parent: usize,
        /// Chain length at the time of the insertion.
        len: usize,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn a background thread.
    ThreadSpawn(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for OrreryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(e) => write!(f, "surface creation failed: {e}"),
            Self::NoAdapter(e) => write!(f, "no usable GPU adapter: {e}"),
            Self::Device(e) => write!(f, "GPU device request failed: {e}"),
            Self::UnsupportedSurface => {
                write!(f, "surface not supported by the GPU adapter")
            }
            Self::InvalidTessellation { segments, rings } => write!(
                f,
                "invalid sphere tessellation: {segments} segments x {rings} rings"
            ),
            Self::InvalidCapacity(capacity) => {
                write!(f, "invalid trail capacity: {capacity}")
            }
            Self::InvalidParent { parent, len } => write!(
                f,
                "parent index {parent} is not an earlier chain member (chain length {len})"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for OrreryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Surface(e) => Some(e),
            Self::NoAdapter(e) => Some(e),
            Self::Device(e) => Some(e),
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrreryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
