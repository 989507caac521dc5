//! Orrery viewer binary.
//!
//! ```text
//! orrery [options.toml]
//! ```
//!
//! Keys: R reset, C clear trail, S solid/wireframe, X x-axis only,
//! H harmonize. Drag to rotate the camera, scroll to zoom.

use std::path::Path;

use orrery::{options::Options, OrreryError, Viewer};

fn main() -> Result<(), OrreryError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading options from {path}");
            Options::load(Path::new(&path))?
        }
        None => Options::default(),
    };

    Viewer::builder()
        .with_title("Orrery")
        .with_options(options)
        .build()
        .run()
}
