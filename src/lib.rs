//! Prism UI core
//!
//! The non-visual foundation of the Prism component library: a pure style
//! resolution engine and an async image cache. UI hosts depend on this
//! facade (or on the member crates directly) and keep all rendering,
//! layout, and animation playback on their side of the boundary.
//!
//! - [`theming`] - presets, theme context, and style resolution
//! - [`image_cache`] - single-flight, byte-budgeted image caching
//! - [`networking`] - the shared HTTP transport with retry

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use image_cache;
pub use networking;
pub use theming;

// Re-export the types most hosts touch directly
pub use image_cache::{ImageBytes, ImageCache, ImageCacheConfig};
pub use theming::{resolve, ResolvedStyle, StyleOverrides, StylePreset, StyleRequest, ThemeContext};

/// Install a default `tracing` subscriber driven by `RUST_LOG`
///
/// For hosts that don't bring their own subscriber. Safe to call more than
/// once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
