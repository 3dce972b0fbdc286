//! Style resolution engine for Prism UI
//!
//! This crate turns a requested style preset plus the ambient presentation
//! context into a concrete, immutable set of paint and layout parameters.
//! It is the leaf of the workspace: no async, no I/O, no dependency on the
//! rendering host.
//!
//! # Resolution model
//!
//! A [`resolver::StyleRequest`] names a [`preset::StylePreset`] and an
//! optional set of field overrides. [`resolver::resolve`] merges three
//! layers, in strictly increasing precedence:
//!
//! 1. the preset's base parameters from the static preset table,
//! 2. context adjustments (dark scheme, reduced transparency, size scaling),
//! 3. the request's explicit overrides.
//!
//! The same inputs always produce the same [`resolver::ResolvedStyle`];
//! resolution cannot fail. A preset tag with no table row degrades to the
//! default preset.
//!
//! # Example
//!
//! ```rust
//! use theming::context::{ColorScheme, ThemeContext};
//! use theming::preset::StylePreset;
//! use theming::resolver::{resolve, StyleOverrides, StyleRequest};
//!
//! let request = StyleRequest::new(StylePreset::Outline)
//!     .with_overrides(StyleOverrides::new().with_corner_radius(4.0));
//! let context = ThemeContext::new().with_color_scheme(ColorScheme::Light);
//!
//! let style = resolve(&request, &context);
//! assert_eq!(style.corner_radius, 4.0);
//! ```
//!
//! # Modules
//!
//! - [`color`] - Hex color parsing, formatting, and alpha flattening
//! - [`context`] - Color scheme, size category, and accessibility context
//! - [`tokens`] - Design tokens (spacing, radius, borders, durations)
//! - [`typography`] - Semantic font tokens and text styles
//! - [`preset`] - The static preset table
//! - [`resolver`] - Request/override merging
//! - [`motion`] - Pure-function phases for cosmetic effects

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod context;
pub mod motion;
pub mod preset;
pub mod resolver;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use color::{parse_hex_color, parse_hex_rgba, rgb_to_hex, Color};
pub use context::{ColorScheme, SizeCategory, ThemeContext};
pub use preset::{preset_table, PaintSet, PresetDefinition, StylePreset};
pub use resolver::{resolve, ResolvedStyle, StyleOverrides, StyleRequest};
pub use tokens::EdgeInsets;
pub use typography::{FontToken, TextStyle};
