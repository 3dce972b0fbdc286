//! Design tokens for Prism UI
//!
//! Spacing, radius, border, and duration primitives shared by the preset
//! table and the motion helpers. Values are in pixels unless noted.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels, based on a 4px unit
pub mod spacing {
    /// 4px - Extra small
    pub const XS: f32 = 4.0;
    /// 8px - Small
    pub const SM: f32 = 8.0;
    /// 12px - Medium
    pub const MD: f32 = 12.0;
    /// 16px - Large
    pub const LG: f32 = 16.0;
    /// 20px - Extra large
    pub const XL: f32 = 20.0;
    /// 24px - 2x large
    pub const XXL: f32 = 24.0;
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// No radius (0px)
    pub const NONE: f32 = 0.0;
    /// Small radius (4px)
    pub const SM: f32 = 4.0;
    /// Medium radius (8px)
    pub const MD: f32 = 8.0;
    /// Large radius (12px)
    pub const LG: f32 = 12.0;
    /// Extra large radius (16px)
    pub const XL: f32 = 16.0;
    /// Full/round radius (9999px)
    pub const FULL: f32 = 9999.0;
}

// =============================================================================
// Border Width Tokens
// =============================================================================

/// Border width tokens
pub mod border {
    /// Hairline border (0.5px)
    pub const HAIRLINE: f32 = 0.5;
    /// Thin border (1px)
    pub const THIN: f32 = 1.0;
    /// Medium border (2px)
    pub const MEDIUM: f32 = 2.0;
}

// =============================================================================
// Animation Tokens
// =============================================================================

/// Animation duration tokens (in milliseconds)
pub mod duration {
    /// Fast (100ms)
    pub const FAST: u32 = 100;
    /// Normal (150ms)
    pub const NORMAL: u32 = 150;
    /// Slow (300ms)
    pub const SLOW: u32 = 300;
    /// Shimmer sweep period (1200ms)
    pub const SHIMMER: u32 = 1200;
    /// Glow pulse period (2000ms)
    pub const GLOW: u32 = 2000;
}

// =============================================================================
// Typography Tokens
// =============================================================================

/// Font weight values
pub mod font_weight {
    /// Normal/Regular (400)
    pub const NORMAL: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semi-bold (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}

/// Line height multipliers
pub mod line_height {
    /// Tight (1.25)
    pub const TIGHT: f32 = 1.25;
    /// Normal (1.5)
    pub const NORMAL: f32 = 1.5;
}

/// Letter spacing (tracking) in em units
pub mod tracking {
    /// Default letter spacing
    pub const DEFAULT: f32 = 0.0;
    /// Tight letter spacing (-0.025em)
    pub const TIGHT: f32 = -0.025;
}

// =============================================================================
// Edge Insets
// =============================================================================

/// Per-side padding values
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    /// Top inset
    pub top: f32,
    /// Right inset
    pub right: f32,
    /// Bottom inset
    pub bottom: f32,
    /// Left inset
    pub left: f32,
}

impl EdgeInsets {
    /// Create insets with explicit per-side values
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Uniform insets on all sides
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Symmetric vertical/horizontal insets
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Multiply every side by a factor
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(
            self.top * factor,
            self.right * factor,
            self.bottom * factor,
            self.left * factor,
        )
    }
}
