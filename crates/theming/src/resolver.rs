//! Style resolution
//!
//! Merges the three layers of a style decision: preset base, context
//! adjustments, explicit overrides. Overrides always win over context
//! adjustments, which win over the preset base. Keeping that ordering exact
//! is the one subtle correctness property of the engine; a component that
//! honors the theme but ignores an explicit override is a regression.

use crate::color::{flatten_onto, is_translucent, Color};
use crate::context::{ColorScheme, ThemeContext};
use crate::preset::{self, StylePreset};
use crate::tokens::EdgeInsets;
use crate::typography::FontToken;
use serde::{Deserialize, Serialize};

// =============================================================================
// Overrides
// =============================================================================

/// Partial, field-per-field style override set
///
/// Every populated field unconditionally replaces the corresponding resolved
/// field, regardless of preset or context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleOverrides {
    /// Background color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Foreground color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<Color>,
    /// Corner radius override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,
    /// Padding override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<EdgeInsets>,
    /// Font token override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontToken>,
    /// Shadow radius override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_radius: Option<f32>,
    /// Shadow color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<Color>,
}

impl StyleOverrides {
    /// Create an empty override set
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the background color
    pub fn with_background_color(mut self, color: impl Into<Color>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Override the foreground color
    pub fn with_foreground_color(mut self, color: impl Into<Color>) -> Self {
        self.foreground_color = Some(color.into());
        self
    }

    /// Override the corner radius
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Override the padding
    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Override the font token
    pub fn with_font(mut self, font: FontToken) -> Self {
        self.font = Some(font);
        self
    }

    /// Override the shadow radius
    pub fn with_shadow_radius(mut self, radius: f32) -> Self {
        self.shadow_radius = Some(radius);
        self
    }

    /// Override the shadow color
    pub fn with_shadow_color(mut self, color: impl Into<Color>) -> Self {
        self.shadow_color = Some(color.into());
        self
    }

    /// Whether no field is overridden
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

// =============================================================================
// Request
// =============================================================================

/// One style resolution request
///
/// Immutable value created per render; names the preset and any explicit
/// overrides the caller wants applied on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleRequest {
    /// Requested preset tag
    #[serde(default)]
    pub preset: StylePreset,
    /// Explicit overrides, applied last
    #[serde(default, skip_serializing_if = "StyleOverrides::is_empty")]
    pub overrides: StyleOverrides,
}

impl StyleRequest {
    /// Request a preset with no overrides
    pub fn new(preset: StylePreset) -> Self {
        Self { preset, overrides: StyleOverrides::default() }
    }

    /// Attach overrides to the request
    pub fn with_overrides(mut self, overrides: StyleOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

// =============================================================================
// Resolved Style
// =============================================================================

/// The final, concrete paint and layout parameters
///
/// Cheap to recompute; callers consume it immediately rather than caching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    /// Fill color
    pub background_color: Color,
    /// Content color
    pub foreground_color: Color,
    /// Corner radius in pixels
    pub corner_radius: f32,
    /// Padding
    pub padding: EdgeInsets,
    /// Semantic font token
    pub font: FontToken,
    /// Shadow blur radius in pixels
    pub shadow_radius: f32,
    /// Shadow color
    pub shadow_color: Color,
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolve a style request against the ambient context
///
/// Pure function: identical inputs always yield an identical
/// [`ResolvedStyle`], and there is no failure path. Precedence is
/// overrides > context adjustment > preset base.
pub fn resolve(request: &StyleRequest, context: &ThemeContext) -> ResolvedStyle {
    let row = preset::lookup(request.preset);

    // Layer 1: preset base, picking the scheme's paint set.
    let paints = match context.color_scheme {
        ColorScheme::Light => &row.light,
        ColorScheme::Dark => &row.dark,
    };
    let mut background_color = paints.background.clone();
    let foreground_color = paints.foreground.clone();
    let shadow_color = paints.shadow_color.clone();
    let mut padding = row.padding;
    let mut font = row.font;

    // Layer 2: context adjustments.
    if context.reduce_transparency && is_translucent(&background_color) {
        let surface = preset::surface_color(context.color_scheme.is_dark());
        background_color = flatten_onto(&background_color, surface);
    }
    let steps = context.size_category.scale_steps();
    if steps > 0 {
        padding = padding.scaled(context.size_category.padding_scale());
        font = font.scaled_up(steps);
    }

    // Layer 3: overrides win unconditionally, field by field.
    let overrides = &request.overrides;
    ResolvedStyle {
        background_color: overrides.background_color.clone().unwrap_or(background_color),
        foreground_color: overrides.foreground_color.clone().unwrap_or(foreground_color),
        corner_radius: overrides.corner_radius.unwrap_or(row.corner_radius),
        padding: overrides.padding.unwrap_or(padding),
        font: overrides.font.unwrap_or(font),
        shadow_radius: overrides.shadow_radius.unwrap_or(row.shadow_radius),
        shadow_color: overrides.shadow_color.clone().unwrap_or(shadow_color),
    }
}
