//! The static preset table
//!
//! Every enumerated [`StylePreset`] has exactly one row describing its base
//! paint and layout parameters in both color schemes. The table is data, not
//! a `match`: lookups scan it and degrade to the default row when a tag has
//! no entry, and a test asserts the table is exhaustive so a missing row is
//! caught at test time instead of surfacing to users.

use crate::color::Color;
use crate::tokens::{radius, spacing, EdgeInsets};
use crate::typography::FontToken;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// =============================================================================
// Brand Colors
// =============================================================================

/// Prism brand colors
pub mod brand {
    /// Primary brand color (indigo)
    pub const PRIMARY: &str = "#4F46E5";

    /// Primary brand color adjusted for dark backgrounds
    pub const PRIMARY_DARK: &str = "#6366F1";

    /// Soft variant of the primary color for dark-scheme foregrounds
    pub const PRIMARY_SOFT: &str = "#A5B4FC";

    /// Light scheme surface
    pub const SURFACE_LIGHT: &str = "#FFFFFF";

    /// Dark scheme surface
    pub const SURFACE_DARK: &str = "#111827";

    /// Elevated dark scheme surface
    pub const SURFACE_DARK_RAISED: &str = "#1F2937";
}

/// Opaque surface color for a scheme, used as the flattening backdrop
pub fn surface_color(dark: bool) -> &'static str {
    if dark {
        brand::SURFACE_DARK
    } else {
        brand::SURFACE_LIGHT
    }
}

// =============================================================================
// Style Preset
// =============================================================================

/// Named style preset tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    /// Neutral surface styling
    #[default]
    Default,
    /// Solid brand-colored fill
    Filled,
    /// Translucent brand tint
    Tinted,
    /// Bordered, surface-colored
    Outline,
    /// Low-emphasis neutral tint
    Subtle,
    /// No fill at all
    Ghost,
}

impl StylePreset {
    /// All preset tags
    pub const ALL: [StylePreset; 6] = [
        StylePreset::Default,
        StylePreset::Filled,
        StylePreset::Tinted,
        StylePreset::Outline,
        StylePreset::Subtle,
        StylePreset::Ghost,
    ];
}

impl std::fmt::Display for StylePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StylePreset::Default => write!(f, "default"),
            StylePreset::Filled => write!(f, "filled"),
            StylePreset::Tinted => write!(f, "tinted"),
            StylePreset::Outline => write!(f, "outline"),
            StylePreset::Subtle => write!(f, "subtle"),
            StylePreset::Ghost => write!(f, "ghost"),
        }
    }
}

impl std::str::FromStr for StylePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(StylePreset::Default),
            "filled" => Ok(StylePreset::Filled),
            "tinted" => Ok(StylePreset::Tinted),
            "outline" => Ok(StylePreset::Outline),
            "subtle" => Ok(StylePreset::Subtle),
            "ghost" => Ok(StylePreset::Ghost),
            _ => Err(format!("Unknown preset: {}", s)),
        }
    }
}

// =============================================================================
// Preset Definition
// =============================================================================

/// Paint colors for one color scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintSet {
    /// Fill color
    pub background: Color,
    /// Content color
    pub foreground: Color,
    /// Shadow color
    pub shadow_color: Color,
}

impl PaintSet {
    /// Create a paint set from hex strings
    pub fn new(background: &str, foreground: &str, shadow_color: &str) -> Self {
        Self {
            background: background.to_string(),
            foreground: foreground.to_string(),
            shadow_color: shadow_color.to_string(),
        }
    }
}

/// One row of the preset table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetDefinition {
    /// The tag this row belongs to
    pub preset: StylePreset,
    /// Paints for the light scheme
    pub light: PaintSet,
    /// Paints for the dark scheme
    pub dark: PaintSet,
    /// Corner radius in pixels
    pub corner_radius: f32,
    /// Base padding
    pub padding: EdgeInsets,
    /// Semantic font token
    pub font: FontToken,
    /// Shadow blur radius in pixels
    pub shadow_radius: f32,
}

// =============================================================================
// Preset Table
// =============================================================================

static PRESET_TABLE: OnceLock<Vec<PresetDefinition>> = OnceLock::new();

/// The static preset table, one row per tag
pub fn preset_table() -> &'static [PresetDefinition] {
    PRESET_TABLE.get_or_init(build_table)
}

fn build_table() -> Vec<PresetDefinition> {
    vec![
        PresetDefinition {
            preset: StylePreset::Default,
            light: PaintSet::new(brand::SURFACE_LIGHT, "#111827", "#0000001A"),
            dark: PaintSet::new(brand::SURFACE_DARK_RAISED, "#F9FAFB", "#00000066"),
            corner_radius: radius::MD,
            padding: EdgeInsets::symmetric(spacing::SM, spacing::LG),
            font: FontToken::Body,
            shadow_radius: 2.0,
        },
        PresetDefinition {
            preset: StylePreset::Filled,
            light: PaintSet::new(brand::PRIMARY, "#FFFFFF", "#4F46E533"),
            dark: PaintSet::new(brand::PRIMARY_DARK, "#FFFFFF", "#00000066"),
            corner_radius: radius::LG,
            padding: EdgeInsets::symmetric(spacing::MD, spacing::XXL),
            font: FontToken::Callout,
            shadow_radius: 4.0,
        },
        PresetDefinition {
            preset: StylePreset::Tinted,
            light: PaintSet::new("#4F46E51F", brand::PRIMARY, "#00000000"),
            dark: PaintSet::new("#6366F133", brand::PRIMARY_SOFT, "#00000000"),
            corner_radius: radius::MD,
            padding: EdgeInsets::symmetric(spacing::SM, spacing::LG),
            font: FontToken::Body,
            shadow_radius: 0.0,
        },
        PresetDefinition {
            preset: StylePreset::Outline,
            light: PaintSet::new(brand::SURFACE_LIGHT, brand::PRIMARY, "#00000000"),
            dark: PaintSet::new(brand::SURFACE_DARK, brand::PRIMARY_SOFT, "#00000000"),
            corner_radius: radius::MD,
            padding: EdgeInsets::symmetric(spacing::SM, spacing::LG),
            font: FontToken::Body,
            shadow_radius: 0.0,
        },
        PresetDefinition {
            preset: StylePreset::Subtle,
            light: PaintSet::new("#6B72801A", "#374151", "#00000000"),
            dark: PaintSet::new("#9CA3AF26", "#D1D5DB", "#00000000"),
            corner_radius: radius::SM,
            padding: EdgeInsets::symmetric(6.0, spacing::MD),
            font: FontToken::Body,
            shadow_radius: 0.0,
        },
        PresetDefinition {
            preset: StylePreset::Ghost,
            light: PaintSet::new("#FFFFFF00", brand::PRIMARY, "#00000000"),
            dark: PaintSet::new("#11182700", brand::PRIMARY_SOFT, "#00000000"),
            corner_radius: radius::SM,
            padding: EdgeInsets::symmetric(spacing::XS, spacing::SM),
            font: FontToken::Body,
            shadow_radius: 0.0,
        },
    ]
}

/// Look up the table row for a preset
///
/// A tag with no row degrades to the default preset's row; this is the
/// documented fallback, never an error.
pub fn lookup(preset: StylePreset) -> &'static PresetDefinition {
    lookup_in(preset_table(), preset)
}

fn lookup_in(table: &[PresetDefinition], preset: StylePreset) -> &PresetDefinition {
    table
        .iter()
        .find(|row| row.preset == preset)
        .or_else(|| table.iter().find(|row| row.preset == StylePreset::Default))
        .unwrap_or(&table[0])
}
