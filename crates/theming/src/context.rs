//! Presentation context supplied by the host
//!
//! The host runtime hands the resolver a plain [`ThemeContext`] value on
//! every render pass. The resolver never queries the OS or any ambient
//! global state; everything context-dependent arrives through this struct,
//! which keeps resolution deterministic and testable without a UI host.

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Scheme
// =============================================================================

/// Host color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light appearance
    #[default]
    Light,
    /// Dark appearance
    Dark,
}

impl ColorScheme {
    /// Whether this is the dark scheme
    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorScheme::Light => write!(f, "light"),
            ColorScheme::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            _ => Err(format!("Unknown color scheme: {}", s)),
        }
    }
}

// =============================================================================
// Size Category
// =============================================================================

/// Content size category, ordered from smallest to largest
///
/// Categories above [`SizeCategory::Large`] scale padding and promote the
/// font token; the scaling is a fixed step function of the ordinal distance,
/// so readability never decreases as the category grows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum SizeCategory {
    /// Extra small content size
    XSmall,
    /// Small content size
    Small,
    /// Default content size
    #[default]
    Medium,
    /// Large content size
    Large,
    /// Extra large content size
    XLarge,
    /// 2x large content size
    XXLarge,
    /// 3x large content size
    XXXLarge,
    /// First accessibility size
    AccessibilityMedium,
    /// Largest accessibility size
    AccessibilityLarge,
}

impl SizeCategory {
    /// All categories, in ascending order
    pub const ALL: [SizeCategory; 9] = [
        SizeCategory::XSmall,
        SizeCategory::Small,
        SizeCategory::Medium,
        SizeCategory::Large,
        SizeCategory::XLarge,
        SizeCategory::XXLarge,
        SizeCategory::XXXLarge,
        SizeCategory::AccessibilityMedium,
        SizeCategory::AccessibilityLarge,
    ];

    /// Position on the ordinal scale (0 = smallest)
    pub fn ordinal(&self) -> u32 {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0) as u32
    }

    /// Number of scaling steps above the [`SizeCategory::Large`] threshold
    ///
    /// Zero for every category up to and including `Large`.
    pub fn scale_steps(&self) -> u32 {
        self.ordinal().saturating_sub(SizeCategory::Large.ordinal())
    }

    /// Padding multiplier for this category (monotonic, never below 1.0)
    pub fn padding_scale(&self) -> f32 {
        1.0 + 0.1 * self.scale_steps() as f32
    }
}

// =============================================================================
// Theme Context
// =============================================================================

/// Ambient presentation context for one resolution call
///
/// Read-only during resolution; the host constructs a fresh value per render
/// pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ThemeContext {
    /// Active color scheme
    #[serde(default)]
    pub color_scheme: ColorScheme,
    /// Content size category
    #[serde(default)]
    pub size_category: SizeCategory,
    /// Whether the user asked for reduced motion
    #[serde(default)]
    pub reduce_motion: bool,
    /// Whether the user asked for reduced transparency
    #[serde(default)]
    pub reduce_transparency: bool,
}

impl ThemeContext {
    /// Create a default context (light scheme, medium size, no flags)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color scheme
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    /// Set the size category
    pub fn with_size_category(mut self, category: SizeCategory) -> Self {
        self.size_category = category;
        self
    }

    /// Set the reduce-motion flag
    pub fn with_reduce_motion(mut self, reduce: bool) -> Self {
        self.reduce_motion = reduce;
        self
    }

    /// Set the reduce-transparency flag
    pub fn with_reduce_transparency(mut self, reduce: bool) -> Self {
        self.reduce_transparency = reduce;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Color Scheme Tests
    // ==========================================================================

    #[test]
    fn test_color_scheme_default() {
        assert_eq!(ColorScheme::default(), ColorScheme::Light);
        assert!(!ColorScheme::Light.is_dark());
        assert!(ColorScheme::Dark.is_dark());
    }

    #[test]
    fn test_color_scheme_from_str() {
        assert_eq!("light".parse::<ColorScheme>().unwrap(), ColorScheme::Light);
        assert_eq!("dark".parse::<ColorScheme>().unwrap(), ColorScheme::Dark);
        assert_eq!("DARK".parse::<ColorScheme>().unwrap(), ColorScheme::Dark);
        assert!("dim".parse::<ColorScheme>().is_err());
    }

    #[test]
    fn test_color_scheme_serialization() {
        let json = serde_json::to_string(&ColorScheme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let back: ColorScheme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ColorScheme::Dark);
    }

    // ==========================================================================
    // Size Category Tests
    // ==========================================================================

    #[test]
    fn test_size_category_ordering() {
        for pair in SizeCategory::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].ordinal() < pair[1].ordinal());
        }
    }

    #[test]
    fn test_scale_steps_below_threshold() {
        assert_eq!(SizeCategory::XSmall.scale_steps(), 0);
        assert_eq!(SizeCategory::Medium.scale_steps(), 0);
        assert_eq!(SizeCategory::Large.scale_steps(), 0);
    }

    #[test]
    fn test_scale_steps_above_threshold() {
        assert_eq!(SizeCategory::XLarge.scale_steps(), 1);
        assert_eq!(SizeCategory::XXLarge.scale_steps(), 2);
        assert_eq!(SizeCategory::AccessibilityLarge.scale_steps(), 5);
    }

    #[test]
    fn test_padding_scale_monotonic() {
        let scales: Vec<f32> = SizeCategory::ALL.iter().map(|c| c.padding_scale()).collect();
        for pair in scales.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert_eq!(SizeCategory::Medium.padding_scale(), 1.0);
    }

    // ==========================================================================
    // Theme Context Tests
    // ==========================================================================

    #[test]
    fn test_context_default() {
        let context = ThemeContext::new();
        assert_eq!(context.color_scheme, ColorScheme::Light);
        assert_eq!(context.size_category, SizeCategory::Medium);
        assert!(!context.reduce_motion);
        assert!(!context.reduce_transparency);
    }

    #[test]
    fn test_context_builder() {
        let context = ThemeContext::new()
            .with_color_scheme(ColorScheme::Dark)
            .with_size_category(SizeCategory::XXLarge)
            .with_reduce_motion(true)
            .with_reduce_transparency(true);

        assert_eq!(context.color_scheme, ColorScheme::Dark);
        assert_eq!(context.size_category, SizeCategory::XXLarge);
        assert!(context.reduce_motion);
        assert!(context.reduce_transparency);
    }

    #[test]
    fn test_context_serialization() {
        let context = ThemeContext::new().with_size_category(SizeCategory::AccessibilityMedium);
        let json = serde_json::to_string(&context).unwrap();
        let back: ThemeContext = serde_json::from_str(&json).unwrap();
        assert_eq!(back, context);
    }
}
