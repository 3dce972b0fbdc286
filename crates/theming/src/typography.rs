//! Semantic typography tokens
//!
//! Components never pick raw font sizes; they name a [`FontToken`] and the
//! host maps the resolved [`TextStyle`] onto its own text system. Tokens are
//! ordered so the size-category adjustment can promote them monotonically.

use crate::tokens::{font_weight, line_height, tracking};
use serde::{Deserialize, Serialize};

// =============================================================================
// Font Size Scale
// =============================================================================

/// Font size scale in pixels
pub mod font_size {
    /// Caption (12px)
    pub const CAPTION: f32 = 12.0;
    /// Footnote (13px)
    pub const FOOTNOTE: f32 = 13.0;
    /// Body (15px)
    pub const BODY: f32 = 15.0;
    /// Callout (16px)
    pub const CALLOUT: f32 = 16.0;
    /// Headline (17px)
    pub const HEADLINE: f32 = 17.0;
    /// Title (22px)
    pub const TITLE: f32 = 22.0;
    /// Large title (34px)
    pub const LARGE_TITLE: f32 = 34.0;
}

// =============================================================================
// Text Style
// =============================================================================

/// Concrete text parameters a token resolves to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (400, 500, 600, 700)
    pub font_weight: u16,
    /// Line height multiplier
    pub line_height: f32,
    /// Letter spacing in em
    pub letter_spacing: f32,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(font_size: f32, font_weight: u16) -> Self {
        Self {
            font_size,
            font_weight,
            line_height: line_height::NORMAL,
            letter_spacing: tracking::DEFAULT,
        }
    }

    /// Set line height
    pub fn with_line_height(mut self, lh: f32) -> Self {
        self.line_height = lh;
        self
    }

    /// Set letter spacing
    pub fn with_letter_spacing(mut self, ls: f32) -> Self {
        self.letter_spacing = ls;
        self
    }

    /// Actual line height in pixels
    pub fn line_height_px(&self) -> f32 {
        self.font_size * self.line_height
    }
}

// =============================================================================
// Font Token
// =============================================================================

/// Semantic font token, ordered from smallest to largest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum FontToken {
    /// Caption text
    Caption,
    /// Footnote text
    Footnote,
    /// Body text (default)
    #[default]
    Body,
    /// Callout text
    Callout,
    /// Headline text
    Headline,
    /// Title text
    Title,
    /// Large title text
    LargeTitle,
}

impl FontToken {
    /// All tokens, in ascending size order
    pub const ALL: [FontToken; 7] = [
        FontToken::Caption,
        FontToken::Footnote,
        FontToken::Body,
        FontToken::Callout,
        FontToken::Headline,
        FontToken::Title,
        FontToken::LargeTitle,
    ];

    /// Position on the ordinal scale (0 = smallest)
    pub fn ordinal(&self) -> u32 {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0) as u32
    }

    /// Promote the token by `steps` tiers, saturating at [`FontToken::LargeTitle`]
    pub fn scaled_up(&self, steps: u32) -> FontToken {
        let index = (self.ordinal() + steps).min(Self::ALL.len() as u32 - 1);
        Self::ALL[index as usize]
    }

    /// Resolve the token to its concrete text style
    pub fn style(&self) -> TextStyle {
        match self {
            FontToken::Caption => TextStyle::new(font_size::CAPTION, font_weight::NORMAL),
            FontToken::Footnote => TextStyle::new(font_size::FOOTNOTE, font_weight::NORMAL),
            FontToken::Body => TextStyle::new(font_size::BODY, font_weight::NORMAL),
            FontToken::Callout => TextStyle::new(font_size::CALLOUT, font_weight::MEDIUM),
            FontToken::Headline => TextStyle::new(font_size::HEADLINE, font_weight::SEMI_BOLD),
            FontToken::Title => TextStyle::new(font_size::TITLE, font_weight::SEMI_BOLD)
                .with_line_height(line_height::TIGHT)
                .with_letter_spacing(tracking::TIGHT),
            FontToken::LargeTitle => TextStyle::new(font_size::LARGE_TITLE, font_weight::BOLD)
                .with_line_height(line_height::TIGHT)
                .with_letter_spacing(tracking::TIGHT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_ordering() {
        for pair in FontToken::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].style().font_size < pair[1].style().font_size);
        }
    }

    #[test]
    fn test_scaled_up() {
        assert_eq!(FontToken::Body.scaled_up(0), FontToken::Body);
        assert_eq!(FontToken::Body.scaled_up(1), FontToken::Callout);
        assert_eq!(FontToken::Body.scaled_up(2), FontToken::Headline);
    }

    #[test]
    fn test_scaled_up_saturates() {
        assert_eq!(FontToken::Title.scaled_up(10), FontToken::LargeTitle);
        assert_eq!(FontToken::LargeTitle.scaled_up(1), FontToken::LargeTitle);
    }

    #[test]
    fn test_scaled_up_monotonic() {
        for token in FontToken::ALL {
            for steps in 0..4 {
                assert!(token.scaled_up(steps) <= token.scaled_up(steps + 1));
                assert!(token <= token.scaled_up(steps));
            }
        }
    }

    #[test]
    fn test_title_styles_are_tight() {
        let title = FontToken::Title.style();
        assert_eq!(title.line_height, 1.25);
        assert!(title.letter_spacing < 0.0);
    }

    #[test]
    fn test_line_height_px() {
        let style = TextStyle::new(16.0, font_weight::NORMAL);
        assert_eq!(style.line_height_px(), 24.0);
    }

    #[test]
    fn test_token_serialization() {
        let json = serde_json::to_string(&FontToken::LargeTitle).unwrap();
        assert_eq!(json, "\"large-title\"");
        let back: FontToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FontToken::LargeTitle);
    }
}
