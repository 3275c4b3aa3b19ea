//! Font description used to style label text.

use std::hash::{Hash, Hasher};

use derive_setters::Setters;

use crate::Dp;

/// Generic or named font family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// The platform's default sans-serif family.
    #[default]
    SansSerif,
    /// The platform's default serif family.
    Serif,
    /// The platform's default monospace family.
    Monospace,
    /// A family looked up by name.
    Named(String),
}

impl From<&str> for FontFamily {
    fn from(name: &str) -> Self {
        FontFamily::Named(name.to_string())
    }
}

impl From<String> for FontFamily {
    fn from(name: String) -> Self {
        FontFamily::Named(name)
    }
}

/// A font: family, size, line height and weight.
///
/// The line height drives every proportional measurement of the label: the
/// toggle is one line height square and its insets are an eighth of it.
///
/// ```
/// use expandable_label::{Dp, Font};
///
/// let body = Font::system(Dp(10.0));
/// assert_eq!(body.effective_line_height(), Dp(12.0));
///
/// let tight = Font::system(Dp(16.0)).line_height(Dp(20.0));
/// assert_eq!(tight.effective_line_height(), Dp(20.0));
/// ```
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct Font {
    /// Font family.
    #[setters(into)]
    pub family: FontFamily,
    /// Font size.
    pub size: Dp,
    /// Optional explicit line height. Falls back to `1.2 × size`.
    #[setters(skip)]
    pub line_height: Option<Dp>,
    /// Font weight, `400` is regular and `700` is bold.
    pub weight: u16,
}

impl Font {
    /// Multiplier applied to the font size when no line height is set.
    pub const DEFAULT_LINE_HEIGHT_FACTOR: f64 = 1.2;
    /// Regular weight.
    pub const WEIGHT_REGULAR: u16 = 400;
    /// Bold weight.
    pub const WEIGHT_BOLD: u16 = 700;

    /// Creates a regular sans-serif font of the given size.
    pub fn system(size: Dp) -> Self {
        Self {
            family: FontFamily::SansSerif,
            size,
            line_height: None,
            weight: Self::WEIGHT_REGULAR,
        }
    }

    /// Sets an explicit line height.
    pub fn line_height(mut self, line_height: Dp) -> Self {
        self.line_height = Some(line_height);
        self
    }

    /// Returns the effective line height.
    pub fn effective_line_height(&self) -> Dp {
        self.line_height
            .unwrap_or(self.size * Self::DEFAULT_LINE_HEIGHT_FACTOR)
    }

    pub(crate) fn hash_into<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        self.size.0.to_bits().hash(state);
        self.line_height.map(|h| h.0.to_bits()).hash(state);
        self.weight.hash(state);
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(Dp(16.0))
    }
}
