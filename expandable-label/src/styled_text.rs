//! Styled (attributed) text: ordered runs of text, each with its own font and
//! color.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::{Color, Font};

/// A run of text sharing one font and one color.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    /// The text of the run.
    pub text: String,
    /// Font applied to the run.
    pub font: Font,
    /// Color applied to the run.
    pub color: Color,
}

impl TextSpan {
    /// Creates a new span.
    pub fn new(text: impl Into<String>, font: Font, color: Color) -> Self {
        Self {
            text: text.into(),
            font,
            color,
        }
    }
}

/// Text made of styled runs, in reading order.
///
/// ```
/// use expandable_label::{Color, Dp, Font, StyledText, TextSpan};
///
/// let body = Font::system(Dp(16.0));
/// let mut text = StyledText::plain("Hello, ", body.clone(), Color::BLACK);
/// text.push(TextSpan::new("world", body.weight(Font::WEIGHT_BOLD), Color::BLUE));
///
/// assert_eq!(text.to_plain_string(), "Hello, world");
/// assert_eq!(text.spans().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledText {
    spans: Vec<TextSpan>,
}

impl StyledText {
    /// Creates empty styled text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates styled text with a single run.
    pub fn plain(text: impl Into<String>, font: Font, color: Color) -> Self {
        Self {
            spans: vec![TextSpan::new(text, font, color)],
        }
    }

    /// Appends a run. Empty runs are dropped.
    pub fn push(&mut self, span: TextSpan) {
        if !span.text.is_empty() {
            self.spans.push(span);
        }
    }

    /// The runs in reading order.
    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    /// Returns `true` if there is no text at all.
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|span| span.text.is_empty())
    }

    /// Concatenated text of every run.
    pub fn to_plain_string(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Font of the first run, used as the default for engines that need one.
    pub fn leading_font(&self) -> Option<&Font> {
        self.spans.first().map(|span| &span.font)
    }

    /// A stable hash of the text and its styling, used as a measurement cache
    /// key.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.spans.len().hash(&mut hasher);
        for span in &self.spans {
            span.text.hash(&mut hasher);
            span.font.hash_into(&mut hasher);
            for channel in span.color.to_array() {
                channel.to_bits().hash(&mut hasher);
            }
        }
        hasher.finish()
    }
}

impl FromIterator<TextSpan> for StyledText {
    fn from_iter<T: IntoIterator<Item = TextSpan>>(iter: T) -> Self {
        let mut text = StyledText::new();
        for span in iter {
            text.push(span);
        }
        text
    }
}

/// A value assigned to the label with `set_text`.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelText {
    /// Plain text, styled with the label's configured font and color.
    Plain(String),
    /// Pre-styled text whose runs are kept as given.
    Styled(StyledText),
}

impl LabelText {
    /// Builds the styled text shown by the label.
    pub(crate) fn to_styled(&self, font: &Font, color: Color) -> StyledText {
        match self {
            LabelText::Plain(text) => StyledText::plain(text.clone(), font.clone(), color),
            LabelText::Styled(styled) => styled.clone(),
        }
    }
}

impl From<&str> for LabelText {
    fn from(value: &str) -> Self {
        LabelText::Plain(value.to_string())
    }
}

impl From<String> for LabelText {
    fn from(value: String) -> Self {
        LabelText::Plain(value)
    }
}

impl From<StyledText> for LabelText {
    fn from(value: StyledText) -> Self {
        LabelText::Styled(value)
    }
}
