//! Label configuration.

use derive_setters::Setters;

use crate::{Color, Dp, Font, InteractionScope};

/// Arguments for [`ExpandableLabel`](crate::ExpandableLabel).
///
/// A configuration is a plain value. Assigning a new one to a label replaces
/// the previous one wholesale.
///
/// ```
/// use expandable_label::{Color, Dp, ExpandableLabelConfig, Font, InteractionScope};
///
/// let config = ExpandableLabelConfig::new(Dp(300.0), Font::system(Dp(16.0)), Color::BLACK)
///     .button_color(Color::BLUE)
///     .unexpanded_max_lines(2)
///     .interaction_scope(InteractionScope::Text);
///
/// assert_eq!(config.expanded_max_lines, 0);
/// assert_eq!(config.button_tint(), Color::BLUE);
/// ```
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct ExpandableLabelConfig {
    /// Layout width budget. Rows are measured at exactly this width.
    pub width: Dp,
    /// Font applied to plain text.
    pub font: Font,
    /// Color applied to plain text.
    pub text_color: Color,
    /// Optional toggle tint. Falls back to `text_color`.
    #[setters(strip_option)]
    pub button_color: Option<Color>,
    /// Row limit while collapsed, `0` meaning unlimited.
    pub unexpanded_max_lines: u32,
    /// Row limit while expanded, `0` meaning unlimited.
    pub expanded_max_lines: u32,
    /// Where the expand/collapse gesture is accepted.
    pub interaction_scope: InteractionScope,
}

impl ExpandableLabelConfig {
    /// Default row limit while collapsed.
    pub const DEFAULT_UNEXPANDED_MAX_LINES: u32 = 3;
    /// Default row limit while expanded (unlimited).
    pub const DEFAULT_EXPANDED_MAX_LINES: u32 = 0;

    /// Creates a configuration with three collapsed rows, unlimited expanded
    /// rows and a button-scoped toggle.
    pub fn new(width: Dp, font: Font, text_color: Color) -> Self {
        Self {
            width,
            font,
            text_color,
            button_color: None,
            unexpanded_max_lines: Self::DEFAULT_UNEXPANDED_MAX_LINES,
            expanded_max_lines: Self::DEFAULT_EXPANDED_MAX_LINES,
            interaction_scope: InteractionScope::default(),
        }
    }

    /// The toggle tint: `button_color`, else `text_color`.
    pub fn button_tint(&self) -> Color {
        self.button_color.unwrap_or(self.text_color)
    }

    /// Row limit for an expand state, `0` meaning unlimited.
    pub fn max_lines(&self, is_expanded: bool) -> u32 {
        if is_expanded {
            self.expanded_max_lines
        } else {
            self.unexpanded_max_lines
        }
    }

    /// Line height of the configured font.
    pub fn line_height(&self) -> Dp {
        self.font.effective_line_height()
    }
}
