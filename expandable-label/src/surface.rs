//! What a renderer needs to draw the label's text.

use smallvec::SmallVec;

use crate::{Color, DpRect, Font, StyledText};

/// Render state of the label's text.
///
/// The label keeps this up to date; a renderer reads it and draws
/// [`text`](Self::text) clipped to [`line_limit`](Self::line_limit) rows,
/// flowing around every [exclusion region](Self::exclusion_regions).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextSurface {
    text: StyledText,
    font: Font,
    tint: Color,
    max_lines: u32,
    exclusion_regions: SmallVec<[DpRect; 1]>,
}

impl TextSurface {
    /// The styled text being shown.
    pub fn text(&self) -> &StyledText {
        &self.text
    }

    pub(crate) fn set_text(&mut self, text: StyledText) {
        self.text = text;
    }

    /// The label's base font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    pub(crate) fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    /// The label's tint.
    pub fn tint(&self) -> Color {
        self.tint
    }

    pub(crate) fn set_tint(&mut self, tint: Color) {
        self.tint = tint;
    }

    /// Raw row limit, `0` meaning unlimited.
    pub fn max_lines(&self) -> u32 {
        self.max_lines
    }

    pub(crate) fn set_max_lines(&mut self, max_lines: u32) {
        self.max_lines = max_lines;
    }

    /// Row limit, `None` when unlimited.
    pub fn line_limit(&self) -> Option<u32> {
        (self.max_lines != 0).then_some(self.max_lines)
    }

    /// Rectangles, in local coordinates, that text must flow around.
    pub fn exclusion_regions(&self) -> &[DpRect] {
        &self.exclusion_regions
    }

    /// Replaces the exclusion regions.
    pub fn set_exclusion_regions(&mut self, regions: impl IntoIterator<Item = DpRect>) {
        self.exclusion_regions = regions.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dp;

    #[test]
    fn test_zero_max_lines_is_unlimited() {
        let mut surface = TextSurface::default();
        assert_eq!(surface.line_limit(), None);

        surface.set_max_lines(3);
        assert_eq!(surface.line_limit(), Some(3));
    }

    #[test]
    fn test_exclusion_regions_are_replaced() {
        let mut surface = TextSurface::default();
        let rect = DpRect::new(Dp(280.0), Dp(40.0), Dp(20.0), Dp(20.0));

        surface.set_exclusion_regions([rect]);
        assert_eq!(surface.exclusion_regions(), &[rect]);

        surface.set_exclusion_regions([]);
        assert!(surface.exclusion_regions().is_empty());
    }
}
