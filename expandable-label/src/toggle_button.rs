//! An icon button whose tap area is larger than what it draws.
//!
//! ## Usage
//!
//! Small icons are hard to hit. Give the button per-edge
//! [`tap_area_insets`](ToggleButton::tap_area_insets) and taps that land just
//! outside the drawn frame still count.

use crate::{Color, Dp, DpPosition, DpRect, EdgeInsets};

/// The icon shown by the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToggleIcon {
    /// The text is collapsed and can be expanded (a downward arrow).
    #[default]
    Expand,
    /// The text is expanded and can be collapsed (an upward arrow).
    Collapse,
}

impl ToggleIcon {
    /// A single-character rendering of the icon.
    pub fn glyph(self) -> char {
        match self {
            ToggleIcon::Expand => '↓',
            ToggleIcon::Collapse => '↑',
        }
    }

    /// The icon matching an expand state.
    pub fn for_state(is_expanded: bool) -> Self {
        if is_expanded {
            ToggleIcon::Collapse
        } else {
            ToggleIcon::Expand
        }
    }
}

/// The expand/collapse toggle.
///
/// ```
/// use expandable_label::{Dp, DpPosition, DpRect, EdgeInsets, ToggleButton};
///
/// let mut button = ToggleButton::default();
/// button.set_frame(DpRect::new(Dp(100.0), Dp(40.0), Dp(20.0), Dp(20.0)));
/// button.set_tap_area_insets(EdgeInsets::uniform(Dp(2.5)));
///
/// // Just left of the drawn frame, inside the enlarged tap area.
/// assert!(button.hit_test(DpPosition::new(Dp(98.0), Dp(50.0))));
/// // Outside both.
/// assert!(!button.hit_test(DpPosition::new(Dp(97.0), Dp(50.0))));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToggleButton {
    frame: DpRect,
    tap_area_insets: EdgeInsets,
    icon_inset: Dp,
    icon: ToggleIcon,
    tint: Color,
}

impl ToggleButton {
    /// The drawn bounds, in the label's local coordinates.
    pub fn frame(&self) -> DpRect {
        self.frame
    }

    /// Moves and resizes the drawn bounds.
    pub fn set_frame(&mut self, frame: DpRect) {
        self.frame = frame;
    }

    /// Extra padding around the frame that still registers taps.
    ///
    /// Each value moves the matching edge of the tap area outwards.
    pub fn tap_area_insets(&self) -> EdgeInsets {
        self.tap_area_insets
    }

    /// Sets the tap-area padding.
    pub fn set_tap_area_insets(&mut self, insets: EdgeInsets) {
        self.tap_area_insets = insets;
    }

    /// The region that registers taps: the frame grown by the tap-area insets.
    pub fn hit_rect(&self) -> DpRect {
        self.frame.inset_by(self.tap_area_insets.inverted())
    }

    /// Returns `true` if `point` falls inside the enlarged tap area.
    pub fn hit_test(&self, point: DpPosition) -> bool {
        self.hit_rect().contains(point)
    }

    /// Padding between the frame and the icon on every edge.
    pub fn icon_inset(&self) -> Dp {
        self.icon_inset
    }

    /// Sets the icon padding.
    pub fn set_icon_inset(&mut self, inset: Dp) {
        self.icon_inset = inset;
    }

    /// Where the icon is drawn: the frame shrunk by the icon inset, centered.
    pub fn icon_frame(&self) -> DpRect {
        self.frame.inset_by(EdgeInsets::uniform(self.icon_inset))
    }

    /// The icon currently shown.
    pub fn icon(&self) -> ToggleIcon {
        self.icon
    }

    /// Replaces the icon.
    pub fn set_icon(&mut self, icon: ToggleIcon) {
        self.icon = icon;
    }

    /// The icon tint.
    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Sets the icon tint.
    pub fn set_tint(&mut self, tint: Color) {
        self.tint = tint;
    }
}
