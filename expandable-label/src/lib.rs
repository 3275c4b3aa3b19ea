//! A multi-line text label that truncates to a configurable number of rows
//! and shows a small expand/collapse toggle in its bottom-right corner when
//! the text does not fit.
//!
//! # Overview
//!
//! [`ExpandableLabel`] owns the label's state: its [configuration](ExpandableLabelConfig),
//! its text, whether it is expanded, and the attached [`ToggleButton`]. The
//! host drives it:
//!
//! - call [`ExpandableLabel::layout`] whenever the label's bounds change,
//! - forward taps with [`ExpandableLabel::handle_tap`],
//! - draw [`ExpandableLabel::surface`] (styled text, row limit and exclusion
//!   regions) and [`ExpandableLabel::toggle`].
//!
//! Row counting and sizing are delegated to a [`TextLayoutEngine`]. The
//! default, [`GlyphonLayoutEngine`], shapes text with glyphon against a
//! process-wide font system; wrap any engine in [`CachedLayoutEngine`] to
//! memoize measurements.
//!
//! # Example
//!
//! ```no_run
//! use expandable_label::{
//!     Color, Dp, DpPosition, DpRect, ExpandableLabel, ExpandableLabelConfig, Font,
//!     InteractionScope,
//! };
//!
//! let config = ExpandableLabelConfig::new(Dp(280.0), Font::system(Dp(15.0)), Color::BLACK)
//!     .unexpanded_max_lines(2)
//!     .interaction_scope(InteractionScope::Text);
//!
//! let mut label = ExpandableLabel::with_glyphon(config)
//!     .with_on_expand_state_change(|expanded: bool| println!("expanded: {expanded}"));
//! label.set_text("Rust is a language empowering everyone to build reliable and efficient software.");
//!
//! let size = label.size_that_fits(label.intrinsic_size());
//! label.layout(DpRect::new(Dp(0.0), Dp(0.0), size.width, size.height));
//!
//! if label.can_expand() {
//!     label.handle_tap(DpPosition::new(Dp(10.0), Dp(10.0)));
//! }
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
mod config;
pub mod dp;
pub mod font;
pub mod geometry;
pub mod interaction;
mod label;
pub mod styled_text;
mod surface;
pub mod text_layout;
pub mod toggle_button;

#[cfg(test)]
mod test_support;

pub use crate::{
    color::Color,
    config::ExpandableLabelConfig,
    dp::Dp,
    font::{Font, FontFamily},
    geometry::{DpPosition, DpRect, DpSize, EdgeInsets},
    interaction::{ActivationBinding, ExpandStateCallback, InteractionScope, TapTarget},
    label::ExpandableLabel,
    styled_text::{LabelText, StyledText, TextSpan},
    surface::TextSurface,
    text_layout::{
        CachedLayoutEngine, GlyphonLayoutEngine, MeasureError, TextLayoutEngine,
        read_font_system, write_font_system,
    },
    toggle_button::{ToggleButton, ToggleIcon},
};

pub use glyphon;
