//! Text measurement seam.
//!
//! The label never shapes or breaks text itself. It asks a
//! [`TextLayoutEngine`] two questions: how many rows a text takes at a given
//! width with unbounded height, and how large the text is when laid out within
//! a width (optionally clipped to a number of rows).
//!
//! [`GlyphonLayoutEngine`] answers them with glyphon. [`CachedLayoutEngine`]
//! memoizes any engine.

mod cache;
mod glyphon_engine;

use std::sync::Arc;

use thiserror::Error;

use crate::{Dp, DpSize, StyledText};

pub use cache::CachedLayoutEngine;
pub use glyphon_engine::{GlyphonLayoutEngine, read_font_system, write_font_system};

/// Failure of a measurement request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    /// The container width is not a finite, strictly positive length.
    #[error("invalid container width: {0:?}")]
    InvalidContainerWidth(Dp),
    /// The engine produced no rows for non-empty text.
    #[error("the layout engine produced no rows for {len} bytes of text")]
    NoLayout {
        /// Length in bytes of the text that could not be laid out.
        len: usize,
    },
}

/// An external text layout service.
///
/// Implementations must be deterministic: identical inputs give identical
/// outputs. Methods take `&self` so one engine can be shared by many labels;
/// implementations needing mutable state use interior locking.
pub trait TextLayoutEngine {
    /// Lays `text` out in a container `container_width` wide with unbounded
    /// height and returns the number of rows produced.
    fn measure_row_count(
        &self,
        text: &StyledText,
        container_width: Dp,
    ) -> Result<usize, MeasureError>;

    /// Lays `text` out within `max_width` and returns the size of the result:
    /// the widest row and the total height. With `max_rows` set, only the
    /// first `max_rows` rows count towards the size.
    fn measure(
        &self,
        text: &StyledText,
        max_width: Dp,
        max_rows: Option<usize>,
    ) -> Result<DpSize, MeasureError>;
}

impl<E: TextLayoutEngine + ?Sized> TextLayoutEngine for &E {
    fn measure_row_count(
        &self,
        text: &StyledText,
        container_width: Dp,
    ) -> Result<usize, MeasureError> {
        (**self).measure_row_count(text, container_width)
    }

    fn measure(
        &self,
        text: &StyledText,
        max_width: Dp,
        max_rows: Option<usize>,
    ) -> Result<DpSize, MeasureError> {
        (**self).measure(text, max_width, max_rows)
    }
}

impl<E: TextLayoutEngine + ?Sized> TextLayoutEngine for Arc<E> {
    fn measure_row_count(
        &self,
        text: &StyledText,
        container_width: Dp,
    ) -> Result<usize, MeasureError> {
        (**self).measure_row_count(text, container_width)
    }

    fn measure(
        &self,
        text: &StyledText,
        max_width: Dp,
        max_rows: Option<usize>,
    ) -> Result<DpSize, MeasureError> {
        (**self).measure(text, max_width, max_rows)
    }
}

pub(crate) fn check_width(width: Dp) -> Result<(), MeasureError> {
    if width.is_positive_finite() {
        Ok(())
    } else {
        Err(MeasureError::InvalidContainerWidth(width))
    }
}
