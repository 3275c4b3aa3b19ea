//! Deterministic layout engines for tests.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::{
    Dp, DpSize, StyledText,
    text_layout::{MeasureError, TextLayoutEngine, check_width},
};

/// Every character is this wide, whatever the font.
pub(crate) const CHAR_WIDTH: Dp = Dp(10.0);

/// Wraps every hard line at `width / CHAR_WIDTH` characters. Rows are as tall
/// as the leading font's line height.
#[derive(Clone)]
pub(crate) struct WrappingEngine {
    calls: Arc<AtomicUsize>,
}

impl WrappingEngine {
    pub(crate) fn new(calls: Arc<AtomicUsize>) -> Self {
        Self { calls }
    }

    fn rows(text: &StyledText, width: Dp) -> Vec<usize> {
        let per_row = ((width.0 / CHAR_WIDTH.0).floor() as usize).max(1);
        let plain = text.to_plain_string();
        if plain.is_empty() {
            return Vec::new();
        }
        let mut rows = Vec::new();
        for line in plain.split('\n') {
            let mut remaining = line.chars().count();
            if remaining == 0 {
                rows.push(0);
                continue;
            }
            while remaining > 0 {
                let taken = remaining.min(per_row);
                rows.push(taken);
                remaining -= taken;
            }
        }
        rows
    }
}

impl TextLayoutEngine for WrappingEngine {
    fn measure_row_count(
        &self,
        text: &StyledText,
        container_width: Dp,
    ) -> Result<usize, MeasureError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        check_width(container_width)?;
        Ok(Self::rows(text, container_width).len())
    }

    fn measure(
        &self,
        text: &StyledText,
        max_width: Dp,
        max_rows: Option<usize>,
    ) -> Result<DpSize, MeasureError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        check_width(max_width)?;
        let rows = Self::rows(text, max_width);
        let visible = max_rows.unwrap_or(rows.len()).min(rows.len());
        let line_height = text
            .leading_font()
            .map(|font| font.effective_line_height())
            .unwrap_or(Dp::ZERO);
        let widest = rows.iter().take(visible).copied().max().unwrap_or(0);

        Ok(DpSize::new(
            (CHAR_WIDTH * widest as f64).min(max_width),
            line_height * visible as f64,
        ))
    }
}

/// Fails every request.
#[derive(Clone, Default)]
pub(crate) struct FailingEngine;

impl TextLayoutEngine for FailingEngine {
    fn measure_row_count(&self, text: &StyledText, _: Dp) -> Result<usize, MeasureError> {
        Err(MeasureError::NoLayout {
            len: text.to_plain_string().len(),
        })
    }

    fn measure(
        &self,
        text: &StyledText,
        _: Dp,
        _: Option<usize>,
    ) -> Result<DpSize, MeasureError> {
        Err(MeasureError::NoLayout {
            len: text.to_plain_string().len(),
        })
    }
}
