//! Glyphon-backed text measurement.
//!
//! Shapes and wraps styled text with glyphon's cosmic-text buffer and reads the
//! resulting layout runs. No glyph is ever rasterized here.

use std::sync::OnceLock;

use glyphon::fontdb;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{MeasureError, TextLayoutEngine, check_width};
use crate::{Color, Dp, DpSize, Font, FontFamily, StyledText};

/// It costs a lot to create a glyphon font system, so we use a static one
/// to share it every where and avoid creating it multiple times.
static FONT_SYSTEM: OnceLock<RwLock<glyphon::FontSystem>> = OnceLock::new();

#[cfg(target_os = "android")]
fn init_font_system() -> RwLock<glyphon::FontSystem> {
    let mut font_system = glyphon::FontSystem::new();

    font_system.db_mut().load_fonts_dir("/system/fonts");
    font_system.db_mut().set_sans_serif_family("Roboto");
    font_system.db_mut().set_serif_family("Noto Serif");
    font_system.db_mut().set_monospace_family("Droid Sans Mono");

    RwLock::new(font_system)
}

#[cfg(not(target_os = "android"))]
fn init_font_system() -> RwLock<glyphon::FontSystem> {
    RwLock::new(glyphon::FontSystem::new())
}

/// Returns a read lock of the shared font system.
pub fn read_font_system() -> RwLockReadGuard<'static, glyphon::FontSystem> {
    FONT_SYSTEM.get_or_init(init_font_system).read()
}

/// Returns a write lock of the shared font system.
///
/// Shaping needs mutable access, so every measurement holds this lock for
/// its duration.
pub fn write_font_system() -> RwLockWriteGuard<'static, glyphon::FontSystem> {
    FONT_SYSTEM.get_or_init(init_font_system).write()
}

/// A [`TextLayoutEngine`] that lays text out with glyphon.
///
/// Rows wrap at word boundaries, falling back to glyph boundaries for words
/// wider than the container.
///
/// ```no_run
/// use expandable_label::{Color, Dp, Font, GlyphonLayoutEngine, StyledText, TextLayoutEngine};
///
/// let engine = GlyphonLayoutEngine::new();
/// let text = StyledText::plain("A fairly long sentence.", Font::system(Dp(16.0)), Color::BLACK);
/// let rows = engine.measure_row_count(&text, Dp(80.0)).unwrap();
/// assert!(rows >= 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphonLayoutEngine {
    scale_factor: f64,
}

impl GlyphonLayoutEngine {
    /// Creates an engine measuring at a scale factor of 1.0.
    pub fn new() -> Self {
        Self { scale_factor: 1.0 }
    }

    /// Creates an engine shaping at `scale_factor` physical pixels per dp.
    ///
    /// Results are always reported back in dp. Non-positive or non-finite
    /// factors are replaced by 1.0.
    pub fn with_scale_factor(scale_factor: f64) -> Self {
        let scale_factor = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            1.0
        };
        Self { scale_factor }
    }

    /// The scale factor used for shaping.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    fn metrics(&self, font: &Font) -> glyphon::Metrics {
        glyphon::Metrics::new(
            font.size.to_pixels_f32(self.scale_factor),
            font.effective_line_height().to_pixels_f32(self.scale_factor),
        )
    }

    fn attrs<'a>(&self, font: &'a Font, color: Color) -> glyphon::Attrs<'a> {
        let [r, g, b, a] = color.to_rgba_u8();
        glyphon::Attrs::new()
            .family(glyphon_family(&font.family))
            .weight(fontdb::Weight(font.weight))
            .color(glyphon::Color::rgba(r, g, b, a))
            .metrics(self.metrics(font))
    }

    /// Lays the text out and collects `(line_width, line_bottom)` per row, in
    /// physical pixels.
    fn layout_rows(&self, text: &StyledText, width: Dp) -> Vec<(f32, f32)> {
        let default_font = text.leading_font().cloned().unwrap_or_default();
        let mut font_system = write_font_system();

        let mut buffer = glyphon::Buffer::new(&mut font_system, self.metrics(&default_font));
        buffer.set_wrap(&mut font_system, glyphon::Wrap::WordOrGlyph);
        buffer.set_size(
            &mut font_system,
            Some(width.to_pixels_f32(self.scale_factor)),
            None,
        );

        let default_attrs = self.attrs(&default_font, Color::BLACK);
        buffer.set_rich_text(
            &mut font_system,
            text.spans()
                .iter()
                .map(|span| (span.text.as_str(), self.attrs(&span.font, span.color))),
            &default_attrs,
            glyphon::Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(&mut font_system, false);

        buffer
            .layout_runs()
            .map(|run| (run.line_w, run.line_top + run.line_height))
            .collect()
    }
}

impl Default for GlyphonLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine for GlyphonLayoutEngine {
    fn measure_row_count(
        &self,
        text: &StyledText,
        container_width: Dp,
    ) -> Result<usize, MeasureError> {
        check_width(container_width)?;
        if text.is_empty() {
            return Ok(0);
        }

        let rows = self.layout_rows(text, container_width);
        if rows.is_empty() {
            return Err(MeasureError::NoLayout {
                len: text.to_plain_string().len(),
            });
        }
        Ok(rows.len())
    }

    fn measure(
        &self,
        text: &StyledText,
        max_width: Dp,
        max_rows: Option<usize>,
    ) -> Result<DpSize, MeasureError> {
        check_width(max_width)?;
        if text.is_empty() {
            return Ok(DpSize::ZERO);
        }

        let rows = self.layout_rows(text, max_width);
        if rows.is_empty() {
            return Err(MeasureError::NoLayout {
                len: text.to_plain_string().len(),
            });
        }

        let visible = max_rows.unwrap_or(rows.len()).min(rows.len());
        let (width, height) = rows
            .iter()
            .take(visible)
            .fold((0.0f32, 0.0f32), |(width, height), &(line_w, line_bottom)| {
                (width.max(line_w), height.max(line_bottom))
            });

        Ok(DpSize::new(
            Dp::from_pixels_f32(width, self.scale_factor).min(max_width),
            Dp::from_pixels_f32(height, self.scale_factor),
        ))
    }
}

fn glyphon_family(family: &FontFamily) -> fontdb::Family<'_> {
    match family {
        FontFamily::SansSerif => fontdb::Family::SansSerif,
        FontFamily::Serif => fontdb::Family::Serif,
        FontFamily::Monospace => fontdb::Family::Monospace,
        FontFamily::Named(name) => fontdb::Family::Name(name),
    }
}
