//! The expandable label.
//!
//! ## Usage
//!
//! Show a long description collapsed to a few rows, with a small arrow in the
//! bottom-right corner that reveals the rest.
//!
//! The label is driven by its host:
//!
//! - the host calls [`ExpandableLabel::layout`] whenever the label's bounds
//!   change,
//! - routes taps (in the label's local coordinates) to
//!   [`ExpandableLabel::handle_tap`],
//! - and draws [`ExpandableLabel::surface`] plus [`ExpandableLabel::toggle`].

use tracing::{debug, error, info, trace};

use crate::{
    Dp, DpPosition, DpRect, DpSize, EdgeInsets, ExpandableLabelConfig, GlyphonLayoutEngine,
    LabelText, StyledText, TextLayoutEngine, TextSurface, ToggleButton, ToggleIcon,
    interaction::{ActivationBinding, ExpandStateCallback, TapTarget},
};

/// Divisor applied to the line height for both the icon padding and the tap
/// area padding of the toggle.
const TOGGLE_PADDING_DIVISOR: f64 = 8.0;

/// A text label that truncates to a number of rows and can be expanded.
///
/// The label is expandable when its text, laid out at the configured width
/// with unbounded height, needs more rows than
/// [`unexpanded_max_lines`](ExpandableLabelConfig::unexpanded_max_lines).
/// Exactly then the toggle is attached, one line height square, at the
/// bottom-right corner.
///
/// The expand state survives text and configuration changes; reset it with
/// [`set_expanded`](Self::set_expanded) if needed.
///
/// There is no way to build a label other than [`new`](Self::new) (and
/// [`with_glyphon`](ExpandableLabel::with_glyphon)): it has no `Default` and
/// no deserialization support.
///
/// # Examples
///
/// ```no_run
/// use expandable_label::{Color, Dp, ExpandableLabel, ExpandableLabelConfig, Font};
///
/// let config = ExpandableLabelConfig::new(Dp(300.0), Font::system(Dp(16.0)), Color::BLACK);
/// let mut label = ExpandableLabel::with_glyphon(config)
///     .with_on_expand_state_change(|expanded: bool| println!("expanded: {expanded}"));
///
/// label.set_text("A long description that will probably need more than three rows.");
/// let size = label.intrinsic_size();
/// label.layout(expandable_label::DpRect::new(Dp(0.0), Dp(0.0), size.width, size.height));
/// ```
#[derive(Debug)]
pub struct ExpandableLabel<E = GlyphonLayoutEngine> {
    engine: E,
    config: ExpandableLabelConfig,
    on_expand_state_change: Option<ExpandStateCallback>,
    text: Option<LabelText>,
    surface: TextSurface,
    toggle: ToggleButton,
    toggle_attached: bool,
    binding: ActivationBinding,
    bounds: DpRect,
    is_expanded: bool,
}

impl ExpandableLabel<GlyphonLayoutEngine> {
    /// Creates a collapsed, empty label measured by a [`GlyphonLayoutEngine`].
    pub fn with_glyphon(config: ExpandableLabelConfig) -> Self {
        Self::new(config, GlyphonLayoutEngine::new())
    }
}

impl<E: TextLayoutEngine> ExpandableLabel<E> {
    /// Creates a collapsed, empty label measured by `engine`.
    pub fn new(config: ExpandableLabelConfig, engine: E) -> Self {
        let mut toggle = ToggleButton::default();
        toggle.set_icon(ToggleIcon::for_state(false));

        let mut label = Self {
            engine,
            config,
            on_expand_state_change: None,
            text: None,
            surface: TextSurface::default(),
            toggle,
            toggle_attached: false,
            binding: ActivationBinding::default(),
            bounds: DpRect::ZERO,
            is_expanded: false,
        };
        label.apply_configuration();
        label
    }

    /// Sets the expand-state observer.
    pub fn with_on_expand_state_change(
        mut self,
        on_change: impl Into<ExpandStateCallback>,
    ) -> Self {
        self.on_expand_state_change = Some(on_change.into());
        self
    }

    /// Applies whichever of `config` and `on_change` is present.
    pub fn update(
        &mut self,
        config: Option<ExpandableLabelConfig>,
        on_change: Option<ExpandStateCallback>,
    ) {
        if let Some(config) = config {
            self.set_configuration(config);
        }
        if let Some(on_change) = on_change {
            self.on_expand_state_change = Some(on_change);
        }
    }

    /// Replaces or removes the expand-state observer.
    pub fn set_on_expand_state_change(&mut self, on_change: Option<ExpandStateCallback>) {
        self.on_expand_state_change = on_change;
    }

    /// The current configuration.
    pub fn configuration(&self) -> &ExpandableLabelConfig {
        &self.config
    }

    /// Replaces the configuration and re-applies everything derived from it.
    ///
    /// The activation handler is rebound for the new scope, plain text is
    /// restyled, the toggle is attached or detached to match the new limits,
    /// and, once the label has been laid out, the exclusion region is
    /// recomputed.
    pub fn set_configuration(&mut self, config: ExpandableLabelConfig) {
        self.config = config;
        self.apply_configuration();
    }

    fn apply_configuration(&mut self) {
        self.binding.rebind(self.config.interaction_scope);

        self.surface.set_font(self.config.font.clone());
        self.surface.set_tint(self.config.text_color);
        self.toggle.set_tint(self.config.button_tint());
        self.surface
            .set_max_lines(self.config.max_lines(self.is_expanded));

        self.restyle_text();
        self.refresh_toggle();

        if self.has_layout_bounds() {
            self.update_exclusion_regions();
        }
    }

    /// The text last assigned, if any.
    pub fn text(&self) -> Option<&LabelText> {
        self.text.as_ref()
    }

    /// Assigns new text, sizes the label to fit it and attaches or detaches
    /// the toggle.
    pub fn set_text(&mut self, value: impl Into<LabelText>) {
        self.text = Some(value.into());
        self.apply_text();
    }

    /// Removes the text.
    pub fn clear_text(&mut self) {
        self.text = None;
        self.apply_text();
    }

    fn apply_text(&mut self) {
        self.restyle_text();
        self.size_to_fit();
        self.refresh_toggle();
        if self.has_layout_bounds() {
            self.layout_if_needed();
        }
    }

    fn restyle_text(&mut self) {
        let styled = match &self.text {
            Some(text) => text.to_styled(&self.config.font, self.config.text_color),
            None => StyledText::new(),
        };
        self.surface.set_text(styled);
    }

    fn size_to_fit(&mut self) {
        let size = self.size_that_fits(DpSize::new(self.config.width, Dp(f64::INFINITY)));
        self.bounds = DpRect::from_position_size(self.bounds.origin(), size);
        self.place_toggle();
    }

    fn refresh_toggle(&mut self) {
        if self.can_expand() {
            let padding = self.config.line_height() / TOGGLE_PADDING_DIVISOR;
            self.toggle.set_icon_inset(padding);
            self.toggle.set_tap_area_insets(EdgeInsets::uniform(padding));
            self.place_toggle();
            if !self.toggle_attached {
                debug!("attached expand toggle");
            }
            self.toggle_attached = true;
        } else {
            if self.toggle_attached {
                debug!("detached expand toggle");
            }
            self.toggle_attached = false;
            self.surface.set_exclusion_regions([]);
        }
    }

    /// Whether the current text needs more rows than the collapsed limit.
    ///
    /// Recomputed on every call. A measurement failure is logged and reported
    /// as not expandable. The comparison is taken literally, so with a
    /// collapsed limit of `0` any non-empty text is expandable.
    pub fn can_expand(&self) -> bool {
        let limit = self.config.unexpanded_max_lines;
        match self
            .engine
            .measure_row_count(self.surface.text(), self.config.width)
        {
            Ok(rows) => rows > limit as usize,
            Err(err) => {
                error!(error = %err, "can_expand: row measurement failed");
                false
            }
        }
    }

    /// Whether the label is expanded.
    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    /// Sets the expand state, updating the row limit and the toggle icon.
    ///
    /// Does not notify the observer; only [`toggle_expand`](Self::toggle_expand)
    /// does.
    pub fn set_expanded(&mut self, is_expanded: bool) {
        self.is_expanded = is_expanded;
        self.surface
            .set_max_lines(self.config.max_lines(is_expanded));
        self.toggle.set_icon(ToggleIcon::for_state(is_expanded));
    }

    /// Flips the expand state, lays the label out again and notifies the
    /// observer.
    pub fn toggle_expand(&mut self) {
        info!(was_expanded = self.is_expanded, "expandable label toggle clicked");
        self.set_expanded(!self.is_expanded);
        self.layout_if_needed();
        if let Some(on_change) = &self.on_expand_state_change {
            on_change.call(self.is_expanded);
        }
    }

    /// Routes a tap at `point` (local coordinates) to the bound activation
    /// handler. Returns `true` if the tap toggled the label.
    pub fn handle_tap(&mut self, point: DpPosition) -> bool {
        let on_toggle = self.toggle_attached && self.toggle.hit_test(point);
        let activated = match self.binding.target() {
            Some(TapTarget::ToggleButton) => on_toggle,
            Some(TapTarget::TextArea) => on_toggle || self.local_bounds().contains(point),
            None => false,
        };
        if activated {
            self.toggle_expand();
        } else {
            trace!(?point, "tap ignored");
        }
        activated
    }

    /// The activation binding currently in effect.
    pub fn binding(&self) -> ActivationBinding {
        self.binding
    }

    /// Layout pass. The host calls this whenever the label's bounds change.
    ///
    /// The toggle follows the bottom-right corner. The exclusion region is
    /// only recomputed when the visible text, plus the toggle's column,
    /// reaches the configured width; otherwise no row can run into the
    /// toggle.
    pub fn layout(&mut self, bounds: DpRect) {
        self.bounds = bounds;
        self.place_toggle();

        let fitted = self.size_that_fits(bounds.size());
        if fitted.width + self.toggle_slot().width < self.config.width {
            trace!(?fitted, "text leaves room for the toggle, keeping exclusion regions");
            return;
        }
        self.update_exclusion_regions();
    }

    fn layout_if_needed(&mut self) {
        self.layout(self.bounds);
    }

    fn has_layout_bounds(&self) -> bool {
        self.bounds.width.is_positive_finite() && self.bounds.height.is_positive_finite()
    }

    fn local_bounds(&self) -> DpRect {
        DpRect::from_position_size(DpPosition::ZERO, self.bounds.size())
    }

    /// The square reserved for the toggle in the bottom-right corner.
    fn toggle_slot(&self) -> DpRect {
        let side = self.config.line_height();
        DpRect::new(
            self.bounds.width - side,
            self.bounds.height - side,
            side,
            side,
        )
    }

    fn place_toggle(&mut self) {
        let slot = self.toggle_slot();
        self.toggle.set_frame(slot);
    }

    fn update_exclusion_regions(&mut self) {
        // Computing exclusions against empty bounds is not supported by text
        // engines; wait for the first real layout.
        if !self.has_layout_bounds() {
            trace!("skipping exclusion regions before the first layout");
            return;
        }

        if self.can_expand() {
            let slot = self.toggle_slot();
            self.surface.set_exclusion_regions([slot]);
        } else {
            self.surface.set_exclusion_regions([]);
        }
    }

    /// Size of the visible text (clipped to the current row limit) when laid
    /// out within `proposal`'s width. A non-positive or unbounded proposal
    /// falls back to the configured width.
    pub fn size_that_fits(&self, proposal: DpSize) -> DpSize {
        let width = if proposal.width.is_positive_finite() {
            proposal.width
        } else {
            self.config.width
        };
        let max_rows = self.surface.line_limit().map(|limit| limit as usize);

        match self.engine.measure(self.surface.text(), width, max_rows) {
            Ok(size) => size,
            Err(err) => {
                error!(error = %err, "size_that_fits: measurement failed");
                DpSize::ZERO
            }
        }
    }

    /// The configured width, and the height of the whole text at that width
    /// regardless of the row limit.
    pub fn intrinsic_size(&self) -> DpSize {
        let height = match self
            .engine
            .measure(self.surface.text(), self.config.width, None)
        {
            Ok(size) => size.height,
            Err(err) => {
                error!(error = %err, "intrinsic_size: measurement failed");
                Dp::ZERO
            }
        };
        DpSize::new(self.config.width, height)
    }

    /// The label's bounds as last laid out or sized to fit.
    pub fn bounds(&self) -> DpRect {
        self.bounds
    }

    /// The toggle, when attached.
    pub fn toggle(&self) -> Option<&ToggleButton> {
        self.toggle_attached.then_some(&self.toggle)
    }

    /// Whether the toggle is attached.
    pub fn is_toggle_attached(&self) -> bool {
        self.toggle_attached
    }

    /// Render state of the text.
    pub fn surface(&self) -> &TextSurface {
        &self.surface
    }

    /// The layout engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, atomic::AtomicUsize};

    use parking_lot::Mutex;

    use super::*;
    use crate::{
        Color, Font, InteractionScope, TextSpan,
        test_support::{CHAR_WIDTH, FailingEngine, WrappingEngine},
    };

    const WIDTH: Dp = Dp(300.0);
    const LINE_HEIGHT: Dp = Dp(20.0);

    fn config() -> ExpandableLabelConfig {
        ExpandableLabelConfig::new(
            WIDTH,
            Font::system(Dp(16.0)).line_height(LINE_HEIGHT),
            Color::BLACK,
        )
    }

    fn engine() -> WrappingEngine {
        WrappingEngine::new(Arc::new(AtomicUsize::new(0)))
    }

    /// Text that wraps into exactly `rows` rows at `WIDTH`.
    fn rows(rows: usize) -> String {
        let per_row = (WIDTH.0 / CHAR_WIDTH.0) as usize;
        "x".repeat(per_row * rows)
    }

    fn recorder() -> (ExpandStateCallback, Arc<Mutex<Vec<bool>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let callback = ExpandStateCallback::new(move |expanded| sink.lock().push(expanded));
        (callback, events)
    }

    fn laid_out(text: &str, config: ExpandableLabelConfig) -> ExpandableLabel<WrappingEngine> {
        let mut label = ExpandableLabel::new(config, engine());
        label.set_text(text);
        let size = label.intrinsic_size();
        label.layout(DpRect::new(Dp(0.0), Dp(0.0), size.width, Dp(60.0)));
        label
    }

    #[test]
    fn test_short_text_is_not_expandable() {
        let mut label = ExpandableLabel::new(config(), engine());
        label.set_text(rows(2));

        assert!(!label.can_expand());
        assert!(!label.is_toggle_attached());
        assert!(label.toggle().is_none());
        assert_eq!(label.intrinsic_size(), DpSize::new(WIDTH, Dp(40.0)));
        assert!(label.surface().exclusion_regions().is_empty());
    }

    #[test]
    fn test_text_at_the_limit_is_not_expandable() {
        let mut label = ExpandableLabel::new(config(), engine());
        label.set_text(rows(3));
        assert!(!label.can_expand());
        assert!(label.toggle().is_none());
    }

    #[test]
    fn test_long_text_attaches_proportional_toggle() {
        let mut label = ExpandableLabel::new(config(), engine());
        label.set_text(rows(5));

        assert!(label.can_expand());
        let toggle = label.toggle().expect("toggle attached");
        assert_eq!(toggle.frame().size(), DpSize::new(LINE_HEIGHT, LINE_HEIGHT));
        assert_eq!(toggle.icon_inset(), Dp(2.5));
        assert_eq!(toggle.tap_area_insets(), EdgeInsets::uniform(Dp(2.5)));
        assert_eq!(toggle.icon(), ToggleIcon::Expand);

        // Sized to fit the three visible rows, toggle in the bottom-right corner.
        assert_eq!(label.bounds().size(), DpSize::new(WIDTH, Dp(60.0)));
        assert_eq!(
            toggle.frame(),
            DpRect::new(Dp(280.0), Dp(40.0), Dp(20.0), Dp(20.0))
        );

        // The intrinsic height ignores the row limit.
        assert_eq!(label.intrinsic_size(), DpSize::new(WIDTH, Dp(100.0)));
    }

    #[test]
    fn test_toggle_scales_with_line_height() {
        let config = ExpandableLabelConfig::new(
            WIDTH,
            Font::system(Dp(32.0)).line_height(Dp(40.0)),
            Color::BLACK,
        );
        let mut label = ExpandableLabel::new(config, engine());
        label.set_text(rows(5));

        let toggle = label.toggle().expect("toggle attached");
        assert_eq!(toggle.frame().width, Dp(40.0));
        assert_eq!(toggle.icon_inset(), Dp(5.0));
        assert_eq!(toggle.tap_area_insets(), EdgeInsets::uniform(Dp(5.0)));
    }

    #[test]
    fn test_set_text_is_idempotent() {
        let mut label = ExpandableLabel::new(config(), engine());

        label.set_text(rows(5));
        let first = (label.is_toggle_attached(), label.intrinsic_size(), label.bounds());
        label.set_text(rows(5));
        let second = (label.is_toggle_attached(), label.intrinsic_size(), label.bounds());
        assert_eq!(first, second);

        label.set_text(rows(1));
        let first = (label.is_toggle_attached(), label.intrinsic_size());
        label.set_text(rows(1));
        assert_eq!(first, (label.is_toggle_attached(), label.intrinsic_size()));
    }

    #[test]
    fn test_replacing_text_detaches_toggle() {
        let mut label = laid_out(&rows(5), config());
        assert!(label.is_toggle_attached());
        assert_eq!(label.surface().exclusion_regions().len(), 1);

        label.set_text("short");
        assert!(!label.is_toggle_attached());
        assert!(label.surface().exclusion_regions().is_empty());

        label.clear_text();
        assert!(label.text().is_none());
        assert!(label.surface().text().is_empty());
        assert!(!label.is_toggle_attached());
    }

    #[test]
    fn test_toggle_round_trip() {
        let (callback, events) = recorder();
        let mut label = laid_out(&rows(5), config()).with_on_expand_state_change(callback);
        assert_eq!(label.surface().line_limit(), Some(3));

        label.toggle_expand();
        assert!(label.is_expanded());
        assert_eq!(label.surface().line_limit(), None);
        let expanded_icon = label.toggle().map(ToggleButton::icon);

        label.toggle_expand();
        assert!(!label.is_expanded());
        assert_eq!(label.surface().line_limit(), Some(3));
        let collapsed_icon = label.toggle().map(ToggleButton::icon);

        assert_eq!(expanded_icon, Some(ToggleIcon::Collapse));
        assert_eq!(collapsed_icon, Some(ToggleIcon::Expand));
        assert_eq!(*events.lock(), vec![true, false]);
    }

    #[test]
    fn test_expanded_limit_is_applied() {
        let mut label = laid_out(&rows(9), config().expanded_max_lines(6));
        label.toggle_expand();
        assert_eq!(label.surface().max_lines(), 6);
        assert_eq!(label.size_that_fits(DpSize::ZERO), DpSize::new(WIDTH, Dp(120.0)));
    }

    #[test]
    fn test_set_expanded_does_not_notify() {
        let (callback, events) = recorder();
        let mut label = laid_out(&rows(5), config()).with_on_expand_state_change(callback);

        label.set_expanded(true);
        assert!(label.is_expanded());
        assert_eq!(label.toggle().map(ToggleButton::icon), Some(ToggleIcon::Collapse));
        assert!(events.lock().is_empty());
    }

    #[test]
    fn test_button_scope_uses_enlarged_hit_area() {
        let (callback, events) = recorder();
        let mut label = laid_out(&rows(5), config()).with_on_expand_state_change(callback);

        // Inside the label, away from the toggle: ignored.
        assert!(!label.handle_tap(DpPosition::new(Dp(100.0), Dp(10.0))));
        // Left of the toggle frame (280..300) but inside its 2.5dp tap padding.
        assert!(label.handle_tap(DpPosition::new(Dp(278.0), Dp(50.0))));
        // Below the label, inside the padding.
        assert!(label.handle_tap(DpPosition::new(Dp(290.0), Dp(61.0))));
        // Outside both.
        assert!(!label.handle_tap(DpPosition::new(Dp(277.0), Dp(50.0))));

        assert_eq!(*events.lock(), vec![true, false]);
    }

    #[test]
    fn test_button_scope_ignores_taps_without_toggle() {
        let mut label = laid_out(&rows(2), config());
        assert!(!label.handle_tap(DpPosition::new(Dp(290.0), Dp(50.0))));
        assert!(!label.is_expanded());
    }

    #[test]
    fn test_switching_to_text_scope_toggles_once_per_tap() {
        let (callback, events) = recorder();
        let mut label = laid_out(&rows(5), config()).with_on_expand_state_change(callback);

        label.set_configuration(config().interaction_scope(InteractionScope::Text));
        assert_eq!(label.binding().target(), Some(TapTarget::TextArea));

        // Anywhere over the text.
        assert!(label.handle_tap(DpPosition::new(Dp(100.0), Dp(10.0))));
        assert!(label.is_expanded());
        // On the toggle itself: still a single toggle.
        assert!(label.handle_tap(DpPosition::new(Dp(290.0), Dp(50.0))));
        assert!(!label.is_expanded());
        // Outside the label.
        assert!(!label.handle_tap(DpPosition::new(Dp(100.0), Dp(200.0))));

        assert_eq!(*events.lock(), vec![true, false]);

        // And back to the button.
        label.set_configuration(config());
        assert_eq!(label.binding().target(), Some(TapTarget::ToggleButton));
        assert!(!label.handle_tap(DpPosition::new(Dp(100.0), Dp(10.0))));
        assert_eq!(events.lock().len(), 2);
    }

    #[test]
    fn test_measurement_failure_is_not_expandable() {
        let mut label = ExpandableLabel::new(config(), FailingEngine);
        label.set_text(rows(5));

        assert!(!label.can_expand());
        assert!(!label.is_toggle_attached());
        assert_eq!(label.intrinsic_size(), DpSize::new(WIDTH, Dp::ZERO));
        label.layout(DpRect::new(Dp(0.0), Dp(0.0), WIDTH, Dp(60.0)));
        assert!(label.surface().exclusion_regions().is_empty());
    }

    #[test]
    fn test_zero_collapsed_limit_expands_any_text() {
        let mut label = ExpandableLabel::new(config().unexpanded_max_lines(0), engine());
        assert!(!label.can_expand());

        label.set_text(rows(2));
        assert!(label.can_expand());
        assert!(label.is_toggle_attached());
        assert_eq!(label.surface().line_limit(), None);

        label.clear_text();
        assert!(!label.can_expand());
        assert!(label.toggle().is_none());
    }

    #[test]
    fn test_exclusion_waits_for_real_bounds() {
        let slot = DpRect::new(Dp(280.0), Dp(40.0), Dp(20.0), Dp(20.0));
        let mut label = ExpandableLabel::new(config(), engine());
        label.set_text(rows(5));
        assert_eq!(label.surface().exclusion_regions(), &[slot]);

        // Zero bounds never produce a region relative to them.
        label.layout(DpRect::ZERO);
        label.set_configuration(config().unexpanded_max_lines(2));
        assert_eq!(label.surface().exclusion_regions(), &[slot]);

        label.layout(DpRect::new(Dp(0.0), Dp(0.0), WIDTH, Dp(100.0)));
        assert_eq!(
            label.surface().exclusion_regions(),
            &[DpRect::new(Dp(280.0), Dp(80.0), Dp(20.0), Dp(20.0))]
        );
    }

    #[test]
    fn test_set_text_reserves_toggle_space() {
        let mut label = laid_out(&rows(2), config());
        assert!(label.surface().exclusion_regions().is_empty());

        label.set_text(rows(5));
        assert!(label.is_toggle_attached());
        assert_eq!(
            label.surface().exclusion_regions(),
            &[DpRect::new(Dp(280.0), Dp(40.0), Dp(20.0), Dp(20.0))]
        );
    }

    #[test]
    fn test_layout_skips_exclusion_when_text_leaves_room() {
        // Four short rows: expandable, but no row reaches the toggle column.
        let mut label = laid_out("a\nb\nc\nd", config());
        assert!(label.is_toggle_attached());
        assert!(label.surface().exclusion_regions().is_empty());

        label.set_text(rows(5));
        label.layout(DpRect::new(Dp(0.0), Dp(0.0), WIDTH, Dp(60.0)));
        assert_eq!(label.surface().exclusion_regions().len(), 1);
    }

    #[test]
    fn test_exclusion_follows_bounds() {
        let mut label = laid_out(&rows(5), config());
        label.layout(DpRect::new(Dp(10.0), Dp(10.0), WIDTH, Dp(100.0)));

        let slot = DpRect::new(Dp(280.0), Dp(80.0), Dp(20.0), Dp(20.0));
        assert_eq!(label.surface().exclusion_regions(), &[slot]);
        assert_eq!(label.toggle().map(ToggleButton::frame), Some(slot));
    }

    #[test]
    fn test_configuration_change_reevaluates_toggle() {
        let mut label = laid_out(&rows(5), config());
        assert!(label.is_toggle_attached());

        label.set_configuration(config().unexpanded_max_lines(6));
        assert!(!label.is_toggle_attached());
        assert!(label.surface().exclusion_regions().is_empty());

        label.set_configuration(config());
        assert!(label.is_toggle_attached());
        assert_eq!(label.surface().exclusion_regions().len(), 1);
    }

    #[test]
    fn test_expand_state_survives_updates() {
        let mut label = laid_out(&rows(5), config());
        label.toggle_expand();

        label.set_text(rows(6));
        assert!(label.is_expanded());
        assert_eq!(label.surface().line_limit(), None);

        label.set_configuration(config().expanded_max_lines(4));
        assert!(label.is_expanded());
        assert_eq!(label.surface().max_lines(), 4);
        assert_eq!(label.toggle().map(ToggleButton::icon), Some(ToggleIcon::Collapse));
    }

    #[test]
    fn test_configuration_restyles_plain_text_only() {
        let mut label = ExpandableLabel::new(config(), engine());
        label.set_text("plain");
        label.set_configuration(config().text_color(Color::RED));
        assert_eq!(label.surface().text().spans()[0].color, Color::RED);

        let styled: StyledText =
            [TextSpan::new("styled", Font::system(Dp(30.0)), Color::BLUE)]
                .into_iter()
                .collect();
        label.set_text(styled.clone());
        label.set_configuration(config().text_color(Color::GREEN));
        assert_eq!(label.surface().text(), &styled);
        assert_eq!(label.surface().tint(), Color::GREEN);
    }

    #[test]
    fn test_button_color_falls_back_to_text_color() {
        let mut label = laid_out(&rows(5), config().text_color(Color::RED));
        assert_eq!(label.toggle().map(ToggleButton::tint), Some(Color::RED));

        label.set_configuration(config().button_color(Color::BLUE));
        assert_eq!(label.toggle().map(ToggleButton::tint), Some(Color::BLUE));
    }

    #[test]
    fn test_update_applies_present_arguments() {
        let (callback, events) = recorder();
        let mut label = laid_out(&rows(5), config());

        label.update(None, Some(callback));
        label.toggle_expand();
        assert_eq!(*events.lock(), vec![true]);

        label.update(Some(config().unexpanded_max_lines(10)), None);
        assert_eq!(label.configuration().unexpanded_max_lines, 10);
        assert!(!label.is_toggle_attached());

        label.set_on_expand_state_change(None);
        label.toggle_expand();
        assert_eq!(events.lock().len(), 1);
    }
}
