//! The switcher: selection state machine over the layout and indicator
//! engines.
//!
//! ## States
//!
//! - **Unselected / Selected(i)**: which title is current. Changes only
//!   through `select`, `tap` and pending resolution, never through `slide`.
//! - **AwaitingLayout / Ready**: whether the view has a size. A selection
//!   made while awaiting is parked and resolved exactly once by the first
//!   layout pass on a sized view. With zero items that resolution is a
//!   no-op and the request is gone.
//!
//! ## Threading
//!
//! Every call runs to completion on the caller's thread. The owner must
//! drive one switcher from a single (UI) thread, and the title source and
//! selection sink must not call back into the switcher.

use tracing::{debug, warn};

use crate::badge::{BadgeKind, BadgePlacement};
use crate::config::{SwitcherConfig, SwitcherKind};
use crate::delegate::{SelectionSink, TitleSource};
use crate::error::{SwitcherError, SwitcherResult};
use crate::indicator::{
    discrete_frame, indicator_width, slide_frame, slide_styles, IndicatorBand, SlideDirection,
    Span,
};
use crate::input::{hit_test, PointerEvent, TapRecognizer};
use crate::layout::{layout_buttons, Point, Rect, Size};
use crate::measure::{MonospaceMeasure, TextMeasure};
use crate::render::{CommandBuffer, RenderCommand};
use crate::scroll::{centered_offset, ScrollOffset};
use crate::style::TitleStyle;

/// A selection parked until layout can honor it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingSelection {
    index: usize,
    animated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LayoutState {
    AwaitingLayout { pending: Option<PendingSelection> },
    Ready,
}

/// Per-title state, rebuilt on every reload.
#[derive(Debug, Clone)]
struct TitleButton {
    title: String,
    frame: Rect,
    style: TitleStyle,
    badge_kind: BadgeKind,
    badge: Option<BadgePlacement>,
}

/// Tab/segment switcher engine.
pub struct SlideSwitcher<M: TextMeasure = MonospaceMeasure> {
    /// Live config. Takes effect on the next `reload`.
    config: SwitcherConfig,
    /// Snapshot taken at the last `reload`.
    inner: SwitcherConfig,
    measure: M,
    source: Option<Box<dyn TitleSource>>,
    sink: Option<Box<dyn SelectionSink>>,
    bounds: Size,
    content: Size,
    scroll: ScrollOffset,
    buttons: Vec<TitleButton>,
    indicator: Option<Rect>,
    selected: Option<usize>,
    layout_state: LayoutState,
    taps: TapRecognizer,
}

impl<M: TextMeasure> SlideSwitcher<M> {
    /// Creates an empty switcher. Nothing shows until a title source is set
    /// and [`reload`](Self::reload) runs.
    #[must_use]
    pub fn new(config: SwitcherConfig, measure: M) -> Self {
        Self {
            inner: config.clone(),
            config,
            measure,
            source: None,
            sink: None,
            bounds: Size::ZERO,
            content: Size::ZERO,
            scroll: ScrollOffset::default(),
            buttons: Vec::new(),
            indicator: None,
            selected: None,
            layout_state: LayoutState::AwaitingLayout { pending: None },
            taps: TapRecognizer::new(),
        }
    }

    /// Sets where titles and badges come from.
    pub fn set_title_source(&mut self, source: impl TitleSource + 'static) {
        self.source = Some(Box::new(source));
    }

    /// Sets who hears about selection changes.
    pub fn set_selection_sink(&mut self, sink: impl SelectionSink + 'static) {
        self.sink = Some(Box::new(sink));
    }

    /// The live config.
    #[must_use]
    pub fn config(&self) -> &SwitcherConfig {
        &self.config
    }

    /// Mutable live config. Edits apply at the next [`reload`](Self::reload).
    pub fn config_mut(&mut self) -> &mut SwitcherConfig {
        &mut self.config
    }

    /// The config snapshot the current layout was built from.
    #[must_use]
    pub fn active_config(&self) -> &SwitcherConfig {
        &self.inner
    }

    /// The text measurer.
    #[must_use]
    pub fn measure(&self) -> &M {
        &self.measure
    }

    // ------------------------------------------------------------------
    // Inbound events
    // ------------------------------------------------------------------

    /// Rebuilds every button from the title source.
    ///
    /// Takes a fresh config snapshot. A previous selection that is still in
    /// range is reapplied without a notification; one that fell out of range
    /// is dropped.
    pub fn reload(&mut self) {
        self.inner = self.config.clone();
        self.buttons.clear();
        self.indicator = None;
        self.content = self.bounds;
        self.taps.reset();

        let Some(source) = self.source.as_ref() else {
            debug!("reload without a title source, switcher left empty");
            self.forget_stale_selection();
            self.layout_pass();
            return;
        };

        let normal = self.inner.normal_style();
        self.buttons = source
            .titles()
            .into_iter()
            .enumerate()
            .map(|(index, title)| TitleButton {
                title,
                frame: Rect::ZERO,
                style: normal.clone(),
                badge_kind: source.badge(index),
                badge: None,
            })
            .collect();
        debug!(count = self.buttons.len(), "switcher reloaded");

        self.forget_stale_selection();
        self.layout_pass();
    }

    /// Re-pulls badge kinds and recomputes their placement.
    pub fn reload_badges(&mut self) {
        if let Some(source) = self.source.as_ref() {
            for (index, button) in self.buttons.iter_mut().enumerate() {
                button.badge_kind = source.badge(index);
            }
        }
        self.refresh_badges();
    }

    /// Resizes the view and runs a layout pass.
    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
        self.layout_pass();
    }

    /// Selects `index`.
    ///
    /// While the view has no size the request is parked and applied by the
    /// first layout pass. With zero items it is dropped. With `animated == false` titles restyle and the indicator snaps
    /// immediately; with `animated == true` the caller is expected to follow
    /// up with [`slide`](Self::slide) calls and nothing is restyled here.
    pub fn select(&mut self, index: usize, animated: bool) {
        if let LayoutState::AwaitingLayout { pending } = &mut self.layout_state {
            debug!(index, animated, "selection parked until layout");
            *pending = Some(PendingSelection { index, animated });
            return;
        }
        let Some(index) = self.accept_index(index) else {
            return;
        };
        self.commit_selection(index, animated);
        if !animated {
            self.apply_discrete(index);
        }
    }

    /// Continuous update while the paged content is dragged from `from` to
    /// `to`. Never changes the selection.
    pub fn slide(&mut self, from: usize, to: usize, progress: f32) {
        if self.layout_state != LayoutState::Ready {
            debug!(from, to, "slide before layout ignored");
            return;
        }
        let (Some(from), Some(to)) = (self.accept_index(from), self.accept_index(to)) else {
            return;
        };
        if !progress.is_finite() {
            warn!(progress, "non-finite slide progress ignored");
            return;
        }
        let progress = progress.clamp(0.0, 1.0);

        if from == to {
            self.buttons[to].style = self.inner.selected_style();
            self.indicator = Some(self.discrete_indicator(to));
            return;
        }

        let (from_style, to_style) = slide_styles(
            &self.inner.normal_style(),
            &self.inner.selected_style(),
            progress,
        );
        self.buttons[from].style = from_style;
        self.buttons[to].style = to_style;

        let from_span = self.indicator_span(from);
        let to_span = self.indicator_span(to);
        self.indicator = Some(slide_frame(
            self.inner.animate_type,
            from_span,
            to_span,
            SlideDirection::between(from, to),
            progress,
            self.band(),
        ));
    }

    /// A tap on the button at `index`: selects it (animated) and restyles
    /// right away.
    pub fn tap(&mut self, index: usize) {
        if self.layout_state != LayoutState::Ready {
            self.select(index, true);
            return;
        }
        let Some(index) = self.accept_index(index) else {
            return;
        };
        self.commit_selection(index, true);
        self.apply_discrete(index);
    }

    /// Taps whatever button lies under a view-space point.
    ///
    /// Returns the tapped index.
    pub fn tap_at(&mut self, point: Point) -> Option<usize> {
        let index = hit_test(&self.frames(), point, self.scroll.x)?;
        self.tap(index);
        Some(index)
    }

    /// Feeds a raw pointer event. A press and release over the same button
    /// becomes a [`tap`](Self::tap). Returns the tapped index.
    pub fn pointer(&mut self, event: PointerEvent) -> Option<usize> {
        let frames = self.frames();
        let index = self.taps.handle(event, &frames, self.scroll.x)?;
        self.tap(index);
        Some(index)
    }

    // ------------------------------------------------------------------
    // Read-only state
    // ------------------------------------------------------------------

    /// Current selection.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Selection parked until layout, if any.
    #[must_use]
    pub fn pending_index(&self) -> Option<usize> {
        match self.layout_state {
            LayoutState::AwaitingLayout { pending } => pending.map(|pending| pending.index),
            LayoutState::Ready => None,
        }
    }

    /// True once the view has a size and buttons have been laid out.
    #[must_use]
    pub fn is_layout_ready(&self) -> bool {
        self.layout_state == LayoutState::Ready
    }

    /// Number of titles.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.buttons.len()
    }

    /// Title at `index`.
    #[must_use]
    pub fn title(&self, index: usize) -> Option<&str> {
        self.buttons.get(index).map(|button| button.title.as_str())
    }

    /// Frame of the button at `index`, in content space.
    #[must_use]
    pub fn button_frame(&self, index: usize) -> Option<Rect> {
        self.buttons.get(index).map(|button| button.frame)
    }

    /// All button frames, in content space.
    #[must_use]
    pub fn frames(&self) -> Vec<Rect> {
        self.buttons.iter().map(|button| button.frame).collect()
    }

    /// Current look of the title at `index`.
    #[must_use]
    pub fn title_style(&self, index: usize) -> Option<&TitleStyle> {
        self.buttons.get(index).map(|button| &button.style)
    }

    /// Badge placement of the title at `index`.
    #[must_use]
    pub fn badge(&self, index: usize) -> Option<&BadgePlacement> {
        self.buttons.get(index).and_then(|button| button.badge.as_ref())
    }

    /// Last computed indicator frame, in content space.
    #[must_use]
    pub fn indicator_frame(&self) -> Option<Rect> {
        self.indicator
    }

    /// View size.
    #[must_use]
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Scrollable content size. Also the switcher's natural size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Current scroll position.
    #[must_use]
    pub fn content_offset(&self) -> ScrollOffset {
        self.scroll
    }

    /// True when the strip can scroll: segment mode with content wider
    /// than the view.
    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.inner.kind == SwitcherKind::Segment && self.content.width > self.bounds.width
    }

    /// Validates an index against the current item count.
    ///
    /// # Errors
    ///
    /// [`SwitcherError::IndexOutOfRange`] when `index >= item_count`.
    pub fn checked_index(&self, index: usize) -> SwitcherResult<usize> {
        if index < self.buttons.len() {
            Ok(index)
        } else {
            Err(SwitcherError::IndexOutOfRange {
                index,
                count: self.buttons.len(),
            })
        }
    }

    /// Indicator frame `index` would get from a discrete selection.
    ///
    /// # Errors
    ///
    /// [`SwitcherError::LayoutNotReady`] before the first layout pass,
    /// [`SwitcherError::IndexOutOfRange`] for a bad index.
    pub fn indicator_frame_for(&self, index: usize) -> SwitcherResult<Rect> {
        if self.layout_state != LayoutState::Ready {
            return Err(SwitcherError::LayoutNotReady);
        }
        let index = self.checked_index(index)?;
        Ok(self.discrete_indicator(index))
    }

    /// Replaces the contents of `buffer` with this frame's draw commands.
    pub fn render(&self, buffer: &mut CommandBuffer) {
        buffer.clear();
        if self.bounds.is_empty() {
            return;
        }
        let view = Rect::from_size(self.bounds);
        buffer.push(RenderCommand::Rect {
            bounds: view,
            color: self.inner.background_color,
            corner_radius: 0.0,
        });
        buffer.clipped(view, |buffer| {
            let dx = -self.scroll.x;
            for button in &self.buttons {
                let frame = button.frame.translate(dx, 0.0);
                let width = self.measure.measure_width(&button.title, &button.style.font);
                let line_height = self.measure.line_height(&button.style.font);
                let center = frame.center();
                buffer.push(RenderCommand::Text {
                    text: button.title.clone(),
                    origin: Point::new(center.x - width / 2.0, center.y - line_height / 2.0),
                    color: button.style.color,
                    font: button.style.font.clone(),
                });
                if let Some(badge) = &button.badge {
                    buffer.push(RenderCommand::Badge {
                        center: badge.anchor(&frame),
                        height: badge.height,
                        kind: badge.kind,
                        font: badge.font.clone(),
                    });
                }
            }

            if let Some(indicator) = self.indicator {
                buffer.push(RenderCommand::Rect {
                    bounds: indicator.translate(dx, 0.0),
                    color: self.inner.indicator_color,
                    corner_radius: self.inner.indicator_height / 2.0,
                });
            }
        });
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Lays out buttons for the current bounds and, once sized, resolves the
    /// parked selection or reapplies the current one.
    fn layout_pass(&mut self) {
        let layout = {
            let titles: Vec<&str> = self.buttons.iter().map(|button| button.title.as_str()).collect();
            layout_buttons(&titles, &self.inner, self.bounds, &self.measure)
        };
        let Some(layout) = layout else {
            self.await_layout();
            return;
        };

        for (button, frame) in self.buttons.iter_mut().zip(layout.frames) {
            button.frame = frame;
        }
        self.content = layout.content;
        self.scroll.clamp_to(self.bounds.width, self.content.width);
        self.refresh_badges();

        match std::mem::replace(&mut self.layout_state, LayoutState::Ready) {
            LayoutState::AwaitingLayout {
                pending: Some(pending),
            } => self.resolve_pending(pending),
            LayoutState::AwaitingLayout { pending: None } | LayoutState::Ready => {
                if let Some(index) = self.selected {
                    self.apply_discrete(index);
                }
            }
        }
    }

    fn await_layout(&mut self) {
        if self.layout_state == LayoutState::Ready {
            self.layout_state = LayoutState::AwaitingLayout { pending: None };
        }
    }

    fn resolve_pending(&mut self, pending: PendingSelection) {
        let Some(index) = self.accept_index(pending.index) else {
            return;
        };
        debug!(index, "resolving parked selection");
        self.commit_selection(index, pending.animated);
        self.apply_discrete(index);
    }

    fn forget_stale_selection(&mut self) {
        if let Some(index) = self.selected {
            if index >= self.buttons.len() {
                debug!(index, count = self.buttons.len(), "selection dropped by reload");
                self.selected = None;
            }
        }
    }

    /// Logs and rejects out-of-range indices.
    fn accept_index(&self, index: usize) -> Option<usize> {
        if self.buttons.is_empty() {
            debug!(index, "no titles, selection ignored");
            return None;
        }
        match self.checked_index(index) {
            Ok(index) => Some(index),
            Err(err) => {
                warn!(%err, "rejected switcher index");
                None
            }
        }
    }

    /// Scrolls to the button and records the selection, notifying on change.
    fn commit_selection(&mut self, index: usize, animated: bool) {
        self.scroll_to_button(index, animated);
        if self.selected == Some(index) {
            return;
        }
        self.selected = Some(index);
        if let Some(sink) = self.sink.as_mut() {
            sink.selection_changed(index, animated);
        }
    }

    fn scroll_to_button(&mut self, index: usize, animated: bool) {
        if self.inner.kind != SwitcherKind::Segment {
            return;
        }
        let frame = self.buttons[index].frame;
        if let Some(x) = centered_offset(&frame, self.bounds.width, self.content.width) {
            self.scroll.scroll_to(x, animated);
        }
    }

    /// Restyles every title for `index` and snaps the indicator under it.
    fn apply_discrete(&mut self, index: usize) {
        let normal = self.inner.normal_style();
        for button in &mut self.buttons {
            button.style = normal.clone();
        }
        self.buttons[index].style = self.inner.selected_style();
        self.indicator = Some(self.discrete_indicator(index));
        self.refresh_badges();
    }

    fn discrete_indicator(&self, index: usize) -> Rect {
        let button = &self.buttons[index];
        let width = indicator_width(&self.inner, &button.title, &self.measure);
        discrete_frame(&button.frame, width, self.band())
    }

    fn indicator_span(&self, index: usize) -> Span {
        let button = &self.buttons[index];
        let width = indicator_width(&self.inner, &button.title, &self.measure);
        Span::centered(&button.frame, width)
    }

    fn band(&self) -> IndicatorBand {
        IndicatorBand::pinned(self.bounds.height, self.inner.indicator_height)
    }

    fn refresh_badges(&mut self) {
        for (index, button) in self.buttons.iter_mut().enumerate() {
            let font = if self.selected == Some(index) {
                &self.inner.selected_font
            } else {
                &self.inner.normal_font
            };
            let width = self.measure.measure_width(&button.title, font);
            let line_height = self.measure.line_height(font);
            button.badge =
                BadgePlacement::compute(button.badge_kind, &self.inner.badge, width, line_height);
        }
    }
}

impl<M: TextMeasure + Default> Default for SlideSwitcher<M> {
    fn default() -> Self {
        Self::new(SwitcherConfig::default(), M::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switcher(titles: &[&str]) -> SlideSwitcher {
        let mut switcher = SlideSwitcher::new(SwitcherConfig::default(), MonospaceMeasure::default());
        switcher.set_title_source(titles.iter().map(|t| (*t).to_owned()).collect::<Vec<_>>());
        switcher
    }

    #[test]
    fn test_starts_unselected_and_awaiting() {
        let switcher = switcher(&["A", "B"]);
        assert_eq!(switcher.selected_index(), None);
        assert!(!switcher.is_layout_ready());
        assert_eq!(switcher.indicator_frame(), None);
    }

    #[test]
    fn test_layout_ready_needs_size() {
        let mut switcher = switcher(&["A", "B"]);
        switcher.reload();
        assert!(!switcher.is_layout_ready());

        switcher.set_bounds(Size::new(320.0, 44.0));
        assert!(switcher.is_layout_ready());

        switcher.set_bounds(Size::ZERO);
        assert!(!switcher.is_layout_ready());
    }

    #[test]
    fn test_sized_empty_switcher_drops_selection() {
        let mut switcher = switcher(&[]);
        switcher.reload();
        switcher.set_bounds(Size::new(320.0, 44.0));
        assert!(switcher.is_layout_ready());

        switcher.select(1, false);
        switcher.tap(0);
        assert_eq!(switcher.pending_index(), None);
        assert_eq!(switcher.selected_index(), None);
    }

    #[test]
    fn test_indicator_frame_for_requires_layout() {
        let mut switcher = switcher(&["A", "B"]);
        assert_eq!(switcher.indicator_frame_for(0), Err(SwitcherError::LayoutNotReady));

        switcher.reload();
        switcher.set_bounds(Size::new(320.0, 44.0));
        assert!(switcher.indicator_frame_for(1).is_ok());
        assert_eq!(
            switcher.indicator_frame_for(2),
            Err(SwitcherError::IndexOutOfRange { index: 2, count: 2 })
        );
    }

    #[test]
    fn test_reload_without_source_is_empty() {
        let mut switcher: SlideSwitcher = SlideSwitcher::default();
        switcher.set_bounds(Size::new(320.0, 44.0));
        switcher.reload();

        assert_eq!(switcher.item_count(), 0);
        assert_eq!(switcher.content_size(), Size::new(320.0, 44.0));
        switcher.select(0, false);
        assert_eq!(switcher.selected_index(), None);
    }
}
