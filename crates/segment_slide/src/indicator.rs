//! Indicator geometry engine.
//!
//! Two entry points:
//! - [`discrete_frame`]: the indicator snapped under one button.
//! - [`slide_frame`]: the indicator partway between two buttons.
//!
//! Slides use one of two strategies:
//!
//! ```text
//!   Normal    [from]-------->[to]        x and width lerp together
//!
//!   Progress  [from]                     p = 0
//!             [from=========]            p < 0.5  trailing edge runs ahead
//!             [=========to]              p >= 0.5 leading edge catches up
//!                       [to]             p = 1
//! ```
//!
//! Both are exact at `p = 0` and `p = 1` and the progress strategy is
//! continuous across `p = 0.5`. Everything here is pure.

use crate::config::{AnimateType, SwitcherConfig};
use crate::layout::Rect;
use crate::measure::TextMeasure;
use crate::style::TitleStyle;

/// Horizontal extent of the indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Span {
    /// Left edge.
    pub x: f32,
    /// Width.
    pub width: f32,
}

impl Span {
    /// Creates a span.
    #[must_use]
    pub const fn new(x: f32, width: f32) -> Self {
        Self { x, width }
    }

    /// A span of `width` centered under `button`.
    #[must_use]
    pub fn centered(button: &Rect, width: f32) -> Self {
        Self::new(button.mid_x() - width * 0.5, width)
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Straight-line interpolation toward `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.width + (other.width - self.width) * t,
        )
    }
}

/// Which way the slide travels along the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// Toward higher indices (left to right).
    Forward,
    /// Toward lower indices (right to left).
    Backward,
}

impl SlideDirection {
    /// Direction of travel from `from_index` to `to_index`.
    ///
    /// Equal indices count as backward, which degenerates to a stationary
    /// indicator.
    #[must_use]
    pub fn between(from_index: usize, to_index: usize) -> Self {
        if from_index < to_index {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// Vertical placement shared by every indicator frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorBand {
    /// Top edge: container height minus bar height.
    pub y: f32,
    /// Bar height.
    pub height: f32,
}

impl IndicatorBand {
    /// Band pinned to the bottom of a container of `container_height`.
    #[must_use]
    pub fn pinned(container_height: f32, indicator_height: f32) -> Self {
        Self {
            y: container_height - indicator_height,
            height: indicator_height,
        }
    }

    /// Combines the band with a horizontal span.
    #[must_use]
    pub fn frame(&self, span: Span) -> Rect {
        Rect::new(span.x, self.y, span.width, self.height)
    }
}

/// Indicator width for a title: the fixed width, or the title's width in the
/// normal font when the fixed width is 0.
#[must_use]
pub fn indicator_width<M: TextMeasure + ?Sized>(
    config: &SwitcherConfig,
    title: &str,
    measure: &M,
) -> f32 {
    if config.indicator_width == 0.0 {
        measure.measure_width(title, &config.normal_font)
    } else {
        config.indicator_width
    }
}

/// Indicator snapped under `button`.
#[must_use]
pub fn discrete_frame(button: &Rect, width: f32, band: IndicatorBand) -> Rect {
    band.frame(Span::centered(button, width))
}

/// Linear strategy.
#[must_use]
pub fn normal_span(from: Span, to: Span, progress: f32) -> Span {
    from.lerp(to, progress)
}

/// Two-phase stretch-then-catch-up strategy.
#[must_use]
pub fn progress_span(from: Span, to: Span, direction: SlideDirection, progress: f32) -> Span {
    match direction {
        SlideDirection::Forward => {
            if progress < 0.5 {
                // Left edge holds, right edge runs toward the target's right edge.
                let width = from.width + (to.right() - from.right()) * 2.0 * progress;
                Span::new(from.x, width)
            } else {
                // Right edge holds at the target, left edge catches up.
                let width = to.width + (to.x - from.x) * 2.0 * (1.0 - progress);
                Span::new(to.right() - width, width)
            }
        }
        SlideDirection::Backward => {
            if progress < 0.5 {
                // Right edge holds, left edge runs toward the target's left edge.
                let x = from.x - (from.x - to.x) * 2.0 * progress;
                Span::new(x, from.right() - x)
            } else {
                // Left edge holds at the target, right edge catches up.
                let width = to.width + (from.right() - to.right()) * 2.0 * (1.0 - progress);
                Span::new(to.x, width)
            }
        }
    }
}

/// Span for `progress` under the given strategy.
#[must_use]
pub fn slide_span(
    animate_type: AnimateType,
    from: Span,
    to: Span,
    direction: SlideDirection,
    progress: f32,
) -> Span {
    match animate_type {
        AnimateType::Normal => normal_span(from, to, progress),
        AnimateType::Progress => progress_span(from, to, direction, progress),
    }
}

/// Indicator frame partway through a slide.
#[must_use]
pub fn slide_frame(
    animate_type: AnimateType,
    from: Span,
    to: Span,
    direction: SlideDirection,
    progress: f32,
    band: IndicatorBand,
) -> Rect {
    band.frame(slide_span(animate_type, from, to, direction, progress))
}

/// Title styles during a slide: the departing title fades selected to
/// normal while the arriving one fades normal to selected.
#[must_use]
pub fn slide_styles(
    normal: &TitleStyle,
    selected: &TitleStyle,
    progress: f32,
) -> (TitleStyle, TitleStyle) {
    (
        selected.lerp(normal, progress),
        normal.lerp(selected, progress),
    )
}
