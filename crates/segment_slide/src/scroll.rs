//! Horizontal scroll position of a segment strip.

use crate::layout::Rect;

/// Offset that centers `button` in a viewport, clamped to the content.
///
/// Returns `None` when the content fits the viewport and nothing scrolls.
#[must_use]
pub fn centered_offset(button: &Rect, viewport_width: f32, content_width: f32) -> Option<f32> {
    if content_width <= viewport_width {
        return None;
    }
    let max = content_width - viewport_width;
    let offset = button.x - (viewport_width - button.width) / 2.0;
    Some(offset.clamp(0.0, max))
}

/// Current horizontal content offset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffset {
    /// Distance scrolled from the left edge.
    pub x: f32,
    /// Whether the host should animate to `x`.
    pub animated: bool,
}

impl ScrollOffset {
    /// Moves to `x`.
    pub fn scroll_to(&mut self, x: f32, animated: bool) {
        self.x = x;
        self.animated = animated;
    }

    /// Pulls the offset back inside `[0, content - viewport]` after a
    /// relayout changed either width.
    pub fn clamp_to(&mut self, viewport_width: f32, content_width: f32) {
        let max = (content_width - viewport_width).max(0.0);
        let clamped = self.x.clamp(0.0, max);
        if (clamped - self.x).abs() > f32::EPSILON {
            self.x = clamped;
            self.animated = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_means_no_scroll() {
        let button = Rect::new(200.0, 0.0, 50.0, 40.0);
        assert_eq!(centered_offset(&button, 300.0, 300.0), None);
    }

    #[test]
    fn test_centers_button() {
        let button = Rect::new(400.0, 0.0, 100.0, 40.0);
        // 400 - (300 - 100) / 2
        assert_eq!(centered_offset(&button, 300.0, 1000.0), Some(300.0));
    }

    #[test]
    fn test_clamps_both_ends() {
        let first = Rect::new(10.0, 0.0, 50.0, 40.0);
        assert_eq!(centered_offset(&first, 300.0, 1000.0), Some(0.0));

        let last = Rect::new(940.0, 0.0, 50.0, 40.0);
        assert_eq!(centered_offset(&last, 300.0, 1000.0), Some(700.0));
    }

    #[test]
    fn test_relayout_clamp() {
        let mut offset = ScrollOffset::default();
        offset.scroll_to(500.0, true);
        offset.clamp_to(300.0, 600.0);
        assert_eq!(offset, ScrollOffset { x: 300.0, animated: false });

        offset.clamp_to(300.0, 200.0);
        assert!(offset.x.abs() < f32::EPSILON);
    }
}
