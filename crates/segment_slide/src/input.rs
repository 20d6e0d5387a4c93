//! Pointer input for title buttons.
//!
//! A tap counts only when the pointer goes down and comes back up over the
//! same button. Points arrive in view space and are shifted by the scroll
//! offset before hit testing.

use crate::layout::{Point, Rect};

/// Pointer event delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed at a view-space point.
    Down(Point),
    /// Pointer released at a view-space point.
    Up(Point),
    /// The platform took the gesture (e.g. it became a scroll).
    Cancel,
}

/// Index of the button under a view-space point.
#[must_use]
pub fn hit_test(frames: &[Rect], point: Point, scroll_x: f32) -> Option<usize> {
    let content_point = Point::new(point.x + scroll_x, point.y);
    frames.iter().position(|frame| frame.contains(content_point))
}

/// Turns press/release pairs into taps.
#[derive(Debug, Clone, Copy, Default)]
pub struct TapRecognizer {
    /// Button under the pointer when it went down.
    pressed: Option<usize>,
}

impl TapRecognizer {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Button currently held down, if any.
    #[must_use]
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// Feeds one event. Returns the tapped index on a release over the
    /// button that was pressed.
    pub fn handle(&mut self, event: PointerEvent, frames: &[Rect], scroll_x: f32) -> Option<usize> {
        match event {
            PointerEvent::Down(point) => {
                self.pressed = hit_test(frames, point, scroll_x);
                None
            }
            PointerEvent::Up(point) => {
                let pressed = self.pressed.take()?;
                (hit_test(frames, point, scroll_x) == Some(pressed)).then_some(pressed)
            }
            PointerEvent::Cancel => {
                self.pressed = None;
                None
            }
        }
    }

    /// Drops any press in flight. Called when the buttons are rebuilt.
    pub fn reset(&mut self) {
        self.pressed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames() -> Vec<Rect> {
        vec![
            Rect::new(0.0, 0.0, 100.0, 40.0),
            Rect::new(100.0, 0.0, 100.0, 40.0),
        ]
    }

    #[test]
    fn test_hit_test_applies_scroll() {
        let frames = frames();
        assert_eq!(hit_test(&frames, Point::new(50.0, 10.0), 0.0), Some(0));
        assert_eq!(hit_test(&frames, Point::new(50.0, 10.0), 80.0), Some(1));
        assert_eq!(hit_test(&frames, Point::new(250.0, 10.0), 0.0), None);
    }

    #[test]
    fn test_release_inside_taps() {
        let frames = frames();
        let mut taps = TapRecognizer::new();

        assert_eq!(taps.handle(PointerEvent::Down(Point::new(120.0, 5.0)), &frames, 0.0), None);
        assert_eq!(taps.pressed(), Some(1));
        assert_eq!(taps.handle(PointerEvent::Up(Point::new(180.0, 30.0)), &frames, 0.0), Some(1));
        assert_eq!(taps.pressed(), None);
    }

    #[test]
    fn test_release_elsewhere_or_cancel_does_not_tap() {
        let frames = frames();
        let mut taps = TapRecognizer::new();

        taps.handle(PointerEvent::Down(Point::new(20.0, 5.0)), &frames, 0.0);
        assert_eq!(taps.handle(PointerEvent::Up(Point::new(150.0, 5.0)), &frames, 0.0), None);

        taps.handle(PointerEvent::Down(Point::new(20.0, 5.0)), &frames, 0.0);
        taps.handle(PointerEvent::Cancel, &frames, 0.0);
        assert_eq!(taps.handle(PointerEvent::Up(Point::new(20.0, 5.0)), &frames, 0.0), None);
    }
}
