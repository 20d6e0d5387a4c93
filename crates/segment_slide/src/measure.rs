//! Text measurement.
//!
//! The engine never shapes text itself. Hosts plug their platform text
//! system in through [`TextMeasure`]; [`MonospaceMeasure`] is a fixed-advance
//! estimate for headless use and tests.

use crate::style::Font;

/// Measures rendered text. Must be pure and cheap: it is called per item on
/// every layout pass.
pub trait TextMeasure {
    /// Display width of `text` rendered in `font`.
    fn measure_width(&self, text: &str, font: &Font) -> f32;

    /// Line height of `font`.
    fn line_height(&self, font: &Font) -> f32;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure_width(&self, text: &str, font: &Font) -> f32 {
        (**self).measure_width(text, font)
    }

    fn line_height(&self, font: &Font) -> f32 {
        (**self).line_height(font)
    }
}

/// Fixed-advance estimate: every character is `advance * size` wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    /// Character advance as a fraction of the point size.
    pub advance: f32,
    /// Line height as a multiple of the point size.
    pub leading: f32,
}

impl MonospaceMeasure {
    /// Creates an estimator.
    #[must_use]
    pub const fn new(advance: f32, leading: f32) -> Self {
        Self { advance, leading }
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self::new(0.6, 1.2)
    }
}

impl TextMeasure for MonospaceMeasure {
    #[allow(clippy::cast_precision_loss)]
    fn measure_width(&self, text: &str, font: &Font) -> f32 {
        text.chars().count() as f32 * self.advance * font.size
    }

    fn line_height(&self, font: &Font) -> f32 {
        font.size * self.leading
    }
}
