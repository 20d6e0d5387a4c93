//! Colors, fonts and the per-title visual style.
//!
//! Everything here interpolates linearly so the slide path can blend the
//! departing and arriving titles frame by frame.

use serde::{Deserialize, Serialize};

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    #[serde(default = "Color::opaque")]
    pub a: f32,
}

impl Color {
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Mid gray used for unselected titles.
    pub const GRAY: Self = Self::rgba(0.5, 0.5, 0.5, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from hex value (0xRRGGBBAA).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Linearly interpolates between two colors.
    ///
    /// `t = 0` yields `self`, `t = 1` yields `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    const fn opaque() -> f32 {
        1.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// A font description handed to the text measurer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Font family name. Empty means the platform system font.
    #[serde(default)]
    pub family: String,
    /// Point size.
    pub size: f32,
}

impl Font {
    /// System font at the given point size.
    #[must_use]
    pub fn system(size: f32) -> Self {
        Self {
            family: String::new(),
            size,
        }
    }

    /// Named font at the given point size.
    #[must_use]
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// Interpolates the point size toward `other`.
    ///
    /// Only the size blends. The family stays `self`'s until `t` reaches 1,
    /// at which point the result is exactly `other`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        if t >= 1.0 {
            return other.clone();
        }
        Self {
            family: self.family.clone(),
            size: self.size + (other.size - self.size) * t,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(15.0)
    }
}

/// Current appearance of one title button.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleStyle {
    /// Title color.
    pub color: Color,
    /// Title font.
    pub font: Font,
}

impl TitleStyle {
    /// Creates a title style.
    #[must_use]
    pub fn new(color: Color, font: Font) -> Self {
        Self { color, font }
    }

    /// Blends two styles (color and point size).
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            color: self.color.lerp(other.color, t),
            font: self.font.lerp(&other.font, t),
        }
    }
}
