//! Button layout engine.
//!
//! Turns the title list into one frame per button plus the scrollable
//! content extent. Tab mode splits the container evenly; segment mode sizes
//! each button to its title and lets the strip scroll.

use crate::config::{SwitcherConfig, SwitcherKind};
use crate::measure::TextMeasure;

/// A point in view coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero or negative. Nothing can be laid out
    /// into an empty size.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A rectangle in view coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle at the origin with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the horizontal center.
    #[must_use]
    pub fn mid_x(&self) -> f32 {
        self.x + self.width * 0.5
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.y + self.height * 0.5)
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Moves the rectangle by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Approximate equality, for geometry computed along different paths.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }
}

/// Result of a layout pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonLayout {
    /// One frame per title, in title order.
    pub frames: Vec<Rect>,
    /// Total scrollable size.
    pub content: Size,
}

/// Lays out title buttons inside `container`.
///
/// Returns `None` when the container has no size; the caller retries after
/// the next resize. Identical inputs always give identical output.
#[must_use]
pub fn layout_buttons<S, M>(
    titles: &[S],
    config: &SwitcherConfig,
    container: Size,
    measure: &M,
) -> Option<ButtonLayout>
where
    S: AsRef<str>,
    M: TextMeasure + ?Sized,
{
    if container.is_empty() {
        return None;
    }
    if titles.is_empty() {
        return Some(ButtonLayout {
            frames: Vec::new(),
            content: container,
        });
    }

    let margin = config.horizontal_margin;
    let mut frames = Vec::with_capacity(titles.len());
    let mut x = margin;

    match config.kind {
        SwitcherKind::Tab => {
            #[allow(clippy::cast_precision_loss)]
            let width = ((container.width - margin * 2.0) / titles.len() as f32).max(0.0);
            for _ in titles {
                frames.push(Rect::new(x, 0.0, width, container.height));
                x += width;
            }
            Some(ButtonLayout {
                frames,
                content: container,
            })
        }
        SwitcherKind::Segment => {
            let space = config.horizontal_space;
            for title in titles {
                let title = title.as_ref();
                // Wide enough for either font.
                let normal = measure.measure_width(title, &config.normal_font);
                let selected = measure.measure_width(title, &config.selected_font);
                let width = normal.max(selected);
                frames.push(Rect::new(x, 0.0, width, container.height));
                x += width + space;
            }
            let content_width = x - space + margin;
            Some(ButtonLayout {
                frames,
                content: Size::new(content_width, container.height),
            })
        }
    }
}
