//! Badge placement.
//!
//! Badges sit at the top-right corner of the title text. The host draws
//! them; this module only says where and how tall.

use crate::config::BadgeConfig;
use crate::layout::{Point, Rect};
use crate::style::Font;

/// Decoration shown on a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeKind {
    /// No badge.
    #[default]
    None,
    /// A dot, optionally carrying the host's unread count. Sized as a dot
    /// whether or not the count is present.
    Point(Option<u32>),
    /// A pill with a number.
    Count(u32),
    /// Host-drawn content.
    Custom,
}

/// Where a badge goes, relative to its button's center.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgePlacement {
    /// Badge kind this placement was computed for.
    pub kind: BadgeKind,
    /// Badge height from config.
    pub height: f32,
    /// Offset of the badge center from the button center.
    pub offset: Point,
    /// Font for the count text. Only set for count badges.
    pub font: Option<Font>,
}

impl BadgePlacement {
    /// Computes the placement for a title `text_width` wide with line height
    /// `line_height`. Returns `None` for [`BadgeKind::None`].
    #[must_use]
    pub fn compute(
        kind: BadgeKind,
        config: &BadgeConfig,
        text_width: f32,
        line_height: f32,
    ) -> Option<Self> {
        let (height, font) = match kind {
            BadgeKind::None => return None,
            BadgeKind::Point(_) => (config.point_height, None),
            BadgeKind::Count(_) => (config.count_height, Some(config.count_font.clone())),
            BadgeKind::Custom => (config.custom_height, None),
        };
        Some(Self {
            kind,
            height,
            offset: Point::new(text_width / 2.0 + height / 2.0, -line_height / 2.0),
            font,
        })
    }

    /// Badge center in the same space as `button`.
    #[must_use]
    pub fn anchor(&self, button: &Rect) -> Point {
        let center = button.center();
        Point::new(center.x + self.offset.x, center.y + self.offset.y)
    }
}
