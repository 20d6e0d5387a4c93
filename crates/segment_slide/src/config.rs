//! Switcher configuration.
//!
//! The live config is a plain value the host may edit at any time. The
//! switcher copies it at `reload` and reads only that snapshot until the next
//! reload.
//!
//! ```toml
//! kind = "segment"
//! animate_type = "progress"
//! horizontal_margin = 16.0
//! indicator_width = 0.0
//!
//! [selected_font]
//! size = 17.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SwitcherError, SwitcherResult};
use crate::style::{Color, Font, TitleStyle};

/// How buttons share the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitcherKind {
    /// Equal-width buttons spanning the container. Not scrollable.
    Tab,
    /// Buttons sized to their titles. Scrolls when wider than the container.
    #[default]
    Segment,
}

/// Indicator interpolation strategy during a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimateType {
    /// Position and width lerp together.
    #[default]
    Normal,
    /// Two-phase stretch then catch-up.
    Progress,
}

/// Badge sizing per decoration kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BadgeConfig {
    /// Diameter of a point badge.
    pub point_height: f32,
    /// Height of a count badge.
    pub count_height: f32,
    /// Height of a host-drawn custom badge.
    pub custom_height: f32,
    /// Font for the number in a count badge.
    pub count_font: Font,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            point_height: 10.0,
            count_height: 16.0,
            custom_height: 14.0,
            count_font: Font::system(10.0),
        }
    }
}

/// Layout and visual parameters of a switcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwitcherConfig {
    /// Tab or segment layout.
    pub kind: SwitcherKind,
    /// Indicator slide strategy.
    pub animate_type: AnimateType,
    /// Space before the first and after the last button.
    pub horizontal_margin: f32,
    /// Gap between segment buttons. Ignored in tab mode.
    pub horizontal_space: f32,
    /// Fixed indicator width. `0` sizes it to the title.
    pub indicator_width: f32,
    /// Indicator bar height.
    pub indicator_height: f32,
    /// Indicator fill.
    pub indicator_color: Color,
    /// Font of unselected titles.
    pub normal_font: Font,
    /// Font of the selected title.
    pub selected_font: Font,
    /// Color of unselected titles.
    pub normal_color: Color,
    /// Color of the selected title.
    pub selected_color: Color,
    /// Strip background.
    pub background_color: Color,
    /// Badge sizing.
    pub badge: BadgeConfig,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            kind: SwitcherKind::Segment,
            animate_type: AnimateType::Normal,
            horizontal_margin: 16.0,
            horizontal_space: 30.0,
            indicator_width: 30.0,
            indicator_height: 3.0,
            indicator_color: Color::hex(0xFF3B_30FF),
            normal_font: Font::system(15.0),
            selected_font: Font::system(17.0),
            normal_color: Color::GRAY,
            selected_color: Color::BLACK,
            background_color: Color::WHITE,
            badge: BadgeConfig::default(),
        }
    }
}

impl SwitcherConfig {
    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SwitcherError::ConfigParse`] for malformed TOML or unknown
    /// keys, and [`SwitcherError::InvalidConfig`] for out-of-range values.
    pub fn from_toml_str(text: &str) -> SwitcherResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`SwitcherError::ConfigRead`] if the file cannot be read, plus
    /// everything [`SwitcherConfig::from_toml_str`] returns.
    pub fn from_toml_file(path: impl AsRef<Path>) -> SwitcherResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| SwitcherError::ConfigRead {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Serializes the config back to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`SwitcherError::ConfigParse`] if serialization fails.
    pub fn to_toml_string(&self) -> SwitcherResult<String> {
        toml::to_string(self).map_err(|err| SwitcherError::ConfigParse(err.to_string()))
    }

    /// Checks every size is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`SwitcherError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> SwitcherResult<()> {
        let sizes = [
            ("horizontal_margin", self.horizontal_margin),
            ("horizontal_space", self.horizontal_space),
            ("indicator_width", self.indicator_width),
            ("indicator_height", self.indicator_height),
            ("normal_font.size", self.normal_font.size),
            ("selected_font.size", self.selected_font.size),
            ("badge.point_height", self.badge.point_height),
            ("badge.count_height", self.badge.count_height),
            ("badge.custom_height", self.badge.custom_height),
            ("badge.count_font.size", self.badge.count_font.size),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(SwitcherError::InvalidConfig(format!(
                    "{name} must be a finite value >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Appearance of an unselected title.
    #[must_use]
    pub fn normal_style(&self) -> TitleStyle {
        TitleStyle::new(self.normal_color, self.normal_font.clone())
    }

    /// Appearance of the selected title.
    #[must_use]
    pub fn selected_style(&self) -> TitleStyle {
        TitleStyle::new(self.selected_color, self.selected_font.clone())
    }
}
