//! # Segment Slide
//!
//! Headless engine for a tab/segment switcher: a strip of title buttons with
//! an indicator bar that follows the selected title and tracks a paged
//! content view while it is dragged.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        SWITCHER PIPELINE                      │
//! ├──────────────────────────────────────────────────────────────┤
//! │  reload / resize / select / slide / tap → SlideSwitcher       │
//! │        ↓               ↓                  ↓                   │
//! │  Button Layout   Indicator Geometry   Badge Placement         │
//! │        ↓               ↓                  ↓                   │
//! │              Render Commands → host surface                   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The host supplies text measurement ([`TextMeasure`]), titles
//! ([`TitleSource`]) and a selection listener ([`SelectionSink`]).
//!
//! ## Example
//!
//! ```rust
//! use segment_slide::{MonospaceMeasure, SlideSwitcher, Size, SwitcherConfig};
//!
//! let mut switcher = SlideSwitcher::new(SwitcherConfig::default(), MonospaceMeasure::default());
//! switcher.set_title_source(vec!["News".to_owned(), "Sport".to_owned()]);
//! switcher.set_selection_sink(|index: usize, animated: bool| {
//!     println!("selected {index} (animated: {animated})");
//! });
//! switcher.reload();
//! switcher.set_bounds(Size::new(320.0, 44.0));
//! switcher.select(0, false);
//!
//! // The pager reports a drag halfway to the second page.
//! switcher.slide(0, 1, 0.5);
//! assert!(switcher.indicator_frame().is_some());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod badge;
pub mod config;
pub mod delegate;
pub mod error;
pub mod indicator;
pub mod input;
pub mod layout;
pub mod measure;
pub mod render;
pub mod scroll;
pub mod style;
pub mod switcher;

pub use badge::{BadgeKind, BadgePlacement};
pub use config::{AnimateType, BadgeConfig, SwitcherConfig, SwitcherKind};
pub use delegate::{SelectionSink, TitleSource};
pub use error::{SwitcherError, SwitcherResult};
pub use indicator::{IndicatorBand, SlideDirection, Span};
pub use input::{PointerEvent, TapRecognizer};
pub use layout::{layout_buttons, ButtonLayout, Point, Rect, Size};
pub use measure::{MonospaceMeasure, TextMeasure};
pub use render::{CommandBuffer, QuadInstance, RenderCommand};
pub use scroll::ScrollOffset;
pub use style::{Color, Font, TitleStyle};
pub use switcher::SlideSwitcher;
