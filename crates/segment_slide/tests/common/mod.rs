//! Shared fixtures for switcher integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use segment_slide::{
    BadgeKind, Font, Rect, SlideSwitcher, Size, SwitcherConfig, SwitcherKind, TextMeasure,
    TitleSource,
};

/// Widths from a lookup table, scaled by point size relative to 15pt.
/// Unknown titles measure 10 per character.
#[derive(Debug, Clone, Default)]
pub struct TableMeasure {
    widths: HashMap<String, f32>,
}

impl TableMeasure {
    pub fn new(entries: &[(&str, f32)]) -> Self {
        Self {
            widths: entries
                .iter()
                .map(|(title, width)| ((*title).to_owned(), *width))
                .collect(),
        }
    }
}

impl TextMeasure for TableMeasure {
    #[allow(clippy::cast_precision_loss)]
    fn measure_width(&self, text: &str, font: &Font) -> f32 {
        let base = self
            .widths
            .get(text)
            .copied()
            .unwrap_or(text.chars().count() as f32 * 10.0);
        base * font.size / 15.0
    }

    fn line_height(&self, font: &Font) -> f32 {
        font.size * 1.2
    }
}

#[derive(Debug, Default)]
pub struct SourceData {
    pub titles: Vec<String>,
    pub badges: HashMap<usize, BadgeKind>,
}

/// Title source the test can edit between reloads.
#[derive(Debug, Clone, Default)]
pub struct SharedSource(pub Rc<RefCell<SourceData>>);

impl SharedSource {
    pub fn new(titles: &[&str]) -> Self {
        let source = Self::default();
        source.set_titles(titles);
        source
    }

    pub fn set_titles(&self, titles: &[&str]) {
        self.0.borrow_mut().titles = titles.iter().map(|title| (*title).to_owned()).collect();
    }

    pub fn set_badge(&self, index: usize, kind: BadgeKind) {
        self.0.borrow_mut().badges.insert(index, kind);
    }
}

impl TitleSource for SharedSource {
    fn titles(&self) -> Vec<String> {
        self.0.borrow().titles.clone()
    }

    fn badge(&self, index: usize) -> BadgeKind {
        self.0.borrow().badges.get(&index).copied().unwrap_or_default()
    }
}

/// Every `(index, animated)` the sink received.
pub type Events = Rc<RefCell<Vec<(usize, bool)>>>;

/// Config with no margins, equal fonts and auto-width indicator.
pub fn plain_config(kind: SwitcherKind) -> SwitcherConfig {
    SwitcherConfig {
        kind,
        horizontal_margin: 0.0,
        horizontal_space: 0.0,
        indicator_width: 0.0,
        indicator_height: 2.0,
        normal_font: Font::system(15.0),
        selected_font: Font::system(15.0),
        ..SwitcherConfig::default()
    }
}

/// Builds a switcher wired to `source` and a recording sink. Not reloaded
/// and not sized yet.
pub fn wired(
    config: SwitcherConfig,
    measure: TableMeasure,
    source: &SharedSource,
) -> (SlideSwitcher<TableMeasure>, Events) {
    let events: Events = Rc::default();
    let mut switcher = SlideSwitcher::new(config, measure);
    switcher.set_title_source(source.clone());
    let sink_events = Rc::clone(&events);
    switcher.set_selection_sink(move |index: usize, animated: bool| {
        sink_events.borrow_mut().push((index, animated));
    });
    (switcher, events)
}

/// A wired switcher that has been reloaded and sized.
pub fn ready(
    config: SwitcherConfig,
    measure: TableMeasure,
    titles: &[&str],
    bounds: Size,
) -> (SlideSwitcher<TableMeasure>, Events, SharedSource) {
    let source = SharedSource::new(titles);
    let (mut switcher, events) = wired(config, measure, &source);
    switcher.reload();
    switcher.set_bounds(bounds);
    (switcher, events, source)
}

pub fn assert_rect_close(actual: Rect, expected: Rect) {
    assert!(
        actual.approx_eq(&expected, 1e-3),
        "expected {expected:?}, got {actual:?}"
    );
}
