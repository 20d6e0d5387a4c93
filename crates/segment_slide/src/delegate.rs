//! Capabilities the switcher's owner plugs in.
//!
//! Kept as two narrow traits instead of one delegate: the switcher reads
//! titles and badges from one and writes selection changes to the other.

use crate::badge::BadgeKind;

/// Read-only source of titles and badge state.
pub trait TitleSource {
    /// Titles in display order. Pulled on every reload.
    fn titles(&self) -> Vec<String>;

    /// Badge for the title at `index`. Pulled lazily per item.
    fn badge(&self, _index: usize) -> BadgeKind {
        BadgeKind::None
    }
}

impl TitleSource for Vec<String> {
    fn titles(&self) -> Vec<String> {
        self.clone()
    }
}

impl TitleSource for &[&str] {
    fn titles(&self) -> Vec<String> {
        self.iter().map(|title| (*title).to_owned()).collect()
    }
}

/// Receives selection changes. Fired once per actual index change.
pub trait SelectionSink {
    /// The selected index became `index`.
    fn selection_changed(&mut self, index: usize, animated: bool);
}

impl<F: FnMut(usize, bool)> SelectionSink for F {
    fn selection_changed(&mut self, index: usize, animated: bool) {
        self(index, animated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_titles_have_no_badges() {
        let titles: &[&str] = &["Home", "Live"];
        assert_eq!(titles.titles(), vec!["Home".to_owned(), "Live".to_owned()]);
        assert_eq!(titles.badge(0), BadgeKind::None);
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        let mut sink = |index: usize, animated: bool| seen.push((index, animated));
        sink.selection_changed(2, true);
        sink.selection_changed(0, false);
        assert_eq!(seen, vec![(2, true), (0, false)]);
    }
}
