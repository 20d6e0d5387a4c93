//! Rejected input shows up in the log instead of panicking.

mod common;

use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

use common::{plain_config, ready, wired, SharedSource, TableMeasure};
use segment_slide::{Size, SwitcherKind};
use tracing::subscriber::with_default;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
struct BufferWriter {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl BufferWriter {
    fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
        let buf = Arc::new(Mutex::new(Vec::new()));
        (Self { inner: buf.clone() }, buf)
    }
}

struct LockedWriter<'a> {
    guard: MutexGuard<'a, Vec<u8>>,
}

impl Write for LockedWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = LockedWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LockedWriter {
            guard: self.inner.lock().expect("log buffer poisoned"),
        }
    }
}

fn capture(level: Level, run: impl FnOnce()) -> String {
    let (writer, buffer) = BufferWriter::new();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .with_ansi(false)
        .without_time()
        .with_writer(writer)
        .finish();

    with_default(subscriber, run);

    let bytes = buffer.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_out_of_range_select_warns() {
    let (mut switcher, events, _) = ready(
        plain_config(SwitcherKind::Tab),
        TableMeasure::default(),
        &["A", "B", "C"],
        Size::new(300.0, 44.0),
    );

    let output = capture(Level::WARN, || switcher.select(7, false));

    assert!(output.contains("WARN segment_slide::switcher:"), "{output}");
    assert!(output.contains("rejected switcher index"), "{output}");
    assert!(output.contains("index 7 out of range for 3 items"), "{output}");
    assert!(events.borrow().is_empty());
}

#[test]
fn test_non_finite_progress_warns() {
    let (mut switcher, _, _) = ready(
        plain_config(SwitcherKind::Tab),
        TableMeasure::default(),
        &["A", "B"],
        Size::new(200.0, 44.0),
    );

    let output = capture(Level::WARN, || switcher.slide(0, 1, f32::NAN));

    assert!(output.contains("non-finite slide progress ignored"), "{output}");
}

#[test]
fn test_parked_selection_is_debug_only() {
    let source = SharedSource::new(&["A", "B"]);
    let (mut switcher, _) = wired(plain_config(SwitcherKind::Tab), TableMeasure::default(), &source);

    let quiet = capture(Level::WARN, || switcher.select(1, false));
    assert!(quiet.is_empty(), "{quiet}");

    let verbose = capture(Level::DEBUG, || {
        switcher.reload();
        switcher.set_bounds(Size::new(200.0, 44.0));
    });
    assert!(verbose.contains("switcher reloaded"), "{verbose}");
    assert!(verbose.contains("resolving parked selection"), "{verbose}");
    assert_eq!(switcher.selected_index(), Some(1));
}
