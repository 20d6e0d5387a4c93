//! # Slide Trace
//!
//! Drives a switcher through one pager drag and prints the indicator frame
//! at each step. Handy for eyeballing a config before wiring it into a host.
//!
//! ```text
//! slide_trace [--config switcher.toml] [--width 375] [--steps 8] [TITLE...]
//! ```
//!
//! Set `RUST_LOG=segment_slide=debug` to see the state machine at work.

use std::cell::RefCell;
use std::rc::Rc;

use segment_slide::{
    CommandBuffer, MonospaceMeasure, SlideSwitcher, Size, SwitcherConfig, SwitcherError,
};

const DEFAULT_TITLES: [&str; 4] = ["Recommended", "News", "Video", "Live"];

/// Parsed command line.
struct Args {
    config: Option<String>,
    width: f32,
    steps: u32,
    titles: Vec<String>,
}

fn parse_args() -> Result<Args, SwitcherError> {
    let mut args = Args {
        config: None,
        width: 375.0,
        steps: 8,
        titles: Vec::new(),
    };
    let mut raw = std::env::args().skip(1);
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--config" => args.config = raw.next(),
            "--width" => {
                args.width = raw
                    .next()
                    .and_then(|value| value.parse().ok())
                    .ok_or_else(|| SwitcherError::InvalidConfig("--width needs a number".into()))?;
            }
            "--steps" => {
                args.steps = raw
                    .next()
                    .and_then(|value| value.parse().ok())
                    .filter(|steps| *steps > 0)
                    .ok_or_else(|| SwitcherError::InvalidConfig("--steps needs a positive integer".into()))?;
            }
            _ => args.titles.push(arg),
        }
    }
    if args.titles.is_empty() {
        args.titles = DEFAULT_TITLES.iter().map(|title| (*title).to_owned()).collect();
    }
    Ok(args)
}

fn main() -> Result<(), SwitcherError> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => SwitcherConfig::from_toml_file(path)?,
        None => SwitcherConfig::default(),
    };

    let changes = Rc::new(RefCell::new(Vec::new()));
    let mut switcher = SlideSwitcher::new(config, MonospaceMeasure::default());
    switcher.set_title_source(args.titles.clone());
    {
        let changes = Rc::clone(&changes);
        switcher.set_selection_sink(move |index: usize, animated: bool| {
            changes.borrow_mut().push((index, animated));
        });
    }

    // Select before the view has a size, like a host restoring state.
    switcher.select(0, false);
    switcher.reload();
    switcher.set_bounds(Size::new(args.width, 44.0));

    println!("=== Slide Trace ===");
    println!(
        "kind: {:?}, animate: {:?}, content: {:.1} x {:.1}",
        switcher.active_config().kind,
        switcher.active_config().animate_type,
        switcher.content_size().width,
        switcher.content_size().height,
    );
    for index in 0..switcher.item_count() {
        if let (Some(title), Some(frame)) = (switcher.title(index), switcher.button_frame(index)) {
            println!("  [{index}] {title:<14} x={:7.1} w={:6.1}", frame.x, frame.width);
        }
    }

    let last = switcher.item_count().saturating_sub(1);
    if last > 0 {
        println!("--- slide 0 -> {last} ---");
        for step in 0..=args.steps {
            #[allow(clippy::cast_precision_loss)]
            let progress = step as f32 / args.steps as f32;
            switcher.slide(0, last, progress);
            if let Some(frame) = switcher.indicator_frame() {
                println!("  p={progress:.3} x={:7.2} w={:6.2}", frame.x, frame.width);
            }
        }
        switcher.select(last, true);
    }

    let mut buffer = CommandBuffer::new();
    switcher.render(&mut buffer);
    println!(
        "--- frame: {} commands, {} quads ---",
        buffer.commands().len(),
        buffer.quads().len()
    );
    for (index, animated) in changes.borrow().iter() {
        println!("  selection -> {index} (animated: {animated})");
    }
    Ok(())
}
