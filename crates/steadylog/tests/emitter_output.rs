//! Integration tests for line rendering through a caller-owned [`Emitter`].
//!
//! These exercise the public surface only and never touch the process-wide
//! latch, so they hold under any environment.

use std::time::{Duration, Instant};

use steadylog::{Color, Emitter, Record, Severity, TextStyle, render_line, strip_path};

fn rendered(emitter: Emitter<Vec<u8>>) -> String {
    String::from_utf8(emitter.into_inner()).unwrap()
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn call_site_location_is_reduced_to_file_name() {
    let mut out = String::new();
    let line = line!();
    render_line(
        &mut out,
        &Record::new(Severity::Warning, file!(), line, format_args!("disk at {}%", 91))
            .with_module(Some("storage")),
        7,
        false,
    )
    .unwrap();

    assert_eq!(
        out,
        format!("7   : WRN  storage  disk at 91%  (emitter_output.rs:{line})\n")
    );
    assert_eq!(strip_path(file!()), "emitter_output.rs");
}

#[test]
fn every_severity_uses_its_three_letter_code() {
    let mut emitter = Emitter::new(Vec::new(), Severity::Debug);
    for severity in Severity::ALL {
        emitter
            .emit(
                &Record::new(severity, "a/b.rs", 1, format_args!("m")).with_module(Some("x")),
            )
            .unwrap();
    }

    let output = rendered(emitter);
    let codes: Vec<&str> = output
        .lines()
        .map(|line| line.split(": ").nth(1).unwrap().split("  ").next().unwrap())
        .collect();
    assert_eq!(codes, ["ERR", "WRN", "INF", "DBG"]);
}

#[test]
fn elapsed_column_comes_from_the_epoch() {
    let epoch = Instant::now().checked_sub(Duration::from_millis(1500)).unwrap();
    let mut emitter = Emitter::new(Vec::new(), Severity::Error).with_epoch(epoch);
    emitter
        .emit(&Record::new(Severity::Error, "main.rs", 3, format_args!("late")))
        .unwrap();

    let output = rendered(emitter);
    let millis: u128 = output.split(':').next().unwrap().trim().parse().unwrap();
    assert!(millis >= 1500, "elapsed {millis} below epoch offset");
}

#[test]
fn message_may_contain_newlines_verbatim() {
    let mut emitter = Emitter::new(Vec::new(), Severity::Info);
    emitter
        .emit(&Record::new(Severity::Info, "m.rs", 2, format_args!("a\nb")))
        .unwrap();
    assert!(rendered(emitter).contains("INF  a\nb  (m.rs:2)\n"));
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn threshold_admits_only_equal_or_more_severe() {
    for threshold in Severity::ALL {
        let mut emitter = Emitter::new(Vec::new(), threshold);
        for severity in Severity::ALL {
            emitter
                .emit(&Record::new(severity, "f.rs", 1, format_args!("{severity}")))
                .unwrap();
        }
        let output = rendered(emitter);
        let expected = Severity::ALL.iter().filter(|s| **s <= threshold).count();
        assert_eq!(output.lines().count(), expected, "threshold {threshold}");
    }
}

#[test]
fn lowering_the_threshold_takes_effect_immediately() {
    let mut emitter = Emitter::new(Vec::new(), Severity::Error);
    emitter
        .emit(&Record::new(Severity::Info, "f.rs", 1, format_args!("dropped")))
        .unwrap();
    emitter.set_threshold(Severity::Info);
    emitter
        .emit(&Record::new(Severity::Info, "f.rs", 2, format_args!("kept")))
        .unwrap();

    let output = rendered(emitter);
    assert!(!output.contains("dropped"));
    assert!(output.contains("kept"));
}

// ============================================================================
// Styling
// ============================================================================

#[test]
fn styled_debug_line_dims_the_location() {
    let mut emitter = Emitter::new(Vec::new(), Severity::Debug).with_styling(true);
    emitter
        .emit(
            &Record::new(Severity::Debug, "src/x.rs", 9, format_args!("tick"))
                .with_module(Some("clock")),
        )
        .unwrap();

    let output = rendered(emitter);
    let body = "\x1b[38;2;128;128;128m";
    let dimmed = "\x1b[38;2;64;64;64m";
    assert!(output.starts_with(body));
    assert!(output.contains(&format!("{dimmed}  (x.rs:9)\x1b[0m\n")));
    assert_eq!(
        TextStyle::location(Severity::Debug)
            .foreground()
            .map(Color::packed),
        Some(0x40_40_40)
    );
}

#[test]
fn styled_warning_uses_the_same_style_for_location() {
    let mut emitter = Emitter::new(Vec::new(), Severity::Warning).with_styling(true);
    emitter
        .emit(&Record::new(Severity::Warning, "w.rs", 4, format_args!("careful")))
        .unwrap();

    let output = rendered(emitter);
    let prefix = "\x1b[38;2;0;0;0m\x1b[48;2;255;255;0m";
    assert_eq!(output.matches(prefix).count(), 2);
    assert!(output.ends_with("\x1b[0m\n"));
}

#[test]
fn blank_line_is_unstyled() {
    let mut emitter = Emitter::new(Vec::new(), Severity::Error).with_styling(true);
    emitter.blank_line().unwrap();
    assert_eq!(rendered(emitter), "\n");
}
