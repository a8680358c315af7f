use std::process::{Command, Output};

const DEMO: &str = env!("CARGO_BIN_EXE_steadylog-demo");

fn run_demo(env: &[(&str, &str)], args: &[&str]) -> Output {
    let mut command = Command::new(DEMO);
    command.env_remove("LOG").env_remove("DEBUG").args(args);
    for (key, value) in env {
        command.env(key, value);
    }
    command
        .output()
        .unwrap_or_else(|error| panic!("failed to run {DEMO}: {error}"))
}

fn stderr_of(output: &Output) -> String {
    assert!(output.status.success(), "demo failed: {output:?}");
    assert!(output.stdout.is_empty(), "logging must not touch stdout");
    String::from_utf8(output.stderr.clone()).expect("stderr is UTF-8")
}

fn codes(stderr: &str) -> Vec<&str> {
    stderr
        .lines()
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split(": ").nth(1))
        .filter_map(|rest| rest.split("  ").next())
        .collect()
}

#[test]
fn default_threshold_is_warning() {
    let stderr = stderr_of(&run_demo(&[], &[]));
    assert_eq!(codes(&stderr), ["ERR", "WRN"]);
}

#[test]
fn log_selects_threshold_by_exact_name() {
    let stderr = stderr_of(&run_demo(&[("LOG", "info")], &[]));
    assert_eq!(codes(&stderr), ["ERR", "WRN", "INF"]);

    let stderr = stderr_of(&run_demo(&[("LOG", "error"), ("DEBUG", "1")], &[]));
    assert_eq!(codes(&stderr), ["ERR"]);
}

#[cfg(feature = "debug-log")]
#[test]
fn debug_presence_enables_debug_lines() {
    let stderr = stderr_of(&run_demo(&[("DEBUG", "")], &[]));
    assert_eq!(codes(&stderr), ["ERR", "WRN", "INF", "DBG"]);
}

#[cfg(feature = "debug-log")]
#[test]
fn unrecognized_log_falls_through_to_debug() {
    let stderr = stderr_of(&run_demo(&[("LOG", "Info"), ("DEBUG", "1")], &[]));
    assert_eq!(codes(&stderr), ["ERR", "WRN", "INF", "DBG"]);

    let stderr = stderr_of(&run_demo(&[("LOG", "bogus")], &[]));
    assert_eq!(codes(&stderr), ["ERR", "WRN"]);
}

#[cfg(feature = "debug-log")]
#[test]
fn debug_line_layout() {
    let stderr = stderr_of(&run_demo(&[("LOG", "debug")], &[]));
    let line = stderr
        .lines()
        .find(|line| line.contains(": DBG  "))
        .expect("debug line present");

    let (millis, rest) = line.split_once(": ").unwrap();
    assert!(millis.len() >= 4, "elapsed column is padded: {line:?}");
    assert!(millis.trim_end().parse::<u128>().is_ok());
    assert!(
        rest.starts_with("DBG  demo  x=5  (steadylog-demo.rs:")
            && rest.ends_with(')'),
        "unexpected layout: {line:?}"
    );
}

#[test]
fn output_ends_with_blank_line() {
    let stderr = stderr_of(&run_demo(&[("LOG", "error")], &[]));
    assert!(stderr.ends_with(")\n\n"), "{stderr:?}");
}

#[test]
fn piped_output_is_unstyled_unless_forced() {
    let plain = stderr_of(&run_demo(&[], &[]));
    assert!(!plain.contains('\x1b'));

    let forced = stderr_of(&run_demo(&[], &["--color=always"]));
    assert!(forced.contains("\x1b[38;2;255;255;255m\x1b[48;2;205;92;92m"));
    assert!(forced.contains("\x1b[0m"));
}

#[test]
fn unknown_argument_exits_with_usage() {
    let output = run_demo(&[], &["--verbose"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unrecognized argument: --verbose"));
    assert!(stderr.contains("usage: steadylog-demo"));
}
