#![deny(unsafe_code)]

//! Emits one line per severity followed by a blank line.
//!
//! Run with `LOG=<level>` or `DEBUG=1` to change the threshold and
//! `--color=auto|always|never` to override terminal detection.

use std::env;
use std::ffi::OsString;
use std::process::ExitCode;

use steadylog::{ColorMode, LogConfig, log_debug, log_empty_line, log_error, log_info, log_warning};

steadylog::log_module!("demo");

const USAGE: &str = "usage: steadylog-demo [--color=auto|always|never]";

fn parse_color(args: impl IntoIterator<Item = OsString>) -> Result<ColorMode, String> {
    let mut color = ColorMode::Auto;
    for arg in args {
        let arg = arg
            .into_string()
            .map_err(|raw| format!("argument is not valid UTF-8: {raw:?}"))?;
        let Some(mode) = arg.strip_prefix("--color=") else {
            return Err(format!("unrecognized argument: {arg}"));
        };
        color = mode.parse().map_err(|err| format!("{err}"))?;
    }
    Ok(color)
}

fn main() -> ExitCode {
    let color = match parse_color(env::args_os().skip(1)) {
        Ok(color) => color,
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = steadylog::init_logging_with(LogConfig::from_env().with_color(color)) {
        eprintln!("{err}");
    }

    log_error!("disk quota exceeded on {}", "/var/cache");
    log_warning!("retrying in {}s", 30);
    log_info!("listening on {}:{}", "127.0.0.1", 6881);
    log_debug!("x={}", 5);
    log_empty_line!();

    ExitCode::SUCCESS
}
