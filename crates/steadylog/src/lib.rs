#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/steadylog/src/lib.rs
//!
//! # Overview
//!
//! `steadylog` is a small leveled console logger. Call sites emit formatted
//! messages tagged with a severity, their source location and a module name;
//! a process-wide threshold read once from the environment decides which of
//! them reach standard error.
//!
//! # Design
//!
//! - [`Severity`] orders `error > warning > info > debug`.
//! - The threshold, styling policy and elapsed-time epoch are latched once
//!   into a [`OnceLock`](std::sync::OnceLock), explicitly via
//!   [`init_logging`]/[`init_logging_with`] or lazily by the first log call.
//!   The `LOG` variable selects a severity by exact name; otherwise `DEBUG`,
//!   if present, selects debug; otherwise the threshold stays at
//!   [`DEFAULT_THRESHOLD`].
//! - Elapsed times count from the moment the state is latched. Call
//!   [`init_logging`] as the first statement of `main` so that moment is
//!   process start; otherwise the first log call becomes time zero.
//! - [`Emitter`] filters and renders records into any [`std::io::Write`] and
//!   owns no global state. The process-wide [`emit`] renders through the same
//!   code into standard error.
//! - When standard error is a terminal each line is colored per severity and
//!   the location annotation uses a dimmed variant computed with [`adjust`].
//!
//! # Invariants
//!
//! - Filtered calls return before reading the clock or formatting anything.
//!   The macros go further and skip evaluating their arguments.
//! - A passing call produces exactly one line in a single write.
//! - The environment is read at most once per process.
//! - With the `debug-log` feature disabled, [`log_debug!`] expands to `()`.
//!
//! # Errors
//!
//! The process-wide entry points never fail: write errors on standard error
//! are dropped. [`Emitter`] surfaces [`std::io::Error`]s from its writer.
//! Format strings are checked at compile time.
//!
//! # Examples
//!
//! ```
//! steadylog::log_module!("tracker");
//!
//! steadylog::init_logging();
//! steadylog::log_warning!("announce failed, retrying in {}s", 30);
//! steadylog::log_debug!("peers: {:?}", ["10.0.0.1", "10.0.0.2"]);
//! steadylog::log_empty_line!();
//! ```

mod color;
mod config;
mod emitter;
mod level;
mod macros;
mod path;
mod state;
mod style;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use color::{Color, Rgb, adjust, compose, decompose};
pub use config::{
    ColorMode, DEBUG_ENV, DEFAULT_THRESHOLD, LEVEL_ENV, LogConfig, ParseColorModeError,
    resolve_threshold, threshold_from_env,
};
pub use emitter::{Emitter, Record, emit, emit_blank_line, render_line};
pub use level::{ParseSeverityError, Severity};
pub use path::strip_path;
pub use state::{
    InitError, LoggerState, elapsed_millis, enabled, init_logging, init_logging_with,
    is_initialized, logger, threshold,
};
pub use style::{LOCATION_DIM, TextStyle};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{SteadyLayer, init_tracing};

/// Whether `log_debug!` call sites were compiled in.
pub const DEBUG_ENABLED: bool = cfg!(feature = "debug-log");
