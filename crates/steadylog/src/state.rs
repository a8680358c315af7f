//! crates/steadylog/src/state.rs
//! Process-wide logger state: the threshold latch and the elapsed-time epoch.
//!
//! The state lives in a single [`OnceLock`]. It is filled exactly once, either
//! explicitly through [`init_logging`]/[`init_logging_with`] or implicitly by
//! the first log call. Concurrent first calls race on the lock, one
//! initializer runs, and every caller observes its result. After that the
//! environment is never consulted again.
//!
//! The epoch is the instant the latch is filled, not the instant the process
//! started. A program that logs for the first time after running for a while
//! sees `0` in the elapsed column of that line unless it called
//! [`init_logging`] at the top of `main`.

use std::sync::OnceLock;
use std::time::Instant;

use is_terminal::IsTerminal;
use thiserror::Error;

use crate::config::{ColorMode, LogConfig};
use crate::level::Severity;

static LOGGER: OnceLock<LoggerState> = OnceLock::new();

/// Snapshot latched on first use.
#[derive(Clone, Copy, Debug)]
pub struct LoggerState {
    threshold: Severity,
    color: ColorMode,
    epoch: Instant,
}

impl LoggerState {
    fn from_config(config: LogConfig) -> Self {
        Self {
            threshold: config.resolve_threshold(),
            color: config.color,
            epoch: Instant::now(),
        }
    }

    /// Minimum severity that is emitted.
    #[must_use]
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Styling policy.
    #[must_use]
    pub const fn color(&self) -> ColorMode {
        self.color
    }

    /// Instant elapsed times are measured from.
    #[must_use]
    pub const fn epoch(&self) -> Instant {
        self.epoch
    }

    /// Reports whether the process-wide emitter should style its output.
    #[must_use]
    pub fn should_style(&self) -> bool {
        self.color.should_style(std::io::stderr().is_terminal())
    }
}

/// Returned by [`init_logging_with`] when the state was already latched.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum InitError {
    /// Another call, explicit or implicit, initialized the logger first.
    #[error("logging already initialized with threshold {threshold}")]
    AlreadyInitialized {
        /// Threshold that stays in effect.
        threshold: Severity,
    },
}

/// Returns the latched state, reading the environment on first use.
pub fn logger() -> &'static LoggerState {
    LOGGER.get_or_init(|| LoggerState::from_config(LogConfig::from_env()))
}

/// Latches the state from the environment and returns the active threshold.
///
/// The epoch is captured here, so the elapsed column counts from process start
/// only when this is the first statement of `main`. Later calls are no-ops
/// that return the same threshold.
pub fn init_logging() -> Severity {
    logger().threshold
}

/// Latches the state from `config`.
///
/// Fails with [`InitError::AlreadyInitialized`] when the state is already
/// set, leaving it unchanged.
pub fn init_logging_with(config: LogConfig) -> Result<Severity, InitError> {
    let mut installed = false;
    let state = LOGGER.get_or_init(|| {
        installed = true;
        LoggerState::from_config(config)
    });
    if installed {
        Ok(state.threshold)
    } else {
        Err(InitError::AlreadyInitialized {
            threshold: state.threshold,
        })
    }
}

/// Reports whether the state has been latched.
pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

/// Active threshold.
pub fn threshold() -> Severity {
    logger().threshold
}

/// Reports whether a message at `severity` would be emitted.
#[inline]
pub fn enabled(severity: Severity) -> bool {
    severity.passes(logger().threshold)
}

/// Whole milliseconds since the epoch.
///
/// Latches the state if nothing has yet, in which case the result is `0`.
pub fn elapsed_millis() -> u128 {
    logger().epoch.elapsed().as_millis()
}
