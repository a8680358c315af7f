//! crates/steadylog/src/config.rs
//! Logger configuration and environment resolution of the threshold.

use std::env;
use std::ffi::OsStr;
use std::str::FromStr;

use thiserror::Error;

use crate::level::Severity;

/// Variable naming the threshold: `debug`, `info`, `warning` or `error`.
pub const LEVEL_ENV: &str = "LOG";

/// Variable whose presence, with any value, selects [`Severity::Debug`] when
/// [`LEVEL_ENV`] is absent or unrecognized.
pub const DEBUG_ENV: &str = "DEBUG";

/// Threshold used when the environment selects nothing.
pub const DEFAULT_THRESHOLD: Severity = Severity::Warning;

/// When the process-wide emitter styles its output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ColorMode {
    /// Style only when standard error is a terminal.
    #[default]
    Auto,
    /// Always emit escape sequences.
    Always,
    /// Never emit escape sequences.
    Never,
}

impl ColorMode {
    /// Resolves the mode against whether the destination is a terminal.
    #[must_use]
    pub const fn should_style(self, at_tty: bool) -> bool {
        match self {
            Self::Auto => at_tty,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Error returned when a color mode name is not `auto`, `always` or `never`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown color mode: \"{0}\" (expected auto, always or never)")]
pub struct ParseColorModeError(String);

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name.eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else if name.eq_ignore_ascii_case("always") {
            Ok(Self::Always)
        } else if name.eq_ignore_ascii_case("never") {
            Ok(Self::Never)
        } else {
            Err(ParseColorModeError(name.to_owned()))
        }
    }
}

/// Settings latched by [`init_logging_with`](crate::init_logging_with).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogConfig {
    /// Fixed threshold, or `None` to read [`LEVEL_ENV`] and [`DEBUG_ENV`].
    pub threshold: Option<Severity>,
    /// Styling policy.
    pub color: ColorMode,
}

impl LogConfig {
    /// Configuration that reads the threshold from the environment.
    #[must_use]
    pub const fn from_env() -> Self {
        Self {
            threshold: None,
            color: ColorMode::Auto,
        }
    }

    /// Pins the threshold instead of reading the environment.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: Severity) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Sets the styling policy.
    #[must_use]
    pub const fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// The threshold this configuration selects, consulting the environment
    /// when none is pinned.
    #[must_use]
    pub fn resolve_threshold(&self) -> Severity {
        self.threshold
            .unwrap_or_else(|| threshold_from_env(DEFAULT_THRESHOLD))
    }
}

/// Picks a threshold from the two variables' values.
///
/// `level` is the value of [`LEVEL_ENV`]; an exact severity name wins. When it
/// is absent or unrecognized, `debug_present` selects [`Severity::Debug`].
/// Otherwise `default` is returned.
#[must_use]
pub fn resolve_threshold(
    level: Option<&OsStr>,
    debug_present: bool,
    default: Severity,
) -> Severity {
    if let Some(severity) = level
        .and_then(OsStr::to_str)
        .and_then(|name| name.parse().ok())
    {
        return severity;
    }
    if debug_present {
        return Severity::Debug;
    }
    default
}

/// Reads [`LEVEL_ENV`] and [`DEBUG_ENV`] and resolves a threshold.
#[must_use]
pub fn threshold_from_env(default: Severity) -> Severity {
    let level = env::var_os(LEVEL_ENV);
    let debug_present = env::var_os(DEBUG_ENV).is_some();
    resolve_threshold(level.as_deref(), debug_present, default)
}
