//! crates/steadylog/src/level.rs
//! Message severities and their textual forms.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Diagnostic severity, ordered from most to least severe.
///
/// The derived ordering follows declaration order, so `Error < Warning < Info <
/// Debug`. A message passes a threshold when its severity compares less than or
/// equal to it; see [`Severity::passes`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Severity {
    /// Failures the caller could not recover from.
    Error = 0,
    /// Unexpected conditions that did not stop the operation.
    Warning = 1,
    /// Progress and state changes worth seeing by default.
    Info = 2,
    /// Developer-facing detail.
    Debug = 3,
}

impl Severity {
    /// All severities from most to least severe.
    pub const ALL: [Self; 4] = [Self::Error, Self::Warning, Self::Info, Self::Debug];

    /// Three-letter code printed in each log line.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Error => "ERR",
            Self::Warning => "WRN",
            Self::Info => "INF",
            Self::Debug => "DBG",
        }
    }

    /// Lowercase name accepted by [`FromStr`] and the `LOG` variable.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Reports whether a message at this severity is emitted under `threshold`.
    #[must_use]
    #[inline]
    pub const fn passes(self, threshold: Self) -> bool {
        self as u8 <= threshold as u8
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a severity name is not one of `debug`, `info`,
/// `warning` or `error`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown severity name: \"{invalid_name}\"")]
pub struct ParseSeverityError {
    invalid_name: String,
}

impl ParseSeverityError {
    /// Creates a parse error that records the rejected name.
    #[must_use]
    pub fn new(invalid_name: &str) -> Self {
        Self {
            invalid_name: invalid_name.to_owned(),
        }
    }

    /// Returns the name that failed to parse.
    #[must_use]
    pub fn invalid_name(&self) -> &str {
        &self.invalid_name
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Matching is exact and case-sensitive.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            other => Err(ParseSeverityError::new(other)),
        }
    }
}
