//! crates/steadylog/src/style.rs
//! Terminal text styles selected per severity.

use std::fmt::{self, Write as _};

use anstyle::Style;

use crate::color::{Color, adjust};
use crate::level::Severity;

/// Darkening applied to the location annotation of debug and info lines.
pub const LOCATION_DIM: f64 = -0.5;

/// Optional foreground and background colors for a run of text.
///
/// The default style is plain and emits no escape sequences.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TextStyle(Style);

impl TextStyle {
    /// A style that emits nothing.
    pub const PLAIN: Self = Self(Style::new());

    /// A style with only a foreground color.
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self(Style::new().fg_color(Some(color.to_ansi())))
    }

    /// Adds a background color.
    #[must_use]
    pub const fn on(self, color: Color) -> Self {
        Self(self.0.bg_color(Some(color.to_ansi())))
    }

    /// Foreground color, if any.
    #[must_use]
    pub fn foreground(self) -> Option<Color> {
        rgb_of(self.0.get_fg_color())
    }

    /// Background color, if any.
    #[must_use]
    pub fn background(self) -> Option<Color> {
        rgb_of(self.0.get_bg_color())
    }

    /// Reports whether the style emits no escape sequences.
    #[must_use]
    pub fn is_plain(self) -> bool {
        self.0 == Style::new()
    }

    /// The underlying terminal style.
    #[must_use]
    pub const fn as_anstyle(self) -> Style {
        self.0
    }

    /// Style of the timestamp, level, module and message of a line.
    #[must_use]
    pub const fn body(severity: Severity) -> Self {
        match severity {
            Severity::Debug => Self::fg(Color::GRAY),
            Severity::Info => Self::fg(Color::LIGHT_GRAY),
            Severity::Warning => Self::fg(Color::BLACK).on(Color::YELLOW),
            Severity::Error => Self::fg(Color::WHITE).on(Color::INDIAN_RED),
        }
    }

    /// Style of the trailing `(file:line)` annotation.
    ///
    /// Debug and info dim the body foreground; warning and error reuse the
    /// body style so the highlighted background runs to the end of the line.
    #[must_use]
    pub fn location(severity: Severity) -> Self {
        let body = Self::body(severity);
        match severity {
            Severity::Debug | Severity::Info => match body.foreground() {
                Some(color) => Self(body.0.fg_color(Some(adjust(color, LOCATION_DIM).to_ansi()))),
                None => body,
            },
            Severity::Warning | Severity::Error => body,
        }
    }

    /// Writes `content` wrapped in this style's escape sequences.
    ///
    /// Plain styles write `content` untouched.
    pub fn paint<F>(self, out: &mut String, content: F) -> fmt::Result
    where
        F: FnOnce(&mut String) -> fmt::Result,
    {
        write!(out, "{}", self.0.render())?;
        content(out)?;
        write!(out, "{}", self.0.render_reset())
    }
}

impl From<TextStyle> for Style {
    fn from(style: TextStyle) -> Self {
        style.0
    }
}

fn rgb_of(color: Option<anstyle::Color>) -> Option<Color> {
    match color {
        Some(anstyle::Color::Rgb(rgb)) => Some(rgb.into()),
        _ => None,
    }
}
