//! crates/steadylog/src/color.rs
//! Packed 24-bit colors, channel decomposition, and brightness adjustment.

use std::fmt;

/// Red, green and blue channels of a [`Color`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a channel triple.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A color packed as `0xRRGGBB`.
///
/// Bits above the low 24 are discarded on construction, so every value is a
/// valid color.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Color(u32);

impl Color {
    /// `#000000`
    pub const BLACK: Self = Self(0x000000);
    /// `#FFFFFF`
    pub const WHITE: Self = Self(0xFFFFFF);
    /// `#808080`
    pub const GRAY: Self = Self(0x808080);
    /// `#D3D3D3`
    pub const LIGHT_GRAY: Self = Self(0xD3D3D3);
    /// `#FFFF00`
    pub const YELLOW: Self = Self(0xFFFF00);
    /// `#CD5C5C`
    pub const INDIAN_RED: Self = Self(0xCD5C5C);

    /// Wraps a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn new(packed: u32) -> Self {
        Self(packed & 0x00FF_FFFF)
    }

    /// Returns the packed `0xRRGGBB` value.
    #[must_use]
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Splits the color into its channels.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        decompose(self)
    }

    /// Brightens each channel by `percent` of itself. See [`adjust`].
    #[must_use]
    pub fn lighter(self, percent: f64) -> Self {
        adjust(self, percent.abs())
    }

    /// Dims each channel by `percent` of itself. See [`adjust`].
    #[must_use]
    pub fn darker(self, percent: f64) -> Self {
        adjust(self, -percent.abs())
    }

    /// The 24-bit terminal color for this value.
    #[must_use]
    pub const fn to_ansi(self) -> anstyle::Color {
        let Rgb { r, g, b } = decompose(self);
        anstyle::Color::Rgb(anstyle::RgbColor(r, g, b))
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        compose(rgb)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        decompose(color)
    }
}

impl From<Color> for anstyle::Color {
    fn from(color: Color) -> Self {
        color.to_ansi()
    }
}

impl From<anstyle::RgbColor> for Color {
    fn from(rgb: anstyle::RgbColor) -> Self {
        compose(Rgb::new(rgb.r(), rgb.g(), rgb.b()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Unpacks `color` into its red, green and blue channels.
#[must_use]
pub const fn decompose(color: Color) -> Rgb {
    let value = color.0;
    Rgb {
        r: ((value >> 16) & 0xFF) as u8,
        g: ((value >> 8) & 0xFF) as u8,
        b: (value & 0xFF) as u8,
    }
}

/// Packs three channels into a [`Color`].
#[must_use]
pub const fn compose(rgb: Rgb) -> Color {
    Color(((rgb.r as u32) << 16) | ((rgb.g as u32) << 8) | rgb.b as u32)
}

/// Adds `channel * percent` to every channel and clamps the result to `0..=255`.
///
/// Positive percentages lighten, negative ones darken. The product is
/// truncated toward zero before it is added. No range is enforced on
/// `percent`; the clamp keeps the output valid for any input, including
/// non-finite ones.
///
/// ```
/// use steadylog::{Color, adjust};
///
/// assert_eq!(adjust(Color::GRAY, -0.5), Color::new(0x404040));
/// assert_eq!(adjust(Color::GRAY, 10.0), Color::WHITE);
/// ```
#[must_use]
pub fn adjust(color: Color, percent: f64) -> Color {
    let Rgb { r, g, b } = decompose(color);
    compose(Rgb {
        r: adjust_channel(r, percent),
        g: adjust_channel(g, percent),
        b: adjust_channel(b, percent),
    })
}

fn adjust_channel(channel: u8, percent: f64) -> u8 {
    let base = f64::from(channel);
    // NaN saturates to 0 on the float-to-int cast.
    (base + (base * percent).trunc()).clamp(0.0, 255.0) as u8
}
