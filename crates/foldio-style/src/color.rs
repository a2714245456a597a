#![forbid(unsafe_code)]

//! Color type, hex parsing, and contrast/complement derivation.
//!
//! Everything here is pure: the same inputs always produce the same outputs,
//! so derived palettes can be rebuilt from scratch at any time.
//!
//! # Color format
//! The only accepted text form is `#rrggbb`: a leading `#` followed by exactly
//! six hex digits, case-insensitive. Shorthand (`#abc`) and alpha (`#rrggbbaa`)
//! are rejected. Formatting always emits lowercase, so a parsed color
//! round-trips to a canonical string.
//!
//! # Contrast
//! [`contrast_text`] picks between two fixed text colors using the classic
//! perceived-brightness weights (299/587/114 per mille). Backgrounds at or
//! above [`CONTRAST_THRESHOLD`] count as light and get [`TEXT_ON_LIGHT`];
//! everything darker gets [`TEXT_ON_DARK`].
//!
//! # Complement
//! [`complement`] rotates the hue by 180 degrees in HSL space and converts
//! back. Saturation and lightness are preserved; grays (saturation zero) map
//! to themselves.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Rgb
// ---------------------------------------------------------------------------

/// A 24-bit sRGB color.
///
/// Parsed from and formatted as `#rrggbb`. No alpha channel: theme surfaces
/// are always fully opaque and translucency is layered on at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` hex string.
    ///
    /// Exactly six hex digits after the hash, case-insensitive. Anything
    /// else is an error: no shorthand, no alpha, no missing hash.
    ///
    /// ```
    /// use foldio_style::Rgb;
    ///
    /// let accent = Rgb::from_hex("#6366F1").unwrap();
    /// assert_eq!(accent, Rgb::new(0x63, 0x66, 0xf1));
    /// assert_eq!(accent.to_string(), "#6366f1");
    /// assert!(Rgb::from_hex("#abc").is_err());
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let digits = s.strip_prefix('#').ok_or(ParseColorError::MissingHash)?;
        let found = digits.chars().count();
        if found != 6 {
            return Err(ParseColorError::BadLength { found });
        }
        let mut value: u32 = 0;
        for (index, c) in digits.chars().enumerate() {
            let nibble = c
                .to_digit(16)
                .ok_or(ParseColorError::BadDigit { index, found: c })?;
            value = (value << 4) | nibble;
        }
        Ok(Self::new(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Why a hex color string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    /// The string did not start with `#`.
    MissingHash,
    /// The digit run after `#` was not exactly six characters.
    BadLength { found: usize },
    /// A character after `#` was not a hex digit.
    BadDigit { index: usize, found: char },
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHash => write!(f, "hex color must start with '#'"),
            Self::BadLength { found } => {
                write!(f, "hex color needs exactly 6 digits, found {found}")
            }
            Self::BadDigit { index, found } => {
                write!(f, "invalid hex digit {found:?} at position {index}")
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

// ---------------------------------------------------------------------------
// Contrast
// ---------------------------------------------------------------------------

/// Text color used over light backgrounds (near-black slate).
pub const TEXT_ON_LIGHT: Rgb = Rgb::new(0x0f, 0x17, 0x2a);
/// Text color used over dark backgrounds (pure white).
pub const TEXT_ON_DARK: Rgb = Rgb::WHITE;
/// Perceived-brightness cutoff between "light" and "dark" backgrounds.
pub const CONTRAST_THRESHOLD: u8 = 128;

/// Perceived brightness of a color, 0 (black) to 255 (white).
///
/// Integer form of the Rec. 601 luma weights: `(299 R + 587 G + 114 B) / 1000`.
#[inline]
#[must_use]
pub const fn luma(color: Rgb) -> u8 {
    let weighted = 299 * color.r as u32 + 587 * color.g as u32 + 114 * color.b as u32;
    (weighted / 1000) as u8
}

/// Picks the readable text color for the given background.
///
/// Light backgrounds (luma at or above [`CONTRAST_THRESHOLD`]) get
/// [`TEXT_ON_LIGHT`]; dark backgrounds get [`TEXT_ON_DARK`]. The result is
/// always one of those two constants, never an intermediate shade.
///
/// ```
/// use foldio_style::{Rgb, TEXT_ON_DARK, TEXT_ON_LIGHT, contrast_text};
///
/// // Indigo accent reads as dark, so text over it is white.
/// assert_eq!(contrast_text(Rgb::new(0x63, 0x66, 0xf1)), TEXT_ON_DARK);
/// assert_eq!(contrast_text(Rgb::WHITE), TEXT_ON_LIGHT);
/// ```
#[inline]
#[must_use]
pub const fn contrast_text(background: Rgb) -> Rgb {
    if luma(background) >= CONTRAST_THRESHOLD {
        TEXT_ON_LIGHT
    } else {
        TEXT_ON_DARK
    }
}

// ---------------------------------------------------------------------------
// Complement
// ---------------------------------------------------------------------------

/// The color opposite on the hue wheel, at the same saturation and lightness.
///
/// Grays have no hue and map to themselves. Because the round trip through
/// HSL quantizes back to 8-bit channels, a channel may land within a couple
/// of steps of the exact value; the hue relationship is what matters here.
///
/// ```
/// use foldio_style::{Rgb, complement};
///
/// assert_eq!(complement(Rgb::new(0xff, 0x00, 0x00)), Rgb::new(0x00, 0xff, 0xff));
/// ```
#[must_use]
pub fn complement(color: Rgb) -> Rgb {
    let (h, s, l) = rgb_to_hsl(color);
    hsl_to_rgb((h + 180.0) % 360.0, s, l)
}

/// Converts to HSL. Hue in degrees `[0, 360)`, saturation and lightness in
/// `[0, 1]`.
#[allow(clippy::many_single_char_names)]
fn rgb_to_hsl(color: Rgb) -> (f32, f32, f32) {
    let r = f32::from(color.r) / 255.0;
    let g = f32::from(color.g) / 255.0;
    let b = f32::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = f32::midpoint(max, min);

    if (max - min).abs() < f32::EPSILON {
        // achromatic
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < f32::EPSILON {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < f32::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h * 60.0, s, l)
}

#[allow(clippy::many_single_char_names)]
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = h / 360.0;

    let r = hue_to_channel(p, q, h + 1.0 / 3.0);
    let g = hue_to_channel(p, q, h);
    let b = hue_to_channel(p, q, h - 1.0 / 3.0);

    Rgb::new(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
