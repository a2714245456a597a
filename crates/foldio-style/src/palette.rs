#![forbid(unsafe_code)]

//! Adaptive light/dark slots and the base palette tables.
//!
//! The mode-dependent half of a theme comes from here: one literal color per
//! slot per mode, chosen by the dark flag. Nothing in this module is derived
//! from the accent.

use crate::color::Rgb;

/// A color with distinct light-mode and dark-mode values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdaptiveColor {
    pub light: Rgb,
    pub dark: Rgb,
}

impl AdaptiveColor {
    #[inline]
    #[must_use]
    pub const fn adaptive(light: Rgb, dark: Rgb) -> Self {
        Self { light, dark }
    }

    /// Picks the value for the given mode.
    #[inline]
    #[must_use]
    pub const fn resolve(self, is_dark: bool) -> Rgb {
        if is_dark { self.dark } else { self.light }
    }
}

/// The fixed, mode-dependent surface colors of the shell.
///
/// Light and dark values are independent literals, not transformations of
/// one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasePalette {
    /// Page background.
    pub primary: AdaptiveColor,
    /// Panels and wells one step off the page background.
    pub secondary: AdaptiveColor,
    /// Card surfaces.
    pub card_bg: AdaptiveColor,
    /// Body text.
    pub text: AdaptiveColor,
    /// De-emphasized text.
    pub text_light: AdaptiveColor,
}

/// The base palette table.
pub const BASE: BasePalette = BasePalette {
    primary: AdaptiveColor::adaptive(Rgb::new(0xf8, 0xfa, 0xfc), Rgb::new(0x0f, 0x17, 0x2a)),
    secondary: AdaptiveColor::adaptive(Rgb::new(0xe2, 0xe8, 0xf0), Rgb::new(0x1e, 0x29, 0x3b)),
    card_bg: AdaptiveColor::adaptive(Rgb::new(0xff, 0xff, 0xff), Rgb::new(0x1e, 0x29, 0x3b)),
    text: AdaptiveColor::adaptive(Rgb::new(0x0f, 0x17, 0x2a), Rgb::new(0xf8, 0xfa, 0xfc)),
    text_light: AdaptiveColor::adaptive(Rgb::new(0x64, 0x74, 0x8b), Rgb::new(0x94, 0xa3, 0xb8)),
};

/// Accent colors offered by the settings screen.
///
/// The engine accepts any well-formed color as an accent; this table only
/// seeds the picker and the initial default.
pub const ACCENT_SWATCHES: [Rgb; 8] = [
    Rgb::new(0x63, 0x66, 0xf1), // indigo
    Rgb::new(0xef, 0x44, 0x44), // red
    Rgb::new(0xf9, 0x73, 0x16), // orange
    Rgb::new(0xf5, 0x9e, 0x0b), // amber
    Rgb::new(0x10, 0xb9, 0x81), // emerald
    Rgb::new(0x06, 0xb6, 0xd4), // cyan
    Rgb::new(0x3b, 0x82, 0xf6), // blue
    Rgb::new(0xec, 0x48, 0x99), // pink
];

/// Accent a fresh theme starts with.
pub const DEFAULT_ACCENT: Rgb = ACCENT_SWATCHES[0];
