#![forbid(unsafe_code)]

//! Theme types: derived color sets, background patterns, theme records.
//!
//! # Derivation
//! [`ThemeColors::derive`] is the whole engine: given `(accent, is_dark,
//! console)` it produces every color a view needs. The mode-dependent slots
//! come from the [`BASE`] table, the accent is stored verbatim with its
//! contrast partner computed, and the console pair is copied through. The
//! function is total and pure, so a palette can always be rebuilt from those
//! three inputs.
//!
//! # Wholesale replacement
//! A [`Theme`] is never mutated in place. Every change goes through a
//! `with_*` method that returns a fresh value, and the runtime controller
//! publishes that fresh value atomically. This keeps readers from ever
//! observing a half-updated theme.

use crate::color::{Rgb, contrast_text};
use crate::console::{ConsoleColor, ConsoleVariant};
use crate::palette::{BASE, DEFAULT_ACCENT};

// ---------------------------------------------------------------------------
// ThemeColors
// ---------------------------------------------------------------------------

/// The complete color set for one mode, accent, and console skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemeColors {
    /// Page background.
    pub primary: Rgb,
    /// Panels and wells one step off the page background.
    pub secondary: Rgb,
    /// Card surfaces.
    pub card_bg: Rgb,
    /// Body text.
    pub text: Rgb,
    /// De-emphasized text.
    pub text_light: Rgb,
    /// The user-chosen accent, stored verbatim.
    pub accent: Rgb,
    /// Text color guaranteed readable on `accent`.
    pub contrast_accent: Rgb,
    /// Console shell body color.
    pub console: Rgb,
    /// Console shell bevel color.
    pub console_edge: Rgb,
}

impl ThemeColors {
    /// Derives the full color set from the three theme inputs.
    ///
    /// `primary` through `text_light` depend only on `is_dark`. `accent` is
    /// copied verbatim and `contrast_accent` computed from its luma. The
    /// console pair is copied through untouched.
    ///
    /// ```
    /// use foldio_style::{ConsoleColor, Rgb, ThemeColors};
    ///
    /// let accent = Rgb::new(0x63, 0x66, 0xf1);
    /// let colors = ThemeColors::derive(accent, true, ConsoleColor::Black.variant());
    /// assert_eq!(colors.accent, accent);
    /// assert_eq!(colors.contrast_accent, Rgb::WHITE);
    /// assert_eq!(colors.primary, Rgb::new(0x0f, 0x17, 0x2a));
    /// ```
    #[must_use]
    pub const fn derive(accent: Rgb, is_dark: bool, console: ConsoleVariant) -> Self {
        Self {
            primary: BASE.primary.resolve(is_dark),
            secondary: BASE.secondary.resolve(is_dark),
            card_bg: BASE.card_bg.resolve(is_dark),
            text: BASE.text.resolve(is_dark),
            text_light: BASE.text_light.resolve(is_dark),
            accent,
            contrast_accent: contrast_text(accent),
            console: console.base,
            console_edge: console.edge,
        }
    }

    /// The console pair currently carried by this color set.
    ///
    /// Reconstructed from the `console`/`console_edge` fields, so it also
    /// works for pairs that were never in the named variant table.
    #[inline]
    #[must_use]
    pub const fn console_variant(&self) -> ConsoleVariant {
        ConsoleVariant {
            base: self.console,
            edge: self.console_edge,
        }
    }
}

// ---------------------------------------------------------------------------
// Pattern
// ---------------------------------------------------------------------------

/// Decorative background motifs. Carried as inert data; only views draw them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pattern {
    #[default]
    Dots,
    Checkers,
    Stripes,
    Grid,
    Waves,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Dots,
        Pattern::Checkers,
        Pattern::Stripes,
        Pattern::Grid,
        Pattern::Waves,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Pattern::Dots => "dots",
            Pattern::Checkers => "checkers",
            Pattern::Stripes => "stripes",
            Pattern::Grid => "grid",
            Pattern::Waves => "waves",
        }
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Opaque theme identity tag, carried for bookkeeping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ThemeId(u32);

impl ThemeId {
    pub const DEFAULT: ThemeId = ThemeId(0);

    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// The full theme configuration held by the runtime controller.
///
/// Plain `Copy` data. Changing a field means building a replacement value,
/// normally through the `with_*` methods; the dark flag is deliberately not
/// among them because flipping it must also rework the console skin, which
/// is the controller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    pub id: ThemeId,
    pub colors: ThemeColors,
    pub pattern: Pattern,
    pub is_dark: bool,
    pub scanlines: bool,
}

impl Theme {
    /// Builds a theme from the three derivation inputs.
    ///
    /// Pattern and scanlines start at their defaults (dots, on).
    #[must_use]
    pub const fn new(accent: Rgb, is_dark: bool, console: ConsoleColor) -> Self {
        Self {
            id: ThemeId::DEFAULT,
            colors: ThemeColors::derive(accent, is_dark, console.variant()),
            pattern: Pattern::Dots,
            is_dark,
            scanlines: true,
        }
    }

    /// The out-of-the-box theme for the given mode: default accent, the
    /// mode's default console skin.
    #[must_use]
    pub const fn mode_default(is_dark: bool) -> Self {
        Self::new(DEFAULT_ACCENT, is_dark, ConsoleColor::mode_default(is_dark))
    }

    /// Replaces the color set wholesale.
    #[must_use]
    pub const fn with_colors(mut self, colors: ThemeColors) -> Self {
        self.colors = colors;
        self
    }

    /// Replaces the background pattern.
    #[must_use]
    pub const fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Turns the scanline overlay on or off.
    #[must_use]
    pub const fn with_scanlines(mut self, scanlines: bool) -> Self {
        self.scanlines = scanlines;
        self
    }

    /// Changes the accent and rederives the colors around it.
    ///
    /// Mode and console pair are kept, including console pairs outside the
    /// named table.
    #[must_use]
    pub const fn with_accent(self, accent: Rgb) -> Self {
        Self {
            colors: ThemeColors::derive(accent, self.is_dark, self.colors.console_variant()),
            ..self
        }
    }

    /// Switches to a named console skin and rederives the colors.
    #[must_use]
    pub const fn with_console(self, console: ConsoleColor) -> Self {
        Self {
            colors: ThemeColors::derive(self.colors.accent, self.is_dark, console.variant()),
            ..self
        }
    }
}

impl Default for Theme {
    /// Dark mode with the default accent and black console skin.
    fn default() -> Self {
        Self::mode_default(true)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
