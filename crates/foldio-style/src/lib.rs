#![forbid(unsafe_code)]

//! Theme engine and color primitives for the foldio portfolio shell.
//!
//! # Role in foldio
//! `foldio-style` is the shared vocabulary for colors and themes. The runtime
//! controller and any rendering front end use these types to stay visually
//! consistent without dragging in state management or I/O dependencies.
//!
//! # This crate provides
//! - [`Rgb`] hex color parsing and formatting (`#rrggbb`, six digits, no alpha).
//! - Contrast and complement derivation ([`contrast_text`], [`complement`]).
//! - [`ConsoleColor`] accent pairs for the retro console widget, with a
//!   reverse lookup by base color.
//! - [`AdaptiveColor`] light/dark slot pairs and the base palette tables.
//! - [`Theme`] and [`ThemeColors`], the full derived color set for one mode.
//!
//! # How it fits in the system
//! `foldio-runtime` holds the live [`Theme`] and swaps it atomically; this
//! crate keeps every derivation pure and deterministic so a theme can be
//! rebuilt from `(accent, is_dark, console)` alone.

/// Color type, hex parsing, and contrast/complement derivation.
pub mod color;
/// Console accent variants and the base-color reverse index.
pub mod console;
/// Adaptive light/dark slots and the base palette tables.
pub mod palette;
/// Theme types: derived color sets, background patterns, theme records.
pub mod theme;

pub use color::{
    CONTRAST_THRESHOLD, ParseColorError, Rgb, TEXT_ON_DARK, TEXT_ON_LIGHT, complement,
    contrast_text, luma,
};
pub use console::{ConsoleColor, ConsoleVariant};
pub use palette::{ACCENT_SWATCHES, AdaptiveColor, BASE, BasePalette, DEFAULT_ACCENT};
pub use theme::{Pattern, Theme, ThemeColors, ThemeId};
