#![forbid(unsafe_code)]

//! Console accent variants and the base-color reverse index.
//!
//! The portfolio shell draws a retro handheld console around its content.
//! The console shell is skinned independently of the accent color: a small
//! closed set of named variants, each a `{base, edge}` pair of literals.
//!
//! Two variants are mode defaults ([`ConsoleColor::White`] for light,
//! [`ConsoleColor::Black`] for dark) and follow the mode when it toggles.
//! The rest are user customizations and survive mode flips untouched.
//! That policy lives in `foldio-runtime`; this module only provides the
//! variant table and the reverse lookup it needs.

use std::sync::OnceLock;

use ahash::AHashMap;

use crate::color::Rgb;

/// Named console skin identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConsoleColor {
    /// Warm off-white shell, the light-mode default.
    White,
    /// Warm near-black shell, the dark-mode default.
    Black,
    /// Indigo shell, a user customization.
    Indigo,
    /// Pink shell, a user customization.
    Pink,
}

/// The `{base, edge}` color pair of one console skin.
///
/// `base` fills the shell body, `edge` its bevel. Both are fixed literals
/// from the variant table, never derived from the accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsoleVariant {
    pub base: Rgb,
    pub edge: Rgb,
}

impl ConsoleColor {
    pub const ALL: [ConsoleColor; 4] = [
        ConsoleColor::White,
        ConsoleColor::Black,
        ConsoleColor::Indigo,
        ConsoleColor::Pink,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ConsoleColor::White => "white",
            ConsoleColor::Black => "black",
            ConsoleColor::Indigo => "indigo",
            ConsoleColor::Pink => "pink",
        }
    }

    /// The `{base, edge}` pair for this variant.
    pub const fn variant(self) -> ConsoleVariant {
        match self {
            ConsoleColor::White => ConsoleVariant {
                base: Rgb::new(0xf5, 0xf5, 0xf4),
                edge: Rgb::new(0xd6, 0xd3, 0xd1),
            },
            ConsoleColor::Black => ConsoleVariant {
                base: Rgb::new(0x29, 0x25, 0x24),
                edge: Rgb::new(0x1c, 0x19, 0x17),
            },
            ConsoleColor::Indigo => ConsoleVariant {
                base: Rgb::new(0x4f, 0x46, 0xe5),
                edge: Rgb::new(0x37, 0x30, 0xa3),
            },
            ConsoleColor::Pink => ConsoleVariant {
                base: Rgb::new(0xec, 0x48, 0x99),
                edge: Rgb::new(0xbe, 0x18, 0x5d),
            },
        }
    }

    /// Finds the variant whose base color equals `base`.
    ///
    /// Variants are identified by their base color alone; the edge color is
    /// carried along but never matched on. Returns `None` for colors outside
    /// the table so the caller decides the fallback.
    #[must_use]
    pub fn from_base(base: Rgb) -> Option<ConsoleColor> {
        base_index().get(&base).copied()
    }

    /// The variant a fresh theme starts with in the given mode.
    #[inline]
    #[must_use]
    pub const fn mode_default(is_dark: bool) -> ConsoleColor {
        if is_dark {
            ConsoleColor::Black
        } else {
            ConsoleColor::White
        }
    }

    /// Whether this variant is the mode default rather than a customization.
    #[inline]
    #[must_use]
    pub const fn is_mode_default(self, is_dark: bool) -> bool {
        matches!(
            (self, is_dark),
            (ConsoleColor::White, false) | (ConsoleColor::Black, true)
        )
    }
}

static BASE_INDEX: OnceLock<AHashMap<Rgb, ConsoleColor>> = OnceLock::new();

fn base_index() -> &'static AHashMap<Rgb, ConsoleColor> {
    BASE_INDEX.get_or_init(|| {
        ConsoleColor::ALL
            .iter()
            .map(|&color| (color.variant().base, color))
            .collect()
    })
}
