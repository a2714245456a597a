#![forbid(unsafe_code)]

//! Pure mode-flip transition logic.
//!
//! Flipping dark mode is more than negating a flag: the console skin has to
//! be reconsidered. White and black shells are mode defaults and follow the
//! mode; indigo and pink shells are user customizations and must survive the
//! flip untouched. Keeping this a pure function of the previous theme makes
//! the policy testable without a controller.

use foldio_style::{ConsoleColor, Theme, ThemeColors};

/// Computes the theme that a dark-mode toggle transitions to.
///
/// The dark flag is flipped, then the console skin is resolved by looking up
/// the current base color in the variant table (colors outside the table
/// fall back to white):
///
/// - a light theme on the white shell moves to the black shell,
/// - a dark theme on the black shell moves to the white shell,
/// - any other shell is kept as the user chose it.
///
/// Colors are rederived for the new mode; id, pattern, and scanlines carry
/// over unchanged.
#[must_use]
pub fn toggled(previous: &Theme) -> Theme {
    let was_dark = previous.is_dark;
    let is_dark = !was_dark;

    let resolved = ConsoleColor::from_base(previous.colors.console).unwrap_or_else(|| {
        tracing::debug!(
            console.base = %previous.colors.console,
            "console base not in variant table, falling back to white"
        );
        ConsoleColor::White
    });
    let console = if resolved.is_mode_default(was_dark) {
        ConsoleColor::mode_default(is_dark)
    } else {
        resolved
    };

    Theme {
        is_dark,
        colors: ThemeColors::derive(previous.colors.accent, is_dark, console.variant()),
        ..*previous
    }
}
