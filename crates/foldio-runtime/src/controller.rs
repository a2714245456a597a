#![forbid(unsafe_code)]

//! The controller owning the live theme.
//!
//! Theme reads vastly outnumber writes: every frame resolves colors, while
//! writes only happen on settings clicks. A lock would make readers pay for
//! that rare writer, so the current [`Theme`] lives behind an
//! [`arc_swap::ArcSwap`] instead. Reads are wait-free and writes are single
//! atomic pointer swaps of an immutable value.
//!
//! There is no global controller. Construct one and hand it (or an `Arc` of
//! it) to whoever needs theme access.

use std::sync::Arc;

use arc_swap::ArcSwap;
use foldio_style::Theme;

use crate::transition;

/// Owns the current [`Theme`] and governs every legal change to it.
///
/// The held theme is only ever replaced wholesale. Callers build replacement
/// values with the `with_*` methods on [`Theme`] and hand them to
/// [`update_theme`](Self::update_theme); dark-mode flips go through
/// [`toggle_dark_mode`](Self::toggle_dark_mode), which also reworks the
/// console skin.
///
/// ```
/// use foldio_runtime::ThemeController;
/// use foldio_style::Pattern;
///
/// let controller = ThemeController::default();
/// assert!(controller.theme().is_dark);
///
/// let patterned = controller.theme().with_pattern(Pattern::Checkers);
/// controller.update_theme(patterned);
/// assert_eq!(controller.theme().pattern, Pattern::Checkers);
///
/// let toggled = controller.toggle_dark_mode();
/// assert!(!toggled.is_dark);
/// assert_eq!(controller.theme(), toggled);
/// ```
pub struct ThemeController {
    current: ArcSwap<Theme>,
}

impl ThemeController {
    /// Creates a controller holding `initial`.
    #[must_use]
    pub fn new(initial: Theme) -> Self {
        Self {
            current: ArcSwap::from_pointee(initial),
        }
    }

    /// Snapshot of the current theme.
    ///
    /// `Theme` is plain `Copy` data, so this is a wait-free load plus a copy.
    #[inline]
    #[must_use]
    pub fn theme(&self) -> Theme {
        **self.current.load()
    }

    /// Read without copying: returns a guard that derefs to the theme.
    ///
    /// Prefer this when resolving several colors in one place; drop the
    /// guard promptly so writers can recycle the old allocation.
    #[inline]
    pub fn theme_ref(&self) -> arc_swap::Guard<Arc<Theme>> {
        self.current.load()
    }

    /// Replaces the held theme wholesale.
    ///
    /// No validation happens here: the caller is responsible for supplying a
    /// coherent theme, normally built from the previous one via `with_*`.
    pub fn update_theme(&self, next: Theme) {
        tracing::debug!(
            theme.accent = %next.colors.accent,
            theme.pattern = next.pattern.name(),
            theme.dark = next.is_dark,
            "theme replaced"
        );
        self.current.store(Arc::new(next));
    }

    /// Flips dark mode, reworking the console skin and rederiving colors.
    ///
    /// Runs as a read-modify-write: racing toggles each build on the other's
    /// result rather than overwriting it. Returns the theme that was
    /// published.
    pub fn toggle_dark_mode(&self) -> Theme {
        let previous = self.current.rcu(|current| transition::toggled(current));
        let next = transition::toggled(&previous);
        tracing::info!(
            theme.dark = next.is_dark,
            theme.console = %next.colors.console,
            "dark mode toggled"
        );
        next
    }
}

impl Default for ThemeController {
    /// Starts from [`Theme::default`]: dark mode, default accent, black
    /// console skin.
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
