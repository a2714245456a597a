#![forbid(unsafe_code)]

//! Localized strings for the foldio portfolio shell.
//!
//! Provides externalized string storage with key-based lookup, an
//! English-fallback chain, and variable interpolation for the two
//! languages the portfolio ships in.
//!
//! # Role in foldio
//! `foldio-i18n` isolates localization concerns so views stay deterministic
//! while the shell switches between English and Japanese at runtime.
//!
//! # How it fits in the system
//! Views resolve keys into localized text before rendering. The crate
//! depends on nothing else, keeping the localization layer reusable and
//! testable on its own.

pub mod catalog;

pub use catalog::{Catalog, Coverage, Lang, LangStrings, interpolate};
