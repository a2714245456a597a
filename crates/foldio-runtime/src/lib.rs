#![forbid(unsafe_code)]

//! Runtime theme state for foldio.
//!
//! # Role in foldio
//! `foldio-style` computes palettes; this crate owns the one that is live.
//! [`ThemeController`] holds the current [`Theme`](foldio_style::Theme) behind
//! an atomically swapped pointer, so views read a consistent snapshot every
//! frame while settings actions replace it wholesale.
//!
//! # This crate provides
//! - [`ThemeController`] with the three theme operations: read, replace,
//!   toggle dark mode.
//! - [`toggled`], the pure mode-flip computation, including the console-skin
//!   follow/preserve policy.
//!
//! # Concurrency
//! Theme state is read-dominated: every frame reads it, only settings clicks
//! write it. Reads are wait-free (`arc-swap` load), writes allocate one `Arc`
//! and swap. The toggle is a read-modify-write and goes through `rcu`, so two
//! racing toggles each observe a consistent predecessor instead of losing an
//! update. Readers never see a half-built theme because a theme is never
//! mutated in place.

/// The controller owning the live theme.
pub mod controller;
/// Pure mode-flip transition logic.
pub mod transition;

pub use controller::ThemeController;
pub use transition::toggled;
