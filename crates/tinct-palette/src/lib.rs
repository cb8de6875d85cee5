//! # tinct-palette — palette generation
//!
//! Turns one base color into many, four different ways:
//!
//! ```text
//! sweep.rs:    angular red/green sweep around the base (fixed formula)
//! harmony.rs:  classic hue-offset harmonies in HSL
//! expand.rs:   harmony seeds grown to N colors via lighten/darken rounds
//! random.rs:   rand-driven sampling — uniform hues or a golden-angle walk
//! ```
//!
//! Everything returns plain `Vec<Color>` / `Vec<Hsl>` values; filtering
//! and display belong to callers.

// Loop indices become float angles throughout.
#![allow(clippy::cast_precision_loss)]
// Trig results are truncated into 8-bit channels on purpose.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod expand;
pub mod harmony;
pub mod random;
pub mod sweep;

pub use harmony::Harmony;
pub use sweep::sweep;
