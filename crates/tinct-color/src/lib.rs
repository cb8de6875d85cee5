// SPDX-License-Identifier: MIT
//
// tinct-color — core color types for tinct.
//
// An 8-bit RGB value type with clamped construction sits at the center;
// HSL rides on top of it for hue-based manipulation, and the contrast
// module speaks WCAG. Everything here is a pure, immediately-returning
// computation over value types — no I/O, no state.

// Single-char variable names (r, g, b, h, s, l) are the standard
// convention in color code.
#![allow(clippy::many_single_char_names)]
// Channel math casts float results back into 8-bit values; the
// saturating `as` cast is the clamp.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod blend;
pub mod contrast;
pub mod hsl;
pub mod rgb;

pub use hsl::Hsl;
pub use rgb::Color;
