//! WCAG contrast — relative luminance, ratios, and lightness adjustment.
//!
//! Ratio math follows WCAG 2.1: channels are linearized with the sRGB
//! transfer function, weighted 0.2126/0.7152/0.0722, and two luminances
//! compare as `(lighter + 0.05) / (darker + 0.05)`. Measurement happens
//! in sRGB luminance space (that's the WCAG definition), while
//! [`ensure_contrast`] adjusts in HSL lightness, where steps behave
//! predictably.

use crate::hsl::Hsl;
use crate::rgb::Color;

/// WCAG AA minimum contrast ratio for normal text.
pub const AA_NORMAL: f64 = 4.5;

/// WCAG AA minimum contrast ratio for large text (18pt+, or 14pt+ bold).
pub const AA_LARGE: f64 = 3.0;

/// WCAG AAA minimum contrast ratio for normal text.
pub const AAA_NORMAL: f64 = 7.0;

/// WCAG AAA minimum contrast ratio for large text.
pub const AAA_LARGE: f64 = 4.5;

/// Relative luminance of a color per WCAG 2.1, in [0, 1].
///
/// 0 is black, 1 is white. Channels are gamma-decoded before the
/// weighted sum, as the specification requires.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let r = srgb_to_linear(f64::from(color.r) / 255.0);
    let g = srgb_to_linear(f64::from(color.g) / 255.0);
    let b = srgb_to_linear(f64::from(color.b) / 255.0);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// WCAG 2.1 contrast ratio between two colors, in [1, 21].
///
/// Symmetric in its arguments; the lighter color always goes on top.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Whether a ratio meets WCAG AA for normal text (4.5:1).
#[inline]
#[must_use]
pub fn meets_aa_normal(ratio: f64) -> bool {
    ratio >= AA_NORMAL
}

/// Whether a ratio meets WCAG AA for large text (3:1).
#[inline]
#[must_use]
pub fn meets_aa_large(ratio: f64) -> bool {
    ratio >= AA_LARGE
}

/// Whether a ratio meets WCAG AAA for normal text (7:1).
#[inline]
#[must_use]
pub fn meets_aaa_normal(ratio: f64) -> bool {
    ratio >= AAA_NORMAL
}

/// Whether a ratio meets WCAG AAA for large text (4.5:1).
#[inline]
#[must_use]
pub fn meets_aaa_large(ratio: f64) -> bool {
    ratio >= AAA_LARGE
}

/// Adjust a foreground's HSL lightness until it meets `min_ratio`
/// against `bg`.
///
/// Direction follows theme polarity: on dark backgrounds (`is_dark`)
/// the foreground lightens, on light backgrounds it darkens. Binary
/// search keeps the result as close to the original lightness as the
/// ratio allows; hue and saturation are preserved. If no lightness can
/// reach the ratio, the input comes back unchanged.
#[must_use]
pub fn ensure_contrast(fg: Color, bg: Color, min_ratio: f64, is_dark: bool) -> Color {
    if contrast_ratio(fg, bg) >= min_ratio {
        return fg;
    }

    let fg_hsl = Hsl::from(fg);
    let (mut lo, mut hi) = if is_dark { (fg_hsl.l, 1.0) } else { (0.0, fg_hsl.l) };

    let mut best = fg;
    for _ in 0..32 {
        let mid = (lo + hi) * 0.5;
        let candidate = Color::from(Hsl::new(fg_hsl.h, fg_hsl.s, mid));
        if contrast_ratio(candidate, bg) >= min_ratio {
            best = candidate;
            // Passing: back off toward the original lightness.
            if is_dark {
                hi = mid;
            } else {
                lo = mid;
            }
        } else if is_dark {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    best
}

/// sRGB transfer function, decoding a gamma-encoded channel to linear
/// light.
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
