//! Mixing and gradients.
//!
//! RGB mixing is the simple, predictable kind (channel lerp); the HSL
//! gradient takes the short way around the hue wheel so a red→blue ramp
//! passes through purple instead of gray.

use crate::hsl::{Hsl, clamp01};
use crate::rgb::Color;

/// Mix two colors in RGB space. `t` = 0 returns `a`, `t` = 1 returns
/// `b`; values outside [0, 1] are clamped.
#[must_use]
pub fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = clamp01(t);
    Color {
        r: lerp_channel(a.r, b.r, t),
        g: lerp_channel(a.g, b.g, t),
        b: lerp_channel(a.b, b.b, t),
    }
}

/// Mix toward white. `t` = 1 is pure white.
#[inline]
#[must_use]
pub fn tint(color: Color, t: f32) -> Color {
    mix(color, Color::WHITE, t)
}

/// Mix toward black. `t` = 1 is pure black.
#[inline]
#[must_use]
pub fn shade(color: Color, t: f32) -> Color {
    mix(color, Color::BLACK, t)
}

/// Mix toward a gray of the given lightness (`gray` in [0, 1]).
#[must_use]
pub fn tone(color: Color, t: f32, gray: f32) -> Color {
    let v = (clamp01(gray) * 255.0).round() as u8;
    mix(color, Color { r: v, g: v, b: v }, t)
}

/// Sample `steps` colors along the RGB line from `a` to `b`, endpoints
/// included. `steps` of 0 yields nothing; 1 yields just `a`.
#[must_use]
pub fn gradient(a: Color, b: Color, steps: usize) -> Vec<Color> {
    match steps {
        0 => Vec::new(),
        1 => vec![a],
        _ => (0..steps)
            .map(|i| mix(a, b, i as f32 / (steps - 1) as f32))
            .collect(),
    }
}

/// Like [`gradient`], but interpolating through HSL with shortest-arc
/// hue so intermediate colors keep their vividness.
#[must_use]
pub fn gradient_hsl(a: Color, b: Color, steps: usize) -> Vec<Color> {
    let a = Hsl::from(a);
    let b = Hsl::from(b);
    match steps {
        0 => Vec::new(),
        1 => vec![Color::from(a)],
        _ => (0..steps)
            .map(|i| Color::from(lerp_hsl(a, b, i as f32 / (steps - 1) as f32)))
            .collect(),
    }
}

/// Interpolate two HSL colors, hue along the shorter arc.
///
/// Achromatic endpoints contribute no hue of their own; the other
/// endpoint's hue carries through so grays don't drag the wheel.
#[must_use]
pub fn lerp_hsl(a: Hsl, b: Hsl, t: f32) -> Hsl {
    let t = clamp01(t);

    let h = if a.is_achromatic() {
        b.h
    } else if b.is_achromatic() {
        a.h
    } else {
        let mut delta = b.h - a.h;
        if delta > 180.0 {
            delta -= 360.0;
        } else if delta < -180.0 {
            delta += 360.0;
        }
        delta.mul_add(t, a.h)
    };

    Hsl::new(
        h,
        (b.s - a.s).mul_add(t, a.s),
        (b.l - a.l).mul_add(t, a.l),
    )
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(b) - f32::from(a)).mul_add(t, f32::from(a)).round() as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
