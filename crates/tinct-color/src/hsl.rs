//! HSL — cylindrical hue/saturation/lightness over the RGB core.
//!
//! Hue-based manipulation (harmonies, lighten/darken rounds, gradients
//! that don't mud out) wants a cylindrical space. Conversions use the
//! standard max/min algorithm on plain 0–1 channel values; there is no
//! gamma pipeline here.

use crate::rgb::Color;

/// An HSL color.
///
/// - `h` is hue in degrees, wrapped to [0, 360)
/// - `s` is saturation in [0, 1]
/// - `l` is lightness in [0, 1]
///
/// The invariants hold from construction on: [`Hsl::new`] wraps and
/// clamps, and every adjustment method routes back through it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    /// Create an HSL color; wraps hue into [0, 360) and clamps
    /// saturation and lightness into [0, 1].
    #[must_use]
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: wrap_degrees(h),
            s: clamp01(s),
            l: clamp01(l),
        }
    }

    /// Increase lightness by `amount` (negative darkens).
    #[inline]
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        Self::new(self.h, self.s, self.l + amount)
    }

    /// Decrease lightness by `amount`.
    #[inline]
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        Self::new(self.h, self.s, self.l - amount)
    }

    /// Increase saturation by `amount`.
    #[inline]
    #[must_use]
    pub fn saturate(self, amount: f32) -> Self {
        Self::new(self.h, self.s + amount, self.l)
    }

    /// Decrease saturation by `amount`.
    #[inline]
    #[must_use]
    pub fn desaturate(self, amount: f32) -> Self {
        Self::new(self.h, self.s - amount, self.l)
    }

    /// Rotate the hue by `degrees` (wraps around 360).
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f32) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    /// The complementary color (hue rotated 180 degrees).
    #[inline]
    #[must_use]
    pub fn complement(self) -> Self {
        self.shift_hue(180.0)
    }

    /// Replace lightness with an absolute value.
    #[inline]
    #[must_use]
    pub fn with_lightness(self, l: f32) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// Whether this color has no visible hue (saturation ~0).
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s < 1e-6
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        let r = f32::from(color.r) / 255.0;
        let g = f32::from(color.g) / 255.0;
        let b = f32::from(color.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        if delta < 1e-10 {
            return Self::new(0.0, 0.0, l);
        }

        let s = if l < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let h = if (max - r).abs() < 1e-10 {
            ((g - b) / delta + if g < b { 6.0 } else { 0.0 }) * 60.0
        } else if (max - g).abs() < 1e-10 {
            ((b - r) / delta + 2.0) * 60.0
        } else {
            ((r - g) / delta + 4.0) * 60.0
        };

        Self::new(h, s, l)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = hsl;

        if s < 1e-10 {
            let v = to_channel(l);
            return Self { r: v, g: v, b: v };
        }

        let c = (1.0 - 2.0f32.mul_add(l, -1.0).abs()) * s;
        let h_prime = h / 60.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());

        let (r1, g1, b1) = match h_prime as i32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let m = l - c / 2.0;
        Self {
            r: to_channel(r1 + m),
            g: to_channel(g1 + m),
            b: to_channel(b1 + m),
        }
    }
}

/// Wrap an angle in degrees into [0, 360).
#[must_use]
pub fn wrap_degrees(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Clamp a value into [0, 1]. NaN clamps to 0.
#[must_use]
pub fn clamp01(x: f32) -> f32 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else if x.is_nan() {
        0.0
    } else {
        x
    }
}

fn to_channel(v: f32) -> u8 {
    (clamp01(v) * 255.0).round() as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.01;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn wrap_degrees_covers_both_directions() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-10.0), 350.0);
        assert_eq!(wrap_degrees(-370.0), 350.0);
    }

    #[test]
    fn clamp01_bounds_and_nan() {
        assert_eq!(clamp01(0.5), 0.5);
        assert_eq!(clamp01(-0.1), 0.0);
        assert_eq!(clamp01(1.5), 1.0);
        assert_eq!(clamp01(f32::NAN), 0.0);
    }

    #[test]
    fn new_normalizes() {
        let c = Hsl::new(370.0, 1.5, -0.1);
        assert_eq!(c.h, 10.0);
        assert_eq!(c.s, 1.0);
        assert_eq!(c.l, 0.0);
    }

    #[test]
    fn primaries_to_hsl() {
        let red = Hsl::from(Color::new(255, 0, 0));
        assert!(approx_eq(red.h, 0.0), "red hue: {}", red.h);
        assert!(approx_eq(red.s, 1.0));
        assert!(approx_eq(red.l, 0.5));

        let green = Hsl::from(Color::new(0, 255, 0));
        assert!(approx_eq(green.h, 120.0), "green hue: {}", green.h);

        let blue = Hsl::from(Color::new(0, 0, 255));
        assert!(approx_eq(blue.h, 240.0), "blue hue: {}", blue.h);
    }

    #[test]
    fn grayscale_has_no_saturation() {
        for c in [Color::BLACK, Color::WHITE, Color::new(128, 128, 128)] {
            let hsl = Hsl::from(c);
            assert!(approx_eq(hsl.s, 0.0), "{c} saturation: {}", hsl.s);
            assert!(hsl.is_achromatic());
        }
    }

    #[test]
    fn primaries_from_hsl() {
        assert_eq!(Color::from(Hsl::new(0.0, 1.0, 0.5)), Color::new(255, 0, 0));
        assert_eq!(Color::from(Hsl::new(120.0, 1.0, 0.5)), Color::new(0, 255, 0));
        assert_eq!(Color::from(Hsl::new(240.0, 1.0, 0.5)), Color::new(0, 0, 255));
        assert_eq!(Color::from(Hsl::new(0.0, 0.0, 1.0)), Color::WHITE);
        assert_eq!(Color::from(Hsl::new(180.0, 0.0, 0.0)), Color::BLACK);
    }

    #[test]
    fn rgb_hsl_round_trip_is_close() {
        for color in [
            Color::new(255, 128, 0),
            Color::new(12, 200, 90),
            Color::new(77, 77, 200),
            Color::new(250, 3, 251),
        ] {
            let back = Color::from(Hsl::from(color));
            assert!(
                (i32::from(back.r) - i32::from(color.r)).abs() <= 1,
                "r drift: {back} vs {color}"
            );
            assert!(
                (i32::from(back.g) - i32::from(color.g)).abs() <= 1,
                "g drift: {back} vs {color}"
            );
            assert!(
                (i32::from(back.b) - i32::from(color.b)).abs() <= 1,
                "b drift: {back} vs {color}"
            );
        }
    }

    #[test]
    fn adjustments_stay_in_range() {
        let c = Hsl::new(200.0, 0.5, 0.5);
        assert_eq!(c.lighten(2.0).l, 1.0);
        assert_eq!(c.darken(2.0).l, 0.0);
        assert_eq!(c.saturate(2.0).s, 1.0);
        assert_eq!(c.desaturate(2.0).s, 0.0);
        assert_eq!(c.shift_hue(200.0).h, 40.0);
    }

    #[test]
    fn complement_rotates_half_turn() {
        let c = Hsl::new(30.0, 0.5, 0.5);
        assert_eq!(c.complement().h, 210.0);
        assert_eq!(c.complement().complement().h, 30.0);
    }
}
