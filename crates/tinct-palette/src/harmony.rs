//! Color harmonies — traditional hue-offset relationships in HSL.
//!
//! Each harmony rotates the base hue by fixed angles while keeping
//! saturation and lightness; the base color itself is always part of
//! the result (Analogous centers it between its neighbors).

use tinct_color::Hsl;
use tinct_color::hsl::clamp01;

/// Hue spread used when an analogous harmony is named without an angle.
pub const DEFAULT_ANALOGOUS_SPREAD: f32 = 30.0;

/// A classic color-theory harmony.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Harmony {
    /// Base + opposite (H+180°).
    Complementary,
    /// Base + the complement's neighbors (H+150°, H+210°).
    SplitComplementary,
    /// Neighbors at ±spread degrees, base in the middle.
    Analogous(f32),
    /// Three evenly spaced hues (H+0°, H+120°, H+240°).
    Triadic,
    /// Rectangle: H+0°, H+60°, H+180°, H+240°.
    Tetradic,
    /// Four evenly spaced hues (H+0°, H+90°, H+180°, H+270°).
    Square,
}

impl Harmony {
    /// Generate the harmony colors for `base`.
    #[must_use]
    pub fn generate(self, base: Hsl) -> Vec<Hsl> {
        let Hsl { h, s, l } = base;

        match self {
            Self::Complementary => vec![base, Hsl::new(h + 180.0, s, l)],
            Self::SplitComplementary => vec![
                base,
                Hsl::new(h + 150.0, s, l),
                Hsl::new(h + 210.0, s, l),
            ],
            Self::Analogous(spread) => vec![
                Hsl::new(h - spread, s, l),
                base,
                Hsl::new(h + spread, s, l),
            ],
            Self::Triadic => vec![
                base,
                Hsl::new(h + 120.0, s, l),
                Hsl::new(h + 240.0, s, l),
            ],
            Self::Tetradic => vec![
                base,
                Hsl::new(h + 60.0, s, l),
                Hsl::new(h + 180.0, s, l),
                Hsl::new(h + 240.0, s, l),
            ],
            Self::Square => vec![
                base,
                Hsl::new(h + 90.0, s, l),
                Hsl::new(h + 180.0, s, l),
                Hsl::new(h + 270.0, s, l),
            ],
        }
    }

    /// Human-readable name of this harmony.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::Analogous(_) => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Square => "square",
        }
    }

    /// Parse a harmony from its name (case-insensitive). Analogous gets
    /// the default spread.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|h| h.name() == lower).copied()
    }

    /// All harmonies, with defaults filled in.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Complementary,
            Self::SplitComplementary,
            Self::Analogous(DEFAULT_ANALOGOUS_SPREAD),
            Self::Triadic,
            Self::Tetradic,
            Self::Square,
        ]
    }
}

/// Rescale every color's saturation from [0, 1] into [`s_min`, `s_max`].
///
/// No-op when the range is empty or inverted.
pub fn normalize_saturation(colors: &mut [Hsl], s_min: f32, s_max: f32) {
    let s_min = clamp01(s_min);
    let s_max = clamp01(s_max);

    if s_max <= s_min {
        return;
    }

    for color in colors {
        *color = Hsl::new(color.h, (s_max - s_min).mul_add(color.s, s_min), color.l);
    }
}

/// Add a fixed lightness offset to every color (negative darkens).
pub fn shift_lightness(colors: &mut [Hsl], offset: f32) {
    for color in colors {
        *color = color.lighten(offset);
    }
}

/// Force every color to one lightness value.
pub fn set_lightness(colors: &mut [Hsl], lightness: f32) {
    for color in colors {
        *color = color.with_lightness(lightness);
    }
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
    fn complementary_opposes() {
        let palette = Harmony::Complementary.generate(Hsl::new(180.0, 0.5, 0.5));
        assert_eq!(palette.len(), 2);
        assert!(approx_eq(palette[0].h, 180.0));
        assert!(approx_eq(palette[1].h, 0.0));
    }

    #[test]
    fn complementary_wraps() {
        let palette = Harmony::Complementary.generate(Hsl::new(350.0, 0.5, 0.5));
        assert!(approx_eq(palette[1].h, 170.0));
    }

    #[test]
    fn split_complementary_angles() {
        let palette = Harmony::SplitComplementary.generate(Hsl::new(0.0, 0.5, 0.5));
        assert_eq!(palette.len(), 3);
        assert!(approx_eq(palette[1].h, 150.0));
        assert!(approx_eq(palette[2].h, 210.0));
    }

    #[test]
    fn analogous_centers_base() {
        let base = Hsl::new(180.0, 0.5, 0.5);
        let palette = Harmony::Analogous(30.0).generate(base);
        assert_eq!(palette.len(), 3);
        assert!(approx_eq(palette[0].h, 150.0));
        assert_eq!(palette[1], base);
        assert!(approx_eq(palette[2].h, 210.0));
    }

    #[test]
    fn triadic_thirds() {
        let palette = Harmony::Triadic.generate(Hsl::new(0.0, 0.5, 0.5));
        assert_eq!(palette.len(), 3);
        assert!(approx_eq(palette[1].h, 120.0));
        assert!(approx_eq(palette[2].h, 240.0));
    }

    #[test]
    fn tetradic_rectangle() {
        let palette = Harmony::Tetradic.generate(Hsl::new(0.0, 0.5, 0.5));
        let hues: Vec<f32> = palette.iter().map(|c| c.h).collect();
        assert_eq!(palette.len(), 4);
        assert!(approx_eq(hues[1], 60.0));
        assert!(approx_eq(hues[2], 180.0));
        assert!(approx_eq(hues[3], 240.0));
    }

    #[test]
    fn square_quarters() {
        let palette = Harmony::Square.generate(Hsl::new(0.0, 0.5, 0.5));
        let hues: Vec<f32> = palette.iter().map(|c| c.h).collect();
        assert!(approx_eq(hues[1], 90.0));
        assert!(approx_eq(hues[2], 180.0));
        assert!(approx_eq(hues[3], 270.0));
    }

    #[test]
    fn preserves_saturation_and_lightness() {
        for &harmony in Harmony::all() {
            for color in harmony.generate(Hsl::new(25.0, 0.62, 0.41)) {
                assert!(approx_eq(color.s, 0.62), "{harmony:?} changed s");
                assert!(approx_eq(color.l, 0.41), "{harmony:?} changed l");
            }
        }
    }

    #[test]
    fn names_round_trip() {
        for &harmony in Harmony::all() {
            assert_eq!(Harmony::from_name(harmony.name()), Some(harmony));
        }
        assert_eq!(Harmony::from_name("TRIADIC"), Some(Harmony::Triadic));
        assert_eq!(Harmony::from_name("nonexistent"), None);
    }

    #[test]
    fn normalize_saturation_rescales() {
        let mut palette = vec![
            Hsl::new(0.0, 0.0, 0.5),
            Hsl::new(120.0, 0.5, 0.5),
            Hsl::new(240.0, 1.0, 0.5),
        ];
        normalize_saturation(&mut palette, 0.4, 0.8);
        assert!(approx_eq(palette[0].s, 0.4));
        assert!(approx_eq(palette[1].s, 0.6));
        assert!(approx_eq(palette[2].s, 0.8));
    }

    #[test]
    fn normalize_saturation_inverted_range_is_noop() {
        let mut palette = vec![Hsl::new(0.0, 0.5, 0.5)];
        normalize_saturation(&mut palette, 0.8, 0.4);
        assert!(approx_eq(palette[0].s, 0.5));
    }

    #[test]
    fn shift_lightness_clamps() {
        let mut palette = vec![Hsl::new(0.0, 0.5, 0.3), Hsl::new(120.0, 0.5, 0.9)];
        shift_lightness(&mut palette, 0.2);
        assert!(approx_eq(palette[0].l, 0.5));
        assert!(approx_eq(palette[1].l, 1.0));
    }

    #[test]
    fn set_lightness_levels_everything() {
        let mut palette = vec![Hsl::new(0.0, 0.5, 0.3), Hsl::new(120.0, 0.5, 0.7)];
        set_lightness(&mut palette, 0.6);
        assert!(palette.iter().all(|c| approx_eq(c.l, 0.6)));
    }
}
