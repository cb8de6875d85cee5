//! Harmony expansion — growing a handful of harmony seeds into a
//! palette of any size.
//!
//! The seed colors cycle round-robin; each full round past the first
//! applies a progressively larger lightness variation, alternating
//! darker and lighter so neighbors in the output stay distinct.

use tinct_color::contrast::contrast_ratio;
use tinct_color::{Color, Hsl};

use crate::harmony::Harmony;

const VARIATION_STEP: f32 = 0.08;

/// Generate a `count`-color palette from `base` using the requested
/// harmony.
///
/// When both `background` and `min_contrast` are given, colors failing
/// the WCAG ratio are dropped after generation, so the result may be
/// shorter than `count`.
#[must_use]
pub fn from_base(
    base: Color,
    harmony: Harmony,
    count: usize,
    background: Option<Color>,
    min_contrast: Option<f64>,
) -> Vec<Color> {
    let seeds = harmony.generate(Hsl::from(base));

    let mut generated: Vec<Color> = Vec::with_capacity(count);
    let mut round = 0;

    while generated.len() < count {
        for &seed in &seeds {
            if generated.len() == count {
                break;
            }
            generated.push(Color::from(vary(seed, round)));
        }
        round += 1;
    }

    filter_by_contrast(generated, background, min_contrast)
}

fn vary(color: Hsl, round: usize) -> Hsl {
    if round == 0 {
        return color;
    }
    let amount = VARIATION_STEP * round as f32;
    if round % 2 == 0 {
        color.lighten(amount)
    } else {
        color.darken(amount)
    }
}

fn filter_by_contrast(
    colors: Vec<Color>,
    background: Option<Color>,
    min_contrast: Option<f64>,
) -> Vec<Color> {
    match (background, min_contrast) {
        (Some(bg), Some(required)) if required > 0.0 => colors
            .into_iter()
            .filter(|&color| contrast_ratio(bg, color) >= required)
            .collect(),
        _ => colors,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
