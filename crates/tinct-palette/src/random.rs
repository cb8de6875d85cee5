//! Random palette generation.
//!
//! Two strategies: independent uniform hue sampling, and a golden-angle
//! hue walk (step 360/φ² ≈ 137.5°) that spaces consecutive hues about
//! as far apart as the circle allows. Saturation and lightness always
//! sample from caller-supplied ranges, clamped into [0, 1].

use rand::Rng;
use std::ops::Range;

use tinct_color::contrast::contrast_ratio;
use tinct_color::hsl::clamp01;
use tinct_color::{Color, Hsl};

/// Hue step of the golden-angle walk (360 / φ²).
pub const GOLDEN_ANGLE: f32 = 137.507_76;

/// Sample a random HSL color with hue anywhere on the wheel and
/// saturation/lightness from the given ranges.
pub fn random_hsl<R: Rng + ?Sized>(
    rng: &mut R,
    s_range: Range<f32>,
    l_range: Range<f32>,
) -> Hsl {
    let hue = rng.random_range(0.0..360.0);
    let saturation = sample_range_clamped(rng, s_range);
    let lightness = sample_range_clamped(rng, l_range);
    Hsl::new(hue, saturation, lightness)
}

/// Generate `count` independently sampled colors.
#[must_use]
pub fn uniform_palette(count: usize, s_range: Range<f32>, l_range: Range<f32>) -> Vec<Color> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| Color::from(random_hsl(&mut rng, s_range.clone(), l_range.clone())))
        .collect()
}

/// A stateful hue walk stepping by the golden angle.
///
/// Consecutive hues land maximally far apart, so even short walks read
/// as varied. Hue progression is deterministic from the start hue;
/// only saturation and lightness draw from the RNG.
#[derive(Debug, Clone)]
pub struct GoldenWalk {
    hue: f32,
    s_range: Range<f32>,
    l_range: Range<f32>,
}

impl GoldenWalk {
    /// Start a walk at `start_hue` with the given sampling ranges.
    #[must_use]
    pub fn new(start_hue: f32, s_range: Range<f32>, l_range: Range<f32>) -> Self {
        Self {
            hue: start_hue % 360.0,
            s_range,
            l_range,
        }
    }

    /// The hue the next sample will use.
    #[must_use]
    pub const fn hue(&self) -> f32 {
        self.hue
    }

    /// Produce the next color and advance the walk.
    pub fn next_hsl<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Hsl {
        let color = Hsl::new(
            self.hue,
            sample_range_clamped(rng, self.s_range.clone()),
            sample_range_clamped(rng, self.l_range.clone()),
        );
        self.hue = (self.hue + GOLDEN_ANGLE) % 360.0;
        color
    }
}

/// Generate `count` colors along a golden-angle walk starting at hue 0.
#[must_use]
pub fn golden_palette(count: usize, s_range: Range<f32>, l_range: Range<f32>) -> Vec<Color> {
    let mut rng = rand::rng();
    let mut walk = GoldenWalk::new(0.0, s_range, l_range);
    (0..count)
        .map(|_| Color::from(walk.next_hsl(&mut rng)))
        .collect()
}

/// Sample random colors until one reaches `min_ratio` contrast against
/// `bg`, giving up after `max_attempts`.
///
/// A non-positive ratio is trivially satisfied by `bg` itself.
#[must_use]
pub fn sample_contrasting(bg: Color, min_ratio: f64, max_attempts: usize) -> Option<Color> {
    if min_ratio <= 0.0 {
        return Some(bg);
    }
    let mut rng = rand::rng();
    for _ in 0..max_attempts.max(1) {
        let candidate = Color::from(random_hsl(&mut rng, 0.2..0.9, 0.1..0.9));
        if contrast_ratio(bg, candidate) >= min_ratio {
            return Some(candidate);
        }
    }
    None
}

fn sample_range_clamped<R: Rng + ?Sized>(rng: &mut R, range: Range<f32>) -> f32 {
    if range.end <= range.start {
        return clamp01(range.start);
    }
    clamp01(rng.random_range(range.start..range.end))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
