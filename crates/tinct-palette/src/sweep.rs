//! Angular sweep — the simplified hue rotation.
//!
//! Not an HSL/HSV rotation: the red and green channels follow the
//! magnitudes of cosine and sine across an even sweep of the circle,
//! and the blue channel carries the base's value untouched. Crude, but
//! its output is a compatibility surface — the formula stays exactly
//! as written, truncation and all.

use tinct_color::Color;

/// Generate `count` colors by sweeping around `base`.
///
/// Element 0 is always exactly `base`. Each subsequent element `i`
/// takes the angle `(360 / count) * i` degrees and becomes
/// `(trunc(|cos| * 255), trunc(|sin| * 255), base.b)`.
///
/// The returned palette always has length `count`: 0 yields an empty
/// vector, 1 yields just `[base]`.
#[must_use]
pub fn sweep(base: Color, count: usize) -> Vec<Color> {
    if count == 0 {
        return Vec::new();
    }

    let mut colors = Vec::with_capacity(count);
    colors.push(base);

    let step = 360.0 / count as f64;
    for i in 1..count {
        let rad = (step * i as f64).to_radians();
        let r = (rad.cos().abs() * 255.0) as i32;
        let g = (rad.sin().abs() * 255.0) as i32;
        colors.push(Color::new(r, g, i32::from(base.b)));
    }

    colors
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
