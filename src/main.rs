// SPDX-License-Identifier: MIT
//
// tinct — palette generation and color manipulation for the terminal.
//
// The binary wires the library crates together:
//
//   tinct-color   → color types, blending, WCAG contrast
//   tinct-palette → sweeps, harmonies, random generation
//
// Invoked bare (or as `tinct demo`), it runs a fixed demonstration:
// one base color, a five-color sweep, and each color's lightened
// variant. The subcommands expose the full library surface; output is
// hex lines, JSON, or truecolor swatches.
//
// Everything past argument parsing is total — bad hex and unknown
// harmony names die inside clap's own error path.

use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use serde::Serialize;

use tinct_color::Color;
use tinct_color::blend::{gradient, gradient_hsl};
use tinct_color::contrast::{self, contrast_ratio};
use tinct_color::rgb::DEFAULT_LIGHTEN_AMOUNT;
use tinct_palette::expand;
use tinct_palette::harmony::Harmony;
use tinct_palette::random;
use tinct_palette::sweep::sweep;

// ─── CLI surface ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "tinct")]
#[command(about = "Palette generation and color manipulation for the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demonstration palette
    Demo,

    /// Generate a palette by sweeping hues around a base color
    Sweep {
        /// Base color as a hex code (e.g. "#ff8000")
        #[arg(long, value_parser = parse_color)]
        base: Color,

        /// Number of colors to generate
        #[arg(long, default_value_t = 5)]
        count: usize,

        /// Lighten amount for each color's paired variant
        #[arg(long, default_value_t = DEFAULT_LIGHTEN_AMOUNT)]
        lighten: f64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate a palette from a base color using a color harmony
    Harmony {
        /// Base color as a hex code
        #[arg(long, value_parser = parse_color)]
        base: Color,

        /// Harmony to apply
        #[arg(long, value_parser = parse_harmony)]
        harmony: Harmony,

        /// Number of colors to generate
        #[arg(long, default_value_t = 5)]
        count: usize,

        /// Background color for contrast filtering
        #[arg(long, value_parser = parse_color, requires = "min_contrast")]
        background: Option<Color>,

        /// Minimum WCAG contrast ratio against the background
        #[arg(long, requires = "background")]
        min_contrast: Option<f64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate random color palettes
    Random {
        /// Number of colors to generate
        #[arg(long, default_value_t = 5)]
        count: usize,

        /// Generation method
        #[arg(long, value_enum, default_value_t = Method::Golden)]
        method: Method,

        /// Bias lightness toward a light or dark theme
        #[arg(long, value_enum)]
        theme: Option<ThemeBias>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Interpolate a gradient between two colors
    Gradient {
        /// Start color as a hex code
        #[arg(long, value_parser = parse_color)]
        from: Color,

        /// End color as a hex code
        #[arg(long, value_parser = parse_color)]
        to: Color,

        /// Number of steps, endpoints included
        #[arg(long, default_value_t = 8)]
        steps: usize,

        /// Interpolation space
        #[arg(long, value_enum, default_value_t = Space::Hsl)]
        space: Space,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check the WCAG contrast ratio between two colors
    Contrast {
        /// Foreground color as a hex code
        #[arg(value_parser = parse_color)]
        fg: Color,

        /// Background color as a hex code
        #[arg(value_parser = parse_color)]
        bg: Color,
    },

    /// Display colors as swatches in the terminal
    Show {
        /// Color values as hex codes (comma-separated)
        #[arg(long)]
        colors: String,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Hex)]
    format: Format,

    /// Render as terminal swatches instead of text
    #[arg(long)]
    show: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Hex,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum Method {
    /// Golden-angle hue walk
    Golden,
    /// Independent uniform sampling
    Uniform,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeBias {
    Light,
    Dark,
}

#[derive(Clone, Copy, ValueEnum)]
enum Space {
    Rgb,
    Hsl,
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_hex(s).ok_or_else(|| format!("invalid hex color '{s}' (expected #rrggbb)"))
}

fn parse_harmony(s: &str) -> Result<Harmony, String> {
    Harmony::from_name(s).ok_or_else(|| {
        let names: Vec<&str> = Harmony::all().iter().map(|h| h.name()).collect();
        format!("unknown harmony '{s}' (expected one of: {})", names.join(", "))
    })
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => run_demo(),
        Commands::Sweep { base, count, lighten, output } => {
            run_sweep(base, count, lighten, &output);
        }
        Commands::Harmony { base, harmony, count, background, min_contrast, output } => {
            let palette = expand::from_base(base, harmony, count, background, min_contrast);
            print_palette(&palette, &output);
        }
        Commands::Random { count, method, theme, output } => {
            print_palette(&run_random(count, method, theme), &output);
        }
        Commands::Gradient { from, to, steps, space, output } => {
            let palette = match space {
                Space::Rgb => gradient(from, to, steps),
                Space::Hsl => gradient_hsl(from, to, steps),
            };
            print_palette(&palette, &output);
        }
        Commands::Contrast { fg, bg } => run_contrast(fg, bg),
        Commands::Show { colors } => run_show(&colors),
    }
}

// ─── Demo driver ────────────────────────────────────────────────────────────

/// The fixed demonstration: base `#ff8000`, a five-color sweep, each
/// color paired with its 0.2-lightened variant. Exactly six lines.
fn demo_lines() -> Vec<String> {
    let base = Color::new(255, 128, 0);

    let mut lines = vec![format!("Base color: {}", base.to_hex())];
    for (i, color) in sweep(base, 5).iter().enumerate() {
        let lightened = color.lighten(0.2);
        lines.push(format!("{i}: {} -> {}", color.to_hex(), lightened.to_hex()));
    }
    lines
}

fn run_demo() {
    for line in demo_lines() {
        println!("{line}");
    }
}

// ─── Subcommand handlers ────────────────────────────────────────────────────

#[derive(Serialize)]
struct SweepReport {
    base: String,
    lighten: f64,
    colors: Vec<SweepEntry>,
}

#[derive(Serialize)]
struct SweepEntry {
    color: String,
    lightened: String,
}

fn run_sweep(base: Color, count: usize, lighten: f64, output: &OutputArgs) {
    let palette = sweep(base, count);

    if output.show {
        display_swatches(&palette);
        return;
    }

    match output.format {
        Format::Hex => {
            for (i, color) in palette.iter().enumerate() {
                println!("{i}: {} -> {}", color.to_hex(), color.lighten(lighten).to_hex());
            }
        }
        Format::Json => {
            let report = SweepReport {
                base: base.to_hex(),
                lighten,
                colors: palette
                    .iter()
                    .map(|c| SweepEntry {
                        color: c.to_hex(),
                        lightened: c.lighten(lighten).to_hex(),
                    })
                    .collect(),
            };
            print_json(&report);
        }
    }
}

fn run_random(count: usize, method: Method, theme: Option<ThemeBias>) -> Vec<Color> {
    let l_range = match theme {
        Some(ThemeBias::Light) => 0.6..0.85,
        Some(ThemeBias::Dark) => 0.15..0.4,
        None => 0.35..0.7,
    };
    let s_range = 0.4..0.9;

    match method {
        Method::Golden => random::golden_palette(count, s_range, l_range),
        Method::Uniform => random::uniform_palette(count, s_range, l_range),
    }
}

fn run_contrast(fg: Color, bg: Color) {
    let ratio = contrast_ratio(fg, bg);
    println!("Contrast ratio: {ratio:.2}");
    println!("AA normal text:  {}", verdict(contrast::meets_aa_normal(ratio)));
    println!("AA large text:   {}", verdict(contrast::meets_aa_large(ratio)));
    println!("AAA normal text: {}", verdict(contrast::meets_aaa_normal(ratio)));
    println!("AAA large text:  {}", verdict(contrast::meets_aaa_large(ratio)));
}

const fn verdict(ok: bool) -> &'static str {
    if ok { "pass" } else { "fail" }
}

fn run_show(colors: &str) {
    match parse_color_list(colors) {
        Ok(parsed) => display_swatches(&parsed),
        Err(e) => {
            eprintln!("tinct: {e}");
            process::exit(1);
        }
    }
}

fn parse_color_list(input: &str) -> Result<Vec<Color>, String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_color)
        .collect()
}

// ─── Output ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct PaletteReport {
    colors: Vec<String>,
}

fn print_palette(colors: &[Color], output: &OutputArgs) {
    if output.show {
        display_swatches(colors);
        return;
    }

    match output.format {
        Format::Hex => {
            for color in colors {
                println!("{}", color.to_hex());
            }
        }
        Format::Json => print_json(&PaletteReport {
            colors: colors.iter().map(|c| c.to_hex()).collect(),
        }),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("tinct: {e}");
            process::exit(1);
        }
    }
}

/// One swatch line per color: block glyphs on the color itself, hex
/// label in black or white depending on the color's brightness.
fn display_swatches(colors: &[Color]) {
    for color in colors {
        let (fg_r, fg_g, fg_b) = if is_light(*color) { (0, 0, 0) } else { (255, 255, 255) };

        let line = format!("████████████  {}", color.to_hex());
        println!(
            "{}",
            line.on_truecolor(color.r, color.g, color.b)
                .truecolor(fg_r, fg_g, fg_b)
        );
    }
}

/// Quick brightness heuristic for picking a readable label color.
fn is_light(color: Color) -> bool {
    let luminance = 0.299f32.mul_add(
        f32::from(color.r),
        0.587f32.mul_add(f32::from(color.g), 0.114 * f32::from(color.b)),
    );
    luminance > 127.5
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn demo_output_is_byte_exact() {
        assert_eq!(
            demo_lines(),
            [
                "Base color: #ff8000",
                "0: #ff8000 -> #ff9933",
                "1: #4ef200 -> #71f433",
                "2: #ce9500 -> #d7aa33",
                "3: #ce9500 -> #d7aa33",
                "4: #4ef200 -> #71f433",
            ]
        );
    }

    #[test]
    fn demo_first_line() {
        assert_eq!(demo_lines()[0], "Base color: #ff8000");
    }

    #[test]
    fn parse_color_accepts_hex() {
        assert_eq!(parse_color("#ff8000"), Ok(Color::new(255, 128, 0)));
        assert_eq!(parse_color("0080ff"), Ok(Color::new(0, 128, 255)));
        assert!(parse_color("not-a-color").is_err());
        assert!(parse_color("#fff").is_err());
    }

    #[test]
    fn parse_color_list_splits_and_trims() {
        let colors = parse_color_list("#ff0000, #00ff00 ,#0000ff").unwrap();
        assert_eq!(
            colors,
            vec![
                Color::new(255, 0, 0),
                Color::new(0, 255, 0),
                Color::new(0, 0, 255),
            ]
        );
        assert!(parse_color_list("#ff0000,banana").is_err());
    }

    #[test]
    fn parse_harmony_names() {
        assert_eq!(parse_harmony("triadic"), Ok(Harmony::Triadic));
        assert_eq!(
            parse_harmony("analogous"),
            Ok(Harmony::Analogous(
                tinct_palette::harmony::DEFAULT_ANALOGOUS_SPREAD
            ))
        );
        assert!(parse_harmony("sacred-spiral").is_err());
    }

    #[test]
    fn bare_invocation_means_demo() {
        let cli = Cli::try_parse_from(["tinct"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn sweep_invocation_parses() {
        let cli = Cli::try_parse_from([
            "tinct", "sweep", "--base", "#ff8000", "--count", "7",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Sweep { base, count, lighten, .. }) => {
                assert_eq!(base, Color::new(255, 128, 0));
                assert_eq!(count, 7);
                assert!((lighten - DEFAULT_LIGHTEN_AMOUNT).abs() < f64::EPSILON);
            }
            _ => panic!("parsed into the wrong subcommand"),
        }
    }

    #[test]
    fn contrast_invocation_parses() {
        let cli = Cli::try_parse_from(["tinct", "contrast", "#000000", "#ffffff"]).unwrap();
        match cli.command {
            Some(Commands::Contrast { fg, bg }) => {
                assert_eq!(fg, Color::BLACK);
                assert_eq!(bg, Color::WHITE);
            }
            _ => panic!("parsed into the wrong subcommand"),
        }
    }

    #[test]
    fn harmony_requires_background_with_min_contrast() {
        let result = Cli::try_parse_from([
            "tinct", "harmony", "--base", "#ff8000", "--harmony", "triadic",
            "--min-contrast", "4.5",
        ]);
        assert!(result.is_err(), "--min-contrast without --background should fail");
    }

    #[test]
    fn is_light_heuristic() {
        assert!(is_light(Color::WHITE));
        assert!(!is_light(Color::BLACK));
        assert!(is_light(Color::new(255, 255, 0)), "yellow reads light");
        assert!(!is_light(Color::new(0, 0, 255)), "pure blue reads dark");
    }
}
