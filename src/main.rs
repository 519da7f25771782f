// SPDX-License-Identifier: MIT
//
// wcag-colors — find accessible link and text colors for a background.
//
// This is the demo binary that wires the two crates together:
//
//   wcag-color   → parsing, RGB/HSL conversion, luminance, contrast
//   wcag-palette → grid search, filtering, WCAG tiers, link/text queries
//
// Usage:
//
//   wcag-colors [BACKGROUND] [HUE]
//
//   BACKGROUND  any color form wcag-color parses (default #ffffff)
//   HUE         link hue in degrees, 0–359 (default 211)
//
// Flow:
//
//   background → text_colors → suggested body text
//   background + text + hue → LinkColorQuery → AAA / AA / A lists
//
// Set RUST_LOG=debug to watch the search.

use std::env;
use std::process;

use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use wcag_color::{ColorSample, Rgb};
use wcag_palette::{LinkColorQuery, LinkColors, Rating, assess_link, assess_text, text_colors};

const DEFAULT_BACKGROUND: &str = "#ffffff";
const DEFAULT_HUE: u16 = 211;

/// Swatches printed per tier.
const SWATCHES_PER_TIER: usize = 12;

// ─── Arguments ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
struct Args {
    background: ColorSample,
    hue: u16,
}

fn parse_args<I, S>(args: I) -> Result<Args, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    let background = args.next();
    let hue = args.next();
    if let Some(extra) = args.next() {
        return Err(format!("unexpected argument: {}", extra.as_ref()));
    }

    let background = background.as_ref().map_or(DEFAULT_BACKGROUND, |s| s.as_ref());
    let background =
        ColorSample::parse(background).map_err(|e| format!("invalid background {background:?}: {e}"))?;

    let hue = match hue {
        None => DEFAULT_HUE,
        Some(raw) => parse_hue(raw.as_ref())?,
    };

    Ok(Args { background, hue })
}

fn parse_hue(raw: &str) -> Result<u16, String> {
    match raw.trim().parse::<u16>() {
        Ok(hue) if hue < 360 => Ok(hue),
        _ => Err(format!("invalid hue {raw:?}: expected an integer from 0 to 359")),
    }
}

// ─── Output ─────────────────────────────────────────────────────────────────

/// A two-cell 24-bit background swatch followed by the hex.
fn swatch(hex: &str) -> String {
    let rgb = wcag_color::hex_to_rgb(hex).unwrap_or(Rgb::BLACK);
    format!("\x1b[48;2;{};{};{}m  \x1b[0m {hex}", rgb.r, rgb.g, rgb.b)
}

fn tier_lines(colors: &LinkColors) -> Vec<String> {
    let mut lines = Vec::new();
    for rating in Rating::ALL {
        let tier = colors.tier(rating);
        lines.push(format!("{rating:>3} ({}):", tier.len()));
        lines.extend(tier.iter().take(SWATCHES_PER_TIER).map(|hex| format!("    {}", swatch(hex))));
        if tier.len() > SWATCHES_PER_TIER {
            lines.push(format!("    … {} more", tier.len() - SWATCHES_PER_TIER));
        }
    }
    lines
}

/// Pick body text for `background`: the top `text_colors` hit, else plain
/// black or white, whichever contrasts more.
fn pick_text(background: &ColorSample) -> Result<ColorSample, String> {
    let suggested = text_colors(background).map_err(|e| e.to_string())?;
    if let Some(hex) = suggested.first() {
        return ColorSample::parse(hex).map_err(|e| e.to_string());
    }
    debug!(background = %background, "no text color met 4.5:1, falling back");
    let black = ColorSample::from(Rgb::BLACK);
    let white = ColorSample::from(Rgb::WHITE);
    if background.contrast_with(&black) >= background.contrast_with(&white) {
        Ok(black)
    } else {
        Ok(white)
    }
}

fn run(args: Args) -> Result<(), String> {
    let Args { background, hue } = args;
    let text = pick_text(&background)?;

    let mut query =
        LinkColorQuery::new(background.clone(), text.clone(), f64::from(hue)).map_err(|e| e.to_string())?;
    let colors = query.link_colors().map_err(|e| e.to_string())?;

    let text_rating = assess_text(&background, &text);
    println!("background  {}", swatch(background.hex()));
    println!(
        "text        {}  {:.2}:1 {}",
        swatch(text.hex()),
        text_rating.contrast,
        Rating::label(text_rating.rating)
    );

    match colors.best() {
        Some(best) => {
            let link = ColorSample::parse(best).map_err(|e| e.to_string())?;
            let a = assess_link(&background, &text, &link);
            println!(
                "link        {}  {:.2}:1 bg, {:.2}:1 text {}",
                swatch(best),
                a.background_contrast,
                a.text_contrast,
                Rating::label(a.rating)
            );
        }
        None => println!("link        none found for hue {hue}"),
    }

    println!();
    for line in tier_lines(&colors) {
        println!("{line}");
    }
    Ok(())
}

/// Filter from a `RUST_LOG`-style string; WARN when it names nothing.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

fn init_logging() {
    let directives = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(&directives))
        .init();
}

fn main() {
    init_logging();

    let args = parse_args(env::args().skip(1)).unwrap_or_else(|e| {
        eprintln!("wcag-colors: {e}");
        eprintln!("usage: wcag-colors [BACKGROUND] [HUE]");
        process::exit(1);
    });

    if let Err(e) = run(args) {
        eprintln!("wcag-colors: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, String> {
        parse_args(args.iter().copied())
    }

    #[test]
    fn defaults_without_arguments() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.background.hex(), "#ffffff");
        assert_eq!(args.hue, 211);
    }

    #[test]
    fn background_and_hue() {
        let args = parse(&["rgb(0, 0, 0)", "30"]).unwrap();
        assert_eq!(args.background.hex(), "#000000");
        assert_eq!(args.hue, 30);
    }

    #[test]
    fn hue_must_be_below_360() {
        assert!(parse(&["#fff", "359"]).is_ok());
        assert!(parse(&["#fff", "360"]).unwrap_err().contains("0 to 359"));
        assert!(parse(&["#fff", "-1"]).is_err());
        assert!(parse(&["#fff", "blue"]).is_err());
    }

    #[test]
    fn bad_background_is_reported() {
        let err = parse(&["#12"]).unwrap_err();
        assert!(err.contains("invalid background"), "{err}");
    }

    #[test]
    fn extra_arguments_are_rejected() {
        assert!(parse(&["#fff", "10", "x"]).is_err());
    }

    #[test]
    fn swatch_uses_truecolor_background() {
        assert_eq!(swatch("#0256b0"), "\x1b[48;2;2;86;176m  \x1b[0m #0256b0");
    }

    #[test]
    fn tier_lines_are_capped() {
        let many: Vec<String> = (0..20).map(|i| format!("#0000{i:02x}")).collect();
        let colors = LinkColors {
            aaa: many,
            aa: vec!["#112233".to_string()],
            a: Vec::new(),
        };
        let lines = tier_lines(&colors);
        assert_eq!(lines.len(), 1 + 12 + 1 + 1 + 1 + 1);
        assert_eq!(lines[0], "AAA (20):");
        assert_eq!(lines[13], "    … 8 more");
        assert_eq!(lines[14], " AA (1):");
        assert_eq!(lines[16], "  A (0):");
    }

    #[test]
    fn log_level_defaults_to_warn() {
        assert_eq!(log_filter("").max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn rust_log_can_raise_verbosity() {
        assert_eq!(log_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter("wcag_palette=trace").max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn text_on_white_is_black() {
        let text = pick_text(&ColorSample::from(Rgb::WHITE)).unwrap();
        assert_eq!(text.hex(), "#000000");
    }
}
