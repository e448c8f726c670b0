// SPDX-License-Identifier: MIT
//
// CSS color validation and resolution.
//
// The engine in `color.rs` trusts its input. This module is the layer that
// does not: every user-supplied color goes through `parse_css_color` (or
// its string-returning wrapper `to_hex_color`) and either resolves to a
// concrete `Rgb` or fails with `ColorError::InvalidColorFormat`.
//
// Accepted notations:
//
//   #rgb  #rgba  #rrggbb  #rrggbbaa   (the `#` is optional, alpha dropped)
//   rgb(r, g, b)  rgba(r, g, b, a)    (channels clamp to 255)
//   hsl(h, s%, l%)  hsla(h, s%, l%, a)
//   the CSS basic named colors        (case-insensitive)

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::color::{Hsl, Rgb, wrap_hue};
use crate::error::ColorError;

// ─── Patterns ────────────────────────────────────────────────────────────────

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("color pattern is a valid regex")
}

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"^#([A-Fa-f0-9]{3}|[A-Fa-f0-9]{4}|[A-Fa-f0-9]{6}|[A-Fa-f0-9]{8})$")
});

static RGB_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^rgb\(\s*[0-9]+\s*,\s*[0-9]+\s*,\s*[0-9]+\s*\)$"));

static RGBA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"^rgba\(\s*[0-9]+\s*,\s*[0-9]+\s*,\s*[0-9]+\s*,\s*([0-9]?\.[0-9]+|[0-9]+)\s*\)$")
});

static HSL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^hsl\(\s*[0-9]+\s*,\s*[0-9]+%\s*,\s*[0-9]+%\s*\)$"));

static HSLA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"^hsla\(\s*[0-9]+\s*,\s*[0-9]+%\s*,\s*[0-9]+%\s*,\s*([0-9]?\.[0-9]+|[0-9]+)\s*\)$")
});

// Capturing forms used for resolution. These accept either function name
// with or without the alpha argument, like browsers do.
static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"^rgba?\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*(?:,\s*(?:[0-9]*\.[0-9]+|[0-9]+)\s*)?\)$",
    )
});

static HSL_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"^hsla?\(\s*([0-9]+)\s*,\s*([0-9]+)%\s*,\s*([0-9]+)%\s*(?:,\s*(?:[0-9]*\.[0-9]+|[0-9]+)\s*)?\)$",
    )
});

/// CSS basic named colors, plus the common aliases.
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0x00, 0x00, 0x00)),
    ("silver", Rgb::new(0xc0, 0xc0, 0xc0)),
    ("gray", Rgb::new(0x80, 0x80, 0x80)),
    ("grey", Rgb::new(0x80, 0x80, 0x80)),
    ("white", Rgb::new(0xff, 0xff, 0xff)),
    ("maroon", Rgb::new(0x80, 0x00, 0x00)),
    ("red", Rgb::new(0xff, 0x00, 0x00)),
    ("purple", Rgb::new(0x80, 0x00, 0x80)),
    ("fuchsia", Rgb::new(0xff, 0x00, 0xff)),
    ("magenta", Rgb::new(0xff, 0x00, 0xff)),
    ("green", Rgb::new(0x00, 0x80, 0x00)),
    ("lime", Rgb::new(0x00, 0xff, 0x00)),
    ("olive", Rgb::new(0x80, 0x80, 0x00)),
    ("yellow", Rgb::new(0xff, 0xff, 0x00)),
    ("navy", Rgb::new(0x00, 0x00, 0x80)),
    ("blue", Rgb::new(0x00, 0x00, 0xff)),
    ("teal", Rgb::new(0x00, 0x80, 0x80)),
    ("aqua", Rgb::new(0x00, 0xff, 0xff)),
    ("cyan", Rgb::new(0x00, 0xff, 0xff)),
    ("orange", Rgb::new(0xff, 0xa5, 0x00)),
];

// ─── Validation ──────────────────────────────────────────────────────────────

/// Whether `color` is written in one of the accepted functional or hex
/// notations.
///
/// This is a syntax check only: `#` is required for hex, named colors are
/// not accepted, and `rgb(999, 0, 0)` passes. Use [`parse_css_color`] to
/// actually resolve a color.
#[must_use]
pub fn is_valid_color(color: &str) -> bool {
    HEX_PATTERN.is_match(color)
        || RGB_PATTERN.is_match(color)
        || RGBA_PATTERN.is_match(color)
        || HSL_PATTERN.is_match(color)
        || HSLA_PATTERN.is_match(color)
}

// ─── Resolution ──────────────────────────────────────────────────────────────

/// Resolve any accepted color notation to an [`Rgb`].
///
/// Surrounding whitespace is ignored. Alpha is parsed but discarded.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] when the input matches none of
/// the accepted notations.
pub fn parse_css_color(input: &str) -> Result<Rgb, ColorError> {
    let color = input.trim();

    if let Some(rgb) = parse_hex_notation(color) {
        return Ok(rgb);
    }

    if let Some(caps) = RGB_FUNCTION.captures(color) {
        return Ok(Rgb::new(
            byte_channel(&caps[1]),
            byte_channel(&caps[2]),
            byte_channel(&caps[3]),
        ));
    }

    if let Some(caps) = HSL_FUNCTION.captures(color) {
        let number = |m: &str| m.parse::<u32>().map(f64::from).map_err(|_| ColorError::invalid(input));
        let h = wrap_hue(number(&caps[1])?);
        let s = number(&caps[2])?.min(100.0);
        let l = number(&caps[3])?.min(100.0);
        return Ok(Rgb::from_hsl(Hsl::new(h, s, l)));
    }

    let lower = color.to_ascii_lowercase();
    if let Some(&(_, rgb)) = NAMED_COLORS.iter().find(|(name, _)| *name == lower) {
        return Ok(rgb);
    }

    debug!(input, "unrecognized color notation");
    Err(ColorError::invalid(input))
}

/// Resolve any accepted color notation to lowercase `#rrggbb`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] when the input matches none of
/// the accepted notations.
pub fn to_hex_color(input: &str) -> Result<String, ColorError> {
    parse_css_color(input).map(Rgb::to_hex)
}

fn parse_hex_notation(color: &str) -> Option<Rgb> {
    let digits = color.strip_prefix('#').unwrap_or(color);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 | 6 => Rgb::from_hex(digits).ok(),
        4 => Rgb::from_hex(&digits[..3]).ok(),
        8 => Rgb::from_hex(&digits[..6]).ok(),
        _ => None,
    }
}

/// Decimal channel text to a byte, saturating at 255.
fn byte_channel(digits: &str) -> u8 {
    digits
        .parse::<u32>()
        .map_or(u8::MAX, |v| u8::try_from(v).unwrap_or(u8::MAX))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── is_valid_color ──────────────────────────────────────────────

    #[test]
    fn hex_lengths() {
        for ok in ["#fff", "#ffff", "#ffffff", "#ffffffff", "#AbC123"] {
            assert!(is_valid_color(ok), "rejected {ok}");
        }
        for bad in ["fff", "#ff", "#fffff", "#fffffffff", "#ggg"] {
            assert!(!is_valid_color(bad), "accepted {bad}");
        }
    }

    #[test]
    fn functional_notations() {
        assert!(is_valid_color("rgb(255, 0, 0)"));
        assert!(is_valid_color("rgb(255,0,0)"));
        assert!(is_valid_color("rgba(255, 0, 0, 0.5)"));
        assert!(is_valid_color("rgba(255, 0, 0, .5)"));
        assert!(is_valid_color("rgba(255, 0, 0, 1)"));
        assert!(is_valid_color("hsl(120, 100%, 50%)"));
        assert!(is_valid_color("hsla(120, 100%, 50%, 0.3)"));
    }

    #[test]
    fn malformed_functions() {
        assert!(!is_valid_color("rgb(255, 0)"));
        assert!(!is_valid_color("rgba(255, 0, 0)"));
        assert!(!is_valid_color("hsl(120, 100, 50)"));
        assert!(!is_valid_color("RGB(1, 2, 3)"));
    }

    #[test]
    fn names_are_not_valid_syntax() {
        assert!(!is_valid_color("red"));
    }

    // ── to_hex_color ────────────────────────────────────────────────

    #[test]
    fn hex_forms_resolve() {
        assert_eq!(to_hex_color("#abc").unwrap(), "#aabbcc");
        assert_eq!(to_hex_color("#abcd").unwrap(), "#aabbcc");
        assert_eq!(to_hex_color("#6366F1").unwrap(), "#6366f1");
        assert_eq!(to_hex_color("#11223344").unwrap(), "#112233");
        assert_eq!(to_hex_color("6366f1").unwrap(), "#6366f1");
    }

    #[test]
    fn rgb_functions_resolve() {
        assert_eq!(to_hex_color("rgb(255, 0, 0)").unwrap(), "#ff0000");
        assert_eq!(to_hex_color("rgba(0,128,255,0.5)").unwrap(), "#0080ff");
        assert_eq!(to_hex_color("rgb(300, 0, 0)").unwrap(), "#ff0000");
    }

    #[test]
    fn hsl_functions_resolve() {
        assert_eq!(to_hex_color("hsl(120, 100%, 50%)").unwrap(), "#00ff00");
        assert_eq!(to_hex_color("hsla(240,100%,50%,1)").unwrap(), "#0000ff");
        assert_eq!(to_hex_color("hsl(0, 0%, 50%)").unwrap(), "#808080");
        assert_eq!(to_hex_color("hsl(480, 100%, 50%)").unwrap(), "#00ff00");
    }

    #[test]
    fn named_colors_resolve() {
        assert_eq!(to_hex_color("red").unwrap(), "#ff0000");
        assert_eq!(to_hex_color("Orange").unwrap(), "#ffa500");
        assert_eq!(to_hex_color("  navy ").unwrap(), "#000080");
    }

    #[test]
    fn unknown_input_is_an_error() {
        for bad in ["", "nonsense", "rgb(1, 2)", "#12", "hsl(1, 2, 3)"] {
            assert_eq!(
                to_hex_color(bad),
                Err(ColorError::InvalidColorFormat(bad.to_owned())),
                "resolved {bad:?}"
            );
        }
    }

    #[test]
    fn error_message_names_the_input() {
        let err = to_hex_color("chartreuse-ish").unwrap_err();
        assert_eq!(err.to_string(), "invalid color format: \"chartreuse-ish\"");
    }
}
