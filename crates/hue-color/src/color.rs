// SPDX-License-Identifier: MIT
//
// hue-color engine: hex ↔ HSL with the classic `hue2rgb` formulation.
//
// This is the layer the harmony algorithms stand on, so its numeric
// behavior is fixed:
//
//   - `hex_to_hsl` parses leniently. Each channel is the longest hex-digit
//     prefix of its two-character slice; a slice with no digits becomes NaN.
//     NaN is carried through, never corrected.
//   - `hsl_to_hex` does not pre-normalize hue. `hue2rgb` wraps its argument
//     exactly once in each direction.
//   - Channels round half-up to [0, 255]. A NaN channel prints as `NaN`.
//
// Arithmetic is written unfused (`a * b + c`, not `mul_add`) so every result
// matches the two-step IEEE formulas bit for bit.
#![allow(clippy::suboptimal_flops)]

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

/// Decoded lightness above which dark text reads better than light text.
pub const CONTRAST_LIGHTNESS_THRESHOLD: f64 = 60.0;

/// Text color used on light backgrounds.
pub const BLACK_HEX: &str = "#000000";

/// Text color used on dark backgrounds.
pub const WHITE_HEX: &str = "#ffffff";

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in Hue-Saturation-Lightness form.
///
/// Hue is in degrees, saturation and lightness are percentages. Values
/// decoded from a valid hex string satisfy `h ∈ [0, 360)` and
/// `s, l ∈ [0, 100]`; values built by hand are not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue angle in degrees.
    pub h: f64,
    /// Saturation, 0 (gray) to 100 (fully saturated).
    pub s: f64,
    /// Lightness, 0 (black) to 100 (white).
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Decode a hex string without validation. See [`hex_to_hsl`].
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        hex_to_hsl(hex)
    }

    /// Encode as `#rrggbb`. See [`hsl_to_hex`].
    #[must_use]
    pub fn to_hex(self) -> String {
        hsl_to_hex(self.h, self.s, self.l)
    }

    /// Whether any component is NaN (the result of decoding malformed hex).
    #[must_use]
    pub const fn is_nan(self) -> bool {
        self.h.is_nan() || self.s.is_nan() || self.l.is_nan()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.1}, {:.1}%, {:.1}%)", self.h, self.s, self.l)
    }
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// A validated 8-bit sRGB color.
///
/// Unlike the raw engine functions, every `Rgb` is a real color: it can
/// only be built from channel bytes, a strictly parsed hex string, or the
/// CSS parser in [`crate::css`]. Serializes as a `#rrggbb` string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB` (the `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for any other length or a
    /// non-hex character.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();
        let parsed = match digits.len() {
            3 => expand_short(digits),
            6 => parse_long(digits),
            _ => None,
        };
        parsed.ok_or_else(|| ColorError::invalid(s))
    }

    /// Build from unit-range channels, rounding half-up and clamping.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert an HSL triple to the nearest 8-bit color.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
        Self::from_unit(r, g, b)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Black or white, whichever reads better on top of this color.
    #[must_use]
    pub fn contrast_color(self) -> Self {
        if self.to_hsl().l > CONTRAST_LIGHTNESS_THRESHOLD {
            Self::new(0, 0, 0)
        } else {
            Self::new(255, 255, 255)
        }
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({})", self.to_hex())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Engine ──────────────────────────────────────────────────────────────────

/// Decode a hex color into HSL without validating it.
///
/// Accepts six hex digits with an optional leading `#`. Malformed input is
/// not rejected: a channel slice with no leading hex digit becomes NaN,
/// which yields `h = 0` and NaN saturation and lightness. Use
/// [`Rgb::from_hex`] or [`crate::css::to_hex_color`] when input needs
/// checking.
///
/// ```
/// use hue_color::hex_to_hsl;
///
/// let red = hex_to_hsl("#ff0000");
/// assert_eq!((red.h, red.s, red.l), (0.0, 100.0, 50.0));
/// ```
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Hsl {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    let r = lenient_channel(hex, 0) / 255.0;
    let g = lenient_channel(hex, 2) / 255.0;
    let b = lenient_channel(hex, 4) / 255.0;
    rgb_to_hsl(r, g, b)
}

/// Encode an HSL triple as lowercase `#rrggbb`.
///
/// `h` is in degrees and is not normalized beyond dividing by 360; `s` and
/// `l` are percentages. Round-tripping a valid hex color through
/// [`hex_to_hsl`] and back reproduces it within one step per channel.
///
/// ```
/// use hue_color::hsl_to_hex;
///
/// assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
/// assert_eq!(hsl_to_hex(180.0, 100.0, 50.0), "#00ffff");
/// ```
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let (r, g, b) = hsl_to_rgb(h, s, l);
    format!("#{}{}{}", channel_hex(r), channel_hex(g), channel_hex(b))
}

/// `#000000` when the color's lightness is above 60, otherwise `#ffffff`.
#[must_use]
pub fn contrast_color(hex: &str) -> &'static str {
    if hex_to_hsl(hex).l > CONTRAST_LIGHTNESS_THRESHOLD {
        BLACK_HEX
    } else {
        WHITE_HEX
    }
}

/// Convert HSL (degrees, percent, percent) to unit-range sRGB channels.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    if s == 0.0 {
        return (l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    (
        hue2rgb(p, q, h + 1.0 / 3.0),
        hue2rgb(p, q, h),
        hue2rgb(p, q, h - 1.0 / 3.0),
    )
}

/// Piecewise HSL helper: one channel of the hue wheel at position `t`.
///
/// `t` is wrapped once into range, not reduced modulo 1.
#[inline]
#[must_use]
pub fn hue2rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Unit-range sRGB channels to HSL.
#[allow(clippy::float_cmp)]
fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    // NaN poisons max/min; hue is never assigned, the rest stays NaN.
    if r.is_nan() || g.is_nan() || b.is_nan() {
        return Hsl::new(0.0, f64::NAN, f64::NAN);
    }

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    let h = sector / 6.0;

    Hsl::new(h * 360.0, s * 100.0, l * 100.0)
}

// ─── Hue Arithmetic ──────────────────────────────────────────────────────────

/// Normalize a hue angle to [0, 360).
#[inline]
#[must_use]
pub fn wrap_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Signed shortest-arc delta from `from` to `to`, in [−180, 180).
///
/// Computed as `((to − from + 540) % 360) − 180`.
#[inline]
#[must_use]
pub fn shortest_hue_delta(from: f64, to: f64) -> f64 {
    (to - from + 540.0) % 360.0 - 180.0
}

/// Clockwise delta from `from` to `to`, in [0, 360).
///
/// Computed as `(to − from + 360) % 360`; both inputs are expected to be
/// in [0, 360).
#[inline]
#[must_use]
pub fn forward_hue_delta(from: f64, to: f64) -> f64 {
    (to - from + 360.0) % 360.0
}

// ─── Channel Encoding ────────────────────────────────────────────────────────

/// The longest hex-digit prefix of the two characters at `start`, or NaN.
fn lenient_channel(hex: &str, start: usize) -> f64 {
    let mut value: Option<u32> = None;
    for c in hex.chars().skip(start).take(2) {
        let Some(digit) = c.to_digit(16) else { break };
        value = Some(value.unwrap_or(0) * 16 + digit);
    }
    value.map_or(f64::NAN, f64::from)
}

/// Two lowercase hex digits for a unit-range channel, or `NaN`.
fn channel_hex(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_owned();
    }
    format!("{:02x}", to_u8(x))
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding half-up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

fn parse_long(digits: &[u8]) -> Option<Rgb> {
    Some(Rgb::new(
        parse_hex_byte(&digits[0..2])?,
        parse_hex_byte(&digits[2..4])?,
        parse_hex_byte(&digits[4..6])?,
    ))
}

fn expand_short(digits: &[u8]) -> Option<Rgb> {
    let r = parse_hex_digit(digits[0])?;
    let g = parse_hex_digit(digits[1])?;
    let b = parse_hex_digit(digits[2])?;
    Some(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
