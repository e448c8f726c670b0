//! Harmony engine: pure palette generation from one base color.
//!
//! Each harmony takes the base color's `(h, s, l)` and a requested count
//! and returns that many `#rrggbb` strings. The first color's hue is always
//! derived from the base hue. All hue arithmetic wraps modulo 360.
//!
//! Counts below 2 are not rejected here: the spread divides by
//! `count - 1`, so a single-color analogous or monochromatic palette is
//! computed from a NaN hue or lightness and means nothing.
//! [`ColorCount`](crate::scheme::ColorCount) keeps callers inside [2, 9].

use std::fmt;
use std::str::FromStr;

use hue_color::color::{Hsl, forward_hue_delta, hex_to_hsl, hsl_to_hex, shortest_hue_delta, wrap_hue};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::SchemeError;

/// Total hue window of an analogous palette, centered on the base hue.
pub const ANALOGOUS_SPREAD: f64 = 30.0;

/// Total lightness window of a monochromatic palette, centered on the base.
pub const MONOCHROMATIC_SPREAD: f64 = 60.0;

/// Offset of each split-complementary hue from the direct complement.
pub const SPLIT_OFFSET: f64 = 30.0;

/// The strategy used to pick related colors around the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyType {
    /// Neighbors within a 30° window.
    #[default]
    Analogous,
    /// One hue, lightness swept over 60 points.
    Monochromatic,
    /// 120° spacing (3 anchors, interpolated beyond 3 colors).
    Triadic,
    /// Base and its 180° opposite.
    Complementary,
    /// Base plus the complement ±30°.
    SplitComplementary,
}

impl HarmonyType {
    /// Generate `count` colors from `base`.
    #[must_use]
    pub fn generate(self, base: Hsl, count: usize) -> Vec<String> {
        trace!(harmony = self.name(), %base, count, "generating harmony");
        let Hsl { h, s, l } = base;
        match self {
            Self::Analogous => analogous(h, s, l, count),
            Self::Monochromatic => monochromatic(h, s, l, count),
            Self::Triadic => triadic(h, s, l, count),
            Self::Complementary => complementary(h, s, l, count),
            Self::SplitComplementary => split_complementary(h, s, l, count),
        }
    }

    /// Kebab-case identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Monochromatic => "monochromatic",
            Self::Triadic => "triadic",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
        }
    }

    /// Title used as the scheme name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Analogous => "Analogous",
            Self::Monochromatic => "Monochromatic",
            Self::Triadic => "Triadic",
            Self::Complementary => "Complementary",
            Self::SplitComplementary => "Split Complementary",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Analogous => {
                "Colors adjacent to each other on the color wheel. They usually match well and create serene designs."
            }
            Self::Monochromatic => {
                "Different shades and tints of a single color. Cohesive and easy on the eyes."
            }
            Self::Triadic => {
                "Three colors evenly spaced around the color wheel. High contrast while keeping harmony."
            }
            Self::Complementary => {
                "Colors opposite each other on the color wheel. Maximum contrast and stability."
            }
            Self::SplitComplementary => {
                "The base color plus the two colors adjacent to its complement. High contrast with less tension."
            }
        }
    }

    /// Parse from the identifier or the display name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|h| h.name() == lower || h.display_name().to_lowercase() == lower)
            .copied()
    }

    /// All harmony types, in menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Analogous,
            Self::Monochromatic,
            Self::Triadic,
            Self::Complementary,
            Self::SplitComplementary,
        ]
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyType {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SchemeError::UnknownHarmony(s.to_owned()))
    }
}

// ─── Algorithms ──────────────────────────────────────────────────────────────

/// Number of gaps between `count` evenly spaced stops.
#[inline]
fn span(count: usize) -> f64 {
    count as f64 - 1.0
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Wrap a hue that can overshoot by at most one turn in either direction.
#[inline]
fn wrap_once(mut hue: f64) -> f64 {
    if hue < 0.0 {
        hue += 360.0;
    }
    if hue >= 360.0 {
        hue -= 360.0;
    }
    hue
}

/// Hues evenly spaced across a 30° window, from −15° to +15° of the base.
#[must_use]
pub fn analogous(h: f64, s: f64, l: f64, count: usize) -> Vec<String> {
    let step = ANALOGOUS_SPREAD / span(count);
    (0..count)
        .map(|i| {
            let hue = wrap_hue(h + step * i as f64 - ANALOGOUS_SPREAD / 2.0);
            hsl_to_hex(hue, s, l)
        })
        .collect()
}

/// Fixed hue and saturation; lightness swept from `l − 30` to `l + 30`,
/// clamped to [0, 100].
#[must_use]
pub fn monochromatic(h: f64, s: f64, l: f64, count: usize) -> Vec<String> {
    let step = MONOCHROMATIC_SPREAD / span(count);
    (0..count)
        .map(|i| {
            let lightness = (l - MONOCHROMATIC_SPREAD / 2.0 + step * i as f64).clamp(0.0, 100.0);
            hsl_to_hex(h, s, lightness)
        })
        .collect()
}

/// Anchors at 0°, 120° and 240° from the base.
///
/// Beyond three colors the `count − 1` gaps are shared evenly across the
/// three anchor arcs and the in-between stops are interpolated in HSL,
/// taking the shortest way around the wheel. Interpolation starts from the
/// anchors as encoded, so each stop is derived from the hex the user sees.
/// Fewer than three colors falls back to [`analogous`].
#[must_use]
#[allow(clippy::float_cmp, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn triadic(h: f64, s: f64, l: f64, count: usize) -> Vec<String> {
    if count < 3 {
        return analogous(h, s, l, count);
    }

    let anchors = [
        hsl_to_hex(h, s, l),
        hsl_to_hex((h + 120.0) % 360.0, s, l),
        hsl_to_hex((h + 240.0) % 360.0, s, l),
    ];

    if count == 3 {
        return anchors.to_vec();
    }

    let per_arc = span(count) / 3.0;
    let last = count - 1;

    (0..count)
        .map(|i| {
            let pos = i as f64;
            let arc = ((pos / per_arc).floor() as usize).min(2);
            let next = (arc + 1).min(2);
            let progress = (pos % per_arc) / per_arc;

            if progress == 0.0 || i == last {
                return anchors[arc].clone();
            }

            let from = hex_to_hsl(&anchors[arc]);
            let to = hex_to_hsl(&anchors[next]);
            let hue = wrap_once(from.h + shortest_hue_delta(from.h, to.h) * progress);
            hsl_to_hex(hue, lerp(from.s, to.s, progress), lerp(from.l, to.l, progress))
        })
        .collect()
}

/// The base and its complement; beyond two colors the hue sweeps linearly
/// from the base to the complement (clockwise, 180°).
///
/// Fewer than two colors returns only the base.
#[must_use]
pub fn complementary(h: f64, s: f64, l: f64, count: usize) -> Vec<String> {
    if count < 2 {
        return vec![hsl_to_hex(h, s, l)];
    }

    let complement = (h + 180.0) % 360.0;

    if count == 2 {
        return vec![hsl_to_hex(h, s, l), hsl_to_hex(complement, s, l)];
    }

    (0..count)
        .map(|i| {
            let progress = i as f64 / span(count);
            let mut hue = h + progress * 180.0;
            if hue >= 360.0 {
                hue -= 360.0;
            }
            hsl_to_hex(hue, s, l)
        })
        .collect()
}

/// The base plus the two hues 30° either side of its complement.
///
/// Beyond three colors the first half of the sweep runs clockwise from the
/// base to the lower split hue, the second half from the lower split hue to
/// the upper one. Fewer than three colors falls back to [`complementary`].
#[must_use]
pub fn split_complementary(h: f64, s: f64, l: f64, count: usize) -> Vec<String> {
    if count < 3 {
        return complementary(h, s, l, count);
    }

    // Never emitted itself; both split hues hang off it.
    let complement = (h + 180.0) % 360.0;
    let split_low = (complement - SPLIT_OFFSET + 360.0) % 360.0;
    let split_high = (complement + SPLIT_OFFSET) % 360.0;

    if count == 3 {
        return vec![
            hsl_to_hex(h, s, l),
            hsl_to_hex(split_low, s, l),
            hsl_to_hex(split_high, s, l),
        ];
    }

    let step = 1.0 / span(count);

    (0..count)
        .map(|i| {
            let progress = i as f64 * step;
            let (from, delta, t) = if progress <= 0.5 {
                (h, forward_hue_delta(h, split_low), progress * 2.0)
            } else {
                (split_low, forward_hue_delta(split_low, split_high), (progress - 0.5) * 2.0)
            };
            let mut hue = from + t * delta;
            if hue >= 360.0 {
                hue -= 360.0;
            }
            hsl_to_hex(hue, s, l)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
