//! Color schemes and the state that keeps one in sync with its inputs.
//!
//! A [`ColorScheme`] is a value: a name and an ordered list of hex colors.
//! [`SchemeState`] owns the inputs `(base color, harmony, count)` and
//! recomputes the scheme synchronously whenever one of them changes. There
//! is no incremental update; the old scheme is dropped and replaced.

use hue_color::{Rgb, contrast_color, css::parse_css_color, hex_to_hsl};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SchemeError;
use crate::harmony::HarmonyType;

/// Base color used when nothing else is chosen (indigo).
pub const DEFAULT_BASE_COLOR: Rgb = Rgb::new(0x63, 0x66, 0xf1);

// ---------------------------------------------------------------------------
// ColorCount
// ---------------------------------------------------------------------------

/// How many colors a scheme holds: an integer in [2, 9].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ColorCount(u8);

impl ColorCount {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 9;
    pub const DEFAULT: Self = Self(5);

    /// # Errors
    ///
    /// Returns [`SchemeError::CountOutOfRange`] outside [2, 9].
    pub fn new(count: usize) -> Result<Self, SchemeError> {
        u8::try_from(count)
            .ok()
            .filter(|n| (Self::MIN..=Self::MAX).contains(n))
            .map(Self)
            .ok_or(SchemeError::CountOutOfRange { count })
    }

    /// Saturate into [2, 9] instead of failing.
    #[must_use]
    pub fn clamped(count: usize) -> Self {
        let max = usize::from(Self::MAX);
        let min = usize::from(Self::MIN);
        // Fits: the value is at most MAX after clamping.
        Self(u8::try_from(count.clamp(min, max)).unwrap_or(Self::MAX))
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for ColorCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for ColorCount {
    type Error = SchemeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(usize::from(value))
    }
}

impl From<ColorCount> for u8 {
    fn from(count: ColorCount) -> Self {
        count.0
    }
}

// ---------------------------------------------------------------------------
// ColorScheme
// ---------------------------------------------------------------------------

/// A named, ordered palette. Index order is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Display name of the harmony that produced the colors.
    pub name: String,
    /// Lowercase `#rrggbb` strings.
    pub colors: Vec<String>,
}

impl ColorScheme {
    /// Generate a scheme from a hex base color.
    ///
    /// The base goes through the unvalidated decoder, so malformed hex
    /// produces NaN-derived colors. [`SchemeState`] validates first.
    #[must_use]
    pub fn generate(base_hex: &str, harmony: HarmonyType, count: ColorCount) -> Self {
        Self {
            name: harmony.display_name().to_owned(),
            colors: harmony.generate(hex_to_hsl(base_hex), count.get()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Each color paired with the text color that reads on top of it.
    #[must_use]
    pub fn with_contrast(&self) -> Vec<(&str, &'static str)> {
        self.colors
            .iter()
            .map(|c| (c.as_str(), contrast_color(c)))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// SchemeState
// ---------------------------------------------------------------------------

/// The inputs of a palette and the palette derived from them.
///
/// Every setter that changes an input recomputes the scheme before
/// returning. Setting an input to its current value is a no-op.
#[derive(Debug, Clone)]
pub struct SchemeState {
    base_color: Rgb,
    harmony: HarmonyType,
    count: ColorCount,
    scheme: ColorScheme,
    revision: u64,
}

impl SchemeState {
    #[must_use]
    pub fn new(base_color: Rgb, harmony: HarmonyType, count: ColorCount) -> Self {
        let mut state = Self {
            base_color,
            harmony,
            count,
            scheme: ColorScheme { name: String::new(), colors: Vec::new() },
            revision: 0,
        };
        state.recompute();
        state
    }

    /// Build from user input, validating the base color.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::Color`] when `base` is not a recognized color.
    pub fn from_input(base: &str, harmony: HarmonyType, count: ColorCount) -> Result<Self, SchemeError> {
        let base_color = parse_base(base)?;
        Ok(Self::new(base_color, harmony, count))
    }

    #[must_use]
    pub const fn base_color(&self) -> Rgb {
        self.base_color
    }

    #[must_use]
    pub const fn harmony(&self) -> HarmonyType {
        self.harmony
    }

    #[must_use]
    pub const fn count(&self) -> ColorCount {
        self.count
    }

    /// The scheme for the current inputs.
    #[must_use]
    pub const fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    /// Number of times the scheme has been computed. Starts at 1.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn into_scheme(self) -> ColorScheme {
        self.scheme
    }

    /// Each current color paired with its contrast text color.
    #[must_use]
    pub fn contrast_colors(&self) -> Vec<(&str, &'static str)> {
        self.scheme.with_contrast()
    }

    /// Set the base color from any accepted CSS notation.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::Color`] and leaves the state untouched when
    /// `input` is not a recognized color.
    pub fn set_base_color(&mut self, input: &str) -> Result<(), SchemeError> {
        let rgb = parse_base(input)?;
        self.set_base_rgb(rgb);
        Ok(())
    }

    pub fn set_base_rgb(&mut self, rgb: Rgb) {
        if self.base_color != rgb {
            self.base_color = rgb;
            self.recompute();
        }
    }

    pub fn set_harmony(&mut self, harmony: HarmonyType) {
        if self.harmony != harmony {
            self.harmony = harmony;
            self.recompute();
        }
    }

    pub fn set_count(&mut self, count: ColorCount) {
        if self.count != count {
            self.count = count;
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        self.scheme = ColorScheme::generate(&self.base_color.to_hex(), self.harmony, self.count);
        self.revision += 1;
        debug!(
            base = %self.base_color,
            harmony = %self.harmony,
            count = self.count.get(),
            revision = self.revision,
            "scheme recomputed"
        );
    }
}

impl Default for SchemeState {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_COLOR, HarmonyType::default(), ColorCount::default())
    }
}

fn parse_base(input: &str) -> Result<Rgb, SchemeError> {
    parse_css_color(input).map_err(|err| {
        warn!(input, "rejected base color");
        SchemeError::from(err)
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use hue_color::ColorError;
    use pretty_assertions::assert_eq;

    // ── ColorCount ──────────────────────────────────────────────────

    #[test]
    fn count_accepts_two_through_nine() {
        for n in 2..=9 {
            assert_eq!(ColorCount::new(n).unwrap().get(), n);
        }
    }

    #[test]
    fn count_rejects_out_of_range() {
        for n in [0, 1, 10, 300] {
            assert!(matches!(
                ColorCount::new(n),
                Err(SchemeError::CountOutOfRange { count }) if count == n
            ));
        }
    }

    #[test]
    fn count_clamps() {
        assert_eq!(ColorCount::clamped(0).get(), 2);
        assert_eq!(ColorCount::clamped(1).get(), 2);
        assert_eq!(ColorCount::clamped(6).get(), 6);
        assert_eq!(ColorCount::clamped(1000).get(), 9);
    }

    #[test]
    fn count_error_message() {
        let err = ColorCount::new(12).unwrap_err();
        assert_eq!(err.to_string(), "color count 12 is outside 2..=9");
    }

    #[test]
    fn count_serde_validates() {
        assert_eq!(serde_json::to_string(&ColorCount::DEFAULT).unwrap(), "5");
        let ok: ColorCount = serde_json::from_str("7").unwrap();
        assert_eq!(ok.get(), 7);
        assert!(serde_json::from_str::<ColorCount>("1").is_err());
    }

    // ── ColorScheme ─────────────────────────────────────────────────

    #[test]
    fn scheme_carries_display_name() {
        let scheme = ColorScheme::generate("#ff0000", HarmonyType::SplitComplementary, ColorCount::DEFAULT);
        assert_eq!(scheme.name, "Split Complementary");
        assert_eq!(scheme.len(), 5);
        assert!(!scheme.is_empty());
    }

    #[test]
    fn scheme_complementary_red() {
        let scheme = ColorScheme::generate("#ff0000", HarmonyType::Complementary, ColorCount::new(2).unwrap());
        assert_eq!(scheme.colors, vec!["#ff0000", "#00ffff"]);
    }

    #[test]
    fn scheme_contrast_pairs() {
        let scheme = ColorScheme {
            name: "Test".into(),
            colors: vec!["#ffffff".into(), "#000000".into()],
        };
        assert_eq!(
            scheme.with_contrast(),
            vec![("#ffffff", "#000000"), ("#000000", "#ffffff")]
        );
    }

    // ── SchemeState ─────────────────────────────────────────────────

    #[test]
    fn default_state_is_indigo_analogous_five() {
        let state = SchemeState::default();
        assert_eq!(state.base_color().to_hex(), "#6366f1");
        assert_eq!(state.harmony(), HarmonyType::Analogous);
        assert_eq!(state.count().get(), 5);
        assert_eq!(state.scheme().name, "Analogous");
        assert_eq!(state.scheme().len(), 5);
        assert_eq!(state.revision(), 1);
    }

    #[test]
    fn setters_replace_scheme() {
        let mut state = SchemeState::default();
        let before = state.scheme().clone();

        state.set_harmony(HarmonyType::Triadic);
        assert_eq!(state.scheme().name, "Triadic");
        assert_ne!(state.scheme(), &before);

        state.set_count(ColorCount::new(3).unwrap());
        assert_eq!(state.scheme().len(), 3);

        state.set_base_color("#ff0000").unwrap();
        assert_eq!(state.scheme().colors, vec!["#ff0000", "#00ff00", "#0000ff"]);
        assert_eq!(state.revision(), 4);
    }

    #[test]
    fn unchanged_input_does_not_recompute() {
        let mut state = SchemeState::default();
        state.set_harmony(HarmonyType::Analogous);
        state.set_count(ColorCount::DEFAULT);
        state.set_base_color("#6366F1").unwrap();
        state.set_base_color("rgb(99, 102, 241)").unwrap();
        assert_eq!(state.revision(), 1);
    }

    #[test]
    fn state_matches_direct_generation() {
        let state = SchemeState::from_input("navy", HarmonyType::Monochromatic, ColorCount::new(4).unwrap()).unwrap();
        let direct = ColorScheme::generate("#000080", HarmonyType::Monochromatic, ColorCount::new(4).unwrap());
        assert_eq!(state.scheme(), &direct);
    }

    #[test]
    fn invalid_base_keeps_previous_state() {
        let mut state = SchemeState::default();
        let before = state.scheme().clone();

        let err = state.set_base_color("#12345").unwrap_err();
        assert!(matches!(
            err,
            SchemeError::Color(ColorError::InvalidColorFormat(ref s)) if s == "#12345"
        ));
        assert_eq!(state.scheme(), &before);
        assert_eq!(state.base_color(), DEFAULT_BASE_COLOR);
        assert_eq!(state.revision(), 1);
    }

    #[test]
    fn from_input_rejects_garbage() {
        assert!(SchemeState::from_input("not a color", HarmonyType::Triadic, ColorCount::DEFAULT).is_err());
    }

    #[test]
    fn contrast_colors_follow_scheme() {
        let state = SchemeState::from_input("#ffffff", HarmonyType::Monochromatic, ColorCount::new(2).unwrap()).unwrap();
        // White sweeps from l = 70 to l = 100 (clamped): both are light.
        let contrast: Vec<&str> = state.contrast_colors().into_iter().map(|(_, text)| text).collect();
        assert_eq!(contrast, vec!["#000000", "#000000"]);
    }
}
