//! Text renderings of a scheme for copying into other tools.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemeError;
use crate::scheme::ColorScheme;

/// How a scheme is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    /// `#aaaaaa, #bbbbbb, ...`
    #[default]
    Plain,
    /// A `:root` block of `--color-N` custom properties.
    Css,
    /// The scheme as pretty-printed JSON.
    Json,
}

impl ExportFormat {
    /// # Errors
    ///
    /// Only [`ExportFormat::Json`] can fail, when serialization fails.
    pub fn render(self, scheme: &ColorScheme) -> Result<String, SchemeError> {
        match self {
            Self::Plain => Ok(to_plain(scheme)),
            Self::Css => Ok(to_css_variables(scheme)),
            Self::Json => Ok(to_json(scheme)?),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Css => "css",
            Self::Json => "json",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "plain" => Some(Self::Plain),
            "css" => Some(Self::Css),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown export format: {s:?}"))
    }
}

/// Colors joined by `", "`.
#[must_use]
pub fn to_plain(scheme: &ColorScheme) -> String {
    scheme.colors.join(", ")
}

/// A `:root` rule declaring `--color-1` through `--color-N`.
///
/// ```text
/// :root {
/// --color-1: #ff0000;
/// --color-2: #00ffff;
/// }
/// ```
#[must_use]
pub fn to_css_variables(scheme: &ColorScheme) -> String {
    let vars: Vec<String> = scheme
        .colors
        .iter()
        .enumerate()
        .map(|(i, color)| format!("--color-{}: {color};", i + 1))
        .collect();
    format!(":root {{\n{}\n}}", vars.join("\n"))
}

/// # Errors
///
/// Propagates the `serde_json` error, which a `ColorScheme` never triggers
/// in practice.
pub fn to_json(scheme: &ColorScheme) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(scheme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pair() -> ColorScheme {
        ColorScheme {
            name: "Complementary".into(),
            colors: vec!["#ff0000".into(), "#00ffff".into()],
        }
    }

    #[test]
    fn plain_joins_with_comma_space() {
        assert_eq!(to_plain(&pair()), "#ff0000, #00ffff");
    }

    #[test]
    fn css_block() {
        assert_eq!(
            to_css_variables(&pair()),
            ":root {\n--color-1: #ff0000;\n--color-2: #00ffff;\n}"
        );
    }

    #[test]
    fn json_reads_back() {
        let json = to_json(&pair()).unwrap();
        assert!(json.contains("\"name\": \"Complementary\""));
        let back: ColorScheme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair());
    }

    #[test]
    fn render_dispatches() {
        let scheme = pair();
        assert_eq!(ExportFormat::Plain.render(&scheme).unwrap(), to_plain(&scheme));
        assert_eq!(ExportFormat::Css.render(&scheme).unwrap(), to_css_variables(&scheme));
        assert_eq!(ExportFormat::Json.render(&scheme).unwrap(), to_json(&scheme).unwrap());
    }

    #[test]
    fn default_is_plain() {
        assert_eq!(ExportFormat::default(), ExportFormat::Plain);
    }

    #[test]
    fn format_names() {
        assert_eq!("CSS".parse::<ExportFormat>(), Ok(ExportFormat::Css));
        assert_eq!(ExportFormat::Json.to_string(), "json");
        assert!("yaml".parse::<ExportFormat>().is_err());
    }
}
