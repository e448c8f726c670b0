// SPDX-License-Identifier: MIT
//
// harmonyhue: a color harmony palette generator for the terminal.
//
// This is the binary that wires the two library crates together:
//
//   hue-color  → hex/HSL conversion, contrast, CSS color parsing
//   hue-scheme → harmony algorithms, scheme state, export formats
//
// One invocation is one pass through the pipeline:
//
//   flags/env → SchemeState::from_input → scheme → cards | plain | css | json
//
// Every flag has an environment fallback so a preferred palette can live
// in the shell profile:
//
//   HARMONYHUE_BASE      base color (any CSS notation)
//   HARMONYHUE_HARMONY   harmony type
//   HARMONYHUE_COUNT     number of colors, 2 through 9
//
// Logs go to stderr and are filtered with RUST_LOG (default `warn`).

mod render;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hue_scheme::{ColorCount, ExportFormat, HarmonyType, SchemeState};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "harmonyhue", version, about = "Generate color harmony palettes from a base color")]
struct Cli {
    /// Base color: #hex, rgb(), hsl() or a CSS color name
    #[arg(short, long, env = "HARMONYHUE_BASE", default_value = "#6366f1")]
    base: String,

    /// Harmony used to pick the related colors
    #[arg(short = 'H', long, value_enum, env = "HARMONYHUE_HARMONY", default_value = "analogous")]
    harmony: HarmonyArg,

    /// Number of colors in the palette (2-9)
    #[arg(short = 'n', long, env = "HARMONYHUE_COUNT", default_value = "5", value_parser = parse_count)]
    count: ColorCount,

    /// Output format
    #[arg(short, long, value_enum, default_value = "cards")]
    format: FormatArg,

    /// Print cards without ANSI colors
    #[arg(long)]
    no_color: bool,

    /// List the harmony types and exit
    #[arg(long)]
    list: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HarmonyArg {
    Analogous,
    Monochromatic,
    Triadic,
    Complementary,
    SplitComplementary,
}

impl From<HarmonyArg> for HarmonyType {
    fn from(value: HarmonyArg) -> Self {
        match value {
            HarmonyArg::Analogous => Self::Analogous,
            HarmonyArg::Monochromatic => Self::Monochromatic,
            HarmonyArg::Triadic => Self::Triadic,
            HarmonyArg::Complementary => Self::Complementary,
            HarmonyArg::SplitComplementary => Self::SplitComplementary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Cards,
    Plain,
    Css,
    Json,
}

impl FormatArg {
    /// The export format, or `None` for terminal cards.
    const fn export(self) -> Option<ExportFormat> {
        match self {
            Self::Cards => None,
            Self::Plain => Some(ExportFormat::Plain),
            Self::Css => Some(ExportFormat::Css),
            Self::Json => Some(ExportFormat::Json),
        }
    }
}

fn parse_count(s: &str) -> Result<ColorCount, String> {
    let n: usize = s.trim().parse().map_err(|_| format!("{s:?} is not a number"))?;
    ColorCount::new(n).map_err(|e| e.to_string())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    if cli.list {
        render::harmony_list(out)?;
        return Ok(());
    }

    let state = SchemeState::from_input(&cli.base, cli.harmony.into(), cli.count)
        .with_context(|| format!("cannot use {:?} as the base color", cli.base))?;
    debug!(base = %state.base_color(), harmony = %state.harmony(), "palette ready");

    match cli.format.export() {
        Some(format) => {
            let text = format
                .render(state.scheme())
                .with_context(|| format!("failed to render {format} output"))?;
            writeln!(out, "{text}")?;
        }
        None => render::cards(out, state.scheme(), !cli.no_color)?,
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)?;
    out.flush()?;
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn output(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("harmonyhue").chain(args.iter().copied()))?;
        let mut buf = Vec::new();
        run(&cli, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn plain_output() {
        let out = output(&["-b", "#ff0000", "-H", "complementary", "-n", "2", "-f", "plain"]).unwrap();
        assert_eq!(out, "#ff0000, #00ffff\n");
    }

    #[test]
    fn css_output() {
        let out = output(&["--base", "red", "--harmony", "triadic", "--count", "3", "--format", "css"]).unwrap();
        assert_eq!(
            out,
            ":root {\n--color-1: #ff0000;\n--color-2: #00ff00;\n--color-3: #0000ff;\n}\n"
        );
    }

    #[test]
    fn json_output() {
        let out = output(&["-b", "#ff0000", "-H", "split-complementary", "-f", "json"]).unwrap();
        let scheme: hue_scheme::ColorScheme = serde_json::from_str(&out).unwrap();
        assert_eq!(scheme.name, "Split Complementary");
        assert_eq!(scheme.colors.len(), 5);
    }

    #[test]
    fn default_cards() {
        let out = output(&["--no-color"]).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Analogous Palette"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.filter(|l| l.contains("Color ")).count(), 5);
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn list_ignores_base() {
        let out = output(&["--list", "-b", "not-a-color"]).unwrap();
        assert!(out.contains("monochromatic"));
    }

    #[test]
    fn rejects_count_out_of_range() {
        assert!(Cli::try_parse_from(["harmonyhue", "-n", "1"]).is_err());
        assert!(Cli::try_parse_from(["harmonyhue", "-n", "10"]).is_err());
        assert!(Cli::try_parse_from(["harmonyhue", "-n", "x"]).is_err());
    }

    #[test]
    fn rejects_bad_base() {
        let err = output(&["-b", "#12345"]).unwrap_err();
        assert!(err.to_string().contains("#12345"));
    }

    #[test]
    fn harmony_arg_maps_every_variant() {
        for arg in HarmonyArg::value_variants() {
            let name = arg.to_possible_value().unwrap().get_name().to_owned();
            assert_eq!(HarmonyType::from(*arg).name(), name);
        }
    }
}
