// SPDX-License-Identifier: MIT
//
// Terminal rendering of a scheme as color cards.
//
// Each card is one line: the swatch is the card itself, painted with a
// 24-bit background, and the label on top of it uses the contrast text
// color so it stays readable on any swatch.
//
//   Analogous Palette
//
//    Color 1   #5F63F1
//    Color 2   #6366F1
//    ...
//
// Without color the same lines are written as plain text.

use std::io::{self, Write};

use hue_color::Rgb;
use hue_scheme::{ColorScheme, HarmonyType};

/// Reset all attributes.
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Truecolor foreground.
pub fn fg(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    let Rgb { r, g, b } = color;
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Truecolor background.
pub fn bg(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    let Rgb { r, g, b } = color;
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

/// One card: `Color N` and the uppercase hex.
pub fn card(w: &mut impl Write, index: usize, swatch: Rgb, text: Rgb, color: bool) -> io::Result<()> {
    let label = format!(" Color {index}   {} ", swatch.to_hex().to_uppercase());
    if color {
        bg(w, swatch)?;
        fg(w, text)?;
        w.write_all(label.as_bytes())?;
        reset(w)?;
    } else {
        w.write_all(label.as_bytes())?;
    }
    writeln!(w)
}

/// The whole scheme under a `<Name> Palette` heading.
///
/// # Errors
///
/// Fails on write errors, or if the scheme holds a color that is not
/// `#rrggbb`.
pub fn cards(w: &mut impl Write, scheme: &ColorScheme, color: bool) -> anyhow::Result<()> {
    writeln!(w, "{} Palette", scheme.name)?;
    writeln!(w)?;
    for (i, (swatch, text)) in scheme.with_contrast().into_iter().enumerate() {
        let swatch = Rgb::from_hex(swatch)?;
        let text = Rgb::from_hex(text)?;
        card(w, i + 1, swatch, text, color)?;
    }
    Ok(())
}

/// Every harmony type with its description.
pub fn harmony_list(w: &mut impl Write) -> io::Result<()> {
    for &kind in HarmonyType::all() {
        writeln!(w, "{:<20} {}", kind.name(), kind.description())?;
    }
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
