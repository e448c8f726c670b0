// SPDX-License-Identifier: MIT
//
// hue-color: color math for harmonyhue.
//
// Everything here is pure: hex strings go in, HSL triples or hex strings
// come out. Two layers live side by side:
//
//   color.rs → the raw engine. `hex_to_hsl` / `hsl_to_hex` never validate;
//              malformed input flows through as NaN and comes out as
//              `#NaNNaNNaN`. The harmony algorithms are built on this layer.
//
//   css.rs   → the validation layer. Parses hex, rgb()/rgba(), hsl()/hsla()
//              and named colors into a strict `Rgb`, failing fast with a
//              typed `ColorError` instead of producing NaN.
//
// Conversion pipeline:
//
//   "#rrggbb" ─► channels [0,1] ─► Hsl { h: deg, s: %, l: % }
//   Hsl ─► hue2rgb at {+1/3, 0, −1/3} ─► channels [0,255] ─► "#rrggbb"

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/saturation/lightness names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod css;
pub mod error;

pub use color::{Hsl, Rgb, contrast_color, hex_to_hsl, hsl_to_hex};
pub use css::{is_valid_color, to_hex_color};
pub use error::ColorError;
