//! # hue-scheme: color harmony palettes
//!
//! Turns one base color into an ordered palette. One parameter shift (base
//! color, harmony type, color count) produces a whole new scheme, computed
//! synchronously and replaced wholesale.
//!
//! # Architecture
//!
//! ```text
//! base color + HarmonyType + ColorCount
//!     │
//!     ▼
//! hue_color::hex_to_hsl   (decode the base, no validation)
//!     │
//!     ▼
//! harmony.rs:  generate hex colors (pure math)
//!     │
//!     ▼
//! scheme.rs:   name the result, keep it in sync with its inputs
//!     │
//!     ▼
//! export.rs:   plain list, CSS custom properties, or JSON
//! ```
//!
//! # Color Space
//!
//! Everything happens in HSL with hue in degrees and saturation and
//! lightness in percent. Colors are re-encoded as `#rrggbb` after every
//! step, so interpolated stops start from the rounded hex a user would see.

// Mathematical code uses small integer-to-float casts (loop indices, counts).
#![allow(clippy::cast_precision_loss)]
// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]
// Plain `a * b + c` keeps palette math identical to the reference formulas.
#![allow(clippy::suboptimal_flops)]

pub mod error;
pub mod export;
pub mod harmony;
pub mod scheme;

pub use error::SchemeError;
pub use export::ExportFormat;
pub use harmony::HarmonyType;
pub use scheme::{ColorCount, ColorScheme, SchemeState};
