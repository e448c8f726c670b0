use hue_color::ColorError;

use crate::scheme::ColorCount;

/// Errors raised while building or exporting a color scheme.
#[derive(Debug, thiserror::Error)]
pub enum SchemeError {
    /// The base color could not be read.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// The requested number of colors is outside what the engine supports.
    #[error("color count {count} is outside {min}..={max}", min = ColorCount::MIN, max = ColorCount::MAX)]
    CountOutOfRange { count: usize },

    #[error("unknown harmony type: {0:?}")]
    UnknownHarmony(String),

    /// JSON export failed.
    #[error("failed to serialize scheme: {0}")]
    Serialize(#[from] serde_json::Error),
}
