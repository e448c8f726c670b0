// SPDX-License-Identifier: MIT

/// Errors produced by the color validation layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The input is not a color this crate knows how to read.
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
}

impl ColorError {
    pub(crate) fn invalid(input: &str) -> Self {
        Self::InvalidColorFormat(input.to_owned())
    }
}
