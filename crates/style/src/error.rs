use core::fmt;
use std::error::Error;

/// Errors raised while reading declarations out of a style map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A declaration without a `:` separator.
    MalformedDeclaration(String),
    /// A pseudo-element tag other than `before` or `after`.
    UnknownPseudo(String),
    /// A length with no numeric part left after stripping its suffix.
    InvalidLength(String),
}

impl fmt::Display for StyleError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedDeclaration(raw) => {
                write!(formatter, "Malformed declaration (missing ':'): {raw:?}")
            }
            Self::UnknownPseudo(tag) => write!(formatter, "Unknown pseudo-element tag: {tag:?}"),
            Self::InvalidLength(raw) => write!(formatter, "Invalid length: {raw:?}"),
        }
    }
}

impl Error for StyleError {}
