use core::fmt;
use std::error::Error;
use tactile_style::StyleError;
use tactile_translate::TranslationError;

/// Why a render was abandoned. No partial matrix is returned.
#[derive(Debug)]
pub enum RenderError {
    /// A declaration in the style map could not be parsed.
    Style(StyleError),
    /// The translation engine failed on some text run.
    TranslationFailed(TranslationError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Style(err) => write!(formatter, "Style error: {err}"),
            Self::TranslationFailed(err) => write!(formatter, "Translation failed: {err}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Style(err) => Some(err),
            Self::TranslationFailed(err) => Some(err),
        }
    }
}

impl From<StyleError> for RenderError {
    fn from(err: StyleError) -> Self {
        Self::Style(err)
    }
}

impl From<TranslationError> for RenderError {
    fn from(err: TranslationError) -> Self {
        Self::TranslationFailed(err)
    }
}
