use crate::error::TranslationError;
use log::{debug, trace};

/// Maximum characters sent to the engine in one request.
pub const CHUNK_CHARS: usize = 60;

/// Something that turns one chunk of text into braille cell codes.
pub trait TranslationEngine {
    /// Translate a single chunk of at most [`CHUNK_CHARS`] characters.
    ///
    /// # Errors
    /// Any failure of the underlying engine.
    fn translate_chunk(&mut self, chunk: &str) -> Result<String, TranslationError>;
}

impl<F> TranslationEngine for F
where
    F: FnMut(&str) -> Result<String, TranslationError>,
{
    fn translate_chunk(&mut self, chunk: &str) -> Result<String, TranslationError> {
        self(chunk)
    }
}

/// Split `text` into consecutive slices of at most [`CHUNK_CHARS`] characters.
///
/// Boundaries fall on character boundaries only; words are not respected.
pub fn split_chunks(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    core::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest
            .char_indices()
            .nth(CHUNK_CHARS)
            .map_or(rest.len(), |(offset, _)| offset);
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}

/// Chunking front-end over a [`TranslationEngine`], reused for a whole render.
pub struct TranslationBridge {
    engine: Box<dyn TranslationEngine>,
    chunks_sent: usize,
}

impl TranslationBridge {
    pub fn new<E: TranslationEngine + 'static>(engine: E) -> Self {
        Self {
            engine: Box::new(engine),
            chunks_sent: 0,
        }
    }

    /// Translate `text` chunk by chunk and concatenate the results in order.
    ///
    /// # Errors
    /// The first chunk that fails aborts the whole run; no partial output is returned.
    pub fn translate(&mut self, text: &str) -> Result<String, TranslationError> {
        let mut out = String::with_capacity(text.len());
        for chunk in split_chunks(text) {
            trace!(target: "tactile_translate", "chunk {}: {chunk:?}", self.chunks_sent);
            out.push_str(&self.engine.translate_chunk(chunk)?);
            self.chunks_sent += 1;
        }
        debug!(target: "tactile_translate", "translated {} chars into {} cells", text.chars().count(), out.chars().count());
        Ok(out)
    }

    /// Chunks successfully translated since this bridge was created.
    #[inline]
    pub const fn chunks_sent(&self) -> usize {
        self.chunks_sent
    }
}
