//! Bridge to the external braille translation engine.
//!
//! Text is cut into chunks of at most [`CHUNK_CHARS`] characters, each chunk is translated
//! on its own and the outputs are concatenated in order. Chunk boundaries are purely
//! length based, so a word can straddle two chunks.

#![forbid(unsafe_code)]

mod bridge;
mod error;
mod process;
mod settings;
mod worker;

pub use bridge::{CHUNK_CHARS, TranslationBridge, TranslationEngine, split_chunks};
pub use error::TranslationError;
pub use process::{ProcessEngine, TranslatorCommand, trim_engine_suffix};
pub use settings::{EngineMode, TranslatorSettings};
pub use worker::WorkerEngine;
