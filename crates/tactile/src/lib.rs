//! Styled documents to braille pin matrices.
//!
//! A [`Renderer`] takes a document tree and a finished [`StyleMap`], translates the text of
//! every styled element into braille and lays it out, box model and word wrap included,
//! onto a [`PinMatrix`] of raised and lowered pins.

#![forbid(unsafe_code)]

mod config;
mod renderer;

pub use config::TactileConfig;
pub use renderer::Renderer;

pub use tactile_braille::{CellPattern, encode, numeral_code};
pub use tactile_document::{Document, DocumentTree, NodeData, NodeId, NodeKind};
pub use tactile_layout::{LayoutOptions, RenderError, RenderStats, Rendered};
pub use tactile_matrix::PinMatrix;
pub use tactile_style::{StyleError, StyleMap};
pub use tactile_translate::{
    EngineMode, TranslationBridge, TranslationEngine, TranslationError, TranslatorSettings,
};
