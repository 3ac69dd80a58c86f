//! Simplified style sheets: selector to ordered `property:value` declarations.
//!
//! The map itself is produced by an external style-sheet parser. This crate owns the
//! lookup contract plus the small value grammar the layout engine needs: declarations,
//! lengths, border keywords and box-model shorthands.

#![forbid(unsafe_code)]

pub mod box_model;
pub mod declaration;
pub mod error;
pub mod length;
pub mod map;

pub use box_model::{BoxModel, Side, expand_shorthand};
pub use declaration::{BorderStyle, Declaration, Pseudo};
pub use error::StyleError;
pub use length::{Axis, EM_HORIZONTAL_FACTOR, Length, LengthUnit};
pub use map::StyleMap;
