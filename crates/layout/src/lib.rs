//! Layout of a styled document onto a braille pin matrix.
//!
//! Top-level elements stack as blocks. Each applies its margin, border and padding around a
//! content box in which its own text is translated, split into words and wrapped cell by cell.
//! A nested element continues its parent's line unless it is a list item, has a fixed height,
//! a border or vertical insets; such children start a line of their own and the parent resumes
//! below them.

#![forbid(unsafe_code)]

pub mod border;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod style;
pub mod underline;
pub mod wrap;

pub use border::BorderBox;
pub use engine::{LayoutOptions, RenderContext, RenderStats, Rendered, render};
pub use error::RenderError;
pub use geometry::{BoxGeometry, Cursor, ParentContext};
pub use style::{DEFAULT_LINE_HEIGHT, ElementRole, ElementStyle};
pub use underline::UnderlineState;
pub use wrap::{LineWriter, Placement, Word};
