//! Word wrapping of braille cells into an element's content box.

use crate::geometry::Cursor;
use crate::underline::UnderlineState;
use log::trace;
use smallvec::SmallVec;
use tactile_braille::{CELL_ADVANCE, encode};
use tactile_matrix::PinMatrix;

/// Cell codes of one word.
pub type Word = SmallVec<[char; 16]>;

/// Where a word ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Written on the current line.
    SameLine,
    /// Written after breaking to a new line.
    NewLine,
    /// Dropped: the element reached its fixed height.
    Locked,
}

/// Line state of one element's content box.
///
/// The first line starts at the indent column, later lines at the left edge. A word is kept
/// on the current line when `start + 3 * cells <= x_max`; otherwise the line is closed and the
/// word starts the next one. A word too wide for an empty line is written anyway and may
/// overflow; pins past the matrix width are dropped by the matrix.
///
/// A writer may join a line its parent already started, in which case the line keeps the
/// parent's extent and the gap before the first word belongs to nobody.
#[derive(Clone, Debug)]
pub struct LineWriter {
    left: usize,
    x_max: usize,
    line_height: usize,
    stop_row: Option<usize>,
    line_top: usize,
    /// Row below the current line; taller content joined from a nested element pushes it down.
    line_bottom: usize,
    /// Column after the last written cell, or where the next line starts when unused.
    pen: usize,
    used: bool,
    /// Whether the cell before the pen was written by this writer.
    owns_gap: bool,
    locked: bool,
    underline: Option<UnderlineState>,
}

impl LineWriter {
    pub fn new(
        left: usize,
        first_column: usize,
        x_max: usize,
        top: usize,
        line_height: usize,
    ) -> Self {
        Self {
            left,
            x_max,
            line_height,
            stop_row: None,
            line_top: top,
            line_bottom: top + line_height,
            pen: first_column,
            used: false,
            owns_gap: false,
            locked: false,
            underline: None,
        }
    }

    /// Stop emitting lines that would start at or past `stop_row`.
    #[must_use]
    pub fn with_stop_row(mut self, stop_row: Option<usize>) -> Self {
        self.stop_row = stop_row;
        self.locked = stop_row.is_some_and(|stop| self.line_top >= stop);
        self
    }

    #[must_use]
    pub const fn with_underline(mut self, underline: Option<UnderlineState>) -> Self {
        self.underline = underline;
        self
    }

    /// Join the enclosing element's current line, which may already hold cells.
    #[must_use]
    pub fn with_open_line(mut self, used: bool, line_bottom: usize) -> Self {
        self.used = used;
        self.line_bottom = self.line_bottom.max(line_bottom);
        self
    }

    #[inline]
    pub const fn line_top(&self) -> usize {
        self.line_top
    }

    #[inline]
    pub const fn line_bottom(&self) -> usize {
        self.line_bottom
    }

    /// Column the next cell would follow.
    #[inline]
    pub const fn pen(&self) -> usize {
        self.pen
    }

    /// Whether the current line holds any cell.
    #[inline]
    pub const fn is_line_used(&self) -> bool {
        self.used
    }

    /// Whether the fixed height has been reached.
    #[inline]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Lay out one word, breaking the line first when it does not fit.
    pub fn place_word(&mut self, matrix: &mut PinMatrix, word: &[char]) -> Placement {
        if self.locked {
            return Placement::Locked;
        }
        if word.is_empty() {
            return Placement::SameLine;
        }
        let width = word.len() * CELL_ADVANCE;

        if self.used {
            let start = self.pen + CELL_ADVANCE;
            if start + width <= self.x_max {
                if self.owns_gap {
                    let gap = self.pen;
                    self.underline_at(matrix, gap);
                }
                self.write(matrix, start, word);
                return Placement::SameLine;
            }
        } else if self.pen + width <= self.x_max || self.pen == self.left {
            let start = self.pen;
            self.write(matrix, start, word);
            return Placement::SameLine;
        }

        if !self.break_line(matrix) {
            return Placement::Locked;
        }
        let start = self.pen;
        self.write(matrix, start, word);
        Placement::NewLine
    }

    /// Close the current line. Returns `false` and locks when a fixed height forbids it.
    pub fn break_line(&mut self, matrix: &mut PinMatrix) -> bool {
        if self.locked {
            return false;
        }
        let next_top = self.line_bottom;
        if self.stop_row.is_some_and(|stop| next_top >= stop) {
            trace!(target: "tactile_layout", "height lock at row {next_top}");
            self.locked = true;
            return false;
        }
        self.start_line(next_top, self.left, false);
        matrix.grow_to(self.line_bottom);
        true
    }

    /// Continue on a fresh line at `row`, below a nested element. The indent is not reapplied.
    pub fn resume_at(&mut self, row: usize) {
        self.start_line(row, self.left, false);
        if self.stop_row.is_some_and(|stop| row >= stop) {
            self.locked = true;
        }
    }

    /// Continue where a nested inline element stopped writing.
    pub fn continue_line(&mut self, end: Cursor, used: bool, line_bottom: usize) {
        self.start_line(end.row, end.column, used);
        self.line_bottom = self.line_bottom.max(line_bottom);
    }

    /// Row just below this element's content, ignoring any fixed height.
    ///
    /// A used line, or a forced break, counts in full; an unused last line still leaves at
    /// least one line reserved below `content_top`.
    pub fn content_bottom(&self, content_top: usize, force_break: bool) -> usize {
        if self.used || force_break {
            self.line_bottom
        } else {
            self.line_top.max(content_top + self.line_height)
        }
    }

    fn start_line(&mut self, top: usize, pen: usize, used: bool) {
        self.line_top = top;
        self.line_bottom = top + self.line_height;
        self.pen = pen;
        self.used = used;
        self.owns_gap = false;
    }

    fn write(&mut self, matrix: &mut PinMatrix, start: usize, word: &[char]) {
        matrix.grow_to(self.line_top + self.line_height);
        let mut column = start;
        for &code in word {
            matrix.write_cell(self.line_top, column, encode(code));
            self.underline_at(matrix, column);
            column += CELL_ADVANCE;
        }
        trace!(target: "tactile_layout", "word of {} cells at ({}, {start})", word.len(), self.line_top);
        self.pen = column;
        self.used = true;
        self.owns_gap = true;
    }

    fn underline_at(&mut self, matrix: &mut PinMatrix, column: usize) {
        if let Some(underline) = &mut self.underline {
            underline.draw(matrix, self.line_top, column);
        }
    }
}
