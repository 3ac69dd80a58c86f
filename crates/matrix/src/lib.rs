//! Append-only pin matrix: the rendered page, one boolean per pin (`true` = raised).

#![forbid(unsafe_code)]

use core::ops::Range;
use serde::{Deserialize, Serialize};
use tactile_braille::{CELL_COLUMNS, CELL_ROWS, CellPattern};

/// Default page width in pins.
pub const DEFAULT_WIDTH: usize = 120;

/// Character used for a raised pin in [`PinMatrix::dump`].
pub const RAISED: char = '#';
/// Character used for a lowered pin in [`PinMatrix::dump`].
pub const LOWERED: char = '.';

/// Growable grid of pins with a fixed row width.
///
/// Rows are only ever appended. Writes aimed at rows that do not exist yet, or at columns
/// past the width, are dropped silently; layout grows the matrix before it writes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinMatrix {
    width: usize,
    rows: Vec<Vec<bool>>,
}

impl PinMatrix {
    #[inline]
    pub const fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows appended so far.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    #[inline]
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Whether a pin is raised. Pins outside the matrix read as lowered.
    #[inline]
    pub fn is_raised(&self, row: usize, column: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|pins| pins.get(column))
            .copied()
            .unwrap_or(false)
    }

    /// A fresh all-lowered row of this matrix's width.
    #[inline]
    pub fn blank_row(&self) -> Vec<bool> {
        vec![false; self.width]
    }

    #[inline]
    pub fn push_blank_row(&mut self) {
        let row = self.blank_row();
        self.rows.push(row);
    }

    pub fn push_blank_rows(&mut self, count: usize) {
        for _ in 0..count {
            self.push_blank_row();
        }
    }

    /// Append blank rows until at least `height` rows exist. Returns how many were added.
    pub fn grow_to(&mut self, height: usize) -> usize {
        let missing = height.saturating_sub(self.rows.len());
        self.push_blank_rows(missing);
        missing
    }

    /// Set a single pin; silently ignored outside the matrix.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, raised: bool) {
        if let Some(pin) = self.rows.get_mut(row).and_then(|pins| pins.get_mut(column)) {
            *pin = raised;
        }
    }

    /// Write a 4x2 cell with its top-left pin at `(row, column)`.
    ///
    /// All eight pins are written, lowered ones included; nothing else is touched.
    pub fn write_cell(&mut self, row: usize, column: usize, cell: CellPattern) {
        for cell_row in 0..CELL_ROWS {
            for cell_column in 0..CELL_COLUMNS {
                self.set(
                    row + cell_row,
                    column + cell_column,
                    cell.is_raised(cell_row, cell_column),
                );
            }
        }
    }

    /// Raise every pin of `columns` on one row, clipped to the width.
    pub fn fill_span(&mut self, row: usize, columns: Range<usize>) {
        if let Some(pins) = self.rows.get_mut(row) {
            let end = columns.end.min(pins.len());
            if let Some(span) = pins.get_mut(columns.start.min(end)..end) {
                span.fill(true);
            }
        }
    }

    pub fn raised_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&pin| pin).count()
    }

    /// Text rendering, one line per row, [`RAISED`] and [`LOWERED`] per pin.
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(self.rows.len() * (self.width + 1));
        for pins in &self.rows {
            out.extend(pins.iter().map(|&pin| if pin { RAISED } else { LOWERED }));
            out.push('\n');
        }
        out
    }

    /// Like [`PinMatrix::dump`] for a window of rows, prefixed with row numbers.
    pub fn dump_rows(&self, rows: Range<usize>) -> String {
        let mut out = String::new();
        for index in rows.start..rows.end.min(self.rows.len()) {
            let pins: String = self.rows[index]
                .iter()
                .map(|&pin| if pin { RAISED } else { LOWERED })
                .collect();
            out.push_str(&format!("{index:>4} {pins}\n"));
        }
        out
    }
}

impl Default for PinMatrix {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}
