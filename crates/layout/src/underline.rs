use tactile_braille::CELL_ADVANCE;
use tactile_matrix::PinMatrix;
use tactile_style::BorderStyle;

/// Row offset, from the line top, of a single underline: just below the cell.
const UNDERLINE_ROW: usize = 4;
/// First of the two rows a double underline uses: the dot 7/8 row.
const DOUBLE_FIRST_ROW: usize = 3;

/// Underline drawing state of one element.
///
/// Every segment covers one cell advance. The dotted variant alternates between `X.X` and
/// `.X.` on successive segments, which is why the state lives for the whole element and is
/// rebuilt for the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnderlineState {
    Solid,
    Dashed,
    Double,
    Dotted { last_was_dot: bool },
}

impl UnderlineState {
    /// Fresh state for a `border-bottom-style`, `None` when not underlined.
    pub const fn for_style(style: BorderStyle) -> Option<Self> {
        match style {
            BorderStyle::None => None,
            BorderStyle::Solid => Some(Self::Solid),
            BorderStyle::Dashed => Some(Self::Dashed),
            BorderStyle::Double => Some(Self::Double),
            BorderStyle::Dotted => Some(Self::Dotted { last_was_dot: false }),
        }
    }

    /// Draw the segment under the cell advance starting at `column`.
    pub fn draw(&mut self, matrix: &mut PinMatrix, line_top: usize, column: usize) {
        let full = column..column + CELL_ADVANCE;
        match self {
            Self::Solid => matrix.fill_span(line_top + UNDERLINE_ROW, full),
            Self::Dashed => matrix.fill_span(line_top + UNDERLINE_ROW, column..column + 2),
            Self::Double => {
                matrix.fill_span(line_top + DOUBLE_FIRST_ROW, full.clone());
                matrix.fill_span(line_top + DOUBLE_FIRST_ROW + 1, full);
            }
            Self::Dotted { last_was_dot } => {
                let row = line_top + UNDERLINE_ROW;
                if *last_was_dot {
                    matrix.set(row, column + 1, true);
                } else {
                    matrix.set(row, column, true);
                    matrix.set(row, column + 2, true);
                }
                *last_was_dot = !*last_was_dot;
            }
        }
    }
}
