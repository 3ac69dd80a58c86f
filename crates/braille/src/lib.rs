//! Braille cell encoding: 8-dot unicode braille codes to 4x2 pin patterns.
//!
//! Codes live in the Unicode braille block (U+2800..U+28FF). The low byte of a code is its dot
//! mask: bits 0..=5 are dots 1..=6 in the classic 3x2 arrangement and bits 6/7 are dots 7/8 on
//! the fourth row.

#![forbid(unsafe_code)]

/// Pin rows covered by one cell.
pub const CELL_ROWS: usize = 4;
/// Dot columns covered by one cell.
pub const CELL_COLUMNS: usize = 2;
/// Columns one cell advances the pen: two dot columns and one spacer.
pub const CELL_ADVANCE: usize = 3;

/// First code point of the braille block; also the blank cell.
pub const BLANK_CODE: char = '\u{2800}';

const BRAILLE_BASE: u32 = 0x2800;

/// Dot mask bit for each `(row, column)` position.
const DOT_BITS: [[u8; CELL_COLUMNS]; CELL_ROWS] =
    [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// Braille digits 1..=9 (the a..i letter patterns).
const DIGIT_CODES: [char; 9] = ['⠁', '⠃', '⠉', '⠙', '⠑', '⠋', '⠛', '⠓', '⠊'];

static CELL_TABLE: [CellPattern; 256] = build_table();

/// Raised/lowered state of the eight pins of one braille cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellPattern([[bool; CELL_COLUMNS]; CELL_ROWS]);

impl CellPattern {
    /// The all-lowered cell.
    pub const BLANK: Self = Self([[false; CELL_COLUMNS]; CELL_ROWS]);

    /// Build the pattern for a dot mask.
    #[inline]
    pub const fn from_dots(dots: u8) -> Self {
        let mut pins = [[false; CELL_COLUMNS]; CELL_ROWS];
        let mut row = 0;
        while row < CELL_ROWS {
            let mut column = 0;
            while column < CELL_COLUMNS {
                pins[row][column] = dots & DOT_BITS[row][column] != 0;
                column += 1;
            }
            row += 1;
        }
        Self(pins)
    }

    /// Recover the dot mask of this pattern.
    #[inline]
    pub const fn dots(self) -> u8 {
        let mut dots = 0;
        let mut row = 0;
        while row < CELL_ROWS {
            let mut column = 0;
            while column < CELL_COLUMNS {
                if self.0[row][column] {
                    dots |= DOT_BITS[row][column];
                }
                column += 1;
            }
            row += 1;
        }
        dots
    }

    /// Whether the pin at `(row, column)` is raised. Out-of-range positions are lowered.
    #[inline]
    pub fn is_raised(self, row: usize, column: usize) -> bool {
        self.0
            .get(row)
            .and_then(|pins| pins.get(column))
            .copied()
            .unwrap_or(false)
    }

    /// Pin rows, top to bottom.
    #[inline]
    pub const fn rows(&self) -> &[[bool; CELL_COLUMNS]; CELL_ROWS] {
        &self.0
    }

    #[inline]
    pub const fn is_blank(self) -> bool {
        self.dots() == 0
    }
}

const fn build_table() -> [CellPattern; 256] {
    let mut table = [CellPattern::BLANK; 256];
    let mut index = 0;
    while index < table.len() {
        table[index] = CellPattern::from_dots(index as u8);
        index += 1;
    }
    table
}

/// Encode a braille code into its pin pattern. Anything outside the braille block is blank.
#[inline]
pub fn encode(code: char) -> CellPattern {
    let offset = u32::from(code).wrapping_sub(BRAILLE_BASE);
    usize::try_from(offset)
        .ok()
        .and_then(|index| CELL_TABLE.get(index))
        .copied()
        .unwrap_or(CellPattern::BLANK)
}

/// Braille code for a one-digit numeral. `1..=9` map to the digit patterns; 0 and anything
/// larger fall back to the blank cell.
#[inline]
pub fn numeral_code(value: usize) -> char {
    value
        .checked_sub(1)
        .and_then(|index| DIGIT_CODES.get(index))
        .copied()
        .unwrap_or(BLANK_CODE)
}
