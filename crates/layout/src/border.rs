use tactile_matrix::PinMatrix;
use tactile_style::BoxModel;

/// Outer edge of an element's border, recorded before content is laid out.
///
/// The bottom is only known once content and bottom insets are done, so drawing is
/// deferred to [`BorderBox::draw`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderBox {
    pub top: usize,
    pub left: usize,
    /// Exclusive.
    pub right: usize,
    pub widths: BoxModel,
}

impl BorderBox {
    /// Raise the border bands for rows `top..bottom`.
    ///
    /// Rows inside the top or bottom band are filled across the whole box; other rows only
    /// get the left and right bands.
    pub fn draw(&self, matrix: &mut PinMatrix, bottom: usize) {
        let bottom_band = bottom.saturating_sub(self.widths.bottom);
        for row in self.top..bottom {
            if row < self.top + self.widths.top || row >= bottom_band {
                matrix.fill_span(row, self.left..self.right);
            } else {
                matrix.fill_span(row, self.left..self.left + self.widths.left);
                matrix.fill_span(row, self.right.saturating_sub(self.widths.right)..self.right);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_side_widths() {
        let mut matrix = PinMatrix::new(8);
        matrix.push_blank_rows(6);
        let border = BorderBox {
            top: 1,
            left: 1,
            right: 7,
            widths: BoxModel::new(1, 2, 1, 1).as_border(),
        };
        border.draw(&mut matrix, 5);
        assert_eq!(
            matrix.dump(),
            concat!(
                "........\n",
                ".######.\n",
                ".#...##.\n",
                ".#...##.\n",
                ".######.\n",
                "........\n",
            )
        );
    }

    #[test]
    fn missing_sides_leave_gaps() {
        let mut matrix = PinMatrix::new(4);
        matrix.push_blank_rows(3);
        let border = BorderBox {
            top: 0,
            left: 0,
            right: 4,
            widths: BoxModel::new(0, 0, 1, 0).as_border(),
        };
        border.draw(&mut matrix, 3);
        assert_eq!(matrix.dump(), "....\n....\n####\n");
    }
}
