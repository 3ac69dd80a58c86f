//! Box-model insets (margin, border, padding) measured in pins and rows.

/// One edge of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// Expand 1 to 4 shorthand values into `[top, right, bottom, left]`.
///
/// Follows the CSS rule: one value sets every side, two are vertical/horizontal, three are
/// top/horizontal/bottom and four are listed clockwise from the top. Any other arity is
/// rejected.
pub fn expand_shorthand<T: Copy>(values: &[T]) -> Option<[T; 4]> {
    match *values {
        [all] => Some([all; 4]),
        [vertical, horizontal] => Some([vertical, horizontal, vertical, horizontal]),
        [top, horizontal, bottom] => Some([top, horizontal, bottom, horizontal]),
        [top, right, bottom, left] => Some([top, right, bottom, left]),
        _ => None,
    }
}

/// Insets on the four sides of a box, plus which sides render as a border.
///
/// Border flags are only ever set for a box built from a border declaration, so margin and
/// padding boxes compare equal to their plain offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoxModel {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,

    pub border_top: bool,
    pub border_right: bool,
    pub border_bottom: bool,
    pub border_left: bool,
}

impl BoxModel {
    #[inline]
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
            border_top: false,
            border_right: false,
            border_bottom: false,
            border_left: false,
        }
    }

    /// Mark every side with a non-zero width as a rendered border.
    #[inline]
    #[must_use]
    pub const fn as_border(mut self) -> Self {
        self.border_top = self.top > 0;
        self.border_right = self.right > 0;
        self.border_bottom = self.bottom > 0;
        self.border_left = self.left > 0;
        self
    }

    /// Rows taken above and below the content.
    #[inline]
    pub const fn vertical(&self) -> usize {
        self.top + self.bottom
    }

    /// Set one side's width; the border flag follows the width.
    pub fn set_border_side(&mut self, side: Side, width: usize) {
        let rendered = width > 0;
        match side {
            Side::Top => (self.top, self.border_top) = (width, rendered),
            Side::Right => (self.right, self.border_right) = (width, rendered),
            Side::Bottom => (self.bottom, self.border_bottom) = (width, rendered),
            Side::Left => (self.left, self.border_left) = (width, rendered),
        }
    }

    /// Whether any side renders as a border.
    #[inline]
    pub const fn has_border(&self) -> bool {
        self.border_top || self.border_right || self.border_bottom || self.border_left
    }
}
