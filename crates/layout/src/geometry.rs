//! Box-model geometry: where an element's content starts and how far it may extend.

use crate::border::BorderBox;
use crate::style::ElementStyle;

/// Write position: a column on the line whose top row is `row`.
///
/// Handed to an element as the place its first line starts, and handed back by elements that
/// flow inline as the column after their last cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub column: usize,
    pub row: usize,
}

impl Cursor {
    #[inline]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// What an element inherits from whatever contains it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParentContext {
    /// Top level of the document: the page width is the only limit.
    Root { max_width: usize },
    /// Inside another element's content box.
    Nested {
        /// Left edge of the parent's content box, where wrapped lines restart.
        content_left: usize,
        /// Parent's right-edge budget, exclusive.
        x_max: usize,
        /// Tightest fixed-height stop row among the ancestors.
        stop_row: Option<usize>,
        /// Whether the parent's line at the cursor already holds cells.
        line_open: bool,
        /// Row just below the parent's current line.
        line_bottom: usize,
    },
}

impl ParentContext {
    #[inline]
    pub const fn origin_column(self) -> usize {
        match self {
            Self::Root { .. } => 0,
            Self::Nested { content_left, .. } => content_left,
        }
    }

    #[inline]
    pub const fn x_max(self) -> usize {
        match self {
            Self::Root { max_width } => max_width,
            Self::Nested { x_max, .. } => x_max,
        }
    }

    #[inline]
    pub const fn stop_row(self) -> Option<usize> {
        match self {
            Self::Root { .. } => None,
            Self::Nested { stop_row, .. } => stop_row,
        }
    }

    #[inline]
    pub const fn line_open(self) -> bool {
        match self {
            Self::Root { .. } => false,
            Self::Nested { line_open, .. } => line_open,
        }
    }

    #[inline]
    pub const fn line_bottom(self) -> usize {
        match self {
            Self::Root { .. } => 0,
            Self::Nested { line_bottom, .. } => line_bottom,
        }
    }

    #[inline]
    pub const fn is_nested(self) -> bool {
        matches!(self, Self::Nested { .. })
    }
}

/// Insets applied around an element's content, resolved against its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxGeometry {
    pub content_left: usize,
    pub content_top: usize,
    /// Right-edge budget of the content box, exclusive.
    pub x_max: usize,
    /// Column of the first line's first cell.
    pub first_column: usize,
    /// Rows below the content: padding, border and margin bottoms.
    pub padding_bottom: usize,
    pub border_bottom: usize,
    pub margin_bottom: usize,
    /// Row at which content stops when this element's height is fixed.
    pub stop_row: Option<usize>,
    /// No line may start at or below this row: the own stop row or an ancestor's.
    pub limit_row: Option<usize>,
    pub border: Option<BorderBox>,
}

impl BoxGeometry {
    /// Apply width, margin, border, padding and indent in that order, starting at `cursor`.
    ///
    /// The first line starts at the cursor column; wrapped lines restart at the parent's
    /// content left edge shifted by the same left insets.
    pub fn compute(style: &ElementStyle, parent: ParentContext, cursor: Cursor) -> Self {
        let mut left = parent.origin_column();
        let mut start = cursor.column.max(left);
        let mut top = cursor.row;
        let mut x_max = parent.x_max();
        if style.width > 0 {
            x_max = x_max.min(start + style.width);
        }

        let mut margin_bottom = 0;
        if let Some(margin) = style.margin {
            left += margin.left;
            start += margin.left;
            top += margin.top;
            x_max = x_max.saturating_sub(margin.right);
            margin_bottom = margin.bottom;
        }

        let mut border_box = None;
        let mut border_bottom = 0;
        if let Some(border) = style.border {
            border_box = Some(BorderBox {
                top,
                left: start,
                right: x_max,
                widths: border,
            });
            left += border.left;
            start += border.left;
            top += border.top;
            x_max = x_max.saturating_sub(border.right);
            border_bottom = border.bottom;
        }

        let mut padding_bottom = 0;
        if let Some(padding) = style.padding {
            left += padding.left;
            start += padding.left;
            top += padding.top;
            x_max = x_max.saturating_sub(padding.right);
            padding_bottom = padding.bottom;
        }

        let first_column = start.saturating_add_signed(style.text_indent as isize);
        let stop_row = (style.height > 0).then_some(top + style.height);
        let limit_row = match (stop_row, parent.stop_row()) {
            (Some(own), Some(inherited)) => Some(own.min(inherited)),
            (own, inherited) => own.or(inherited),
        };
        Self {
            content_left: left,
            content_top: top,
            x_max,
            first_column,
            padding_bottom,
            border_bottom,
            margin_bottom,
            stop_row,
            limit_row,
            border: border_box,
        }
    }

    /// Context handed to this element's children, given the state of its current line.
    #[inline]
    pub const fn child_context(&self, line_open: bool, line_bottom: usize) -> ParentContext {
        ParentContext::Nested {
            content_left: self.content_left,
            x_max: self.x_max,
            stop_row: self.limit_row,
            line_open,
            line_bottom,
        }
    }

    /// Rows added under the content box.
    #[inline]
    pub const fn bottom_insets(&self) -> usize {
        self.padding_bottom + self.border_bottom + self.margin_bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::DEFAULT_LINE_HEIGHT;
    use tactile_style::{BoxModel, Declaration};

    fn style(raw: &[&str]) -> ElementStyle {
        let declarations: Vec<Declaration> = raw
            .iter()
            .filter_map(|item| Declaration::parse(item).ok())
            .collect();
        ElementStyle::resolve("div", &declarations, DEFAULT_LINE_HEIGHT)
    }

    #[test]
    fn insets_stack_margin_border_padding() {
        let geometry = BoxGeometry::compute(
            &style(&["margin: 0 0 0 2px", "border-left-width: 1", "padding: 0 0 0 1"]),
            ParentContext::Nested {
                content_left: 10,
                x_max: 100,
                stop_row: None,
                line_open: false,
                line_bottom: 0,
            },
            Cursor::new(10, 7),
        );
        assert_eq!(geometry.content_left, 14);
        assert_eq!(geometry.content_top, 7);
        assert_eq!(geometry.x_max, 100);
        assert_eq!(geometry.border.map(|border| border.left), Some(12));
    }

    #[test]
    fn width_clamps_before_right_insets() {
        let geometry = BoxGeometry::compute(
            &style(&["width: 30", "margin: 1 2", "padding: 0 1"]),
            ParentContext::Root { max_width: 120 },
            Cursor::default(),
        );
        assert_eq!(geometry.x_max, 30 - 2 - 1);
        assert_eq!(geometry.content_left, 3);
        assert_eq!(geometry.content_top, 1);
        assert_eq!(geometry.bottom_insets(), 1);
    }

    #[test]
    fn wider_width_does_not_grow_budget() {
        let geometry = BoxGeometry::compute(&style(&["width: 500"]), ParentContext::Root { max_width: 40 }, Cursor::default());
        assert_eq!(geometry.x_max, 40);
    }

    #[test]
    fn negative_indent_clamps_at_zero() {
        let geometry = BoxGeometry::compute(
            &style(&["margin: 0 0 0 2", "text-indent: -9"]),
            ParentContext::Root { max_width: 40 },
            Cursor::default(),
        );
        assert_eq!(geometry.first_column, 0);
        let indented = BoxGeometry::compute(&style(&["text-indent: 1em"]), ParentContext::Root { max_width: 40 }, Cursor::default());
        assert_eq!(indented.first_column, 3);
    }

    #[test]
    fn fixed_height_sets_stop_row() {
        let geometry = BoxGeometry::compute(&style(&["height: 10", "padding: 2"]), ParentContext::Root { max_width: 40 }, Cursor::new(0, 5));
        assert_eq!(geometry.content_top, 7);
        assert_eq!(geometry.stop_row, Some(17));
        assert_eq!(BoxGeometry::compute(&style(&[]), ParentContext::Root { max_width: 40 }, Cursor::new(0, 5)).stop_row, None);
    }

    #[test]
    fn border_box_records_outer_extent() {
        let geometry = BoxGeometry::compute(&style(&["margin: 1", "border-width: 1 2"]), ParentContext::Root { max_width: 20 }, Cursor::default());
        let border = geometry.border.unwrap_or(BorderBox {
            top: 0,
            left: 0,
            right: 0,
            widths: BoxModel::default(),
        });
        assert_eq!((border.top, border.left, border.right), (1, 1, 19));
        assert_eq!((geometry.content_left, geometry.content_top, geometry.x_max), (3, 2, 17));
        assert_eq!(geometry.border_bottom, 1);
    }

    #[test]
    fn inline_start_keeps_wrapped_lines_at_parent_edge() {
        let parent = ParentContext::Nested {
            content_left: 4,
            x_max: 60,
            stop_row: None,
            line_open: true,
            line_bottom: 15,
        };
        let geometry = BoxGeometry::compute(&style(&["margin: 0 0 0 1", "width: 9"]), parent, Cursor::new(13, 10));
        assert_eq!(geometry.first_column, 14);
        assert_eq!(geometry.content_left, 5);
        assert_eq!(geometry.content_top, 10);
        assert_eq!(geometry.x_max, 22);
    }

    #[test]
    fn limit_row_is_the_tighter_stop() {
        let nested = |stop_row| ParentContext::Nested {
            content_left: 0,
            x_max: 40,
            stop_row,
            line_open: false,
            line_bottom: 5,
        };
        let inherited = BoxGeometry::compute(&style(&[]), nested(Some(8)), Cursor::default());
        assert_eq!((inherited.stop_row, inherited.limit_row), (None, Some(8)));
        let own = BoxGeometry::compute(&style(&["height: 5"]), nested(Some(8)), Cursor::default());
        assert_eq!((own.stop_row, own.limit_row), (Some(5), Some(5)));
        let looser = BoxGeometry::compute(&style(&["height: 20"]), nested(Some(8)), Cursor::default());
        assert_eq!(looser.limit_row, Some(8));
        let child = own.child_context(true, 5);
        assert_eq!(child.stop_row(), Some(5));
        assert!(child.is_nested() && child.line_open());
        assert_eq!(child.line_bottom(), 5);
    }
}
