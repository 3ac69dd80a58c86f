//! Per-element style records built from the style map.

use log::{debug, warn};
use tactile_braille::CELL_ROWS;
use tactile_style::{Axis, BorderStyle, BoxModel, Declaration, Length, Pseudo, Side, expand_shorthand};

/// Rows per line when nothing says otherwise: one cell plus a spacer row.
pub const DEFAULT_LINE_HEIGHT: usize = 5;

/// Minimum line-height while a single, dashed, or dotted underline is active.
pub const UNDERLINED_LINE_HEIGHT: usize = 6;

/// Minimum line-height for a double underline.
pub const DOUBLE_UNDERLINED_LINE_HEIGHT: usize = 5;

/// How an element's tag affects before/after placement and line breaking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ElementRole {
    /// `b`, `strong`: before/after go around every word.
    Bold,
    /// `u`, `ins`.
    Underline,
    /// `li` or `display: list-item`: numbered inside `ol`, always ends its line.
    ListItem,
    #[default]
    Other,
}

impl ElementRole {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "b" | "strong" => Self::Bold,
            "u" | "ins" => Self::Underline,
            "li" => Self::ListItem,
            _ => Self::Other,
        }
    }
}

/// Resolved style of one element visit. Built fresh every time, never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementStyle {
    pub selector: String,
    pub margin: Option<BoxModel>,
    pub border: Option<BoxModel>,
    pub padding: Option<BoxModel>,
    pub underline: BorderStyle,
    /// Columns, first line only. May be negative.
    pub text_indent: i32,
    /// Columns; zero means auto.
    pub width: usize,
    /// Rows; zero means auto.
    pub height: usize,
    pub line_height: usize,
    pub before: Option<String>,
    pub after: Option<String>,
    pub visible: bool,
    pub role: ElementRole,
}

impl ElementStyle {
    fn new(selector: &str, line_height: usize) -> Self {
        Self {
            selector: selector.to_owned(),
            margin: None,
            border: None,
            padding: None,
            underline: BorderStyle::None,
            text_indent: 0,
            width: 0,
            height: 0,
            line_height,
            before: None,
            after: None,
            visible: true,
            role: ElementRole::from_tag(selector),
        }
    }

    /// Build the style of `selector` from its declarations.
    ///
    /// `line-height` is read first since `em` lengths of every other property depend on it.
    pub fn resolve(selector: &str, declarations: &[Declaration], default_line_height: usize) -> Self {
        let mut style = Self::new(selector, default_line_height);

        for declaration in declarations {
            if declaration.pseudo.is_none() && declaration.property == "line-height" {
                let resolved = style
                    .length(declaration)
                    .resolve_unsigned(Axis::Vertical, default_line_height);
                style.line_height = resolved.max(CELL_ROWS);
            }
        }

        for declaration in declarations {
            style.apply(declaration);
        }
        style
    }

    /// Line-height after underline adjustments.
    pub fn effective_line_height(&self) -> usize {
        match self.underline {
            BorderStyle::None => self.line_height,
            BorderStyle::Double => self.line_height.max(DOUBLE_UNDERLINED_LINE_HEIGHT),
            BorderStyle::Solid | BorderStyle::Dotted | BorderStyle::Dashed => {
                self.line_height.max(UNDERLINED_LINE_HEIGHT)
            }
        }
    }

    /// Whether the element continues its parent's line instead of starting one of its own.
    ///
    /// List items, fixed heights, rendered borders and vertical margin or padding all need a
    /// box of their own; horizontal insets do not.
    pub fn flows_inline(&self) -> bool {
        let vertical = |inset: Option<&BoxModel>| inset.map_or(0, BoxModel::vertical);
        self.role != ElementRole::ListItem
            && self.height == 0
            && !self.border.as_ref().is_some_and(BoxModel::has_border)
            && vertical(self.margin.as_ref()) == 0
            && vertical(self.padding.as_ref()) == 0
    }

    fn apply(&mut self, declaration: &Declaration) {
        if let Some(pseudo) = declaration.pseudo {
            if declaration.property == "content" {
                let content = declaration.unquoted_value().to_owned();
                match pseudo {
                    Pseudo::Before => self.before = Some(content),
                    Pseudo::After => self.after = Some(content),
                }
            } else {
                debug!(target: "tactile_layout", "{}: ignoring {pseudo:?} property {:?}", self.selector, declaration.property);
            }
            return;
        }

        match declaration.property.as_str() {
            "line-height" => {}
            "margin" => self.margin = self.box_shorthand(declaration),
            "padding" => self.padding = self.box_shorthand(declaration),
            "border-width" => {
                self.border = self.box_shorthand(declaration).map(BoxModel::as_border);
            }
            "border-top-width" => self.border_side(declaration, Side::Top),
            "border-right-width" => self.border_side(declaration, Side::Right),
            "border-bottom-width" => self.border_side(declaration, Side::Bottom),
            "border-left-width" => self.border_side(declaration, Side::Left),
            "border-bottom-style" => match BorderStyle::from_keyword(&declaration.value) {
                Some(style) => self.underline = style,
                None => warn!(target: "tactile_layout", "{}: unknown border-bottom-style {:?}", self.selector, declaration.value),
            },
            "text-indent" => {
                self.text_indent = self.length(declaration).resolve(Axis::Horizontal, self.line_height);
            }
            "height" => {
                self.height = self
                    .length(declaration)
                    .resolve_unsigned(Axis::Vertical, self.line_height);
            }
            "width" => {
                self.width = self
                    .length(declaration)
                    .resolve_unsigned(Axis::Horizontal, self.line_height);
            }
            "display" => match declaration.value.to_ascii_lowercase().as_str() {
                "none" => self.visible = false,
                "list-item" => self.role = ElementRole::ListItem,
                _ => {}
            },
            other => debug!(target: "tactile_layout", "{}: ignoring property {other:?}", self.selector),
        }
    }

    /// A single length; unparsable values count as zero.
    fn length(&self, declaration: &Declaration) -> Length {
        Length::parse(&declaration.value).unwrap_or_else(|err| {
            warn!(target: "tactile_layout", "{}: {err}, using 0", self.selector);
            Length::ZERO
        })
    }

    fn box_shorthand(&self, declaration: &Declaration) -> Option<BoxModel> {
        let lengths: Vec<Length> = declaration
            .value
            .split_whitespace()
            .map(|token| {
                Length::parse(token).unwrap_or_else(|err| {
                    warn!(target: "tactile_layout", "{}: {err}, using 0", self.selector);
                    Length::ZERO
                })
            })
            .collect();
        let Some([top, right, bottom, left]) = expand_shorthand(&lengths) else {
            warn!(target: "tactile_layout", "{}: {} expects 1 to 4 values, got {:?}", self.selector, declaration.property, declaration.value);
            return None;
        };
        let vertical = |length: Length| length.resolve_unsigned(Axis::Vertical, self.line_height);
        let horizontal = |length: Length| length.resolve_unsigned(Axis::Horizontal, self.line_height);
        Some(BoxModel::new(
            vertical(top),
            horizontal(right),
            vertical(bottom),
            horizontal(left),
        ))
    }

    fn border_side(&mut self, declaration: &Declaration, side: Side) {
        let axis = match side {
            Side::Top | Side::Bottom => Axis::Vertical,
            Side::Left | Side::Right => Axis::Horizontal,
        };
        let width = self.length(declaration).resolve_unsigned(axis, self.line_height);
        self.border
            .get_or_insert_with(BoxModel::default)
            .set_border_side(side, width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(selector: &str, raw: &[&str]) -> ElementStyle {
        let declarations: Vec<Declaration> = raw
            .iter()
            .filter_map(|item| Declaration::parse(item).ok())
            .collect();
        ElementStyle::resolve(selector, &declarations, DEFAULT_LINE_HEIGHT)
    }

    #[test]
    fn line_height_is_read_before_em_lengths() {
        let style = resolve("p", &["margin: 1em 1em", "line-height: 8px"]);
        assert_eq!(style.line_height, 8);
        assert_eq!(style.margin, Some(BoxModel::new(8, 3, 8, 3)));
    }

    #[test]
    fn line_height_never_drops_below_a_cell() {
        assert_eq!(resolve("p", &["line-height: 2"]).line_height, CELL_ROWS);
    }

    #[test]
    fn absent_boxes_stay_absent() {
        let style = resolve("p", &["text-indent: 2em"]);
        assert_eq!(style.margin, None);
        assert_eq!(style.border, None);
        assert_eq!(style.padding, None);
        assert_eq!(style.text_indent, 6);
    }

    #[test]
    fn zero_margin_is_still_present() {
        assert_eq!(resolve("p", &["margin: 0"]).margin, Some(BoxModel::default()));
    }

    #[test]
    fn border_longhands_build_a_border_box() {
        let style = resolve("div", &["border-left-width: 2px", "border-top-width: 1"]);
        assert!(style.border.is_some());
        let border = style.border.unwrap_or_default();
        assert_eq!((border.top, border.right, border.bottom, border.left), (1, 0, 0, 2));
        assert!(border.border_left && border.border_top && !border.border_right);
    }

    #[test]
    fn roles_come_from_tag_and_display() {
        assert_eq!(resolve("strong", &[]).role, ElementRole::Bold);
        assert_eq!(resolve("ins", &[]).role, ElementRole::Underline);
        assert_eq!(resolve("li", &[]).role, ElementRole::ListItem);
        assert_eq!(resolve("dt", &["display: list-item"]).role, ElementRole::ListItem);
        assert!(!resolve("p", &["display: none"]).visible);
    }

    #[test]
    fn pseudo_content_is_unquoted() {
        let style = resolve("li", &["before|content: \"•\"", "after|content: ';'"]);
        assert_eq!(style.before.as_deref(), Some("•"));
        assert_eq!(style.after.as_deref(), Some(";"));
    }

    #[test]
    fn underline_raises_line_height() {
        assert_eq!(resolve("u", &["border-bottom-style: dotted"]).effective_line_height(), 6);
        assert_eq!(resolve("u", &["border-bottom-style: double"]).effective_line_height(), 5);
        assert_eq!(
            resolve("u", &["border-bottom-style: solid", "line-height: 9"]).effective_line_height(),
            9
        );
        assert_eq!(resolve("p", &[]).effective_line_height(), DEFAULT_LINE_HEIGHT);
    }

    #[test]
    fn invalid_lengths_count_as_zero() {
        let style = resolve("p", &["width: auto", "height: 12"]);
        assert_eq!(style.width, 0);
        assert_eq!(style.height, 12);
    }

    #[test]
    fn only_unboxed_elements_flow_inline() {
        assert!(resolve("b", &[]).flows_inline());
        assert!(resolve("span", &["margin: 0 2", "padding: 0 1", "border-width: 0"]).flows_inline());
        assert!(!resolve("li", &[]).flows_inline());
        assert!(!resolve("dt", &["display: list-item"]).flows_inline());
        assert!(!resolve("p", &["margin: 1 0 0"]).flows_inline());
        assert!(!resolve("p", &["padding: 0 0 1"]).flows_inline());
        assert!(!resolve("span", &["border-left-width: 1"]).flows_inline());
        assert!(!resolve("div", &["height: 10"]).flows_inline());
    }
}
