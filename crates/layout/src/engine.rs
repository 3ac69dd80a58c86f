//! Recursive element layout over one render.

use crate::error::RenderError;
use crate::geometry::{BoxGeometry, Cursor, ParentContext};
use crate::style::{DEFAULT_LINE_HEIGHT, ElementRole, ElementStyle};
use crate::underline::UnderlineState;
use crate::wrap::{LineWriter, Placement, Word};
use log::{debug, trace};
use tactile_braille::numeral_code;
use tactile_document::{Document, NodeId, NodeKind};
use tactile_matrix::{DEFAULT_WIDTH, PinMatrix};
use tactile_style::StyleMap;
use tactile_translate::TranslationBridge;

/// Page-wide settings of a render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Page width in pins.
    pub max_width: usize,
    /// Line-height of elements that do not set one.
    pub line_height: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_WIDTH,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }
}

/// Counters collected during one render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub elements_laid_out: usize,
    /// Elements without a style map entry, subtree included.
    pub elements_skipped: usize,
    /// Elements with `display: none`.
    pub elements_hidden: usize,
    /// Elements whose content was cut by their fixed height.
    pub height_locked: usize,
    pub translation_chunks: usize,
}

/// Output of a render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub matrix: PinMatrix,
    pub stats: RenderStats,
}

/// Direct content of an element, in document order.
enum Segment {
    /// Consecutive text children, whitespace normalized.
    Run(String),
    /// A styled, visible element child.
    Child(NodeId, ElementStyle),
}

/// Where the parent goes on after a child element.
enum Flow {
    /// The child stopped mid-line: continue after its last cell.
    Inline {
        end: Cursor,
        line_used: bool,
        line_bottom: usize,
    },
    /// The child took a box of its own: continue on a fresh line at `bottom`.
    Block { bottom: usize },
}

impl Flow {
    /// First row free for a following block.
    const fn next_row(&self) -> usize {
        match *self {
            Self::Inline { line_bottom, .. } => line_bottom,
            Self::Block { bottom } => bottom,
        }
    }
}

/// Before/after cells added around an element's words.
struct Affixes {
    prefix: Word,
    suffix: Word,
    every_word: bool,
}

impl Affixes {
    fn wrap(&self, word: &str, first: bool, last: bool) -> Word {
        let mut cells = Word::new();
        if self.every_word || first {
            cells.extend_from_slice(&self.prefix);
        }
        cells.extend(word.chars());
        if self.every_word || last {
            cells.extend_from_slice(&self.suffix);
        }
        cells
    }
}

/// State of one render: the matrix being built, the bridge, and counters.
///
/// Nothing here outlives the render; a new context is built for every document.
pub struct RenderContext<'ctx, D: Document + ?Sized> {
    document: &'ctx D,
    styles: &'ctx StyleMap,
    bridge: &'ctx mut TranslationBridge,
    options: LayoutOptions,
    matrix: PinMatrix,
    stats: RenderStats,
    chunks_at_start: usize,
}

impl<'ctx, D: Document + ?Sized> RenderContext<'ctx, D> {
    pub fn new(
        document: &'ctx D,
        styles: &'ctx StyleMap,
        bridge: &'ctx mut TranslationBridge,
        options: LayoutOptions,
    ) -> Self {
        let chunks_at_start = bridge.chunks_sent();
        Self {
            document,
            styles,
            bridge,
            options,
            matrix: PinMatrix::new(options.max_width),
            stats: RenderStats::default(),
            chunks_at_start,
        }
    }

    /// Lay out every element child of `root` from the top-left corner of the page.
    ///
    /// # Errors
    /// Malformed declarations and translation failures abort the render.
    pub fn render_root(&mut self, root: NodeId) -> Result<(), RenderError> {
        let document = self.document;
        let parent = ParentContext::Root {
            max_width: self.options.max_width,
        };
        let mut row = 0;
        for &child in document.children(root) {
            match document.kind(child) {
                Some(NodeKind::Element(_)) => {
                    if let Some(style) = self.visible_style(child)? {
                        row = self
                            .layout_element(child, &style, parent, Cursor::new(0, row))?
                            .next_row();
                    }
                }
                Some(NodeKind::Text(text)) => {
                    trace!(target: "tactile_layout", "dropping text outside any element: {text:?}");
                }
                Some(NodeKind::Document) | None => {}
            }
        }
        Ok(())
    }

    pub fn finish(mut self) -> Rendered {
        self.stats.translation_chunks = self.bridge.chunks_sent().saturating_sub(self.chunks_at_start);
        debug!(target: "tactile_layout", "render finished: {} rows, {:?}", self.matrix.height(), self.stats);
        Rendered {
            matrix: self.matrix,
            stats: self.stats,
        }
    }

    /// Style of an element, or `None` when it is unstyled or hidden.
    fn visible_style(&mut self, node: NodeId) -> Result<Option<ElementStyle>, RenderError> {
        let document = self.document;
        let Some(tag) = document.tag_name(node) else {
            return Ok(None);
        };
        let Some(declarations) = self.styles.declarations(tag) else {
            debug!(target: "tactile_layout", "no style for <{tag}>, skipping subtree");
            self.stats.elements_skipped += 1;
            return Ok(None);
        };
        let style = ElementStyle::resolve(tag, &declarations?, self.options.line_height);
        if !style.visible {
            trace!(target: "tactile_layout", "<{tag}> is display:none");
            self.stats.elements_hidden += 1;
            return Ok(None);
        }
        Ok(Some(style))
    }

    /// Lay out one element starting at `cursor` and report where its parent continues.
    ///
    /// Top-level elements always take a box of their own. Nested elements without vertical
    /// insets, fixed height or list-item role continue their parent's line.
    fn layout_element(
        &mut self,
        node: NodeId,
        style: &ElementStyle,
        parent: ParentContext,
        cursor: Cursor,
    ) -> Result<Flow, RenderError> {
        self.stats.elements_laid_out += 1;
        let inline = parent.is_nested() && style.flows_inline();
        let geometry = BoxGeometry::compute(style, parent, cursor);
        let line_height = style.effective_line_height();
        debug!(
            target: "tactile_layout",
            "<{}> content at row {} column {}, x_max {}, line height {line_height}{}",
            style.selector,
            geometry.content_top,
            geometry.first_column,
            geometry.x_max,
            if inline { ", inline" } else { "" }
        );
        self.matrix.grow_to(geometry.content_top + line_height);

        let mut writer = LineWriter::new(
            geometry.content_left,
            geometry.first_column,
            geometry.x_max,
            geometry.content_top,
            line_height,
        )
        .with_stop_row(geometry.limit_row)
        .with_underline(UnderlineState::for_style(style.underline));
        if inline {
            writer = writer.with_open_line(parent.line_open(), parent.line_bottom());
        }

        let segments = self.segments(node)?;
        let affixes = self.affixes(node, style);
        let is_run = |segment: &Segment| matches!(segment, Segment::Run(_));
        let first_run = segments.iter().position(is_run);
        let last_run = segments.iter().rposition(is_run);
        if first_run.is_none() {
            writer.place_word(&mut self.matrix, &affixes.prefix);
        }

        for (index, segment) in segments.into_iter().enumerate() {
            if writer.is_locked() {
                break;
            }
            match segment {
                Segment::Run(text) => {
                    let translated = self.bridge.translate(&text)?;
                    let words: Vec<&str> = translated.split(' ').filter(|word| !word.is_empty()).collect();
                    let count = words.len();
                    for (position, word) in words.into_iter().enumerate() {
                        let first = Some(index) == first_run && position == 0;
                        let last = Some(index) == last_run && position + 1 == count;
                        let cells = affixes.wrap(word, first, last);
                        if writer.place_word(&mut self.matrix, &cells) == Placement::Locked {
                            break;
                        }
                    }
                }
                Segment::Child(child, child_style) => {
                    let child_inline = child_style.flows_inline();
                    if !child_inline && writer.is_line_used() && !writer.break_line(&mut self.matrix) {
                        break;
                    }
                    let column = if child_inline && writer.is_line_used() {
                        writer.pen()
                    } else {
                        geometry.content_left
                    };
                    let context = geometry.child_context(writer.is_line_used(), writer.line_bottom());
                    let child_cursor = Cursor::new(column, writer.line_top());
                    match self.layout_element(child, &child_style, context, child_cursor)? {
                        Flow::Inline {
                            end,
                            line_used,
                            line_bottom,
                        } => writer.continue_line(end, line_used, line_bottom),
                        Flow::Block { bottom } => writer.resume_at(bottom),
                    }
                }
            }
        }
        if last_run.is_none() {
            writer.place_word(&mut self.matrix, &affixes.suffix);
        }
        if writer.is_locked() {
            debug!(target: "tactile_layout", "<{}> reached its fixed height", style.selector);
            self.stats.height_locked += 1;
        }

        if inline {
            return Ok(Flow::Inline {
                end: Cursor::new(writer.pen(), writer.line_top()),
                line_used: writer.is_line_used(),
                line_bottom: writer.line_bottom(),
            });
        }

        let content_bottom = geometry.stop_row.unwrap_or_else(|| {
            writer.content_bottom(geometry.content_top, style.role == ElementRole::ListItem)
        });
        let bottom = content_bottom + geometry.bottom_insets();
        self.matrix.grow_to(bottom);
        if let Some(border) = geometry.border {
            border.draw(
                &mut self.matrix,
                content_bottom + geometry.padding_bottom + geometry.border_bottom,
            );
        }
        Ok(Flow::Block { bottom })
    }

    /// Split the children of `node` into text runs and styled child elements.
    ///
    /// Unstyled and hidden children vanish without separating the text around them.
    fn segments(&mut self, node: NodeId) -> Result<Vec<Segment>, RenderError> {
        let document = self.document;
        let mut segments = Vec::new();
        let mut pending = String::new();
        for &child in document.children(node) {
            match document.kind(child) {
                Some(NodeKind::Text(text)) => pending.push_str(text),
                Some(NodeKind::Element(_)) => {
                    if let Some(style) = self.visible_style(child)? {
                        flush_run(&mut pending, &mut segments);
                        segments.push(Segment::Child(child, style));
                    }
                }
                Some(NodeKind::Document) | None => {}
            }
        }
        flush_run(&mut pending, &mut segments);
        Ok(segments)
    }

    fn affixes(&self, node: NodeId, style: &ElementStyle) -> Affixes {
        let mut prefix: Word = style.before.as_deref().unwrap_or_default().chars().collect();
        if style.role == ElementRole::ListItem && self.in_ordered_list(node) {
            let position = self.document.element_index(node).map_or(0, |index| index + 1);
            prefix.push(numeral_code(position));
        }
        Affixes {
            prefix,
            suffix: style.after.as_deref().unwrap_or_default().chars().collect(),
            every_word: style.role == ElementRole::Bold,
        }
    }

    fn in_ordered_list(&self, node: NodeId) -> bool {
        self.document
            .parent(node)
            .and_then(|parent| self.document.tag_name(parent))
            == Some("ol")
    }
}

fn flush_run(pending: &mut String, segments: &mut Vec<Segment>) {
    if !pending.trim().is_empty() {
        let text = pending.replace(['\n', '\r', '\t'], " ");
        segments.push(Segment::Run(text));
    }
    pending.clear();
}

/// Render the children of `root` into a fresh matrix.
///
/// # Errors
/// See [`RenderContext::render_root`].
pub fn render<D: Document + ?Sized>(
    document: &D,
    root: NodeId,
    styles: &StyleMap,
    bridge: &mut TranslationBridge,
    options: LayoutOptions,
) -> Result<Rendered, RenderError> {
    let mut context = RenderContext::new(document, styles, bridge, options);
    context.render_root(root)?;
    Ok(context.finish())
}
