use crate::config::TactileConfig;
use log::{debug, info};
use tactile_document::{Document, NodeId};
use tactile_layout::{LayoutOptions, RenderError, Rendered, render};
use tactile_matrix::PinMatrix;
use tactile_style::StyleMap;
use tactile_translate::{TranslationBridge, TranslationError};

/// Renders documents onto pin matrices, reusing one translator across renders.
pub struct Renderer {
    options: LayoutOptions,
    bridge: TranslationBridge,
}

impl Renderer {
    /// Build a renderer with the translator engine selected by `config`.
    ///
    /// # Errors
    /// The engine runtime cannot be created. The translator itself starts on first use.
    pub fn new(config: &TactileConfig) -> Result<Self, TranslationError> {
        info!(
            target: "tactile",
            "renderer: width {}, translator {} ({:?})",
            config.max_width, config.translator.program, config.translator.mode
        );
        Ok(Self::with_bridge(config.layout_options(), config.translator.build_bridge()?))
    }

    /// Build a renderer over an existing bridge, e.g. one wrapping an in-process engine.
    pub fn with_bridge(options: LayoutOptions, bridge: TranslationBridge) -> Self {
        Self { options, bridge }
    }

    #[inline]
    pub const fn options(&self) -> LayoutOptions {
        self.options
    }

    /// Lay out the children of `root` and return the finished matrix.
    ///
    /// # Errors
    /// [`RenderError::Style`] for a malformed declaration and
    /// [`RenderError::TranslationFailed`] when the translator fails; nothing partial is
    /// returned in either case.
    pub fn render<D: Document + ?Sized>(
        &mut self,
        document: &D,
        root: NodeId,
        styles: &StyleMap,
    ) -> Result<PinMatrix, RenderError> {
        self.render_with_stats(document, root, styles)
            .map(|rendered| rendered.matrix)
    }

    /// Like [`Renderer::render`], also returning the render counters.
    ///
    /// # Errors
    /// See [`Renderer::render`].
    pub fn render_with_stats<D: Document + ?Sized>(
        &mut self,
        document: &D,
        root: NodeId,
        styles: &StyleMap,
    ) -> Result<Rendered, RenderError> {
        let rendered = render(document, root, styles, &mut self.bridge, self.options)?;
        debug!(
            target: "tactile",
            "{} laid out, {} skipped, {} hidden, {} height-locked, {} chunks",
            rendered.stats.elements_laid_out,
            rendered.stats.elements_skipped,
            rendered.stats.elements_hidden,
            rendered.stats.height_locked,
            rendered.stats.translation_chunks
        );
        Ok(rendered)
    }
}
