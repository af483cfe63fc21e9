use indexmap::IndexMap;
use tracing::trace;

use crate::core::{CoordinateMapper, ResolvedAxis, SpatialIndex};
use crate::error::PlotResult;
use crate::interaction::{HoverState, RubberBand};
use crate::render::Renderer;

use super::{Curve, PlotEngineConfig, SnapPayload};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `PlotEngine` owns the curves, derives axis ranges, ticks and the
/// real/screen mapping from them, keeps the hover snap index in sync and
/// hands materialized frames to the renderer.
pub struct PlotEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: PlotEngineConfig,
    pub(super) curves: IndexMap<String, Curve>,
    pub(super) mapper: CoordinateMapper,
    pub(super) x_axis: ResolvedAxis,
    pub(super) y_axis: ResolvedAxis,
    pub(super) bottom_ticks: Vec<f64>,
    pub(super) left_ticks: Vec<f64>,
    pub(super) index: SpatialIndex<SnapPayload>,
    /// Set whenever curve data or the mapping changed since the last rebuild.
    pub(super) index_dirty: bool,
    pub(super) hover: HoverState,
    pub(super) rubber_band: RubberBand,
}

impl<R: Renderer> PlotEngine<R> {
    /// Recomputes scales, ticks and the snap index, then draws a frame.
    pub fn refresh(&mut self) -> PlotResult<()> {
        self.prepare()?;
        if self.hover.visible {
            let (x, y) = (self.hover.pointer_x, self.hover.pointer_y);
            self.update_hover(x, y);
        }
        self.render()
    }

    pub(super) fn prepare(&mut self) -> PlotResult<()> {
        self.update_scale()?;
        self.rebuild_index_if_needed();
        Ok(())
    }

    pub(super) fn render(&mut self) -> PlotResult<()> {
        let frame = self.build_render_frame();
        trace!(
            rects = frame.rects.len(),
            lines = frame.lines.len(),
            circles = frame.circles.len(),
            texts = frame.texts.len(),
            "render plot frame"
        );
        self.renderer.render(&frame)
    }

    /// Renders the current state into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> PlotResult<()>
    where
        R: CairoContextRenderer,
    {
        self.prepare()?;
        let frame = self.build_render_frame();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
