use tracing::trace;

use crate::core::ScreenRect;
use crate::error::PlotResult;
use crate::render::Renderer;

use super::PlotEngine;

impl<R: Renderer> PlotEngine<R> {
    /// Handles pointer motion in canvas pixels.
    ///
    /// An active rubber band is stretched wherever the pointer is. Hover and
    /// snapping only react inside the plot area; moves outside it leave the
    /// hover state untouched and draw nothing.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> PlotResult<()> {
        let stretched = self.rubber_band.on_pointer_move(x, y);
        if !self.plot_area().contains(x, y) {
            trace!(x, y, "pointer outside plot area");
            if stretched {
                return self.render();
            }
            return Ok(());
        }

        self.prepare()?;
        self.update_hover(x, y);
        self.render()
    }

    /// Clears hover readout and snap selection.
    pub fn pointer_leave(&mut self) -> PlotResult<()> {
        self.hover.on_pointer_leave();
        self.render()
    }

    /// Starts a rubber-band drag anchored at `(x, y)`.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        trace!(x, y, "rubber band start");
        self.rubber_band.on_pointer_down(x, y);
    }

    /// Finishes the rubber-band drag, returning the selected rectangle.
    pub fn pointer_up(&mut self) -> PlotResult<Option<ScreenRect>> {
        let rect = self.rubber_band.on_pointer_up();
        if rect.is_some() {
            trace!(?rect, "rubber band finished");
            self.render()?;
        }
        Ok(rect)
    }

    /// Enables or disables point snapping.
    pub fn set_tracking(&mut self, tracking: bool) {
        self.config.tracking = tracking;
        if !tracking {
            self.hover.set_snap(None);
        }
    }

    pub(super) fn update_hover(&mut self, x: f64, y: f64) {
        let x_real = self.mapper.to_real_x(x);
        let y_real = self.mapper.to_real_y(y);
        self.hover.on_pointer_move(x, y, x_real, y_real);

        let snap = if self.config.tracking {
            self.snap_at(x, y)
        } else {
            None
        };
        trace!(x_real, y_real, snapped = snap.is_some(), "update hover");
        self.hover.set_snap(snap);
    }
}
