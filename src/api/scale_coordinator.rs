use tracing::{debug, trace};

use crate::core::{AxisRange, CanvasSize, CoordinateMapper, SpatialIndex, plan_ticks};
use crate::error::PlotResult;
use crate::render::Renderer;

use super::validation::{validate_axis_fix, validate_engine_config};
use super::{AxisFix, PlotEngine};

impl<R: Renderer> PlotEngine<R> {
    /// Pins any subset of the axis bounds; `None` entries follow the data.
    pub fn set_axis_fix(&mut self, fix: AxisFix) -> PlotResult<()> {
        let fix = validate_axis_fix(fix)?;
        let previous = self.config.axis_fix;
        self.config.axis_fix = fix;
        if let Err(err) = self.update_scale() {
            self.config.axis_fix = previous;
            return Err(err);
        }
        self.index_dirty = true;
        Ok(())
    }

    pub fn set_equal_scale(&mut self, equal_scale: bool) -> PlotResult<()> {
        if self.config.equal_scale == equal_scale {
            return Ok(());
        }
        self.config.equal_scale = equal_scale;
        self.update_scale()
    }

    /// Adopts a new canvas size and rebuilds the snap index geometry.
    pub fn resize(&mut self, canvas: CanvasSize) -> PlotResult<()> {
        let mut config = self.config.clone();
        config.layout = config.layout.with_canvas(canvas);
        let config = validate_engine_config(config)?;
        let index = SpatialIndex::covering(config.layout.plot_area(), config.bin_size_px)?
            .with_search(config.bin_search);

        debug!(
            width = canvas.width,
            height = canvas.height,
            "resize plot canvas"
        );
        self.mapper = CoordinateMapper::new(config.layout);
        self.config = config;
        self.index = index;
        self.index_dirty = true;
        self.hover.on_pointer_leave();
        self.rubber_band = Default::default();
        self.update_scale()
    }

    /// Derives axis ranges from the data, applies fixes, refits the mapper
    /// and replans ticks.
    pub(super) fn update_scale(&mut self) -> PlotResult<()> {
        let (x_data, y_data) = self.data_ranges();
        let fix = self.config.axis_fix;
        let x_axis = x_data.resolve("x", fix.x_min, fix.x_max, self.config.bottom_tick_count)?;
        let y_axis = y_data.resolve("y", fix.y_min, fix.y_max, self.config.left_tick_count)?;

        let bottom = plan_ticks(x_axis.range.min, x_axis.range.max, x_axis.tick_count)?;
        let left = plan_ticks(y_axis.range.min, y_axis.range.max, y_axis.tick_count)?;

        let previous = self.mapper;
        self.mapper
            .recompute_scale(x_axis.range, y_axis.range, self.config.equal_scale)?;
        if self.mapper != previous {
            self.index_dirty = true;
        }

        trace!(
            x_min = x_axis.range.min,
            x_max = x_axis.range.max,
            y_min = y_axis.range.min,
            y_max = y_axis.range.max,
            x_unit = bottom.unit,
            y_unit = left.unit,
            "update plot scale"
        );
        self.x_axis = x_axis;
        self.y_axis = y_axis;
        self.bottom_ticks = bottom.ticks;
        self.left_ticks = left.ticks;
        Ok(())
    }

    /// Bounding ranges over curves with at least two samples, `[0, 1]` when
    /// none qualify.
    fn data_ranges(&self) -> (AxisRange, AxisRange) {
        let mut bounds: Option<(AxisRange, AxisRange)> = None;
        for curve in self.curves.values().filter(|curve| curve.contributes_to_range()) {
            for (x, y) in curve.points() {
                let (xr, yr) = bounds.get_or_insert((AxisRange::new(x, x), AxisRange::new(y, y)));
                xr.min = xr.min.min(x);
                xr.max = xr.max.max(x);
                yr.min = yr.min.min(y);
                yr.max = yr.max.max(y);
            }
        }
        bounds.unwrap_or_default()
    }
}
