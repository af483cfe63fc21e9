use indexmap::IndexMap;
use tracing::debug;

use crate::core::{AxisRange, CoordinateMapper, ResolvedAxis, SpatialIndex};
use crate::error::PlotResult;
use crate::interaction::{HoverState, RubberBand};
use crate::render::Renderer;

use super::validation::validate_engine_config;
use super::{PlotEngine, PlotEngineConfig};

impl<R: Renderer> PlotEngine<R> {
    /// Creates an engine with no curves.
    ///
    /// Axis ranges start at `[0, 1]` and ticks are available immediately,
    /// before the first `refresh`.
    pub fn new(renderer: R, config: PlotEngineConfig) -> PlotResult<Self> {
        let config = validate_engine_config(config)?;
        let layout = config.layout;
        let index = SpatialIndex::covering(layout.plot_area(), config.bin_size_px)?
            .with_search(config.bin_search);
        let initial_axis = ResolvedAxis {
            range: AxisRange::default(),
            tick_count: config.bottom_tick_count,
            widened: false,
        };

        let mut engine = Self {
            renderer,
            mapper: CoordinateMapper::new(layout),
            x_axis: initial_axis,
            y_axis: initial_axis,
            bottom_ticks: Vec::new(),
            left_ticks: Vec::new(),
            index,
            index_dirty: true,
            hover: HoverState::default(),
            rubber_band: RubberBand::default(),
            curves: IndexMap::new(),
            config,
        };
        engine.update_scale()?;

        let (nx, ny) = engine.index.bin_counts();
        debug!(
            width = layout.canvas.width,
            height = layout.canvas.height,
            bins_x = nx,
            bins_y = ny,
            "plot engine initialized"
        );
        Ok(engine)
    }
}
