use crate::core::{AxisRange, BinSearch, CoordinateMapper, ScreenRect, SpatialIndex};
use crate::interaction::{HoverState, RubberBand};
use crate::render::Renderer;

use super::{Curve, PlotEngine, PlotEngineConfig, SnapPayload};

impl<R: Renderer> PlotEngine<R> {
    #[must_use]
    pub fn config(&self) -> &PlotEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn curve(&self, name: &str) -> Option<&Curve> {
        self.curves.get(name)
    }

    /// Curve names in insertion order.
    pub fn curve_names(&self) -> impl Iterator<Item = &str> {
        self.curves.keys().map(String::as_str)
    }

    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    #[must_use]
    pub fn bottom_ticks(&self) -> &[f64] {
        &self.bottom_ticks
    }

    #[must_use]
    pub fn left_ticks(&self) -> &[f64] {
        &self.left_ticks
    }

    #[must_use]
    pub fn x_range(&self) -> AxisRange {
        self.x_axis.range
    }

    #[must_use]
    pub fn y_range(&self) -> AxisRange {
        self.y_axis.range
    }

    #[must_use]
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    #[must_use]
    pub fn plot_area(&self) -> ScreenRect {
        self.config.layout.plot_area()
    }

    #[must_use]
    pub fn hover_state(&self) -> &HoverState {
        &self.hover
    }

    #[must_use]
    pub fn rubber_band(&self) -> RubberBand {
        self.rubber_band
    }

    #[must_use]
    pub fn spatial_index(&self) -> &SpatialIndex<SnapPayload> {
        &self.index
    }

    #[must_use]
    pub fn bin_search(&self) -> BinSearch {
        self.index.search()
    }

    pub fn set_bin_search(&mut self, search: BinSearch) {
        self.config.bin_search = search;
        self.index.set_search(search);
    }
}
