use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, PlotLayout, ScaleFactors, ScreenRect};
use crate::interaction::HoverState;

/// Per-curve facts recorded in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSummary {
    pub samples: usize,
    pub contributes_to_range: bool,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSnapshot {
    pub layout: PlotLayout,
    pub plot_area: ScreenRect,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub scale: ScaleFactors,
    pub bottom_ticks: Vec<f64>,
    pub left_ticks: Vec<f64>,
    pub curves: IndexMap<String, CurveSummary>,
    pub bin_counts: (usize, usize),
    pub indexed_points: usize,
    pub hover: HoverState,
}
