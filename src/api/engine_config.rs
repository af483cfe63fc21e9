use serde::{Deserialize, Serialize};

use crate::core::{BinSearch, CanvasSize, PlotLayout};
use crate::error::{PlotError, PlotResult};

/// Optional overrides for the data-derived axis bounds.
///
/// `None` keeps the bound computed from curve data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisFix {
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
}

impl AxisFix {
    #[must_use]
    pub fn x(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            x_min: min,
            x_max: max,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn y(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            y_min: min,
            y_max: max,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::default()
    }
}

/// Public plot bootstrap configuration.
///
/// Serializable so host applications can persist/load plot setup without an
/// ad-hoc format. Missing fields take the documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotEngineConfig {
    pub layout: PlotLayout,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Target tick divisions on the bottom (x) ruler.
    pub bottom_tick_count: usize,
    /// Target tick divisions on the left (y) ruler.
    pub left_tick_count: usize,
    /// Target edge length of one snap-index cell.
    pub bin_size_px: f64,
    /// Hover hits at or beyond this screen distance are not snapped.
    pub snap_radius_px: f64,
    pub bin_search: BinSearch,
    /// Enables point snapping (and the snap index).
    pub tracking: bool,
    /// Forces equal x/y scale factors.
    pub equal_scale: bool,
    pub axis_fix: AxisFix,
    pub grid: bool,
    /// Draws the snap-index cells and the hovered cell.
    pub show_bins: bool,
    pub tick_font_px: f64,
    pub label_font_px: f64,
    pub title_font_px: f64,
    pub tick_len_px: f64,
    pub marker_size_px: f64,
    /// Vertical offset of the snapped-point label above the point.
    pub snap_label_shift_px: f64,
}

impl Default for PlotEngineConfig {
    fn default() -> Self {
        Self {
            layout: PlotLayout::default(),
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            bottom_tick_count: 10,
            left_tick_count: 10,
            bin_size_px: 60.0,
            snap_radius_px: 10.0,
            bin_search: BinSearch::Local,
            tracking: true,
            equal_scale: false,
            axis_fix: AxisFix::default(),
            grid: true,
            show_bins: false,
            tick_font_px: 10.0,
            label_font_px: 12.0,
            title_font_px: 14.0,
            tick_len_px: 8.0,
            marker_size_px: 8.0,
            snap_label_shift_px: 12.0,
        }
    }
}

impl PlotEngineConfig {
    /// Creates a default config for the given canvas.
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            layout: PlotLayout::default().with_canvas(canvas),
            ..Self::default()
        }
    }

    /// Sets title and axis labels.
    #[must_use]
    pub fn with_labels(
        mut self,
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        self.title = title.into();
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Replaces ruler and legend geometry, keeping the canvas size.
    #[must_use]
    pub fn with_layout(mut self, layout: PlotLayout) -> Self {
        let canvas = self.layout.canvas;
        self.layout = layout.with_canvas(canvas);
        self
    }

    #[must_use]
    pub fn with_tick_counts(mut self, bottom: usize, left: usize) -> Self {
        self.bottom_tick_count = bottom;
        self.left_tick_count = left;
        self
    }

    #[must_use]
    pub fn with_bin_size_px(mut self, bin_size_px: f64) -> Self {
        self.bin_size_px = bin_size_px;
        self
    }

    #[must_use]
    pub fn with_snap_radius_px(mut self, snap_radius_px: f64) -> Self {
        self.snap_radius_px = snap_radius_px;
        self
    }

    #[must_use]
    pub fn with_bin_search(mut self, search: BinSearch) -> Self {
        self.bin_search = search;
        self
    }

    #[must_use]
    pub fn with_tracking(mut self, tracking: bool) -> Self {
        self.tracking = tracking;
        self
    }

    #[must_use]
    pub fn with_equal_scale(mut self, equal_scale: bool) -> Self {
        self.equal_scale = equal_scale;
        self
    }

    #[must_use]
    pub fn with_axis_fix(mut self, axis_fix: AxisFix) -> Self {
        self.axis_fix = axis_fix;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn with_show_bins(mut self, show_bins: bool) -> Self {
        self.show_bins = show_bins;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse config: {e}")))
    }
}
