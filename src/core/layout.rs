use serde::{Deserialize, Serialize};

use crate::core::types::{CanvasSize, ScreenRect};
use crate::error::{PlotError, PlotResult};

/// Canvas size plus the fixed ruler/legend thicknesses around the plot area.
///
/// All offsets are in screen pixels relative to the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotLayout {
    pub canvas: CanvasSize,
    pub left_ruler_px: f64,
    pub right_ruler_px: f64,
    pub bottom_ruler_px: f64,
    pub top_ruler_px: f64,
    /// Horizontal gap between the plot-area border and the first data pixel.
    pub border_inset_h_px: f64,
    /// Vertical gap between the plot-area border and the first data pixel.
    pub border_inset_v_px: f64,
    pub legend_at_bottom: bool,
    pub legend_height_px: f64,
    pub legend_width_px: f64,
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            left_ruler_px: 40.0,
            right_ruler_px: 5.0,
            bottom_ruler_px: 20.0,
            top_ruler_px: 18.0,
            border_inset_h_px: 6.0,
            border_inset_v_px: 6.0,
            legend_at_bottom: true,
            legend_height_px: 30.0,
            legend_width_px: 0.0,
        }
    }
}

impl PlotLayout {
    #[must_use]
    pub fn with_canvas(mut self, canvas: CanvasSize) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn validate(self) -> PlotResult<Self> {
        if !self.canvas.is_valid() {
            return Err(PlotError::InvalidCanvas {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }

        for (name, value) in [
            ("left_ruler_px", self.left_ruler_px),
            ("right_ruler_px", self.right_ruler_px),
            ("bottom_ruler_px", self.bottom_ruler_px),
            ("top_ruler_px", self.top_ruler_px),
            ("border_inset_h_px", self.border_inset_h_px),
            ("border_inset_v_px", self.border_inset_v_px),
            ("legend_height_px", self.legend_height_px),
            ("legend_width_px", self.legend_width_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "layout `{name}` must be finite and >= 0"
                )));
            }
        }

        if self.usable_width() <= 0.0 || self.usable_height() <= 0.0 {
            return Err(PlotError::InvalidCanvas {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }

        Ok(self)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        f64::from(self.canvas.width)
    }

    #[must_use]
    pub fn height(self) -> f64 {
        f64::from(self.canvas.height)
    }

    /// Total horizontal space taken by rulers (and a right-hand legend).
    #[must_use]
    pub fn h_pad(self) -> f64 {
        let legend = if self.legend_at_bottom {
            0.0
        } else {
            self.legend_width_px
        };
        self.left_ruler_px + self.right_ruler_px + legend
    }

    /// Total vertical space taken by rulers (and a bottom legend).
    #[must_use]
    pub fn v_pad(self) -> f64 {
        let legend = if self.legend_at_bottom {
            self.legend_height_px
        } else {
            0.0
        };
        self.bottom_ruler_px + self.top_ruler_px + legend
    }

    #[must_use]
    pub fn area_h_pad(self) -> f64 {
        self.h_pad() + 2.0 + 2.0 * self.border_inset_h_px
    }

    #[must_use]
    pub fn area_v_pad(self) -> f64 {
        self.v_pad() + 2.0 + 2.0 * self.border_inset_v_px
    }

    /// Width available to data after rulers, borders and insets.
    #[must_use]
    pub fn usable_width(self) -> f64 {
        self.width() - self.area_h_pad()
    }

    /// Height available to data after rulers, borders and insets.
    #[must_use]
    pub fn usable_height(self) -> f64 {
        self.height() - self.area_v_pad()
    }

    /// Screen x of the first data pixel column.
    #[must_use]
    pub fn data_origin_x(self) -> f64 {
        1.0 + self.left_ruler_px + self.border_inset_h_px
    }

    /// Screen y of the first data pixel row (top of the data region).
    #[must_use]
    pub fn data_origin_y(self) -> f64 {
        1.0 + self.top_ruler_px + self.border_inset_v_px
    }

    /// Framed plot area between the rulers.
    #[must_use]
    pub fn plot_area(self) -> ScreenRect {
        ScreenRect::new(
            self.left_ruler_px,
            self.top_ruler_px,
            self.width() - self.h_pad(),
            self.height() - self.v_pad(),
        )
    }
}
