use serde::{Deserialize, Serialize};

use crate::core::layout::PlotLayout;
use crate::error::{PlotError, PlotResult};

/// Tick count forced on an axis whose data range collapsed to a point.
pub const DEGENERATE_AXIS_TICK_COUNT: usize = 3;

/// Raw screen values closer than this to an integer are treated as that integer
/// before truncation, so `real -> screen -> real -> screen` is stable.
const PIXEL_SNAP_TOLERANCE: f64 = 1e-6;

/// Closed real-valued interval along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl Default for AxisRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// Axis range after degenerate-span widening and user fixes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAxis {
    pub range: AxisRange,
    pub tick_count: usize,
    pub widened: bool,
}

impl AxisRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        (self.max - self.min).abs() <= f64::EPSILON
    }

    /// Widens a degenerate range by one unit on each side and forces the
    /// tick count to three, then applies the fixed bounds.
    pub fn resolve(
        self,
        axis: &'static str,
        fixed_min: Option<f64>,
        fixed_max: Option<f64>,
        tick_count: usize,
    ) -> PlotResult<ResolvedAxis> {
        let mut range = self;
        let mut tick_count = tick_count;
        let widened = range.is_degenerate();
        if widened {
            range.min -= 1.0;
            range.max += 1.0;
            tick_count = DEGENERATE_AXIS_TICK_COUNT;
        }

        if let Some(min) = fixed_min {
            range.min = min;
        }
        if let Some(max) = fixed_max {
            range.max = max;
        }

        if !range.min.is_finite() || !range.max.is_finite() || range.max <= range.min {
            return Err(PlotError::InvalidAxisRange {
                axis,
                min: range.min,
                max: range.max,
            });
        }

        Ok(ResolvedAxis {
            range,
            tick_count,
            widened,
        })
    }
}

/// Pixels per data unit along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactors {
    pub sfx: f64,
    pub sfy: f64,
}

impl Default for ScaleFactors {
    fn default() -> Self {
        Self { sfx: 1.0, sfy: 1.0 }
    }
}

/// Affine real <-> screen transform with integer truncation.
///
/// Screen y grows downwards, so larger real y values map to smaller rows.
/// Conversions to screen space truncate toward zero (not floor); negative
/// coordinates therefore round up. `to_real_*` is an exact inverse of the
/// affine part only, so a round trip is accurate to within one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateMapper {
    layout: PlotLayout,
    scale: ScaleFactors,
    x_min: f64,
    y_min: f64,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(layout: PlotLayout) -> Self {
        Self {
            layout,
            scale: ScaleFactors::default(),
            x_min: 0.0,
            y_min: 0.0,
        }
    }

    #[must_use]
    pub fn layout(&self) -> PlotLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: PlotLayout) {
        self.layout = layout;
    }

    #[must_use]
    pub fn scale(&self) -> ScaleFactors {
        self.scale
    }

    #[must_use]
    pub fn origin(&self) -> (f64, f64) {
        (self.x_min, self.y_min)
    }

    /// Fits both ranges into the usable layout area.
    ///
    /// With `equal_scale` both factors take the smaller value, keeping the
    /// aspect ratio and leaving part of the canvas unused.
    pub fn recompute_scale(
        &mut self,
        x_range: AxisRange,
        y_range: AxisRange,
        equal_scale: bool,
    ) -> PlotResult<ScaleFactors> {
        for (axis, range) in [("x", x_range), ("y", y_range)] {
            if !range.min.is_finite() || !range.max.is_finite() || range.span() <= 0.0 {
                return Err(PlotError::InvalidAxisRange {
                    axis,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        let mut sfx = self.layout.usable_width() / x_range.span();
        let mut sfy = self.layout.usable_height() / y_range.span();
        if equal_scale {
            let sf = sfx.min(sfy);
            sfx = sf;
            sfy = sf;
        }

        self.scale = ScaleFactors { sfx, sfy };
        self.x_min = x_range.min;
        self.y_min = y_range.min;
        Ok(self.scale)
    }

    #[must_use]
    pub fn to_screen_x(&self, x: f64) -> i32 {
        truncate_to_pixel(self.layout.data_origin_x() + self.scale.sfx * (x - self.x_min))
    }

    #[must_use]
    pub fn to_screen_y(&self, y: f64) -> i32 {
        truncate_to_pixel(
            self.layout.data_origin_y() + self.layout.usable_height()
                - self.scale.sfy * (y - self.y_min),
        )
    }

    #[must_use]
    pub fn to_screen(&self, x: f64, y: f64) -> (i32, i32) {
        (self.to_screen_x(x), self.to_screen_y(y))
    }

    #[must_use]
    pub fn to_real_x(&self, x_screen: f64) -> f64 {
        self.x_min + (x_screen - self.layout.data_origin_x()) / self.scale.sfx
    }

    #[must_use]
    pub fn to_real_y(&self, y_screen: f64) -> f64 {
        self.y_min
            + (self.layout.data_origin_y() + self.layout.usable_height() - y_screen)
                / self.scale.sfy
    }

    /// Converts a real length using the smaller scale factor.
    #[must_use]
    pub fn length_to_screen(&self, length: f64) -> i32 {
        truncate_to_pixel(self.scale.sfx.min(self.scale.sfy) * length)
    }
}

/// Truncates toward zero and saturates into `i32`; NaN maps to 0.
#[must_use]
pub fn truncate_to_pixel(value: f64) -> i32 {
    let nearest = value.round();
    if (value - nearest).abs() <= PIXEL_SNAP_TOLERANCE {
        return nearest as i32;
    }
    value.trunc() as i32
}
