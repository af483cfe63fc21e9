use crate::error::{PlotError, PlotResult};

use super::{AxisFix, PlotEngineConfig};

pub(super) fn validate_engine_config(config: PlotEngineConfig) -> PlotResult<PlotEngineConfig> {
    config.layout.validate()?;

    if config.bottom_tick_count == 0 || config.left_tick_count == 0 {
        return Err(PlotError::InvalidData(
            "tick counts must be >= 1".to_owned(),
        ));
    }

    if !config.snap_radius_px.is_finite() || config.snap_radius_px < 0.0 {
        return Err(PlotError::InvalidData(
            "snap radius must be finite and >= 0".to_owned(),
        ));
    }

    for (name, value) in [
        ("bin_size_px", config.bin_size_px),
        ("tick_font_px", config.tick_font_px),
        ("label_font_px", config.label_font_px),
        ("title_font_px", config.title_font_px),
        ("tick_len_px", config.tick_len_px),
        ("marker_size_px", config.marker_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(PlotError::InvalidData(format!(
                "`{name}` must be finite and > 0"
            )));
        }
    }

    if !config.snap_label_shift_px.is_finite() {
        return Err(PlotError::InvalidData(
            "snap label shift must be finite".to_owned(),
        ));
    }

    validate_axis_fix(config.axis_fix)?;
    Ok(config)
}

pub(super) fn validate_axis_fix(fix: AxisFix) -> PlotResult<AxisFix> {
    for (name, value) in [
        ("x_min", fix.x_min),
        ("x_max", fix.x_max),
        ("y_min", fix.y_min),
        ("y_max", fix.y_max),
    ] {
        if let Some(value) = value {
            if !value.is_finite() {
                return Err(PlotError::InvalidData(format!(
                    "axis fix `{name}` must be finite"
                )));
            }
        }
    }

    for (axis, min, max) in [("x", fix.x_min, fix.x_max), ("y", fix.y_min, fix.y_max)] {
        if let (Some(min), Some(max)) = (min, max) {
            if max <= min {
                return Err(PlotError::InvalidAxisRange { axis, min, max });
            }
        }
    }

    Ok(fix)
}

/// Checks parallel x/y sequences before they reach the plot.
pub(super) fn validate_curve_data(name: &str, xs: &[f64], ys: &[f64]) -> PlotResult<()> {
    if xs.len() != ys.len() {
        return Err(PlotError::CurveLengthMismatch {
            name: name.to_owned(),
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }

    if xs.iter().chain(ys).any(|value| !value.is_finite()) {
        return Err(PlotError::InvalidData(format!(
            "curve `{name}` contains non-finite values"
        )));
    }

    Ok(())
}
