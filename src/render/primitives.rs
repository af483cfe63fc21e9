use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Opaque colour from 8-bit channels.
    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    pub fn validate(self) -> PlotResult<()> {
        let channels = [self.red, self.green, self.blue, self.alpha];
        if channels
            .iter()
            .all(|value| value.is_finite() && (0.0..=1.0).contains(value))
        {
            return Ok(());
        }
        Err(PlotError::InvalidData(format!(
            "color channels must be finite and in [0, 1]: {self:?}"
        )))
    }
}

fn ensure_finite(what: &str, values: &[f64]) -> PlotResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        return Ok(());
    }
    Err(PlotError::InvalidData(format!("{what} must be finite")))
}

fn ensure_positive(what: &str, value: f64) -> PlotResult<()> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    Err(PlotError::InvalidData(format!("{what} must be finite and > 0")))
}

fn ensure_non_negative(what: &str, value: f64) -> PlotResult<()> {
    if value.is_finite() && value >= 0.0 {
        return Ok(());
    }
    Err(PlotError::InvalidData(format!("{what} must be finite and >= 0")))
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        ensure_finite("line endpoints", &[self.x1, self.y1, self.x2, self.y2])?;
        ensure_positive("line stroke width", self.stroke_width)?;
        self.color.validate()
    }
}

/// Filled and/or outlined rectangle in pixel space.
///
/// A zero `border_width` draws the fill only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
        }
    }

    #[must_use]
    pub const fn outline(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        border_width: f64,
        border_color: Color,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color: Color::TRANSPARENT,
            border_width,
            border_color,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        ensure_finite("rect origin", &[self.x, self.y])?;
        ensure_non_negative("rect width", self.width)?;
        ensure_non_negative("rect height", self.height)?;
        ensure_non_negative("rect border width", self.border_width)?;
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Marker or selection ring centred on a pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub filled: bool,
    pub stroke_width: f64,
    pub color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn filled(cx: f64, cy: f64, radius: f64, color: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            filled: true,
            stroke_width: 1.0,
            color,
        }
    }

    #[must_use]
    pub const fn ring(cx: f64, cy: f64, radius: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            filled: false,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        ensure_finite("circle center", &[self.cx, self.cy])?;
        ensure_positive("circle radius", self.radius)?;
        ensure_positive("circle stroke width", self.stroke_width)?;
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub bold: bool,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            bold: false,
            color,
            h_align,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.text.is_empty() {
            return Err(PlotError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        ensure_finite("text anchor", &[self.x, self.y])?;
        ensure_positive("font size", self.font_size_px)?;
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn rgb8_channels_are_normalized() {
        let color = Color::from_rgb8(255, 0, 51);
        assert_eq!(color, Color::rgb(1.0, 0.0, 0.2));
        assert!(color.validate().is_ok());
        assert!(Color::rgba(1.5, 0.0, 0.0, 1.0).validate().is_err());
    }
}
