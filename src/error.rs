use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("invalid axis range on {axis}: min={min}, max={max}")]
    InvalidAxisRange { axis: &'static str, min: f64, max: f64 },

    #[error("curve `{name}` has {x_len} x values but {y_len} y values")]
    CurveLengthMismatch {
        name: String,
        x_len: usize,
        y_len: usize,
    },

    #[error("unknown curve `{0}`")]
    UnknownCurve(String),

    #[error("curve `{0}` already exists")]
    DuplicateCurve(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
