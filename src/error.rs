use thiserror::Error;

use crate::core::AxisId;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid visible range: min={min}, max={max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid rect: left={left}, top={top}, right={right}, bottom={bottom}")]
    InvalidRect {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },

    #[error("unknown axis: {0}")]
    UnknownAxis(AxisId),

    #[error("unknown series: {0}")]
    UnknownSeries(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
