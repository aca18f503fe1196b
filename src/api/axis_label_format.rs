use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// How axis tick values are rendered by the demo surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisLabelFormat {
    /// Epoch milliseconds as `HH:mm:ss`, shifted by `offset_minutes`.
    Time { offset_minutes: i16 },
    /// Fixed-point value with `precision` decimals.
    Value { precision: u8 },
}

impl Default for AxisLabelFormat {
    fn default() -> Self {
        Self::Value { precision: 4 }
    }
}

impl AxisLabelFormat {
    pub fn validate(self) -> ChartResult<Self> {
        match self {
            Self::Time { offset_minutes } => {
                if !(-14 * 60..=14 * 60).contains(&i32::from(offset_minutes)) {
                    return Err(ChartError::InvalidData(
                        "time label offset must be between -840 and 840 minutes".to_owned(),
                    ));
                }
            }
            Self::Value { precision } => {
                if precision > 12 {
                    return Err(ChartError::InvalidData(
                        "value label precision must be <= 12".to_owned(),
                    ));
                }
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Time { offset_minutes } => format_time_label_with_offset(value, offset_minutes),
            Self::Value { precision } => {
                if !value.is_finite() {
                    return String::new();
                }
                format!("{value:.prec$}", prec = usize::from(precision))
            }
        }
    }
}

fn quantize_epoch_millis(epoch_ms: f64) -> Option<i64> {
    if !epoch_ms.is_finite() {
        return None;
    }
    let millis = epoch_ms.round();
    if millis > (i64::MAX as f64) || millis < (i64::MIN as f64) {
        return None;
    }
    Some(millis as i64)
}

/// Formats epoch milliseconds as UTC `HH:mm:ss`. Out-of-range input yields
/// an empty label.
#[must_use]
pub fn format_time_label(epoch_ms: f64) -> String {
    format_time_label_with_offset(epoch_ms, 0)
}

#[must_use]
pub fn format_time_label_with_offset(epoch_ms: f64, offset_minutes: i16) -> String {
    let Some(millis) = quantize_epoch_millis(epoch_ms) else {
        return String::new();
    };
    let Some(utc) = DateTime::<Utc>::from_timestamp_millis(millis) else {
        return String::new();
    };
    let Some(offset) = FixedOffset::east_opt(i32::from(offset_minutes) * 60) else {
        return String::new();
    };
    utc.with_timezone(&offset).format("%H:%M:%S").to_string()
}

/// Formats a value with four decimals.
#[must_use]
pub fn format_value_label(value: f64) -> String {
    AxisLabelFormat::default().format(value)
}
