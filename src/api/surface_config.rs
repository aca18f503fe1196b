use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::interaction::GestureTuning;

use super::GestureInputBehavior;

/// Public surface bootstrap configuration.
///
/// Serializable so hosts can persist interaction setup next to their chart
/// config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    #[serde(default)]
    pub tuning: GestureTuning,
    #[serde(default)]
    pub input_behavior: GestureInputBehavior,
}

impl SurfaceConfig {
    /// Creates a config with default tuning and every gesture enabled.
    #[must_use]
    pub fn new(x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self {
            x_min: x_range.0,
            x_max: x_range.1,
            y_min: y_range.0,
            y_max: y_range.1,
            tuning: GestureTuning::default(),
            input_behavior: GestureInputBehavior::default(),
        }
    }

    #[must_use]
    pub fn with_tuning(mut self, tuning: GestureTuning) -> Self {
        self.tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_input_behavior(mut self, behavior: GestureInputBehavior) -> Self {
        self.input_behavior = behavior;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}
