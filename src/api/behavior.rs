use serde::{Deserialize, Serialize};

use crate::interaction::GestureMode;

fn default_true() -> bool {
    true
}

/// Host-configurable gates for each interaction family.
///
/// A disabled button gesture is not registered; a disabled wheel family
/// forwards the tick to the host widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureInputBehavior {
    /// Enables left-drag panning inside the plot area.
    #[serde(default = "default_true")]
    pub drag_pan: bool,
    /// Enables shift-drag rectangle zoom.
    #[serde(default = "default_true")]
    pub rubber_band_zoom: bool,
    /// Enables ctrl-click data point selection.
    #[serde(default = "default_true")]
    pub point_select: bool,
    /// Enables drag on axis strips.
    #[serde(default = "default_true")]
    pub axis_drag: bool,
    /// Enables wheel-driven zoom.
    #[serde(default = "default_true")]
    pub wheel_zoom: bool,
    /// Enables wheel-driven panning over axes.
    #[serde(default = "default_true")]
    pub wheel_pan: bool,
    /// Enables double-click zoom to data extents.
    #[serde(default = "default_true")]
    pub double_click_zoom_extents: bool,
}

impl Default for GestureInputBehavior {
    fn default() -> Self {
        Self {
            drag_pan: true,
            rubber_band_zoom: true,
            point_select: true,
            axis_drag: true,
            wheel_zoom: true,
            wheel_pan: true,
            double_click_zoom_extents: true,
        }
    }
}

impl GestureInputBehavior {
    #[must_use]
    pub fn allows(self, mode: GestureMode) -> bool {
        match mode {
            GestureMode::None => false,
            GestureMode::Pan => self.drag_pan,
            GestureMode::RubberBandZoom => self.rubber_band_zoom,
            GestureMode::PointSelect => self.point_select,
            GestureMode::AxisDrag => self.axis_drag,
            GestureMode::WheelZoom => self.wheel_zoom,
            GestureMode::WheelPan => self.wheel_pan,
        }
    }
}
