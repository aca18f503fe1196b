//! Gesture arbitration: modifier tracking, region hit-testing, routing and
//! the per-gesture handlers.

pub mod handlers;
pub mod modifiers;
pub mod predicates;
pub mod region;
pub mod router;
pub mod selection;
pub(crate) mod step_resolver;
pub mod sync;
pub mod view;

use serde::{Deserialize, Serialize};

pub use handlers::{
    AxisDragGesture, AxisDragMode, GestureHandler, GestureInput, PanGesture, PointSelectGesture,
    RubberBandZoomGesture, WheelDecision, WheelGesture, WheelTarget,
};
pub use modifiers::{Key, ModifierFlags, ModifierSnapshot, ModifierState, MouseButton, RawInputEvent};
pub use predicates::{ActivationInput, ActivationPredicate, PredicateConflict, default_gestures};
pub use region::{Region, RegionHit, RegionKind, RegionLayout, classify};
pub use router::{
    GestureOutcome, GestureRegistration, GestureRouter, RouterState, WheelRoute,
};
pub use selection::{SelectedPoint, Selection, SelectionChange, SelectionMode};
pub use sync::{AxisBinding, AxisHandle, bind};
pub use view::{ViewDelta, ViewFrame, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureMode {
    None,
    Pan,
    RubberBandZoom,
    PointSelect,
    AxisDrag,
    WheelZoom,
    WheelPan,
}

impl GestureMode {
    /// Modes with a pointer-down to pointer-up lifecycle.
    #[must_use]
    pub fn is_button_driven(self) -> bool {
        matches!(
            self,
            Self::Pan | Self::RubberBandZoom | Self::PointSelect | Self::AxisDrag
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GesturePhase {
    #[default]
    Idle,
    Active,
    Committed,
    Cancelled,
}

/// Numeric tuning shared by the handlers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureTuning {
    /// Span growth per wheel notch; one notch is `120` wheel units.
    pub wheel_zoom_step_ratio: f64,
    /// Fraction of the visible span moved per wheel notch on an axis.
    pub wheel_pan_step_ratio: f64,
    /// Span growth per `120` px of axis scaling drag.
    pub axis_drag_zoom_step_ratio: f64,
    /// Smallest visible span any zoom may produce.
    pub min_span: f64,
    /// Max pixel distance between pointer and a selectable data point.
    pub selection_hit_radius_px: f64,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            wheel_zoom_step_ratio: 0.1,
            wheel_pan_step_ratio: 0.1,
            axis_drag_zoom_step_ratio: 0.2,
            min_span: 1e-9,
            selection_hit_radius_px: 10.0,
        }
    }
}
