//! One state machine per button-driven interaction, plus the stateless wheel
//! handler.
//!
//! Handlers never touch the surface: they read a [`ViewFrame`] and return a
//! [`ViewDelta`]. The router guarantees only the active handler is invoked.

mod axis_drag;
mod pan;
mod point_select;
mod rubber_band;
mod wheel;

pub use axis_drag::{AxisDragGesture, AxisDragMode};
pub use pan::PanGesture;
pub use point_select::PointSelectGesture;
pub use rubber_band::RubberBandZoomGesture;
pub use wheel::{WheelDecision, WheelGesture, WheelTarget};

use crate::core::Point;

use super::modifiers::ModifierSnapshot;
use super::region::RegionHit;
use super::view::{ViewDelta, ViewFrame};
use super::{GestureMode, GesturePhase};

/// Pointer sample handed to handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureInput {
    pub position: Point,
    pub snapshot: ModifierSnapshot,
    pub region: RegionHit,
}

/// Capability interface of a button-driven gesture.
pub trait GestureHandler {
    fn mode(&self) -> GestureMode;

    fn phase(&self) -> GesturePhase;

    /// Whether pending deltas should be applied while the gesture is active.
    fn applies_live(&self) -> bool {
        false
    }

    /// Whether the gesture may continue under `snapshot`; `false` cancels it.
    fn holds_under(&self, _snapshot: &ModifierSnapshot) -> bool {
        true
    }

    fn activate(&mut self, input: &GestureInput, frame: &ViewFrame<'_>);

    /// Returns the pending delta for the current pointer sample.
    fn update(&mut self, input: &GestureInput, frame: &ViewFrame<'_>) -> ViewDelta;

    /// Finishes the gesture and returns the delta to apply.
    fn commit(&mut self) -> ViewDelta;

    fn cancel(&mut self);
}
