use smallvec::SmallVec;
use tracing::warn;

use crate::core::{AxisId, LinearScale, Point};
use crate::error::ChartResult;
use crate::interaction::view::{ViewDelta, ViewFrame};
use crate::interaction::{GestureMode, GesturePhase};

use super::{GestureHandler, GestureInput};

/// Drag-to-pan over the plot area; moves every axis of the surface.
#[derive(Debug, Default)]
pub struct PanGesture {
    phase: GesturePhase,
    origin: Point,
    scales: SmallVec<[(AxisId, LinearScale); 4]>,
    pending: ViewDelta,
}

impl PanGesture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve(&self, position: Point) -> ChartResult<ViewDelta> {
        let dx = position.x - self.origin.x;
        let dy = position.y - self.origin.y;
        let mut delta = ViewDelta::default();
        for (axis, scale) in &self.scales {
            let along = if axis.is_x() { dx } else { dy };
            let range = scale.range().translated(scale.grab_offset(along))?;
            delta.push_range(*axis, range);
        }
        Ok(delta)
    }
}

impl GestureHandler for PanGesture {
    fn mode(&self) -> GestureMode {
        GestureMode::Pan
    }

    fn phase(&self) -> GesturePhase {
        self.phase
    }

    fn applies_live(&self) -> bool {
        true
    }

    fn activate(&mut self, input: &GestureInput, frame: &ViewFrame<'_>) {
        self.phase = GesturePhase::Active;
        self.origin = input.position;
        self.pending = ViewDelta::default();
        self.scales = frame
            .view
            .ranges
            .keys()
            .filter_map(|axis| frame.scale(*axis).map(|scale| (*axis, scale)))
            .collect();
    }

    fn update(&mut self, input: &GestureInput, _frame: &ViewFrame<'_>) -> ViewDelta {
        match self.resolve(input.position) {
            Ok(delta) => self.pending = delta,
            Err(err) => warn!(error = %err, "pan update skipped"),
        }
        self.pending.clone()
    }

    fn commit(&mut self) -> ViewDelta {
        self.phase = GesturePhase::Committed;
        std::mem::take(&mut self.pending)
    }

    fn cancel(&mut self) {
        self.phase = GesturePhase::Cancelled;
        self.pending = ViewDelta::default();
    }
}
