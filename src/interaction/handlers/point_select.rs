use ordered_float::OrderedFloat;

use crate::core::Point;
use crate::interaction::modifiers::ModifierSnapshot;
use crate::interaction::selection::{SelectedPoint, SelectionChange};
use crate::interaction::view::{ViewDelta, ViewFrame};
use crate::interaction::{GestureMode, GesturePhase};

use super::{GestureHandler, GestureInput};

/// Click-to-select of the data point nearest to the pointer, replace mode.
#[derive(Debug, Default)]
pub struct PointSelectGesture {
    phase: GesturePhase,
    pending: Option<SelectedPoint>,
}

impl PointSelectGesture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&SelectedPoint> {
        self.pending.as_ref()
    }

    fn delta(&self) -> ViewDelta {
        ViewDelta {
            selection: Some(SelectionChange::replace(self.pending.clone())),
            ..ViewDelta::default()
        }
    }
}

/// Nearest point across all series: smallest horizontal pixel distance, then
/// smallest vertical one. Points outside the hit radius are ignored.
pub(crate) fn nearest_point(position: Point, frame: &ViewFrame<'_>) -> Option<SelectedPoint> {
    let mut best: Option<((OrderedFloat<f64>, OrderedFloat<f64>), SelectedPoint)> = None;
    for series in frame.series.values() {
        let (Some(x_scale), Some(y_scale)) =
            (frame.scale(series.x_axis()), frame.scale(series.y_axis()))
        else {
            continue;
        };
        let x = x_scale.pixel_to_value(position.x);
        let y = y_scale.pixel_to_value(position.y);
        let Some(index) = series.nearest_index(x, y) else {
            continue;
        };
        let Some(point) = series.point(index) else {
            continue;
        };
        let dx = (x_scale.value_to_pixel(point.x) - position.x).abs();
        let dy = (y_scale.value_to_pixel(point.y) - position.y).abs();
        if dx.hypot(dy) > frame.tuning.selection_hit_radius_px {
            continue;
        }
        let key = (OrderedFloat(dx), OrderedFloat(dy));
        if best.as_ref().is_none_or(|(best_key, _)| key < *best_key) {
            best = Some((
                key,
                SelectedPoint {
                    series: series.id().clone(),
                    index,
                },
            ));
        }
    }
    best.map(|(_, point)| point)
}

impl GestureHandler for PointSelectGesture {
    fn mode(&self) -> GestureMode {
        GestureMode::PointSelect
    }

    fn phase(&self) -> GesturePhase {
        self.phase
    }

    fn holds_under(&self, snapshot: &ModifierSnapshot) -> bool {
        snapshot.ctrl
    }

    fn activate(&mut self, input: &GestureInput, frame: &ViewFrame<'_>) {
        self.phase = GesturePhase::Active;
        self.pending = nearest_point(input.position, frame);
    }

    fn update(&mut self, input: &GestureInput, frame: &ViewFrame<'_>) -> ViewDelta {
        self.pending = nearest_point(input.position, frame);
        self.delta()
    }

    fn commit(&mut self) -> ViewDelta {
        self.phase = GesturePhase::Committed;
        let delta = self.delta();
        self.pending = None;
        delta
    }

    fn cancel(&mut self) {
        self.phase = GesturePhase::Cancelled;
        self.pending = None;
    }
}
