use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::{AxisId, LinearScale, Point, Rect, VisibleRange};
use crate::error::ChartResult;
use crate::interaction::modifiers::ModifierSnapshot;
use crate::interaction::step_resolver::resolve_drag_scale_factor;
use crate::interaction::view::{ViewDelta, ViewFrame};
use crate::interaction::{GestureMode, GesturePhase, GestureTuning};

use super::{GestureHandler, GestureInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisDragMode {
    Panning,
    Scaling,
}

impl AxisDragMode {
    /// Shift selects scaling; checked on every update, not only at press.
    #[must_use]
    pub fn for_snapshot(snapshot: &ModifierSnapshot) -> Self {
        if snapshot.shift {
            Self::Scaling
        } else {
            Self::Panning
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct DragTrack {
    axis: AxisId,
    rect: Rect,
    anchor_px: f64,
    last: Point,
    range: VisibleRange,
}

/// Drag on an axis strip: pans or scales that axis only.
#[derive(Debug, Default)]
pub struct AxisDragGesture {
    phase: GesturePhase,
    tuning: GestureTuning,
    track: Option<DragTrack>,
    mode: Option<AxisDragMode>,
    pending: ViewDelta,
}

impl AxisDragGesture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drag mode used by the latest update, if any.
    #[must_use]
    pub fn drag_mode(&self) -> Option<AxisDragMode> {
        self.mode
    }

    #[must_use]
    pub fn axis(&self) -> Option<AxisId> {
        self.track.map(|track| track.axis)
    }

    fn step(&self, track: DragTrack, position: Point, mode: AxisDragMode) -> ChartResult<VisibleRange> {
        let scale = LinearScale::along(track.axis.kind, track.range, track.rect)?;
        let along = if track.axis.is_x() {
            position.x - track.last.x
        } else {
            position.y - track.last.y
        };
        if along == 0.0 {
            return Ok(track.range);
        }

        match mode {
            AxisDragMode::Panning => track.range.translated(scale.grab_offset(along)),
            AxisDragMode::Scaling => {
                // Dragging right or up shrinks the span.
                let drag_px = if track.axis.is_x() { -along } else { along };
                let factor = resolve_drag_scale_factor(drag_px, self.tuning.axis_drag_zoom_step_ratio)?;
                let anchor = scale.pixel_to_value(track.anchor_px);
                track
                    .range
                    .scaled_around(anchor, factor, self.tuning.min_span)
            }
        }
    }
}

impl GestureHandler for AxisDragGesture {
    fn mode(&self) -> GestureMode {
        GestureMode::AxisDrag
    }

    fn phase(&self) -> GesturePhase {
        self.phase
    }

    fn applies_live(&self) -> bool {
        true
    }

    fn activate(&mut self, input: &GestureInput, frame: &ViewFrame<'_>) {
        self.phase = GesturePhase::Active;
        self.tuning = *frame.tuning;
        self.pending = ViewDelta::default();
        self.mode = Some(AxisDragMode::for_snapshot(&input.snapshot));
        self.track = input.region.axis.and_then(|axis| {
            let range = *frame.view.ranges.get(&axis)?;
            let rect = frame.layout.mapping_rect(axis)?;
            let anchor_px = if axis.is_x() {
                input.position.x
            } else {
                input.position.y
            };
            Some(DragTrack {
                axis,
                rect,
                anchor_px,
                last: input.position,
                range,
            })
        });
        if self.track.is_none() {
            warn!(region = ?input.region, "axis drag activated without a known axis");
        }
    }

    fn update(&mut self, input: &GestureInput, _frame: &ViewFrame<'_>) -> ViewDelta {
        let Some(track) = self.track else {
            return ViewDelta::default();
        };
        let mode = AxisDragMode::for_snapshot(&input.snapshot);
        self.mode = Some(mode);

        match self.step(track, input.position, mode) {
            Ok(range) => {
                trace!(axis = %track.axis, ?mode, min = range.min(), max = range.max(), "axis drag step");
                self.track = Some(DragTrack {
                    last: input.position,
                    range,
                    ..track
                });
                let mut delta = ViewDelta::default();
                delta.push_range(track.axis, range);
                self.pending = delta;
            }
            Err(err) => warn!(error = %err, "axis drag update skipped"),
        }
        self.pending.clone()
    }

    fn commit(&mut self) -> ViewDelta {
        self.phase = GesturePhase::Committed;
        self.track = None;
        std::mem::take(&mut self.pending)
    }

    fn cancel(&mut self) {
        self.phase = GesturePhase::Cancelled;
        self.track = None;
        self.pending = ViewDelta::default();
    }
}
