use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AxisId, Point};
use crate::error::ChartResult;
use crate::interaction::GestureMode;
use crate::interaction::step_resolver::{resolve_wheel_pan_offset, resolve_wheel_zoom_factor};
use crate::interaction::view::{ViewDelta, ViewFrame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelTarget {
    Axis(AxisId),
    AllAxes,
}

/// Per-tick routing result; wheel gestures hold no state between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelDecision {
    pub mode: GestureMode,
    pub target: WheelTarget,
}

/// Applies one wheel tick as a zoom (centred on the pointer) or a pan.
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelGesture;

impl WheelGesture {
    pub fn tick(
        decision: WheelDecision,
        position: Point,
        delta_y: f64,
        frame: &ViewFrame<'_>,
    ) -> ChartResult<ViewDelta> {
        let axes: SmallVec<[AxisId; 4]> = match decision.target {
            WheelTarget::Axis(axis) => SmallVec::from_slice(&[axis]),
            WheelTarget::AllAxes => frame.view.ranges.keys().copied().collect(),
        };

        let mut delta = ViewDelta::default();
        for axis in axes {
            let Some(scale) = frame.scale(axis) else {
                continue;
            };
            let range = scale.range();
            let next = match decision.mode {
                GestureMode::WheelZoom => {
                    let Some(factor) =
                        resolve_wheel_zoom_factor(delta_y, frame.tuning.wheel_zoom_step_ratio)?
                    else {
                        continue;
                    };
                    let along = if axis.is_x() { position.x } else { position.y };
                    let anchor = scale.pixel_to_value(along);
                    range.scaled_around(anchor, factor, frame.tuning.min_span)?
                }
                GestureMode::WheelPan => {
                    let Some(offset) = resolve_wheel_pan_offset(
                        delta_y,
                        range.span(),
                        frame.tuning.wheel_pan_step_ratio,
                    )?
                    else {
                        continue;
                    };
                    // Scrolling down moves x forward and y down.
                    let signed = if axis.is_x() { offset } else { -offset };
                    range.translated(signed)?
                }
                GestureMode::None
                | GestureMode::Pan
                | GestureMode::RubberBandZoom
                | GestureMode::PointSelect
                | GestureMode::AxisDrag => continue,
            };
            delta.push_range(axis, next);
        }
        Ok(delta)
    }
}
