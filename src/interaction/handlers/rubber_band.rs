use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{AxisId, LinearScale, Point, Rect, VisibleRange};
use crate::error::ChartResult;
use crate::interaction::modifiers::ModifierSnapshot;
use crate::interaction::view::{ViewDelta, ViewFrame};
use crate::interaction::{GestureMode, GesturePhase};

use super::{GestureHandler, GestureInput};

#[derive(Debug, Clone, Copy)]
struct AxisTarget {
    axis: AxisId,
    scale: LinearScale,
    extent: Option<(f64, f64)>,
}

/// Drag a rectangle over the plot area; commit zooms both axis families to it.
#[derive(Debug, Default)]
pub struct RubberBandZoomGesture {
    phase: GesturePhase,
    plot: Option<Rect>,
    origin: Point,
    targets: SmallVec<[AxisTarget; 4]>,
    pending: ViewDelta,
}

impl RubberBandZoomGesture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve(&self, position: Point) -> ChartResult<ViewDelta> {
        let Some(plot) = self.plot else {
            return Ok(ViewDelta::default());
        };
        let rect = Rect::spanning(self.origin, plot.clamp_point(position))?;
        let mut delta = ViewDelta {
            preview: Some(rect),
            ..ViewDelta::default()
        };
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return Ok(delta);
        }

        for target in &self.targets {
            let (a, b) = if target.axis.is_x() {
                (rect.left(), rect.right())
            } else {
                (rect.top(), rect.bottom())
            };
            let selected = VisibleRange::from_unordered(
                target.scale.pixel_to_value(a),
                target.scale.pixel_to_value(b),
            )?;
            let clamped = match target.extent {
                Some((lo, hi)) if lo < hi => {
                    selected.clamped_to(VisibleRange::new(lo, hi)?)
                }
                _ => Some(selected),
            };
            // A band that misses the data on one axis zooms neither.
            let Some(range) = clamped else {
                delta.ranges.clear();
                return Ok(delta);
            };
            delta.push_range(target.axis, range);
        }
        Ok(delta)
    }
}

impl GestureHandler for RubberBandZoomGesture {
    fn mode(&self) -> GestureMode {
        GestureMode::RubberBandZoom
    }

    fn phase(&self) -> GesturePhase {
        self.phase
    }

    fn holds_under(&self, snapshot: &ModifierSnapshot) -> bool {
        snapshot.shift
    }

    fn activate(&mut self, input: &GestureInput, frame: &ViewFrame<'_>) {
        self.phase = GesturePhase::Active;
        self.plot = frame.layout.plot_area();
        self.origin = self
            .plot
            .map_or(input.position, |plot| plot.clamp_point(input.position));
        self.pending = ViewDelta::default();
        self.targets = frame
            .view
            .ranges
            .keys()
            .filter_map(|axis| {
                frame.scale(*axis).map(|scale| AxisTarget {
                    axis: *axis,
                    scale,
                    extent: frame.data_extent(*axis),
                })
            })
            .collect();
    }

    fn update(&mut self, input: &GestureInput, _frame: &ViewFrame<'_>) -> ViewDelta {
        match self.resolve(input.position) {
            Ok(delta) => self.pending = delta,
            Err(err) => warn!(error = %err, "rubber band update skipped"),
        }
        self.pending.clone()
    }

    fn commit(&mut self) -> ViewDelta {
        self.phase = GesturePhase::Committed;
        let mut delta = std::mem::take(&mut self.pending);
        if delta.ranges.is_empty() {
            debug!("rubber band is degenerate or misses the data, nothing to zoom");
        }
        delta.preview = None;
        delta
    }

    fn cancel(&mut self) {
        self.phase = GesturePhase::Cancelled;
        self.pending = ViewDelta::default();
    }
}
