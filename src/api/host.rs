use serde::{Deserialize, Serialize};

use crate::core::{AxisId, Rect, VisibleRange};
use crate::interaction::{SelectedPoint, SelectionMode};

/// What the host widget should do with its own built-in handling of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventDisposition {
    /// The arbiter consumed the event; skip the widget default.
    Suppress,
    /// The arbiter ignored the event; let the widget default run.
    Forward,
}

/// Outbound contract implemented by the rendering surface.
///
/// Calls arrive synchronously while an event is being handled; implementations
/// must not call back into the surface from inside them.
pub trait SurfaceHost {
    fn apply_visible_range(&mut self, axis: AxisId, range: VisibleRange);

    /// `point == None` clears the selection.
    fn apply_selection(&mut self, point: Option<&SelectedPoint>, mode: SelectionMode);

    /// Rubber-band rectangle to draw, or `None` to hide it.
    fn show_rubber_band(&mut self, _rect: Option<Rect>) {}
}

/// Headless host that records outbound calls, for tests and tooling.
#[derive(Debug, Default)]
pub struct NullHost {
    pub range_writes: Vec<(AxisId, VisibleRange)>,
    pub selections: Vec<Option<SelectedPoint>>,
    pub last_rubber_band: Option<Rect>,
}

impl NullHost {
    /// Number of range writes received for `axis`.
    #[must_use]
    pub fn writes_for(&self, axis: AxisId) -> usize {
        self.range_writes.iter().filter(|(id, _)| *id == axis).count()
    }
}

impl SurfaceHost for NullHost {
    fn apply_visible_range(&mut self, axis: AxisId, range: VisibleRange) {
        self.range_writes.push((axis, range));
    }

    fn apply_selection(&mut self, point: Option<&SelectedPoint>, _mode: SelectionMode) {
        self.selections.push(point.cloned());
    }

    fn show_rubber_band(&mut self, rect: Option<Rect>) {
        self.last_rubber_band = rect;
    }
}
