use tracing::{debug, warn};

use crate::core::VisibleRange;
use crate::interaction::{GestureMode, SelectionChange, ViewDelta, ViewFrame, ViewState};

use super::{GestureEvent, GestureSurface, SurfaceHost};

impl<H: SurfaceHost + 'static> GestureSurface<H> {
    /// Current ranges of every axis plus the selection.
    pub(super) fn view_state(&self) -> ViewState {
        ViewState {
            ranges: self
                .axes
                .iter()
                .map(|(id, handle)| (*id, handle.visible_range()))
                .collect(),
            selection: self.selection.clone(),
        }
    }

    /// Writes ranges then selection. Unknown axes are skipped.
    ///
    /// Range events reach plugins through the axis listeners.
    pub(super) fn apply_view_delta(&mut self, delta: &ViewDelta) {
        self.sync_plugin_context();
        for (axis, range) in &delta.ranges {
            let Some(handle) = self.axes.get(axis) else {
                warn!(%axis, "delta references an unknown axis");
                continue;
            };
            handle.set_visible_range(*range);
        }
        if let Some(change) = &delta.selection {
            self.apply_selection_change(change);
        }
    }

    pub(super) fn apply_selection_change(&mut self, change: &SelectionChange) {
        if !self.selection.apply(change) {
            return;
        }
        self.host
            .borrow_mut()
            .apply_selection(change.point.as_ref(), change.mode);
        self.emit_gesture_event(GestureEvent::SelectionChanged {
            selected: self.selection.points().len(),
        });
    }

    fn restore_view(&mut self, view: ViewState) {
        self.sync_plugin_context();
        for (axis, range) in view.ranges {
            if let Some(handle) = self.axes.get(&axis) {
                handle.set_visible_range(range);
            }
        }
        if view.selection != self.selection {
            let change = SelectionChange::replace(view.selection.points().first().cloned());
            self.apply_selection_change(&change);
        }
    }

    /// Aborts the active gesture and restores the view it started from.
    pub fn cancel_gesture(&mut self) -> Option<GestureMode> {
        let mode = self.router.cancel()?;
        self.roll_back_cancelled(mode);
        Some(mode)
    }

    /// Undoes the live effects of a gesture the router just cancelled.
    pub(super) fn roll_back_cancelled(&mut self, mode: GestureMode) {
        if mode == GestureMode::RubberBandZoom {
            self.host.borrow_mut().show_rubber_band(None);
        }
        if let Some(view) = self.activation_view.take() {
            self.restore_view(view);
        }
        self.emit_gesture_event(GestureEvent::Cancelled { mode });
    }

    /// Fits every axis bound to a series to that data's extent.
    ///
    /// Axes without data keep their range. Returns `true` when anything moved.
    pub fn zoom_extents(&mut self) -> bool {
        let view = self.view_state();
        let frame = ViewFrame {
            view: &view,
            layout: &self.layout,
            series: &self.series,
            tuning: &self.tuning,
        };
        let mut delta = ViewDelta::default();
        for axis in view.ranges.keys() {
            let Some((min, max)) = frame.data_extent(*axis) else {
                continue;
            };
            match VisibleRange::covering(min, max) {
                Ok(range) => delta.push_range(*axis, range),
                Err(err) => warn!(%axis, error = %err, "skipping zoom extents for axis"),
            }
        }
        let moved = delta
            .ranges
            .iter()
            .any(|(axis, range)| view.ranges.get(axis) != Some(range));
        self.apply_view_delta(&delta);
        debug!(axes = delta.ranges.len(), moved, "zoomed to data extents");
        if moved {
            self.emit_gesture_event(GestureEvent::ZoomedToExtents);
        }
        moved
    }
}
