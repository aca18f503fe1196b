use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::core::{AxisId, LinearScale, Rect, Series, SeriesId, VisibleRange};

use super::region::RegionLayout;
use super::selection::{Selection, SelectionChange};
use super::GestureTuning;

/// View state a gesture may change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub ranges: IndexMap<AxisId, VisibleRange>,
    pub selection: Selection,
}

/// Change a handler asks the surface to apply.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewDelta {
    /// New visible ranges in application order.
    pub ranges: SmallVec<[(AxisId, VisibleRange); 4]>,
    pub selection: Option<SelectionChange>,
    /// Rubber-band rectangle for the host to draw while dragging.
    pub preview: Option<Rect>,
}

impl ViewDelta {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty() && self.selection.is_none() && self.preview.is_none()
    }

    #[must_use]
    pub fn range_for(&self, axis: AxisId) -> Option<VisibleRange> {
        self.ranges
            .iter()
            .find(|(id, _)| *id == axis)
            .map(|(_, range)| *range)
    }

    pub fn push_range(&mut self, axis: AxisId, range: VisibleRange) {
        self.ranges.push((axis, range));
    }
}

/// Read-only view handed to handlers for one event.
#[derive(Debug, Clone, Copy)]
pub struct ViewFrame<'a> {
    pub view: &'a ViewState,
    pub layout: &'a RegionLayout,
    pub series: &'a IndexMap<SeriesId, Series>,
    pub tuning: &'a GestureTuning,
}

impl ViewFrame<'_> {
    /// Pixel mapping of `axis` under the current layout and range.
    #[must_use]
    pub fn scale(&self, axis: AxisId) -> Option<LinearScale> {
        let range = *self.view.ranges.get(&axis)?;
        let rect = self.layout.mapping_rect(axis)?;
        LinearScale::along(axis.kind, range, rect).ok()
    }

    /// Union of data extents of every series bound to `axis`.
    #[must_use]
    pub fn data_extent(&self, axis: AxisId) -> Option<(f64, f64)> {
        self.series
            .values()
            .filter_map(|series| {
                if series.x_axis() == axis {
                    series.x_extent()
                } else if series.y_axis() == axis {
                    series.y_extent()
                } else {
                    None
                }
            })
            .reduce(|(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)))
    }
}
