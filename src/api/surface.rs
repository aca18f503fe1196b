use std::cell::{Ref, RefCell};
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::{AxisId, DataPoint, Series, SeriesId, VisibleRange};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    AxisHandle, GestureMode, GestureRegistration, GestureRouter, GestureTuning, ModifierSnapshot,
    ModifierState, PredicateConflict, RegionLayout, RouterState, Selection, SelectionChange,
    ViewState, default_gestures,
};

use super::plugin_registry::PluginHub;
use super::validation::{validate_gesture_tuning, validate_surface_config};
use super::{GestureEvent, GestureInputBehavior, SurfaceConfig, SurfaceHost};

/// Gesture arbiter attached to one chart surface.
///
/// Owns the modifier tracker, the region layout and the gesture router, and
/// applies the resulting view changes to its axes and to the host.
pub struct GestureSurface<H: SurfaceHost + 'static> {
    pub(super) host: Rc<RefCell<H>>,
    pub(super) tuning: GestureTuning,
    pub(super) behavior: GestureInputBehavior,
    pub(super) modifiers: ModifierState,
    pub(super) layout: RegionLayout,
    pub(super) router: GestureRouter,
    pub(super) axes: IndexMap<AxisId, AxisHandle>,
    pub(super) series: IndexMap<SeriesId, Series>,
    pub(super) selection: Selection,
    /// View captured when the active gesture started; restored on cancel.
    pub(super) activation_view: Option<ViewState>,
    pub(super) plugins: Rc<RefCell<PluginHub>>,
}

impl<H: SurfaceHost + 'static> GestureSurface<H> {
    /// Creates a surface with primary X and Y axes and the default gestures
    /// allowed by `config.input_behavior`.
    pub fn new(host: H, config: SurfaceConfig) -> ChartResult<Self> {
        let (x_range, y_range) = validate_surface_config(&config)?;

        let mut surface = Self {
            host: Rc::new(RefCell::new(host)),
            tuning: config.tuning,
            behavior: config.input_behavior,
            modifiers: ModifierState::default(),
            layout: RegionLayout::new(),
            router: GestureRouter::new(),
            axes: IndexMap::new(),
            series: IndexMap::new(),
            selection: Selection::default(),
            activation_view: None,
            plugins: PluginHub::shared(),
        };
        surface.router = surface.gated_default_router();
        surface.add_axis(AxisId::PRIMARY_X, x_range)?;
        surface.add_axis(AxisId::PRIMARY_Y, y_range)?;
        Ok(surface)
    }

    fn gated_default_router(&self) -> GestureRouter {
        let registrations = default_gestures()
            .into_iter()
            .filter(|registration| self.behavior.allows(registration.mode()))
            .collect();
        GestureRouter::with_registrations(registrations)
    }

    #[must_use]
    pub fn host(&self) -> Ref<'_, H> {
        self.host.borrow()
    }

    /// Shared handle to the host, for callers that drive it directly.
    #[must_use]
    pub fn host_handle(&self) -> Rc<RefCell<H>> {
        Rc::clone(&self.host)
    }

    #[must_use]
    pub fn tuning(&self) -> GestureTuning {
        self.tuning
    }

    pub fn set_tuning(&mut self, tuning: GestureTuning) -> ChartResult<()> {
        self.tuning = validate_gesture_tuning(tuning)?;
        Ok(())
    }

    #[must_use]
    pub fn input_behavior(&self) -> GestureInputBehavior {
        self.behavior
    }

    /// Replaces the gates and rebuilds the default gesture set.
    ///
    /// Cancels an active gesture first.
    pub fn set_input_behavior(&mut self, behavior: GestureInputBehavior) {
        let _ = self.cancel_gesture();
        self.behavior = behavior;
        self.router = self.gated_default_router();
    }

    /// Installs custom registrations in priority order, replacing the
    /// defaults. Returns the ambiguous predicate combinations found.
    pub fn set_gestures(
        &mut self,
        registrations: Vec<GestureRegistration>,
    ) -> ChartResult<Vec<PredicateConflict>> {
        if self.router.is_active() {
            return Err(ChartError::InvalidData(
                "gestures cannot be replaced while a gesture is active".to_owned(),
            ));
        }
        self.router = GestureRouter::with_registrations(registrations);
        Ok(self.router.conflicts().to_vec())
    }

    #[must_use]
    pub fn router(&self) -> &GestureRouter {
        &self.router
    }

    #[must_use]
    pub fn gesture_state(&self) -> RouterState {
        self.router.state()
    }

    #[must_use]
    pub fn active_gesture(&self) -> Option<GestureMode> {
        self.router.active_mode()
    }

    #[must_use]
    pub fn modifier_snapshot(&self) -> ModifierSnapshot {
        self.modifiers.snapshot()
    }

    #[must_use]
    pub fn layout(&self) -> &RegionLayout {
        &self.layout
    }

    /// Replaces region geometry. Takes effect for the next gesture; an active
    /// gesture keeps the mapping it started with.
    pub fn set_layout(&mut self, layout: RegionLayout) {
        debug!(regions = layout.regions().len(), "surface layout updated");
        self.layout = layout;
    }

    /// Adds an axis. The host and the plugins receive every later change of
    /// its range, including writes mirrored in through a binding.
    pub fn add_axis(&mut self, id: AxisId, range: VisibleRange) -> ChartResult<AxisHandle> {
        if self.axes.contains_key(&id) {
            return Err(ChartError::InvalidData(format!(
                "axis `{id}` is already registered"
            )));
        }
        let handle = AxisHandle::new(id, range);
        let host = Rc::clone(&self.host);
        handle.subscribe(move |axis, range| host.borrow_mut().apply_visible_range(axis, range));
        let plugins = Rc::clone(&self.plugins);
        handle.subscribe(move |axis, range| {
            PluginHub::dispatch_range_write(&plugins, axis, range);
        });
        self.axes.insert(id, handle.clone());
        self.sync_plugin_context();
        Ok(handle)
    }

    /// Shared handle of an axis, usable with [`crate::interaction::bind`].
    #[must_use]
    pub fn axis(&self, id: AxisId) -> Option<&AxisHandle> {
        self.axes.get(&id)
    }

    #[must_use]
    pub fn axis_ids(&self) -> Vec<AxisId> {
        self.axes.keys().copied().collect()
    }

    pub fn visible_range(&self, id: AxisId) -> ChartResult<VisibleRange> {
        self.axes
            .get(&id)
            .map(AxisHandle::visible_range)
            .ok_or(ChartError::UnknownAxis(id))
    }

    /// Programmatic range change; also the inbound path for ranges the host
    /// changed on its own.
    pub fn set_visible_range(&mut self, id: AxisId, range: VisibleRange) -> ChartResult<()> {
        let handle = self.axes.get(&id).ok_or(ChartError::UnknownAxis(id))?;
        self.sync_plugin_context();
        handle.set_visible_range(range);
        Ok(())
    }

    /// Host notification that `axis` now shows `range`.
    pub fn notify_visible_range_changed(
        &mut self,
        axis: AxisId,
        range: VisibleRange,
    ) -> ChartResult<()> {
        self.set_visible_range(axis, range)
    }

    /// Adds a series bound to registered axes.
    pub fn add_series(&mut self, series: Series) -> ChartResult<()> {
        for axis in [series.x_axis(), series.y_axis()] {
            if !self.axes.contains_key(&axis) {
                return Err(ChartError::UnknownAxis(axis));
            }
        }
        if self.series.contains_key(series.id()) {
            return Err(ChartError::InvalidData(format!(
                "series `{}` is already registered",
                series.id()
            )));
        }
        self.series.insert(series.id().clone(), series);
        self.emit_series_updated();
        Ok(())
    }

    #[must_use]
    pub fn series(&self, id: &SeriesId) -> Option<&Series> {
        self.series.get(id)
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Replaces a series' points. Drops a selection pointing into it.
    pub fn set_series_points(&mut self, id: &SeriesId, points: Vec<DataPoint>) -> ChartResult<()> {
        let series = self
            .series
            .get_mut(id)
            .ok_or_else(|| ChartError::UnknownSeries(id.to_string()))?;
        series.set_points(points)?;
        if self
            .selection
            .points()
            .iter()
            .any(|point| &point.series == id)
        {
            self.apply_selection_change(&SelectionChange::replace(None));
        }
        self.emit_series_updated();
        Ok(())
    }

    /// Appends points to a series; indices of existing points stay valid.
    pub fn append_series_points(
        &mut self,
        id: &SeriesId,
        points: &[DataPoint],
    ) -> ChartResult<()> {
        let series = self
            .series
            .get_mut(id)
            .ok_or_else(|| ChartError::UnknownSeries(id.to_string()))?;
        series.append_points(points)?;
        self.emit_series_updated();
        Ok(())
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn clear_selection(&mut self) {
        self.apply_selection_change(&SelectionChange::replace(None));
    }

    fn emit_series_updated(&mut self) {
        let points_len = self.series.values().map(|series| series.points().len()).sum();
        self.emit_gesture_event(GestureEvent::SeriesUpdated { points_len });
    }
}
