use crate::extensions::PluginContext;

use super::{GestureEvent, GestureSurface, SurfaceHost};

impl<H: SurfaceHost + 'static> GestureSurface<H> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            gesture_state: self.router.state(),
            modifiers: self.modifiers.snapshot(),
            axis_count: self.axes.len(),
            series_count: self.series.len(),
            selected_points: self.selection.points().len(),
        }
    }

    /// Refreshes the context range-write events are reported with.
    ///
    /// Called before axis writes and after each handled event, so writes
    /// arriving through a binding carry this surface's latest state.
    pub(super) fn sync_plugin_context(&self) {
        let context = self.plugin_context();
        self.plugins.borrow_mut().publish_context(context);
    }

    pub(super) fn emit_gesture_event(&self, event: GestureEvent) {
        let context = self.plugin_context();
        let mut hub = self.plugins.borrow_mut();
        hub.publish_context(context);
        hub.dispatch(event);
    }
}
