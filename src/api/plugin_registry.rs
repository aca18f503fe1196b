use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;

use crate::core::{AxisId, VisibleRange};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{GestureEvent, GesturePlugin, PluginContext};

use super::{GestureSurface, SurfaceHost};

/// Plugins of one surface and the context last published for them.
///
/// Shared with the surface's axis listeners, so range writes mirrored in
/// through a binding reach the plugins of the surface owning the axis.
#[derive(Default)]
pub(super) struct PluginHub {
    plugins: Vec<Box<dyn GesturePlugin>>,
    context: PluginContext,
}

impl PluginHub {
    pub(super) fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    fn insert(&mut self, plugin: Box<dyn GesturePlugin>) -> ChartResult<()> {
        let plugin_id = plugin.id();
        if plugin_id.is_empty() {
            return Err(ChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.contains(plugin_id) {
            return Err(ChartError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.plugins.push(plugin);
        Ok(())
    }

    fn remove(&mut self, plugin_id: &str) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|plugin| plugin.id() != plugin_id);
        self.plugins.len() != before
    }

    fn contains(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    pub(super) fn publish_context(&mut self, context: PluginContext) {
        self.context = context;
    }

    pub(super) fn dispatch(&mut self, event: GestureEvent) {
        let context = self.context;
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }

    /// Axis listener body: reports one effective range write.
    pub(super) fn dispatch_range_write(hub: &RefCell<Self>, axis: AxisId, range: VisibleRange) {
        match hub.try_borrow_mut() {
            Ok(mut hub) => hub.dispatch(GestureEvent::VisibleRangeChanged { axis, range }),
            Err(_) => warn!(%axis, "range write from inside a plugin hook not reported"),
        }
    }
}

impl<H: SurfaceHost + 'static> GestureSurface<H> {
    /// Registers a plugin; ids must be non-empty and unique per surface.
    pub fn register_plugin(&mut self, plugin: Box<dyn GesturePlugin>) -> ChartResult<()> {
        self.plugins.borrow_mut().insert(plugin)
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        self.plugins.borrow_mut().remove(plugin_id)
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.borrow().plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.borrow().contains(plugin_id)
    }
}
