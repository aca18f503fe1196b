use serde::{Deserialize, Serialize};

use crate::core::{AxisId, VisibleRange};
use crate::interaction::{GestureMode, ModifierSnapshot, RouterState};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PluginContext {
    pub gesture_state: RouterState,
    pub modifiers: ModifierSnapshot,
    pub axis_count: usize,
    pub series_count: usize,
    pub selected_points: usize,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    Activated { mode: GestureMode },
    Committed { mode: GestureMode },
    Cancelled { mode: GestureMode },
    WheelApplied { mode: GestureMode },
    VisibleRangeChanged { axis: AxisId, range: VisibleRange },
    SelectionChanged { selected: usize },
    SeriesUpdated { points_len: usize },
    ZoomedToExtents,
}

/// Extension hook interface for gesture observers such as loggers or
/// linked-cursor overlays.
///
/// Hooks run while an axis write is in progress and must not write axis
/// ranges themselves.
pub trait GesturePlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: GestureEvent, context: PluginContext);
}
