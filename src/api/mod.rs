//! Host-facing surface: configuration, event intake and view application.

mod axis_label_format;
mod behavior;
mod event_dispatch;
mod host;
mod plugin_dispatch;
mod plugin_registry;
mod surface;
mod surface_config;
mod validation;
mod view_apply;

pub use axis_label_format::{
    AxisLabelFormat, format_time_label, format_time_label_with_offset, format_value_label,
};
pub use behavior::GestureInputBehavior;
pub use host::{EventDisposition, NullHost, SurfaceHost};
pub use surface::GestureSurface;
pub use surface_config::SurfaceConfig;

pub use crate::extensions::{GestureEvent, GesturePlugin, PluginContext};
