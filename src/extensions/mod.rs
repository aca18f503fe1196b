//! Optional hooks observing a gesture surface.
//!
//! Plugins read surface context but never mutate surface internals.

pub mod plugins;

pub use plugins::{GestureEvent, GesturePlugin, PluginContext};
