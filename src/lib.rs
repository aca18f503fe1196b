//! chart-gestures: input arbitration for interactive chart surfaces.
//!
//! A [`GestureSurface`] receives raw pointer, wheel and key events from a host
//! widget, decides which single gesture owns them, and pushes the resulting
//! visible ranges and selections back through [`api::SurfaceHost`]. Axes of
//! different surfaces can be linked with [`interaction::bind`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{EventDisposition, GestureSurface, NullHost, SurfaceConfig, SurfaceHost};
pub use error::{ChartError, ChartResult};
