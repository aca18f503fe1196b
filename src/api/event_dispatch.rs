use tracing::{debug, trace, warn};

use crate::core::Point;
use crate::interaction::{
    GestureInput, GestureMode, Key, ModifierSnapshot, MouseButton, RawInputEvent, RegionKind,
    ViewFrame, WheelGesture, WheelRoute,
};

use super::{EventDisposition, GestureEvent, GestureSurface, SurfaceHost};

impl<H: SurfaceHost + 'static> GestureSurface<H> {
    /// Routes one raw input event.
    ///
    /// Never fails: numeric problems are logged and the event is consumed
    /// without effect.
    pub fn handle_event(&mut self, event: RawInputEvent) -> EventDisposition {
        let snapshot = self.modifiers.update(&event);
        let disposition = self.dispatch_event(event, snapshot);
        self.sync_plugin_context();
        disposition
    }

    fn dispatch_event(
        &mut self,
        event: RawInputEvent,
        snapshot: ModifierSnapshot,
    ) -> EventDisposition {
        match event {
            RawInputEvent::PointerDown {
                position, button, ..
            } => self.on_pointer_down(position, button, snapshot),
            RawInputEvent::PointerMove { position, .. } => self.on_pointer_move(position, snapshot),
            RawInputEvent::PointerUp {
                position, button, ..
            } => self.on_pointer_up(position, button, snapshot),
            RawInputEvent::Wheel {
                position, delta_y, ..
            } => self.on_wheel(position, delta_y, snapshot),
            RawInputEvent::DoubleClick {
                position, button, ..
            } => self.on_double_click(position, button),
            RawInputEvent::KeyDown { key } | RawInputEvent::KeyUp { key } => {
                self.on_key(&event, key, snapshot)
            }
            RawInputEvent::FocusLost => match self.cancel_gesture() {
                Some(_) => EventDisposition::Suppress,
                None => EventDisposition::Forward,
            },
        }
    }

    fn gesture_input(&self, position: Point, snapshot: ModifierSnapshot) -> GestureInput {
        GestureInput {
            position,
            snapshot,
            region: self.layout.classify(position),
        }
    }

    fn on_pointer_down(
        &mut self,
        position: Point,
        button: MouseButton,
        snapshot: ModifierSnapshot,
    ) -> EventDisposition {
        if self.router.is_active() {
            return EventDisposition::Suppress;
        }
        let input = self.gesture_input(position, snapshot);
        let view = self.view_state();
        let frame = ViewFrame {
            view: &view,
            layout: &self.layout,
            series: &self.series,
            tuning: &self.tuning,
        };
        let Some(mode) = self.router.pointer_down(&input, button, &frame) else {
            return EventDisposition::Forward;
        };
        self.activation_view = Some(view);
        self.emit_gesture_event(GestureEvent::Activated { mode });
        EventDisposition::Suppress
    }

    fn on_pointer_move(&mut self, position: Point, snapshot: ModifierSnapshot) -> EventDisposition {
        if !self.router.is_active() {
            return EventDisposition::Forward;
        }
        if let Some(mode) = self.router.modifiers_changed(&snapshot) {
            self.roll_back_cancelled(mode);
            return EventDisposition::Suppress;
        }

        let input = self.gesture_input(position, snapshot);
        let view = self.view_state();
        let frame = ViewFrame {
            view: &view,
            layout: &self.layout,
            series: &self.series,
            tuning: &self.tuning,
        };
        let Some((mode, delta)) = self.router.pointer_move(&input, &frame) else {
            return EventDisposition::Suppress;
        };
        trace!(?mode, ranges = delta.ranges.len(), "gesture delta");
        if self.router.active_applies_live() {
            self.apply_view_delta(&delta);
        }
        if mode == GestureMode::RubberBandZoom {
            self.host.borrow_mut().show_rubber_band(delta.preview);
        }
        EventDisposition::Suppress
    }

    fn on_pointer_up(
        &mut self,
        position: Point,
        button: MouseButton,
        snapshot: ModifierSnapshot,
    ) -> EventDisposition {
        if !self.router.is_active() {
            return EventDisposition::Forward;
        }
        let input = self.gesture_input(position, snapshot);
        let view = self.view_state();
        let frame = ViewFrame {
            view: &view,
            layout: &self.layout,
            series: &self.series,
            tuning: &self.tuning,
        };
        let Some((mode, delta)) = self.router.pointer_up(&input, button, &frame) else {
            debug!(?button, "release of a non-activating button ignored");
            return EventDisposition::Suppress;
        };
        if mode == GestureMode::RubberBandZoom {
            self.host.borrow_mut().show_rubber_band(None);
        }
        self.apply_view_delta(&delta);
        self.activation_view = None;
        self.emit_gesture_event(GestureEvent::Committed { mode });
        EventDisposition::Suppress
    }

    fn on_wheel(
        &mut self,
        position: Point,
        delta_y: f64,
        snapshot: ModifierSnapshot,
    ) -> EventDisposition {
        let hit = self.layout.classify(position);
        let decision = match self.router.route_wheel(hit, &snapshot) {
            WheelRoute::Forward => return EventDisposition::Forward,
            WheelRoute::Suppress => return EventDisposition::Suppress,
            WheelRoute::Apply(decision) => decision,
        };
        if !self.behavior.allows(decision.mode) {
            return EventDisposition::Forward;
        }

        let view = self.view_state();
        let frame = ViewFrame {
            view: &view,
            layout: &self.layout,
            series: &self.series,
            tuning: &self.tuning,
        };
        match WheelGesture::tick(decision, position, delta_y, &frame) {
            Ok(delta) => {
                self.apply_view_delta(&delta);
                self.emit_gesture_event(GestureEvent::WheelApplied {
                    mode: decision.mode,
                });
            }
            Err(err) => warn!(error = %err, mode = ?decision.mode, "wheel tick ignored"),
        }
        EventDisposition::Suppress
    }

    fn on_double_click(&mut self, position: Point, button: MouseButton) -> EventDisposition {
        if self.router.is_active() {
            return EventDisposition::Suppress;
        }
        let over_plot = self.layout.classify(position).kind == RegionKind::PlotArea;
        if !over_plot || button != MouseButton::Left || !self.behavior.double_click_zoom_extents {
            return EventDisposition::Forward;
        }
        self.zoom_extents();
        EventDisposition::Suppress
    }

    fn on_key(
        &mut self,
        event: &RawInputEvent,
        key: Key,
        snapshot: ModifierSnapshot,
    ) -> EventDisposition {
        if !self.router.is_active() {
            return EventDisposition::Forward;
        }
        if matches!(event, RawInputEvent::KeyDown { .. }) && key == Key::Escape {
            let _ = self.cancel_gesture();
            return EventDisposition::Suppress;
        }
        if let Some(mode) = self.router.modifiers_changed(&snapshot) {
            self.roll_back_cancelled(mode);
            return EventDisposition::Suppress;
        }
        EventDisposition::Forward
    }
}
