use std::cell::RefCell;
use std::rc::Rc;

use chart_gestures::api::{GestureSurface, NullHost, SurfaceConfig};
use chart_gestures::core::{AxisId, DataPoint, Point, Rect, Series, VisibleRange};
use chart_gestures::extensions::{GestureEvent, GesturePlugin, PluginContext};
use chart_gestures::interaction::{
    GestureMode, Key, ModifierFlags, MouseButton, RawInputEvent, Region, RegionLayout,
    RouterState, bind,
};

type EventLog = Rc<RefCell<Vec<(GestureEvent, PluginContext)>>>;

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: EventLog,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: EventLog) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl GesturePlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: GestureEvent, context: PluginContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn event_kind(event: &GestureEvent) -> &'static str {
    match event {
        GestureEvent::Activated { .. } => "activated",
        GestureEvent::Committed { .. } => "committed",
        GestureEvent::Cancelled { .. } => "cancelled",
        GestureEvent::WheelApplied { .. } => "wheel",
        GestureEvent::VisibleRangeChanged { .. } => "range",
        GestureEvent::SelectionChanged { .. } => "selection",
        GestureEvent::SeriesUpdated { .. } => "series",
        GestureEvent::ZoomedToExtents => "extents",
    }
}

fn build_surface() -> GestureSurface<NullHost> {
    let config = SurfaceConfig::new((0.0, 500.0), (0.0, 400.0));
    let mut surface = GestureSurface::new(NullHost::default(), config).expect("surface init");
    surface.set_layout(
        RegionLayout::new()
            .with_region(Region::axis(
                AxisId::PRIMARY_Y,
                Rect::new(0.0, 0.0, 50.0, 400.0).expect("y strip"),
            ))
            .with_region(Region::plot_area(
                Rect::new(50.0, 0.0, 550.0, 400.0).expect("plot"),
            ))
            .with_region(Region::axis(
                AxisId::PRIMARY_X,
                Rect::new(50.0, 400.0, 550.0, 430.0).expect("x strip"),
            )),
    );
    surface
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let mut surface = build_surface();
    let events = Rc::new(RefCell::new(Vec::new()));
    surface
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    let series = Series::new("s", vec![DataPoint::new(150.0, 350.0)]).expect("series");
    surface.add_series(series).expect("add series");

    // Pan on the x strip.
    surface.handle_event(RawInputEvent::PointerDown {
        position: Point::new(300.0, 415.0),
        button: MouseButton::Left,
        modifiers: ModifierFlags::NONE,
    });
    surface.handle_event(RawInputEvent::PointerMove {
        position: Point::new(320.0, 415.0),
        modifiers: ModifierFlags::NONE,
    });
    surface.handle_event(RawInputEvent::PointerUp {
        position: Point::new(320.0, 415.0),
        button: MouseButton::Left,
        modifiers: ModifierFlags::NONE,
    });

    // The point drawn at (200, 50) now sits at (220, 50).
    surface.handle_event(RawInputEvent::PointerDown {
        position: Point::new(220.0, 50.0),
        button: MouseButton::Left,
        modifiers: ModifierFlags::CTRL,
    });
    surface.handle_event(RawInputEvent::PointerUp {
        position: Point::new(220.0, 50.0),
        button: MouseButton::Left,
        modifiers: ModifierFlags::CTRL,
    });

    // Wheel zoom on the y axis, then a cancelled pan.
    surface.handle_event(RawInputEvent::Wheel {
        position: Point::new(25.0, 200.0),
        delta_y: -120.0,
        modifiers: ModifierFlags::CTRL,
    });
    surface.handle_event(RawInputEvent::PointerDown {
        position: Point::new(300.0, 200.0),
        button: MouseButton::Left,
        modifiers: ModifierFlags::NONE,
    });
    surface.handle_event(RawInputEvent::KeyDown { key: Key::Escape });

    let events = events.borrow();
    let kinds: Vec<&'static str> = events.iter().map(|(event, _)| event_kind(event)).collect();
    assert_eq!(
        kinds,
        vec![
            "series",
            "activated",
            "range",
            "committed",
            "activated",
            "selection",
            "committed",
            "range",
            "wheel",
            "activated",
            "cancelled",
        ]
    );

    let (activated, context) = events[1];
    assert_eq!(activated, GestureEvent::Activated { mode: GestureMode::AxisDrag });
    assert_eq!(context.gesture_state, RouterState::Active(GestureMode::AxisDrag));
    assert_eq!(context.axis_count, 2);
    assert_eq!(context.series_count, 1);

    let (_, after_select) = events[5];
    assert_eq!(after_select.selected_points, 1);
    assert!(after_select.modifiers.ctrl);

    let (_, after_commit) = events[6];
    assert_eq!(after_commit.gesture_state, RouterState::Idle);
}

#[test]
fn plugin_ids_must_be_unique_and_non_empty() {
    let mut surface = build_surface();
    let events = Rc::new(RefCell::new(Vec::new()));

    surface
        .register_plugin(Box::new(RecordingPlugin::new("a", events.clone())))
        .expect("first");
    assert!(
        surface
            .register_plugin(Box::new(RecordingPlugin::new("a", events.clone())))
            .is_err()
    );
    assert!(
        surface
            .register_plugin(Box::new(RecordingPlugin::new("", events.clone())))
            .is_err()
    );
    assert_eq!(surface.plugin_count(), 1);
    assert!(surface.has_plugin("a"));

    assert!(surface.unregister_plugin("a"));
    assert!(!surface.unregister_plugin("a"));
    assert_eq!(surface.plugin_count(), 0);
}

#[test]
fn zoom_extents_emits_range_changes_then_summary() {
    let mut surface = build_surface();
    let events = Rc::new(RefCell::new(Vec::new()));
    surface
        .add_series(
            Series::new("s", vec![DataPoint::new(10.0, 1.0), DataPoint::new(20.0, 3.0)])
                .expect("series"),
        )
        .expect("add series");
    surface
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    assert!(surface.zoom_extents());
    assert!(!surface.zoom_extents());

    let kinds: Vec<&'static str> = events
        .borrow()
        .iter()
        .map(|(event, _)| event_kind(event))
        .collect();
    assert_eq!(kinds, vec!["range", "range", "extents"]);
}

fn range(min: f64, max: f64) -> VisibleRange {
    VisibleRange::new(min, max).expect("range")
}

fn last_seen_range(events: &EventLog, axis: AxisId) -> Option<VisibleRange> {
    events
        .borrow()
        .iter()
        .rev()
        .find_map(|(event, _)| match event {
            GestureEvent::VisibleRangeChanged { axis: seen, range } if *seen == axis => {
                Some(*range)
            }
            _ => None,
        })
}

fn drag(surface: &mut GestureSurface<NullHost>, from: Point, to: Point) {
    surface.handle_event(RawInputEvent::PointerDown {
        position: from,
        button: MouseButton::Left,
        modifiers: ModifierFlags::NONE,
    });
    surface.handle_event(RawInputEvent::PointerMove {
        position: to,
        modifiers: ModifierFlags::NONE,
    });
}

#[test]
fn cancelled_pan_reports_restored_ranges() {
    let mut surface = build_surface();
    let events: EventLog = Rc::new(RefCell::new(Vec::new()));
    surface
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    drag(&mut surface, Point::new(100.0, 100.0), Point::new(150.0, 120.0));
    surface.handle_event(RawInputEvent::KeyDown { key: Key::Escape });

    let recorded: Vec<GestureEvent> = events.borrow().iter().map(|(event, _)| *event).collect();
    assert_eq!(
        recorded,
        vec![
            GestureEvent::Activated {
                mode: GestureMode::Pan
            },
            GestureEvent::VisibleRangeChanged {
                axis: AxisId::PRIMARY_X,
                range: range(-50.0, 450.0),
            },
            GestureEvent::VisibleRangeChanged {
                axis: AxisId::PRIMARY_Y,
                range: range(20.0, 420.0),
            },
            GestureEvent::VisibleRangeChanged {
                axis: AxisId::PRIMARY_X,
                range: range(0.0, 500.0),
            },
            GestureEvent::VisibleRangeChanged {
                axis: AxisId::PRIMARY_Y,
                range: range(0.0, 400.0),
            },
            GestureEvent::Cancelled {
                mode: GestureMode::Pan
            },
        ]
    );
    for axis in [AxisId::PRIMARY_X, AxisId::PRIMARY_Y] {
        assert_eq!(
            last_seen_range(&events, axis),
            Some(surface.visible_range(axis).expect("axis"))
        );
    }
}

#[test]
fn bound_peer_surface_reports_mirrored_writes() {
    let mut leader = build_surface();
    let mut follower = build_surface();
    let leader_events: EventLog = Rc::new(RefCell::new(Vec::new()));
    let follower_events: EventLog = Rc::new(RefCell::new(Vec::new()));
    leader
        .register_plugin(Box::new(RecordingPlugin::new("leader", leader_events.clone())))
        .expect("register leader plugin");
    follower
        .register_plugin(Box::new(RecordingPlugin::new(
            "follower",
            follower_events.clone(),
        )))
        .expect("register follower plugin");

    let _binding = bind(
        leader.axis(AxisId::PRIMARY_X).expect("leader x"),
        follower.axis(AxisId::PRIMARY_X).expect("follower x"),
    );
    drag(&mut leader, Point::new(100.0, 100.0), Point::new(150.0, 120.0));

    let mirrored = follower_events.borrow();
    assert_eq!(mirrored.len(), 1);
    let (event, context) = mirrored[0];
    assert_eq!(
        event,
        GestureEvent::VisibleRangeChanged {
            axis: AxisId::PRIMARY_X,
            range: range(-50.0, 450.0),
        }
    );
    assert_eq!(context.gesture_state, RouterState::Idle);
    assert_eq!(context.axis_count, 2);
    assert_eq!(
        follower.visible_range(AxisId::PRIMARY_X).expect("x"),
        range(-50.0, 450.0)
    );
    assert_eq!(follower.host().writes_for(AxisId::PRIMARY_X), 1);
    assert_eq!(
        last_seen_range(&leader_events, AxisId::PRIMARY_X),
        Some(range(-50.0, 450.0))
    );
}

#[test]
fn programmatic_range_writes_are_reported_once() {
    let mut surface = build_surface();
    let events: EventLog = Rc::new(RefCell::new(Vec::new()));
    surface
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    surface
        .set_visible_range(AxisId::PRIMARY_Y, range(10.0, 20.0))
        .expect("set range");
    surface
        .set_visible_range(AxisId::PRIMARY_Y, range(10.0, 20.0))
        .expect("same range");

    assert_eq!(events.borrow().len(), 1);
    assert_eq!(
        last_seen_range(&events, AxisId::PRIMARY_Y),
        Some(range(10.0, 20.0))
    );
}
