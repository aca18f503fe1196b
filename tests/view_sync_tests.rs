use std::cell::RefCell;
use std::rc::Rc;

use chart_gestures::api::{GestureSurface, NullHost, SurfaceConfig};
use chart_gestures::core::{AxisId, Point, Rect, VisibleRange};
use chart_gestures::interaction::{
    AxisHandle, ModifierFlags, MouseButton, RawInputEvent, Region, RegionLayout, bind,
};

fn range(min: f64, max: f64) -> VisibleRange {
    VisibleRange::new(min, max).expect("valid range")
}

fn axis() -> AxisHandle {
    AxisHandle::new(AxisId::PRIMARY_X, range(0.0, 100.0))
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
fn bound_pair_settles_after_two_writes() {
    let a = axis();
    let b = axis();
    let _binding = bind(&a, &b);

    assert!(a.set_visible_range(range(10.0, 20.0)));

    assert_eq!(b.visible_range(), range(10.0, 20.0));
    assert_eq!(a.write_count() + b.write_count(), 2);

    // Repeating the same range is not a write.
    assert!(!b.set_visible_range(range(10.0, 20.0)));
    assert_eq!(a.write_count() + b.write_count(), 2);
}

#[test]
fn binding_mirrors_in_both_directions() {
    let a = axis();
    let b = axis();
    let _binding = bind(&a, &b);

    b.set_visible_range(range(-5.0, 5.0));
    assert_eq!(a.visible_range(), range(-5.0, 5.0));

    a.set_visible_range(range(1.0, 2.0));
    assert_eq!(b.visible_range(), range(1.0, 2.0));
    assert_eq!(a.write_count(), 2);
    assert_eq!(b.write_count(), 2);
}

#[test]
fn chained_bindings_propagate_transitively() {
    let a = axis();
    let b = axis();
    let c = axis();
    let _ab = bind(&a, &b);
    let _bc = bind(&b, &c);

    a.set_visible_range(range(30.0, 40.0));

    assert_eq!(c.visible_range(), range(30.0, 40.0));
    assert_eq!([a.write_count(), b.write_count(), c.write_count()], [1, 1, 1]);
}

#[test]
fn binding_cycle_terminates_with_one_write_per_axis() {
    let a = axis();
    let b = axis();
    let c = axis();
    let _ab = bind(&a, &b);
    let _bc = bind(&b, &c);
    let _ca = bind(&c, &a);

    let seen = Rc::new(RefCell::new(Vec::new()));
    for handle in [&a, &b, &c] {
        let log = Rc::clone(&seen);
        handle.subscribe(move |id, written| log.borrow_mut().push((id, written)));
    }

    a.set_visible_range(range(7.0, 8.0));

    assert_eq!([a.write_count(), b.write_count(), c.write_count()], [1, 1, 1]);
    assert_eq!(seen.borrow().len(), 3);
    for handle in [&a, &b, &c] {
        assert_eq!(handle.visible_range(), range(7.0, 8.0));
    }
}

#[test]
fn binding_expires_with_its_axes() {
    let a = axis();
    let binding = {
        let b = axis();
        bind(&a, &b)
    };

    assert!(!binding.is_live());
    assert!(a.set_visible_range(range(1.0, 2.0)));
    assert_eq!(a.write_count(), 1);
}

#[test]
fn pan_on_one_surface_moves_bound_x_axis_of_the_other() {
    let mut chart1 = build_surface();
    let chart2 = build_surface();
    let x1 = chart1.axis(AxisId::PRIMARY_X).expect("x axis").clone();
    let x2 = chart2.axis(AxisId::PRIMARY_X).expect("x axis").clone();
    let _link = bind(&x1, &x2);

    for event in [
        RawInputEvent::PointerDown {
            position: Point::new(100.0, 100.0),
            button: MouseButton::Left,
            modifiers: ModifierFlags::NONE,
        },
        RawInputEvent::PointerMove {
            position: Point::new(150.0, 120.0),
            modifiers: ModifierFlags::NONE,
        },
        RawInputEvent::PointerUp {
            position: Point::new(150.0, 120.0),
            button: MouseButton::Left,
            modifiers: ModifierFlags::NONE,
        },
    ] {
        chart1.handle_event(event);
    }

    let moved = range(-50.0, 450.0);
    assert_eq!(chart2.visible_range(AxisId::PRIMARY_X).expect("x"), moved);
    assert_eq!(chart2.visible_range(AxisId::PRIMARY_Y).expect("y"), range(0.0, 400.0));
    assert_eq!(x1.write_count() + x2.write_count(), 2);

    // The other surface's host hears about the mirrored range.
    let host2 = chart2.host();
    assert_eq!(host2.range_writes, vec![(AxisId::PRIMARY_X, moved)]);
}

#[test]
fn cancelling_a_gesture_restores_the_bound_axis_too() {
    let mut chart1 = build_surface();
    let chart2 = build_surface();
    let x1 = chart1.axis(AxisId::PRIMARY_X).expect("x axis").clone();
    let x2 = chart2.axis(AxisId::PRIMARY_X).expect("x axis").clone();
    let _link = bind(&x1, &x2);

    chart1.handle_event(RawInputEvent::PointerDown {
        position: Point::new(300.0, 415.0),
        button: MouseButton::Left,
        modifiers: ModifierFlags::NONE,
    });
    chart1.handle_event(RawInputEvent::PointerMove {
        position: Point::new(400.0, 415.0),
        modifiers: ModifierFlags::NONE,
    });
    assert_eq!(x2.visible_range(), range(-100.0, 400.0));

    chart1.cancel_gesture();
    assert_eq!(x2.visible_range(), range(0.0, 500.0));
}
