use chart_gestures::core::{AxisId, Point, Rect};
use chart_gestures::interaction::{Region, RegionHit, RegionKind, RegionLayout, classify};

fn rect(left: f64, top: f64, right: f64, bottom: f64) -> Rect {
    Rect::new(left, top, right, bottom).expect("valid rect")
}

fn layout() -> RegionLayout {
    RegionLayout::new()
        .with_region(Region::axis(AxisId::PRIMARY_Y, rect(0.0, 0.0, 50.0, 400.0)))
        .with_region(Region::plot_area(rect(50.0, 0.0, 550.0, 400.0)))
        .with_region(Region::axis(AxisId::PRIMARY_X, rect(50.0, 400.0, 550.0, 430.0)))
}

#[test]
fn points_resolve_to_their_region() {
    let layout = layout();

    assert_eq!(
        layout.classify(Point::new(25.0, 200.0)),
        RegionHit {
            kind: RegionKind::YAxis,
            axis: Some(AxisId::PRIMARY_Y),
        }
    );
    assert_eq!(layout.classify(Point::new(300.0, 200.0)).kind, RegionKind::PlotArea);
    assert_eq!(
        layout.classify(Point::new(300.0, 415.0)).axis,
        Some(AxisId::PRIMARY_X)
    );
    assert_eq!(layout.classify(Point::new(700.0, 200.0)), RegionHit::NONE);
}

#[test]
fn shared_edges_follow_axis_precedence() {
    let layout = layout();

    // x = 50 belongs to both the y strip and the plot area.
    assert_eq!(layout.classify(Point::new(50.0, 200.0)).kind, RegionKind::YAxis);
    // y = 400 belongs to both the plot area and the x strip.
    assert_eq!(layout.classify(Point::new(300.0, 400.0)).kind, RegionKind::XAxis);
}

#[test]
fn overlapping_axes_prefer_y_over_x() {
    let regions = [
        Region::axis(AxisId::PRIMARY_X, rect(0.0, 0.0, 100.0, 100.0)),
        Region::axis(AxisId::PRIMARY_Y, rect(0.0, 0.0, 100.0, 100.0)),
        Region::plot_area(rect(0.0, 0.0, 100.0, 100.0)),
    ];

    assert_eq!(classify(Point::new(10.0, 10.0), &regions).kind, RegionKind::YAxis);
}

#[test]
fn first_listed_region_wins_within_a_kind() {
    let regions = [
        Region::axis(AxisId::y(1), rect(0.0, 0.0, 100.0, 100.0)),
        Region::axis(AxisId::y(0), rect(0.0, 0.0, 100.0, 100.0)),
    ];

    assert_eq!(classify(Point::new(5.0, 5.0), &regions).axis, Some(AxisId::y(1)));
}

#[test]
fn non_finite_points_and_none_regions_never_match() {
    let regions = [Region {
        kind: RegionKind::None,
        axis: None,
        rect: rect(0.0, 0.0, 100.0, 100.0),
    }];

    assert_eq!(classify(Point::new(10.0, 10.0), &regions), RegionHit::NONE);
    assert_eq!(layout().classify(Point::new(f64::NAN, 10.0)), RegionHit::NONE);
    assert_eq!(classify(Point::new(10.0, 10.0), &[]), RegionHit::NONE);
}

#[test]
fn mapping_rect_prefers_plot_area() {
    let layout = layout();
    assert_eq!(layout.mapping_rect(AxisId::PRIMARY_X), layout.plot_area());

    let strip_only =
        RegionLayout::new().with_region(Region::axis(AxisId::PRIMARY_X, rect(0.0, 0.0, 10.0, 5.0)));
    assert_eq!(
        strip_only.mapping_rect(AxisId::PRIMARY_X),
        Some(rect(0.0, 0.0, 10.0, 5.0))
    );
    assert_eq!(strip_only.mapping_rect(AxisId::PRIMARY_Y), None);
}

#[test]
fn inverted_rects_are_rejected() {
    assert!(Rect::new(10.0, 0.0, 0.0, 10.0).is_err());
    assert!(Rect::new(0.0, 0.0, f64::INFINITY, 10.0).is_err());
}

#[test]
fn deserialized_regions_keep_rect_invariants() {
    let region = Region::plot_area(rect(50.0, 0.0, 550.0, 400.0));
    let json = serde_json::to_string(&region).expect("serialize");
    let parsed: Region = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed, region);

    let inverted = json.replace("\"left\":50.0", "\"left\":600.0");
    assert_ne!(inverted, json);
    assert!(serde_json::from_str::<Region>(&inverted).is_err());

    let non_finite = r#"{ "left": 0.0, "top": 0.0, "right": 1e999, "bottom": 1.0 }"#;
    assert!(serde_json::from_str::<Rect>(non_finite).is_err());
}

#[test]
fn clamping_into_a_validated_rect_stays_inside() {
    let plot = rect(50.0, 0.0, 550.0, 400.0);

    assert_eq!(plot.clamp_point(Point::new(-20.0, 500.0)), Point::new(50.0, 400.0));
    assert_eq!(
        (plot.left(), plot.top(), plot.right(), plot.bottom()),
        (50.0, 0.0, 550.0, 400.0)
    );
}
