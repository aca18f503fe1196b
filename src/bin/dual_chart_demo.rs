use chart_gestures::api::{
    AxisLabelFormat, EventDisposition, GestureSurface, NullHost, SurfaceConfig,
};
use chart_gestures::core::{AxisId, Point, RandomWalkGenerator, Rect, Series, random_walk_points};
use chart_gestures::interaction::{
    AxisBinding, ModifierFlags, MouseButton, RawInputEvent, Region, RegionLayout, SelectedPoint,
    bind,
};
use chart_gestures::telemetry::init_default_tracing;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

const START_MS: u64 = 1_609_459_200_000;

#[derive(Debug)]
struct CliArgs {
    seed: u64,
    points: usize,
    output: Option<PathBuf>,
    x_labels: AxisLabelFormat,
    y_labels: AxisLabelFormat,
}

#[derive(Debug, Serialize)]
struct ChartState {
    x_range: (f64, f64),
    y_range: (f64, f64),
    x_labels: (String, String),
    y_labels: (String, String),
    selection: Vec<SelectedPoint>,
    range_writes: usize,
}

#[derive(Debug, Serialize)]
struct StepReport {
    step: String,
    suppressed: usize,
    chart1: ChartState,
    chart2: ChartState,
}

#[derive(Debug, Serialize)]
struct DemoReport {
    seed: u64,
    points: usize,
    x_labels: AxisLabelFormat,
    y_labels: AxisLabelFormat,
    steps: Vec<StepReport>,
}

struct Demo {
    chart1: GestureSurface<NullHost>,
    chart2: GestureSurface<NullHost>,
    _x_link: AxisBinding,
    labels: (AxisLabelFormat, AxisLabelFormat),
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let mut demo = build_demo(&args)?;
    let steps = scripted_session()
        .into_iter()
        .map(|(step, chart, events)| replay(&mut demo, step, chart, events))
        .collect();
    let report = DemoReport {
        seed: args.seed,
        points: args.points,
        x_labels: args.x_labels,
        y_labels: args.y_labels,
        steps,
    };

    let payload = serde_json::to_string_pretty(&report)
        .map_err(|err| format!("failed to serialize json: {err}"))?;
    match &args.output {
        Some(path) => fs::write(path, payload)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{payload}");
            Ok(())
        }
    }
}

fn layout() -> Result<RegionLayout, String> {
    let rect = |l, t, r, b| Rect::new(l, t, r, b).map_err(|err| err.to_string());
    Ok(RegionLayout::new()
        .with_region(Region::axis(AxisId::PRIMARY_Y, rect(0.0, 0.0, 50.0, 400.0)?))
        .with_region(Region::plot_area(rect(50.0, 0.0, 550.0, 400.0)?))
        .with_region(Region::axis(AxisId::PRIMARY_X, rect(50.0, 400.0, 550.0, 430.0)?)))
}

fn surface(
    rng: &mut StdRng,
    series_names: &[&str],
    points: usize,
) -> Result<GestureSurface<NullHost>, String> {
    let end_ms = START_MS as f64 + (points as f64) * 50.0;
    let config = SurfaceConfig::new((START_MS as f64, end_ms), (3500.0, 3540.0));
    let mut surface = GestureSurface::new(NullHost::default(), config).map_err(|e| e.to_string())?;
    surface.set_layout(layout()?);

    let mut generator = RandomWalkGenerator::default();
    for name in series_names {
        generator.reset();
        let data = random_walk_points(rng, &mut generator, START_MS, points);
        let series = Series::new(*name, data).map_err(|e| e.to_string())?;
        surface.add_series(series).map_err(|e| e.to_string())?;
    }
    surface.zoom_extents();
    Ok(surface)
}

fn build_demo(args: &CliArgs) -> Result<Demo, String> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let chart1 = surface(&mut rng, &["BidQty", "AskQty"], args.points)?;
    let chart2 = surface(&mut rng, &["TradePrice"], args.points)?;

    let (Some(x1), Some(x2)) = (chart1.axis(AxisId::PRIMARY_X), chart2.axis(AxisId::PRIMARY_X))
    else {
        return Err("primary x axes missing".to_owned());
    };
    let x_link = bind(x1, x2);
    Ok(Demo {
        chart1,
        chart2,
        _x_link: x_link,
        labels: (args.x_labels, args.y_labels),
    })
}

fn down(x: f64, y: f64, modifiers: ModifierFlags) -> RawInputEvent {
    RawInputEvent::PointerDown {
        position: Point::new(x, y),
        button: MouseButton::Left,
        modifiers,
    }
}

fn drag_to(x: f64, y: f64, modifiers: ModifierFlags) -> RawInputEvent {
    RawInputEvent::PointerMove {
        position: Point::new(x, y),
        modifiers,
    }
}

fn up(x: f64, y: f64, modifiers: ModifierFlags) -> RawInputEvent {
    RawInputEvent::PointerUp {
        position: Point::new(x, y),
        button: MouseButton::Left,
        modifiers,
    }
}

fn scripted_session() -> Vec<(&'static str, u8, Vec<RawInputEvent>)> {
    let none = ModifierFlags::NONE;
    vec![
        (
            "pan chart 1 left by 100 px",
            1,
            vec![down(300.0, 200.0, none), drag_to(250.0, 200.0, none), up(200.0, 200.0, none)],
        ),
        (
            "wheel zoom in over chart 2 plot",
            2,
            vec![RawInputEvent::Wheel {
                position: Point::new(300.0, 200.0),
                delta_y: -240.0,
                modifiers: none,
            }],
        ),
        (
            "ctrl wheel over chart 1 y axis",
            1,
            vec![RawInputEvent::Wheel {
                position: Point::new(25.0, 200.0),
                delta_y: 120.0,
                modifiers: ModifierFlags::CTRL,
            }],
        ),
        (
            "shift drag on chart 2 x axis scales it",
            2,
            vec![
                down(300.0, 415.0, ModifierFlags::SHIFT),
                drag_to(360.0, 415.0, ModifierFlags::SHIFT),
                up(360.0, 415.0, ModifierFlags::SHIFT),
            ],
        ),
        (
            "rubber band zoom on chart 2",
            2,
            vec![
                down(150.0, 50.0, ModifierFlags::SHIFT),
                drag_to(300.0, 200.0, ModifierFlags::SHIFT),
                up(450.0, 350.0, ModifierFlags::SHIFT),
            ],
        ),
        (
            "ctrl click selects nearest point on chart 1",
            1,
            vec![down(300.0, 200.0, ModifierFlags::CTRL), up(300.0, 200.0, ModifierFlags::CTRL)],
        ),
        (
            "pan cancelled by focus loss",
            1,
            vec![down(300.0, 200.0, none), drag_to(100.0, 300.0, none), RawInputEvent::FocusLost],
        ),
        (
            "double click zooms chart 1 to extents",
            1,
            vec![RawInputEvent::DoubleClick {
                position: Point::new(300.0, 200.0),
                button: MouseButton::Left,
                modifiers: none,
            }],
        ),
    ]
}

fn replay(demo: &mut Demo, step: &str, chart: u8, events: Vec<RawInputEvent>) -> StepReport {
    let target = if chart == 1 {
        &mut demo.chart1
    } else {
        &mut demo.chart2
    };
    let suppressed = events
        .into_iter()
        .map(|event| target.handle_event(event))
        .filter(|disposition| *disposition == EventDisposition::Suppress)
        .count();
    StepReport {
        step: step.to_owned(),
        suppressed,
        chart1: chart_state(&demo.chart1, demo.labels),
        chart2: chart_state(&demo.chart2, demo.labels),
    }
}

fn chart_state(
    surface: &GestureSurface<NullHost>,
    (x_format, y_format): (AxisLabelFormat, AxisLabelFormat),
) -> ChartState {
    let bounds = |axis| {
        surface
            .visible_range(axis)
            .map_or((f64::NAN, f64::NAN), |range| range.bounds())
    };
    let x_range = bounds(AxisId::PRIMARY_X);
    let y_range = bounds(AxisId::PRIMARY_Y);
    ChartState {
        x_range,
        y_range,
        x_labels: (x_format.format(x_range.0), x_format.format(x_range.1)),
        y_labels: (y_format.format(y_range.0), y_format.format(y_range.1)),
        selection: surface.selection().points().to_vec(),
        range_writes: surface.host().range_writes.len(),
    }
}

fn parse_args() -> Result<CliArgs, String> {
    const USAGE: &str = "usage: dual_chart_demo [--seed <u64>] [--points <count>] \
                         [--output <path>] [--utc-offset <minutes>] [--precision <decimals>]";
    let mut parsed = CliArgs {
        seed: 42,
        points: 500,
        output: None,
        x_labels: AxisLabelFormat::Time { offset_minutes: 0 },
        y_labels: AxisLabelFormat::default(),
    };
    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--seed" => {
                parsed.seed = value("--seed")?
                    .parse()
                    .map_err(|err| format!("invalid --seed: {err}"))?;
            }
            "--points" => {
                parsed.points = value("--points")?
                    .parse()
                    .map_err(|err| format!("invalid --points: {err}"))?;
            }
            "--output" => parsed.output = Some(PathBuf::from(value("--output")?)),
            "--utc-offset" => {
                let offset_minutes = value("--utc-offset")?
                    .parse()
                    .map_err(|err| format!("invalid --utc-offset: {err}"))?;
                parsed.x_labels = AxisLabelFormat::Time { offset_minutes }
                    .validate()
                    .map_err(|err| err.to_string())?;
            }
            "--precision" => {
                let precision = value("--precision")?
                    .parse()
                    .map_err(|err| format!("invalid --precision: {err}"))?;
                parsed.y_labels = AxisLabelFormat::Value { precision }
                    .validate()
                    .map_err(|err| err.to_string())?;
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }
    if parsed.points < 2 {
        return Err("--points must be at least 2".to_owned());
    }
    Ok(parsed)
}
