//! Metrics triple -> scene layout.

use crate::metrics::MetricsInput;

use super::model::*;

/// Reference value drawn on every axis, and the upper axis bound.
pub const OPTIMAL: u32 = 15;
/// Spacing of numeric tick labels.
pub const TICK_INTERVAL: u32 = 5;

const TICK_FONT_SIZE: f64 = 12.0;
const TITLE_FONT_SIZE: f64 = 18.0;
const GUIDE_WIDTH: f64 = 3.0;
const MARKER_HALF_LENGTH: f64 = 0.2;
const MARKER_WIDTH: f64 = 3.0;

pub const CAMERA: Camera = Camera {
    elevation_deg: 30.0,
    azimuth_deg: 40.0,
    vertical: Axis::Performance,
};

/// Lay out the chart for `input`. Pure and total.
pub fn build_scene(input: &MetricsInput) -> SceneDescription {
    let optimal = f64::from(OPTIMAL);

    let actual = Triangle::on_axes(
        f64::from(input.people),
        f64::from(input.personal),
        f64::from(input.performance),
    );
    let optimal_tri = Triangle::on_axes(optimal, optimal, optimal);

    let edge = Stroke::solid(Rgb::BLACK, 2.0);
    let edges = actual
        .edges()
        .map(|(from, to)| Segment {
            from,
            to,
            stroke: edge,
        })
        .collect();

    let surfaces = vec![
        Surface {
            triangle: actual,
            face: Rgb::GOLD,
            face_opacity: 0.0,
            edge: Stroke::solid(Rgb::BLACK, 3.0),
        },
        Surface {
            triangle: optimal_tri,
            face: Rgb::CYAN,
            face_opacity: 0.0,
            edge: Stroke::dashed(Rgb::GREY, 1.0),
        },
    ];

    let axis_guides = Axis::ALL
        .iter()
        .map(|&axis| Segment {
            from: axis.point(1.0),
            to: axis.point(optimal),
            stroke: Stroke::solid(axis.color(), GUIDE_WIDTH),
        })
        .collect();

    SceneDescription {
        actual,
        optimal: optimal_tri,
        edges,
        surfaces,
        axis_guides,
        tick_labels: tick_labels(),
        markers: markers(),
        axis_labels: axis_labels(optimal),
        bounds: [AxisRange { min: 0.0, max: optimal }; 3],
        decorations: Decorations::NONE,
        camera: CAMERA,
    }
}

fn tick_label(position: Point3, value: u32) -> Label {
    Label {
        position,
        text: value.to_string(),
        color: Rgb::BLACK,
        font_size: TICK_FONT_SIZE,
        weight: FontWeight::Normal,
        h_align: HAlign::Center,
        v_align: VAlign::Center,
        rotation_deg: 0.0,
    }
}

/// Multiples of the tick interval. Only the vertical axis labels the origin.
fn tick_labels() -> Vec<Label> {
    let mut out = Vec::new();
    let ticks = || (0..=OPTIMAL).step_by(TICK_INTERVAL as usize);

    for i in ticks() {
        let v = f64::from(i);
        let pos = if i == 0 { [0.0, 0.0, 0.0] } else { [2.0, 0.0, v] };
        out.push(tick_label(pos, i));
    }
    for i in ticks().filter(|&i| i != 0) {
        out.push(tick_label([f64::from(i) + 0.5, -1.0, 0.5], i));
    }
    for i in ticks().filter(|&i| i != 0) {
        out.push(tick_label([-1.0, f64::from(i) + 0.5, 0.5], i));
    }
    out
}

/// Short cross strokes at each interior integer step.
fn markers() -> Vec<Segment> {
    let (lo, hi) = (-MARKER_HALF_LENGTH, MARKER_HALF_LENGTH);
    let mut out = Vec::new();
    for axis in Axis::ALL {
        let stroke = Stroke::solid(axis.color(), MARKER_WIDTH);
        for i in 1..OPTIMAL {
            let v = f64::from(i);
            let (from, to) = match axis {
                Axis::People => ([v, lo, 0.0], [v, hi, 0.0]),
                Axis::Personal => ([lo, v, 0.0], [hi, v, 0.0]),
                Axis::Performance => ([lo, 0.0, v], [hi, 0.0, v]),
            };
            out.push(Segment { from, to, stroke });
        }
    }
    out
}

fn axis_labels(optimal: f64) -> Vec<Label> {
    let title = |axis: Axis, position: Point3| Label {
        position,
        text: axis.title().to_string(),
        color: axis.color(),
        font_size: TITLE_FONT_SIZE,
        weight: FontWeight::Bold,
        h_align: HAlign::Center,
        v_align: VAlign::Center,
        rotation_deg: 0.0,
    };

    vec![
        title(Axis::People, [10.0, -5.0, 5.0]),
        title(Axis::Performance, [-4.0, 5.0, optimal]),
        Label {
            h_align: HAlign::Left,
            v_align: VAlign::Baseline,
            rotation_deg: 175.0,
            ..title(Axis::Personal, [-5.0, 5.0, 0.0])
        },
    ]
}
