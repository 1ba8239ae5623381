//! Scene -> SVG document.
//!
//! Lines and polygons are painted back to front by mean depth; labels are
//! painted last so they are never hidden by geometry.

use std::fmt::Write;

use crate::scene::{FontWeight, HAlign, Label, LineStyle, Point3, Rgb, SceneDescription, Stroke, VAlign};

use super::clip::ClipBox;
use super::projection::{Projector, Rect, Viewport};

/// Points per inch; figure sizes are laid out in points.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Subplot area as fractions of the figure (left, bottom, right, top).
const SUBPLOT: [f64; 4] = [0.125, 0.11, 0.9, 0.88];
/// Fraction of the subplot area occupied by the projected bounding box.
const BOX_FILL: f64 = 0.8;

/// Output geometry of one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    pub background: Rgb,
    pub font_family: String,
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            width_in: 12.0,
            height_in: 8.0,
            dpi: 300,
            background: Rgb::WHITE,
            font_family: "DejaVu Sans".into(),
        }
    }
}

impl Figure {
    pub fn width_pt(&self) -> f64 {
        self.width_in * POINTS_PER_INCH
    }

    pub fn height_pt(&self) -> f64 {
        self.height_in * POINTS_PER_INCH
    }

    /// Raster size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.width_in * dpi).round() as u32,
            (self.height_in * dpi).round() as u32,
        )
    }

    fn plot_area(&self) -> Rect {
        let (w, h) = (self.width_pt(), self.height_pt());
        let [left, bottom, right, top] = SUBPLOT;
        let full = Rect {
            x: left * w,
            y: (1.0 - top) * h,
            width: (right - left) * w,
            height: (top - bottom) * h,
        };
        let inset_w = full.width * (1.0 - BOX_FILL) / 2.0;
        let inset_h = full.height * (1.0 - BOX_FILL) / 2.0;
        Rect {
            x: full.x + inset_w,
            y: full.y + inset_h,
            width: full.width * BOX_FILL,
            height: full.height * BOX_FILL,
        }
    }
}

enum Shape {
    Line { a: (f64, f64), b: (f64, f64), stroke: Stroke },
    Polygon { pts: Vec<(f64, f64)>, fill: Rgb, fill_opacity: f64, stroke: Stroke },
}

struct Painted {
    depth: f64,
    shape: Shape,
}

/// Lay out `scene` on `figure`. The document is sized in pixels with a
/// viewBox in points, so the rasterizer scales by `dpi / 72`.
pub fn scene_to_svg(scene: &SceneDescription, figure: &Figure) -> String {
    let viewport = Viewport::fit(Projector::new(&scene.camera, scene.bounds), figure.plot_area());
    let place = |p: Point3| viewport.to_figure(p);
    let clip = ClipBox::around(&scene.bounds);

    let mut painted: Vec<Painted> = Vec::new();
    for surface in &scene.surfaces {
        let clipped = clip.polygon(&surface.triangle.vertices);
        if clipped.len() < 3 {
            continue;
        }
        let placed: Vec<_> = clipped.into_iter().map(place).collect();
        let depth = placed.iter().map(|p| p.2).sum::<f64>() / placed.len() as f64;
        painted.push(Painted {
            depth,
            shape: Shape::Polygon {
                pts: placed.iter().map(|p| (p.0, p.1)).collect(),
                fill: surface.face,
                fill_opacity: surface.face_opacity,
                stroke: surface.edge,
            },
        });
    }
    for seg in scene.segments() {
        let Some((from, to)) = clip.segment(seg.from, seg.to) else {
            continue;
        };
        let a = place(from);
        let b = place(to);
        painted.push(Painted {
            depth: (a.2 + b.2) / 2.0,
            shape: Shape::Line {
                a: (a.0, a.1),
                b: (b.0, b.1),
                stroke: seg.stroke,
            },
        });
    }
    // stable: equal depths keep scene order
    painted.sort_by(|l, r| l.depth.total_cmp(&r.depth));

    let (px_w, px_h) = figure.pixel_size();
    let (w, h) = (figure.width_pt(), figure.height_pt());
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{px_w}" height="{px_h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        out,
        r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
        figure.background.to_hex()
    );

    for p in &painted {
        match &p.shape {
            Shape::Line { a, b, stroke } => {
                let _ = writeln!(
                    out,
                    r#"<line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" {} stroke-linecap="butt"/>"#,
                    a.0,
                    a.1,
                    b.0,
                    b.1,
                    stroke_attrs(stroke)
                );
            }
            Shape::Polygon { pts, fill, fill_opacity, stroke } => {
                let points: Vec<String> = pts.iter().map(|(x, y)| format!("{x:.3},{y:.3}")).collect();
                let _ = writeln!(
                    out,
                    r#"<polygon points="{}" fill="{}" fill-opacity="{}" {} stroke-linejoin="round"/>"#,
                    points.join(" "),
                    fill.to_hex(),
                    fill_opacity,
                    stroke_attrs(stroke)
                );
            }
        }
    }

    for label in scene.labels() {
        let (x, y, _) = place(label.position);
        write_label(&mut out, label, x, y, &figure.font_family);
    }

    out.push_str("</svg>\n");
    out
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut s = format!(
        r#"stroke="{}" stroke-width="{}""#,
        stroke.color.to_hex(),
        stroke.width
    );
    if stroke.style == LineStyle::Dashed {
        // dash pattern scales with line width
        let _ = write!(
            s,
            r#" stroke-dasharray="{:.2} {:.2}""#,
            3.7 * stroke.width,
            1.6 * stroke.width
        );
    }
    s
}

fn write_label(out: &mut String, label: &Label, x: f64, y: f64, font_family: &str) {
    let anchor = match label.h_align {
        HAlign::Left => "start",
        HAlign::Center => "middle",
    };
    let baseline = match label.v_align {
        VAlign::Center => "central",
        VAlign::Baseline => "alphabetic",
    };
    let weight = match label.weight {
        FontWeight::Normal => "normal",
        FontWeight::Bold => "bold",
    };
    let transform = if label.rotation_deg != 0.0 {
        // SVG rotates clockwise in a y-down frame
        format!(r#" transform="rotate({} {x:.3} {y:.3})""#, -label.rotation_deg)
    } else {
        String::new()
    };
    let _ = writeln!(
        out,
        r#"<text x="{x:.3}" y="{y:.3}" fill="{}" font-family="{}, sans-serif" font-size="{}" font-weight="{weight}" text-anchor="{anchor}" dominant-baseline="{baseline}"{transform}>{}</text>"#,
        label.color.to_hex(),
        escape_xml(font_family),
        label.font_size,
        escape_xml(&label.text)
    );
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricsInput;
    use crate::scene::build_scene;

    fn svg() -> String {
        scene_to_svg(&build_scene(&MetricsInput::new(10, 5, 8)), &Figure::default())
    }

    #[test]
    fn document_is_sized_in_pixels_with_point_viewbox() {
        let doc = svg();
        assert!(doc.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="3600" height="2400" viewBox="0 0 864 576">"#));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn every_primitive_is_emitted() {
        let scene = build_scene(&MetricsInput::new(10, 5, 8));
        let doc = scene_to_svg(&scene, &Figure::default());
        assert_eq!(doc.matches("<line ").count(), scene.segments().count());
        assert_eq!(doc.matches("<polygon ").count(), scene.surfaces.len());
        assert_eq!(doc.matches("<text ").count(), scene.labels().count());
    }

    #[test]
    fn styles_survive_layout() {
        let doc = svg();
        assert!(doc.contains(r##"stroke="#808080" stroke-width="1" stroke-dasharray="3.70 1.60""##));
        assert!(doc.contains(r#"fill-opacity="0""#));
        assert!(doc.contains(">People Energy</text>"));
        assert!(doc.contains(r#"transform="rotate(-175 "#));
        assert!(doc.contains(r##"fill="#800080""##));
    }

    #[test]
    fn layout_is_deterministic() {
        assert_eq!(svg(), svg());
    }

    #[test]
    fn pixel_size_follows_dpi() {
        let fig = Figure { dpi: 100, ..Figure::default() };
        assert_eq!(fig.pixel_size(), (1200, 800));
    }

    #[test]
    fn huge_values_stay_on_a_finite_canvas() {
        let scene = build_scene(&MetricsInput::new(u32::MAX, u32::MAX, 3));
        let doc = scene_to_svg(&scene, &Figure::default());
        assert!(!doc.contains("NaN"));
        assert!(!doc.contains("inf,") && !doc.contains("inf\""));
        assert_eq!(doc.matches("<polygon ").count(), 2);
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml("a<b&\"c\""), "a&lt;b&amp;&quot;c&quot;");
    }
}
