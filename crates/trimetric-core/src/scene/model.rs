//! Backend-independent scene primitives.
//!
//! Coordinates are data-space `[x, y, z]` triples. x carries the people
//! metric, y the personal metric and z the performance metric.

/// A point in data space.
pub type Point3 = [f64; 3];

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
    pub const GREY: Rgb = Rgb(0x80, 0x80, 0x80);
    pub const GOLD: Rgb = Rgb(0xff, 0xd7, 0x00);
    pub const CYAN: Rgb = Rgb(0x00, 0xff, 0xff);
    pub const PEOPLE_YELLOW: Rgb = Rgb(0xff, 0xde, 0x00);
    pub const PERSONAL_GREY: Rgb = Rgb(0x66, 0x66, 0x66);
    pub const PERFORMANCE_PURPLE: Rgb = Rgb(0x80, 0x00, 0x80);

    /// `#rrggbb` form, as used in SVG attributes.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// The three chart axes, each bound to one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// x
    People,
    /// y
    Personal,
    /// z, vertical
    Performance,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::People, Axis::Personal, Axis::Performance];

    /// Coordinate index in a [`Point3`].
    pub fn index(self) -> usize {
        match self {
            Axis::People => 0,
            Axis::Personal => 1,
            Axis::Performance => 2,
        }
    }

    /// Fixed identity colour.
    pub fn color(self) -> Rgb {
        match self {
            Axis::People => Rgb::PEOPLE_YELLOW,
            Axis::Personal => Rgb::PERSONAL_GREY,
            Axis::Performance => Rgb::PERFORMANCE_PURPLE,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Axis::People => "People Energy",
            Axis::Personal => "Personal Energy",
            Axis::Performance => "Performance Energy",
        }
    }

    /// Point `value` units along this axis, zero elsewhere.
    pub fn point(self, value: f64) -> Point3 {
        let mut p = [0.0; 3];
        p[self.index()] = value;
        p
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// Stroke parameters shared by segments and surface edges. Width is in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
    pub style: LineStyle,
}

impl Stroke {
    pub fn solid(color: Rgb, width: f64) -> Self {
        Self {
            color,
            width,
            style: LineStyle::Solid,
        }
    }

    pub fn dashed(color: Rgb, width: f64) -> Self {
        Self {
            color,
            width,
            style: LineStyle::Dashed,
        }
    }
}

/// Straight line between two data-space points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point3,
    pub to: Point3,
    pub stroke: Stroke,
}

/// Triangle with one vertex on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3; 3],
}

impl Triangle {
    /// Triangle through `(x,0,0)`, `(0,y,0)`, `(0,0,z)`.
    pub fn on_axes(x: f64, y: f64, z: f64) -> Self {
        Self {
            vertices: [
                Axis::People.point(x),
                Axis::Personal.point(y),
                Axis::Performance.point(z),
            ],
        }
    }

    /// Edges connecting consecutive vertices, closing back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

/// Filled polygon. A zero `face_opacity` leaves only the outline visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub triangle: Triangle,
    pub face: Rgb,
    pub face_opacity: f64,
    pub edge: Stroke,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Center,
    Baseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Text anchored at a data-space point. Font size is in points; rotation is
/// counter-clockwise on screen, in degrees, around the anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub position: Point3,
    pub text: String,
    pub color: Rgb,
    pub font_size: f64,
    pub weight: FontWeight,
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub rotation_deg: f64,
}

/// Closed data range shown along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Which of the default axis decorations are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decorations {
    pub ticks: bool,
    pub tick_labels: bool,
    pub grid: bool,
    pub panes: bool,
    pub axis_lines: bool,
}

impl Decorations {
    pub const NONE: Decorations = Decorations {
        ticks: false,
        tick_labels: false,
        grid: false,
        panes: false,
        axis_lines: false,
    };
}

/// View direction, in degrees, with `vertical` pointing up on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
    pub vertical: Axis,
}

/// Everything needed to draw one chart.
///
/// Only `actual` and the primitives derived from it depend on the input;
/// the rest is identical for every request.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDescription {
    pub actual: Triangle,
    pub optimal: Triangle,
    pub edges: Vec<Segment>,
    pub surfaces: Vec<Surface>,
    pub axis_guides: Vec<Segment>,
    pub tick_labels: Vec<Label>,
    pub markers: Vec<Segment>,
    pub axis_labels: Vec<Label>,
    pub bounds: [AxisRange; 3],
    pub decorations: Decorations,
    pub camera: Camera,
}

impl SceneDescription {
    /// All line primitives in draw order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.edges
            .iter()
            .chain(self.axis_guides.iter())
            .chain(self.markers.iter())
    }

    /// All text primitives in draw order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.tick_labels.iter().chain(self.axis_labels.iter())
    }
}
