//! Data space -> screen space.
//!
//! Data coordinates are normalised into a box centred on the origin
//! (x:y:z aspect 4:4:3), rotated so the camera looks down its view vector
//! with the vertical axis up, and projected with a weak perspective.

use crate::scene::{Axis, AxisRange, Camera, Point3};

/// Box aspect for x, y, z, relative to the longest side.
const BOX_ASPECT: [f64; 3] = [1.0, 1.0, 0.75];
/// Eye distance from the box centre, in box units.
const EYE_DISTANCE: f64 = 10.0;

/// Projected point. `y` grows upward; `depth` grows toward the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct Projector {
    bounds: [AxisRange; 3],
    /// Permutation placing the camera's vertical axis last.
    order: [usize; 3],
    right: [f64; 3],
    up: [f64; 3],
    eye: [f64; 3],
}

impl Projector {
    pub fn new(camera: &Camera, bounds: [AxisRange; 3]) -> Self {
        let az = camera.azimuth_deg.to_radians();
        let el = camera.elevation_deg.to_radians();

        let order = match camera.vertical {
            Axis::People => [1, 2, 0],
            Axis::Personal => [2, 0, 1],
            Axis::Performance => [0, 1, 2],
        };

        Self {
            bounds,
            order,
            right: [-az.sin(), az.cos(), 0.0],
            up: [-el.sin() * az.cos(), -el.sin() * az.sin(), el.cos()],
            eye: [el.cos() * az.cos(), el.cos() * az.sin(), el.sin()],
        }
    }

    fn normalise(&self, p: Point3) -> [f64; 3] {
        let mut out = [0.0; 3];
        for (slot, &axis) in out.iter_mut().zip(self.order.iter()) {
            let range = self.bounds[axis];
            let span = if range.span() == 0.0 { 1.0 } else { range.span() };
            *slot = ((p[axis] - range.min) / span - 0.5) * BOX_ASPECT[axis];
        }
        out
    }

    pub fn project(&self, p: Point3) -> Projected {
        let n = self.normalise(p);
        let depth = dot(n, self.eye);
        let persp = EYE_DISTANCE / (EYE_DISTANCE - depth);
        Projected {
            x: dot(n, self.right) * persp,
            y: dot(n, self.up) * persp,
            depth,
        }
    }

    /// The eight corners of the bounding box.
    pub fn box_corners(&self) -> impl Iterator<Item = Projected> + '_ {
        (0..8u8).map(move |bits| {
            let mut p = [0.0; 3];
            for (axis, slot) in p.iter_mut().enumerate() {
                let r = self.bounds[axis];
                *slot = if bits & (1 << axis) != 0 { r.max } else { r.min };
            }
            self.project(p)
        })
    }
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Axis-aligned rectangle in figure units (points, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Maps projected coordinates onto the figure, fitting the bounding box
/// into `area` with uniform scale and flipping y.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    projector: Projector,
    scale: f64,
    cx: f64,
    cy: f64,
    mid_x: f64,
    mid_y: f64,
}

impl Viewport {
    pub fn fit(projector: Projector, area: Rect) -> Self {
        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for c in projector.box_corners() {
            min_x = min_x.min(c.x);
            max_x = max_x.max(c.x);
            min_y = min_y.min(c.y);
            max_y = max_y.max(c.y);
        }

        let w = (max_x - min_x).max(f64::EPSILON);
        let h = (max_y - min_y).max(f64::EPSILON);
        Self {
            projector,
            scale: (area.width / w).min(area.height / h),
            cx: area.x + area.width / 2.0,
            cy: area.y + area.height / 2.0,
            mid_x: (min_x + max_x) / 2.0,
            mid_y: (min_y + max_y) / 2.0,
        }
    }

    /// Figure coordinates (y down) plus depth for ordering.
    pub fn to_figure(&self, p: Point3) -> (f64, f64, f64) {
        let q = self.projector.project(p);
        (
            self.cx + (q.x - self.mid_x) * self.scale,
            self.cy - (q.y - self.mid_y) * self.scale,
            q.depth,
        )
    }
}
