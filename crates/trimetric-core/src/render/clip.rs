//! Data-space clipping against a box around the axis bounds.
//!
//! Metrics are unbounded above, so triangle vertices can sit far outside
//! the drawn cube. Geometry is cut to a window a few spans wide before
//! projection, which keeps every projected point in front of the eye.

use crate::scene::{AxisRange, Point3};

/// Window half-margin, in multiples of each axis span.
const MARGIN_SPANS: f64 = 3.0;
/// Slack for points computed by interpolation onto a face.
const EPS: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipBox {
    min: Point3,
    max: Point3,
}

impl ClipBox {
    pub fn around(bounds: &[AxisRange; 3]) -> Self {
        let mut min = [0.0; 3];
        let mut max = [0.0; 3];
        for (axis, r) in bounds.iter().enumerate() {
            let pad = r.span().abs().max(1.0) * MARGIN_SPANS;
            min[axis] = r.min - pad;
            max[axis] = r.max + pad;
        }
        Self { min, max }
    }

    pub fn contains(&self, p: Point3) -> bool {
        (0..3).all(|a| p[a] >= self.min[a] - EPS && p[a] <= self.max[a] + EPS)
    }

    /// Liang-Barsky. `None` when the segment lies entirely outside.
    pub fn segment(&self, from: Point3, to: Point3) -> Option<(Point3, Point3)> {
        let (mut t0, mut t1) = (0.0f64, 1.0f64);
        for a in 0..3 {
            let d = to[a] - from[a];
            for (p, q) in [(-d, from[a] - self.min[a]), (d, self.max[a] - from[a])] {
                if p == 0.0 {
                    if q < 0.0 {
                        return None;
                    }
                    continue;
                }
                let r = q / p;
                if p < 0.0 {
                    t0 = t0.max(r);
                } else {
                    t1 = t1.min(r);
                }
                if t0 > t1 {
                    return None;
                }
            }
        }
        Some((lerp(from, to, t0), lerp(from, to, t1)))
    }

    /// Sutherland-Hodgman against each of the six faces.
    pub fn polygon(&self, vertices: &[Point3]) -> Vec<Point3> {
        let mut poly = vertices.to_vec();
        for a in 0..3 {
            poly = clip_plane(&poly, |p| p[a] - self.min[a]);
            poly = clip_plane(&poly, |p| self.max[a] - p[a]);
            if poly.is_empty() {
                break;
            }
        }
        poly
    }
}

/// Keep the half-space where `dist >= 0`.
fn clip_plane(poly: &[Point3], dist: impl Fn(Point3) -> f64) -> Vec<Point3> {
    let mut out = Vec::with_capacity(poly.len() + 1);
    for (i, &cur) in poly.iter().enumerate() {
        let prev = poly[(i + poly.len() - 1) % poly.len()];
        let (dc, dp) = (dist(cur), dist(prev));
        if dc >= 0.0 {
            if dp < 0.0 {
                out.push(lerp(prev, cur, dp / (dp - dc)));
            }
            out.push(cur);
        } else if dp >= 0.0 {
            out.push(lerp(prev, cur, dp / (dp - dc)));
        }
    }
    out
}

fn lerp(a: Point3, b: Point3, t: f64) -> Point3 {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}
