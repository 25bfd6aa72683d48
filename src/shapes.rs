//! Procedural geometry: lines, cubic curves, circles, boxes, spheres and tori.
//!
//! Edge generators append column pairs to an edge buffer; surface generators
//! append column triples to a triangle buffer. Every triangle is wound
//! counter-clockwise when seen from outside the surface, so its geometric
//! normal points outward and back faces can be culled.
//!
//! All positions are object-local; the caller multiplies the buffer by the
//! current transform afterwards.

use std::f64::consts::{PI, TAU};

use crate::matrix::Matrix;
use crate::transform::{self, CurveKind};

pub fn add_point(points: &mut Matrix, x: f64, y: f64, z: f64) {
    points.append_point(x, y, z);
}

/// Appends the segment `(x0, y0, z0)`–`(x1, y1, z1)`.
pub fn add_edge(edges: &mut Matrix, x0: f64, y0: f64, z0: f64, x1: f64, y1: f64, z1: f64) {
    add_point(edges, x0, y0, z0);
    add_point(edges, x1, y1, z1);
}

/// Appends one triangle. The vertex order decides which side is the front.
#[allow(clippy::too_many_arguments)]
pub fn add_polygon(
    polygons: &mut Matrix,
    x0: f64,
    y0: f64,
    z0: f64,
    x1: f64,
    y1: f64,
    z1: f64,
    x2: f64,
    y2: f64,
    z2: f64,
) {
    add_point(polygons, x0, y0, z0);
    add_point(polygons, x1, y1, z1);
    add_point(polygons, x2, y2, z2);
}

/// Coefficients `[a, b, c, d]` of `a·t³ + b·t² + c·t + d` for one coordinate,
/// as a 4×1 column (`basis · [p0, p1, p2, p3]ᵀ`).
///
/// For [`CurveKind::Bezier`] `p0`/`p3` are the endpoints and `p1`/`p2` the
/// control points; for [`CurveKind::Hermite`] `p0`/`p1` are the endpoints and
/// `p2`/`p3` the tangents at them.
pub fn generate_curve_coefs(p0: f64, p1: f64, p2: f64, p3: f64, kind: CurveKind) -> Matrix {
    let mut coefs = Matrix::new(1);
    coefs.append_column([p0, p1, p2, p3]);
    transform::basis(kind).multiply(&mut coefs);
    coefs
}

/// Evaluates a cubic from its coefficient column with Horner's rule.
#[inline]
fn eval_cubic(coefs: &Matrix, t: f64) -> f64 {
    let [a, b, c, d] = coefs.column(0);
    ((a * t + b) * t + c) * t + d
}

/// Appends `step` edges approximating a cubic curve in the `z = 0` plane.
///
/// The curve is sampled at `t = i / step` for `i` in `0..=step`, and
/// consecutive samples are joined.
#[allow(clippy::too_many_arguments)]
pub fn add_curve(
    edges: &mut Matrix,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    step: usize,
    kind: CurveKind,
) {
    if step == 0 {
        return;
    }
    let xc = generate_curve_coefs(x0, x1, x2, x3, kind);
    let yc = generate_curve_coefs(y0, y1, y2, y3, kind);

    let mut prev_x = eval_cubic(&xc, 0.0);
    let mut prev_y = eval_cubic(&yc, 0.0);
    for i in 1..=step {
        let t = i as f64 / step as f64;
        let x = eval_cubic(&xc, t);
        let y = eval_cubic(&yc, t);
        add_edge(edges, prev_x, prev_y, 0.0, x, y, 0.0);
        prev_x = x;
        prev_y = y;
    }
}

/// Appends `step` edges tracing a circle of radius `r` around `(cx, cy)` in
/// the plane `z = cz`, starting at angle 0.
pub fn add_circle(edges: &mut Matrix, cx: f64, cy: f64, cz: f64, r: f64, step: usize) {
    if step == 0 {
        return;
    }
    let mut prev_x = cx + r;
    let mut prev_y = cy;
    for i in 1..=step {
        let angle = TAU * i as f64 / step as f64;
        let x = r * angle.cos() + cx;
        let y = r * angle.sin() + cy;
        add_edge(edges, prev_x, prev_y, cz, x, y, cz);
        prev_x = x;
        prev_y = y;
    }
}

/// Points on a sphere: `step` slices of `step + 1` samples each.
///
/// Slice `p` is the semicircle at rotation `phi = 2π·p/step` about the x axis;
/// sample `t` sits at `theta = π·t/step` along it, so both poles are included
/// in every slice.
pub fn generate_sphere(cx: f64, cy: f64, cz: f64, r: f64, step: usize) -> Matrix {
    let mut points = Matrix::new(step * (step + 1));
    for p in 0..step {
        let phi = TAU * p as f64 / step as f64;
        for t in 0..=step {
            let theta = PI * t as f64 / step as f64;
            add_point(
                &mut points,
                r * theta.cos() + cx,
                r * theta.sin() * phi.cos() + cy,
                r * theta.sin() * phi.sin() + cz,
            );
        }
    }
    points
}

/// Appends the `2·step²` triangles of a sphere.
///
/// Each quad joins sample `t` and `t + 1` of slice `p` with the same samples
/// of slice `p + 1`; indices wrap modulo the point count so the last slice
/// closes against the first.
pub fn add_sphere(polygons: &mut Matrix, cx: f64, cy: f64, cz: f64, r: f64, step: usize) {
    let points = generate_sphere(cx, cy, cz, r, step);
    let total = step * (step + 1);

    for lat in 0..step {
        for longt in 0..step {
            let index = lat * (step + 1) + longt;
            let p0 = points.point(index);
            let p1 = points.point(index + 1);
            let p2 = points.point((index + step + 1) % total);
            let p3 = points.point((index + step + 2) % total);

            add_polygon(polygons, p0.x, p0.y, p0.z, p3.x, p3.y, p3.z, p2.x, p2.y, p2.z);
            add_polygon(polygons, p0.x, p0.y, p0.z, p1.x, p1.y, p1.z, p3.x, p3.y, p3.z);
        }
    }
}

/// Points on a torus: `step` rings of `step` samples each.
///
/// `r1` is the radius of the tube cross-section and `r2` the distance from
/// the center to the middle of the tube. The torus lies around the y axis.
pub fn generate_torus(cx: f64, cy: f64, cz: f64, r1: f64, r2: f64, step: usize) -> Matrix {
    let mut points = Matrix::new(step * step);
    for p in 0..step {
        let phi = TAU * p as f64 / step as f64;
        for t in 0..step {
            let theta = TAU * t as f64 / step as f64;
            let ring = r1 * theta.cos() + r2;
            add_point(
                &mut points,
                phi.cos() * ring + cx,
                r1 * theta.sin() + cy,
                -phi.sin() * ring + cz,
            );
        }
    }
    points
}

/// Appends the `2·step²` triangles of a torus.
///
/// Both directions are closed loops: the next sample after the last one of a
/// ring is the first of the same ring, and the ring after the last is the
/// first.
#[allow(clippy::too_many_arguments)]
pub fn add_torus(
    polygons: &mut Matrix,
    cx: f64,
    cy: f64,
    cz: f64,
    r1: f64,
    r2: f64,
    step: usize,
) {
    let points = generate_torus(cx, cy, cz, r1, r2, step);
    let total = step * step;

    for lat in 0..step {
        for longt in 0..step {
            let index = lat * step + longt;
            let next = if longt == step - 1 { index - longt } else { index + 1 };
            let p0 = points.point(index);
            let p1 = points.point(next);
            let p2 = points.point((index + step) % total);
            let p3 = points.point((next + step) % total);

            add_polygon(polygons, p0.x, p0.y, p0.z, p2.x, p2.y, p2.z, p3.x, p3.y, p3.z);
            add_polygon(polygons, p0.x, p0.y, p0.z, p3.x, p3.y, p3.z, p1.x, p1.y, p1.z);
        }
    }
}

/// Appends the 12 triangles of an axis-aligned box.
///
/// `(x, y, z)` is the upper-left-front corner; the box extends `+width` in x,
/// `-height` in y and `-depth` in z. Faces are emitted left, right, front,
/// back, top, bottom, two triangles each.
#[allow(clippy::too_many_arguments)]
pub fn add_box(
    polygons: &mut Matrix,
    x: f64,
    y: f64,
    z: f64,
    width: f64,
    height: f64,
    depth: f64,
) {
    let x1 = x + width;
    let y1 = y - height;
    let z1 = z - depth;

    // left
    add_polygon(polygons, x, y, z1, x, y1, z1, x, y, z);
    add_polygon(polygons, x, y, z, x, y1, z1, x, y1, z);
    // right
    add_polygon(polygons, x1, y, z, x1, y1, z, x1, y, z1);
    add_polygon(polygons, x1, y, z1, x1, y1, z, x1, y1, z1);
    // front
    add_polygon(polygons, x, y, z, x, y1, z, x1, y, z);
    add_polygon(polygons, x1, y, z, x, y1, z, x1, y1, z);
    // back
    add_polygon(polygons, x1, y, z1, x1, y1, z1, x, y, z1);
    add_polygon(polygons, x, y, z1, x1, y1, z1, x, y1, z1);
    // top
    add_polygon(polygons, x, y, z1, x, y, z, x1, y, z1);
    add_polygon(polygons, x1, y, z1, x, y, z, x1, y, z);
    // bottom
    add_polygon(polygons, x, y1, z, x, y1, z1, x1, y1, z);
    add_polygon(polygons, x1, y1, z, x, y1, z1, x1, y1, z1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec3::Vec3;
    use crate::render::rasterizer::scanline::{calculate_normal, is_front_facing};
    use approx::assert_relative_eq;

    fn triangle_count(polygons: &Matrix) -> usize {
        polygons.len() / 3
    }

    fn centroid(polygons: &Matrix, col: usize) -> Vec3 {
        (polygons.point(col) + polygons.point(col + 1) + polygons.point(col + 2)) * (1.0 / 3.0)
    }

    #[test]
    fn sphere_point_count_and_radius() {
        let center = Vec3::new(3.0, -2.0, 7.5);
        for step in [1, 4, 10, 25] {
            let points = generate_sphere(center.x, center.y, center.z, 12.5, step);
            assert_eq!(points.len(), step * (step + 1));
            for p in points.points() {
                assert_relative_eq!((p - center).magnitude(), 12.5, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn sphere_triangles_face_outward() {
        let step = 12;
        let mut polygons = Matrix::new(0);
        add_sphere(&mut polygons, 0.0, 0.0, 0.0, 5.0, step);
        assert_eq!(triangle_count(&polygons), 2 * step * step);

        for col in (0..polygons.len()).step_by(3) {
            let normal = calculate_normal(&polygons, col);
            if normal.magnitude() < 1e-9 {
                // collapsed at a pole
                continue;
            }
            assert!(normal.dot(centroid(&polygons, col)) > 0.0, "triangle {}", col / 3);
        }
    }

    #[test]
    fn torus_point_count_and_outward_winding() {
        let step = 10;
        let (r1, r2) = (1.0, 4.0);
        let points = generate_torus(0.0, 0.0, 0.0, r1, r2, step);
        assert_eq!(points.len(), step * step);
        for p in points.points() {
            // distance from the tube's center circle equals r1
            let ring = (p.x * p.x + p.z * p.z).sqrt() - r2;
            assert_relative_eq!((ring * ring + p.y * p.y).sqrt(), r1, epsilon = 1e-9);
        }

        let mut polygons = Matrix::new(0);
        add_torus(&mut polygons, 0.0, 0.0, 0.0, r1, r2, step);
        assert_eq!(triangle_count(&polygons), 2 * step * step);
        for col in (0..polygons.len()).step_by(3) {
            let c = centroid(&polygons, col);
            let radial = Vec3::new(c.x, 0.0, c.z).normalize() * r2;
            let outward = c - radial;
            assert!(calculate_normal(&polygons, col).dot(outward) > 0.0);
        }
    }

    #[test]
    fn box_emits_twelve_outward_triangles() {
        let mut polygons = Matrix::new(0);
        add_box(&mut polygons, -0.5, 0.5, 0.5, 1.0, 1.0, 1.0);
        assert_eq!(polygons.len(), 36);
        for col in (0..polygons.len()).step_by(3) {
            let normal = calculate_normal(&polygons, col);
            assert!(normal.dot(centroid(&polygons, col)) > 0.0, "triangle {}", col / 3);
        }
    }

    #[test]
    fn box_front_is_visible_and_back_is_culled() {
        let mut polygons = Matrix::new(0);
        add_box(&mut polygons, -0.5, 0.5, 0.5, 1.0, 1.0, 1.0);

        // front face: triangles 4 and 5
        for col in [12, 15] {
            let normal = calculate_normal(&polygons, col);
            assert!(normal.z > 0.0);
            assert!(is_front_facing(normal));
        }
        // back face: triangles 6 and 7
        for col in [18, 21] {
            assert!(!is_front_facing(calculate_normal(&polygons, col)));
        }
    }

    #[test]
    fn bezier_curve_hits_its_endpoints() {
        let mut edges = Matrix::new(0);
        add_curve(
            &mut edges,
            10.0,
            20.0,
            40.0,
            90.0,
            80.0,
            -30.0,
            120.0,
            25.0,
            16,
            CurveKind::Bezier,
        );
        assert_eq!(edges.len(), 32);
        let first = edges.point(0);
        let last = edges.point(edges.len() - 1);
        assert_relative_eq!(first.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(first.y, 20.0, epsilon = 1e-9);
        assert_relative_eq!(last.x, 120.0, epsilon = 1e-9);
        assert_relative_eq!(last.y, 25.0, epsilon = 1e-9);
        assert!(edges.points().all(|p| p.z == 0.0));
    }

    #[test]
    fn hermite_curve_hits_its_endpoints() {
        let mut edges = Matrix::new(0);
        add_curve(
            &mut edges,
            0.0,
            0.0,
            50.0,
            10.0,
            100.0,
            0.0,
            0.0,
            -100.0,
            8,
            CurveKind::Hermite,
        );
        let last = edges.point(edges.len() - 1);
        assert_relative_eq!(edges.point(0).x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(last.x, 50.0, epsilon = 1e-9);
        assert_relative_eq!(last.y, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn curve_coefficients_match_basis() {
        // a straight Bezier from 0 to 3 with evenly spaced controls is t·3
        let coefs = generate_curve_coefs(0.0, 1.0, 2.0, 3.0, CurveKind::Bezier);
        let [a, b, c, d] = coefs.column(0);
        assert_relative_eq!(a, 0.0);
        assert_relative_eq!(b, 0.0);
        assert_relative_eq!(c, 3.0);
        assert_relative_eq!(d, 0.0);
    }

    #[test]
    fn circle_edges_are_chained_and_closed() {
        let step = 20;
        let mut edges = Matrix::new(0);
        add_circle(&mut edges, 5.0, -5.0, 2.0, 10.0, step);
        assert_eq!(edges.len(), 2 * step);

        for col in (0..edges.len()).step_by(2) {
            for p in [edges.point(col), edges.point(col + 1)] {
                assert_relative_eq!(p.z, 2.0);
                let r = ((p.x - 5.0).powi(2) + (p.y + 5.0).powi(2)).sqrt();
                assert_relative_eq!(r, 10.0, epsilon = 1e-9);
            }
            if col + 2 < edges.len() {
                assert_eq!(edges.point(col + 1), edges.point(col + 2));
            }
        }
        let end = edges.point(edges.len() - 1);
        assert_relative_eq!(end.x, 15.0, epsilon = 1e-9);
        assert_relative_eq!(end.y, -5.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_step_adds_nothing() {
        let mut edges = Matrix::new(0);
        add_circle(&mut edges, 0.0, 0.0, 0.0, 1.0, 0);
        add_curve(&mut edges, 0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 0, CurveKind::Bezier);
        assert!(edges.is_empty());
    }
}
