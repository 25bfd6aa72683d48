//! Scanline triangle fill with depth interpolation.
//!
//! # Algorithm Overview
//!
//! 1. **Sort vertices** by Y into bottom `B`, middle `M` and top `T`
//! 2. **Walk edges**: the long edge `B→T` bounds every scanline on one side;
//!    the short side is `B→M` until the scanline reaches `M`, then `M→T`
//! 3. **Fill** each integer row `y` in `[ceil(B.y), ceil(T.y))` between the two
//!    edge positions, interpolating depth along the edges and across the row
//!
//! ```text
//!          T
//!         /|
//!        / |  M→T
//!   B→T /  M
//!      /  /
//!     /  /  B→M
//!    / /
//!    B
//! ```
//!
//! # Sub-pixel correction
//!
//! The first row a vertex reaches is `ceil(v.y)`, not `v.y`. Every edge is
//! advanced by `ceil(v.y) - v.y` before the first row, and every row is
//! advanced by `ceil(x) - x` before the first pixel, so rows and pixels are
//! sampled at their true integer positions. Two triangles sharing an edge
//! then compute the exact same boundary and meet without gaps or overlaps.
//!
//! Horizontal edges have zero height; their slope is defined as 0.
//!
//! When the target reports [`Plot::bounds`], rows and pixels outside it are
//! never visited, so a triangle far larger than the target costs no more than
//! one covering it.

use log::warn;

use crate::colors::Color;
use crate::error::RenderError;
use crate::light::{Material, SceneLighting, VIEW_DIRECTION};
use crate::math::vec3::Vec3;
use crate::matrix::Matrix;
use crate::render::screen::Plot;

/// Geometric normal of the triangle starting at column `col`:
/// `(v1 - v0) × (v2 - v0)`.
pub fn calculate_normal(polygons: &Matrix, col: usize) -> Vec3 {
    let v0 = polygons.point(col);
    let a = polygons.point(col + 1) - v0;
    let b = polygons.point(col + 2) - v0;
    a.cross(b)
}

/// Whether a triangle with this normal faces the viewer.
#[inline]
pub fn is_front_facing(normal: Vec3) -> bool {
    normal.dot(VIEW_DIRECTION) > 0.0
}

/// Draws every front-facing triangle (column triple) of `polygons` with its
/// own flat lighting color.
///
/// Returns how many triangles were rasterized; back faces are skipped. Fewer
/// than three points yield [`RenderError::InsufficientGeometry`] and no
/// output.
pub fn draw_polygons<P: Plot + ?Sized>(
    polygons: &Matrix,
    target: &mut P,
    lighting: &SceneLighting,
    material: &Material,
) -> Result<usize, RenderError> {
    if polygons.len() < 3 {
        warn!(
            "need at least 3 points to draw a polygon, got {}",
            polygons.len()
        );
        return Err(RenderError::InsufficientGeometry {
            needed: 3,
            found: polygons.len(),
        });
    }

    let mut drawn = 0;
    for col in (0..polygons.len() - 2).step_by(3) {
        let normal = calculate_normal(polygons, col);
        if is_front_facing(normal) {
            let color = lighting.shade(normal, material);
            scanline_convert(polygons, col, target, color);
            drawn += 1;
        }
    }
    Ok(drawn)
}

/// Change in x and z per unit y from `from` to `to`; zero for flat edges.
#[inline]
fn edge_slopes(from: Vec3, to: Vec3) -> (f64, f64) {
    let dist = to.y - from.y;
    if dist > 0.0 {
        ((to.x - from.x) / dist, (to.z - from.z) / dist)
    } else {
        (0.0, 0.0)
    }
}

/// Fills the triangle at columns `col..col + 3` with a solid color.
pub fn scanline_convert<P: Plot + ?Sized>(
    polygons: &Matrix,
    col: usize,
    target: &mut P,
    color: Color,
) {
    let mut bot = polygons.point(col);
    let mut mid = polygons.point(col + 1);
    let mut top = polygons.point(col + 2);

    // Three compare-and-swaps order any permutation
    if bot.y > mid.y {
        std::mem::swap(&mut bot, &mut mid);
    }
    if mid.y > top.y {
        std::mem::swap(&mut mid, &mut top);
    }
    if bot.y > mid.y {
        std::mem::swap(&mut bot, &mut mid);
    }

    let (mx0, mz0) = edge_slopes(bot, top);
    let (mx1, mz1) = edge_slopes(bot, mid);
    let (mx2, mz2) = edge_slopes(mid, top);

    // Edge positions are evaluated from the edge's lower vertex at each row,
    // so a shared edge yields identical values in both triangles.
    let at = |v: Vec3, mx: f64, mz: f64, row: f64| {
        let dy = row - v.y;
        (v.x + mx * dy, v.z + mz * dy)
    };

    let y_mid = mid.y.ceil();
    let mut y = bot.y.ceil() as i32;
    let mut y_end = top.y.ceil() as i32;
    if let Some((_, height)) = target.bounds() {
        y = y.max(0);
        y_end = y_end.min(height);
    }

    while y < y_end {
        let row = f64::from(y);
        let (x0, z0) = at(bot, mx0, mz0, row);
        let (x1, z1) = if row < y_mid {
            at(bot, mx1, mz1, row)
        } else {
            at(mid, mx2, mz2, row)
        };

        draw_scanline(target, x0, z0, x1, z1, y, color);
        y += 1;
    }
}

/// Fills row `y` over the pixels `[ceil(min x), ceil(max x))`.
#[allow(clippy::too_many_arguments)]
pub fn draw_scanline<P: Plot + ?Sized>(
    target: &mut P,
    mut x0: f64,
    mut z0: f64,
    mut x1: f64,
    mut z1: f64,
    y: i32,
    color: Color,
) {
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut z0, &mut z1);
    }

    let mz = if x1 - x0 > 0.0 {
        (z1 - z0) / (x1 - x0)
    } else {
        0.0
    };

    let mut x = x0.ceil() as i32;
    let mut x_end = x1.ceil() as i32;
    if let Some((width, height)) = target.bounds() {
        if y < 0 || y >= height {
            return;
        }
        x = x.max(0);
        x_end = x_end.min(width);
    }
    let mut z = z0 + mz * (f64::from(x) - x0);

    while x < x_end {
        target.plot(x, y, z, color);
        z += mz;
        x += 1;
    }
}
