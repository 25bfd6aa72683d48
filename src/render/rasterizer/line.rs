//! Bresenham line drawing with depth interpolation.
//!
//! Endpoints are first ordered so that `x0 <= x1`. That leaves four of the
//! eight classic octants, two per dominant axis:
//!
//! ```text
//!              |  steep, y rising   (octant 2)
//!              | /
//!              |/___ shallow, y rising  (octant 1)
//!              |\
//!              | \   shallow, y falling (octant 8)
//!              |  steep, y falling  (octant 7)
//! ```
//!
//! The midpoint decision variable `d` uses `A = 2·Δy` and `B = −2·Δx`, so
//! only integer additions happen per pixel. Depth advances by a constant
//! `Δz / span` per step, where `span` is the pixel count along the dominant
//! axis. The decision arithmetic runs in `i64` so spans up to the full `i32`
//! range cannot overflow.
//!
//! [`draw_lines`] clips each segment to the target's [`Plot::bounds`] (with a
//! one pixel margin) before converting it to pixel coordinates.

use log::warn;

use crate::colors::Color;
use crate::error::RenderError;
use crate::math::vec3::Vec3;
use crate::matrix::Matrix;
use crate::render::screen::Plot;

/// Draws the segment `(x0, y0, z0)`–`(x1, y1, z1)`, plotting both endpoints
/// and exactly one pixel per step along the dominant axis.
#[allow(clippy::too_many_arguments)]
pub fn draw_line<P: Plot + ?Sized>(
    target: &mut P,
    mut x0: i32,
    mut y0: i32,
    mut z0: f64,
    mut x1: i32,
    mut y1: i32,
    mut z1: f64,
    color: Color,
) {
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
        std::mem::swap(&mut z0, &mut z1);
    }

    let (x1, y1) = (i64::from(x1), i64::from(y1));
    let dx = x1 - i64::from(x0);
    let dy = y1 - i64::from(y0);
    let a = 2 * dy;
    let b = -2 * dx;

    // x and y stay between the i32 endpoints, so the plot casts are exact
    let mut x = i64::from(x0);
    let mut y = i64::from(y0);
    let mut z = z0;

    if dx >= dy.abs() {
        // x dominant: octants 1 and 8
        let mz = if dx != 0 { (z1 - z0) / dx as f64 } else { 0.0 };

        if a > 0 {
            let mut d = a + b / 2;
            while x < x1 {
                target.plot(x as i32, y as i32, z, color);
                if d > 0 {
                    y += 1;
                    d += b;
                }
                x += 1;
                d += a;
                z += mz;
            }
        } else {
            let mut d = a - b / 2;
            while x < x1 {
                target.plot(x as i32, y as i32, z, color);
                if d < 0 {
                    y -= 1;
                    d -= b;
                }
                x += 1;
                d += a;
                z += mz;
            }
        }
    } else {
        // y dominant: octants 2 and 7
        let mz = (z1 - z0) / dy.abs() as f64;

        if a > 0 {
            let mut d = a / 2 + b;
            while y < y1 {
                target.plot(x as i32, y as i32, z, color);
                if d < 0 {
                    x += 1;
                    d += a;
                }
                y += 1;
                d += b;
                z += mz;
            }
        } else {
            let mut d = a / 2 - b;
            while y > y1 {
                target.plot(x as i32, y as i32, z, color);
                if d > 0 {
                    x += 1;
                    d += a;
                }
                y -= 1;
                d -= b;
                z += mz;
            }
        }
    }

    target.plot(x1 as i32, y1 as i32, z1, color);
}

/// Clips `p0`–`p1` to the rectangle `[-1, width + 1] × [-1, height + 1]`
/// (Liang–Barsky), interpolating depth along with x and y.
///
/// Returns `None` when the segment misses the rectangle entirely.
fn clip_segment(p0: Vec3, p1: Vec3, width: i32, height: i32) -> Option<(Vec3, Vec3)> {
    let (x_min, y_min) = (-1.0, -1.0);
    let (x_max, y_max) = (f64::from(width) + 1.0, f64::from(height) + 1.0);
    let d = p1 - p0;

    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    for (p, q) in [
        (-d.x, p0.x - x_min),
        (d.x, x_max - p0.x),
        (-d.y, p0.y - y_min),
        (d.y, y_max - p0.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }

    Some((p0 + d * t0, p0 + d * t1))
}

/// Draws every column pair of `edges` as a line segment.
///
/// Coordinates are truncated toward zero to pixel positions; depth stays
/// fractional. Segments entirely outside the target's bounds are skipped.
/// Returns the number of segments drawn, or
/// [`RenderError::InsufficientGeometry`] (nothing drawn) when fewer than two
/// points are present.
pub fn draw_lines<P: Plot + ?Sized>(
    edges: &Matrix,
    target: &mut P,
    color: Color,
) -> Result<usize, RenderError> {
    if edges.len() < 2 {
        warn!("need at least 2 points to draw a line, got {}", edges.len());
        return Err(RenderError::InsufficientGeometry {
            needed: 2,
            found: edges.len(),
        });
    }

    let bounds = target.bounds();
    let mut drawn = 0;
    for col in (0..edges.len() - 1).step_by(2) {
        let mut p0 = edges.point(col);
        let mut p1 = edges.point(col + 1);
        if let Some((width, height)) = bounds {
            let outside = |p: Vec3| {
                p.x < -1.0
                    || p.y < -1.0
                    || p.x > f64::from(width) + 1.0
                    || p.y > f64::from(height) + 1.0
            };
            if outside(p0) || outside(p1) {
                match clip_segment(p0, p1, width, height) {
                    Some((c0, c1)) => (p0, p1) = (c0, c1),
                    None => continue,
                }
            }
        }
        draw_line(
            target, p0.x as i32, p0.y as i32, p0.z, p1.x as i32, p1.y as i32, p1.z, color,
        );
        drawn += 1;
    }
    Ok(drawn)
}
