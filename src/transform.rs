//! Transform factory.
//!
//! Builds fresh 4×4 homogeneous matrices for translation, scaling, rotation
//! about the principal axes, and the cubic curve basis matrices. Every
//! function returns a new [`Matrix`] with all four columns in use.
//!
//! Rotation angles are in **radians** here. Scene commands carry degrees and
//! are converted with [`f64::to_radians`] before reaching this module.

use crate::matrix::Matrix;

/// Principal axis of a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Cubic basis used to turn four control values into polynomial coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    /// Endpoints `p0`, `p3` with control points `p1`, `p2`.
    Bezier,
    /// Endpoints `p0`, `p1` with tangents `p2`, `p3`.
    Hermite,
}

/// Builds a matrix from rows, which reads more naturally than columns.
fn from_rows(rows: [[f64; 4]; 4]) -> Matrix {
    let mut m = Matrix::identity();
    for (row, values) in rows.iter().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            m.set(row, col, value);
        }
    }
    m
}

/// Creates a translation matrix.
///
/// Translation is stored in the last column.
pub fn translate(x: f64, y: f64, z: f64) -> Matrix {
    from_rows([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Creates a scale matrix.
pub fn scale(x: f64, y: f64, z: f64) -> Matrix {
    from_rows([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Creates a rotation matrix around the X axis.
pub fn rotate_x(angle: f64) -> Matrix {
    let c = angle.cos();
    let s = angle.sin();
    from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Creates a rotation matrix around the Y axis.
pub fn rotate_y(angle: f64) -> Matrix {
    let c = angle.cos();
    let s = angle.sin();
    from_rows([
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Creates a rotation matrix around the Z axis.
pub fn rotate_z(angle: f64) -> Matrix {
    let c = angle.cos();
    let s = angle.sin();
    from_rows([
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Creates a rotation of `angle` radians about `axis`.
pub fn rotate(axis: Axis, angle: f64) -> Matrix {
    match axis {
        Axis::X => rotate_x(angle),
        Axis::Y => rotate_y(angle),
        Axis::Z => rotate_z(angle),
    }
}

pub fn bezier_basis() -> Matrix {
    from_rows([
        [-1.0, 3.0, -3.0, 1.0],
        [3.0, -6.0, 3.0, 0.0],
        [-3.0, 3.0, 0.0, 0.0],
        [1.0, 0.0, 0.0, 0.0],
    ])
}

pub fn hermite_basis() -> Matrix {
    from_rows([
        [2.0, -2.0, 1.0, 1.0],
        [-3.0, 3.0, -2.0, -1.0],
        [0.0, 0.0, 1.0, 0.0],
        [1.0, 0.0, 0.0, 0.0],
    ])
}

pub fn basis(kind: CurveKind) -> Matrix {
    match kind {
        CurveKind::Bezier => bezier_basis(),
        CurveKind::Hermite => hermite_basis(),
    }
}
