//! Growable 4×N homogeneous point matrix.
//!
//! # Convention
//! - Every **column** is one 4-vector `[x, y, z, w]`; points carry `w = 1`
//! - Matrices apply on the **left**: `a.multiply(&mut b)` turns every used
//!   column `p` of `b` into `a · p`
//! - Transforms chain **right-to-left**: `A · B · p` applies B first, then A
//!
//! The same type serves as edge buffer (columns in pairs), triangle buffer
//! (columns in triples), 4×4 transform and 4×1 curve coefficient vector.
//!
//! # Example
//! ```ignore
//! let mut edges = Matrix::new(2);
//! edges.append_point(0.0, 0.0, 0.0);
//! edges.append_point(5.0, 0.0, 0.0);
//! transform::translate(1.0, 2.0, 3.0).multiply(&mut edges);
//! ```

use std::fmt;
use std::ops::Mul;

use crate::math::vec3::Vec3;

/// Number of rows in every matrix.
pub const ROWS: usize = 4;

/// Columns added whenever an append finds the matrix full.
pub const GROWTH_STEP: usize = 100;

/// A 4-row matrix with a growable column capacity and a used-column count.
///
/// Capacity (`cols`) and logical length (`len`) are tracked separately:
/// [`Matrix::clear`] only forgets the used columns so a scratch buffer can be
/// refilled without reallocating, while dropping the matrix frees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    columns: Vec<[f64; ROWS]>,
    used: usize,
}

impl Matrix {
    /// Creates a zeroed matrix with room for `cols` columns, none of them used.
    pub fn new(cols: usize) -> Self {
        Self {
            columns: vec![[0.0; ROWS]; cols],
            used: 0,
        }
    }

    /// Creates the 4×4 identity matrix with all four columns in use.
    pub fn identity() -> Self {
        let mut m = Self::new(ROWS);
        m.make_identity();
        m
    }

    /// Overwrites every element with 1 on the diagonal and 0 elsewhere and
    /// marks the full column capacity as used.
    pub fn make_identity(&mut self) {
        for (col, column) in self.columns.iter_mut().enumerate() {
            for (row, value) in column.iter_mut().enumerate() {
                *value = if row == col { 1.0 } else { 0.0 };
            }
        }
        self.used = self.columns.len();
    }

    pub fn rows(&self) -> usize {
        ROWS
    }

    /// Allocated column capacity.
    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    /// Number of used columns.
    pub fn len(&self) -> usize {
        self.used
    }

    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Forgets every used column while keeping the allocation.
    pub fn clear(&mut self) {
        self.used = 0;
    }

    /// Reallocates to `new_cols` columns, preserving contents.
    ///
    /// Capacity never shrinks: a request at or below the current capacity is
    /// ignored.
    pub fn grow(&mut self, new_cols: usize) {
        if new_cols > self.columns.len() {
            self.columns.resize(new_cols, [0.0; ROWS]);
        }
    }

    /// Appends the point `(x, y, z, 1)` in the next free column, growing by
    /// [`GROWTH_STEP`] columns when full.
    pub fn append_point(&mut self, x: f64, y: f64, z: f64) {
        if self.used == self.columns.len() {
            self.grow(self.columns.len() + GROWTH_STEP);
        }
        self.columns[self.used] = [x, y, z, 1.0];
        self.used += 1;
    }

    /// Appends a raw column without the homogeneous `w = 1` invariant.
    pub fn append_column(&mut self, column: [f64; ROWS]) {
        if self.used == self.columns.len() {
            self.grow(self.columns.len() + GROWTH_STEP);
        }
        self.columns[self.used] = column;
        self.used += 1;
    }

    /// Copies every allocated element of `src` into `self`, growing `self`
    /// if it is narrower, and takes over the used-column count.
    pub fn copy_from(&mut self, src: &Matrix) {
        self.grow(src.columns.len());
        self.columns[..src.columns.len()].copy_from_slice(&src.columns);
        self.used = src.used;
    }

    /// Replaces every used column `p` of `b` with `self · p`.
    ///
    /// `self` is read as a 4×4 matrix from its first four columns. Each column
    /// of `b` is buffered before being overwritten.
    pub fn multiply(&self, b: &mut Matrix) {
        debug_assert!(
            self.columns.len() >= ROWS,
            "left operand of multiply must be at least 4x4"
        );
        let a = &self.columns;
        for column in b.columns[..b.used].iter_mut() {
            let p = *column;
            for (row, value) in column.iter_mut().enumerate() {
                *value = a[0][row] * p[0] + a[1][row] * p[1] + a[2][row] * p[2] + a[3][row] * p[3];
            }
        }
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.columns[col][row]
    }

    /// Set element at [row][col].
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.columns[col][row] = value;
    }

    /// The raw 4-vector stored in column `col`.
    #[inline]
    pub fn column(&self, col: usize) -> [f64; ROWS] {
        self.columns[col]
    }

    /// The x, y, z part of column `col`.
    #[inline]
    pub fn point(&self, col: usize) -> Vec3 {
        let [x, y, z, _] = self.columns[col];
        Vec3::new(x, y, z)
    }

    /// Iterates over the used columns as points.
    pub fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.columns[..self.used]
            .iter()
            .map(|&[x, y, z, _]| Vec3::new(x, y, z))
    }
}

/// Matrix product `A · B` as a new matrix; `B` is left untouched.
impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        let mut result = rhs.clone();
        self.multiply(&mut result);
        result
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for column in &self.columns[..self.used] {
                write!(f, "| {:<6.2}", column[row])?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
