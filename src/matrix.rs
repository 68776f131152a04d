//! Dense row-major matrices: arithmetic, determinants, and inverses.
//!
//! The engine targets the small (≤4×4) homogeneous matrices the transform
//! pipeline produces. The determinant uses textbook cofactor expansion,
//! which is exponential in the matrix size — a scaling limitation, not a
//! defect, for the sizes this crate is built around.

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::errors::{MathError, MathResult};
use crate::float_types::{Real, tolerance};
use crate::point::Point;

/// A dense `nrows × ncols` matrix backed by a flat row-major buffer.
///
/// Both dimensions are at least 1 and fixed for the instance's lifetime;
/// the backing buffer always holds exactly `nrows * ncols` entries. The
/// buffer is private, so the invariant cannot be broken from outside.
///
/// Every value-producing operation allocates a fresh matrix; the only
/// in-place mutators are [`set`](Self::set) and [`set_all`](Self::set_all).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    nrows: usize,
    ncols: usize,
    data: Vec<Real>,
}

impl Matrix {
    /// A matrix with every entry equal to `value`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn filled(nrows: usize, ncols: usize, value: Real) -> Self {
        assert!(nrows >= 1 && ncols >= 1, "a matrix needs at least one row and one column");
        Matrix { nrows, ncols, data: vec![value; nrows * ncols] }
    }

    /// The zero matrix of the given shape.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::filled(nrows, ncols, 0.0)
    }

    /// A matrix populated from `data`, row by row. Fails with
    /// `SizeMismatch` unless `data.len() == nrows * ncols`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(nrows: usize, ncols: usize, data: Vec<Real>) -> MathResult<Self> {
        let mut mtx = Self::zeros(nrows, ncols);
        mtx.set_all(data)?;
        Ok(mtx)
    }

    /// The square identity matrix of the given size.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn identity(size: usize) -> Self {
        let mut mtx = Self::zeros(size, size);
        for i in 0..size {
            mtx.data[i * size + i] = 1.0;
        }
        mtx
    }

    /// A single-column matrix holding the point's components.
    pub fn from_point<const N: usize>(pt: &Point<N>) -> Self {
        assert!(N >= 1, "a matrix needs at least one row and one column");
        Matrix { nrows: N, ncols: 1, data: pt.to_vec() }
    }

    /// A single-column matrix holding the point's components followed by a
    /// trailing homogeneous 1, ready to be multiplied by an `(N+1)×(N+1)`
    /// transform matrix.
    pub fn from_point_padded<const N: usize>(pt: &Point<N>) -> Self {
        let mut data = pt.to_vec();
        data.push(1.0);
        Matrix { nrows: N + 1, ncols: 1, data }
    }

    /// Crate-internal constructor for literal matrices whose size is
    /// correct by construction.
    pub(crate) fn from_raw(nrows: usize, ncols: usize, data: Vec<Real>) -> Self {
        debug_assert_eq!(data.len(), nrows * ncols);
        Matrix { nrows, ncols, data }
    }

    pub const fn nrows(&self) -> usize {
        self.nrows
    }

    pub const fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    pub const fn dims(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn check_row(&self, idx: usize) -> MathResult<()> {
        if idx >= self.nrows {
            return Err(MathError::IndexOutOfBounds { axis: "row", index: idx, len: self.nrows });
        }
        Ok(())
    }

    fn check_col(&self, idx: usize) -> MathResult<()> {
        if idx >= self.ncols {
            return Err(MathError::IndexOutOfBounds {
                axis: "column",
                index: idx,
                len: self.ncols,
            });
        }
        Ok(())
    }

    /// The entry at the given row and column.
    pub fn get(&self, rowidx: usize, colidx: usize) -> MathResult<Real> {
        self.check_row(rowidx)?;
        self.check_col(colidx)?;
        Ok(self.data[rowidx * self.ncols + colidx])
    }

    /// Replace the entry at the given row and column.
    pub fn set(&mut self, rowidx: usize, colidx: usize, value: Real) -> MathResult<()> {
        self.check_row(rowidx)?;
        self.check_col(colidx)?;
        self.data[rowidx * self.ncols + colidx] = value;
        Ok(())
    }

    /// An ordered copy of the row at `idx`.
    pub fn row(&self, idx: usize) -> MathResult<Vec<Real>> {
        self.check_row(idx)?;
        let start = idx * self.ncols;
        Ok(self.data[start..start + self.ncols].to_vec())
    }

    /// An ordered copy of the column at `idx`.
    pub fn col(&self, idx: usize) -> MathResult<Vec<Real>> {
        self.check_col(idx)?;
        Ok(self.data[idx..].iter().step_by(self.ncols).copied().collect())
    }

    /// Replace the entire backing buffer. Fails with `SizeMismatch` unless
    /// `data` holds exactly `nrows * ncols` values.
    pub fn set_all(&mut self, data: Vec<Real>) -> MathResult<()> {
        if data.len() != self.nrows * self.ncols {
            return Err(MathError::SizeMismatch {
                op: "set_all",
                left: self.dims(),
                right: (data.len(), 1),
            });
        }
        self.data = data;
        Ok(())
    }

    /// Elementwise sum. The shapes must match.
    pub fn add(&self, mtx: &Matrix) -> MathResult<Matrix> {
        if self.dims() != mtx.dims() {
            return Err(MathError::SizeMismatch { op: "add", left: self.dims(), right: mtx.dims() });
        }
        let data = self.data.iter().zip(mtx.data.iter()).map(|(a, b)| a + b).collect();
        Ok(Matrix { nrows: self.nrows, ncols: self.ncols, data })
    }

    /// Elementwise difference. The shapes must match.
    pub fn subtract(&self, mtx: &Matrix) -> MathResult<Matrix> {
        if self.dims() != mtx.dims() {
            return Err(MathError::SizeMismatch {
                op: "subtract",
                left: self.dims(),
                right: mtx.dims(),
            });
        }
        let data = self.data.iter().zip(mtx.data.iter()).map(|(a, b)| a - b).collect();
        Ok(Matrix { nrows: self.nrows, ncols: self.ncols, data })
    }

    /// `constant` added to every entry.
    pub fn add_scalar(&self, constant: Real) -> Matrix {
        let data = self.data.iter().map(|d| d + constant).collect();
        Matrix { nrows: self.nrows, ncols: self.ncols, data }
    }

    /// Every entry multiplied by `scalar`.
    pub fn scale(&self, scalar: Real) -> Matrix {
        let data = self.data.iter().map(|d| d * scalar).collect();
        Matrix { nrows: self.nrows, ncols: self.ncols, data }
    }

    /// Every entry divided by `constant`, which must not be zero.
    pub fn divide(&self, constant: Real) -> MathResult<Matrix> {
        if constant == 0.0 {
            return Err(MathError::DivideByZero);
        }
        let data = self.data.iter().map(|d| d / constant).collect();
        Ok(Matrix { nrows: self.nrows, ncols: self.ncols, data })
    }

    /// Every entry divided by `constant` and floored, which must not be zero.
    pub fn int_divide(&self, constant: Real) -> MathResult<Matrix> {
        if constant == 0.0 {
            return Err(MathError::DivideByZero);
        }
        let data = self.data.iter().map(|d| (d / constant).floor()).collect();
        Ok(Matrix { nrows: self.nrows, ncols: self.ncols, data })
    }

    /// Every entry with its sign flipped; shorthand for `scale(-1)`.
    pub fn negated(&self) -> Matrix {
        self.scale(-1.0)
    }

    /// The standard matrix product `self · mtx`. Requires
    /// `self.ncols == mtx.nrows`; the result is `(self.nrows × mtx.ncols)`.
    pub fn dot(&self, mtx: &Matrix) -> MathResult<Matrix> {
        if self.ncols != mtx.nrows {
            return Err(MathError::SizeMismatch { op: "dot", left: self.dims(), right: mtx.dims() });
        }
        Ok(self.mul_unchecked(mtx))
    }

    /// Product of conformable matrices. Callers guarantee
    /// `self.ncols == mtx.nrows`.
    pub(crate) fn mul_unchecked(&self, mtx: &Matrix) -> Matrix {
        debug_assert_eq!(self.ncols, mtx.nrows);
        let mut out = Matrix::zeros(self.nrows, mtx.ncols);
        for row in 0..self.nrows {
            for col in 0..mtx.ncols {
                let mut sum = 0.0;
                for k in 0..self.ncols {
                    sum += self.data[row * self.ncols + k] * mtx.data[k * mtx.ncols + col];
                }
                out.data[row * out.ncols + col] = sum;
            }
        }
        out
    }

    /// The matrix flipped along its diagonal: `result[j][i] = self[i][j]`.
    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::zeros(self.ncols, self.nrows);
        for row in 0..self.nrows {
            for col in 0..self.ncols {
                out.data[col * out.ncols + row] = self.data[row * self.ncols + col];
            }
        }
        out
    }

    /// The matrix with the given row and column removed, relative order of
    /// the remaining entries preserved. Fails with `SizeMismatch` on a
    /// single-row or single-column matrix, whose submatrix would have a
    /// zero dimension.
    pub fn submatrix(&self, rowidx: usize, colidx: usize) -> MathResult<Matrix> {
        self.check_row(rowidx)?;
        self.check_col(colidx)?;
        if self.nrows == 1 || self.ncols == 1 {
            return Err(MathError::SizeMismatch {
                op: "submatrix",
                left: self.dims(),
                right: (self.nrows - 1, self.ncols - 1),
            });
        }
        let mut data = Vec::with_capacity((self.nrows - 1) * (self.ncols - 1));
        for row in 0..self.nrows {
            if row == rowidx {
                continue;
            }
            for col in 0..self.ncols {
                if col == colidx {
                    continue;
                }
                data.push(self.data[row * self.ncols + col]);
            }
        }
        Ok(Matrix { nrows: self.nrows - 1, ncols: self.ncols - 1, data })
    }

    /// The determinant, by recursive cofactor expansion along row 0.
    /// Fails with `SizeMismatch` on a non-square matrix.
    pub fn determinant(&self) -> MathResult<Real> {
        if self.nrows != self.ncols {
            return Err(MathError::SizeMismatch {
                op: "determinant",
                left: self.dims(),
                right: self.dims(),
            });
        }
        match self.nrows {
            1 => Ok(self.data[0]),
            2 => Ok(self.data[0] * self.data[3] - self.data[1] * self.data[2]),
            _ => {
                let mut sign = 1.0;
                let mut total = 0.0;
                for col in 0..self.ncols {
                    total += sign * self.data[col] * self.submatrix(0, col)?.determinant()?;
                    sign = -sign;
                }
                Ok(total)
            },
        }
    }

    /// The inverse, via the adjugate: build the cofactor matrix (each
    /// entry the determinant of its submatrix with checkerboard sign),
    /// transpose it, and scale by the reciprocal determinant.
    ///
    /// Fails with `NoInverse` when the determinant is zero within
    /// [`tolerance`](crate::float_types::tolerance), so near-singular
    /// matrices are rejected rather than inverted into noise.
    pub fn inverse(&self) -> MathResult<Matrix> {
        let det = self.determinant()?;
        if det.abs() <= tolerance() {
            return Err(MathError::NoInverse);
        }
        if self.nrows == 1 {
            return Ok(Matrix { nrows: 1, ncols: 1, data: vec![1.0 / det] });
        }
        let mut cofactors = Matrix::zeros(self.nrows, self.ncols);
        for row in 0..self.nrows {
            for col in 0..self.ncols {
                let minor = self.submatrix(row, col)?.determinant()?;
                let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
                cofactors.set(row, col, sign * minor)?;
            }
        }
        Ok(cofactors.transpose().scale(1.0 / det))
    }

    /// An independent flat copy of the entries, row-major.
    pub fn to_vec(&self) -> Vec<Real> {
        self.data.clone()
    }

    /// An independent nested copy of the entries, one inner list per row.
    pub fn to_rows(&self) -> Vec<Vec<Real>> {
        self.data.chunks(self.ncols).map(<[Real]>::to_vec).collect()
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.chunks(self.ncols).enumerate() {
            if i > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

// Operator sugar. Each impl pairs one operand type with one checked
// method and panics on a dimension error; use the named methods when the
// shapes are not statically known to agree.

impl Add<&Matrix> for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics if the shapes differ; see [`Matrix::add`] for the checked form.
    fn add(self, rhs: &Matrix) -> Matrix {
        match Matrix::add(self, rhs) {
            Ok(mtx) => mtx,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Add<Real> for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: Real) -> Matrix {
        self.add_scalar(rhs)
    }
}

impl Sub<&Matrix> for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics if the shapes differ; see [`Matrix::subtract`] for the checked form.
    fn sub(self, rhs: &Matrix) -> Matrix {
        match self.subtract(rhs) {
            Ok(mtx) => mtx,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Sub<Real> for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Real) -> Matrix {
        self.add_scalar(-rhs)
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics if the operands are not conformable; see [`Matrix::dot`] for
    /// the checked form.
    fn mul(self, rhs: &Matrix) -> Matrix {
        match self.dot(rhs) {
            Ok(mtx) => mtx,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Mul<Real> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Real) -> Matrix {
        self.scale(rhs)
    }
}

impl Div<Real> for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics on division by zero; see [`Matrix::divide`] for the checked form.
    fn div(self, rhs: Real) -> Matrix {
        match self.divide(rhs) {
            Ok(mtx) => mtx,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.negated()
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.dims() == other.dims()
            && self.data.iter().zip(other.data.iter()).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.dims() == other.dims()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::float_types::EPSILON;
    use crate::point::Point3D;
    use approx::assert_abs_diff_eq;

    #[test]
    fn construction_and_access() {
        let mut m = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.dims(), (2, 3));
        assert_eq!(m.get(1, 2).unwrap(), 6.0);
        assert_eq!(m.row(0).unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(m.col(1).unwrap(), vec![2.0, 5.0]);

        m.set(0, 0, -1.0).unwrap();
        assert_eq!(m.get(0, 0).unwrap(), -1.0);
    }

    #[test]
    fn bounds_are_checked() {
        let m = Matrix::zeros(3, 2);
        assert_eq!(
            m.row(3),
            Err(MathError::IndexOutOfBounds { axis: "row", index: 3, len: 3 })
        );
        assert_eq!(
            m.col(2),
            Err(MathError::IndexOutOfBounds { axis: "column", index: 2, len: 2 })
        );
        assert!(m.get(0, 5).is_err());
        assert!(m.clone().set(7, 0, 1.0).is_err());
    }

    #[test]
    fn set_all_checks_length() {
        let mut m = Matrix::zeros(2, 2);
        assert!(matches!(
            m.set_all(vec![1.0, 2.0, 3.0]),
            Err(MathError::SizeMismatch { op: "set_all", .. })
        ));
        m.set_all(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn elementwise_arithmetic() {
        let a = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Matrix::new(2, 2, vec![4.0, 3.0, 2.0, 1.0]).unwrap();

        assert_eq!((&a + &b).to_vec(), vec![5.0, 5.0, 5.0, 5.0]);
        assert_eq!((&a - &b).to_vec(), vec![-3.0, -1.0, 1.0, 3.0]);
        assert_eq!(a.add_scalar(10.0).to_vec(), vec![11.0, 12.0, 13.0, 14.0]);
        assert_eq!(a.scale(2.0).to_vec(), vec![2.0, 4.0, 6.0, 8.0]);
        assert_eq!((-&a).to_vec(), vec![-1.0, -2.0, -3.0, -4.0]);

        let c = Matrix::zeros(2, 3);
        assert!(matches!(a.add(&c), Err(MathError::SizeMismatch { op: "add", .. })));
    }

    #[test]
    fn scalar_division() {
        let m = Matrix::new(2, 2, vec![3.0, -3.0, 7.0, 8.0]).unwrap();
        assert_eq!(m.divide(2.0).unwrap().to_vec(), vec![1.5, -1.5, 3.5, 4.0]);
        assert_eq!(m.int_divide(2.0).unwrap().to_vec(), vec![1.0, -2.0, 3.0, 4.0]);

        assert_eq!(m.divide(0.0), Err(MathError::DivideByZero));
        assert_eq!(m.int_divide(0.0), Err(MathError::DivideByZero));
    }

    #[test]
    fn dot_product() {
        let a = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = Matrix::new(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();

        let ab = a.dot(&b).unwrap();
        assert_eq!(ab.dims(), (2, 2));
        assert_eq!(ab.to_vec(), vec![58.0, 64.0, 139.0, 154.0]);

        // A 2×3 against a 2×2 is not conformable.
        let c = Matrix::zeros(2, 2);
        assert!(matches!(a.dot(&c), Err(MathError::SizeMismatch { op: "dot", .. })));
    }

    #[test]
    fn identity_is_neutral() {
        let m = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.dot(&Matrix::identity(m.ncols())).unwrap(), m);
        assert_eq!(Matrix::identity(m.nrows()).dot(&m).unwrap(), m);
    }

    #[test]
    fn transpose_flips_indices() {
        let m = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let t = m.transpose();
        assert_eq!(t.dims(), (3, 2));
        assert_eq!(t.to_vec(), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn submatrix_removes_row_and_col() {
        let m = Matrix::new(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
        let s = m.submatrix(1, 0).unwrap();
        assert_eq!(s.dims(), (2, 2));
        assert_eq!(s.to_vec(), vec![2.0, 3.0, 8.0, 9.0]);

        let tiny = Matrix::new(1, 1, vec![5.0]).unwrap();
        assert!(matches!(
            tiny.submatrix(0, 0),
            Err(MathError::SizeMismatch { op: "submatrix", .. })
        ));
    }

    #[test]
    fn determinant_base_cases() {
        assert_eq!(Matrix::new(1, 1, vec![7.5]).unwrap().determinant().unwrap(), 7.5);
        // ad - bc on [2, 5, 1, 4]
        let m = Matrix::new(2, 2, vec![2.0, 5.0, 1.0, 4.0]).unwrap();
        assert_eq!(m.determinant().unwrap(), 3.0);
    }

    #[test]
    fn determinant_recursive() {
        let m = Matrix::new(3, 3, vec![6.0, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0]).unwrap();
        assert_abs_diff_eq!(m.determinant().unwrap(), -306.0, epsilon = EPSILON);

        let rect = Matrix::zeros(2, 3);
        assert!(matches!(
            rect.determinant(),
            Err(MathError::SizeMismatch { op: "determinant", .. })
        ));
    }

    #[test]
    fn inverse_times_original_is_identity() {
        let m = Matrix::new(
            4,
            4,
            vec![
                2.0, 5.0, 0.0, 8.0, //
                1.0, 4.0, 2.0, 6.0, //
                7.0, 8.0, 9.0, 3.0, //
                1.0, 5.0, 7.0, 8.0,
            ],
        )
        .unwrap();
        let inv = m.inverse().unwrap();
        assert_abs_diff_eq!(m.dot(&inv).unwrap(), Matrix::identity(4), epsilon = 1e-9);
        assert_abs_diff_eq!(inv.dot(&m).unwrap(), Matrix::identity(4), epsilon = 1e-9);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        // Second row is twice the first.
        let m = Matrix::new(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
        assert_eq!(m.inverse(), Err(MathError::NoInverse));
    }

    #[test]
    fn one_by_one_inverse() {
        let m = Matrix::new(1, 1, vec![4.0]).unwrap();
        assert_eq!(m.inverse().unwrap().to_vec(), vec![0.25]);
    }

    #[test]
    fn exports_are_independent_copies() {
        let m = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut flat = m.to_vec();
        flat[0] = 99.0;
        assert_eq!(m.get(0, 0).unwrap(), 1.0);

        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);

        let mut cloned = m.clone();
        cloned.set(0, 0, -7.0).unwrap();
        assert_eq!(m.get(0, 0).unwrap(), 1.0);
    }

    #[test]
    fn point_columns() {
        let pt = Point3D::new(3.0, 1.0, 5.0);
        let col = Matrix::from_point(&pt);
        assert_eq!(col.dims(), (3, 1));
        assert_eq!(col.to_vec(), vec![3.0, 1.0, 5.0]);

        let padded = Matrix::from_point_padded(&pt);
        assert_eq!(padded.dims(), (4, 1));
        assert_eq!(padded.to_vec(), vec![3.0, 1.0, 5.0, 1.0]);
    }

    #[test]
    fn display_rows() {
        let m = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(format!("{m}"), "[[1, 2],\n [3, 4]]");
    }
}
