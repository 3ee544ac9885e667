//! Complex matrices
//!
//! A [`Matrix`] owns its rows as [`Vector`]s, in row-major order. Rows are
//! expected to share one length; the operations that rely on it (transpose,
//! multiplication) do not validate it.
//!
//! Operations that only make sense for square matrices (trace, power, tensor
//! product and the structural predicates) run unchecked by default, so a
//! non-square input may panic on an index or yield a meaningless value. With
//! the `strict-shapes` feature they report [`AlgebraError::NotSquare`]
//! instead, and the predicates answer `false`.

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut, Mul, Neg};

use ndarray::Array2;
use num_complex::Complex;
use serde::{Deserialize, Serialize};

use super::field::Field;
use super::scalar::Scalar;
use super::vector::Vector;
use crate::error::{AlgebraError, AlgebraResult};

/// A row-major matrix of complex scalars over the field `T`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix<T> {
    rows: Vec<Vector<T>>,
}

impl<T: Field> Matrix<T> {
    /// Create a matrix from its rows.
    pub fn new(rows: Vec<Vector<T>>) -> Self {
        Matrix { rows }
    }

    /// Create a matrix of real elements from nested rows.
    pub fn from_values<R, I>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        rows.into_iter().map(Vector::from_values).collect()
    }

    /// Create a matrix by parsing every token as a complex literal.
    pub fn from_text<R, I, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        rows.into_iter().map(Vector::from_text).collect()
    }

    /// Create an `m x n` matrix filled with `value`.
    pub fn filled(m: usize, n: usize, value: Scalar<T>) -> Self {
        Matrix {
            rows: vec![Vector::filled(n, value); m],
        }
    }

    /// Create the `m x n` zero matrix.
    pub fn zeros(m: usize, n: usize) -> Self {
        Self::filled(m, n, Scalar::zero())
    }

    /// Create the `size x size` identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut result = Self::zeros(size, size);
        for i in 0..size {
            result[(i, i)] = Scalar::one();
        }
        result
    }

    /// Single-column matrix holding `vector`.
    pub fn from_column(vector: &Vector<T>) -> Self {
        Matrix {
            rows: vec![vector.clone()],
        }
        .transpose()
    }

    /// First column as a vector.
    pub fn to_column_vector(&self) -> Vector<T> {
        self.rows.iter().map(|row| row[0]).collect()
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first row, zero for an empty matrix.
    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, Vector::len)
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn row(&self, index: usize) -> &Vector<T> {
        &self.rows[index]
    }

    pub fn iter_rows(&self) -> std::slice::Iter<'_, Vector<T>> {
        self.rows.iter()
    }

    /// Whether every row has the length of the first one.
    pub fn is_well_formed(&self) -> bool {
        let cols = self.cols();
        self.rows.iter().all(|row| row.len() == cols)
    }

    pub fn is_square(&self) -> bool {
        self.is_well_formed() && self.rows() == self.cols()
    }

    /// Fail with `NotSquare` unless the matrix is well-formed and square.
    pub fn check_square(&self) -> AlgebraResult<()> {
        if !self.is_square() {
            return Err(AlgebraError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }

    #[cfg(feature = "strict-shapes")]
    fn require_square(&self) -> AlgebraResult<()> {
        self.check_square()
    }

    #[cfg(not(feature = "strict-shapes"))]
    fn require_square(&self) -> AlgebraResult<()> {
        Ok(())
    }

    /// Render every element as a complex literal.
    pub fn to_text(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(Vector::to_text).collect()
    }

    /// Element-wise comparison with an explicit tolerance.
    pub fn near_equals(&self, other: &Self, epsilon: T) -> bool {
        self.rows() == other.rows()
            && self
                .rows
                .iter()
                .zip(other.rows.iter())
                .all(|(a, b)| a.near_equals(b, epsilon))
    }

    /// Combine two matrices row by row.
    fn zip_rows<F>(&self, other: &Self, operation: &'static str, f: F) -> AlgebraResult<Self>
    where
        F: Fn(&Vector<T>, &Vector<T>) -> AlgebraResult<Vector<T>>,
    {
        if self.rows() != other.rows() {
            return Err(AlgebraError::length_mismatch(operation, self.rows(), other.rows()));
        }
        self.rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| f(a, b))
            .collect()
    }

    fn map_rows<F>(&self, f: F) -> Self
    where
        F: Fn(&Vector<T>) -> Vector<T>,
    {
        self.rows.iter().map(f).collect()
    }

    pub fn add(&self, other: &Self) -> AlgebraResult<Self> {
        self.zip_rows(other, "matrix addition", Vector::add)
    }

    pub fn subtract(&self, other: &Self) -> AlgebraResult<Self> {
        self.zip_rows(other, "matrix subtraction", Vector::subtract)
    }

    /// Scale every element by `scalar`.
    pub fn multiply_scalar(&self, scalar: Scalar<T>) -> Self {
        self.map_rows(|row| row.multiply(scalar))
    }

    pub fn conjugate(&self) -> Self {
        self.map_rows(Vector::conjugate)
    }

    /// Element-wise additive inverse.
    pub fn inverse(&self) -> Self {
        self.map_rows(Vector::inverse)
    }

    /// Matrix product, failing unless `self.cols() == other.rows()`.
    pub fn multiply(&self, other: &Self) -> AlgebraResult<Self> {
        let (m, n, p) = (self.rows(), self.cols(), other.cols());

        if n != other.rows() {
            return Err(AlgebraError::size_mismatch(self.shape(), other.shape()));
        }

        let mut result = Self::zeros(m, p);
        for i in 0..m {
            for j in 0..p {
                result[(i, j)] = (0..n).map(|k| self[(i, k)] * other[(k, j)]).sum();
            }
        }

        Ok(result)
    }

    /// Apply the matrix to `vector`, read as a column.
    pub fn multiply_vector(&self, vector: &Vector<T>) -> AlgebraResult<Vector<T>> {
        let column = Self::from_column(vector);
        Ok(self.multiply(&column)?.to_column_vector())
    }

    /// `self` multiplied with itself `k` times, starting from the identity.
    pub fn power(&self, k: usize) -> AlgebraResult<Self> {
        self.require_square()?;

        let mut result = Self::identity(self.rows());
        for _ in 0..k {
            result = result.multiply(self)?;
        }
        Ok(result)
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        (0..self.cols())
            .map(|i| self.rows.iter().map(|row| row[i]).collect::<Vector<T>>())
            .collect()
    }

    /// Conjugate transpose.
    pub fn adjoint(&self) -> Self {
        self.transpose().conjugate()
    }

    /// Alias of [`Matrix::adjoint`].
    pub fn dagger(&self) -> Self {
        self.adjoint()
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> AlgebraResult<Scalar<T>> {
        self.require_square()?;
        Ok((0..self.rows()).map(|i| self[(i, i)]).sum())
    }

    /// `trace(adjoint(self) * other)`.
    pub fn inner_product(&self, other: &Self) -> AlgebraResult<Scalar<T>> {
        self.adjoint().multiply(other)?.trace()
    }

    /// Kronecker product of two square matrices of the same order.
    ///
    /// Entry `[j][k]` of the `mn x mn` result is
    /// `self[j / n][k / m] * other[j % n][k % m]` where `m` and `n` are the
    /// orders of `self` and `other`. The mapping only stays inside both
    /// operands when `m == n`; other orders fail with `SizeMismatch`. Use
    /// [`Matrix::kronecker_product`] for operands of different shapes.
    pub fn tensor_product(&self, other: &Self) -> AlgebraResult<Self> {
        self.require_square()?;
        other.require_square()?;

        let (m, n) = (self.rows(), other.rows());
        if m != n {
            return Err(AlgebraError::size_mismatch(self.shape(), other.shape()));
        }

        let size = m * n;
        let mut result = Self::zeros(size, size);
        for j in 0..size {
            for k in 0..size {
                result[(j, k)] = self[(j / n, k / m)] * other[(j % n, k % m)];
            }
        }
        Ok(result)
    }

    /// Kronecker product for operands of any shape.
    ///
    /// Agrees with [`Matrix::tensor_product`] on square operands of equal order.
    pub fn kronecker_product(&self, other: &Self) -> Self {
        let (self_rows, self_cols) = self.shape();
        let (other_rows, other_cols) = other.shape();

        let mut result = Self::zeros(self_rows * other_rows, self_cols * other_cols);
        for i in 0..self_rows {
            for j in 0..self_cols {
                for k in 0..other_rows {
                    for l in 0..other_cols {
                        result[(i * other_rows + k, j * other_cols + l)] = self[(i, j)] * other[(k, l)];
                    }
                }
            }
        }
        result
    }

    /// `sqrt(Re(inner_product(self)))`, as a real scalar.
    pub fn norm(&self) -> AlgebraResult<Scalar<T>> {
        Ok(Scalar::from_real(self.inner_product(self)?.real().sqrt()))
    }

    pub fn row_sum(&self, row: usize) -> Scalar<T> {
        self.rows[row].sum()
    }

    pub fn col_sum(&self, col: usize) -> Scalar<T> {
        self.rows.iter().map(|row| row[col]).sum()
    }

    /// Every row sum and column sum is exactly `1 + 0i`.
    ///
    /// The comparison is exact even for floating-point fields, so sums that
    /// pick up rounding error do not qualify.
    pub fn is_doubly_stochastic(&self) -> bool {
        if self.require_square().is_err() {
            return false;
        }

        let unit = Complex::new(T::one(), T::zero());
        (0..self.rows()).all(|i| {
            self.row_sum(i).as_complex() == unit && self.col_sum(i).as_complex() == unit
        })
    }

    /// `self * adjoint(self)` equals the identity under the field's equality.
    pub fn is_unitary(&self) -> bool {
        if self.require_square().is_err() {
            return false;
        }

        self.multiply(&self.adjoint())
            .map(|product| product == Self::identity(self.rows()))
            .unwrap_or(false)
    }

    /// Convert to a two-dimensional `ndarray`. Expects a well-formed matrix.
    pub fn to_array(&self) -> Array2<Complex<T>> {
        Array2::from_shape_fn(self.shape(), |(i, j)| self[(i, j)].as_complex())
    }
}

impl<T: Field> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<T: Field> Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = Scalar<T>;

    fn index(&self, (row, col): (usize, usize)) -> &Scalar<T> {
        &self.rows[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Scalar<T> {
        &mut self.rows[row][col]
    }
}

impl<T: Field> FromIterator<Vector<T>> for Matrix<T> {
    fn from_iter<I: IntoIterator<Item = Vector<T>>>(iter: I) -> Self {
        Matrix {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<T: Field> From<&Array2<Complex<T>>> for Matrix<T> {
    fn from(array: &Array2<Complex<T>>) -> Self {
        array
            .rows()
            .into_iter()
            .map(|row| row.iter().cloned().map(Scalar::from).collect::<Vector<T>>())
            .collect()
    }
}

impl<T: Field> From<Vector<T>> for Matrix<T> {
    fn from(vector: Vector<T>) -> Self {
        Self::from_column(&vector)
    }
}

impl<T: Field> Neg for Matrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.inverse()
    }
}

impl<T: Field> Mul<Scalar<T>> for Matrix<T> {
    type Output = Self;

    fn mul(self, scalar: Scalar<T>) -> Self {
        self.multiply_scalar(scalar)
    }
}

impl<T: Field> Mul<Matrix<T>> for Scalar<T> {
    type Output = Matrix<T>;

    fn mul(self, matrix: Matrix<T>) -> Matrix<T> {
        matrix.multiply_scalar(self)
    }
}

macro_rules! real_scaling {
    ($($t:ty),*) => {$(
        impl Mul<Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn mul(self, matrix: Matrix<$t>) -> Matrix<$t> {
                matrix.multiply_scalar(Scalar::from_real(self))
            }
        }
    )*};
}

real_scaling!(i32, i64, f32, f64);
