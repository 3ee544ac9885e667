//! Complex vectors
//!
//! A [`Vector`] owns a fixed-length sequence of [`Scalar`]s. Elements can be
//! replaced by index, but the length never changes after construction and
//! every algebraic operation returns a new vector.

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut, Mul, Neg};

use ndarray::Array1;
use num_complex::Complex;
use serde::{Deserialize, Serialize};

use super::field::Field;
use super::scalar::Scalar;
use crate::error::{AlgebraError, AlgebraResult};

/// An ordered sequence of complex scalars over the field `T`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector<T> {
    elements: Vec<Scalar<T>>,
}

impl<T: Field> Vector<T> {
    /// Create a vector from its elements.
    pub fn new(elements: Vec<Scalar<T>>) -> Self {
        Vector { elements }
    }

    /// Create a vector of real elements.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().map(Scalar::from_real).collect()
    }

    /// Create a vector by parsing every token as a complex literal.
    pub fn from_text<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .map(|token| Scalar::parse(token.as_ref()))
            .collect()
    }

    /// Create a vector of `len` copies of `value`.
    pub fn filled(len: usize, value: Scalar<T>) -> Self {
        Vector {
            elements: vec![value; len],
        }
    }

    /// Create the zero vector of length `len`.
    pub fn zeros(len: usize) -> Self {
        Self::filled(len, Scalar::zero())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Scalar<T>> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scalar<T>> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[Scalar<T>] {
        &self.elements
    }

    /// Render every element as a complex literal.
    pub fn to_text(&self) -> Vec<String> {
        self.elements.iter().map(Scalar::to_text).collect()
    }

    /// Element-wise comparison with an explicit tolerance.
    ///
    /// Vectors of different lengths are never near-equal.
    pub fn near_equals(&self, other: &Self, epsilon: T) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.near_equals(b, epsilon))
    }

    /// Combine two equal-length vectors element by element.
    pub fn zip_with<F>(&self, other: &Self, operation: &'static str, f: F) -> AlgebraResult<Self>
    where
        F: Fn(Scalar<T>, Scalar<T>) -> Scalar<T>,
    {
        self.ensure_same_len(other, operation)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| f(*a, *b))
            .collect())
    }

    /// Apply `f` to every element.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(Scalar<T>) -> Scalar<T>,
    {
        self.iter().map(|value| f(*value)).collect()
    }

    pub fn add(&self, other: &Self) -> AlgebraResult<Self> {
        self.zip_with(other, "vector addition", |a, b| a + b)
    }

    pub fn subtract(&self, other: &Self) -> AlgebraResult<Self> {
        self.zip_with(other, "vector subtraction", |a, b| a - b)
    }

    /// Scale every element by `scalar`.
    pub fn multiply(&self, scalar: Scalar<T>) -> Self {
        self.map(|value| value * scalar)
    }

    pub fn conjugate(&self) -> Self {
        self.map(|value| value.conjugate())
    }

    /// Element-wise additive inverse.
    pub fn inverse(&self) -> Self {
        self.map(|value| -value)
    }

    /// `Σ conj(self[i]) · other[i]`.
    ///
    /// Conjugate-linear in `self`: swapping the operands conjugates the result.
    pub fn inner_product(&self, other: &Self) -> AlgebraResult<Scalar<T>> {
        self.ensure_same_len(other, "inner product")?;
        Ok(self.dot_conjugate(other))
    }

    fn dot_conjugate(&self, other: &Self) -> Scalar<T> {
        self.iter()
            .zip(other.iter())
            .map(|(a, b)| a.conjugate() * *b)
            .sum()
    }

    /// Kronecker product; the elements of `other` vary fastest.
    pub fn tensor_product(&self, other: &Self) -> Self {
        let n = other.len();
        (0..self.len() * n)
            .map(|i| self.elements[i / n] * other.elements[i % n])
            .collect()
    }

    /// Squared length, as a real scalar.
    pub fn norm_squared(&self) -> Scalar<T> {
        Scalar::from_real(self.dot_conjugate(self).real())
    }

    /// Length, as a real scalar. Exact fields floor the root.
    pub fn norm(&self) -> Scalar<T> {
        Scalar::from_real(self.norm_squared().real().sqrt())
    }

    /// Divide every element by the norm.
    ///
    /// The zero vector has no direction and fails with `DivideByZero`.
    pub fn normalize(&self) -> AlgebraResult<Self> {
        let length = self.norm();
        self.iter().map(|value| value.divide(&length)).collect()
    }

    /// Norm of the difference.
    pub fn distance(&self, other: &Self) -> AlgebraResult<Scalar<T>> {
        Ok(self.subtract(other)?.norm())
    }

    pub fn sum(&self) -> Scalar<T> {
        self.iter().copied().sum()
    }

    /// Convert to an `ndarray` column of amplitudes.
    pub fn to_array(&self) -> Array1<Complex<T>> {
        self.iter().map(Scalar::as_complex).collect()
    }

    fn ensure_same_len(&self, other: &Self, operation: &'static str) -> AlgebraResult<()> {
        if self.len() != other.len() {
            return Err(AlgebraError::length_mismatch(operation, self.len(), other.len()));
        }
        Ok(())
    }
}

impl<T: Field> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Field> Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.to_text().join(", "))
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = Scalar<T>;

    fn index(&self, index: usize) -> &Scalar<T> {
        &self.elements[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Scalar<T> {
        &mut self.elements[index]
    }
}

impl<T: Field> FromIterator<Scalar<T>> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = Scalar<T>>>(iter: I) -> Self {
        Vector {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a Scalar<T>;
    type IntoIter = std::slice::Iter<'a, Scalar<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: Field> From<Array1<Complex<T>>> for Vector<T> {
    fn from(array: Array1<Complex<T>>) -> Self {
        array.iter().cloned().map(Scalar::from).collect()
    }
}

impl<T: Field> Neg for Vector<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.inverse()
    }
}

impl<T: Field> Mul<Scalar<T>> for Vector<T> {
    type Output = Self;

    fn mul(self, scalar: Scalar<T>) -> Self {
        self.multiply(scalar)
    }
}

impl<T: Field> Mul<Vector<T>> for Scalar<T> {
    type Output = Vector<T>;

    fn mul(self, vector: Vector<T>) -> Vector<T> {
        vector.multiply(self)
    }
}

macro_rules! real_scaling {
    ($($t:ty),*) => {$(
        impl Mul<Vector<$t>> for $t {
            type Output = Vector<$t>;

            fn mul(self, vector: Vector<$t>) -> Vector<$t> {
                vector.multiply(Scalar::from_real(self))
            }
        }
    )*};
}

real_scaling!(i32, i64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_with_rejects_mismatched_lengths() {
        let a = Vector::<i64>::from_values([1, 2, 3]);
        let b = Vector::<i64>::from_values([1, 2]);

        let err = a.zip_with(&b, "test", |x, y| x + y).unwrap_err();
        assert_eq!(err, AlgebraError::length_mismatch("test", 3, 2));
    }

    #[test]
    fn test_normalize_zero_vector() {
        let zero = Vector::<f64>::zeros(3);
        assert_eq!(zero.normalize(), Err(AlgebraError::DivideByZero));
    }

    #[test]
    fn test_index_assignment() {
        let mut v = Vector::<i64>::zeros(2);
        v[1] = Scalar::new(4, -1);
        assert_eq!(v.to_text(), vec!["0", "4-i"]);
    }
}
