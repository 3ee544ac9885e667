//! Complex scalars over a numeric field

use std::fmt::{self, Display};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_complex::Complex;
use serde::{Deserialize, Serialize};

use super::field::Field;
use super::parse::{parse_complex, render_complex};
use crate::error::{AlgebraError, AlgebraResult};

/// A complex number `real + imag·i` with components in the field `T`.
///
/// Equality follows the field: structural for integer fields, within ten
/// machine epsilons per component for floating-point fields.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scalar<T> {
    value: Complex<T>,
}

/// Scalar over the exact integer field.
pub type IntScalar = Scalar<i64>;

/// Scalar over the approximate floating-point field.
pub type FloatScalar = Scalar<f64>;

impl<T: Field> Scalar<T> {
    /// Create a scalar from its components.
    pub fn new(real: T, imag: T) -> Self {
        Scalar {
            value: Complex::new(real, imag),
        }
    }

    /// Create a scalar with zero imaginary part.
    pub fn from_real(real: T) -> Self {
        Self::new(real, T::zero())
    }

    /// Create a real scalar from an `f64`, flooring it for exact fields.
    pub fn from_f64(real: f64) -> Self {
        Self::from_real(T::from_f64(real))
    }

    /// Additive identity.
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Multiplicative identity.
    pub fn one() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// The imaginary unit.
    pub fn i() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Parse a complex literal such as `"3-4.5i"`, `"-i"` or `"2 + 7i"`.
    ///
    /// Parsing is lenient: numeric runs that cannot be read become zero.
    pub fn parse(text: &str) -> Self {
        let (real, imag) = parse_complex(text);
        Self::new(real, imag)
    }

    /// Create a scalar from polar coordinates.
    ///
    /// Exact fields truncate each component toward zero.
    pub fn from_polar(modulus: T, angle: f64) -> Self {
        let modulus = modulus.to_f64();
        Self::new(
            T::from_f64_trunc(modulus * angle.cos()),
            T::from_f64_trunc(modulus * angle.sin()),
        )
    }

    pub fn real(&self) -> T {
        self.value.re
    }

    pub fn imag(&self) -> T {
        self.value.im
    }

    /// Underlying `num_complex` value.
    pub fn as_complex(&self) -> Complex<T> {
        self.value
    }

    /// Complex conjugate.
    pub fn conjugate(&self) -> Self {
        Scalar {
            value: self.value.conj(),
        }
    }

    /// Additive inverse.
    pub fn inverse(&self) -> Self {
        Scalar { value: -self.value }
    }

    pub fn modulus_squared(&self) -> T {
        self.value.norm_sqr()
    }

    pub fn modulus(&self) -> T {
        self.modulus_squared().sqrt()
    }

    /// Polar form `(modulus, angle)`, the angle being `atan(imag / real)`.
    pub fn to_polar(&self) -> (T, f64) {
        (self.modulus(), (self.imag().to_f64() / self.real().to_f64()).atan())
    }

    /// Divide by `other`, failing when its squared modulus is zero.
    pub fn divide(&self, other: &Self) -> AlgebraResult<Self> {
        if other.modulus_squared() == T::zero() {
            return Err(AlgebraError::DivideByZero);
        }
        Ok(Scalar {
            value: self.value / other.value,
        })
    }

    /// Equality under the field's policy.
    pub fn equals(&self, other: &Self) -> bool {
        if T::EXACT {
            self.value == other.value
        } else {
            self.near_equals(other, T::tolerance())
        }
    }

    /// True when both components differ by strictly less than `epsilon`.
    pub fn near_equals(&self, other: &Self, epsilon: T) -> bool {
        (self.real() - other.real()).abs() < epsilon && (self.imag() - other.imag()).abs() < epsilon
    }

    /// Narrow to the real field, failing on a nonzero imaginary part.
    pub fn to_real(&self) -> AlgebraResult<T> {
        if self.imag() != T::zero() {
            return Err(AlgebraError::NarrowingFailure {
                imag: self.imag().render(),
            });
        }
        Ok(self.real())
    }

    /// Render as a complex literal.
    pub fn to_text(&self) -> String {
        render_complex(self.real(), self.imag())
    }
}

impl<T: Field> PartialEq for Scalar<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Field> Display for Scalar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl<T: Field> FromStr for Scalar<T> {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<T: Field> From<T> for Scalar<T> {
    fn from(real: T) -> Self {
        Self::from_real(real)
    }
}

impl<T: Field> From<Complex<T>> for Scalar<T> {
    fn from(value: Complex<T>) -> Self {
        Scalar { value }
    }
}

impl<T: Field> From<Scalar<T>> for Complex<T> {
    fn from(scalar: Scalar<T>) -> Self {
        scalar.value
    }
}

macro_rules! narrowing {
    ($($t:ty),*) => {$(
        impl TryFrom<Scalar<$t>> for $t {
            type Error = AlgebraError;

            fn try_from(scalar: Scalar<$t>) -> AlgebraResult<$t> {
                scalar.to_real()
            }
        }
    )*};
}

narrowing!(i32, i64, f32, f64);

impl<T: Field> Add for Scalar<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Scalar {
            value: self.value + rhs.value,
        }
    }
}

impl<T: Field> Sub for Scalar<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Scalar {
            value: self.value - rhs.value,
        }
    }
}

impl<T: Field> Mul for Scalar<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Scalar {
            value: self.value * rhs.value,
        }
    }
}

impl<T: Field> Neg for Scalar<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.inverse()
    }
}

impl<T: Field> AddAssign for Scalar<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Field> SubAssign for Scalar<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Field> MulAssign for Scalar<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Field> std::iter::Sum for Scalar<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, value| acc + value)
    }
}
