//! Complex linear algebra over exact and approximate fields
//!
//! [`Scalar`], [`Vector`] and [`Matrix`] are value types parameterized by a
//! [`Field`]. Integer fields compare exactly; floating-point fields compare
//! within a small tolerance.

pub mod field;
pub mod matrix;
pub mod parse;
pub mod scalar;
pub mod vector;

pub use field::Field;
pub use matrix::Matrix;
pub use scalar::{FloatScalar, IntScalar, Scalar};
pub use vector::Vector;

/// Vector over the exact integer field.
pub type IntVector = Vector<i64>;

/// Vector over the approximate floating-point field.
pub type FloatVector = Vector<f64>;

/// Matrix over the exact integer field.
pub type IntMatrix = Matrix<i64>;

/// Matrix over the approximate floating-point field.
pub type FloatMatrix = Matrix<f64>;
