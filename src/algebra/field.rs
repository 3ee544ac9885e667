//! Numeric fields underlying complex scalars
//!
//! A field supplies the arithmetic, the equality policy and the text
//! conventions for the real and imaginary components of a [`Scalar`].
//! Integer fields are exact: equality is structural. Floating-point fields
//! are approximate: equality allows a difference below ten machine epsilons.
//!
//! [`Scalar`]: crate::algebra::Scalar

use std::fmt::{Debug, Display};
use std::ops::Neg;

use num_traits::Num;

/// Capability trait for the component type of complex scalars.
pub trait Field:
    Num + Copy + Neg<Output = Self> + PartialOrd + Default + Debug + Display + Send + Sync + 'static
{
    /// Whether equality on this field is structural.
    const EXACT: bool;

    /// Default tolerance used by approximate equality (zero for exact fields).
    fn tolerance() -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Square root. Exact fields return the floor of the real root.
    fn sqrt(self) -> Self;

    /// Lossy conversion from `f64`. Exact fields take the floor.
    fn from_f64(value: f64) -> Self;

    /// Lossy conversion from `f64` rounding toward zero.
    fn from_f64_trunc(value: f64) -> Self;

    /// Lossy conversion to `f64`.
    fn to_f64(self) -> f64;

    /// Equality policy of the field.
    fn field_eq(self, other: Self) -> bool {
        if Self::EXACT {
            self == other
        } else {
            Field::abs(self - other) < Self::tolerance()
        }
    }

    /// Parse the longest numeric prefix of `text`.
    ///
    /// Returns the value and the number of bytes consumed. When no number
    /// can be read the result is `(0, 0)`; this never fails.
    fn parse_prefix(text: &str) -> (Self, usize);

    /// Render the value as text.
    fn render(self) -> String {
        self.to_string()
    }
}

fn skip_whitespace(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_whitespace()).count()
}

fn scan_digits(bytes: &[u8], from: usize) -> usize {
    bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count()
}

fn scan_sign(bytes: &[u8], from: usize) -> usize {
    match bytes.get(from) {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    }
}

/// Byte range `[start, end)` of an integer literal at the front of `text`.
fn scan_integer(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let start = skip_whitespace(bytes);
    let mut end = start + scan_sign(bytes, start);
    let digits = scan_digits(bytes, end);
    if digits == 0 {
        return None;
    }
    end += digits;
    Some((start, end))
}

/// Byte range `[start, end)` of a decimal literal at the front of `text`.
fn scan_decimal(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let start = skip_whitespace(bytes);
    let mut end = start + scan_sign(bytes, start);

    let integral = scan_digits(bytes, end);
    end += integral;

    let mut fractional = 0;
    if bytes.get(end) == Some(&b'.') {
        fractional = scan_digits(bytes, end + 1);
        if integral + fractional > 0 {
            end += 1 + fractional;
        }
    }
    if integral + fractional == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let sign = scan_sign(bytes, end + 1);
        let exponent = scan_digits(bytes, end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }

    Some((start, end))
}

macro_rules! exact_field {
    ($($t:ty),*) => {$(
        impl Field for $t {
            const EXACT: bool = true;

            fn tolerance() -> Self {
                0
            }

            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            fn sqrt(self) -> Self {
                (self as f64).sqrt().floor() as $t
            }

            fn from_f64(value: f64) -> Self {
                value.floor() as $t
            }

            fn from_f64_trunc(value: f64) -> Self {
                value as $t
            }

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn parse_prefix(text: &str) -> (Self, usize) {
                scan_integer(text)
                    .and_then(|(start, end)| text[start..end].parse::<$t>().ok().map(|v| (v, end)))
                    .unwrap_or((0, 0))
            }
        }
    )*};
}

macro_rules! approximate_field {
    ($($t:ty),*) => {$(
        impl Field for $t {
            const EXACT: bool = false;

            fn tolerance() -> Self {
                <$t>::EPSILON * 10.0
            }

            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn from_f64_trunc(value: f64) -> Self {
                value as $t
            }

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn parse_prefix(text: &str) -> (Self, usize) {
                scan_decimal(text)
                    .and_then(|(start, end)| text[start..end].parse::<$t>().ok().map(|v| (v, end)))
                    .unwrap_or((0.0, 0))
            }
        }
    )*};
}

exact_field!(i32, i64);
approximate_field!(f32, f64);
