//! Lenient complex literal scanner
//!
//! Accepts `[sign] digits [. digits] [sign (digits)? i]` with optional
//! whitespace between the terms. Numeric runs that cannot be read become
//! zero; the scanner never rejects input.

use super::field::Field;

/// Marker of the imaginary unit.
pub const IMAGINARY_UNIT: u8 = b'i';

/// Split `text` into real and imaginary parts.
pub fn parse_complex<T: Field>(text: &str) -> (T, T) {
    let (mut real, start) = T::parse_prefix(text);
    let mut imag = T::zero();
    let mut negative = false;

    let bytes = text.as_bytes();
    for index in start..bytes.len() {
        match bytes[index] {
            b'-' => negative = true,
            c if c.is_ascii_digit() => {
                // ASCII digits always sit on a char boundary
                let (value, _) = T::parse_prefix(&text[index..]);
                imag = if negative { -value } else { value };
                break;
            }
            IMAGINARY_UNIT => {
                if index != start {
                    imag = if negative { -T::one() } else { T::one() };
                } else {
                    // "3i": the leading number was the coefficient
                    imag = if index != 0 { real } else { T::one() };
                    real = T::zero();
                }
                break;
            }
            _ => {}
        }
    }

    (real, imag)
}

/// Render real and imaginary parts as a literal accepted by [`parse_complex`].
pub fn render_complex<T: Field>(real: T, imag: T) -> String {
    let zero = T::zero();
    let mut text = String::new();

    if real == zero && imag == zero {
        // also covers a negative zero real part
        text.push_str(&zero.render());
    } else if real != zero {
        text.push_str(&real.render());
    }

    if imag != zero {
        if !text.is_empty() && imag > zero {
            text.push('+');
        } else if imag < zero {
            text.push('-');
        }

        let magnitude = imag.abs();
        if magnitude != T::one() {
            text.push_str(&magnitude.render());
        }
        text.push(IMAGINARY_UNIT as char);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_literals() {
        assert_eq!(parse_complex::<i64>("3+14i"), (3, 14));
        assert_eq!(parse_complex::<i64>("0"), (0, 0));
        assert_eq!(parse_complex::<i64>("-1"), (-1, 0));
        assert_eq!(parse_complex::<i64>("2-17i"), (2, -17));
        assert_eq!(parse_complex::<i64>("2 - 17i"), (2, -17));
        assert_eq!(parse_complex::<i64>("-34 - 17i"), (-34, -17));
        assert_eq!(parse_complex::<i64>("3-i"), (3, -1));
        assert_eq!(parse_complex::<i64>("i"), (0, 1));
        assert_eq!(parse_complex::<i64>("-i"), (0, -1));
        assert_eq!(parse_complex::<i64>("+i"), (0, 1));
        assert_eq!(parse_complex::<i64>("47"), (47, 0));
        assert_eq!(parse_complex::<i64>("3i"), (0, 3));
        assert_eq!(parse_complex::<i64>("-3i"), (0, -3));
    }

    #[test]
    fn test_parse_decimal_literals() {
        assert_eq!(parse_complex::<f64>("3 - 14i"), (3.0, -14.0));
        assert_eq!(parse_complex::<f64>("-3.2 + 14.7i"), (-3.2, 14.7));
        assert_eq!(parse_complex::<f64>("0.53-6i"), (0.53, -6.0));
        assert_eq!(parse_complex::<f64>("-19i"), (0.0, -19.0));
    }

    #[test]
    fn test_parse_is_lenient() {
        assert_eq!(parse_complex::<i64>(""), (0, 0));
        assert_eq!(parse_complex::<i64>("abc"), (0, 0));
        assert_eq!(parse_complex::<f64>("x+y"), (0.0, 0.0));
    }

    #[test]
    fn test_render() {
        assert_eq!(render_complex(3i64, 14), "3+14i");
        assert_eq!(render_complex(0i64, 0), "0");
        assert_eq!(render_complex(-1i64, 0), "-1");
        assert_eq!(render_complex(-34i64, -17), "-34-17i");
        assert_eq!(render_complex(3i64, -1), "3-i");
        assert_eq!(render_complex(0i64, 1), "i");
        assert_eq!(render_complex(0i64, -1), "-i");
        assert_eq!(render_complex(0i64, 3), "3i");
        assert_eq!(render_complex(3.0f64, -4.5), "3-4.5i");
        assert_eq!(render_complex(-0.0f64, 0.0), "0");
        assert_eq!(render_complex(-0.0f64, -0.0), "0");
        assert_eq!(render_complex(-0.0f64, 2.0), "2i");
    }
}
