//! Loose numeric checks and conversions.
//!
//! Accepted text is plain decimal notation only: an optional sign, optional
//! integer part, optional fraction, at least one digit. No whitespace,
//! exponents, hex/octal/binary prefixes or trailing decimal point.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[+-]?([0-9]*\.)?[0-9]+\z").expect("static pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("cannot convert to {target}")]
    InvalidArgument { target: &'static str },
}

/// Anything that might be a number.
///
/// `From` impls cover the usual Rust types, so call sites read
/// `is_number(12)`, `is_number("1.5")` or `is_number(&[3])`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberInput<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
    /// Booleans, absent values, collections: never a number.
    Other,
}

macro_rules! impl_from_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for NumberInput<'_> {
                #[inline]
                fn from(v: $t) -> Self {
                    NumberInput::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Wider integers stay exact while they fit in `i64`.
macro_rules! impl_from_wide_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for NumberInput<'_> {
                #[inline]
                fn from(v: $t) -> Self {
                    i64::try_from(v).map_or(NumberInput::Float(v as f64), NumberInput::Int)
                }
            }
        )*
    };
}

impl_from_wide_int!(i128, isize, u64, u128, usize);

impl From<f32> for NumberInput<'_> {
    #[inline]
    fn from(v: f32) -> Self {
        NumberInput::Float(f64::from(v))
    }
}

impl From<f64> for NumberInput<'_> {
    #[inline]
    fn from(v: f64) -> Self {
        NumberInput::Float(v)
    }
}

impl<'a> From<&'a str> for NumberInput<'a> {
    #[inline]
    fn from(v: &'a str) -> Self {
        NumberInput::Text(v)
    }
}

impl<'a> From<&'a String> for NumberInput<'a> {
    #[inline]
    fn from(v: &'a String) -> Self {
        NumberInput::Text(v.as_str())
    }
}

impl From<bool> for NumberInput<'_> {
    #[inline]
    fn from(_: bool) -> Self {
        NumberInput::Other
    }
}

impl From<()> for NumberInput<'_> {
    #[inline]
    fn from(_: ()) -> Self {
        NumberInput::Other
    }
}

impl<'a, T> From<Option<T>> for NumberInput<'a>
where
    T: Into<NumberInput<'a>>,
{
    #[inline]
    fn from(v: Option<T>) -> Self {
        v.map_or(NumberInput::Other, Into::into)
    }
}

impl<T> From<&[T]> for NumberInput<'_> {
    #[inline]
    fn from(_: &[T]) -> Self {
        NumberInput::Other
    }
}

impl<T, const N: usize> From<&[T; N]> for NumberInput<'_> {
    #[inline]
    fn from(_: &[T; N]) -> Self {
        NumberInput::Other
    }
}

impl<T> From<&Vec<T>> for NumberInput<'_> {
    #[inline]
    fn from(_: &Vec<T>) -> Self {
        NumberInput::Other
    }
}

/// Does `text` match the accepted decimal grammar?
#[inline]
pub fn is_numeric_str(text: &str) -> bool {
    NUMBER_PATTERN.is_match(text)
}

/// Integers and floats are always numbers; text must match the decimal
/// grammar; everything else is not a number.
pub fn is_number<'a>(value: impl Into<NumberInput<'a>>) -> bool {
    match value.into() {
        NumberInput::Int(_) | NumberInput::Float(_) => true,
        NumberInput::Text(text) => is_numeric_str(text),
        NumberInput::Other => false,
    }
}

pub fn to_float<'a>(value: impl Into<NumberInput<'a>>) -> Result<f64, NumberError> {
    const INVALID: NumberError = NumberError::InvalidArgument { target: "float" };
    match value.into() {
        NumberInput::Int(i) => Ok(i as f64),
        NumberInput::Float(f) => Ok(f),
        NumberInput::Text(text) if is_numeric_str(text) => text.parse().map_err(|_| INVALID),
        NumberInput::Text(_) | NumberInput::Other => Err(INVALID),
    }
}

/// Truncates toward zero. Values outside `i64` saturate, NaN becomes 0.
pub fn to_int<'a>(value: impl Into<NumberInput<'a>>) -> Result<i64, NumberError> {
    const INVALID: NumberError = NumberError::InvalidArgument { target: "integer" };
    match value.into() {
        NumberInput::Int(i) => Ok(i),
        NumberInput::Float(f) => Ok(f as i64),
        NumberInput::Text(text) if is_numeric_str(text) => match text.parse::<i64>() {
            Ok(i) => Ok(i),
            // fraction present or out of range
            Err(_) => text.parse::<f64>().map(|f| f as i64).map_err(|_| INVALID),
        },
        NumberInput::Text(_) | NumberInput::Other => Err(INVALID),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_number_table() {
        assert!(is_number("1.25"));
        assert!(!is_number("\0\0 I have null bytes but who cares!"));
        assert!(!is_number("🧟 Zombie 🧟 Zombie"));
        assert!(is_number(12345));
        assert!(is_number(5.728));
        assert!(is_number("0"));
        assert!(is_number("-1.5"));
        assert!(!is_number("-1."));
        assert!(is_number("+1.5"));
        assert!(!is_number("5.72 "));
        assert!(!is_number(" 5.72"));
        assert!(!is_number("5.728f"));
        assert!(!is_number("1.07e58"));
        assert!(!is_number(&[3]));
        assert!(!is_number(None::<i64>));
        assert!(!is_number(true));
    }

    #[test]
    fn test_is_number_grammar_edges() {
        assert!(is_number(".5"));
        assert!(is_number("-.5"));
        assert!(is_number("007"));
        assert!(!is_number(""));
        assert!(!is_number("+"));
        assert!(!is_number("."));
        assert!(!is_number("1.2.3"));
        assert!(!is_number("0x1F"));
        assert!(!is_number("5\n"));
        assert!(!is_number("١٢")); // Arabic-Indic digits
        assert!(is_number(Some("42")));
        assert!(!is_number(&Vec::<u8>::new()));
        assert!(!is_number(()));
    }

    #[test]
    fn test_wide_integers() {
        let items = vec!["a", "b", "c"];
        assert!(is_number(items.len()));
        assert_eq!(to_int(items.len()), Ok(3));
        assert_eq!(to_int(-5isize), Ok(-5));
        assert_eq!(NumberInput::from(42u64), NumberInput::Int(42));
        assert_eq!(NumberInput::from(u64::MAX), NumberInput::Float(u64::MAX as f64));
        assert_eq!(NumberInput::from(i128::MIN), NumberInput::Float(i128::MIN as f64));
        assert!(is_number(u128::MAX));
        assert_eq!(to_int(u64::MAX), Ok(i64::MAX));
        assert_eq!(to_float(1u128 << 70), Ok(2f64.powi(70)));
    }

    #[test]
    fn test_to_int() {
        assert_eq!(to_int("1.25"), Ok(1));
        assert_eq!(to_int("6"), Ok(6));
        assert_eq!(to_int(6), Ok(6));
        assert_eq!(to_int(7.992), Ok(7));
        assert_eq!(to_int("7.992"), Ok(7));
        assert_eq!(to_int("-7.992"), Ok(-7));
        assert_eq!(to_int("-0.5"), Ok(0));
        assert_eq!(to_int("+12"), Ok(12));
        assert_eq!(to_int("99999999999999999999"), Ok(i64::MAX));
        assert_eq!(to_int(f64::NAN), Ok(0));
    }

    #[test]
    fn test_to_float() {
        assert_eq!(to_float("1.25"), Ok(1.25));
        assert_eq!(to_float("+5.6767"), Ok(5.6767));
        assert_eq!(to_float("-8.999"), Ok(-8.999));
        assert_eq!(to_float("6"), Ok(6.0));
        assert_eq!(to_float(6), Ok(6.0));
        assert_eq!(to_float(7.992), Ok(7.992));
        assert_eq!(to_float("7.992"), Ok(7.992));
        assert_eq!(to_float("1234.98473"), Ok(1234.98473));
    }

    #[test]
    fn test_invalid_argument() {
        let empty: &[i32] = &[];
        assert_eq!(
            to_int(empty),
            Err(NumberError::InvalidArgument { target: "integer" })
        );
        assert_eq!(
            to_float(empty),
            Err(NumberError::InvalidArgument { target: "float" })
        );
        assert!(to_int("1e5").is_err());
        assert!(to_float(false).is_err());
        assert_eq!(
            to_int("abc").unwrap_err().to_string(),
            "cannot convert to integer"
        );
    }
}
