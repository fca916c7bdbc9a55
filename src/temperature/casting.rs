//! Coercion of loosely typed arguments into degrees, scales and operands.
//!
//! Constructor and setter arguments arrive as [`serde_json::Value`] so that
//! numbers, numeric strings and scale identifiers can be mixed freely, the
//! same way they arrive from a deserializer or a foreign-language binding.
use serde_json::Value;
use tracing::debug;

use super::error::{Result, TemperatureError};
use super::scale::Scale;
use super::Temperature;

/// Renders a value the way it is quoted in error messages.
/// Strings appear without JSON quotes and `null` renders as an empty string.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Coerces a value into a finite `f64`.
///
/// Numbers are taken as-is and strings go through [`parse_numeric`]. Anything
/// else, including a non-finite result, is `InvalidDegrees`.
pub(crate) fn cast_degrees(value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric(s),
        _ => None,
    };

    match parsed {
        Some(degrees) if degrees.is_finite() => Ok(degrees),
        _ => {
            debug!(value = %value, "rejected degrees");
            Err(TemperatureError::InvalidDegrees)
        }
    }
}

/// Parses a numeric literal after trimming surrounding whitespace.
///
/// Accepts decimal and exponent notation, `_` separators between digits
/// (`1_000`), and signed `0x`, `0o` and `0b` integer literals.
fn parse_numeric(s: &str) -> Option<f64> {
    let s = s.trim();
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if unsigned.starts_with(['+', '-']) {
        return None;
    }

    let radix = match unsigned.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => 10,
    };

    let magnitude = if radix == 10 {
        without_separators(unsigned, radix)?.parse::<f64>().ok()?
    } else {
        let digits = without_separators(&unsigned[2..], radix)?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        u128::from_str_radix(&digits, radix).ok()? as f64
    };

    Some(if negative { -magnitude } else { magnitude })
}

// An `_` is only valid with a digit on each side.
fn without_separators(s: &str, radix: u32) -> Option<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let before = i > 0 && chars[i - 1].is_digit(radix);
        let after = chars.get(i + 1).is_some_and(|next| next.is_digit(radix));
        if !(before && after) {
            return None;
        }
    }
    Some(out)
}

/// Stringifies a scale identifier and matches it against [`Scale::ALL`].
pub(crate) fn cast_scale(value: &Value) -> Result<Scale> {
    display_value(value).parse::<Scale>().inspect_err(|_| {
        debug!(value = %value, "rejected scale");
    })
}

/// The right-hand side of an arithmetic or comparison operation.
///
/// Statically typed callers get `Numeric` or `Temperature` through the `From`
/// impls. `Other` carries anything else, which arithmetic rejects and
/// comparison treats as not comparable.
#[derive(Debug, Clone)]
pub enum Operand<'a> {
    Numeric(f64),
    Temperature(&'a Temperature),
    Other(Value),
}

impl Operand<'_> {
    /// The operand as it is quoted in error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            Operand::Numeric(n) => n.to_string(),
            Operand::Temperature(t) => t.to_string(),
            Operand::Other(v) => display_value(v),
        }
    }
}

impl<'a> From<&'a Temperature> for Operand<'a> {
    fn from(temperature: &'a Temperature) -> Self {
        Operand::Temperature(temperature)
    }
}

impl From<Value> for Operand<'_> {
    fn from(value: Value) -> Self {
        match value.as_f64() {
            Some(n) => Operand::Numeric(n),
            None => Operand::Other(value),
        }
    }
}

impl From<&str> for Operand<'_> {
    fn from(s: &str) -> Self {
        Operand::Other(Value::String(s.to_string()))
    }
}

impl From<String> for Operand<'_> {
    fn from(s: String) -> Self {
        Operand::Other(Value::String(s))
    }
}

macro_rules! impl_numeric_operand {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand<'_> {
                fn from(n: $t) -> Self {
                    Operand::Numeric(n as f64)
                }
            }
        )*
    };
}

impl_numeric_operand!(f64, f32, i32, i64, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(0), 0.0)]
    #[case(json!(-40), -40.0)]
    #[case(json!(36.6), 36.6)]
    #[case(json!("0"), 0.0)]
    #[case(json!(" 1.5 "), 1.5)]
    #[case(json!("-273.15"), -273.15)]
    #[case(json!("1_000"), 1000.0)]
    #[case(json!("1_000.25"), 1000.25)]
    #[case(json!("1e3"), 1000.0)]
    #[case(json!("0x1A"), 26.0)]
    #[case(json!("-0x1a"), -26.0)]
    #[case(json!("0o17"), 15.0)]
    #[case(json!("0b101"), 5.0)]
    #[case(json!("+42"), 42.0)]
    fn test_cast_degrees_valid(#[case] input: Value, #[case] expected: f64) {
        assert_eq!(cast_degrees(&input).unwrap(), expected);
    }

    #[rstest]
    #[case(json!("abc"))]
    #[case(json!(""))]
    #[case(json!("NaN"))]
    #[case(json!("inf"))]
    #[case(json!("_1"))]
    #[case(json!("1_"))]
    #[case(json!("1__0"))]
    #[case(json!("0x"))]
    #[case(json!("0x1G"))]
    #[case(json!("0x+1"))]
    #[case(json!("+-1"))]
    #[case(json!("0b102"))]
    #[case(json!(null))]
    #[case(json!(true))]
    #[case(json!([1]))]
    #[case(json!({"degrees": 1}))]
    fn test_cast_degrees_invalid(#[case] input: Value) {
        assert_eq!(cast_degrees(&input), Err(TemperatureError::InvalidDegrees));
    }

    #[test]
    fn test_cast_scale() {
        assert_eq!(cast_scale(&json!("kelvin")).unwrap(), Scale::Kelvin);
        assert_eq!(cast_scale(&Value::from(Scale::Rankine)).unwrap(), Scale::Rankine);
        assert_eq!(
            cast_scale(&json!(1)),
            Err(TemperatureError::InvalidScale { given: "1".to_string() })
        );
        assert_eq!(
            cast_scale(&json!(null)),
            Err(TemperatureError::InvalidScale { given: String::new() })
        );
    }

    #[test]
    fn test_operand_from_value() {
        assert!(matches!(Operand::from(json!(10)), Operand::Numeric(n) if n == 10.0));
        assert!(matches!(Operand::from(json!("10")), Operand::Other(_)));
        assert!(matches!(Operand::from(json!(null)), Operand::Other(_)));
        assert_eq!(Operand::from("abc").describe(), "abc");
        assert_eq!(Operand::from(2.5).describe(), "2.5");
    }
}
