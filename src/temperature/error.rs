//! Defines the error types for the temperature module.
use super::scale::Scale;
use thiserror::Error;

/// Every way building or combining temperatures can fail.
///
/// All variants are input-validation failures; none of them is transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemperatureError {
    /// Both the positional and the keyword form were supplied, or neither.
    #[error("Positional and keyword arguments are mixed or neither positional nor keyword arguments are passed.")]
    InitializationArguments,
    /// Degrees could not be coerced to a finite number.
    #[error("degree is NOT a numeric value.")]
    InvalidDegrees,
    /// The scale identifier is not one of [`Scale::ALL`].
    #[error("scale has invalid value, valid values are {valid}.", valid = Scale::quoted_list())]
    InvalidScale { given: String },
    /// An arithmetic operand is neither a number nor a temperature.
    #[error("`{0}` is neither Numeric nor Temperature.")]
    InvalidNumericOrTemperature(String),
    /// A coercion argument is not a number.
    #[error("`{0}` is not a Numeric.")]
    InvalidNumeric(String),
}

pub type Result<T> = std::result::Result<T, TemperatureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            TemperatureError::InitializationArguments.to_string(),
            "Positional and keyword arguments are mixed or neither positional nor keyword arguments are passed."
        );
        assert_eq!(TemperatureError::InvalidDegrees.to_string(), "degree is NOT a numeric value.");
        assert_eq!(
            TemperatureError::InvalidScale { given: "abc".into() }.to_string(),
            "scale has invalid value, valid values are 'celsius', 'fahrenheit', 'kelvin', 'rankine'."
        );
        assert_eq!(
            TemperatureError::InvalidNumericOrTemperature("abc".into()).to_string(),
            "`abc` is neither Numeric nor Temperature."
        );
        assert_eq!(TemperatureError::InvalidNumeric("abc".into()).to_string(), "`abc` is not a Numeric.");
    }
}
