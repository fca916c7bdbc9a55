//! Constructor arguments in either positional or keyword form.
use serde_json::{Map, Value};
use tracing::debug;

use super::error::{Result, TemperatureError};

pub const DEGREES: &str = "degrees";
pub const SCALE: &str = "scale";

/// The arguments of a temperature constructor call.
///
/// Mirrors a call site that may pass ordered values (`0, "celsius"`) or
/// named ones (`degrees: 0, scale: "celsius"`). Exactly one of the two forms
/// must be populated; [`Arguments::resolve`] enforces that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    positional: Vec<Value>,
    keywords: Map<String, Value>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// `degrees, scale` as ordered values.
    pub fn positional(degrees: impl Into<Value>, scale: impl Into<Value>) -> Self {
        Self::new().arg(degrees).arg(scale)
    }

    /// `degrees: .., scale: ..` as named values.
    pub fn keywords(degrees: impl Into<Value>, scale: impl Into<Value>) -> Self {
        Self::new().kwarg(DEGREES, degrees).kwarg(SCALE, scale)
    }

    /// Appends an ordered value.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Sets a named value. Names other than `degrees` and `scale` are ignored.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.insert(name.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keywords.is_empty()
    }

    /// Checks that exactly one form is populated and extracts `(degrees, scale)`.
    ///
    /// Missing values come back as `Value::Null` and fail later validation.
    /// Extra ordered values beyond the second are ignored.
    pub(crate) fn resolve(self) -> Result<(Value, Value)> {
        let Self { positional, mut keywords } = self;

        match (positional.is_empty(), keywords.is_empty()) {
            (false, true) => {
                let mut values = positional.into_iter();
                let degrees = values.next().unwrap_or(Value::Null);
                let scale = values.next().unwrap_or(Value::Null);
                Ok((degrees, scale))
            }
            (true, false) => {
                let degrees = keywords.remove(DEGREES).unwrap_or(Value::Null);
                let scale = keywords.remove(SCALE).unwrap_or(Value::Null);
                Ok((degrees, scale))
            }
            (no_positional, _) => {
                debug!(mixed = !no_positional, "rejected constructor arguments");
                Err(TemperatureError::InitializationArguments)
            }
        }
    }
}

impl From<Vec<Value>> for Arguments {
    fn from(positional: Vec<Value>) -> Self {
        Self { positional, keywords: Map::new() }
    }
}

impl From<Map<String, Value>> for Arguments {
    fn from(keywords: Map<String, Value>) -> Self {
        Self { positional: Vec::new(), keywords }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_positional_form() {
        let (degrees, scale) = Arguments::positional(0, "celsius").resolve().unwrap();
        assert_eq!(degrees, json!(0));
        assert_eq!(scale, json!("celsius"));
    }

    #[test]
    fn test_keyword_form() {
        let args = Arguments::new().kwarg(SCALE, "kelvin").kwarg(DEGREES, 10.5);
        let (degrees, scale) = args.resolve().unwrap();
        assert_eq!(degrees, json!(10.5));
        assert_eq!(scale, json!("kelvin"));
    }

    #[test]
    fn test_neither_form_is_rejected() {
        let args = Arguments::new();
        assert!(args.is_empty());
        assert_eq!(args.resolve(), Err(TemperatureError::InitializationArguments));
    }

    #[test]
    fn test_mixed_forms_are_rejected() {
        let args = Arguments::positional(0, "celsius").kwarg(DEGREES, 0).kwarg(SCALE, "celsius");
        assert_eq!(args.resolve(), Err(TemperatureError::InitializationArguments));
    }

    #[test]
    fn test_missing_values_resolve_to_null() {
        let (degrees, scale) = Arguments::new().arg(1).resolve().unwrap();
        assert_eq!(degrees, json!(1));
        assert_eq!(scale, Value::Null);

        let (degrees, scale) = Arguments::new().kwarg("unit", "celsius").resolve().unwrap();
        assert_eq!(degrees, Value::Null);
        assert_eq!(scale, Value::Null);
    }

    #[test]
    fn test_extra_positional_values_are_ignored() {
        let (degrees, scale) = Arguments::positional(5, "rankine").arg("ignored").resolve().unwrap();
        assert_eq!(degrees, json!(5));
        assert_eq!(scale, json!("rankine"));
    }
}
