//! Serde support.
//!
//! Serialized as `{"degrees": f64, "scale": "<name>"}`. Deserialization
//! accepts the keyword form (an object) or the positional form (an array)
//! and routes both through [`Temperature::from_args`], so a payload is
//! accepted exactly when the equivalent constructor call is.
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

use super::arguments::{Arguments, DEGREES, SCALE};
use super::error::{Result, TemperatureError};
use super::Temperature;

impl Serialize for Temperature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Temperature", 2)?;
        state.serialize_field(DEGREES, &self.degrees)?;
        state.serialize_field(SCALE, &self.scale)?;
        state.end()
    }
}

impl TryFrom<Value> for Temperature {
    type Error = TemperatureError;

    fn try_from(value: Value) -> Result<Self> {
        let args = match value {
            Value::Array(positional) => Arguments::from(positional),
            Value::Object(keywords) => Arguments::from(keywords),
            _ => return Err(TemperatureError::InitializationArguments),
        };
        Temperature::from_args(args)
    }
}

impl<'de> Deserialize<'de> for Temperature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Temperature::try_from(value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temperature::Scale;
    use serde_json::json;

    #[test]
    fn test_serialize() {
        let t = Temperature::kelvin(293.15).unwrap();
        assert_eq!(serde_json::to_value(&t).unwrap(), json!({"degrees": 293.15, "scale": "kelvin"}));
    }

    #[test]
    fn test_deserialize_both_forms() {
        let named: Temperature = serde_json::from_str(r#"{"degrees": 20, "scale": "celsius"}"#).unwrap();
        let positional: Temperature = serde_json::from_str(r#"["68", "fahrenheit"]"#).unwrap();
        assert_eq!(named.scale(), Scale::Celsius);
        assert_eq!(positional.degrees(), 68.0);
        assert_eq!(named, positional);
    }

    #[test]
    fn test_deserialize_reports_construction_errors() {
        let err = serde_json::from_str::<Temperature>(r#"{"degrees": 20, "scale": "abc"}"#).unwrap_err();
        assert!(err.to_string().contains("valid values are 'celsius', 'fahrenheit', 'kelvin', 'rankine'"));

        let err = serde_json::from_str::<Temperature>(r#"["abc", "celsius"]"#).unwrap_err();
        assert!(err.to_string().contains("degree is NOT a numeric value."));
    }

    #[test]
    fn test_empty_or_foreign_shapes_are_initialization_errors() {
        for value in [json!([]), json!({}), json!(20), json!("20 °C"), json!(null)] {
            assert_eq!(Temperature::try_from(value), Err(TemperatureError::InitializationArguments));
        }
    }
}
