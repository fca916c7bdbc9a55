//! The closed set of supported temperature scales.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::TemperatureError;

/// A temperature scale.
///
/// The declaration order is the canonical order used in error messages and
/// as the index into a temperature's conversion cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

impl Scale {
    /// Every supported scale, in canonical order.
    pub const ALL: [Scale; 4] = [Scale::Celsius, Scale::Fahrenheit, Scale::Kelvin, Scale::Rankine];

    /// The lowercase identifier of the scale, e.g. `"kelvin"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Scale::Celsius => "celsius",
            Scale::Fahrenheit => "fahrenheit",
            Scale::Kelvin => "kelvin",
            Scale::Rankine => "rankine",
        }
    }

    /// The unit symbol used when rendering a temperature.
    /// Kelvin is an absolute unit, so it has no degree sign.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
            Scale::Kelvin => "K",
            Scale::Rankine => "°R",
        }
    }

    #[inline(always)]
    pub(crate) const fn index(&self) -> usize {
        *self as usize
    }

    /// Renders the valid identifiers as `'celsius', 'fahrenheit', ...`.
    pub(crate) fn quoted_list() -> String {
        Self::ALL.iter().map(|s| format!("'{}'", s.as_str())).collect::<Vec<_>>().join(", ")
    }
}

impl FromStr for Scale {
    type Err = TemperatureError;

    /// Matches the identifier exactly; `"Celsius"` is not a valid scale.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scale| scale.as_str() == s)
            .ok_or_else(|| TemperatureError::InvalidScale { given: s.to_string() })
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Scale> for serde_json::Value {
    fn from(scale: Scale) -> Self {
        serde_json::Value::String(scale.as_str().to_string())
    }
}
