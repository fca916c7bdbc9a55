//! Scale conversions.
//!
//! Formulas are taken from RapidTables. Ratios are applied as
//! multiply-then-divide (`x * 5 / 9`) so that e.g. 68 °F lands on exactly
//! 20 °C instead of picking up the error of a rounded `0.5555...` factor.
//! When the intermediate product would overflow, the division goes first.
use serde_json::Value;
use tracing::trace;

use super::casting;
use super::error::Result;
use super::scale::Scale;
use super::Temperature;

const KELVIN_OFFSET: f64 = 273.15;
const RANKINE_OFFSET: f64 = 459.67;
const FAHRENHEIT_FREEZING: f64 = 32.0;
const RANKINE_FREEZING: f64 = 491.67;

#[inline]
fn scale_by(x: f64, numerator: f64, denominator: f64) -> f64 {
    let product = x * numerator;
    if product.is_finite() {
        product / denominator
    } else {
        x / denominator * numerator
    }
}

#[inline]
fn five_ninths(x: f64) -> f64 {
    scale_by(x, 5.0, 9.0)
}

#[inline]
fn nine_fifths(x: f64) -> f64 {
    scale_by(x, 9.0, 5.0)
}

/// Converts a magnitude between two scales.
pub fn convert_degrees(degrees: f64, from: Scale, to: Scale) -> f64 {
    use Scale::*;

    match (from, to) {
        (Fahrenheit, Celsius) => five_ninths(degrees - FAHRENHEIT_FREEZING),
        (Kelvin, Celsius) => degrees - KELVIN_OFFSET,
        (Rankine, Celsius) => five_ninths(degrees - RANKINE_FREEZING),

        (Celsius, Fahrenheit) => nine_fifths(degrees) + FAHRENHEIT_FREEZING,
        (Kelvin, Fahrenheit) => nine_fifths(degrees) - RANKINE_OFFSET,
        (Rankine, Fahrenheit) => degrees - RANKINE_OFFSET,

        (Celsius, Kelvin) => degrees + KELVIN_OFFSET,
        (Fahrenheit, Kelvin) => five_ninths(degrees + RANKINE_OFFSET),
        (Rankine, Kelvin) => five_ninths(degrees),

        (Celsius, Rankine) => nine_fifths(degrees + KELVIN_OFFSET),
        (Fahrenheit, Rankine) => degrees + RANKINE_OFFSET,
        (Kelvin, Rankine) => nine_fifths(degrees),

        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) | (Rankine, Rankine) => degrees,
    }
}

impl Temperature {
    /// Converts to `scale`.
    ///
    /// Returns `self` when already in `scale`; otherwise the converted value
    /// is built once and cached, so repeated calls return the same instance.
    pub fn convert(&self, scale: Scale) -> &Temperature {
        if self.scale == scale {
            return self;
        }

        self.conversions.get_or_convert(scale, || {
            let degrees = convert_degrees(self.degrees, self.scale, scale);
            trace!(from = %self.scale, to = %scale, degrees, "filled conversion cache");
            Temperature::saturating(degrees, scale)
        })
    }

    /// Converts to the scale named by `scale`.
    ///
    /// The identifier is coerced and validated exactly as in construction.
    ///
    /// ```
    /// use basic_temperature::{temperature, Scale};
    ///
    /// let t = temperature![60, "fahrenheit"].unwrap();
    /// assert_eq!(t.to_scale("celsius").unwrap().to_string(), "15.56 °C");
    /// assert_eq!(t.to_scale(Scale::Kelvin).unwrap().to_string(), "288.71 K");
    /// assert!(t.to_scale("reaumur").is_err());
    /// ```
    pub fn to_scale(&self, scale: impl Into<Value>) -> Result<&Temperature> {
        let scale = casting::cast_scale(&scale.into())?;
        Ok(self.convert(scale))
    }

    pub fn to_celsius(&self) -> &Temperature {
        self.convert(Scale::Celsius)
    }

    pub fn to_fahrenheit(&self) -> &Temperature {
        self.convert(Scale::Fahrenheit)
    }

    pub fn to_kelvin(&self) -> &Temperature {
        self.convert(Scale::Kelvin)
    }

    pub fn to_rankine(&self) -> &Temperature {
        self.convert(Scale::Rankine)
    }
}
