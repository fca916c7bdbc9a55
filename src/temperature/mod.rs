//! The `Temperature` value object.
//!
//! A temperature is a finite number of degrees tagged with a [`Scale`]. Both
//! fields are fixed at construction; setters and arithmetic return new
//! values. Conversions are cached per instance, see [`Temperature::convert`].
pub mod arguments;
pub mod casting;
pub mod compare;
pub mod conversion;
pub mod display;
pub mod error;
mod memo;
pub mod ops;
pub mod rounding;
pub mod scale;
mod serde_impl;

pub use arguments::Arguments;
pub use casting::Operand;
pub use error::{Result, TemperatureError};
pub use rounding::ROUNDING_DIGITS;
pub use scale::Scale;

use serde_json::Value;
use tracing::debug;

use memo::Conversions;
use rounding::round_degrees;

const WATER_FREEZING_CELSIUS: f64 = 0.0;
const WATER_BOILING_CELSIUS: f64 = 100.0;

/// An immutable temperature.
///
/// ```
/// use basic_temperature::{temperature, Arguments, Scale, Temperature};
///
/// let a = temperature![20, "celsius"].unwrap();
/// let b = Temperature::from_args(Arguments::keywords(293.15, "kelvin")).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_fahrenheit().to_string(), "68 °F");
/// assert_eq!((&a + &b).scale(), Scale::Kelvin);
/// ```
pub struct Temperature {
    degrees: f64,
    scale: Scale,
    conversions: Conversions,
}

impl Temperature {
    /// Builds a temperature from positional or keyword arguments.
    ///
    /// Fails with `InitializationArguments` unless exactly one form is given,
    /// then with `InvalidDegrees` or `InvalidScale` if a value does not coerce.
    pub fn from_args(args: Arguments) -> Result<Self> {
        let (degrees, scale) = args.resolve()?;
        Self::from_values(&degrees, &scale)
    }

    /// Builds a temperature from an already typed magnitude and scale.
    /// Fails with `InvalidDegrees` if `degrees` is NaN or infinite.
    pub fn new(degrees: f64, scale: Scale) -> Result<Self> {
        if !degrees.is_finite() {
            debug!(degrees, "rejected degrees");
            return Err(TemperatureError::InvalidDegrees);
        }
        Ok(Self::from_parts(degrees, scale))
    }

    pub fn celsius(degrees: f64) -> Result<Self> {
        Self::new(degrees, Scale::Celsius)
    }

    pub fn fahrenheit(degrees: f64) -> Result<Self> {
        Self::new(degrees, Scale::Fahrenheit)
    }

    pub fn kelvin(degrees: f64) -> Result<Self> {
        Self::new(degrees, Scale::Kelvin)
    }

    pub fn rankine(degrees: f64) -> Result<Self> {
        Self::new(degrees, Scale::Rankine)
    }

    fn from_values(degrees: &Value, scale: &Value) -> Result<Self> {
        let degrees = casting::cast_degrees(degrees)?;
        let scale = casting::cast_scale(scale)?;
        Self::new(degrees, scale)
    }

    /// Builds a computed result, clamping an `f64` overflow to the largest
    /// finite magnitude so the finiteness invariant survives arithmetic.
    pub(crate) fn saturating(degrees: f64, scale: Scale) -> Self {
        Self::from_parts(degrees.clamp(f64::MIN, f64::MAX), scale)
    }

    #[inline(always)]
    fn from_parts(degrees: f64, scale: Scale) -> Self {
        Self { degrees, scale, conversions: Conversions::default() }
    }

    #[inline(always)]
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    #[inline(always)]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Returns a new temperature with `degrees` in the current scale.
    pub fn set_degrees(&self, degrees: impl Into<Value>) -> Result<Self> {
        let degrees = casting::cast_degrees(&degrees.into())?;
        Self::new(degrees, self.scale)
    }

    /// Returns a new temperature in `scale`, carrying the converted degrees.
    ///
    /// Unlike [`Temperature::to_scale`] this always builds a fresh value,
    /// even when `scale` is the current one.
    pub fn set_scale(&self, scale: impl Into<Value>) -> Result<Self> {
        let scale = casting::cast_scale(&scale.into())?;
        Ok(Self::from_parts(self.convert(scale).degrees, scale))
    }

    /// `true` at or above the boiling point of water (100 °C).
    pub fn boils_water(&self) -> bool {
        round_degrees(self.to_celsius().degrees) >= WATER_BOILING_CELSIUS
    }

    /// `true` at or below the freezing point of water (0 °C).
    pub fn freezes_water(&self) -> bool {
        round_degrees(self.to_celsius().degrees) <= WATER_FREEZING_CELSIUS
    }
}

impl Clone for Temperature {
    fn clone(&self) -> Self {
        Self::from_parts(self.degrees, self.scale)
    }
}
