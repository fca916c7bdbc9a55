//! Value object for basic temperature operations: conversions between
//! Celsius, Fahrenheit, Kelvin and Rankine, arithmetic, and comparison with
//! two-decimal precision.
//!
//! ```
//! use basic_temperature::{temperature, Scale};
//!
//! let t = temperature![20, "celsius"].unwrap();
//! assert_eq!(t.to_kelvin().to_string(), "293.15 K");
//! assert_eq!((10i32 + t.clone()).to_string(), "30 °C");
//! assert!(t < *temperature![degrees: 70, scale: Scale::Fahrenheit].unwrap().to_celsius());
//! ```

pub mod temperature;

#[cfg(feature = "python")]
pub mod bindings;

pub use temperature::{
    Arguments, Operand, Result, Scale, Temperature, TemperatureError, ROUNDING_DIGITS,
};

/// The crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shorthand for [`Temperature::from_args`].
///
/// Accepts the positional form `temperature![degrees, scale]`, the keyword
/// form `temperature![degrees: d, scale: s]`, or no arguments at all (which
/// fails like the constructor does).
#[macro_export]
macro_rules! temperature {
    () => {
        $crate::Temperature::from_args($crate::Arguments::new())
    };
    (degrees: $degrees:expr, scale: $scale:expr $(,)?) => {
        $crate::Temperature::from_args($crate::Arguments::keywords($degrees, $scale))
    };
    ($degrees:expr, $scale:expr $(,)?) => {
        $crate::Temperature::from_args($crate::Arguments::positional($degrees, $scale))
    };
}
