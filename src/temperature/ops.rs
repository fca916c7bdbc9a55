//! Arithmetic on temperatures.
//!
//! Adding a number keeps the receiver's scale. Adding a temperature first
//! converts the receiver into the other operand's scale, and the result keeps
//! that scale. Subtraction is addition of the negated operand.
use std::ops::{Add, Neg, Sub};

use super::casting::Operand;
use super::error::{Result, TemperatureError};
use super::Temperature;

impl Temperature {
    /// Adds a number or a temperature.
    ///
    /// Fails with `InvalidNumericOrTemperature` for any other operand and with
    /// `InvalidDegrees` when a numeric operand is NaN or infinite.
    pub fn try_add<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Temperature> {
        match other.into() {
            Operand::Numeric(n) => self.add_numeric(n),
            Operand::Temperature(t) => Ok(self.add_temperature(t)),
            other @ Operand::Other(_) => Err(TemperatureError::InvalidNumericOrTemperature(other.describe())),
        }
    }

    /// Subtracts a number or a temperature; see [`Temperature::try_add`].
    pub fn try_sub<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Temperature> {
        match other.into() {
            Operand::Numeric(n) => self.add_numeric(-n),
            Operand::Temperature(t) => Ok(self.add_temperature(&-t)),
            other @ Operand::Other(_) => Err(TemperatureError::InvalidNumericOrTemperature(other.describe())),
        }
    }

    /// Wraps a bare number as a temperature in this scale and pairs it with
    /// `self`, so that `n + t` can be evaluated as `wrapped + t`.
    ///
    /// ```
    /// use basic_temperature::Temperature;
    ///
    /// let t = Temperature::celsius(20.0).unwrap();
    /// let (wrapped, receiver) = t.coerce(10).unwrap();
    /// assert_eq!((&wrapped - receiver).to_string(), "-10 °C");
    /// assert!(t.coerce("10").is_err());
    /// ```
    pub fn coerce<'a>(&self, numeric: impl Into<Operand<'a>>) -> Result<(Temperature, &Temperature)> {
        match numeric.into() {
            Operand::Numeric(n) => Ok((Temperature::new(n, self.scale)?, self)),
            other => Err(TemperatureError::InvalidNumeric(other.describe())),
        }
    }

    fn add_numeric(&self, n: f64) -> Result<Temperature> {
        if !n.is_finite() {
            return Err(TemperatureError::InvalidDegrees);
        }
        Ok(Temperature::saturating(self.degrees + n, self.scale))
    }

    fn add_temperature(&self, other: &Temperature) -> Temperature {
        Temperature::saturating(self.convert(other.scale).degrees + other.degrees, other.scale)
    }
}

impl Neg for &Temperature {
    type Output = Temperature;

    fn neg(self) -> Temperature {
        Temperature::from_parts(-self.degrees, self.scale)
    }
}

impl Neg for Temperature {
    type Output = Temperature;

    fn neg(self) -> Temperature {
        -&self
    }
}

impl Add<&Temperature> for &Temperature {
    type Output = Temperature;

    fn add(self, rhs: &Temperature) -> Temperature {
        self.add_temperature(rhs)
    }
}

impl Sub<&Temperature> for &Temperature {
    type Output = Temperature;

    fn sub(self, rhs: &Temperature) -> Temperature {
        self.add_temperature(&-rhs)
    }
}

// Owned and mixed forms forward to the by-reference impls.
macro_rules! forward_temperature_binop {
    ($($imp:ident $method:ident),*) => {
        $(
            impl $imp<Temperature> for Temperature {
                type Output = Temperature;

                fn $method(self, rhs: Temperature) -> Temperature {
                    $imp::$method(&self, &rhs)
                }
            }

            impl $imp<&Temperature> for Temperature {
                type Output = Temperature;

                fn $method(self, rhs: &Temperature) -> Temperature {
                    $imp::$method(&self, rhs)
                }
            }

            impl $imp<Temperature> for &Temperature {
                type Output = Temperature;

                fn $method(self, rhs: Temperature) -> Temperature {
                    $imp::$method(self, &rhs)
                }
            }
        )*
    };
}

forward_temperature_binop!(Add add, Sub sub);

/// Unwraps an arithmetic result for the operator traits.
/// Only a NaN or infinite numeric operand can fail here.
fn checked(result: Result<Temperature>) -> Temperature {
    match result {
        Ok(t) => t,
        Err(err) => panic!("invalid temperature arithmetic: {err}"),
    }
}

// `t + n`, `t - n`, `n + t` and `n - t` for the primitive numeric types.
// The reverse forms go through `coerce`, so `10 - t` is `T(10, t.scale) - t`.
macro_rules! impl_numeric_ops {
    ($($t:ty),*) => {
        $(
            impl Add<$t> for &Temperature {
                type Output = Temperature;

                /// # Panics
                /// If the operand is NaN or infinite.
                fn add(self, rhs: $t) -> Temperature {
                    checked(self.try_add(rhs))
                }
            }

            impl Add<$t> for Temperature {
                type Output = Temperature;

                fn add(self, rhs: $t) -> Temperature {
                    &self + rhs
                }
            }

            impl Sub<$t> for &Temperature {
                type Output = Temperature;

                /// # Panics
                /// If the operand is NaN or infinite.
                fn sub(self, rhs: $t) -> Temperature {
                    checked(self.try_sub(rhs))
                }
            }

            impl Sub<$t> for Temperature {
                type Output = Temperature;

                fn sub(self, rhs: $t) -> Temperature {
                    &self - rhs
                }
            }

            impl Add<&Temperature> for $t {
                type Output = Temperature;

                /// # Panics
                /// If `self` is NaN or infinite.
                fn add(self, rhs: &Temperature) -> Temperature {
                    checked(rhs.coerce(self).map(|(wrapped, receiver)| &wrapped + receiver))
                }
            }

            impl Add<Temperature> for $t {
                type Output = Temperature;

                fn add(self, rhs: Temperature) -> Temperature {
                    self + &rhs
                }
            }

            impl Sub<&Temperature> for $t {
                type Output = Temperature;

                /// # Panics
                /// If `self` is NaN or infinite.
                fn sub(self, rhs: &Temperature) -> Temperature {
                    checked(rhs.coerce(self).map(|(wrapped, receiver)| &wrapped - receiver))
                }
            }

            impl Sub<Temperature> for $t {
                type Output = Temperature;

                fn sub(self, rhs: Temperature) -> Temperature {
                    self - &rhs
                }
            }
        )*
    };
}

impl_numeric_ops!(f64, f32, i32, i64, u32, u64);
