//! Equality and ordering.
//!
//! The receiver is converted into the other operand's scale and both
//! magnitudes are rounded to [`ROUNDING_DIGITS`](super::ROUNDING_DIGITS)
//! decimals before they are compared. Rounded equality is not transitive, so
//! there is no `Eq`/`Ord`.
use std::cmp::Ordering;

use super::casting::Operand;
use super::rounding::round_degrees;
use super::Temperature;

impl Temperature {
    /// Rounded magnitudes of `self` (in `other`'s scale) and `other`.
    fn aligned(&self, other: &Temperature) -> (f64, f64) {
        (round_degrees(self.convert(other.scale).degrees), round_degrees(other.degrees))
    }

    /// Equality against an arbitrary operand; anything but a temperature is unequal.
    pub fn equals<'a>(&self, other: impl Into<Operand<'a>>) -> bool {
        match other.into() {
            Operand::Temperature(t) => self == t,
            _ => false,
        }
    }

    /// Three-way comparison against an arbitrary operand.
    ///
    /// Returns `None` when `other` is not a temperature.
    ///
    /// ```
    /// use basic_temperature::Temperature;
    /// use std::cmp::Ordering;
    ///
    /// let t = Temperature::celsius(20.0).unwrap();
    /// assert_eq!(t.compare(&Temperature::kelvin(250.0).unwrap()), Some(Ordering::Greater));
    /// assert_eq!(t.compare("abc"), None);
    /// ```
    pub fn compare<'a>(&self, other: impl Into<Operand<'a>>) -> Option<Ordering> {
        match other.into() {
            Operand::Temperature(t) => self.partial_cmp(t),
            _ => None,
        }
    }

    /// `true` when `min <= self <= max`.
    pub fn between(&self, min: &Temperature, max: &Temperature) -> bool {
        self >= min && self <= max
    }

    /// Restricts `self` to the interval `[min, max]`.
    ///
    /// Returns `self` when it lies inside, otherwise the violated bound.
    ///
    /// # Panics
    /// If `min > max`.
    pub fn clamp<'a>(&'a self, min: &'a Temperature, max: &'a Temperature) -> &'a Temperature {
        assert!(min <= max, "min temperature {min} must not be greater than max temperature {max}");

        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }
}

impl PartialEq for Temperature {
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs) = self.aligned(other);
        lhs == rhs
    }
}

impl PartialOrd for Temperature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let (lhs, rhs) = self.aligned(other);
        lhs.partial_cmp(&rhs)
    }
}
