//! Human-readable rendering, e.g. `20 °C` or `293.15 K`.
use std::fmt;

use super::rounding::round_degrees;
use super::Temperature;

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `+ 0.0` folds -0.0 into 0.0; whole numbers print without a fraction.
        let degrees = round_degrees(self.degrees) + 0.0;
        write!(f, "{} {}", degrees, self.scale.symbol())
    }
}

impl fmt::Debug for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Temperature")
            .field("degrees", &self.degrees)
            .field("scale", &self.scale)
            .finish()
    }
}
