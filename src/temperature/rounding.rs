//! Rounding applied when temperatures are compared or displayed.

/// Number of decimal digits kept by comparison and display.
pub const ROUNDING_DIGITS: i32 = 2;

/// Beyond this magnitude an `f64` has no fractional digits left to round.
const INTEGRAL_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Rounds degrees to [`ROUNDING_DIGITS`] decimals, halves away from zero.
///
/// `20.025` is stored as `20.02499999...`; it still rounds to `20.03`
/// because the half-way point is checked in the original decimal domain
/// rather than on the scaled product.
pub fn round_degrees(degrees: f64) -> f64 {
    round_half_up(degrees, 10f64.powi(ROUNDING_DIGITS))
}

fn round_half_up(x: f64, s: f64) -> f64 {
    let xs = x * s;
    if !(xs.abs() < INTEGRAL_LIMIT) {
        return x;
    }

    let mut f = xs.round();
    if x > 0.0 && (f + 0.5) / s <= x {
        f += 1.0;
    } else if x < 0.0 && (f - 0.5) / s >= x {
        f -= 1.0;
    }
    f / s
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(0.001, 0.0)]
    #[case(0.002, 0.0)]
    #[case(0.005, 0.01)]
    #[case(0.01, 0.01)]
    #[case(20.020, 20.02)]
    #[case(20.024, 20.02)]
    #[case(20.025, 20.03)]
    #[case(20.029, 20.03)]
    #[case(1.005, 1.01)]
    #[case(-20.025, -20.03)]
    #[case(-0.004, 0.0)]
    #[case(293.15, 293.15)]
    #[case(527.67, 527.67)]
    fn test_round_degrees(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(round_degrees(input), expected);
    }

    #[test]
    fn test_huge_magnitudes_are_returned_unchanged() {
        assert_eq!(round_degrees(1e300), 1e300);
        assert_eq!(round_degrees(f64::MAX), f64::MAX);
        assert_eq!(round_degrees(-f64::MAX), -f64::MAX);
    }
}
