//! Monetary conversion helpers
//!
//! Invoice amounts are stored as whole minor units (cents) so that no
//! fractional-unit floating values ever reach the database.

/// Convert a decimal currency amount to whole minor units (cents)
///
/// Multiplies by 100 and rounds to the nearest integer. Ties round away
/// from zero (`f64::round` semantics), so `0.005` becomes 1 cent.
/// Callers validate `amount > 0` before converting.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_amounts() {
        assert_eq!(to_minor_units(45.50), 4550);
        assert_eq!(to_minor_units(19.99), 1999);
        assert_eq!(to_minor_units(100.0), 10000);
        assert_eq!(to_minor_units(0.01), 1);
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(to_minor_units(0.005), 1);
        assert_eq!(to_minor_units(1.125), 113);
    }

    #[test]
    fn test_sub_cent_rounding() {
        assert_eq!(to_minor_units(0.004), 0);
        assert_eq!(to_minor_units(12.349), 1235);
        assert_eq!(to_minor_units(12.341), 1234);
    }

    #[test]
    fn test_round_trip_within_one_minor_unit() {
        // Converting back to a decimal amount never drifts more than one cent
        for amount in [0.01, 0.99, 1.005, 45.50, 333.33, 1234.56, 99999.99] {
            let cents = to_minor_units(amount);
            let back = cents as f64 / 100.0;
            assert!(
                (back - amount).abs() <= 0.01,
                "round trip drifted: {} -> {} -> {}",
                amount,
                cents,
                back
            );
        }
    }
}
