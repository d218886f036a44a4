//! Order amount validation and minor-unit normalization.

use std::fmt;

use serde::Serialize;

use crate::{
    consts,
    errors::{AmountError, CustomResult},
};

/// An order amount validated against the gateway bounds and scaled to the
/// gateway's minor-unit convention (whole VND × 100).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct NormalizedAmount(i64);

impl NormalizedAmount {
    /// The minor-unit integer exactly as it is sent on the wire.
    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NormalizedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validate a whole-currency amount and scale it to minor units.
///
/// The input is rounded half-away-from-zero to a whole-VND integer
/// (`f64::round` semantics) before the bounds are applied, so `4_999.6`
/// normalizes to `5_000` and passes. Negative amounts land below the minimum
/// and fail with [`AmountError::TooSmall`].
pub fn normalize(amount: f64) -> CustomResult<NormalizedAmount, AmountError> {
    if !amount.is_finite() {
        return Err(AmountError::NotANumber.into());
    }

    let whole = amount.round();
    if whole < consts::AMOUNT_MIN as f64 {
        return Err(AmountError::TooSmall {
            min: consts::AMOUNT_MIN,
        }
        .into());
    }
    if whole >= consts::AMOUNT_MAX as f64 {
        return Err(AmountError::TooLarge {
            max: consts::AMOUNT_MAX,
        }
        .into());
    }

    // In bounds, so the conversion cannot truncate.
    Ok(NormalizedAmount(whole as i64 * consts::MINOR_UNIT_SCALE))
}

/// Parse a textual amount (as submitted by a checkout form) and normalize it.
pub fn normalize_str(amount: &str) -> CustomResult<NormalizedAmount, AmountError> {
    let parsed: f64 = amount
        .trim()
        .parse()
        .map_err(|_| AmountError::NotANumber)?;
    normalize(parsed)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    use super::*;

    #[test]
    fn rejects_below_minimum() {
        let err = normalize(4_999.0).expect_err("below minimum");
        assert_eq!(
            err.current_context(),
            &AmountError::TooSmall {
                min: consts::AMOUNT_MIN
            }
        );
    }

    #[test]
    fn accepts_bounds() {
        assert_eq!(
            normalize(5_000.0).expect("minimum").get_amount_as_i64(),
            500_000
        );
        assert_eq!(
            normalize(999_999_999.0)
                .expect("largest accepted")
                .get_amount_as_i64(),
            99_999_999_900
        );
    }

    #[test]
    fn rejects_at_maximum() {
        let err = normalize(1_000_000_000.0).expect_err("at maximum");
        assert_eq!(
            err.current_context(),
            &AmountError::TooLarge {
                max: consts::AMOUNT_MAX
            }
        );
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(
            normalize(149_999.5).expect("tie").get_amount_as_i64(),
            15_000_000
        );
        assert_eq!(
            normalize(150_000.4).expect("below tie").get_amount_as_i64(),
            15_000_000
        );
    }

    #[test]
    fn rounding_can_lift_into_range() {
        assert_eq!(
            normalize(4_999.6).expect("rounds to minimum").get_amount_as_i64(),
            500_000
        );
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(
            normalize(f64::NAN).expect_err("nan").current_context(),
            &AmountError::NotANumber
        );
        assert_eq!(
            normalize(f64::INFINITY)
                .expect_err("infinity")
                .current_context(),
            &AmountError::NotANumber
        );
        assert_eq!(
            normalize_str("abc").expect_err("text").current_context(),
            &AmountError::NotANumber
        );
    }

    #[test]
    fn rejects_negative_amounts() {
        let err = normalize(-150_000.0).expect_err("negative");
        assert_eq!(
            err.current_context(),
            &AmountError::TooSmall {
                min: consts::AMOUNT_MIN
            }
        );
    }

    #[test]
    fn parses_textual_amounts() {
        assert_eq!(
            normalize_str(" 150000 ").expect("padded").get_amount_as_i64(),
            15_000_000
        );
    }
}
