//! Order reference minting and request timestamp rendering.

use error_stack::ResultExt;
use time::{macros::format_description, PrimitiveDateTime};

use crate::{
    consts,
    errors::{CustomResult, PaymentError},
};

/// Render a timestamp in the gateway's 14-digit `YYYYMMDDHHmmss` form.
///
/// Used both for `vnp_CreateDate` and as the body of an order reference, so
/// the two always come from the same clock and format.
pub fn format_gateway_timestamp(at: PrimitiveDateTime) -> CustomResult<String, PaymentError> {
    at.format(&format_description!(
        "[year][month][day][hour][minute][second]"
    ))
    .change_context(PaymentError::TimestampFormatting)
}

/// Mints gateway-safe transaction references.
///
/// A reference is the merchant prefix, the 14-digit timestamp, and a short
/// random digit suffix. The suffix keeps two checkouts within the same
/// wall-clock second apart; it shortens the odds of a collision rather than
/// eliminating them, which the reconciliation window tolerates.
#[derive(Clone, Debug)]
pub struct OrderReferenceGenerator {
    prefix: String,
}

impl OrderReferenceGenerator {
    /// Create a generator with the given merchant prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Mint a reference for a checkout attempt happening at `now`.
    pub fn generate(&self, now: PrimitiveDateTime) -> CustomResult<String, PaymentError> {
        let stamp = format_gateway_timestamp(now)?;
        let suffix = nanoid::format(
            nanoid::rngs::default,
            &consts::DIGITS,
            consts::TXN_REF_SUFFIX_LENGTH,
        );
        Ok(format!("{}{stamp}{suffix}", self.prefix))
    }

    /// The suffix-free reference: a pure function of the timestamp.
    ///
    /// Two calls within one second return the same value.
    pub fn from_timestamp(&self, now: PrimitiveDateTime) -> CustomResult<String, PaymentError> {
        let stamp = format_gateway_timestamp(now)?;
        Ok(format!("{}{stamp}", self.prefix))
    }
}
