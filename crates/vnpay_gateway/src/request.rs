//! Outbound payment request assembly and redirect URL construction.

use error_stack::ResultExt;
use masking::{PeekInterface, Secret};
use time::PrimitiveDateTime;

use crate::{
    amount::NormalizedAmount,
    canonical::CanonicalFieldSet,
    consts::{self, fields},
    crypto,
    errors::{CustomResult, PaymentError},
    reference,
};

/// The field set for one checkout attempt. Immutable once constructed; one
/// instance per attempt, never shared across requests.
#[derive(Clone, Debug)]
pub struct PaymentRequest {
    /// Merchant transaction reference, unique per attempt.
    pub order_reference: String,
    /// Amount already validated and scaled to minor units.
    pub amount: NormalizedAmount,
    /// ISO currency code, fixed to VND for this merchant account.
    pub currency: String,
    /// Free-text order description shown on the payment page.
    pub description: String,
    /// Absolute URL the gateway redirects the buyer back to.
    pub return_url: String,
    /// Buyer IP address.
    pub client_ip: String,
    /// Payment page locale.
    pub locale: String,
    /// Request creation time; also the clock source for the reference.
    pub created_at: PrimitiveDateTime,
}

impl PaymentRequest {
    /// Render the gateway field set, excluding the signature.
    ///
    /// Fails with a typed rejection if a field the gateway requires is
    /// empty; a request is never silently coerced into a signable one.
    pub fn to_fields(&self, merchant_code: &str) -> CustomResult<Vec<(String, String)>, PaymentError> {
        for (name, value) in [
            (fields::TMN_CODE, merchant_code),
            (fields::TXN_REF, self.order_reference.as_str()),
            (fields::ORDER_INFO, self.description.as_str()),
            (fields::RETURN_URL, self.return_url.as_str()),
            (fields::IP_ADDR, self.client_ip.as_str()),
        ] {
            if value.is_empty() {
                return Err(PaymentError::MissingRequiredField { field_name: name }.into());
            }
        }

        let create_date = reference::format_gateway_timestamp(self.created_at)?;
        let locale = if self.locale.is_empty() {
            consts::LOCALE_DEFAULT
        } else {
            &self.locale
        };

        Ok(vec![
            (fields::VERSION.to_owned(), consts::VERSION.to_owned()),
            (fields::COMMAND.to_owned(), consts::COMMAND_PAY.to_owned()),
            (fields::TMN_CODE.to_owned(), merchant_code.to_owned()),
            (fields::AMOUNT.to_owned(), self.amount.to_string()),
            (fields::CURR_CODE.to_owned(), self.currency.clone()),
            (fields::TXN_REF.to_owned(), self.order_reference.clone()),
            (fields::ORDER_INFO.to_owned(), self.description.clone()),
            (
                fields::ORDER_TYPE.to_owned(),
                consts::ORDER_TYPE_OTHER.to_owned(),
            ),
            (fields::LOCALE.to_owned(), locale.to_owned()),
            (fields::RETURN_URL.to_owned(), self.return_url.clone()),
            (fields::IP_ADDR.to_owned(), self.client_ip.clone()),
            (fields::CREATE_DATE.to_owned(), create_date),
        ])
    }
}

/// Canonicalize `fields`, sign them, and assemble the redirect URL.
///
/// The signed query string reuses the canonical ordering, with the signature
/// appended last. Reusing the canonical rendering for the final URL keeps a
/// single encoding rule across the pipeline.
pub fn build_payment_url<K, V, I>(
    fields: I,
    secret: &Secret<String>,
    base_url: &str,
) -> CustomResult<String, PaymentError>
where
    K: AsRef<str>,
    V: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
{
    let canonical = CanonicalFieldSet::from_fields(fields).canonical_string();
    let signature = crypto::sign_hex(secret.peek().as_bytes(), &canonical)
        .change_context(PaymentError::SigningFailed)?;

    Ok(format!(
        "{base_url}?{canonical}&{}={signature}",
        fields::SECURE_HASH
    ))
}
