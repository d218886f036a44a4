//! Return-callback authentication.
//!
//! The gateway reports a payment outcome by redirecting the buyer (or
//! calling the IPN endpoint) with the original field set plus a status code
//! and a signature. Nothing in the payload is trusted until the signature
//! checks out; a "success" status on a tampered payload is exactly the
//! forgery this module exists to reject.

use std::collections::BTreeMap;

use masking::{PeekInterface, Secret};

use crate::{
    canonical::CanonicalFieldSet,
    consts::{self, fields},
    crypto,
    errors::{CryptoError, CustomResult},
};

/// Why a callback was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectionReason {
    /// The payload carried no signature field at all.
    MissingSignature,
    /// The recomputed signature did not match the supplied one.
    SignatureMismatch,
}

/// Outcome of verifying one callback delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// The payload is authentic: it was produced by a holder of the shared
    /// secret and arrived unmodified. The retained fields (minus the
    /// signature) include the vendor status code for the caller to branch
    /// on. Acceptance does NOT by itself mean the payment succeeded.
    Accepted {
        /// The verified field set.
        fields: BTreeMap<String, String>,
    },
    /// The payload must be discarded without touching order state.
    Rejected {
        /// The failure class, for audit logging.
        reason: RejectionReason,
    },
}

/// Vendor payment status carried by an authenticated callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackStatus {
    /// `vnp_ResponseCode` was `"00"`.
    Success,
    /// Any other vendor code, carried verbatim.
    Failure(String),
}

impl CallbackStatus {
    /// Read the vendor status out of an accepted field set.
    pub fn from_fields(fields: &BTreeMap<String, String>) -> Option<Self> {
        fields.get(fields::RESPONSE_CODE).map(|code| {
            if code == consts::RESPONSE_CODE_SUCCESS {
                Self::Success
            } else {
                Self::Failure(code.clone())
            }
        })
    }
}

/// Authenticate one callback delivery.
///
/// The gateway-supplied signature (and the hash-type tag, which the gateway
/// never includes in its own signing input) is removed, the remainder is
/// re-canonicalized with the same rules as the outbound path, and the
/// recomputed signature is compared in constant time.
///
/// Stateless: the gateway retries deliveries, and every structurally valid,
/// correctly signed delivery verifies independently. Idempotent order-state
/// transitions are the caller's concern.
pub fn verify(
    callback_fields: &BTreeMap<String, String>,
    secret: &Secret<String>,
) -> CustomResult<VerificationOutcome, CryptoError> {
    let mut remainder = callback_fields.clone();
    remainder.remove(fields::SECURE_HASH_TYPE);

    let Some(claimed_signature) = remainder.remove(fields::SECURE_HASH) else {
        tracing::warn!(
            order_reference = remainder.get(fields::TXN_REF).map(String::as_str),
            "callback rejected: no signature supplied"
        );
        return Ok(VerificationOutcome::Rejected {
            reason: RejectionReason::MissingSignature,
        });
    };

    let canonical = CanonicalFieldSet::from_fields(&remainder).canonical_string();
    let authentic = crypto::verify_hex(secret.peek().as_bytes(), &claimed_signature, &canonical)?;

    if authentic {
        Ok(VerificationOutcome::Accepted { fields: remainder })
    } else {
        tracing::warn!(
            order_reference = remainder.get(fields::TXN_REF).map(String::as_str),
            response_code = remainder.get(fields::RESPONSE_CODE).map(String::as_str),
            "callback rejected: signature mismatch"
        );
        Ok(VerificationOutcome::Rejected {
            reason: RejectionReason::SignatureMismatch,
        })
    }
}
