//! Error types for the gateway core.

/// Custom Result
///
/// Effectively equivalent to `Result<T, error_stack::Report<E>>`, allowing
/// `error_stack::Report<E>` specific extendability.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Rejections produced while validating and normalizing an order amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// Below the gateway-imposed minimum.
    #[error("amount is below the gateway minimum of {min} VND")]
    TooSmall {
        /// Inclusive lower bound in whole VND.
        min: i64,
    },
    /// At or above the gateway-imposed maximum.
    #[error("amount is at or above the gateway maximum of {max} VND")]
    TooLarge {
        /// Exclusive upper bound in whole VND.
        max: i64,
    },
    /// The input could not be read as a finite number.
    #[error("amount could not be read as a finite number")]
    NotANumber,
}

/// Fatal configuration problems, checked once at process start. The core
/// refuses to construct any payment URL rather than sign with a missing or
/// empty secret.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Merchant (TMN) code absent or empty.
    #[error("merchant code is missing or empty")]
    MissingMerchantCode,
    /// Shared secret absent or empty.
    #[error("shared secret is missing or empty")]
    MissingSecret,
    /// A configured endpoint failed to parse as an absolute URL.
    #[error("`{field}` is not a valid absolute URL")]
    InvalidUrl {
        /// Name of the offending configuration field.
        field: &'static str,
    },
    /// A required environment variable was not set.
    #[error("environment variable `{name}` is not set")]
    MissingVariable {
        /// Name of the missing variable.
        name: &'static str,
    },
    /// The gateway mode flag was set to an unrecognized value.
    #[error("unrecognized gateway mode `{value}`")]
    InvalidMode {
        /// The offending value.
        value: String,
    },
}

/// Cryptographic algorithm errors
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// The algorithm was unable to sign the message.
    #[error("Failed to sign message")]
    MessageSigningFailed,
    /// The algorithm was unable to verify the given signature.
    #[error("Failed to verify signature")]
    SignatureVerificationFailed,
}

/// Failures while assembling an outbound payment request.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    /// The order amount was rejected by [`crate::amount::normalize`].
    #[error("amount rejected by the gateway bounds")]
    InvalidAmount,
    /// A field the gateway requires was missing or empty.
    #[error("required field `{field_name}` is missing or empty")]
    MissingRequiredField {
        /// Wire name of the missing field.
        field_name: &'static str,
    },
    /// The request creation timestamp could not be rendered.
    #[error("failed to format the request timestamp")]
    TimestampFormatting,
    /// Signing the canonical field set failed.
    #[error("failed to sign the payment request")]
    SigningFailed,
}
