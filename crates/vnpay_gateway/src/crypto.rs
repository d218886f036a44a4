//! Keyed signing primitives for the gateway protocol.

use ring::hmac;

use crate::errors::{CryptoError, CustomResult};

/// Trait for cryptographically signing messages
pub trait SignMessage {
    /// Takes in a secret and a message and returns the calculated signature
    /// as bytes
    fn sign_message(&self, secret: &[u8], msg: &[u8]) -> CustomResult<Vec<u8>, CryptoError>;
}

/// Trait for cryptographically verifying a message against a signature
pub trait VerifySignature {
    /// Takes in a secret, the signature and the message and verifies the
    /// message against the signature
    fn verify_signature(
        &self,
        secret: &[u8],
        signature: &[u8],
        msg: &[u8],
    ) -> CustomResult<bool, CryptoError>;
}

/// Represents the HMAC-SHA-512 algorithm
#[derive(Debug)]
pub struct HmacSha512;

impl SignMessage for HmacSha512 {
    fn sign_message(&self, secret: &[u8], msg: &[u8]) -> CustomResult<Vec<u8>, CryptoError> {
        let key = hmac::Key::new(hmac::HMAC_SHA512, secret);
        Ok(hmac::sign(&key, msg).as_ref().to_vec())
    }
}

impl VerifySignature for HmacSha512 {
    fn verify_signature(
        &self,
        secret: &[u8],
        signature: &[u8],
        msg: &[u8],
    ) -> CustomResult<bool, CryptoError> {
        let key = hmac::Key::new(hmac::HMAC_SHA512, secret);

        // `ring::hmac::verify` recomputes the MAC and compares in constant
        // time.
        Ok(hmac::verify(&key, msg, signature).is_ok())
    }
}

/// Sign `msg` with HMAC-SHA-512 and render the MAC as lowercase hex
/// (128 characters).
pub fn sign_hex(secret: &[u8], msg: &str) -> CustomResult<String, CryptoError> {
    HmacSha512
        .sign_message(secret, msg.as_bytes())
        .map(hex::encode)
}

/// Verify a hex-encoded HMAC-SHA-512 signature over `msg`.
///
/// Accepts upper- or lowercase hex. A signature that does not decode as hex
/// of the right length cannot be authentic and verifies to `false`.
pub fn verify_hex(secret: &[u8], signature_hex: &str, msg: &str) -> CustomResult<bool, CryptoError> {
    let signature = match hex::decode(signature_hex) {
        Ok(bytes) => bytes,
        Err(_) => return Ok(false),
    };
    HmacSha512.verify_signature(secret, &signature, msg.as_bytes())
}

#[cfg(test)]
mod crypto_tests {
    #![allow(clippy::expect_used)]
    use super::{SignMessage, VerifySignature};

    #[test]
    fn test_hmac_sha512_sign_message() {
        let message = r#"{"type":"payment_intent"}"#.as_bytes();
        let secret = "hmac_secret_1234".as_bytes();
        let right_signature = hex::decode("38b0bc1ea66b14793e39cd58e93d37b799a507442d0dd8d37443fa95dec58e57da6db4742636fea31201c48e57a66e73a308a2e5a5c6bb831e4e39fe2227c00f")
            .expect("signature decoding");

        let signature = super::HmacSha512
            .sign_message(secret, message)
            .expect("Signature");

        assert_eq!(signature, right_signature);
    }

    #[test]
    fn test_hmac_sha512_verify_signature() {
        let right_signature = hex::decode("38b0bc1ea66b14793e39cd58e93d37b799a507442d0dd8d37443fa95dec58e57da6db4742636fea31201c48e57a66e73a308a2e5a5c6bb831e4e39fe2227c00f")
            .expect("signature decoding");
        let wrong_signature =
            hex::decode("d5550730377011948f12cc28889bee590d2a5434d6f54b87562f2dbc2657823f")
                .expect("wrong signature decoding");
        let secret = "hmac_secret_1234".as_bytes();
        let data = r#"{"type":"payment_intent"}"#.as_bytes();

        let right_verified = super::HmacSha512
            .verify_signature(secret, &right_signature, data)
            .expect("Right signature verification result");

        assert!(right_verified);

        let wrong_verified = super::HmacSha512
            .verify_signature(secret, &wrong_signature, data)
            .expect("Wrong signature verification result");

        assert!(!wrong_verified);
    }

    #[test]
    fn test_hex_signature_case_insensitive() {
        let secret = b"hmac_secret_1234";
        let msg = "a=1&b=2";

        let signature = super::sign_hex(secret, msg).expect("Signature");
        assert_eq!(signature.len(), 128);
        assert_eq!(signature, signature.to_lowercase());

        let upper = signature.to_uppercase();
        assert!(super::verify_hex(secret, &upper, msg).expect("verification"));
    }

    #[test]
    fn test_malformed_hex_signature_is_rejected() {
        let verified =
            super::verify_hex(b"secret", "not-hex-at-all", "a=1").expect("verification result");
        assert!(!verified);
    }
}
