#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unreachable,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

//! Signing core for the VNPAY hosted-payment integration.
//!
//! Covers the two security-critical halves of the protocol: constructing a
//! correctly signed outbound redirect request, and authenticating the
//! gateway's return callback before any order-state change is allowed.
//! Everything here is a pure function or a stateless verifier; the merchant
//! secret and code are read-only configuration loaded once at startup.

pub mod amount;
pub mod callback;
pub mod canonical;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod errors;
pub mod gateway;
pub mod reference;
pub mod request;

pub use self::{
    amount::{normalize, normalize_str, NormalizedAmount},
    callback::{verify, CallbackStatus, RejectionReason, VerificationOutcome},
    canonical::CanonicalFieldSet,
    config::{GatewayMode, GatewaySettings},
    errors::{AmountError, ConfigError, CryptoError, CustomResult, PaymentError},
    gateway::{CheckoutIntent, CheckoutRedirect, Gateway},
    reference::OrderReferenceGenerator,
    request::{build_payment_url, PaymentRequest},
};
