#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Wrapper types and traits for secret management which help ensure secrets
//! aren't accidentally logged or otherwise exposed through `Debug` output.

mod abs;
mod secret;
mod serde;
mod strategy;

pub use crate::{
    abs::{ExposeInterface, PeekInterface},
    secret::Secret,
    serde::{Deserialize, SerializableSecret, Serialize},
    strategy::{Strategy, WithType, WithoutType},
};

/// This module should be included with asterisk.
///
/// `use masking::prelude::*;`
pub mod prelude {
    pub use super::{ExposeInterface, PeekInterface};
}
