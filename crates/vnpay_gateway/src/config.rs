//! Process-wide gateway configuration, read once at startup.

use std::str::FromStr;

use masking::{PeekInterface, Secret};
use url::Url;

use crate::errors::{ConfigError, CustomResult};

/// Environment variable names for [`GatewaySettings::from_env`].
mod env_vars {
    pub(super) const TMN_CODE: &str = "VNP_TMN_CODE";
    pub(super) const HASH_SECRET: &str = "VNP_HASH_SECRET";
    pub(super) const PAY_URL: &str = "VNP_PAY_URL";
    pub(super) const RETURN_URL: &str = "VNP_RETURN_URL";
    pub(super) const ORDER_PREFIX: &str = "VNP_ORDER_PREFIX";
    pub(super) const MODE: &str = "VNP_MODE";
}

/// Which gateway path the process runs against.
///
/// Selected once from configuration. The default is [`GatewayMode::Live`] so
/// a missing flag can never route real traffic through the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GatewayMode {
    /// Sign real requests against the configured gateway endpoint.
    #[default]
    Live,
    /// Local-development path that bypasses the gateway entirely.
    Simulated,
}

impl FromStr for GatewayMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "simulated" => Ok(Self::Simulated),
            _ => Err(ConfigError::InvalidMode {
                value: value.to_owned(),
            }),
        }
    }
}

/// Read-only merchant configuration shared by every request.
#[derive(Clone, Debug)]
pub struct GatewaySettings {
    /// Gateway-assigned merchant (TMN) code.
    pub merchant_code: String,
    /// Shared signing secret. Never serialized, never logged.
    pub secret: Secret<String>,
    /// Gateway payment endpoint the buyer is redirected to.
    pub gateway_base_url: Url,
    /// Base of the merchant's return URL the gateway redirects back to.
    pub return_url_base: Url,
    /// Prefix for minted order references.
    pub order_prefix: String,
    /// Live or simulated operation.
    pub mode: GatewayMode,
}

impl GatewaySettings {
    /// Validate raw configuration values into settings.
    ///
    /// Fails fast on an empty merchant code or secret: refusing to start
    /// beats signing with a default key.
    pub fn new(
        merchant_code: impl Into<String>,
        secret: Secret<String>,
        gateway_base_url: &str,
        return_url_base: &str,
        order_prefix: impl Into<String>,
        mode: GatewayMode,
    ) -> CustomResult<Self, ConfigError> {
        let merchant_code = merchant_code.into();
        if merchant_code.trim().is_empty() {
            return Err(ConfigError::MissingMerchantCode.into());
        }
        if secret.peek().is_empty() {
            return Err(ConfigError::MissingSecret.into());
        }

        let gateway_base_url = Url::parse(gateway_base_url)
            .map_err(|_| ConfigError::InvalidUrl {
                field: "gateway_base_url",
            })?;
        let return_url_base = Url::parse(return_url_base)
            .map_err(|_| ConfigError::InvalidUrl {
                field: "return_url_base",
            })?;

        Ok(Self {
            merchant_code,
            secret,
            gateway_base_url,
            return_url_base,
            order_prefix: order_prefix.into(),
            mode,
        })
    }

    /// Load settings from the environment.
    ///
    /// `VNP_MODE` is optional and defaults to `live`; `VNP_ORDER_PREFIX`
    /// defaults to `GS`. Everything else is required.
    pub fn from_env() -> CustomResult<Self, ConfigError> {
        let merchant_code = require_var(env_vars::TMN_CODE)?;
        let secret = Secret::new(require_var(env_vars::HASH_SECRET)?);
        let pay_url = require_var(env_vars::PAY_URL)?;
        let return_url = require_var(env_vars::RETURN_URL)?;
        let order_prefix =
            std::env::var(env_vars::ORDER_PREFIX).unwrap_or_else(|_| "GS".to_owned());
        let mode = match std::env::var(env_vars::MODE) {
            Ok(raw) => GatewayMode::from_str(&raw)?,
            Err(_) => GatewayMode::default(),
        };

        Self::new(merchant_code, secret, &pay_url, &return_url, order_prefix, mode)
    }
}

fn require_var(name: &'static str) -> CustomResult<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingVariable { name }.into())
}
