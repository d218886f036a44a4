//! Live / simulated gateway selection and the checkout entry point.
//!
//! The two paths are separate types behind one enum so a misconfiguration
//! cannot route a live payment through the simulation or vice versa: the
//! simulated variant holds no secret and has no way to reach the signer.

use error_stack::ResultExt;
use time::PrimitiveDateTime;
use url::Url;

use crate::{
    amount,
    config::{GatewayMode, GatewaySettings},
    consts::{self, fields},
    errors::{CustomResult, PaymentError},
    reference::OrderReferenceGenerator,
    request::{self, PaymentRequest},
};

/// What the checkout flow hands over for one payment attempt.
#[derive(Clone, Debug)]
pub struct CheckoutIntent {
    /// Whole-currency order amount as submitted by the storefront.
    pub amount: f64,
    /// Order description shown on the payment page.
    pub description: String,
    /// Buyer IP address.
    pub client_ip: String,
    /// Payment page locale; the gateway default applies when `None`.
    pub locale: Option<String>,
}

/// The redirect handed back to the checkout flow.
#[derive(Clone, Debug)]
pub struct CheckoutRedirect {
    /// Reference minted for this attempt, to be stored with the order.
    pub order_reference: String,
    /// Absolute URL to redirect the buyer to.
    pub redirect_url: String,
}

/// A configured payment gateway, live or simulated.
#[derive(Clone, Debug)]
pub enum Gateway {
    /// Signs real requests against the configured endpoint.
    Live(LiveGateway),
    /// Development-only loopback that never signs anything.
    Simulated(SimulatedGateway),
}

impl Gateway {
    /// Select the path from validated settings. This is the only
    /// constructor for either variant.
    pub fn from_settings(settings: GatewaySettings) -> Self {
        match settings.mode {
            GatewayMode::Live => Self::Live(LiveGateway::new(settings)),
            GatewayMode::Simulated => Self::Simulated(SimulatedGateway {
                return_url_base: settings.return_url_base,
                reference: OrderReferenceGenerator::new(settings.order_prefix),
            }),
        }
    }

    /// Produce the redirect for one checkout attempt happening at `now`.
    pub fn checkout_redirect(
        &self,
        intent: &CheckoutIntent,
        now: PrimitiveDateTime,
    ) -> CustomResult<CheckoutRedirect, PaymentError> {
        match self {
            Self::Live(live) => live.checkout_redirect(intent, now),
            Self::Simulated(simulated) => simulated.checkout_redirect(intent, now),
        }
    }
}

/// The real signing pipeline: normalize → mint reference → assemble fields
/// → canonicalize → sign → render URL.
#[derive(Clone, Debug)]
pub struct LiveGateway {
    settings: GatewaySettings,
    reference: OrderReferenceGenerator,
}

impl LiveGateway {
    fn new(settings: GatewaySettings) -> Self {
        let reference = OrderReferenceGenerator::new(settings.order_prefix.clone());
        Self {
            settings,
            reference,
        }
    }

    fn checkout_redirect(
        &self,
        intent: &CheckoutIntent,
        now: PrimitiveDateTime,
    ) -> CustomResult<CheckoutRedirect, PaymentError> {
        let normalized =
            amount::normalize(intent.amount).change_context(PaymentError::InvalidAmount)?;
        let order_reference = self.reference.generate(now)?;

        let payment_request = PaymentRequest {
            order_reference: order_reference.clone(),
            amount: normalized,
            currency: consts::CURRENCY_VND.to_owned(),
            description: intent.description.clone(),
            return_url: self.settings.return_url_base.to_string(),
            client_ip: intent.client_ip.clone(),
            locale: intent.locale.clone().unwrap_or_default(),
            created_at: now,
        };

        let request_fields = payment_request.to_fields(&self.settings.merchant_code)?;
        let redirect_url = request::build_payment_url(
            request_fields,
            &self.settings.secret,
            self.settings.gateway_base_url.as_str(),
        )?;

        tracing::debug!(
            order_reference = %order_reference,
            amount = normalized.get_amount_as_i64(),
            "built signed payment redirect"
        );

        Ok(CheckoutRedirect {
            order_reference,
            redirect_url,
        })
    }
}

/// Local-development loopback. Holds no secret; the signer is unreachable
/// from here by construction.
#[derive(Clone, Debug)]
pub struct SimulatedGateway {
    return_url_base: Url,
    reference: OrderReferenceGenerator,
}

impl SimulatedGateway {
    fn checkout_redirect(
        &self,
        intent: &CheckoutIntent,
        now: PrimitiveDateTime,
    ) -> CustomResult<CheckoutRedirect, PaymentError> {
        // The amount still goes through the same policy so local development
        // surfaces the same rejections as production.
        let normalized =
            amount::normalize(intent.amount).change_context(PaymentError::InvalidAmount)?;
        let order_reference = self.reference.generate(now)?;

        let mut redirect = self.return_url_base.clone();
        redirect
            .query_pairs_mut()
            .append_pair(fields::TXN_REF, &order_reference)
            .append_pair(fields::AMOUNT, &normalized.to_string())
            .append_pair(fields::RESPONSE_CODE, consts::RESPONSE_CODE_SUCCESS);

        tracing::debug!(
            order_reference = %order_reference,
            "simulated gateway redirect, no signature produced"
        );

        Ok(CheckoutRedirect {
            order_reference,
            redirect_url: redirect.into(),
        })
    }
}
