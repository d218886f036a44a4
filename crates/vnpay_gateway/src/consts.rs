//! Protocol constants for the VNPAY redirect integration.

/// Protocol version literal sent with every request.
pub const VERSION: &str = "2.1.0";

/// Command literal for a pay request.
pub const COMMAND_PAY: &str = "pay";

/// The only currency this merchant account transacts in.
pub const CURRENCY_VND: &str = "VND";

/// Order classification literal required by the gateway.
pub const ORDER_TYPE_OTHER: &str = "other";

/// Display locale of the hosted payment page when the buyer has no
/// preference.
pub const LOCALE_DEFAULT: &str = "vn";

/// Minimum accepted order amount in whole VND (inclusive).
pub const AMOUNT_MIN: i64 = 5_000;

/// Upper bound on the order amount in whole VND (exclusive).
pub const AMOUNT_MAX: i64 = 1_000_000_000;

/// The gateway expects the amount multiplied by 100 with no fractional
/// component.
pub const MINOR_UNIT_SCALE: i64 = 100;

/// Number of random digits appended to an order reference to keep two
/// checkouts within the same second apart.
pub const TXN_REF_SUFFIX_LENGTH: usize = 4;

/// Alphabet for the order reference disambiguator.
pub(crate) const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Wire names of the gateway's query fields.
pub mod fields {
    /// Protocol version.
    pub const VERSION: &str = "vnp_Version";
    /// Command selector.
    pub const COMMAND: &str = "vnp_Command";
    /// Gateway-assigned merchant (TMN) code.
    pub const TMN_CODE: &str = "vnp_TmnCode";
    /// Minor-unit amount.
    pub const AMOUNT: &str = "vnp_Amount";
    /// ISO currency code.
    pub const CURR_CODE: &str = "vnp_CurrCode";
    /// Merchant order reference.
    pub const TXN_REF: &str = "vnp_TxnRef";
    /// Free-text order description.
    pub const ORDER_INFO: &str = "vnp_OrderInfo";
    /// Order classification.
    pub const ORDER_TYPE: &str = "vnp_OrderType";
    /// Payment page locale.
    pub const LOCALE: &str = "vnp_Locale";
    /// Absolute URL the gateway redirects the buyer back to.
    pub const RETURN_URL: &str = "vnp_ReturnUrl";
    /// Buyer IP address, dotted-quad.
    pub const IP_ADDR: &str = "vnp_IpAddr";
    /// Request creation timestamp, `YYYYMMDDHHmmss`.
    pub const CREATE_DATE: &str = "vnp_CreateDate";
    /// Vendor payment status code on the callback.
    pub const RESPONSE_CODE: &str = "vnp_ResponseCode";
    /// HMAC signature over the canonical field set.
    pub const SECURE_HASH: &str = "vnp_SecureHash";
    /// Hash algorithm tag some gateway versions attach next to the
    /// signature. Never part of the signing input.
    pub const SECURE_HASH_TYPE: &str = "vnp_SecureHashType";
}

/// Vendor response code reported on a successful payment.
pub const RESPONSE_CODE_SUCCESS: &str = "00";
