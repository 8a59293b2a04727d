//! Payment value types.
//!
//! Both types are structs in Rust but travel over the wire as plain strings,
//! through their [Display] and [FromStr] implementations.

use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Error parsing a payment type or a payment method id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentParseError {
    /// Unknown payment type.
    #[error("unknown payment type: {0}")]
    UnknownPaymentType(String),
    /// Missing or empty crypto code.
    #[error("invalid payment method id: {0}")]
    InvalidPaymentMethodId(String),
}

/// The ways a payment can be settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaymentKind {
    /// On-chain payment.
    BtcLike,
    /// Lightning invoice.
    LightningLike,
    /// LNURL-pay.
    LnurlPay,
}

/// A payment type, serialized as its identifier (`BTCLike`, `LightningLike`, `LNURLPAY`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr, ToSchema)]
pub struct PaymentType {
    kind: PaymentKind,
}

impl PaymentType {
    /// On-chain.
    pub const BTC_LIKE: PaymentType = PaymentType {
        kind: PaymentKind::BtcLike,
    };
    /// Lightning.
    pub const LIGHTNING_LIKE: PaymentType = PaymentType {
        kind: PaymentKind::LightningLike,
    };
    /// LNURL-pay.
    pub const LNURL_PAY: PaymentType = PaymentType {
        kind: PaymentKind::LnurlPay,
    };

    /// Which kind of payment this is.
    pub fn kind(&self) -> PaymentKind {
        self.kind
    }

    /// Wire identifier.
    pub fn id(&self) -> &'static str {
        match self.kind {
            PaymentKind::BtcLike => "BTCLike",
            PaymentKind::LightningLike => "LightningLike",
            PaymentKind::LnurlPay => "LNURLPAY",
        }
    }

    /// Name used in normalized payment method ids.
    pub fn pretty_name(&self) -> &'static str {
        match self.kind {
            PaymentKind::BtcLike => "OnChain",
            PaymentKind::LightningLike => "LightningNetwork",
            PaymentKind::LnurlPay => "LNURLPAY",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PaymentType {
    type Err = PaymentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.to_ascii_lowercase().as_str() {
            "btclike" | "onchain" => PaymentKind::BtcLike,
            "lightninglike" | "lightningnetwork" | "offchain" => PaymentKind::LightningLike,
            "lnurlpay" => PaymentKind::LnurlPay,
            _ => return Err(PaymentParseError::UnknownPaymentType(s.to_string())),
        };

        Ok(Self { kind })
    }
}

/// A crypto code together with a payment type.
///
/// Normalized form is the bare crypto code for on-chain payments (`BTC`) and
/// `<code>-<type>` otherwise (`BTC-LightningNetwork`). Parsing also accepts
/// the legacy `_` separator and raw payment type ids (`BTC_LightningLike`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr, ToSchema)]
pub struct PaymentMethodId {
    crypto_code: String,
    payment_type: PaymentType,
}

impl PaymentMethodId {
    /// New payment method id. The crypto code is upper-cased.
    pub fn new(crypto_code: impl AsRef<str>, payment_type: PaymentType) -> Self {
        Self {
            crypto_code: crypto_code.as_ref().to_ascii_uppercase(),
            payment_type,
        }
    }

    /// Crypto code, e.g. `BTC`.
    pub fn crypto_code(&self) -> &str {
        &self.crypto_code
    }

    /// Payment type.
    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }
}

impl fmt::Display for PaymentMethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payment_type.kind {
            PaymentKind::BtcLike => f.write_str(&self.crypto_code),
            _ => write!(
                f,
                "{}-{}",
                self.crypto_code,
                self.payment_type.pretty_name()
            ),
        }
    }
}

impl FromStr for PaymentMethodId {
    type Err = PaymentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (crypto_code, payment_type) = match s.split_once(['-', '_']) {
            Some((code, ty)) => (code, ty.parse()?),
            None => (s, PaymentType::BTC_LIKE),
        };

        if crypto_code.is_empty() || !crypto_code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(PaymentParseError::InvalidPaymentMethodId(s.to_string()));
        }

        Ok(Self::new(crypto_code, payment_type))
    }
}
