use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Machine-readable classification of a billing provider failure.
///
/// Hosted providers report these as SCREAMING_SNAKE_CASE strings on the
/// wire; any code this library does not recognize collapses into
/// [`BillingErrorCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillingErrorCode {
    /// The user dismissed the purchase flow.
    Cancelled,

    /// The receipt backing the purchase is already attached to an account.
    ReceiptAlreadyInUse,

    /// The requested package cannot be purchased right now.
    ProductNotAvailable,

    /// The provider could not be reached.
    NetworkError,

    /// Any failure the provider did not classify further.
    Unknown,
}

impl BillingErrorCode {
    /// Parse a provider-reported code string.
    pub fn from_code(code: &str) -> Self {
        match code {
            "CANCELLED" => BillingErrorCode::Cancelled,
            "RECEIPT_ALREADY_IN_USE" => BillingErrorCode::ReceiptAlreadyInUse,
            "PRODUCT_NOT_AVAILABLE" => BillingErrorCode::ProductNotAvailable,
            "NETWORK_ERROR" => BillingErrorCode::NetworkError,
            _ => BillingErrorCode::Unknown,
        }
    }

    /// The wire representation of this code.
    pub fn as_code(&self) -> &'static str {
        match self {
            BillingErrorCode::Cancelled => "CANCELLED",
            BillingErrorCode::ReceiptAlreadyInUse => "RECEIPT_ALREADY_IN_USE",
            BillingErrorCode::ProductNotAvailable => "PRODUCT_NOT_AVAILABLE",
            BillingErrorCode::NetworkError => "NETWORK_ERROR",
            BillingErrorCode::Unknown => "UNKNOWN",
        }
    }

    /// Whether the failure is an expected outcome of the purchase flow
    /// rather than something to surface to the user.
    pub fn is_benign(&self) -> bool {
        matches!(
            self,
            BillingErrorCode::Cancelled | BillingErrorCode::ReceiptAlreadyInUse
        )
    }
}

impl Serialize for BillingErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_code())
    }
}

impl<'de> Deserialize<'de> for BillingErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(BillingErrorCode::from_code(&s))
    }
}

impl Display for BillingErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

/// A structured failure reported by a billing provider.
///
/// The message carries provider detail for logs; user-facing copy is the
/// caller's responsibility and should never include it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct BillingError {
    /// Machine-readable failure classification.
    pub code: BillingErrorCode,
    /// Human-readable detail from the provider.
    pub message: String,
}

impl BillingError {
    pub fn new(code: BillingErrorCode, message: impl Into<String>) -> Self {
        BillingError {
            code,
            message: message.into(),
        }
    }

    /// The user backed out of the purchase flow.
    pub fn cancelled(message: impl Into<String>) -> Self {
        BillingError::new(BillingErrorCode::Cancelled, message)
    }

    /// The purchase was already recorded under another account.
    pub fn receipt_already_in_use(message: impl Into<String>) -> Self {
        BillingError::new(BillingErrorCode::ReceiptAlreadyInUse, message)
    }

    /// The package is not currently purchasable.
    pub fn product_not_available(message: impl Into<String>) -> Self {
        BillingError::new(BillingErrorCode::ProductNotAvailable, message)
    }

    /// Transport failure talking to the provider.
    pub fn network(message: impl Into<String>) -> Self {
        BillingError::new(BillingErrorCode::NetworkError, message)
    }

    /// Unclassified provider failure.
    pub fn unknown(message: impl Into<String>) -> Self {
        BillingError::new(BillingErrorCode::Unknown, message)
    }

    pub fn is_benign(&self) -> bool {
        self.code.is_benign()
    }
}
