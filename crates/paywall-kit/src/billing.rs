use paywall_core::{
    errors::BillingError,
    types::{CustomerInfo, Offerings, Package},
};

/// Successful purchase outcome reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PurchaseResult {
    /// Customer snapshot refreshed by the purchase.
    pub customer_info: CustomerInfo,
}

/// Billing provider interface.
///
/// Implementations talk to one hosted billing provider on behalf of one
/// app user. The error type converts into [`BillingError`] so callers can
/// branch on the provider's failure codes without knowing the transport.
///
/// Clients carry no retry or backoff logic; timeouts and connection policy
/// belong to the implementation's HTTP stack.
pub trait BillingClient {
    type Error: std::error::Error + Into<BillingError>;

    /// Fetch the offerings configured for this app.
    fn offerings(&self) -> impl Future<Output = Result<Offerings, Self::Error>>;

    /// Fetch the current customer snapshot.
    fn customer_info(&self) -> impl Future<Output = Result<CustomerInfo, Self::Error>>;

    /// Run the purchase flow for a package.
    fn purchase(
        &self,
        package: &Package,
    ) -> impl Future<Output = Result<PurchaseResult, Self::Error>>;
}
