//! Scripted collaborators for tests and local development.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use paywall_core::{
    errors::BillingError,
    types::{CustomerInfo, Offerings, Package},
};

use crate::{
    billing::{BillingClient, PurchaseResult},
    navigation::{Navigator, Route},
};

/// A [`BillingClient`] that replays scripted results.
///
/// Clones share call counters, so a handle kept outside the code under test
/// can observe how often each operation ran.
#[derive(Debug, Clone)]
pub struct MockBillingClient {
    offerings: Result<Offerings, BillingError>,
    customer_info: Result<CustomerInfo, BillingError>,
    purchase: Result<PurchaseResult, BillingError>,
    offerings_calls: Arc<AtomicUsize>,
    purchase_calls: Arc<AtomicUsize>,
}

impl Default for MockBillingClient {
    fn default() -> Self {
        MockBillingClient::new()
    }
}

impl MockBillingClient {
    /// Client that reports no offerings, a blank customer, and successful
    /// purchases.
    pub fn new() -> Self {
        MockBillingClient {
            offerings: Ok(Offerings::default()),
            customer_info: Ok(CustomerInfo::default()),
            purchase: Ok(PurchaseResult::default()),
            offerings_calls: Arc::new(AtomicUsize::new(0)),
            purchase_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_offerings(mut self, offerings: Offerings) -> Self {
        self.offerings = Ok(offerings);
        self
    }

    pub fn with_offerings_error(mut self, error: BillingError) -> Self {
        self.offerings = Err(error);
        self
    }

    pub fn with_customer_info(mut self, info: CustomerInfo) -> Self {
        self.customer_info = Ok(info);
        self
    }

    pub fn with_customer_info_error(mut self, error: BillingError) -> Self {
        self.customer_info = Err(error);
        self
    }

    pub fn with_purchase_result(mut self, result: PurchaseResult) -> Self {
        self.purchase = Ok(result);
        self
    }

    pub fn with_purchase_error(mut self, error: BillingError) -> Self {
        self.purchase = Err(error);
        self
    }

    /// How many times [`BillingClient::offerings`] ran.
    pub fn offerings_calls(&self) -> usize {
        self.offerings_calls.load(Ordering::SeqCst)
    }

    /// How many times [`BillingClient::purchase`] ran.
    pub fn purchase_calls(&self) -> usize {
        self.purchase_calls.load(Ordering::SeqCst)
    }
}

impl BillingClient for MockBillingClient {
    type Error = BillingError;

    async fn offerings(&self) -> Result<Offerings, Self::Error> {
        self.offerings_calls.fetch_add(1, Ordering::SeqCst);
        self.offerings.clone()
    }

    async fn customer_info(&self) -> Result<CustomerInfo, Self::Error> {
        self.customer_info.clone()
    }

    async fn purchase(&self, _package: &Package) -> Result<PurchaseResult, Self::Error> {
        self.purchase_calls.fetch_add(1, Ordering::SeqCst);
        self.purchase.clone()
    }
}

/// A [`Navigator`] that records every route it is asked to visit.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    log: Arc<Mutex<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        RecordingNavigator::default()
    }

    /// Routes navigated so far, in order.
    pub fn routes(&self) -> Vec<Route> {
        self.log.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &Route) {
        self.log.lock().unwrap().push(route.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clones_share_call_counters() {
        let client = MockBillingClient::new();
        let probe = client.clone();

        client.offerings().await.unwrap();
        client.offerings().await.unwrap();

        assert_eq!(probe.offerings_calls(), 2);
        assert_eq!(probe.purchase_calls(), 0);
    }

    #[test]
    fn recording_navigator_keeps_order() {
        let nav = RecordingNavigator::new();
        nav.navigate(&Route::from("/subscribe"));
        nav.navigate(&Route::from("/admin"));

        let routes = nav.routes();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[1], Route::from("/admin"));
    }
}
