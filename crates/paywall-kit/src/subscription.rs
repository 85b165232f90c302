use paywall_core::types::CustomerInfo;

/// Derived signal for "does this customer hold an active subscription".
///
/// Computed from a customer snapshot and passed around by value; screens
/// consume it separately from the snapshot itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubscriptionStatus {
    subscribed: bool,
}

impl SubscriptionStatus {
    /// Derive the signal from any active entitlement on the snapshot.
    pub fn derive(info: Option<&CustomerInfo>) -> Self {
        SubscriptionStatus {
            subscribed: info.is_some_and(CustomerInfo::has_any_active),
        }
    }

    /// Derive the signal from one specific entitlement key.
    pub fn for_entitlement(key: &str, info: Option<&CustomerInfo>) -> Self {
        SubscriptionStatus {
            subscribed: info.is_some_and(|i| i.is_entitled(key)),
        }
    }

    pub fn subscribed() -> Self {
        SubscriptionStatus { subscribed: true }
    }

    pub fn not_subscribed() -> Self {
        SubscriptionStatus { subscribed: false }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }
}
