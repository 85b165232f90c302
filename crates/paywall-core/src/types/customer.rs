use std::fmt::Display;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::Record;

/// Application-scoped user identifier, also used as the billing alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(pub String);

impl Serialize for UserId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(UserId(s))
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        UserId(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId(s.to_string())
    }
}

/// The signed-in user as the host application sees it.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Stable account identifier.
    #[builder(into)]
    pub id: UserId,
    /// Contact email, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub email: Option<String>,
    /// Name to greet the user with, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub display_name: Option<String>,
}

/// A single entitlement grant attached to a customer.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entitlement {
    /// Entitlement key as configured on the provider dashboard.
    #[builder(into)]
    pub identifier: String,
    /// Whether the grant is currently active.
    pub is_active: bool,
    /// Product that unlocked the grant, when the provider reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub product_identifier: Option<String>,
    /// Provider-formatted expiry timestamp. Opaque to this library.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub expires_at: Option<String>,
}

/// Entitlement grants attached to a customer.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Entitlements {
    /// Active grants, keyed by entitlement key.
    #[serde(default)]
    #[builder(default)]
    pub active: Record<Entitlement>,
}

/// Snapshot of a customer as the billing provider sees them.
///
/// Owned and refreshed by the billing provider context; everything else
/// only reads it.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    /// Entitlement grants attached to the customer.
    #[serde(default)]
    #[builder(default)]
    pub entitlements: Entitlements,
    /// The first app user id this customer was seen under.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub original_app_user_id: Option<String>,
}

impl CustomerInfo {
    /// Whether the customer holds at least one active entitlement.
    pub fn has_any_active(&self) -> bool {
        self.entitlements.active.values().any(|e| e.is_active)
    }

    /// Whether a specific entitlement key is active for the customer.
    pub fn is_entitled(&self, key: &str) -> bool {
        self.entitlements
            .active
            .get(key)
            .is_some_and(|e| e.is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer_with(key: &str, is_active: bool) -> CustomerInfo {
        let mut active = Record::new();
        active.insert(
            key.to_string(),
            Entitlement::builder()
                .identifier(key)
                .is_active(is_active)
                .build(),
        );
        CustomerInfo::builder()
            .entitlements(Entitlements::builder().active(active).build())
            .build()
    }

    #[test]
    fn active_entitlement_is_detected() {
        let info = customer_with("premium", true);
        assert!(info.has_any_active());
        assert!(info.is_entitled("premium"));
        assert!(!info.is_entitled("pro"));
    }

    #[test]
    fn inactive_entitlement_does_not_count() {
        let info = customer_with("premium", false);
        assert!(!info.has_any_active());
        assert!(!info.is_entitled("premium"));
    }

    #[test]
    fn empty_customer_info_has_no_entitlements() {
        let info = CustomerInfo::default();
        assert!(!info.has_any_active());
    }

    #[test]
    fn customer_info_wire_shape() {
        let info: CustomerInfo = serde_json::from_value(serde_json::json!({
            "entitlements": {
                "active": {
                    "premium": {
                        "identifier": "premium",
                        "isActive": true,
                        "productIdentifier": "$rc_monthly"
                    }
                }
            },
            "originalAppUserId": "user-42"
        }))
        .unwrap();

        assert!(info.has_any_active());
        assert_eq!(info.original_app_user_id.as_deref(), Some("user-42"));
        assert_eq!(
            info.entitlements.active["premium"].product_identifier.as_deref(),
            Some("$rc_monthly")
        );
    }
}
