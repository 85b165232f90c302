use std::fmt::Display;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::Record;

/// Provider-issued identifier of a purchasable package, e.g. `"$rc_monthly"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageId(pub String);

impl Serialize for PackageId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PackageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PackageId(s))
    }
}

impl Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PackageId {
    fn from(s: String) -> Self {
        PackageId(s)
    }
}

impl From<&str> for PackageId {
    fn from(s: &str) -> Self {
        PackageId(s.to_string())
    }
}

/// Localized price of a package, formatted by the provider.
///
/// `formatted_price` is rendered verbatim; no amount arithmetic happens in
/// this library.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Display-ready price string, e.g. `"$9.99"`.
    #[builder(into)]
    pub formatted_price: String,
    /// Price in micro-units of `currency`, when the provider reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_micros: Option<i64>,
    /// ISO 4217 currency code, when the provider reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub currency: Option<String>,
}

/// Product metadata attached to a package.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    /// Name shown on the purchase card.
    #[builder(into)]
    pub display_name: String,
    /// Short copy shown under the name.
    #[builder(into)]
    pub description: String,
    /// Current localized price.
    pub current_price: Price,
}

/// One purchasable unit inside an offering.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Provider-issued package identifier.
    #[builder(into)]
    pub identifier: PackageId,
    /// Product backing this package.
    pub product: ProductInfo,
}

/// A named group of packages configured on the provider dashboard.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offering {
    /// Provider-issued offering identifier.
    #[builder(into)]
    pub identifier: String,
    /// Packages in the order the provider returns them.
    #[serde(default)]
    #[builder(default)]
    pub available_packages: Vec<Package>,
}

/// The offerings configuration fetched from the provider.
///
/// ```
/// use paywall_core::types::Offerings;
///
/// let offerings: Offerings = serde_json::from_value(serde_json::json!({
///     "current": {
///         "identifier": "default",
///         "availablePackages": [{
///             "identifier": "$rc_monthly",
///             "product": {
///                 "displayName": "Premium Monthly",
///                 "description": "Full access, billed monthly",
///                 "currentPrice": { "formattedPrice": "$9.99" }
///             }
///         }]
///     }
/// })).unwrap();
///
/// let current = offerings.current.unwrap();
/// assert_eq!(current.available_packages.len(), 1);
/// assert_eq!(
///     current.available_packages[0].product.current_price.formatted_price,
///     "$9.99"
/// );
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Offerings {
    /// The offering marked current on the provider dashboard, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<Offering>,
    /// Every configured offering, keyed by identifier.
    #[serde(default)]
    #[builder(default)]
    pub all: Record<Offering>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_wire_names_are_camel_case() {
        let package = Package::builder()
            .identifier("$rc_annual")
            .product(
                ProductInfo::builder()
                    .display_name("Premium Annual")
                    .description("Full access, billed yearly")
                    .current_price(
                        Price::builder()
                            .formatted_price("$89.99")
                            .currency("USD")
                            .build(),
                    )
                    .build(),
            )
            .build();

        let json = serde_json::to_value(&package).unwrap();
        assert_eq!(json["identifier"], "$rc_annual");
        assert_eq!(json["product"]["displayName"], "Premium Annual");
        assert_eq!(json["product"]["currentPrice"]["formattedPrice"], "$89.99");
        assert_eq!(json["product"]["currentPrice"]["currency"], "USD");
    }

    #[test]
    fn offerings_without_current_deserialize() {
        let offerings: Offerings = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(offerings.current.is_none());
        assert!(offerings.all.is_empty());
    }

    #[test]
    fn missing_available_packages_defaults_to_empty() {
        let offering: Offering =
            serde_json::from_value(serde_json::json!({ "identifier": "default" })).unwrap();
        assert!(offering.available_packages.is_empty());
    }
}
