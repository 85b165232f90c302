use paywall_kit::types::{Package, PackageId};
use serde::Serialize;

/// Fixed user-facing copy rendered by the subscribe screen.
///
/// Failure messages are deliberately generic; provider detail goes to the
/// log, never to the user.
pub mod messages {
    pub const GRID_TITLE: &str = "Choose Your Subscription";
    pub const SIGN_IN_TITLE: &str = "Subscribe";
    pub const SIGN_IN_REQUIRED: &str = "Please log in to view subscription options.";
    pub const LOADING: &str = "Loading subscription options...";
    pub const NO_OFFERINGS: &str = "No subscription offerings available";
    pub const NO_PACKAGES: &str = "No subscription packages available";
    pub const FETCH_FAILED: &str = "Failed to load subscription offerings";
    pub const PURCHASE_FAILED: &str = "Failed to complete purchase. Please try again.";
    pub const SUBSCRIBE_ACTION: &str = "Subscribe";
}

/// One entry in the purchase grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageCard {
    /// Identifier the card's action control dispatches.
    pub package_id: PackageId,
    pub display_name: String,
    pub description: String,
    /// Provider-formatted price, rendered verbatim.
    pub price: String,
    pub action_label: String,
}

impl PackageCard {
    pub fn from_package(package: &Package) -> Self {
        PackageCard {
            package_id: package.identifier.clone(),
            display_name: package.product.display_name.clone(),
            description: package.product.description.clone(),
            price: package.product.current_price.formatted_price.clone(),
            action_label: messages::SUBSCRIBE_ACTION.to_string(),
        }
    }
}

/// What the subscribe screen wants drawn, one value per render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum ViewModel {
    /// Ask the user to sign in first.
    SignInPrompt { title: String, message: String },
    /// Offerings fetch still pending.
    Loading { message: String },
    /// Offerings fetch failed or came back unusable.
    LoadFailed { message: String },
    /// The purchase grid, with an optional purchase-failure notice.
    PurchaseGrid {
        title: String,
        cards: Vec<PackageCard>,
        #[serde(skip_serializing_if = "Option::is_none")]
        notice: Option<String>,
    },
    /// Nothing to draw; navigation away has fired.
    Empty,
}

#[cfg(test)]
mod tests {
    use paywall_kit::types::{Price, ProductInfo};

    use super::*;

    #[test]
    fn card_copies_product_fields_verbatim() {
        let package = Package::builder()
            .identifier("$rc_monthly")
            .product(
                ProductInfo::builder()
                    .display_name("Premium Monthly")
                    .description("Full access, billed monthly")
                    .current_price(Price::builder().formatted_price("CHF 9.90").build())
                    .build(),
            )
            .build();

        let card = PackageCard::from_package(&package);
        assert_eq!(card.package_id, PackageId::from("$rc_monthly"));
        assert_eq!(card.display_name, "Premium Monthly");
        assert_eq!(card.price, "CHF 9.90");
        assert_eq!(card.action_label, "Subscribe");
    }

    #[test]
    fn view_model_wire_shape() {
        let view = ViewModel::PurchaseGrid {
            title: messages::GRID_TITLE.to_string(),
            cards: vec![],
            notice: None,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["view"], "purchaseGrid");
        assert_eq!(json["title"], "Choose Your Subscription");
        assert!(json.get("notice").is_none());

        let view = ViewModel::SignInPrompt {
            title: messages::SIGN_IN_TITLE.to_string(),
            message: messages::SIGN_IN_REQUIRED.to_string(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["view"], "signInPrompt");
        assert_eq!(json["message"], "Please log in to view subscription options.");
    }
}
