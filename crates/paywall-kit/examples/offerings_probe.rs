use paywall_kit::{billing::BillingClient, billing_client::RemoteBillingClient};
use url::Url;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let billing_url =
        std::env::var("BILLING_URL").expect("Please set `BILLING_URL` in environment variables");
    let billing_url = Url::parse(&billing_url).expect("BILLING_URL must be a valid URL");
    tracing::info!("Fetching offerings from {}", billing_url);

    let client = RemoteBillingClient::from_url(billing_url).app_user("offerings-probe");

    let offerings = client
        .offerings()
        .await
        .expect("Failed to fetch offerings");

    match offerings.current {
        Some(offering) => {
            tracing::info!(
                "Current offering '{}' with {} package(s)",
                offering.identifier,
                offering.available_packages.len()
            );
            for package in offering.available_packages {
                tracing::info!(
                    "  {}: {} at {}",
                    package.identifier,
                    package.product.display_name,
                    package.product.current_price.formatted_price
                );
            }
        }
        None => tracing::warn!("No current offering configured"),
    }
}
