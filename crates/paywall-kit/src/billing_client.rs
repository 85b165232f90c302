use http::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use url::Url;

use paywall_core::{
    errors::{BillingError, BillingErrorCode},
    types::{CustomerInfo, Offerings, Package, PackageId},
};

use crate::billing::{BillingClient, PurchaseResult};

/// A remote billing client that talks to a hosted provider over HTTP.
///
/// Endpoint layout: `GET {base}/offerings`, `GET {base}/customer_info`,
/// `POST {base}/purchase`. When an app user id is set, every request is
/// scoped to that billing account with an `appUserId` query parameter.
#[derive(Debug, Clone)]
pub struct RemoteBillingClient {
    pub base_url: Url,
    pub client: reqwest::Client,
    pub headers: HeaderMap,
    pub app_user_id: Option<String>,
}

impl RemoteBillingClient {
    pub fn from_url(base_url: Url) -> Self {
        RemoteBillingClient {
            base_url,
            client: reqwest::Client::new(),
            headers: HeaderMap::new(),
            app_user_id: None,
        }
    }

    /// Attach a header to every request, e.g. the provider API key.
    pub fn header(mut self, key: &HeaderName, value: &HeaderValue) -> Self {
        self.headers.insert(key, value.to_owned());
        self
    }

    /// Scope every request to one billing account.
    pub fn app_user(mut self, app_user_id: impl Into<String>) -> Self {
        self.app_user_id = Some(app_user_id.into());
        self
    }

    fn endpoint(&self, path: &str) -> Result<Url, RemoteBillingClientError> {
        let mut url = self.base_url.join(path)?;
        if let Some(id) = &self.app_user_id {
            url.query_pairs_mut().append_pair("appUserId", id);
        }
        Ok(url)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePurchaseRequest {
    pub package_identifier: PackageId,
}

/// Wire shape of the provider's purchase response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePurchaseResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<BillingErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub customer_info: Option<CustomerInfo>,
}

impl RemotePurchaseResponse {
    fn into_purchase_result(self) -> Result<PurchaseResult, BillingError> {
        if self.success {
            Ok(PurchaseResult {
                customer_info: self.customer_info.unwrap_or_default(),
            })
        } else {
            Err(BillingError::new(
                self.error_code.unwrap_or(BillingErrorCode::Unknown),
                self.error_message.unwrap_or_default(),
            ))
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RemoteBillingClientError {
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
    #[error("HTTP request error: {0}")]
    HttpRequestError(#[from] reqwest::Error),
    #[error("Provider error: {0}")]
    Provider(#[from] BillingError),
}

impl From<RemoteBillingClientError> for BillingError {
    fn from(err: RemoteBillingClientError) -> Self {
        match err {
            RemoteBillingClientError::Provider(e) => e,
            RemoteBillingClientError::HttpRequestError(e) => BillingError::network(e.to_string()),
            RemoteBillingClientError::UrlParseError(e) => BillingError::unknown(e.to_string()),
        }
    }
}

impl BillingClient for RemoteBillingClient {
    type Error = RemoteBillingClientError;

    async fn offerings(&self) -> Result<Offerings, Self::Error> {
        let offerings = self
            .client
            .get(self.endpoint("offerings")?)
            .headers(self.headers.clone())
            .send()
            .await?
            .json()
            .await?;

        Ok(offerings)
    }

    async fn customer_info(&self) -> Result<CustomerInfo, Self::Error> {
        let info = self
            .client
            .get(self.endpoint("customer_info")?)
            .headers(self.headers.clone())
            .send()
            .await?
            .json()
            .await?;

        Ok(info)
    }

    async fn purchase(&self, package: &Package) -> Result<PurchaseResult, Self::Error> {
        let response = self
            .client
            .post(self.endpoint("purchase")?)
            .headers(self.headers.clone())
            .json(&RemotePurchaseRequest {
                package_identifier: package.identifier.clone(),
            })
            .send()
            .await?
            .json::<RemotePurchaseResponse>()
            .await?;

        Ok(response.into_purchase_result()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_purchase_response_maps_to_billing_error() {
        let response: RemotePurchaseResponse = serde_json::from_value(serde_json::json!({
            "success": false,
            "errorCode": "RECEIPT_ALREADY_IN_USE",
            "errorMessage": "receipt attached to user-1",
            "customerInfo": null
        }))
        .unwrap();

        let err = response.into_purchase_result().unwrap_err();
        assert_eq!(err.code, BillingErrorCode::ReceiptAlreadyInUse);
        assert_eq!(err.message, "receipt attached to user-1");
    }

    #[test]
    fn successful_purchase_response_carries_customer_info() {
        let response: RemotePurchaseResponse = serde_json::from_value(serde_json::json!({
            "success": true,
            "customerInfo": { "originalAppUserId": "user-1" }
        }))
        .unwrap();

        let result = response.into_purchase_result().unwrap();
        assert_eq!(result.customer_info.original_app_user_id.as_deref(), Some("user-1"));
    }

    #[test]
    fn url_errors_map_to_unknown_code() {
        let err = RemoteBillingClientError::UrlParseError(url::ParseError::EmptyHost);
        let billing: BillingError = err.into();
        assert_eq!(billing.code, BillingErrorCode::Unknown);
    }

    #[test]
    fn app_user_scopes_requests() {
        let client = RemoteBillingClient::from_url(Url::parse("https://billing.example.com/v1/").unwrap())
            .app_user("user-42");

        let url = client.endpoint("offerings").unwrap();
        assert_eq!(url.path(), "/v1/offerings");
        assert_eq!(url.query(), Some("appUserId=user-42"));
    }
}
