//! Spin outbound HTTP transport.

use async_trait::async_trait;
use spin_sdk::http::{Method, Request, Response};

use crate::client::{FetchError, GraphQlRequest, StorefrontTransport};

/// Sends Storefront API requests with Spin's outbound HTTP.
///
/// The store domain must be listed in the component's
/// `allowed_outbound_hosts`.
pub struct SpinTransport {
    endpoint: String,
    access_token: String,
}

impl SpinTransport {
    /// Create a transport for a GraphQL endpoint and public access token.
    pub fn new(endpoint: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_token: access_token.into(),
        }
    }
}

#[async_trait(?Send)]
impl StorefrontTransport for SpinTransport {
    async fn post_graphql(&self, request: &GraphQlRequest) -> Result<Vec<u8>, FetchError> {
        let body =
            serde_json::to_vec(request).map_err(|e| FetchError::Request(e.to_string()))?;

        let req = Request::builder()
            .method(Method::Post)
            .uri(&self.endpoint)
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .header("x-shopify-storefront-access-token", &self.access_token)
            .body(body)
            .build();

        let resp: Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = *resp.status();
        if status >= 400 {
            return Err(FetchError::Http {
                status,
                url: self.endpoint.clone(),
            });
        }

        Ok(resp.into_body())
    }
}
