//! Locale-aware Storefront API client.

use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use storefront_core::LocaleContext;

use crate::deferred::Deferred;
use crate::model::{CollectionHeroResult, FeaturedCollections, FeaturedProducts, ShopHero};
use crate::queries::{
    StorefrontQuery, COLLECTION_HERO_QUERY, FEATURED_COLLECTIONS_QUERY,
    HOMEPAGE_FEATURED_PRODUCTS_QUERY, HOMEPAGE_SEO_QUERY,
};

/// Error type for Storefront API operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Request error: {0}")]
    Request(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("GraphQL error in {operation}: {message}")]
    GraphQl { operation: String, message: String },

    #[error("No data returned for {0}")]
    MissingData(String),
}

/// Variables shared by every storefront query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    pub country: String,
    pub language: String,
}

impl QueryVariables {
    /// Variables for the given locale.
    pub fn for_locale(locale: &LocaleContext) -> Self {
        Self {
            handle: None,
            country: locale.country.clone(),
            language: locale.language.clone(),
        }
    }

    /// Add a collection handle.
    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }
}

/// A GraphQL request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: &'static str,
    pub operation_name: &'static str,
    pub variables: QueryVariables,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Sends GraphQL requests to the Storefront API.
///
/// Implementations return the raw response body for a successful HTTP
/// exchange and map transport failures to `FetchError`.
#[async_trait(?Send)]
pub trait StorefrontTransport {
    async fn post_graphql(&self, request: &GraphQlRequest) -> Result<Vec<u8>, FetchError>;
}

/// Typed Storefront API client bound to one request's locale.
#[derive(Clone)]
pub struct StorefrontClient {
    transport: Rc<dyn StorefrontTransport>,
    locale: LocaleContext,
}

impl StorefrontClient {
    /// Create a client for a request locale.
    pub fn new(transport: Rc<dyn StorefrontTransport>, locale: LocaleContext) -> Self {
        Self { transport, locale }
    }

    /// The locale every query is parameterised with.
    pub fn locale(&self) -> &LocaleContext {
        &self.locale
    }

    /// Run a query and decode its `data`.
    pub async fn query<T: DeserializeOwned>(
        &self,
        query: StorefrontQuery,
        variables: QueryVariables,
    ) -> Result<T, FetchError> {
        let request = GraphQlRequest {
            query: query.document,
            operation_name: query.name,
            variables,
        };
        let body = self.transport.post_graphql(&request).await?;
        decode_response(query.name, &body)
    }

    /// Send a query now and return its pending result.
    pub fn defer<T: DeserializeOwned + 'static>(
        &self,
        label: &'static str,
        query: StorefrontQuery,
        variables: QueryVariables,
    ) -> Deferred<T> {
        let client = self.clone();
        Deferred::new(label, async move { client.query(query, variables).await }).start()
    }

    fn variables(&self) -> QueryVariables {
        QueryVariables::for_locale(&self.locale)
    }

    /// Shop details plus the collection hero for `handle`.
    pub async fn shop_and_hero(&self, handle: &str) -> Result<ShopHero, FetchError> {
        self.query(HOMEPAGE_SEO_QUERY, self.variables().with_handle(handle))
            .await
    }

    /// Collection hero for `handle`, deferred.
    pub fn collection_hero(&self, label: &'static str, handle: &str) -> Deferred<CollectionHeroResult> {
        self.defer(label, COLLECTION_HERO_QUERY, self.variables().with_handle(handle))
    }

    /// First 8 products, deferred.
    pub fn featured_products(&self, label: &'static str) -> Deferred<FeaturedProducts> {
        self.defer(label, HOMEPAGE_FEATURED_PRODUCTS_QUERY, self.variables())
    }

    /// First 4 collections by most recent update, deferred.
    pub fn featured_collections(&self, label: &'static str) -> Deferred<FeaturedCollections> {
        self.defer(label, FEATURED_COLLECTIONS_QUERY, self.variables())
    }
}

/// Decode a GraphQL response body, surfacing GraphQL errors.
pub fn decode_response<T: DeserializeOwned>(operation: &str, body: &[u8]) -> Result<T, FetchError> {
    let response: GraphQlResponse<T> = serde_json::from_slice(body)
        .map_err(|e| FetchError::Deserialization(format!("{}: {}", operation, e)))?;

    if !response.errors.is_empty() {
        let message = response
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(FetchError::GraphQl {
            operation: operation.to_string(),
            message,
        });
    }

    response
        .data
        .ok_or_else(|| FetchError::MissingData(operation.to_string()))
}
