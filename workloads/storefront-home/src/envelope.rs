//! Data handed from the loader to the view.

use serde::Serialize;
use storefront_sdk::storefront_cache::{CacheHeadersBuilder, RouteCachePolicy};
use storefront_sdk::storefront_core::{LocaleContext, RequestId};
use storefront_sdk::storefront_data::{
    CollectionHero, CollectionHeroResult, Deferred, FeaturedCollections, FeaturedProducts, Shop,
};

use crate::seo::SeoPayload;

/// Page type reported to analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Home,
}

/// Analytics payload for the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub page_type: PageType,
}

impl Analytics {
    pub fn home() -> Self {
        Self {
            page_type: PageType::Home,
        }
    }
}

/// Everything the home page renders.
///
/// `shop` and `primary_hero` are resolved before the envelope exists. The
/// four deferred queries are already sent; each resolves on its own once
/// the view awaits it.
#[derive(Debug)]
pub struct HomeEnvelope {
    pub locale: LocaleContext,
    /// Prefix for in-page links (`""` or `/{locale}`).
    pub link_base: String,
    pub shop: Shop,
    pub primary_hero: Option<CollectionHero>,
    pub featured_products: Deferred<FeaturedProducts>,
    pub secondary_hero: Deferred<CollectionHeroResult>,
    pub featured_collections: Deferred<FeaturedCollections>,
    pub tertiary_hero: Deferred<CollectionHeroResult>,
    pub analytics: Analytics,
    pub seo: SeoPayload,
    pub cache: RouteCachePolicy,
}

impl HomeEnvelope {
    /// Headers for a successful response.
    pub fn response_headers(&self, request_id: &RequestId) -> Vec<(String, String)> {
        html_headers(&self.cache, request_id)
    }
}

/// Headers for an HTML response cached under `cache`.
pub fn html_headers(cache: &RouteCachePolicy, request_id: &RequestId) -> Vec<(String, String)> {
    let mut headers = vec![
        (
            http::header::CONTENT_TYPE.as_str().to_string(),
            "text/html; charset=utf-8".to_string(),
        ),
        ("x-request-id".to_string(), request_id.to_string()),
    ];
    headers.extend(
        CacheHeadersBuilder::new()
            .cache_control_from_policy(cache)
            .build(),
    );
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytics_shape() {
        assert_eq!(
            serde_json::to_value(Analytics::home()).unwrap(),
            serde_json::json!({ "pageType": "home" })
        );
    }

    #[test]
    fn test_uncacheable_html_headers() {
        let headers = html_headers(&RouteCachePolicy::none(), &RequestId::from_string("req-1"));
        assert_eq!(
            headers,
            vec![
                ("content-type".to_string(), "text/html; charset=utf-8".to_string()),
                ("x-request-id".to_string(), "req-1".to_string()),
                ("cache-control".to_string(), "no-store".to_string()),
            ]
        );
    }
}
