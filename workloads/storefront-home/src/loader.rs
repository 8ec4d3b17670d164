//! Home route loader: one awaited query, four sent and deferred.

use http::StatusCode;
use storefront_sdk::storefront_cache::RouteCachePolicy;
use storefront_sdk::storefront_core::RequestContext;
use storefront_sdk::storefront_data::{FetchError, ShopHero, StorefrontClient};

use crate::envelope::{Analytics, HomeEnvelope};
use crate::route::link_base;
use crate::seo::SeoPayload;

/// Collection shown as the primary hero, fetched eagerly.
pub const PRIMARY_HERO_HANDLE: &str = "freestyle";
/// Collection for the secondary hero.
pub const SECONDARY_HERO_HANDLE: &str = "backcountry";
/// Collection for the tertiary hero.
pub const TERTIARY_HERO_HANDLE: &str = "winter-2022";

/// Route parameter holding the optional locale segment.
pub const LOCALE_PARAM: &str = "locale";

/// Cache policy for a rendered home page.
pub fn home_cache_policy() -> RouteCachePolicy {
    RouteCachePolicy::short()
}

/// Error type for the home route.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Storefront query failed: {0}")]
    Fetch(#[from] FetchError),
}

impl RouteError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Builds the home page envelope for one request.
pub struct HomeRouteLoader {
    client: StorefrontClient,
    store_name: String,
    origin: String,
}

impl HomeRouteLoader {
    /// Create a loader. The client must be bound to the request's locale.
    pub fn new(client: StorefrontClient) -> Self {
        Self {
            client,
            store_name: "Storefront".to_string(),
            origin: String::new(),
        }
    }

    /// Name used when the shop has none.
    pub fn with_store_name(mut self, name: impl Into<String>) -> Self {
        self.store_name = name.into();
        self
    }

    /// Scheme and host the page is served from, for canonical URLs.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Load the envelope.
    ///
    /// A locale segment that does not match the client's locale is rejected
    /// before any query runs. The shop query is awaited; the other four are
    /// sent before this returns and left for the view to await.
    pub async fn load(&self, ctx: &RequestContext) -> Result<HomeEnvelope, RouteError> {
        let locale_param = ctx.param(LOCALE_PARAM);
        let locale = self.client.locale();

        if !locale.accepts_path_param(locale_param) {
            return Err(RouteError::NotFound);
        }

        let ShopHero { shop, hero } = self.client.shop_and_hero(PRIMARY_HERO_HANDLE).await?;

        let base = link_base(locale_param);
        let url = format!("{}{}/", self.origin.trim_end_matches('/'), base);
        let seo = SeoPayload::home(&shop, &url, &self.store_name);

        Ok(HomeEnvelope {
            locale: locale.clone(),
            link_base: base,
            shop,
            primary_hero: hero,
            featured_products: self.client.featured_products("featured_products"),
            secondary_hero: self
                .client
                .collection_hero("secondary_hero", SECONDARY_HERO_HANDLE),
            featured_collections: self.client.featured_collections("featured_collections"),
            tertiary_hero: self
                .client
                .collection_hero("tertiary_hero", TERTIARY_HERO_HANDLE),
            analytics: Analytics::home(),
            seo,
            cache: home_cache_policy(),
        })
    }
}
