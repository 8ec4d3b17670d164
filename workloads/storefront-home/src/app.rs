//! Request routing and per-request wiring for the home workload.

use std::rc::Rc;

use http::Method;
use storefront_sdk::storefront_core::{
    ConfigError, LocaleResolver, RequestContext, RequestId, StorefrontConfig,
};
use storefront_sdk::storefront_data::{StorefrontClient, StorefrontTransport};
use storefront_sdk::storefront_observability::StructuredLogger;

use crate::envelope::html_headers;
use crate::loader::{home_cache_policy, HomeRouteLoader, RouteError, LOCALE_PARAM};
use crate::route::match_home_path;

/// Config embedded at build time.
pub const EMBEDDED_CONFIG: &str = include_str!("../storefront.toml");

/// The home workload, configured once per instance.
#[derive(Debug, Clone)]
pub struct HomeApp {
    config: StorefrontConfig,
    resolver: LocaleResolver,
}

impl HomeApp {
    /// Create the app from a parsed config.
    pub fn new(config: StorefrontConfig) -> Self {
        let resolver = config.locale_resolver();
        Self { config, resolver }
    }

    /// Parse a TOML config.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        StorefrontConfig::from_toml_str(content).map(Self::new)
    }

    /// The embedded `storefront.toml`.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml(EMBEDDED_CONFIG)
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Match a `GET` or `HEAD` request to the home route and resolve its
    /// locale.
    pub fn route(&self, method: &Method, path: &str) -> Result<RequestContext, RouteError> {
        if *method != Method::GET && *method != Method::HEAD {
            return Err(RouteError::MethodNotAllowed);
        }
        let locale_param = match_home_path(path).ok_or(RouteError::NotFound)?;

        let ctx = RequestContext::new(method.clone(), path, self.resolver.resolve(path));
        Ok(match locale_param {
            Some(locale) => ctx.with_param(LOCALE_PARAM, locale),
            None => ctx,
        })
    }

    /// Headers a `GET` for `ctx` would carry, without querying the API.
    ///
    /// Applies the loader's locale check so a bad locale is still a 404.
    pub fn head(&self, ctx: &RequestContext) -> Result<Vec<(String, String)>, RouteError> {
        if !ctx.locale.accepts_path_param(ctx.param(LOCALE_PARAM)) {
            return Err(RouteError::NotFound);
        }
        Ok(html_headers(&home_cache_policy(), &ctx.request_id))
    }

    /// Logger scoped to one request.
    pub fn logger(&self, request_id: &RequestId, route: &str) -> StructuredLogger {
        StructuredLogger::new(request_id.clone())
            .with_workload(self.config.workload.name.as_str())
            .with_route(route)
    }

    /// Loader for `ctx`, querying through `transport` in the request locale.
    pub fn loader(
        &self,
        ctx: &RequestContext,
        transport: Rc<dyn StorefrontTransport>,
        origin: &str,
    ) -> HomeRouteLoader {
        let client = StorefrontClient::new(transport, ctx.locale.clone());
        HomeRouteLoader::new(client)
            .with_store_name(self.config.workload.store_name.as_str())
            .with_origin(origin)
    }
}
