//! Cache response headers.

use http::header::CACHE_CONTROL;

use crate::policy::RouteCachePolicy;

/// Builder for cache-related response headers.
#[derive(Debug, Default)]
pub struct CacheHeadersBuilder {
    cache_control: Option<String>,
}

impl CacheHeadersBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set Cache-Control from a policy.
    pub fn cache_control_from_policy(mut self, policy: &RouteCachePolicy) -> Self {
        self.cache_control = Some(policy.cache_control_header());
        self
    }

    /// Build `(name, value)` pairs with lower-case names.
    pub fn build(self) -> Vec<(String, String)> {
        self.cache_control
            .map(|cc| (CACHE_CONTROL.as_str().to_string(), cc))
            .into_iter()
            .collect()
    }
}
