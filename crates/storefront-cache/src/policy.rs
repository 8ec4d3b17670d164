//! Route-level cache policies.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Who may cache the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheScope {
    /// CDN and browser.
    Public,
    /// Not cacheable.
    #[default]
    None,
}

/// Route-level cache policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteCachePolicy {
    pub scope: CacheScope,
    /// `max-age`.
    pub ttl: Duration,
    /// `stale-while-revalidate` window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_while_revalidate: Option<Duration>,
}

impl Default for RouteCachePolicy {
    fn default() -> Self {
        Self::none()
    }
}

impl RouteCachePolicy {
    /// No caching. Used for error and rejection responses.
    pub fn none() -> Self {
        Self {
            scope: CacheScope::None,
            ttl: Duration::ZERO,
            stale_while_revalidate: None,
        }
    }

    /// Public caching with a TTL.
    pub fn public(ttl: Duration) -> Self {
        Self {
            scope: CacheScope::Public,
            ttl,
            stale_while_revalidate: None,
        }
    }

    /// Short-lived public caching for pages with frequently changing data:
    /// one second fresh, nine more seconds served stale while revalidating.
    pub fn short() -> Self {
        Self::public(Duration::from_secs(1)).with_swr(Duration::from_secs(9))
    }

    /// Set stale-while-revalidate window.
    pub fn with_swr(mut self, duration: Duration) -> Self {
        self.stale_while_revalidate = Some(duration);
        self
    }

    /// Cache-Control header value.
    pub fn cache_control_header(&self) -> String {
        match self.scope {
            CacheScope::None => "no-store".to_string(),
            CacheScope::Public => match self.stale_while_revalidate {
                Some(swr) => format!(
                    "public, max-age={}, stale-while-revalidate={}",
                    self.ttl.as_secs(),
                    swr.as_secs()
                ),
                None => format!("public, max-age={}", self.ttl.as_secs()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_policy() {
        assert_eq!(
            RouteCachePolicy::short().cache_control_header(),
            "public, max-age=1, stale-while-revalidate=9"
        );
    }

    #[test]
    fn test_public_without_swr() {
        assert_eq!(
            RouteCachePolicy::public(Duration::from_secs(60)).cache_control_header(),
            "public, max-age=60"
        );
    }

    #[test]
    fn test_none_policy() {
        assert_eq!(RouteCachePolicy::none().cache_control_header(), "no-store");
        assert_eq!(RouteCachePolicy::default(), RouteCachePolicy::none());
    }

    #[test]
    fn test_none_ignores_ttl() {
        let policy = RouteCachePolicy {
            scope: CacheScope::None,
            ..RouteCachePolicy::short()
        };
        assert_eq!(policy.cache_control_header(), "no-store");
    }
}
