//! Workload configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::locale::{LocaleContext, LocaleResolver};

/// Storefront workload configuration, usually loaded from `storefront.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Workload identity.
    #[serde(default)]
    pub workload: WorkloadConfig,

    /// Commerce API connection.
    pub api: ApiConfig,

    /// Locale defaults.
    #[serde(default)]
    pub locale: LocaleConfig,
}

/// Workload identity used in logs and response headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Workload name.
    pub name: String,
    /// Human-facing store name used when the shop query has none.
    #[serde(default = "default_store_name")]
    pub store_name: String,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            name: "storefront-home".to_string(),
            store_name: default_store_name(),
        }
    }
}

fn default_store_name() -> String {
    "Storefront".to_string()
}

/// Storefront API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Shop domain (e.g., "my-shop.myshopify.com").
    pub store_domain: String,
    /// Storefront API version (e.g., "2023-04").
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Public storefront access token.
    pub public_access_token: String,
}

fn default_api_version() -> String {
    "2023-04".to_string()
}

impl ApiConfig {
    /// GraphQL endpoint URL.
    pub fn graphql_endpoint(&self) -> String {
        let domain = self
            .store_domain
            .trim_start_matches("https://")
            .trim_end_matches('/');
        format!("https://{}/api/{}/graphql.json", domain, self.api_version)
    }
}

/// Locale configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Locale used when the path carries no supported prefix.
    #[serde(default)]
    pub default: LocaleContext,
    /// Additional path-prefixed locales.
    #[serde(default)]
    pub supported: Vec<LocaleContext>,
}

impl StorefrontConfig {
    /// Parse and validate a TOML config document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Build the locale resolver for this storefront.
    pub fn locale_resolver(&self) -> LocaleResolver {
        LocaleResolver::new(self.locale.default.clone())
            .with_supported(self.locale.supported.iter().cloned())
    }

    fn normalize(&mut self) {
        let fix = |l: &LocaleContext| LocaleContext::new(&l.language, &l.country);
        self.locale.default = fix(&self.locale.default);
        self.locale.supported = self.locale.supported.iter().map(fix).collect();
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.store_domain.trim().is_empty() {
            return Err(ConfigError::Invalid("api.store_domain is empty".to_string()));
        }
        if self.api.public_access_token.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "api.public_access_token is empty".to_string(),
            ));
        }
        let locales = std::iter::once(&self.locale.default).chain(&self.locale.supported);
        for locale in locales {
            if LocaleContext::from_path_segment(&locale.path_prefix()).is_none() {
                return Err(ConfigError::Invalid(format!("invalid locale: {}", locale)));
            }
        }
        Ok(())
    }
}
