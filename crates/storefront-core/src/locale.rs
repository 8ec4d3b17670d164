//! Storefront locale context and path-based resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language and country pair identifying a storefront content variant.
///
/// Codes are stored upper-cased, matching the commerce API's
/// `LanguageCode` and `CountryCode` enums.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocaleContext {
    /// ISO language code (e.g., "EN").
    pub language: String,
    /// ISO country code (e.g., "US").
    pub country: String,
}

impl LocaleContext {
    /// Create a locale context, normalising codes to upper case.
    pub fn new(language: impl AsRef<str>, country: impl AsRef<str>) -> Self {
        Self {
            language: language.as_ref().to_uppercase(),
            country: country.as_ref().to_uppercase(),
        }
    }

    /// Parse a `{language}-{country}` path segment (e.g., "fr-ca").
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        let (language, country) = segment.split_once('-')?;
        let valid = |code: &str| code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic());
        if !valid(language) || !valid(country) {
            return None;
        }
        Some(Self::new(language, country))
    }

    /// The lower-cased `{language}-{country}` path prefix.
    pub fn path_prefix(&self) -> String {
        format!("{}-{}", self.language, self.country).to_lowercase()
    }

    /// Check a `locale` path parameter against this context.
    ///
    /// An absent parameter always matches; a present one must equal
    /// `{language}-{country}` ignoring case.
    pub fn accepts_path_param(&self, param: Option<&str>) -> bool {
        match param {
            None => true,
            Some(locale) => locale.to_lowercase() == self.path_prefix(),
        }
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new("EN", "US")
    }
}

impl fmt::Display for LocaleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.language, self.country)
    }
}

/// Resolves the active locale for a request from its path.
///
/// The first path segment selects a supported locale; anything else falls
/// back to the default, which is never path-prefixed.
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    default: LocaleContext,
    supported: Vec<LocaleContext>,
}

impl LocaleResolver {
    /// Create a resolver with a default locale.
    pub fn new(default: LocaleContext) -> Self {
        Self {
            default,
            supported: Vec::new(),
        }
    }

    /// Add supported locales.
    pub fn with_supported(mut self, locales: impl IntoIterator<Item = LocaleContext>) -> Self {
        self.supported.extend(locales);
        self
    }

    /// Default locale.
    pub fn default_locale(&self) -> &LocaleContext {
        &self.default
    }

    /// Resolve the locale for a request path.
    pub fn resolve(&self, path: &str) -> LocaleContext {
        let first = path
            .trim_start_matches('/')
            .split(['/', '?'])
            .next()
            .unwrap_or_default();

        LocaleContext::from_path_segment(first)
            .and_then(|candidate| self.supported.iter().find(|l| **l == candidate).cloned())
            .unwrap_or_else(|| self.default.clone())
    }
}
