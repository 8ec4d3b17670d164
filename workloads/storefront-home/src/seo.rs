//! SEO metadata for the home page.

use serde::Serialize;
use serde_json::json;
use storefront_sdk::storefront_data::Shop;
use storefront_sdk::storefront_streaming::HeadContent;

const DEFAULT_DESCRIPTION: &str = "The best place to buy snowboarding products";

/// Title, description and structured data for the home page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoPayload {
    pub title: String,
    pub description: String,
    /// Canonical URL of the page.
    pub url: String,
    /// JSON-LD `WebSite` document.
    pub json_ld: serde_json::Value,
}

impl SeoPayload {
    /// SEO for the home page of `shop`, served at `url`.
    ///
    /// `fallback_name` is used when the shop has no name.
    pub fn home(shop: &Shop, url: &str, fallback_name: &str) -> Self {
        let title = if shop.name.trim().is_empty() {
            fallback_name.to_string()
        } else {
            shop.name.clone()
        };
        let description = shop
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION)
            .to_string();
        let search_target = format!("{}/search?q={{search_term}}", url.trim_end_matches('/'));

        let json_ld = json!({
            "@context": "https://schema.org",
            "@type": "WebSite",
            "name": title,
            "url": url,
            "potentialAction": {
                "@type": "SearchAction",
                "target": search_target,
                "query-input": "required name=search_term",
            },
        });

        Self {
            title,
            description,
            url: url.to_string(),
            json_ld,
        }
    }

    /// Head content carrying this payload.
    pub fn head(&self) -> HeadContent {
        HeadContent::new(&self.title)
            .with_meta("description", &self.description)
            .with_meta("twitter:card", "summary_large_image")
            .with_property("og:type", "website")
            .with_property("og:title", &self.title)
            .with_property("og:description", &self.description)
            .with_property("og:url", &self.url)
            .with_canonical(&self.url)
            .with_json_ld(self.json_ld.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop(name: &str, description: Option<&str>) -> Shop {
        Shop {
            name: name.to_string(),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_home_from_shop() {
        let seo = SeoPayload::home(
            &shop("Snow Devil", Some("Boards for every run")),
            "https://shop.example/",
            "Storefront",
        );
        assert_eq!(seo.title, "Snow Devil");
        assert_eq!(seo.description, "Boards for every run");
        assert_eq!(seo.json_ld["@type"], "WebSite");
        assert_eq!(
            seo.json_ld["potentialAction"]["target"],
            "https://shop.example/search?q={search_term}"
        );
    }

    #[test]
    fn test_fallbacks() {
        let seo = SeoPayload::home(&shop(" ", Some("")), "https://shop.example", "Storefront");
        assert_eq!(seo.title, "Storefront");
        assert_eq!(seo.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_head_renders_tags() {
        let seo = SeoPayload::home(&shop("A & B", None), "https://shop.example", "Storefront");
        let html = seo.head().render();
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains(r#"<meta property="og:type" content="website">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://shop.example">"#));
        assert!(html.contains(r#"<script type="application/ld+json">"#));
    }
}
