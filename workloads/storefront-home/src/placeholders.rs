//! Default hero content shown before (or instead of) real hero data.

use serde::Serialize;
use storefront_sdk::storefront_data::{CollectionHero, Image, Media};

/// Display-ready hero fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroView {
    /// Collection handle the hero links to.
    pub handle: Option<String>,
    pub heading: String,
    pub byline: Option<String>,
    pub cta: Option<String>,
    pub spread: Option<Media>,
    pub spread_secondary: Option<Media>,
    /// Rendered as a loading skeleton.
    pub placeholder: bool,
}

impl HeroView {
    /// Fields of a resolved hero. The heading falls back to the title.
    pub fn from_hero(hero: &CollectionHero) -> Self {
        Self {
            handle: Some(hero.handle.clone()),
            heading: hero.heading_text().to_string(),
            byline: hero.byline.as_ref().map(|m| m.value.clone()),
            cta: hero.cta.as_ref().map(|m| m.value.clone()),
            spread: hero.spread_media().cloned(),
            spread_secondary: hero.spread_secondary_media().cloned(),
            placeholder: false,
        }
    }

    /// Fill this placeholder's fields with whatever `hero` provides.
    fn merged_with(mut self, hero: &CollectionHero) -> Self {
        let real = Self::from_hero(hero);
        self.handle = real.handle;
        self.heading = real.heading;
        self.byline = real.byline.or(self.byline);
        self.cta = real.cta.or(self.cta);
        self.spread = real.spread.or(self.spread);
        self.spread_secondary = real.spread_secondary.or(self.spread_secondary);
        self.placeholder = false;
        self
    }
}

const HERO_DEFAULTS: [(&str, &str, &str); 3] = [
    (
        "All Mountain All Season",
        "The All New Hydrogen Snowboard Exclusively From Shopify",
        "/images/placeholders/hero-1.jpg",
    ),
    (
        "From the Slopes to the Chalet",
        "Hydrogen Apparel Collection",
        "/images/placeholders/hero-2.jpg",
    ),
    (
        "Winter 2022",
        "Built for Any Conditions",
        "/images/placeholders/hero-3.jpg",
    ),
];

/// Default hero `index` (wrapping after three).
pub fn hero_placeholder(index: usize) -> HeroView {
    let (heading, byline, image) = HERO_DEFAULTS[index % HERO_DEFAULTS.len()];
    HeroView {
        handle: None,
        heading: heading.to_string(),
        byline: Some(byline.to_string()),
        cta: Some("Shop Now \u{2192}".to_string()),
        spread: Some(Media::MediaImage {
            id: format!("placeholder-hero-{}", index + 1),
            alt: Some(heading.to_string()),
            image: Image {
                url: image.to_string(),
                alt_text: None,
                width: Some(2500),
                height: Some(3750),
            },
        }),
        spread_secondary: None,
        placeholder: true,
    }
}

/// One hero per input position: the real hero merged over its default, or
/// the default alone where the hero is missing.
pub fn hero_placeholders(heroes: &[Option<&CollectionHero>]) -> Vec<HeroView> {
    heroes
        .iter()
        .enumerate()
        .map(|(index, hero)| {
            let placeholder = hero_placeholder(index);
            match hero {
                Some(hero) => placeholder.merged_with(hero),
                None => placeholder,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_sdk::storefront_data::Metafield;

    fn hero() -> CollectionHero {
        CollectionHero {
            id: "gid://shopify/Collection/3".into(),
            handle: "winter-2022".into(),
            title: "Winter".into(),
            description_html: String::new(),
            heading: Some(Metafield { value: "Winter Drop".into() }),
            byline: None,
            cta: None,
            spread: None,
            spread_secondary: None,
        }
    }

    #[test]
    fn test_three_defaults() {
        let all = hero_placeholders(&[None, None, None]);
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].heading, "Winter 2022");
        assert!(all.iter().all(|h| h.placeholder && h.spread.is_some()));
    }

    #[test]
    fn test_merge_keeps_defaults_for_missing_fields() {
        let hero = hero();
        let merged = hero_placeholders(&[None, None, Some(&hero)]);
        let third = &merged[2];
        assert_eq!(third.heading, "Winter Drop");
        assert_eq!(third.handle.as_deref(), Some("winter-2022"));
        assert_eq!(third.byline.as_deref(), Some("Built for Any Conditions"));
        assert!(third.spread.is_some());
        assert!(!third.placeholder);
    }

    #[test]
    fn test_from_hero_uses_title_without_heading() {
        let mut hero = hero();
        hero.heading = None;
        let view = HeroView::from_hero(&hero);
        assert_eq!(view.heading, "Winter");
        assert_eq!(view.byline, None);
        assert_eq!(view.spread, None);
    }

    #[test]
    fn test_index_wraps() {
        assert_eq!(hero_placeholder(3).heading, hero_placeholder(0).heading);
    }
}
