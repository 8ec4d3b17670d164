//! Storefront API response models.
//!
//! Optional fields follow the API's nullability; a missing list or a list
//! without `nodes` deserialises to `None` rather than failing.

use serde::{Deserialize, Serialize};

/// Shop-level details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A metafield holding a plain value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metafield {
    pub value: String,
}

/// A metafield referencing a media object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaMetafield {
    #[serde(default)]
    pub reference: Option<Media>,
}

/// An image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// A preview image on non-image media.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewImage {
    pub url: String,
}

/// A video or 3D model source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSource {
    pub mime_type: String,
    pub url: String,
}

/// Media referenced by a hero spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum Media {
    #[serde(rename_all = "camelCase")]
    MediaImage {
        id: String,
        #[serde(default)]
        alt: Option<String>,
        image: Image,
    },
    #[serde(rename_all = "camelCase")]
    Video {
        id: String,
        #[serde(default)]
        alt: Option<String>,
        #[serde(default)]
        preview_image: Option<PreviewImage>,
        #[serde(default)]
        sources: Vec<MediaSource>,
    },
    #[serde(rename_all = "camelCase")]
    Model3d {
        id: String,
        #[serde(default)]
        alt: Option<String>,
        #[serde(default)]
        preview_image: Option<PreviewImage>,
    },
    #[serde(rename_all = "camelCase")]
    ExternalVideo {
        id: String,
        embed_url: String,
        #[serde(default)]
        host: Option<String>,
    },
}

impl Media {
    /// Alt text, if any.
    pub fn alt(&self) -> Option<&str> {
        match self {
            Self::MediaImage { alt, image, .. } => alt.as_deref().or(image.alt_text.as_deref()),
            Self::Video { alt, .. } | Self::Model3d { alt, .. } => alt.as_deref(),
            Self::ExternalVideo { .. } => None,
        }
    }
}

/// A collection's hero content, stored in `hero.*` metafields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionHero {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description_html: String,
    #[serde(default)]
    pub heading: Option<Metafield>,
    #[serde(default)]
    pub byline: Option<Metafield>,
    #[serde(default)]
    pub cta: Option<Metafield>,
    #[serde(default)]
    pub spread: Option<MediaMetafield>,
    #[serde(default)]
    pub spread_secondary: Option<MediaMetafield>,
}

impl CollectionHero {
    /// Heading text, falling back to the collection title.
    pub fn heading_text(&self) -> &str {
        self.heading
            .as_ref()
            .map(|m| m.value.as_str())
            .unwrap_or(&self.title)
    }

    pub fn spread_media(&self) -> Option<&Media> {
        self.spread.as_ref().and_then(|m| m.reference.as_ref())
    }

    pub fn spread_secondary_media(&self) -> Option<&Media> {
        self.spread_secondary
            .as_ref()
            .and_then(|m| m.reference.as_ref())
    }
}

/// A price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount: String,
    pub currency_code: String,
}

impl Money {
    /// Display form, e.g. "749.95 USD".
    pub fn display(&self) -> String {
        format!("{} {}", self.amount, self.currency_code)
    }
}

/// First variant of a product card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    #[serde(default)]
    pub image: Option<Image>,
    pub price: Money,
    #[serde(default)]
    pub compare_at_price: Option<Money>,
}

/// A list wrapper whose `nodes` may be absent.
///
/// A missing `nodes` key deserializes to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeList<T> {
    pub nodes: Option<Vec<T>>,
}

impl<T> NodeList<T> {
    pub fn new(nodes: Vec<T>) -> Self {
        Self { nodes: Some(nodes) }
    }
}

/// Card-sized product summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default = "empty_variants")]
    pub variants: NodeList<ProductVariant>,
}

fn empty_variants() -> NodeList<ProductVariant> {
    NodeList { nodes: None }
}

impl ProductCard {
    /// The variant shown on the card.
    pub fn first_variant(&self) -> Option<&ProductVariant> {
        self.variants.nodes.as_ref().and_then(|v| v.first())
    }

    /// Whether the first variant is discounted.
    pub fn is_on_sale(&self) -> bool {
        let Some(variant) = self.first_variant() else {
            return false;
        };
        match (&variant.compare_at_price, variant.price.amount.parse::<f64>()) {
            (Some(compare), Ok(price)) => compare
                .amount
                .parse::<f64>()
                .map(|c| c > price)
                .unwrap_or(false),
            _ => false,
        }
    }
}

/// Card-sized collection summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionCard {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub image: Option<Image>,
}

/// Result of the shop + hero query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopHero {
    pub shop: Shop,
    #[serde(default)]
    pub hero: Option<CollectionHero>,
}

/// Result of a collection hero query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionHeroResult {
    #[serde(default)]
    pub hero: Option<CollectionHero>,
}

/// Result of the featured products query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedProducts {
    #[serde(default)]
    pub products: Option<NodeList<ProductCard>>,
}

impl FeaturedProducts {
    /// Product nodes, or `None` when the list or its nodes are missing.
    pub fn nodes(&self) -> Option<&[ProductCard]> {
        self.products.as_ref()?.nodes.as_deref()
    }
}

/// Result of the featured collections query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedCollections {
    #[serde(default)]
    pub collections: Option<NodeList<CollectionCard>>,
}

impl FeaturedCollections {
    /// Collection nodes, or `None` when the list or its nodes are missing.
    pub fn nodes(&self) -> Option<&[CollectionCard]> {
        self.collections.as_ref()?.nodes.as_deref()
    }
}
