//! Storefront API GraphQL documents.
//!
//! Every document accepts `$country` and `$language` and applies them with
//! `@inContext`, so results come back localised for the request.

/// A named GraphQL document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorefrontQuery {
    /// Operation name, used in logs.
    pub name: &'static str,
    /// Full document including fragments.
    pub document: &'static str,
}

macro_rules! media_fragment {
    () => {
        r#"
fragment Media on Media {
  __typename
  mediaContentType
  alt
  previewImage {
    url
  }
  ... on MediaImage {
    id
    image {
      url
      altText
      width
      height
    }
  }
  ... on Video {
    id
    sources {
      mimeType
      url
    }
  }
  ... on Model3d {
    id
    sources {
      mimeType
      url
    }
  }
  ... on ExternalVideo {
    id
    embedUrl
    host
  }
}
"#
    };
}

macro_rules! collection_content_fragment {
    () => {
        r#"
fragment CollectionContent on Collection {
  id
  handle
  title
  descriptionHtml
  heading: metafield(namespace: "hero", key: "title") {
    value
  }
  byline: metafield(namespace: "hero", key: "byline") {
    value
  }
  cta: metafield(namespace: "hero", key: "cta") {
    value
  }
  spread: metafield(namespace: "hero", key: "spread") {
    reference {
      ...Media
    }
  }
  spreadSecondary: metafield(namespace: "hero", key: "spread_secondary") {
    reference {
      ...Media
    }
  }
}
"#
    };
}

macro_rules! product_card_fragment {
    () => {
        r#"
fragment ProductCard on Product {
  id
  title
  publishedAt
  handle
  variants(first: 1) {
    nodes {
      id
      image {
        url
        altText
        width
        height
      }
      price {
        amount
        currencyCode
      }
      compareAtPrice {
        amount
        currencyCode
      }
    }
  }
}
"#
    };
}

/// Shop details plus one collection hero, for the page head and first paint.
pub const HOMEPAGE_SEO_QUERY: StorefrontQuery = StorefrontQuery {
    name: "seoCollectionContent",
    document: concat!(
        r#"
query seoCollectionContent($handle: String, $country: CountryCode, $language: LanguageCode)
@inContext(country: $country, language: $language) {
  hero: collection(handle: $handle) {
    ...CollectionContent
  }
  shop {
    name
    description
  }
}
"#,
        collection_content_fragment!(),
        media_fragment!()
    ),
};

/// A single collection hero by handle.
pub const COLLECTION_HERO_QUERY: StorefrontQuery = StorefrontQuery {
    name: "heroCollectionContent",
    document: concat!(
        r#"
query heroCollectionContent($handle: String, $country: CountryCode, $language: LanguageCode)
@inContext(country: $country, language: $language) {
  hero: collection(handle: $handle) {
    ...CollectionContent
  }
}
"#,
        collection_content_fragment!(),
        media_fragment!()
    ),
};

/// First 8 products as cards.
pub const HOMEPAGE_FEATURED_PRODUCTS_QUERY: StorefrontQuery = StorefrontQuery {
    name: "homepageFeaturedProducts",
    document: concat!(
        r#"
query homepageFeaturedProducts($country: CountryCode, $language: LanguageCode)
@inContext(country: $country, language: $language) {
  products(first: 8) {
    nodes {
      ...ProductCard
    }
  }
}
"#,
        product_card_fragment!()
    ),
};

/// First 4 collections, most recently updated first.
pub const FEATURED_COLLECTIONS_QUERY: StorefrontQuery = StorefrontQuery {
    name: "homepageFeaturedCollections",
    document: r#"
query homepageFeaturedCollections($country: CountryCode, $language: LanguageCode)
@inContext(country: $country, language: $language) {
  collections(first: 4, sortKey: UPDATED_AT, reverse: true) {
    nodes {
      id
      title
      handle
      image {
        altText
        width
        height
        url
      }
    }
  }
}
"#,
};
