//! Featured collections grid.

use storefront_sdk::storefront_data::CollectionCard;
use storefront_sdk::storefront_streaming::escape_html;

/// Render collections as a titled grid. Collections without an image are
/// left out.
pub fn render_featured_collections(
    collections: &[CollectionCard],
    title: &str,
    link_base: &str,
) -> String {
    let cards: String = collections
        .iter()
        .filter_map(|c| {
            let image = c.image.as_ref()?;
            Some(format!(
                r#"<a class="collection-card" href="{}/collections/{}"><img class="card-image" src="{}" alt="{}" loading="lazy"><h3 class="card-title">{}</h3></a>"#,
                escape_html(link_base),
                escape_html(&c.handle),
                escape_html(&image.url),
                escape_html(image.alt_text.as_deref().unwrap_or(c.title.as_str())),
                escape_html(&c.title)
            ))
        })
        .collect();

    format!(
        r#"<section class="collections" aria-label="{title}">
    <h2 class="section-title">{title}</h2>
    <div class="collections-grid">{cards}</div>
</section>"#,
        title = escape_html(title),
        cards = cards
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_sdk::storefront_data::Image;

    fn collection(handle: &str, image: bool) -> CollectionCard {
        CollectionCard {
            id: format!("gid://shopify/Collection/{}", handle),
            title: handle.to_uppercase(),
            handle: handle.to_string(),
            image: image.then(|| Image {
                url: format!("https://cdn.example/{}.jpg", handle),
                alt_text: None,
                width: None,
                height: None,
            }),
        }
    }

    #[test]
    fn test_grid() {
        let html = render_featured_collections(
            &[collection("snowboards", true), collection("wax", false)],
            "Collections",
            "",
        );
        assert!(html.contains("<h2 class=\"section-title\">Collections</h2>"));
        assert!(html.contains(r#"href="/collections/snowboards""#));
        assert!(html.contains(r#"alt="SNOWBOARDS""#));
        assert!(!html.contains("/collections/wax"));
    }
}
