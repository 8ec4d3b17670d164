//! Horizontal product list.

use storefront_sdk::storefront_data::ProductCard;
use storefront_sdk::storefront_streaming::escape_html;

/// Render up to `count` products as a titled swimlane.
pub fn render_product_swimlane(
    products: &[ProductCard],
    title: &str,
    count: usize,
    link_base: &str,
) -> String {
    let cards: String = products
        .iter()
        .take(count)
        .map(|p| render_product_card(p, link_base))
        .collect();

    format!(
        r#"<section class="swimlane" aria-label="{title}">
    <h2 class="section-title">{title}</h2>
    <div class="swimlane-track">{cards}</div>
</section>"#,
        title = escape_html(title),
        cards = cards
    )
}

fn render_product_card(product: &ProductCard, link_base: &str) -> String {
    let variant = product.first_variant();

    let image = variant
        .and_then(|v| v.image.as_ref())
        .map(|img| {
            format!(
                r#"<img class="card-image" src="{}" alt="{}" loading="lazy">"#,
                escape_html(&img.url),
                escape_html(img.alt_text.as_deref().unwrap_or(product.title.as_str()))
            )
        })
        .unwrap_or_default();

    let label = if product.is_on_sale() {
        r#"<span class="card-label">Sale</span>"#
    } else {
        ""
    };

    let price = variant
        .map(|v| {
            let compare = v
                .compare_at_price
                .as_ref()
                .filter(|_| product.is_on_sale())
                .map(|c| format!(r#" <s class="card-compare">{}</s>"#, escape_html(&c.display())))
                .unwrap_or_default();
            format!(
                r#"<p class="card-price">{}{}</p>"#,
                escape_html(&v.price.display()),
                compare
            )
        })
        .unwrap_or_default();

    format!(
        r#"<a class="product-card" href="{}/products/{}" data-product-id="{}">{}{}<h3 class="card-title">{}</h3>{}</a>"#,
        escape_html(link_base),
        escape_html(&product.handle),
        escape_html(&product.id),
        label,
        image,
        escape_html(&product.title),
        price
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_sdk::storefront_data::{Money, NodeList, ProductVariant};

    fn product(i: usize, compare_at: Option<&str>) -> ProductCard {
        ProductCard {
            id: format!("gid://shopify/Product/{}", i),
            title: format!("Board {}", i),
            handle: format!("board-{}", i),
            published_at: None,
            variants: NodeList::new(vec![ProductVariant {
                id: format!("gid://shopify/ProductVariant/{}", i),
                image: None,
                price: Money {
                    amount: "100.0".into(),
                    currency_code: "USD".into(),
                },
                compare_at_price: compare_at.map(|amount| Money {
                    amount: amount.into(),
                    currency_code: "USD".into(),
                }),
            }]),
        }
    }

    #[test]
    fn test_caps_at_count() {
        let products: Vec<_> = (0..10).map(|i| product(i, None)).collect();
        let html = render_product_swimlane(&products, "Featured Products", 4, "");
        assert_eq!(html.matches("class=\"product-card\"").count(), 4);
        assert!(html.contains("<h2 class=\"section-title\">Featured Products</h2>"));
        assert!(html.contains(r#"href="/products/board-0""#));
        assert!(!html.contains("board-4"));
    }

    #[test]
    fn test_sale_label() {
        let html = render_product_swimlane(&[product(1, Some("150.0"))], "Deals", 4, "/en-ca");
        assert!(html.contains(r#"<span class="card-label">Sale</span>"#));
        assert!(html.contains("<s class=\"card-compare\">150.0 USD</s>"));
        assert!(html.contains(r#"href="/en-ca/products/board-1""#));
    }

    #[test]
    fn test_empty_list() {
        let html = render_product_swimlane(&[], "Featured Products", 4, "");
        assert!(html.contains(r#"<div class="swimlane-track"></div>"#));
    }
}
