//! Collection hero banner.

use storefront_sdk::storefront_data::Media;
use storefront_sdk::storefront_streaming::escape_html;

use crate::placeholders::HeroView;

/// Render a hero banner.
///
/// `top` heroes load their media eagerly; the rest lazily.
pub fn render_hero(hero: &HeroView, link_base: &str, top: bool) -> String {
    let class = if hero.placeholder {
        "hero hero-placeholder"
    } else {
        "hero"
    };
    let loading = if top { "eager" } else { "lazy" };

    let media: String = [&hero.spread, &hero.spread_secondary]
        .into_iter()
        .flatten()
        .map(|m| render_media(m, loading))
        .collect();

    let byline = hero
        .byline
        .as_deref()
        .map(|b| format!(r#"<p class="hero-byline">{}</p>"#, escape_html(b)))
        .unwrap_or_default();

    let cta = match (&hero.cta, &hero.handle) {
        (Some(cta), Some(handle)) => format!(
            r#"<a class="hero-cta" href="{}/collections/{}">{}</a>"#,
            escape_html(link_base),
            escape_html(handle),
            escape_html(cta)
        ),
        (Some(cta), None) => format!(r#"<span class="hero-cta">{}</span>"#, escape_html(cta)),
        _ => String::new(),
    };

    format!(
        r#"<section class="{}"{}>
    <div class="hero-media">{}</div>
    <div class="hero-content">
        <h2 class="hero-heading">{}</h2>
        {}
        {}
    </div>
</section>"#,
        class,
        if hero.placeholder { r#" aria-busy="true""# } else { "" },
        media,
        escape_html(&hero.heading),
        byline,
        cta
    )
}

fn render_media(media: &Media, loading: &str) -> String {
    let alt = escape_html(media.alt().unwrap_or_default());
    match media {
        Media::MediaImage { image, .. } => {
            let size = match (image.width, image.height) {
                (Some(w), Some(h)) => format!(r#" width="{}" height="{}""#, w, h),
                _ => String::new(),
            };
            format!(
                r#"<img class="hero-image" src="{}" alt="{}" loading="{}"{}>"#,
                escape_html(&image.url),
                alt,
                loading,
                size
            )
        }
        Media::Video {
            preview_image,
            sources,
            ..
        } => {
            let poster = preview_image
                .as_ref()
                .map(|p| format!(r#" poster="{}""#, escape_html(&p.url)))
                .unwrap_or_default();
            let sources: String = sources
                .iter()
                .map(|s| {
                    format!(
                        r#"<source src="{}" type="{}">"#,
                        escape_html(&s.url),
                        escape_html(&s.mime_type)
                    )
                })
                .collect();
            format!(
                r#"<video class="hero-video" aria-label="{}" autoplay muted loop playsinline{}>{}</video>"#,
                alt, poster, sources
            )
        }
        Media::Model3d { preview_image, .. } => preview_image
            .as_ref()
            .map(|p| {
                format!(
                    r#"<img class="hero-image" src="{}" alt="{}" loading="{}">"#,
                    escape_html(&p.url),
                    alt,
                    loading
                )
            })
            .unwrap_or_default(),
        Media::ExternalVideo { .. } => String::new(),
    }
}
