//! Home page view: shell first, then each deferred section as it resolves.

use std::fmt::Display;
use std::future::Future;

use futures::Sink;
use storefront_sdk::storefront_core::WorkloadError;
use storefront_sdk::storefront_data::{
    CollectionHeroResult, FeaturedCollections, FeaturedProducts, FetchError,
};
use storefront_sdk::storefront_executor::{SectionOutcome, SectionScheduler};
use storefront_sdk::storefront_observability::StructuredLogger;
use storefront_sdk::storefront_streaming::{
    escape_html, render_slot, Section, Shell, StreamingSink, SLOT_SWAP_SCRIPT,
};

use crate::envelope::HomeEnvelope;
use crate::placeholders::{hero_placeholders, HeroView};
use crate::sections::{
    render_data_island, render_featured_collections, render_hero, render_product_swimlane,
};
use crate::styles::HOME_STYLES;

pub const FEATURED_PRODUCTS_SECTION: &str = "featured-products";
pub const SECONDARY_HERO_SECTION: &str = "secondary-hero";
pub const FEATURED_COLLECTIONS_SECTION: &str = "featured-collections";
pub const TERTIARY_HERO_SECTION: &str = "tertiary-hero";

/// Products shown in the swimlane, out of the eight fetched.
pub const FEATURED_PRODUCTS_COUNT: usize = 4;

/// Shell plus the sections still to resolve.
pub struct HomePage {
    shell: Shell,
    scheduler: SectionScheduler,
}

impl HomePage {
    /// Lay out the page. No section is awaited yet.
    pub fn new(envelope: HomeEnvelope) -> Self {
        let HomeEnvelope {
            locale,
            link_base,
            shop,
            primary_hero,
            featured_products,
            secondary_hero,
            featured_collections,
            tertiary_hero,
            analytics,
            seo,
            cache: _,
        } = envelope;

        let skeletons = hero_placeholders(&[None, None, None]);

        let mut scheduler = SectionScheduler::new();
        let base = link_base.clone();
        scheduler.add_section(
            Section::new(FEATURED_PRODUCTS_SECTION),
            featured_products.map(move |result| render_featured_products(&result, &base)),
        );
        scheduler.add_section(Section::new(SECONDARY_HERO_SECTION), secondary_hero_island(secondary_hero));
        let base = link_base.clone();
        scheduler.add_section(
            Section::new(FEATURED_COLLECTIONS_SECTION),
            featured_collections.map(move |result| render_collections(&result, &base)),
        );
        let base = link_base.clone();
        scheduler.add_section(
            Section::builder(TERTIARY_HERO_SECTION)
                .with_placeholder(render_hero(&skeletons[2], &link_base, false))
                .build(),
            tertiary_hero.map(move |result| render_resolved_hero(&result, &base)),
        );

        // Loaded alongside the shop for SEO; it has no slot of its own, so
        // the already-resolved hero tops the shell.
        let primary = primary_hero
            .as_ref()
            .map(|hero| render_hero(&HeroView::from_hero(hero), &link_base, true))
            .unwrap_or_default();
        let analytics_island = render_data_island("analytics", &analytics).unwrap_or_default();

        let head = seo
            .head()
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(HOME_STYLES)
            .with_script(SLOT_SWAP_SCRIPT);

        let home_href = if link_base.is_empty() { "/" } else { link_base.as_str() };

        let shell = Shell::new(head)
            .with_lang(locale.language.to_lowercase())
            .with_body_start(format!(
                r#"<header class="site-header"><a class="logo" href="{}">{}</a></header>
{}
<main>
{}
"#,
                escape_html(home_href),
                escape_html(&shop.name),
                analytics_island,
                primary
            ))
            .with_body_end(format!(
                r#"</main>
<footer class="site-footer"><p>&copy; {}</p></footer>
</body>
</html>"#,
                escape_html(&shop.name)
            ));

        Self { shell, scheduler }
    }

    /// Opening HTML with every section's slot in DOM order.
    pub fn opening(&self) -> String {
        let mut html = self.shell.render_opening();
        html.push_str(&self.scheduler.slots());
        html
    }

    /// Stream the page: shell first, then sections in completion order.
    pub async fn stream<S, E>(
        self,
        sink: &mut StreamingSink<S, E>,
        logger: &StructuredLogger,
    ) -> Result<Vec<SectionOutcome>, WorkloadError>
    where
        S: Sink<Vec<u8>, Error = E> + Unpin,
        E: Display,
    {
        sink.send_shell(&self.opening()).await?;

        let mut shell_log = logger.info_builder("Shell sent");
        if let Some(elapsed) = sink.timing().time_to_shell() {
            shell_log = shell_log.duration_ms("time_to_shell_ms", elapsed);
        }
        shell_log.emit();

        let outcomes = self.scheduler.stream(sink, logger).await?;
        sink.complete(&self.shell.render_closing()).await?;

        logger
            .info_builder("Response complete")
            .field_u64("sections", outcomes.len() as u64)
            .duration_ms("total_ms", sink.timing().elapsed())
            .emit();

        Ok(outcomes)
    }

    /// Resolve sections until `deadline` and return the whole document.
    pub async fn render_buffered<D>(self, deadline: D, logger: &StructuredLogger) -> String
    where
        D: Future<Output = ()>,
    {
        let mut html = self.shell.render_opening();
        let outcomes = self.scheduler.collect_until(deadline, logger).await;
        for outcome in &outcomes {
            html.push_str(&render_slot(&outcome.name, Some(outcome.html.as_str())));
        }
        html.push_str(&self.shell.render_closing());
        html
    }
}

/// Stream the home page for `envelope` into `sink`.
pub async fn stream_home<S, E>(
    envelope: HomeEnvelope,
    sink: &mut StreamingSink<S, E>,
    logger: &StructuredLogger,
) -> Result<Vec<SectionOutcome>, WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    HomePage::new(envelope).stream(sink, logger).await
}

/// Render the whole home page at once, for hosts that cannot stream.
///
/// Sections still pending when `deadline` resolves keep their placeholder.
pub async fn render_buffered<D>(envelope: HomeEnvelope, deadline: D, logger: &StructuredLogger) -> String
where
    D: Future<Output = ()>,
{
    HomePage::new(envelope).render_buffered(deadline, logger).await
}

/// Generic page for a failed request.
pub fn render_error_page() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Something went wrong</title></head>
<body><main><h1>Something went wrong</h1><p>We couldn't load this page. Please try again.</p></main></body>
</html>"#
        .to_string()
}

fn render_featured_products(result: &FeaturedProducts, link_base: &str) -> String {
    match result.nodes() {
        Some(products) => render_product_swimlane(
            products,
            "Featured Products",
            FEATURED_PRODUCTS_COUNT,
            link_base,
        ),
        None => String::new(),
    }
}

fn render_collections(result: &FeaturedCollections, link_base: &str) -> String {
    match result.nodes() {
        Some(collections) => render_featured_collections(collections, "Collections", link_base),
        None => String::new(),
    }
}

fn render_resolved_hero(result: &CollectionHeroResult, link_base: &str) -> String {
    match &result.hero {
        Some(hero) => render_hero(&HeroView::from_hero(hero), link_base, false),
        None => String::new(),
    }
}

async fn secondary_hero_island(
    hero: impl Future<Output = Result<CollectionHeroResult, FetchError>>,
) -> Result<String, FetchError> {
    let result = hero.await?;
    render_data_island("secondary-hero-data", &result)
        .map_err(|e| FetchError::Deserialization(e.to_string()))
}
