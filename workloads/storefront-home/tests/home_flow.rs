//! End-to-end home route flow against a mock Storefront API.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::{mpsc, oneshot};
use futures::executor::block_on;
use futures::{future, StreamExt};
use http::Method;
use serde_json::{json, Value};
use storefront_home::{
    render_buffered, stream_home, HomeApp, HomeEnvelope, HomePage, RouteError,
    FEATURED_COLLECTIONS_SECTION, FEATURED_PRODUCTS_SECTION, SECONDARY_HERO_SECTION,
    TERTIARY_HERO_SECTION,
};
use storefront_sdk::storefront_core::{RequestContext, TimingContext};
use storefront_sdk::storefront_data::{
    FetchError, GraphQlRequest, QueryVariables, StorefrontTransport,
};
use storefront_sdk::storefront_executor::SectionStatus;

type Key = (&'static str, Option<&'static str>);

const SEO: Key = ("seoCollectionContent", Some("freestyle"));
const PRODUCTS: Key = ("homepageFeaturedProducts", None);
const SECONDARY: Key = ("heroCollectionContent", Some("backcountry"));
const COLLECTIONS: Key = ("homepageFeaturedCollections", None);
const TERTIARY: Key = ("heroCollectionContent", Some("winter-2022"));

#[derive(Default)]
struct MockStorefront {
    calls: RefCell<Vec<(String, QueryVariables)>>,
    responses: HashMap<Key, Result<Value, FetchError>>,
    gates: RefCell<HashMap<Key, oneshot::Receiver<()>>>,
}

impl MockStorefront {
    fn with_defaults() -> Self {
        let mut mock = Self::default();
        mock.respond(SEO, json!({ "shop": shop(), "hero": hero("freestyle", "Ride Free") }));
        mock.respond(PRODUCTS, json!({ "products": { "nodes": products(8) } }));
        mock.respond(SECONDARY, json!({ "hero": hero("backcountry", "Backcountry") }));
        mock.respond(COLLECTIONS, json!({ "collections": { "nodes": collections(4) } }));
        mock.respond(TERTIARY, json!({ "hero": hero("winter-2022", "Winter Drop") }));
        mock
    }

    fn respond(&mut self, key: Key, data: Value) {
        self.responses.insert(key, Ok(json!({ "data": data })));
    }

    fn fail(&mut self, key: Key, error: FetchError) {
        self.responses.insert(key, Err(error));
    }

    /// Hold the response for `key` until the returned sender fires.
    fn gate(&self, key: Key) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(key, rx);
        tx
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn operations(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(op, _)| op.clone()).collect()
    }
}

#[async_trait(?Send)]
impl StorefrontTransport for MockStorefront {
    async fn post_graphql(&self, request: &GraphQlRequest) -> Result<Vec<u8>, FetchError> {
        self.calls
            .borrow_mut()
            .push((request.operation_name.to_string(), request.variables.clone()));

        let key = self
            .responses
            .keys()
            .find(|(op, handle)| {
                *op == request.operation_name && handle.map(str::to_string) == request.variables.handle
            })
            .copied()
            .ok_or_else(|| FetchError::Request(format!("unexpected {}", request.operation_name)))?;

        let gate = self.gates.borrow_mut().remove(&key);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        match &self.responses[&key] {
            Ok(body) => Ok(serde_json::to_vec(body).unwrap()),
            Err(e) => Err(e.clone()),
        }
    }
}

fn shop() -> Value {
    json!({ "name": "Snow Devil", "description": "Boards for every run" })
}

fn hero(handle: &str, heading: &str) -> Value {
    json!({
        "id": format!("gid://shopify/Collection/{}", handle),
        "handle": handle,
        "title": handle.to_uppercase(),
        "descriptionHtml": "",
        "heading": { "value": heading },
        "byline": { "value": "Built for any conditions" },
        "cta": { "value": "Shop now" },
        "spread": null,
        "spreadSecondary": null
    })
}

fn products(n: usize) -> Value {
    (0..n)
        .map(|i| {
            json!({
                "id": format!("gid://shopify/Product/{}", i),
                "title": format!("Board {}", i),
                "handle": format!("board-{}", i),
                "publishedAt": "2023-01-01T00:00:00Z",
                "variants": { "nodes": [{
                    "id": format!("gid://shopify/ProductVariant/{}", i),
                    "image": null,
                    "price": { "amount": "499.0", "currencyCode": "USD" },
                    "compareAtPrice": null
                }] }
            })
        })
        .collect()
}

fn collections(n: usize) -> Value {
    (0..n)
        .map(|i| {
            json!({
                "id": format!("gid://shopify/Collection/c{}", i),
                "title": format!("Collection {}", i),
                "handle": format!("collection-{}", i),
                "image": { "url": format!("https://cdn.example/c{}.jpg", i), "altText": null }
            })
        })
        .collect()
}

fn app() -> HomeApp {
    HomeApp::embedded().unwrap()
}

fn load(
    mock: &Rc<MockStorefront>,
    path: &str,
) -> (RequestContext, Result<HomeEnvelope, RouteError>) {
    let app = app();
    let ctx = app.route(&Method::GET, path).unwrap();
    let loader = app.loader(&ctx, mock.clone(), "https://shop.example");
    let result = block_on(loader.load(&ctx));
    (ctx, result)
}

struct Streamed {
    html: String,
    sections: Vec<String>,
    statuses: HashMap<String, SectionStatus>,
}

fn stream(ctx: &RequestContext, envelope: HomeEnvelope) -> Streamed {
    let logger = app().logger(&ctx.request_id, &ctx.path);
    let (tx, rx) = mpsc::unbounded();
    let mut sink = storefront_sdk::storefront_streaming::StreamingSink::new(tx, TimingContext::new());

    let outcomes = block_on(stream_home(envelope, &mut sink, &logger)).unwrap();
    let sections = sink.sections_sent().to_vec();
    let chunks: Vec<Vec<u8>> = block_on(rx.collect());

    Streamed {
        html: String::from_utf8(chunks.concat()).unwrap(),
        sections,
        statuses: outcomes.into_iter().map(|o| (o.name, o.status)).collect(),
    }
}

fn swap(section: &str, html: &str) -> String {
    format!(r#"<template data-section="{}">{}</template>"#, section, html)
}

#[test]
fn mismatched_locale_is_404_without_queries() {
    let mock = Rc::new(MockStorefront::with_defaults());
    let (_, result) = load(&mock, "/fr-fr");

    let err = result.unwrap_err();
    assert!(matches!(err, RouteError::NotFound));
    assert_eq!(err.status(), http::StatusCode::NOT_FOUND);
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn matching_locale_segment_proceeds() {
    let mock = Rc::new(MockStorefront::with_defaults());
    let (_, result) = load(&mock, "/EN-US");
    assert!(result.is_ok());
    assert_eq!(mock.call_count(), 5);
}

#[test]
fn loader_awaits_one_query_and_sends_four() {
    let mock = Rc::new(MockStorefront::with_defaults());
    let (ctx, result) = load(&mock, "/");
    let envelope = result.unwrap();

    assert_eq!(
        mock.operations(),
        [
            "seoCollectionContent",
            "homepageFeaturedProducts",
            "heroCollectionContent",
            "homepageFeaturedCollections",
            "heroCollectionContent",
        ]
    );
    assert_eq!(envelope.shop.name, "Snow Devil");
    assert_eq!(envelope.primary_hero.as_ref().unwrap().handle, "freestyle");
    assert_eq!(envelope.seo.title, "Snow Devil");
    assert_eq!(
        envelope.cache.cache_control_header(),
        "public, max-age=1, stale-while-revalidate=9"
    );

    let streamed = stream(&ctx, envelope);
    assert_eq!(mock.call_count(), 5);
    assert_eq!(streamed.sections.len(), 4);
    assert!(streamed
        .statuses
        .values()
        .all(|s| *s == SectionStatus::Completed));
}

#[test]
fn queries_carry_request_locale() {
    let mock = Rc::new(MockStorefront::with_defaults());
    let (ctx, result) = load(&mock, "/fr-ca");
    let envelope = result.unwrap();
    assert_eq!(envelope.link_base, "/fr-ca");

    let streamed = stream(&ctx, envelope);
    assert!(streamed.html.contains(r#"<html lang="fr">"#));
    assert!(streamed.html.contains(r#"href="/fr-ca/products/board-0""#));

    let calls = mock.calls.borrow();
    assert_eq!(calls.len(), 5);
    assert!(calls
        .iter()
        .all(|(_, vars)| vars.language == "FR" && vars.country == "CA"));
}

#[test]
fn shell_precedes_sections_and_carries_primary_hero() {
    let mock = Rc::new(MockStorefront::with_defaults());
    let (ctx, result) = load(&mock, "/");
    let streamed = stream(&ctx, result.unwrap());
    let html = &streamed.html;

    assert!(html.starts_with("<!DOCTYPE html>"));
    let hero = html.find("Ride Free").unwrap();
    let first_template = html.find("<template").unwrap();
    assert!(hero < first_template);
    assert!(html.contains(r#"<script type="application/json" id="analytics">{"pageType":"home"}</script>"#));
    assert!(html.contains(r#"<script type="application/ld+json">"#));
    assert!(html.ends_with("</html>"));
}

#[test]
fn featured_products_capped_at_four() {
    let mut mock = MockStorefront::with_defaults();
    mock.respond(PRODUCTS, json!({ "products": { "nodes": products(10) } }));
    let mock = Rc::new(mock);

    let (ctx, result) = load(&mock, "/");
    let streamed = stream(&ctx, result.unwrap());

    assert_eq!(streamed.html.matches(r#"class="product-card""#).count(), 4);
    assert!(streamed.html.contains(">Featured Products</h2>"));
    assert!(streamed.html.contains(">Collections</h2>"));
}

#[test]
fn missing_product_list_renders_empty_section() {
    for data in [json!({ "products": null }), json!({ "products": {} })] {
        let mut mock = MockStorefront::with_defaults();
        mock.respond(PRODUCTS, data);
        let mock = Rc::new(mock);

        let (ctx, result) = load(&mock, "/");
        let streamed = stream(&ctx, result.unwrap());

        assert!(streamed.html.contains(&swap(FEATURED_PRODUCTS_SECTION, "")));
        assert_eq!(
            streamed.statuses[FEATURED_PRODUCTS_SECTION],
            SectionStatus::Completed
        );
    }
}

#[test]
fn tertiary_skeleton_replaced_by_nothing_for_null_hero() {
    let mut mock = MockStorefront::with_defaults();
    mock.respond(TERTIARY, json!({ "hero": null }));
    let mock = Rc::new(mock);

    let (ctx, result) = load(&mock, "/");
    let streamed = stream(&ctx, result.unwrap());
    let html = &streamed.html;

    let slot = html.find(r#"<div id="slot-tertiary-hero""#).unwrap();
    let skeleton = html.find("hero hero-placeholder").unwrap();
    let swapped = html.find(&swap(TERTIARY_HERO_SECTION, "")).unwrap();
    assert!(slot < skeleton && skeleton < swapped);
    assert!(html[slot..].contains("Winter 2022"));
    assert_eq!(streamed.statuses[TERTIARY_HERO_SECTION], SectionStatus::Completed);
}

#[test]
fn secondary_hero_streams_as_data_island() {
    let mock = Rc::new(MockStorefront::with_defaults());
    let (ctx, result) = load(&mock, "/");
    let streamed = stream(&ctx, result.unwrap());

    assert!(streamed
        .html
        .contains(r#"<script type="application/json" id="secondary-hero-data">"#));
    assert!(streamed.html.contains(r#""handle":"backcountry""#));
    assert!(streamed.sections.contains(&SECONDARY_HERO_SECTION.to_string()));
}

#[test]
fn failing_section_does_not_block_others() {
    let mut mock = MockStorefront::with_defaults();
    mock.fail(
        COLLECTIONS,
        FetchError::Http {
            status: 502,
            url: "https://shop.example/api".into(),
        },
    );
    let mock = Rc::new(mock);

    let (ctx, result) = load(&mock, "/");
    let streamed = stream(&ctx, result.unwrap());

    assert!(matches!(
        streamed.statuses[FEATURED_COLLECTIONS_SECTION],
        SectionStatus::Failed(_)
    ));
    assert!(streamed.html.contains(&swap(FEATURED_COLLECTIONS_SECTION, "")));
    assert_eq!(streamed.html.matches(r#"class="product-card""#).count(), 4);
    assert!(streamed.html.contains("Winter Drop"));
    assert!(streamed.html.ends_with("</html>"));
}

#[test]
fn eager_failure_is_500() {
    let mut mock = MockStorefront::with_defaults();
    mock.fail(SEO, FetchError::Request("connection reset".into()));
    let mock = Rc::new(mock);

    let (_, result) = load(&mock, "/");
    let err = result.unwrap_err();
    assert!(matches!(err, RouteError::Fetch(_)));
    assert_eq!(err.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(mock.call_count(), 1);
}

#[test]
fn sections_stream_in_completion_order() {
    let mock = Rc::new(MockStorefront::with_defaults());
    let release_products = mock.gate(PRODUCTS);

    let (ctx, result) = load(&mock, "/");
    let envelope = result.unwrap();
    assert_eq!(mock.call_count(), 5);
    let logger = app().logger(&ctx.request_id, &ctx.path);
    let (tx, rx) = mpsc::unbounded();
    let mut sink = storefront_sdk::storefront_streaming::StreamingSink::new(tx, TimingContext::new());

    block_on(async {
        let (streamed, _) = futures::join!(stream_home(envelope, &mut sink, &logger), async {
            release_products.send(()).unwrap();
        });
        streamed.unwrap();
    });

    let sent = sink.sections_sent();
    assert_eq!(sent.len(), 4);
    assert_eq!(sent.last().map(String::as_str), Some(FEATURED_PRODUCTS_SECTION));
    drop(sink);

    let html = String::from_utf8(block_on(rx.collect::<Vec<Vec<u8>>>()).concat()).unwrap();
    let products = html.find(r#"<template data-section="featured-products">"#).unwrap();
    let tertiary = html.find(r#"<template data-section="tertiary-hero">"#).unwrap();
    assert!(tertiary < products);
}

#[test]
fn response_headers() {
    let mock = Rc::new(MockStorefront::with_defaults());
    let (ctx, result) = load(&mock, "/");
    let headers = result.unwrap().response_headers(&ctx.request_id);

    let get = |name: &str| {
        headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    };
    assert_eq!(get("content-type"), Some("text/html; charset=utf-8"));
    assert_eq!(
        get("cache-control"),
        Some("public, max-age=1, stale-while-revalidate=9")
    );
    assert_eq!(get("x-request-id"), Some(ctx.request_id.to_string().as_str()));
}

#[test]
fn buffered_render_fills_slots() {
    let mock = Rc::new(MockStorefront::with_defaults());
    let (ctx, result) = load(&mock, "/");
    let logger = app().logger(&ctx.request_id, &ctx.path);

    let html = block_on(render_buffered(result.unwrap(), future::pending::<()>(), &logger));

    assert!(!html.contains("<template"));
    assert!(!html.contains(r#"class="hero hero-placeholder""#));
    assert!(!html.contains(r#"aria-busy="true""#));
    assert!(html.contains("Winter Drop"));
    assert_eq!(html.matches(r#"class="product-card""#).count(), 4);
    assert!(html.ends_with("</html>"));
}

#[test]
fn buffered_render_keeps_skeleton_at_deadline() {
    let mock = Rc::new(MockStorefront::with_defaults());
    let _hold = mock.gate(TERTIARY);

    let (ctx, result) = load(&mock, "/");
    let logger = app().logger(&ctx.request_id, &ctx.path);
    let page = HomePage::new(result.unwrap());

    let (deadline_tx, deadline_rx) = oneshot::channel::<()>();
    let html = block_on(async {
        let deadline = async move {
            let _ = deadline_rx.await;
        };
        let (html, _) = futures::join!(page.render_buffered(deadline, &logger), async {
            deadline_tx.send(()).unwrap();
        });
        html
    });

    assert!(html.contains("hero hero-placeholder"));
    assert!(html.contains("Winter 2022"));
    assert_eq!(html.matches(r#"class="product-card""#).count(), 4);
}
