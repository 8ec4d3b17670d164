//! Public SDK for the storefront streaming SSR platform.
//!
//! This crate re-exports all platform functionality:
//!
//! ```ignore
//! use storefront_sdk::prelude::*;
//!
//! async fn handle(ctx: RequestContext, client: StorefrontClient, sink: &mut StreamingSink<S, E>)
//!     -> Result<(), WorkloadError>
//! {
//!     let logger = StructuredLogger::new(ctx.request_id.clone());
//!     let shop = client.shop_and_hero("freestyle").await?;
//!
//!     let mut scheduler = SectionScheduler::new();
//!     scheduler.add_section(Section::new("products"), async move {
//!         client.featured_products("products").await.map(|p| render(&p))
//!     });
//!
//!     sink.send_shell(&shell(&shop, &scheduler.slots())).await?;
//!     scheduler.stream(sink, &logger).await?;
//!     sink.complete("</body></html>").await
//! }
//! ```

pub use storefront_cache;
pub use storefront_core;
pub use storefront_data;
pub use storefront_executor;
pub use storefront_observability;
pub use storefront_streaming;

/// Prelude for convenient imports.
pub mod prelude {
    pub use storefront_cache::*;
    pub use storefront_core::*;
    pub use storefront_data::*;
    pub use storefront_executor::*;
    pub use storefront_observability::*;
    pub use storefront_streaming::*;
}
