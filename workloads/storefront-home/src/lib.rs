//! Storefront home page - streaming SSR workload.
//!
//! One eager query (shop and primary hero) runs before the shell is built.
//! Four more (featured products, secondary hero, featured collections,
//! tertiary hero) are deferred: the shell streams first and each section is
//! swapped into its slot the moment its own data arrives.

mod app;
mod envelope;
mod loader;
mod placeholders;
mod route;
mod sections;
mod seo;
mod styles;
mod view;

#[cfg(target_arch = "wasm32")]
mod component;

pub use app::*;
pub use envelope::*;
pub use loader::*;
pub use placeholders::*;
pub use route::*;
pub use sections::*;
pub use seo::*;
pub use view::*;
