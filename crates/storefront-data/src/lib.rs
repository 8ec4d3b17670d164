//! Data access for the commerce Storefront API.
//!
//! This crate provides:
//! - `StorefrontTransport` - Seam for sending GraphQL requests
//! - `StorefrontClient` - Locale-aware typed queries
//! - `Deferred` - A query result that is resolved later
//! - Domain model for shops, collection heroes, products and collections

mod client;
mod deferred;
mod model;
mod queries;

#[cfg(target_arch = "wasm32")]
mod spin;

pub use client::*;
pub use deferred::*;
pub use model::*;
pub use queries::*;

#[cfg(target_arch = "wasm32")]
pub use spin::*;
