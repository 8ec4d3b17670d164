//! Cache policies for storefront routes.
//!
//! This crate provides:
//! - `RouteCachePolicy` - Route-level `Cache-Control` policy with presets
//!   (`short`, `none`)
//! - `CacheHeadersBuilder` - Response cache headers from a policy
//!
//! # Example
//!
//! ```
//! use storefront_cache::{CacheHeadersBuilder, RouteCachePolicy};
//!
//! let headers = CacheHeadersBuilder::new()
//!     .cache_control_from_policy(&RouteCachePolicy::short())
//!     .build();
//! assert_eq!(headers[0].1, "public, max-age=1, stale-while-revalidate=9");
//! ```

mod headers;
mod policy;

pub use headers::*;
pub use policy::*;
