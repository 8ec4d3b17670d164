//! Core abstractions for the storefront streaming SSR platform.
//!
//! This crate provides the fundamental types:
//! - `RequestContext` - Typed request parameters
//! - `LocaleContext` / `LocaleResolver` - Per-request storefront locale
//! - `TimingContext` - Request lifecycle timing
//! - `StorefrontConfig` - Workload configuration
//! - `WorkloadError` / `ConfigError` - Platform errors

mod config;
mod context;
mod error;
mod lifecycle;
mod locale;

pub use config::*;
pub use context::*;
pub use error::*;
pub use lifecycle::*;
pub use locale::*;
