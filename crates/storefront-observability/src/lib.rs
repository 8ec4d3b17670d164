//! Observability for the storefront streaming SSR platform.
//!
//! `StructuredLogger` carries the request ID, workload and route into every
//! entry and hands the formatted line to `tracing`. `init_tracing` installs
//! the stderr subscriber a component uses.

mod logging;
mod subscriber;

pub use logging::*;
pub use subscriber::init_tracing;

pub use storefront_core::RequestId;
