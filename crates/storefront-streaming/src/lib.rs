//! Streaming primitives for shell-first SSR.
//!
//! This crate enforces shell-first streaming patterns:
//! - `StreamingSink` - Shell before sections, nothing after completion
//! - `Shell` / `HeadContent` - Page template around the sections
//! - `Section` - Named, independently resolved page parts
//! - `render_slot` / `render_swap` - Out-of-order section delivery

mod escape;
mod section;
mod shell;
mod sink;
mod slots;

pub use escape::*;
pub use section::*;
pub use shell::*;
pub use sink::*;
pub use slots::*;
