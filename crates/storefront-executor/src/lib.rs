//! Stream-as-ready section execution.
//!
//! `SectionScheduler` drives every section at once and streams each into
//! its slot in completion order. A section whose data fails to load is
//! logged and rendered empty without holding back the others.
//!
//! Hosts that cannot stream use `SectionScheduler::collect_until`, which
//! resolves sections up to a deadline and leaves the rest on their
//! placeholders.

mod scheduler;

pub use scheduler::*;
