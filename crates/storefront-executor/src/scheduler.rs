//! Section scheduler for concurrent execution.

use std::fmt::Display;
use std::future::Future;

use futures::future::{FutureExt, LocalBoxFuture};
use futures::stream::{FuturesUnordered, StreamExt};
use futures::Sink;
use storefront_core::WorkloadError;
use storefront_data::FetchError;
use storefront_observability::StructuredLogger;
use storefront_streaming::{render_swap, Section, StreamingSink};

/// Resolves to a section's HTML. An empty string renders nothing.
pub type SectionRender = LocalBoxFuture<'static, Result<String, FetchError>>;

/// Status of a section in the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionStatus {
    /// Data not resolved yet.
    Pending,
    /// Resolved and rendered.
    Completed,
    /// Data failed to load; the section rendered empty.
    Failed(String),
}

struct ScheduledSection {
    section: Section,
    status: SectionStatus,
    render: Option<SectionRender>,
}

/// Final state of one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOutcome {
    /// Section name.
    pub name: String,
    /// Final status.
    pub status: SectionStatus,
    /// HTML delivered for the section. For a section still pending at a
    /// buffered deadline this is its placeholder.
    pub html: String,
}

/// Drives deferred sections concurrently.
///
/// Sections are registered in DOM order; `slots` renders their placeholders
/// for the shell. `stream` then polls every section at once and writes each
/// one the moment its own data resolves, so a slow section never holds back
/// a fast one. A section whose data fails is logged at warn and renders
/// empty.
#[derive(Default)]
pub struct SectionScheduler {
    sections: Vec<ScheduledSection>,
}

impl SectionScheduler {
    /// Create a new scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section to the scheduler.
    pub fn add_section<F>(&mut self, section: Section, render: F)
    where
        F: Future<Output = Result<String, FetchError>> + 'static,
    {
        self.sections.push(ScheduledSection {
            section,
            status: SectionStatus::Pending,
            render: Some(render.boxed_local()),
        });
    }

    /// Builder form of `add_section`.
    pub fn with_section<F>(mut self, section: Section, render: F) -> Self
    where
        F: Future<Output = Result<String, FetchError>> + 'static,
    {
        self.add_section(section, render);
        self
    }

    /// Slot markup for every section, in registration order.
    pub fn slots(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.section.render_slot())
            .collect()
    }

    fn start(&mut self) -> FuturesUnordered<LocalBoxFuture<'static, (usize, Result<String, FetchError>)>> {
        self.sections
            .iter_mut()
            .enumerate()
            .filter_map(|(index, s)| {
                s.render
                    .take()
                    .map(|render| render.map(move |result| (index, result)).boxed_local())
            })
            .collect()
    }

    /// Record a resolved section and return the HTML it renders.
    fn settle(
        &mut self,
        index: usize,
        result: Result<String, FetchError>,
        logger: &StructuredLogger,
    ) -> String {
        let scheduled = &mut self.sections[index];
        match result {
            Ok(html) => {
                scheduled.status = SectionStatus::Completed;
                html
            }
            Err(err) => {
                let message = err.to_string();
                logger
                    .warn_builder("Section data failed to load")
                    .field("section", scheduled.section.name.as_str())
                    .field("error", message.as_str())
                    .emit();
                scheduled.status = SectionStatus::Failed(message);
                String::new()
            }
        }
    }

    fn outcomes(self, html: Vec<Option<String>>) -> Vec<SectionOutcome> {
        self.sections
            .into_iter()
            .zip(html)
            .map(|(s, html)| SectionOutcome {
                html: html
                    .or(s.section.placeholder)
                    .unwrap_or_default(),
                name: s.section.name,
                status: s.status,
            })
            .collect()
    }

    /// Stream every section into its slot in completion order.
    ///
    /// The shell (with `slots`) must already be sent. A failed section never
    /// stops the others.
    pub async fn stream<S, E>(
        mut self,
        sink: &mut StreamingSink<S, E>,
        logger: &StructuredLogger,
    ) -> Result<Vec<SectionOutcome>, WorkloadError>
    where
        S: Sink<Vec<u8>, Error = E> + Unpin,
        E: Display,
    {
        let mut delivered = vec![None; self.sections.len()];
        let mut running = self.start();

        while let Some((index, result)) = running.next().await {
            let failed = result.is_err();
            let html = self.settle(index, result, logger);
            let name = self.sections[index].section.name.clone();

            sink.send_section(&name, &render_swap(&name, &html)).await?;

            logger
                .info_builder("Section streamed")
                .field("section", name.as_str())
                .field_bool("failed", failed)
                .field_u64("bytes", html.len() as u64)
                .duration_ms("elapsed_ms", sink.timing().elapsed())
                .emit();

            delivered[index] = Some(html);
        }

        Ok(self.outcomes(delivered))
    }

    /// Resolve sections until `deadline` fires, without streaming.
    ///
    /// Sections still pending at the deadline keep their placeholder and
    /// stay `Pending` in the outcome. Outcomes are in registration order.
    pub async fn collect_until<D>(mut self, deadline: D, logger: &StructuredLogger) -> Vec<SectionOutcome>
    where
        D: Future<Output = ()>,
    {
        let mut delivered = vec![None; self.sections.len()];
        let mut running = self.start();
        let deadline = deadline.fuse();
        futures::pin_mut!(deadline);

        loop {
            futures::select! {
                next = running.next() => match next {
                    Some((index, result)) => {
                        delivered[index] = Some(self.settle(index, result, logger));
                    }
                    None => break,
                },
                _ = deadline => {
                    logger
                        .warn_builder("Buffered render deadline reached")
                        .field_u64("pending", running.len() as u64)
                        .emit();
                    break;
                }
            }
        }

        self.outcomes(delivered)
    }
}
