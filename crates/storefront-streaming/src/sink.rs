//! Platform-controlled streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use storefront_core::{LifecyclePhase, TimingContext, WorkloadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    Initial,
    ShellSent,
    Completed,
}

/// Streaming sink that enforces shell-first ordering.
///
/// Generic over any `Sink<Vec<u8>>`, which includes Spin's `OutgoingBody`
/// and `futures::channel::mpsc` senders.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
        }
    }

    /// Send the shell HTML. Must be called exactly once, before any section.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), WorkloadError> {
        if self.state != SinkState::Initial {
            return Err(WorkloadError::ShellAlreadySent);
        }

        self.write(html).await?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;
        Ok(())
    }

    /// Send a named section. Sections may arrive in any order after the shell.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), WorkloadError> {
        self.ensure_open()?;
        self.write(html).await?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());
        Ok(())
    }

    /// Send markup that is not a section (layout, closing tags).
    pub async fn send_raw(&mut self, html: &str) -> Result<(), WorkloadError> {
        self.ensure_open()?;
        self.write(html).await
    }

    /// Send the closing HTML and close the underlying sink.
    pub async fn complete(&mut self, closing: &str) -> Result<(), WorkloadError> {
        self.ensure_open()?;
        self.write(closing).await?;
        self.inner
            .close()
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))?;
        self.state = SinkState::Completed;
        self.timing.mark("complete");
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), WorkloadError> {
        match self.state {
            SinkState::Initial => Err(WorkloadError::ShellNotSent),
            SinkState::Completed => Err(WorkloadError::Completed),
            SinkState::ShellSent => Ok(()),
        }
    }

    async fn write(&mut self, html: &str) -> Result<(), WorkloadError> {
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))
    }

    /// Sections sent so far, in order.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match (self.state, self.sections_sent.last()) {
            (SinkState::Initial, _) => LifecyclePhase::Start,
            (SinkState::ShellSent, None) => LifecyclePhase::ShellSent,
            (SinkState::ShellSent, Some(last)) => LifecyclePhase::SectionSent(last.clone()),
            (SinkState::Completed, _) => LifecyclePhase::Completion,
        }
    }

    /// Timing marks recorded so far.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }
}
