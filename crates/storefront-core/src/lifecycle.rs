//! Request lifecycle tracking.

use std::time::{Duration, Instant};

/// Lifecycle phases for a streamed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Request received, nothing written yet.
    Start,
    /// Shell HTML has been written.
    ShellSent,
    /// The most recent section written.
    SectionSent(String),
    /// Response completed.
    Completion,
}

/// Named timing marks relative to request start.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: Vec<(String, Duration)>,
}

impl TimingContext {
    /// Create a new timing context starting now.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: Vec::new(),
        }
    }

    /// Record a timing mark. Re-marking a name keeps the first value.
    pub fn mark(&mut self, name: &str) {
        if self.get(name).is_none() {
            self.marks.push((name.to_string(), self.start.elapsed()));
        }
    }

    /// Mark a section as written.
    pub fn mark_section_sent(&mut self, section: &str) {
        self.mark(&format!("section:{}", section));
    }

    /// Offset of a mark from request start.
    pub fn get(&self, name: &str) -> Option<Duration> {
        self.marks
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, offset)| *offset)
    }

    /// Time at which a section was written.
    pub fn section_sent(&self, section: &str) -> Option<Duration> {
        self.get(&format!("section:{}", section))
    }

    /// Time to shell flush.
    pub fn time_to_shell(&self) -> Option<Duration> {
        self.get("shell_sent")
    }

    /// Time to the first section after the shell.
    pub fn time_to_first_section(&self) -> Option<Duration> {
        self.marks
            .iter()
            .filter(|(n, _)| n.starts_with("section:"))
            .map(|(_, offset)| *offset)
            .min()
    }

    /// Sections in the order they were written.
    pub fn sections_in_order(&self) -> Vec<&str> {
        self.marks
            .iter()
            .filter_map(|(n, _)| n.strip_prefix("section:"))
            .collect()
    }

    /// Elapsed time since request start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}
