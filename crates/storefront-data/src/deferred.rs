//! Deferred query results.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{self, FutureExt, LocalBoxFuture};
use futures::task::noop_waker_ref;

use crate::client::FetchError;

/// A query result that is resolved after the envelope is built.
///
/// Construction does no work. `start` sends the request without waiting for
/// the response; whoever awaits the value drives it to completion. Each
/// `Deferred` is polled independently of the others.
pub struct Deferred<T> {
    label: &'static str,
    future: LocalBoxFuture<'static, Result<T, FetchError>>,
}

impl<T: 'static> Deferred<T> {
    /// Wrap a pending query.
    pub fn new<F>(label: &'static str, future: F) -> Self
    where
        F: Future<Output = Result<T, FetchError>> + 'static,
    {
        Self {
            label,
            future: future.boxed_local(),
        }
    }

    /// An already-resolved value.
    pub fn ready(label: &'static str, value: T) -> Self {
        Self::new(label, future::ready(Ok(value)))
    }

    /// An already-failed value.
    pub fn failed(label: &'static str, error: FetchError) -> Self {
        Self::new(label, future::ready(Err(error)))
    }

    /// Poll once so the request goes out now.
    ///
    /// A query that finishes on this first poll keeps its result. One still
    /// in flight registers the real waker when it is next polled.
    pub fn start(mut self) -> Self {
        let mut cx = Context::from_waker(noop_waker_ref());
        if let Poll::Ready(result) = self.future.poll_unpin(&mut cx) {
            self.future = future::ready(result).boxed_local();
        }
        self
    }

    /// Transform the resolved value.
    pub fn map<U: 'static>(self, f: impl FnOnce(T) -> U + 'static) -> Deferred<U> {
        Deferred {
            label: self.label,
            future: self.future.map(|r| r.map(f)).boxed_local(),
        }
    }
}

impl<T> Deferred<T> {
    /// Label identifying the query in logs.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<T> Future for Deferred<T> {
    type Output = Result<T, FetchError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.get_mut().future.as_mut().poll(cx)
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
