//! Request scopes: tie in-flight requests to the lifetime of a view.
//!
//! A view creates one [`RequestScope`] when it mounts and cancels (or drops) it
//! when it unmounts. Requests run through the scope stop as soon as that
//! happens; the underlying future is dropped, which aborts the HTTP request, and
//! the caller gets [`Cancelled`] instead of a result it would write into a
//! disposed view.

use std::future::Future;

use tokio::sync::watch;

use crate::error::Cancelled;

#[derive(Debug)]
pub struct RequestScope {
    name: String,
    cancel: watch::Sender<bool>,
}

impl RequestScope {
    pub fn new(name: impl Into<String>) -> Self {
        let (cancel, _) = watch::channel(false);
        Self {
            name: name.into(),
            cancel,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cancel(&self) {
        if !self.cancel.send_replace(true) {
            tracing::debug!(scope = %self.name, "request scope cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel.borrow()
    }

    /// A detached handle, e.g. for a spawned task. The handle observes
    /// cancellation and also treats a dropped scope as cancelled.
    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            cancelled: self.cancel.subscribe(),
        }
    }

    /// Run `fut` unless the scope is (or becomes) cancelled first.
    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output, Cancelled> {
        self.handle().run(fut).await
    }
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Debug, Clone)]
pub struct ScopeHandle {
    cancelled: watch::Receiver<bool>,
}

impl ScopeHandle {
    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.borrow() || self.cancelled.has_changed().is_err()
    }

    pub async fn run<F: Future>(mut self, fut: F) -> Result<F::Output, Cancelled> {
        if self.is_cancelled() {
            return Err(Cancelled);
        }

        tokio::select! {
            biased;
            _ = self.cancelled.wait_for(|cancelled| *cancelled) => Err(Cancelled),
            out = fut => Ok(out),
        }
    }
}
