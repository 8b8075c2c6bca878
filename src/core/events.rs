//! Framework signals for cache invalidation and navigation
//!
//! Mutations do not call into the hosting framework directly; they go
//! through the [`SiteHooks`] capability. The [`EventBus`] implementation
//! decouples mutations from whatever reacts to them: it publishes
//! [`SiteEvent`] values on a `tokio::sync::broadcast` channel that any
//! number of subscribers (a render-cache layer, a navigation shell, a test)
//! can consume.
//!
//! ```text
//! create/update/delete ──▶ SiteHooks ──▶ broadcast channel ──▶ subscribers
//! ```
//!
//! Tests and hosts that do not care about signals inject [`NoopHooks`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

/// A signal to the hosting framework, emitted after a successful mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SiteEvent {
    /// Cached renders of `path` should be discarded
    PathRevalidated { path: String },

    /// The caller should be navigated to `path`
    RedirectIssued { path: String },
}

impl SiteEvent {
    /// The path this event relates to
    pub fn path(&self) -> &str {
        match self {
            SiteEvent::PathRevalidated { path } => path,
            SiteEvent::RedirectIssued { path } => path,
        }
    }
}

/// Capability the mutation service depends on for framework side effects
#[async_trait]
pub trait SiteHooks: Send + Sync {
    /// Ask the framework to discard cached renders of `path`
    async fn revalidate_path(&self, path: &str);

    /// Ask the framework to navigate the caller to `path`
    async fn redirect(&self, path: &str);
}

/// Hooks implementation that does nothing (tests, headless hosts)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

#[async_trait]
impl SiteHooks for NoopHooks {
    async fn revalidate_path(&self, _path: &str) {}

    async fn redirect(&self, _path: &str) {}
}

/// Broadcast-backed hooks implementation.
///
/// Publishing is fire-and-forget: a send with no live subscribers is not an
/// error, mutations must never fail because nobody is listening.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<SiteEvent>,
}

impl EventBus {
    /// Create a new event bus with the given channel capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish an event to all current subscribers
    pub fn publish(&self, event: SiteEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!("Site event dropped: no subscribers");
        }
    }

    /// Subscribe to events published after this call
    pub fn subscribe(&self) -> broadcast::Receiver<SiteEvent> {
        self.tx.subscribe()
    }

    /// Subscribe as an async stream
    pub fn stream(&self) -> BroadcastStream<SiteEvent> {
        BroadcastStream::new(self.tx.subscribe())
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[async_trait]
impl SiteHooks for EventBus {
    async fn revalidate_path(&self, path: &str) {
        self.publish(SiteEvent::PathRevalidated {
            path: path.to_string(),
        });
    }

    async fn redirect(&self, path: &str) {
        self.publish(SiteEvent::RedirectIssued {
            path: path.to_string(),
        });
    }
}
