//! Page rendering behind a trait seam.
//!
//! The pipeline only ever talks to `Renderer`/`RenderContext`, so the
//! headless browser can be swapped for a canned implementation in tests,
//! and the fixed settle delay could later be replaced by a readiness poll
//! without touching the orchestrator.

pub mod chromium;

use anyhow::Result;
use async_trait::async_trait;

/// Result of navigating a context to a URL.
#[derive(Debug, Clone)]
pub struct NavigationResult {
    /// The final URL after redirects.
    pub final_url: String,
    /// Wall-clock load time including the settle delay, in milliseconds.
    pub load_time_ms: u64,
}

/// A browser-like engine that can hand out page contexts.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Open a fresh page context.
    async fn new_context(&self) -> Result<Box<dyn RenderContext>>;

    /// Shut the engine down. Must be safe to call on every exit path.
    async fn close(&self) -> Result<()>;
}

/// A single page: navigate it, then serialize its DOM.
#[async_trait]
pub trait RenderContext: Send {
    /// Load the URL, wait for the content-loaded milestone plus the settle
    /// delay, and report where navigation ended up.
    async fn navigate(&mut self, url: &str, timeout_ms: u64) -> Result<NavigationResult>;

    /// Serialize the current DOM to an HTML string.
    async fn content(&self) -> Result<String>;

    /// Close the page.
    async fn close(self: Box<Self>) -> Result<()>;
}
