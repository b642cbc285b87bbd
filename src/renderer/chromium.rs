//! Headless Chromium renderer via chromiumoxide.

use super::{NavigationResult, RenderContext, Renderer};
use anyhow::{anyhow, Context as _, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Headless Chromium with a Korean locale, launched once per run.
///
/// No persistent profile: every launch starts from a clean slate.
pub struct ChromiumRenderer {
    browser: Mutex<Browser>,
    handler_task: JoinHandle<()>,
    settle: Duration,
}

impl ChromiumRenderer {
    /// Launch the browser and spawn its CDP event handler.
    pub async fn launch(settle_ms: u64) -> Result<Self> {
        let config = BrowserConfig::builder()
            .args(["--lang=ko-KR", "--accept-lang=ko-KR"])
            .build()
            .map_err(|e| anyhow!("invalid browser config: {e}"))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("launching headless Chromium")?;

        // The handler must be polled for the browser connection to make
        // progress; it ends when the browser goes away.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        info!("headless Chromium launched (locale ko-KR)");

        Ok(Self {
            browser: Mutex::new(browser),
            handler_task,
            settle: Duration::from_millis(settle_ms),
        })
    }
}

#[async_trait]
impl Renderer for ChromiumRenderer {
    async fn new_context(&self) -> Result<Box<dyn RenderContext>> {
        let page = self
            .browser
            .lock()
            .await
            .new_page("about:blank")
            .await
            .context("opening browser page")?;

        Ok(Box::new(ChromiumContext {
            page,
            settle: self.settle,
        }))
    }

    async fn close(&self) -> Result<()> {
        let mut browser = self.browser.lock().await;
        browser.close().await.context("closing browser")?;
        browser.wait().await.ok();
        self.handler_task.abort();
        debug!("browser shut down");
        Ok(())
    }
}

struct ChromiumContext {
    page: Page,
    settle: Duration,
}

#[async_trait]
impl RenderContext for ChromiumContext {
    async fn navigate(&mut self, url: &str, timeout_ms: u64) -> Result<NavigationResult> {
        let start = Instant::now();

        tokio::time::timeout(Duration::from_millis(timeout_ms), async {
            self.page.goto(url).await?;
            self.page.wait_for_navigation().await?;
            Ok::<_, anyhow::Error>(())
        })
        .await
        .map_err(|_| anyhow!("navigation timed out after {timeout_ms}ms"))??;

        // Let client-side widget rendering settle before scraping.
        tokio::time::sleep(self.settle).await;

        let final_url = self
            .page
            .url()
            .await
            .context("reading final url")?
            .unwrap_or_else(|| url.to_string());

        Ok(NavigationResult {
            final_url,
            load_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    async fn content(&self) -> Result<String> {
        self.page.content().await.context("serializing page DOM")
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.page.close().await.context("closing page")
    }
}
