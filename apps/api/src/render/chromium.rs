//! Chromium-backed `PdfRenderer`.
//!
//! # Resource model
//! Each render launches a fresh headless Chromium, loads the markup through
//! a `data:` URL, waits for navigation to settle, and extracts the PDF via
//! CDP `Page.printToPDF`. Instances are memory- and CPU-heavy, so a
//! semaphore caps how many exist at once; requests past the cap queue on
//! permit acquisition instead of spawning unbounded processes.
//!
//! # Timeout semantics
//! The whole launch→navigate→print sequence runs under one hard wall-clock
//! timeout. A timed-out instance is treated as corrupted: it is never
//! reused, and its pool slot is released only when the underlying process
//! actually exits (the permit lives inside the blocking task, and dropping
//! the `Browser` kills the process).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use bytes::Bytes;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::render::{
    PdfRenderer, RenderError, MARGIN_IN, PAGE_HEIGHT_IN, PAGE_WIDTH_IN, PRINT_SCALE,
};

pub struct ChromiumRenderer {
    slots: Arc<Semaphore>,
    timeout: Duration,
}

impl ChromiumRenderer {
    pub fn new(pool_size: usize, timeout: Duration) -> Self {
        Self {
            slots: Arc::new(Semaphore::new(pool_size)),
            timeout,
        }
    }
}

#[async_trait]
impl PdfRenderer for ChromiumRenderer {
    async fn render(&self, markup: &str) -> Result<Bytes, RenderError> {
        if markup.trim().is_empty() {
            return Err(RenderError::InvalidInput(
                "markup document is empty".to_string(),
            ));
        }

        let permit = self
            .slots
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| RenderError::EngineUnavailable("render pool is closed".to_string()))?;

        let url = data_url(markup);
        let timeout_secs = self.timeout.as_secs();

        // Chromium's client API is blocking; keep it off the async executor.
        let task = tokio::task::spawn_blocking(move || {
            let _slot = permit; // held until the browser process is gone
            render_once(&url)
        });

        match tokio::time::timeout(self.timeout, task).await {
            Ok(Ok(result)) => {
                let pdf = result?;
                debug!(bytes = pdf.len(), "chromium render complete");
                Ok(Bytes::from(pdf))
            }
            Ok(Err(join_err)) => Err(RenderError::EngineUnavailable(format!(
                "render task failed: {join_err}"
            ))),
            Err(_) => Err(RenderError::Timeout(timeout_secs)),
        }
    }
}

/// One full engine lifecycle: launch, load, print, teardown on drop.
fn render_once(url: &str) -> Result<Vec<u8>, RenderError> {
    let options = LaunchOptions::default_builder()
        .headless(true)
        .sandbox(false)
        .build()
        .map_err(|e| RenderError::EngineUnavailable(e.to_string()))?;

    let browser = Browser::new(options)
        .map_err(|e| RenderError::EngineUnavailable(format!("failed to launch chromium: {e}")))?;

    let tab = browser
        .new_tab()
        .map_err(|e| RenderError::EngineUnavailable(format!("failed to open tab: {e}")))?;

    tab.navigate_to(url)
        .and_then(|tab| tab.wait_until_navigated())
        .map_err(|e| RenderError::EngineUnavailable(format!("failed to load markup: {e}")))?;

    tab.print_to_pdf(Some(print_options()))
        .map_err(|e| RenderError::EngineUnavailable(format!("printToPDF failed: {e}")))
}

/// Fixed print parameters shared by every job.
fn print_options() -> PrintToPdfOptions {
    PrintToPdfOptions {
        print_background: Some(true),
        scale: Some(PRINT_SCALE),
        paper_width: Some(PAGE_WIDTH_IN),
        paper_height: Some(PAGE_HEIGHT_IN),
        margin_top: Some(MARGIN_IN),
        margin_bottom: Some(MARGIN_IN),
        margin_left: Some(MARGIN_IN),
        margin_right: Some(MARGIN_IN),
        display_header_footer: Some(false),
        ..Default::default()
    }
}

/// Carries the markup into the tab without touching disk or network.
fn data_url(markup: &str) -> String {
    format!(
        "data:text/html;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(markup)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_markup_is_rejected_before_launching_an_engine() {
        let renderer = ChromiumRenderer::new(1, Duration::from_secs(5));
        let err = renderer.render("   \n  ").await.unwrap_err();
        assert!(matches!(err, RenderError::InvalidInput(_)));
    }

    #[test]
    fn test_print_options_are_fixed_a4_with_uniform_margins() {
        let opts = print_options();
        assert_eq!(opts.paper_width, Some(8.27));
        assert_eq!(opts.paper_height, Some(11.69));
        assert_eq!(opts.margin_top, Some(0.3));
        assert_eq!(opts.margin_bottom, Some(0.3));
        assert_eq!(opts.margin_left, Some(0.3));
        assert_eq!(opts.margin_right, Some(0.3));
        assert_eq!(opts.scale, Some(0.9));
        assert_eq!(opts.print_background, Some(true));
    }

    #[test]
    fn test_data_url_is_base64_encoded_html() {
        let url = data_url("<html></html>");
        assert!(url.starts_with("data:text/html;base64,"));
        let encoded = url.trim_start_matches("data:text/html;base64,");
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .unwrap();
        assert_eq!(decoded, b"<html></html>");
    }
}
