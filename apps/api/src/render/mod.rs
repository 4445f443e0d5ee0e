//! Render Driver — synthesized markup → paginated PDF bytes.
//!
//! `PdfRenderer` is the seam: `AppState` holds an `Arc<dyn PdfRenderer>`, so
//! the production Chromium backend can be swapped for a stub in handler
//! tests without touching any caller.
//!
//! Print parameters are fixed constants, identical for every job — visual
//! differences between templates come only from the markup, never from
//! print settings.

pub mod chromium;
pub mod handlers;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// A4 page, in inches, as Chromium's printToPDF expects.
pub const PAGE_WIDTH_IN: f64 = 8.27;
pub const PAGE_HEIGHT_IN: f64 = 11.69;
/// Uniform page margin, inches.
pub const MARGIN_IN: f64 = 0.3;
/// Print scale applied to every job.
pub const PRINT_SCALE: f64 = 0.9;

/// Failure modes of a single render. None of these are retried here —
/// retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Malformed caller input; retrying without a fix cannot succeed.
    #[error("invalid render input: {0}")]
    InvalidInput(String),

    /// The engine process could not be started or died mid-render.
    #[error("render engine unavailable: {0}")]
    EngineUnavailable(String),

    /// Layout/paint did not settle within the wall-clock budget.
    #[error("render timed out after {0}s")]
    Timeout(u64),
}

/// Markup in, PDF bytes out.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, markup: &str) -> Result<Bytes, RenderError>;
}
