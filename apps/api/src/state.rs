use std::sync::Arc;

use crate::artifacts::ArtifactStore;
use crate::config::Config;
use crate::render::PdfRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Single writer to the output directory; handles all artifact I/O.
    pub store: Arc<ArtifactStore>,
    /// Pluggable PDF renderer. Production: ChromiumRenderer. Tests swap in a stub.
    pub renderer: Arc<dyn PdfRenderer>,
}
