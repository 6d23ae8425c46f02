use std::sync::Arc;

use crate::config::Config;
use crate::lookup::LookupOrchestrator;
use crate::profile_client::ProfileSource;
use crate::render::PageRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The page's lookup state. One per process: the page serves a single user.
    pub lookup: Arc<LookupOrchestrator>,
    /// Also used directly by the stateless JSON endpoint.
    pub profile_source: Arc<dyn ProfileSource>,
    pub renderer: Arc<PageRenderer>,
}
