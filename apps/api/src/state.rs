use std::sync::Arc;

use crate::config::Config;
use crate::designs::DesignRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Kept for handlers that grow configuration needs; only startup reads
    /// it today.
    #[allow(dead_code)]
    pub config: Config,
    /// The design registry, built once at startup and read-only thereafter.
    /// Passed here explicitly rather than through any ambient global.
    pub registry: Arc<DesignRegistry>,
}
