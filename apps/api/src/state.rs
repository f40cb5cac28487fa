use std::sync::Arc;

use crate::config::Config;
use crate::reviews::writer::ReviewWriter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// AI-assisted when an API key is configured, local assembler otherwise.
    pub writer: Arc<dyn ReviewWriter>,
}
