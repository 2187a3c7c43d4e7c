use std::sync::Arc;

use salescopy_core::generation::CopyGenerator;
use salescopy_db::store::CopyStore;

use crate::config::ServerConfig;
use crate::orchestrator::CopyOrchestrator;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Copy storage, also used by the health check.
    pub store: Arc<dyn CopyStore>,
    /// Use-case layer for the `/copies` resource.
    pub copies: Arc<CopyOrchestrator>,
}

impl AppState {
    /// Wire the orchestrator over the given store and generator.
    pub fn new(
        config: ServerConfig,
        store: Arc<dyn CopyStore>,
        generator: Arc<dyn CopyGenerator>,
    ) -> Self {
        let copies = Arc::new(CopyOrchestrator::new(Arc::clone(&store), generator));
        Self {
            config: Arc::new(config),
            store,
            copies,
        }
    }
}
