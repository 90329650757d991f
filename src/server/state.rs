use axum::extract::FromRef;

use crate::catalog::Catalog;
use crate::progress::ProgressTracker;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedCatalog = Arc<Catalog>;
pub type GuardedProgressTracker = Arc<ProgressTracker>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub catalog: GuardedCatalog,
    pub progress_tracker: GuardedProgressTracker,
}

impl FromRef<ServerState> for GuardedCatalog {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog.clone()
    }
}

impl FromRef<ServerState> for GuardedProgressTracker {
    fn from_ref(input: &ServerState) -> Self {
        input.progress_tracker.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
