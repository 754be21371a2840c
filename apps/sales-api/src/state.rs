//! Shared application state.
//!
//! One `Database` handle backs everything; the resolver sees it only
//! through the collaborator traits.

use std::sync::Arc;

use crate::config::Config;
use crate::service::SalesResolver;
use gerai_db::Database;

/// State threaded through every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Direct repository access for the simple read/append endpoints.
    pub db: Database,

    /// The resolve orchestrator.
    pub resolver: Arc<SalesResolver>,

    /// Immutable runtime configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the state, wiring the resolver's collaborators to the
    /// SQLite-backed implementations.
    pub fn new(db: Database, config: Config) -> Self {
        let resolver = SalesResolver::new(
            Arc::new(db.clone()),
            Arc::new(db.clone()),
            Arc::new(db.clone()),
        );

        AppState {
            db,
            resolver: Arc::new(resolver),
            config: Arc::new(config),
        }
    }
}
