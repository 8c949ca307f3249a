use std::sync::Arc;

use sakila_db::Catalog;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; holds no per-request data. Every handler gets its own
/// pooled connection through the catalog.
#[derive(Clone)]
pub struct AppState {
    /// Data operations (MySQL in production).
    pub catalog: Arc<dyn Catalog>,
}
