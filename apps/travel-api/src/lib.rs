pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use auth::provider::AuthProvider;
use config::Config;
use db::pool::DbPool;

/// Shared application state available to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub auth: Arc<dyn AuthProvider>,
    pub config: Arc<Config>,
}
