pub mod config;
pub mod db;
pub mod error;
pub mod menu;
pub mod observability;
pub mod queries;
pub mod routes;
pub mod template;

pub use routes::AppState;

rust_i18n::i18n!("locales", fallback = "en");

/// Create the app router for testing
///
/// Builds the Axum router with all routes configured, useful for
/// integration testing without starting the full server.
pub fn create_app(pool: sqlx::SqlitePool, config: config::Config) -> axum::Router {
    routes::router(AppState { pool, config })
}
