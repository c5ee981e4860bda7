use axum::{routing::get, Router};
use sqlx::SqlitePool;

mod health;
mod menu_api;
mod weekly;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: crate::config::Config,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints keep their own minimal state
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(state.pool.clone())
        .merge(
            Router::new()
                .route("/", get(weekly::page))
                .route("/api/menu/{date}", get(menu_api::get_menu))
                .with_state(state),
        )
}
