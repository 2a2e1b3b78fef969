//! Router assembly.

use super::handlers::{
    create_game, delete_game, get_board, get_game, get_status, health, list_games, make_move,
    reset_game,
};
use crate::config::ServerConfig;
use crate::store::SessionStore;
use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Game endpoints bound to a store.
pub fn routes(store: SessionStore) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/games", post(create_game).get(list_games))
        .route("/games/{id}", get(get_game).delete(delete_game))
        .route("/games/{id}/moves", post(make_move))
        .route("/games/{id}/reset", post(reset_game))
        .route("/games/{id}/board", get(get_board))
        .route("/games/{id}/status", get(get_status))
        .with_state(store)
}

/// Full application: routes plus request tracing and, if enabled, CORS.
pub fn app(store: SessionStore, config: &ServerConfig) -> Router {
    let router = routes(store).layer(TraceLayer::new_for_http());
    if *config.cors_permissive() {
        info!("CORS: allowing any origin");
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
