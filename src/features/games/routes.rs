use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::games::handlers;
use crate::features::games::services::GameService;

/// Create routes for the games feature
pub fn routes(service: Arc<GameService>) -> Router {
    Router::new()
        .route("/game", get(handlers::get_latest_game))
        .route("/game/create", post(handlers::create_game))
        .route("/game/toggle/{game_id}", post(handlers::toggle_game))
        .with_state(service)
}
