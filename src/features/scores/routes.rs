use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::scores::handlers;
use crate::features::scores::services::ScoreService;

/// Create routes for the scores feature
pub fn routes(service: Arc<ScoreService>) -> Router {
    Router::new()
        .route(
            "/game/play/{game_id}/{question_id}",
            post(handlers::play_question),
        )
        .route("/game/scores/{game_id}", get(handlers::get_game_scores))
        .route("/score", get(handlers::list_scores))
        .with_state(service)
}
