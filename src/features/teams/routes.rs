use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::teams::handlers;
use crate::features::teams::services::TeamService;

/// Create routes for the teams feature
pub fn routes(service: Arc<TeamService>) -> Router {
    Router::new()
        .route("/team", get(handlers::list_teams))
        .route("/team/register", post(handlers::register_team))
        .with_state(service)
}
