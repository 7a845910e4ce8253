pub mod catalog;
pub mod games;
pub mod questions;
pub mod scores;
pub mod teams;

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use catalog::{CatalogSeeder, QuestionBank};
use games::GameService;
use questions::QuestionService;
use scores::ScoreService;
use teams::TeamService;

/// Build every feature service on `pool` and merge their routes
pub fn router(pool: PgPool, bank: Arc<QuestionBank>) -> Router {
    let seeder = Arc::new(CatalogSeeder::new(bank));

    let game_service = Arc::new(GameService::new(pool.clone(), seeder));
    tracing::info!("Game service initialized");

    let question_service = Arc::new(QuestionService::new(pool.clone()));
    tracing::info!("Question service initialized");

    let score_service = Arc::new(ScoreService::new(pool.clone()));
    tracing::info!("Score service initialized");

    let team_service = Arc::new(TeamService::new(pool));
    tracing::info!("Team service initialized");

    Router::new()
        .merge(games::routes::routes(game_service))
        .merge(questions::routes::routes(question_service))
        .merge(scores::routes::routes(score_service))
        .merge(teams::routes::routes(team_service))
}
