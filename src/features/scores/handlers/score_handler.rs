use std::sync::Arc;

use axum::{extract::State, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::scores::dtos::{PlayQuestionDto, ScoreResponseDto};
use crate::features::scores::services::ScoreService;
use crate::shared::types::ApiResponse;

/// Score a team's answers to a question and retire the question
#[utoipa::path(
    post,
    path = "/game/play/{game_id}/{question_id}",
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("question_id" = Uuid, Path, description = "Question ID")
    ),
    request_body = PlayQuestionDto,
    responses(
        (status = 200, description = "Score recorded", body = ApiResponse<ScoreResponseDto>),
        (status = 400, description = "Invalid request or answer not part of the question"),
        (status = 404, description = "Game, question or team not found"),
        (status = 409, description = "Question already played")
    ),
    tag = "scores"
)]
pub async fn play_question(
    State(service): State<Arc<ScoreService>>,
    AppPath((game_id, question_id)): AppPath<(Uuid, Uuid)>,
    AppJson(dto): AppJson<PlayQuestionDto>,
) -> Result<Json<ApiResponse<ScoreResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let score = service.play_question(game_id, question_id, dto).await?;
    Ok(Json(ApiResponse::success(Some(score), None)))
}

/// List the scores of a game
#[utoipa::path(
    get,
    path = "/game/scores/{game_id}",
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Scores of the game", body = ApiResponse<Vec<ScoreResponseDto>>),
        (status = 404, description = "Game not found")
    ),
    tag = "scores"
)]
pub async fn get_game_scores(
    State(service): State<Arc<ScoreService>>,
    AppPath(game_id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<ScoreResponseDto>>>> {
    let scores = service.scores_by_game(game_id).await?;
    Ok(Json(ApiResponse::success(Some(scores), None)))
}

/// List all scores
#[utoipa::path(
    get,
    path = "/score",
    responses(
        (status = 200, description = "All scores", body = ApiResponse<Vec<ScoreResponseDto>>)
    ),
    tag = "scores"
)]
pub async fn list_scores(
    State(service): State<Arc<ScoreService>>,
) -> Result<Json<ApiResponse<Vec<ScoreResponseDto>>>> {
    let scores = service.list_scores().await?;
    Ok(Json(ApiResponse::success(Some(scores), None)))
}
