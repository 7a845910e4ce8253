use std::sync::Arc;

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::questions::dtos::{QuestionResponseDto, ToggleQuestionDto};
use crate::features::questions::services::QuestionService;
use crate::shared::types::ApiResponse;

/// Get question by ID
#[utoipa::path(
    get,
    path = "/question/{question_id}",
    params(
        ("question_id" = Uuid, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question found", body = ApiResponse<QuestionResponseDto>),
        (status = 404, description = "Question not found")
    ),
    tag = "questions"
)]
pub async fn get_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(question_id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<QuestionResponseDto>>> {
    let question = service.get_by_id(question_id).await?;
    Ok(Json(ApiResponse::success(Some(question), None)))
}

/// Activate or deactivate a question
#[utoipa::path(
    post,
    path = "/question/toggle/{question_id}",
    params(
        ("question_id" = Uuid, Path, description = "Question ID")
    ),
    request_body = ToggleQuestionDto,
    responses(
        (status = 200, description = "Question updated", body = ApiResponse<QuestionResponseDto>),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Question not found")
    ),
    tag = "questions"
)]
pub async fn toggle_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(question_id): AppPath<Uuid>,
    AppJson(dto): AppJson<ToggleQuestionDto>,
) -> Result<Json<ApiResponse<QuestionResponseDto>>> {
    let question = service.toggle(question_id, dto.is_active).await?;
    Ok(Json(ApiResponse::success(Some(question), None)))
}
