use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::teams::dtos::{RegisterTeamDto, RegisteredUserDto, TeamResponseDto};
use crate::features::teams::services::TeamService;
use crate::shared::types::ApiResponse;

/// Register a team with its first member
#[utoipa::path(
    post,
    path = "/team/register",
    request_body = RegisterTeamDto,
    responses(
        (status = 200, description = "Team registered", body = ApiResponse<RegisteredUserDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username already taken")
    ),
    tag = "teams"
)]
pub async fn register_team(
    State(service): State<Arc<TeamService>>,
    AppJson(dto): AppJson<RegisterTeamDto>,
) -> Result<Json<ApiResponse<RegisteredUserDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = service.register(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(user),
        Some("Team registered".to_string()),
    )))
}

/// List all teams
#[utoipa::path(
    get,
    path = "/team",
    responses(
        (status = 200, description = "Teams", body = ApiResponse<Vec<TeamResponseDto>>)
    ),
    tag = "teams"
)]
pub async fn list_teams(
    State(service): State<Arc<TeamService>>,
) -> Result<Json<ApiResponse<Vec<TeamResponseDto>>>> {
    let teams = service.list().await?;
    Ok(Json(ApiResponse::success(Some(teams), None)))
}
