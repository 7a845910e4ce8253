use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::games::dtos::{CreateGameDto, GameResponseDto, ToggleGameDto};
use crate::features::games::services::GameService;
use crate::shared::types::ApiResponse;

/// Get the most recently created game
#[utoipa::path(
    get,
    path = "/game",
    responses(
        (status = 200, description = "Latest game with its questions", body = ApiResponse<GameResponseDto>),
        (status = 404, description = "No game has been created yet")
    ),
    tag = "games"
)]
pub async fn get_latest_game(
    State(service): State<Arc<GameService>>,
) -> Result<Json<ApiResponse<GameResponseDto>>> {
    let game = service.latest_game().await?;
    Ok(Json(ApiResponse::success(Some(game), None)))
}

/// Create a game and seed its questions from the question bank
#[utoipa::path(
    post,
    path = "/game/create",
    request_body(content = CreateGameDto, description = "Optional, defaults to an active game"),
    responses(
        (status = 200, description = "Game created", body = ApiResponse<GameResponseDto>),
        (status = 400, description = "Invalid request or seeding failed")
    ),
    tag = "games"
)]
pub async fn create_game(
    State(service): State<Arc<GameService>>,
    body: Bytes,
) -> Result<Json<ApiResponse<GameResponseDto>>> {
    let dto = parse_create_body(&body)?;
    let game = service.create_game(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(game),
        Some("Game created".to_string()),
    )))
}

/// Activate or deactivate a game
#[utoipa::path(
    post,
    path = "/game/toggle/{game_id}",
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    request_body = ToggleGameDto,
    responses(
        (status = 200, description = "Game updated", body = ApiResponse<GameResponseDto>),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Game not found")
    ),
    tag = "games"
)]
pub async fn toggle_game(
    State(service): State<Arc<GameService>>,
    AppPath(game_id): AppPath<Uuid>,
    AppJson(dto): AppJson<ToggleGameDto>,
) -> Result<Json<ApiResponse<GameResponseDto>>> {
    let game = service.toggle_game(game_id, dto.is_active).await?;
    Ok(Json(ApiResponse::success(Some(game), None)))
}

/// An empty body means "use the defaults"
fn parse_create_body(body: &[u8]) -> Result<CreateGameDto> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateGameDto::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON data: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_create_body_uses_defaults() {
        assert!(parse_create_body(b"").unwrap().is_active);
        assert!(parse_create_body(b"  \n").unwrap().is_active);
    }

    #[test]
    fn test_create_body_is_parsed() {
        assert!(!parse_create_body(br#"{"isActive": false}"#).unwrap().is_active);
        assert!(parse_create_body(b"{}").unwrap().is_active);
    }

    #[test]
    fn test_malformed_create_body_is_bad_request() {
        let err = parse_create_body(b"{not json").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
