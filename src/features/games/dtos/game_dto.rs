use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::games::models::Game;
use crate::features::questions::dtos::QuestionResponseDto;

/// Request DTO for creating a game
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameDto {
    /// Defaults to true
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

impl Default for CreateGameDto {
    fn default() -> Self {
        Self { is_active: true }
    }
}

/// Request DTO for switching a game on or off
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleGameDto {
    pub is_active: bool,
}

/// Response DTO for game with its questions
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameResponseDto {
    pub id: Uuid,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub questions: Vec<QuestionResponseDto>,
}

impl GameResponseDto {
    pub fn from_parts(game: Game, questions: Vec<QuestionResponseDto>) -> Self {
        Self {
            id: game.id,
            is_active: game.is_active,
            created_at: game.created_at,
            questions,
        }
    }
}
