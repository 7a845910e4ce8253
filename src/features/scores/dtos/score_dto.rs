use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::scores::models::{Score, ScoreWithTeam};
use crate::features::teams::dtos::TeamResponseDto;
use crate::features::teams::models::Team;

/// Request DTO for playing a question.
///
/// Answers and team are referenced by id. Extra fields (answer text, points,
/// team name) are accepted and ignored; points always come from the store.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayQuestionDto {
    #[validate(length(max = 100, message = "At most 100 answers can be submitted"))]
    pub answers: Vec<AnswerRefDto>,
    pub team: TeamRefDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnswerRefDto {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamRefDto {
    pub id: Uuid,
}

/// Response DTO for score
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponseDto {
    pub id: Uuid,
    pub point: i32,
    pub game_id: Uuid,
    pub team: TeamResponseDto,
    pub created_at: DateTime<Utc>,
}

impl ScoreResponseDto {
    pub fn from_parts(score: Score, team: Team) -> Self {
        Self {
            id: score.id,
            point: score.point,
            game_id: score.game_id,
            team: team.into(),
            created_at: score.created_at,
        }
    }
}

impl From<ScoreWithTeam> for ScoreResponseDto {
    fn from(row: ScoreWithTeam) -> Self {
        Self {
            id: row.id,
            point: row.point,
            game_id: row.game_id,
            team: TeamResponseDto {
                id: row.team_id,
                name: row.team_name,
                created_at: row.team_created_at,
            },
            created_at: row.created_at,
        }
    }
}
