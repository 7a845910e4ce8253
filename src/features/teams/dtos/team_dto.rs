use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::teams::models::{Team, User};
use crate::shared::constants::MIN_PASSWORD_LENGTH;
use crate::shared::validation::USERNAME_REGEX;

/// Request DTO for registering a team together with its first member
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTeamDto {
    #[validate(
        length(min = 1, max = 50, message = "Username must be 1-50 characters"),
        regex(
            path = *USERNAME_REGEX,
            message = "Username must start with a letter or underscore and contain only letters, digits and underscores"
        )
    )]
    pub username: String,

    #[validate(length(
        min = MIN_PASSWORD_LENGTH,
        message = "Password must be at least 8 characters"
    ))]
    pub password: String,

    #[validate(nested)]
    pub team: NewTeamDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTeamDto {
    #[validate(length(min = 1, max = 100, message = "Team name must be 1-100 characters"))]
    pub name: String,
}

/// Response DTO for team
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponseDto {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Team> for TeamResponseDto {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
            created_at: team.created_at,
        }
    }
}

/// Response DTO for a registered member. The password hash is not exposed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUserDto {
    pub id: Uuid,
    pub username: String,
    pub team: TeamResponseDto,
    pub created_at: DateTime<Utc>,
}

impl RegisteredUserDto {
    pub fn from_parts(user: User, team: Team) -> Self {
        Self {
            id: user.id,
            username: user.username,
            team: team.into(),
            created_at: user.created_at,
        }
    }
}
