use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{db_error, AppError, Result};
use crate::features::teams::dtos::{RegisterTeamDto, RegisteredUserDto, TeamResponseDto};
use crate::features::teams::models::{Team, User};

/// Service for team registration and listing
pub struct TeamService {
    pool: PgPool,
}

impl TeamService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a team and its first member in one transaction
    pub async fn register(&self, dto: RegisterTeamDto) -> Result<RegisteredUserDto> {
        let password_hash = hash_password(dto.password).await?;

        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (id, name)
            VALUES ($1, $2)
            RETURNING id, name, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&dto.team.name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert team: {:?}", e);
            db_error(e)
        })?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, team_id, username, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, team_id, username, password, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(team.id)
        .bind(&dto.username)
        .bind(&password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert user: {:?}", e);
            db_error(e)
        })?;

        tx.commit().await.map_err(db_error)?;

        tracing::info!("Registered user {} in team {}", user.username, team.id);

        Ok(RegisteredUserDto::from_parts(user, team))
    }

    pub async fn list(&self) -> Result<Vec<TeamResponseDto>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT id, name, created_at
            FROM teams
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list teams: {:?}", e);
            db_error(e)
        })?;

        Ok(teams.into_iter().map(TeamResponseDto::from).collect())
    }
}

/// Argon2id PHC string with a random salt, computed off the async workers
async fn hash_password(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
    })
    .await
    .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
    .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}
