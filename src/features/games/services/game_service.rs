use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{db_error, AppError, Result};
use crate::features::catalog::CatalogSeeder;
use crate::features::games::dtos::{CreateGameDto, GameResponseDto};
use crate::features::games::models::Game;
use crate::features::questions::services::fetch_game_questions;

/// Service for game bootstrap and lifecycle
pub struct GameService {
    pool: PgPool,
    seeder: Arc<CatalogSeeder>,
}

impl GameService {
    pub fn new(pool: PgPool, seeder: Arc<CatalogSeeder>) -> Self {
        Self { pool, seeder }
    }

    /// Create a game and seed its catalog in a single transaction.
    ///
    /// Any failure drops the transaction, so neither the game nor any
    /// category, question or answer is left behind.
    pub async fn create_game(&self, dto: CreateGameDto) -> Result<GameResponseDto> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let game = sqlx::query_as::<_, Game>(
            r#"
            INSERT INTO games (id, is_active)
            VALUES ($1, $2)
            RETURNING id, is_active, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(dto.is_active)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert game: {:?}", e);
            db_error(e)
        })?;

        let categories = self.seeder.seed_categories(&mut tx).await?;
        self.seeder
            .seed_questions_and_answers(&mut tx, game.id, &categories)
            .await?;
        let questions = fetch_game_questions(&mut tx, game.id).await?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit game bootstrap: {:?}", e);
            db_error(e)
        })?;

        tracing::info!(
            "Created game {} with {} questions",
            game.id,
            questions.len()
        );

        Ok(GameResponseDto::from_parts(game, questions))
    }

    /// Set the active flag of a game
    pub async fn toggle_game(&self, game_id: Uuid, is_active: bool) -> Result<GameResponseDto> {
        let mut conn = self.pool.acquire().await.map_err(db_error)?;

        let game = sqlx::query_as::<_, Game>(
            r#"
            UPDATE games
            SET is_active = $2
            WHERE id = $1
            RETURNING id, is_active, created_at
            "#,
        )
        .bind(game_id)
        .bind(is_active)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to toggle game: {:?}", e);
            db_error(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Game {} not found", game_id)))?;

        tracing::info!("Game {} set active={}", game.id, game.is_active);

        let questions = fetch_game_questions(&mut conn, game.id).await?;
        Ok(GameResponseDto::from_parts(game, questions))
    }

    /// Most recently created game with its questions
    pub async fn latest_game(&self) -> Result<GameResponseDto> {
        let mut conn = self.pool.acquire().await.map_err(db_error)?;

        let game = sqlx::query_as::<_, Game>(
            r#"
            SELECT id, is_active, created_at
            FROM games
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get latest game: {:?}", e);
            db_error(e)
        })?
        .ok_or_else(|| AppError::NotFound("No game found".to_string()))?;

        let questions = fetch_game_questions(&mut conn, game.id).await?;
        Ok(GameResponseDto::from_parts(game, questions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{test_bank, test_pool};

    fn service(pool: PgPool) -> GameService {
        GameService::new(pool, Arc::new(CatalogSeeder::new(test_bank())))
    }

    #[tokio::test]
    #[ignore = "requires a Postgres database (DATABASE_URL)"]
    async fn test_create_game_seeds_every_question() {
        let pool = test_pool().await;
        let bank = test_bank();

        let game = service(pool).create_game(CreateGameDto::default()).await.unwrap();

        assert!(game.is_active);
        assert_eq!(game.questions.len(), bank.question_count());
        for question in &game.questions {
            assert_eq!(question.game_id, game.id);
            assert!(question.is_active);
            // The category is the one the bank lists the question under
            assert!(bank
                .entries_for(&question.category.category_text)
                .any(|entry| entry
                    .questions
                    .iter()
                    .any(|q| q.question_text == question.question_text)));
        }
    }

    #[tokio::test]
    #[ignore = "requires a Postgres database (DATABASE_URL)"]
    async fn test_seeding_twice_keeps_categories_unique() {
        let pool = test_pool().await;
        let service = service(pool.clone());

        service.create_game(CreateGameDto::default()).await.unwrap();
        service.create_game(CreateGameDto::default()).await.unwrap();

        let duplicates: Vec<String> = sqlx::query_scalar(
            "SELECT category_text FROM categories GROUP BY category_text HAVING COUNT(*) > 1",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert!(duplicates.is_empty(), "duplicated: {:?}", duplicates);
    }

    #[tokio::test]
    #[ignore = "requires a Postgres database (DATABASE_URL)"]
    async fn test_questions_are_not_shared_between_games() {
        let pool = test_pool().await;
        let service = service(pool);

        let first = service.create_game(CreateGameDto::default()).await.unwrap();
        let second = service.create_game(CreateGameDto::default()).await.unwrap();

        assert!(first
            .questions
            .iter()
            .all(|q| second.questions.iter().all(|other| other.id != q.id)));
    }

    #[tokio::test]
    #[ignore = "requires a Postgres database (DATABASE_URL)"]
    async fn test_toggle_missing_game_is_not_found() {
        let pool = test_pool().await;
        let before: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM games")
            .fetch_one(&pool)
            .await
            .unwrap();

        let err = service(pool.clone())
            .toggle_game(Uuid::now_v7(), false)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let after: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM games")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    #[ignore = "requires a Postgres database (DATABASE_URL)"]
    async fn test_toggle_and_latest_game() {
        let pool = test_pool().await;
        let service = service(pool);

        let game = service.create_game(CreateGameDto::default()).await.unwrap();
        let toggled = service.toggle_game(game.id, false).await.unwrap();
        assert!(!toggled.is_active);
        assert_eq!(toggled.questions.len(), game.questions.len());

        let latest = service.latest_game().await.unwrap();
        assert_eq!(latest.id, game.id);
    }

    #[tokio::test]
    #[ignore = "requires a Postgres database (DATABASE_URL)"]
    async fn test_latest_game_without_games_is_not_found() {
        let pool = test_pool().await;
        sqlx::query("TRUNCATE games CASCADE")
            .execute(&pool)
            .await
            .unwrap();

        let err = service(pool).latest_game().await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
