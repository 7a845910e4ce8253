use std::collections::HashSet;

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::core::error::{db_error, AppError, Result};
use crate::features::questions::models::{Answer, Question};
use crate::features::scores::dtos::{PlayQuestionDto, ScoreResponseDto};
use crate::features::scores::models::{Score, ScoreWithTeam};
use crate::features::teams::models::Team;

/// Service for recording and reading scores
pub struct ScoreService {
    pool: PgPool,
}

impl ScoreService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a team's score for a question and retire the question.
    ///
    /// The score insert and the deactivation commit together. The question
    /// row is locked for the duration, so a question is scored at most once.
    pub async fn play_question(
        &self,
        game_id: Uuid,
        question_id: Uuid,
        dto: PlayQuestionDto,
    ) -> Result<ScoreResponseDto> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        ensure_game_exists(&mut tx, game_id).await?;

        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, game_id, category_id, question_text, music_name,
                   music_name_path, difficulty, is_active
            FROM questions
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(question_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to lock question: {:?}", e);
            db_error(e)
        })?
        .filter(|q| q.game_id == game_id)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Question {} not found in game {}",
                question_id, game_id
            ))
        })?;

        if !question.is_active {
            return Err(AppError::Conflict(format!(
                "Question {} has already been played",
                question.id
            )));
        }

        let stored = sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, question_id, answer_text, point
            FROM answers
            WHERE question_id = $1
            "#,
        )
        .bind(question.id)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load answers: {:?}", e);
            db_error(e)
        })?;

        let submitted: Vec<Uuid> = dto.answers.iter().map(|a| a.id).collect();
        let point = total_points(&stored, &submitted)?;

        let team = sqlx::query_as::<_, Team>("SELECT id, name, created_at FROM teams WHERE id = $1")
            .bind(dto.team.id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get team: {:?}", e);
                db_error(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", dto.team.id)))?;

        let score = sqlx::query_as::<_, Score>(
            r#"
            INSERT INTO scores (id, team_id, game_id, point)
            VALUES ($1, $2, $3, $4)
            RETURNING id, team_id, game_id, point, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(team.id)
        .bind(game_id)
        .bind(point)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert score: {:?}", e);
            db_error(e)
        })?;

        sqlx::query("UPDATE questions SET is_active = FALSE WHERE id = $1")
            .bind(question.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to deactivate question: {:?}", e);
                db_error(e)
            })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit score: {:?}", e);
            db_error(e)
        })?;

        tracing::info!(
            "Team {} scored {} on question {} of game {}",
            team.id,
            point,
            question.id,
            game_id
        );

        Ok(ScoreResponseDto::from_parts(score, team))
    }

    /// Scores of one game in recording order
    pub async fn scores_by_game(&self, game_id: Uuid) -> Result<Vec<ScoreResponseDto>> {
        let mut conn = self.pool.acquire().await.map_err(db_error)?;

        ensure_game_exists(&mut conn, game_id).await?;

        let rows = sqlx::query_as::<_, ScoreWithTeam>(
            r#"
            SELECT s.id, s.game_id, s.point, s.created_at,
                   t.id AS team_id, t.name AS team_name, t.created_at AS team_created_at
            FROM scores s
            JOIN teams t ON t.id = s.team_id
            WHERE s.game_id = $1
            ORDER BY s.created_at, s.id
            "#,
        )
        .bind(game_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list scores for game: {:?}", e);
            db_error(e)
        })?;

        Ok(rows.into_iter().map(ScoreResponseDto::from).collect())
    }

    pub async fn list_scores(&self) -> Result<Vec<ScoreResponseDto>> {
        let rows = sqlx::query_as::<_, ScoreWithTeam>(
            r#"
            SELECT s.id, s.game_id, s.point, s.created_at,
                   t.id AS team_id, t.name AS team_name, t.created_at AS team_created_at
            FROM scores s
            JOIN teams t ON t.id = s.team_id
            ORDER BY s.created_at, s.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list scores: {:?}", e);
            db_error(e)
        })?;

        Ok(rows.into_iter().map(ScoreResponseDto::from).collect())
    }
}

async fn ensure_game_exists(conn: &mut PgConnection, game_id: Uuid) -> Result<()> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM games WHERE id = $1)")
        .bind(game_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check game: {:?}", e);
            db_error(e)
        })?;

    if exists {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("Game {} not found", game_id)))
    }
}

/// Sum the stored points of the submitted answers.
///
/// Every id must name one of `stored` and appear once.
fn total_points(stored: &[Answer], submitted: &[Uuid]) -> Result<i32> {
    let mut seen = HashSet::with_capacity(submitted.len());
    let mut total: i32 = 0;

    for id in submitted {
        if !seen.insert(*id) {
            return Err(AppError::Validation(format!(
                "answers: answer {} submitted more than once",
                id
            )));
        }

        let answer = stored.iter().find(|a| a.id == *id).ok_or_else(|| {
            AppError::Validation(format!(
                "answers: answer {} does not belong to this question",
                id
            ))
        })?;

        total = total
            .checked_add(answer.point)
            .ok_or_else(|| AppError::Validation("answers: point total out of range".to_string()))?;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::CatalogSeeder;
    use crate::features::games::dtos::{CreateGameDto, GameResponseDto};
    use crate::features::games::GameService;
    use crate::features::scores::dtos::{AnswerRefDto, TeamRefDto};
    use crate::features::teams::dtos::{NewTeamDto, RegisterTeamDto};
    use crate::features::teams::TeamService;
    use crate::shared::test_helpers::{test_bank, test_pool};
    use std::sync::Arc;

    fn answer(point: i32) -> Answer {
        Answer {
            id: Uuid::now_v7(),
            question_id: Uuid::nil(),
            answer_text: format!("{} points", point),
            point,
        }
    }

    #[test]
    fn test_total_points_sums_stored_values() {
        let stored = vec![answer(10), answer(20), answer(40)];
        let total = total_points(&stored, &[stored[0].id, stored[1].id]).unwrap();
        assert_eq!(total, 30);
    }

    #[test]
    fn test_no_answers_scores_zero() {
        assert_eq!(total_points(&[answer(10)], &[]).unwrap(), 0);
    }

    #[test]
    fn test_foreign_answer_rejected() {
        let stored = vec![answer(10)];
        let err = total_points(&stored, &[Uuid::now_v7()]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_duplicate_answer_rejected() {
        let stored = vec![answer(10)];
        let err = total_points(&stored, &[stored[0].id, stored[0].id]).unwrap_err();
        assert!(err.to_string().contains("more than once"), "{}", err);
    }

    #[test]
    fn test_overflow_rejected() {
        let stored = vec![answer(i32::MAX), answer(1)];
        assert!(total_points(&stored, &[stored[0].id, stored[1].id]).is_err());
    }

    struct Fixture {
        pool: PgPool,
        game: GameResponseDto,
        team_id: Uuid,
    }

    async fn fixture() -> Fixture {
        let pool = test_pool().await;
        let games = GameService::new(pool.clone(), Arc::new(CatalogSeeder::new(test_bank())));
        let game = games.create_game(CreateGameDto::default()).await.unwrap();

        let registered = TeamService::new(pool.clone())
            .register(RegisterTeamDto {
                username: format!("player_{}", Uuid::now_v7().simple()),
                password: "super secret".to_string(),
                team: NewTeamDto {
                    name: "Rockers".to_string(),
                },
            })
            .await
            .unwrap();

        Fixture {
            pool,
            game,
            team_id: registered.team.id,
        }
    }

    fn play_body(answer_ids: &[Uuid], team_id: Uuid) -> PlayQuestionDto {
        PlayQuestionDto {
            answers: answer_ids.iter().map(|id| AnswerRefDto { id: *id }).collect(),
            team: TeamRefDto { id: team_id },
        }
    }

    #[tokio::test]
    #[ignore = "requires a Postgres database (DATABASE_URL)"]
    async fn test_play_question_records_score_and_retires_question() {
        let f = fixture().await;
        let service = ScoreService::new(f.pool.clone());
        let question = f
            .game
            .questions
            .iter()
            .find(|q| {
                let points: Vec<i32> = q.answers.iter().map(|a| a.point).collect();
                points == vec![10, 20]
            })
            .unwrap();
        let ids: Vec<Uuid> = question.answers.iter().map(|a| a.id).collect();

        let score = service
            .play_question(f.game.id, question.id, play_body(&ids, f.team_id))
            .await
            .unwrap();
        assert_eq!(score.point, 30);
        assert_eq!(score.team.id, f.team_id);

        let states: Vec<(Uuid, bool)> =
            sqlx::query_as("SELECT id, is_active FROM questions WHERE game_id = $1")
                .bind(f.game.id)
                .fetch_all(&f.pool)
                .await
                .unwrap();
        for (id, is_active) in states {
            assert_eq!(is_active, id != question.id);
        }

        let scores = service.scores_by_game(f.game.id).await.unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].id, score.id);

        // Played questions cannot be scored again
        let err = service
            .play_question(f.game.id, question.id, play_body(&[], f.team_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    #[ignore = "requires a Postgres database (DATABASE_URL)"]
    async fn test_foreign_answer_leaves_question_active() {
        let f = fixture().await;
        let service = ScoreService::new(f.pool.clone());
        let question = &f.game.questions[0];
        let other_answer = f.game.questions[1].answers[0].id;

        let err = service
            .play_question(f.game.id, question.id, play_body(&[other_answer], f.team_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let is_active: bool = sqlx::query_scalar("SELECT is_active FROM questions WHERE id = $1")
            .bind(question.id)
            .fetch_one(&f.pool)
            .await
            .unwrap();
        assert!(is_active);
        assert!(service.scores_by_game(f.game.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    #[ignore = "requires a Postgres database (DATABASE_URL)"]
    async fn test_unknown_game_and_team_are_not_found() {
        let f = fixture().await;
        let service = ScoreService::new(f.pool.clone());
        let question = &f.game.questions[0];

        let err = service.scores_by_game(Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = service
            .play_question(Uuid::now_v7(), question.id, play_body(&[], f.team_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = service
            .play_question(f.game.id, question.id, play_body(&[], Uuid::now_v7()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    #[ignore = "requires a Postgres database (DATABASE_URL)"]
    async fn test_list_scores_includes_recorded_score() {
        let f = fixture().await;
        let service = ScoreService::new(f.pool.clone());
        let question = &f.game.questions[0];
        let first_answer = question.answers[0].clone();

        let score = service
            .play_question(f.game.id, question.id, play_body(&[first_answer.id], f.team_id))
            .await
            .unwrap();

        let all = service.list_scores().await.unwrap();
        let listed = all.iter().find(|s| s.id == score.id).unwrap();
        assert_eq!(listed.point, first_answer.point);
        assert_eq!(listed.game_id, f.game.id);
        assert_eq!(listed.team.id, f.team_id);
        assert_eq!(listed.team.name, "Rockers");
    }
}
