use std::collections::HashMap;

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::core::error::{db_error, AppError, Result};
use crate::features::questions::dtos::{AnswerResponseDto, QuestionResponseDto};
use crate::features::questions::models::{Answer, QuestionWithCategory};

/// Service for question operations
pub struct QuestionService {
    pool: PgPool,
}

impl QuestionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a question with its category and answers
    pub async fn get_by_id(&self, question_id: Uuid) -> Result<QuestionResponseDto> {
        let mut conn = self.pool.acquire().await.map_err(db_error)?;

        fetch_question(&mut conn, question_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question {} not found", question_id)))
    }

    /// Set the active flag of a question
    pub async fn toggle(&self, question_id: Uuid, is_active: bool) -> Result<QuestionResponseDto> {
        let mut conn = self.pool.acquire().await.map_err(db_error)?;

        let updated = sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE questions
            SET is_active = $2
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(question_id)
        .bind(is_active)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to toggle question: {:?}", e);
            db_error(e)
        })?;

        if updated.is_none() {
            return Err(AppError::NotFound(format!(
                "Question {} not found",
                question_id
            )));
        }

        tracing::info!("Question {} set active={}", question_id, is_active);

        fetch_question(&mut conn, question_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question {} not found", question_id)))
    }
}

/// Load one question with category and answers
async fn fetch_question(
    conn: &mut PgConnection,
    question_id: Uuid,
) -> Result<Option<QuestionResponseDto>> {
    let row = sqlx::query_as::<_, QuestionWithCategory>(
        r#"
        SELECT q.id, q.game_id, q.category_id, q.question_text, q.music_name,
               q.music_name_path, q.difficulty, q.is_active,
               c.category_text, c.is_all_in
        FROM questions q
        JOIN categories c ON c.id = q.category_id
        WHERE q.id = $1
        "#,
    )
    .bind(question_id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(|e| {
        tracing::error!("Failed to get question by id: {:?}", e);
        db_error(e)
    })?;

    match row {
        Some(row) => Ok(attach_answers(conn, vec![row]).await?.pop()),
        None => Ok(None),
    }
}

/// Load every question of a game, in seeding order, with category and answers
pub async fn fetch_game_questions(
    conn: &mut PgConnection,
    game_id: Uuid,
) -> Result<Vec<QuestionResponseDto>> {
    let rows = sqlx::query_as::<_, QuestionWithCategory>(
        r#"
        SELECT q.id, q.game_id, q.category_id, q.question_text, q.music_name,
               q.music_name_path, q.difficulty, q.is_active,
               c.category_text, c.is_all_in
        FROM questions q
        JOIN categories c ON c.id = q.category_id
        WHERE q.game_id = $1
        ORDER BY q.id
        "#,
    )
    .bind(game_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(|e| {
        tracing::error!("Failed to list questions for game: {:?}", e);
        db_error(e)
    })?;

    attach_answers(conn, rows).await
}

async fn attach_answers(
    conn: &mut PgConnection,
    rows: Vec<QuestionWithCategory>,
) -> Result<Vec<QuestionResponseDto>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let question_ids: Vec<Uuid> = rows.iter().map(|q| q.id).collect();
    let answers = sqlx::query_as::<_, Answer>(
        r#"
        SELECT id, question_id, answer_text, point
        FROM answers
        WHERE question_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(question_ids)
    .fetch_all(&mut *conn)
    .await
    .map_err(|e| {
        tracing::error!("Failed to list answers: {:?}", e);
        db_error(e)
    })?;

    Ok(group_answers(rows, answers))
}

/// Attach answers to their questions, keeping both orders
fn group_answers(rows: Vec<QuestionWithCategory>, answers: Vec<Answer>) -> Vec<QuestionResponseDto> {
    let mut by_question: HashMap<Uuid, Vec<AnswerResponseDto>> = HashMap::new();
    for answer in answers {
        by_question
            .entry(answer.question_id)
            .or_default()
            .push(answer.into());
    }

    rows.into_iter()
        .map(|row| {
            let answers = by_question.remove(&row.id).unwrap_or_default();
            QuestionResponseDto::from_parts(row, answers)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::CatalogSeeder;
    use crate::features::games::dtos::CreateGameDto;
    use crate::features::games::GameService;
    use crate::shared::test_helpers::{test_bank, test_pool};
    use std::sync::Arc;

    fn row(id: Uuid) -> QuestionWithCategory {
        QuestionWithCategory {
            id,
            game_id: Uuid::nil(),
            category_id: Uuid::nil(),
            question_text: "q".to_string(),
            music_name: None,
            music_name_path: None,
            difficulty: 0,
            is_active: true,
            category_text: "80s".to_string(),
            is_all_in: false,
        }
    }

    fn answer(question_id: Uuid, point: i32) -> Answer {
        Answer {
            id: Uuid::now_v7(),
            question_id,
            answer_text: format!("{} points", point),
            point,
        }
    }

    #[test]
    fn test_group_answers_attaches_to_owner() {
        let (q1, q2, q3) = (Uuid::now_v7(), Uuid::now_v7(), Uuid::now_v7());
        let answers = vec![answer(q1, 10), answer(q2, 5), answer(q1, 20)];

        let grouped = group_answers(vec![row(q1), row(q2), row(q3)], answers);

        assert_eq!(grouped.len(), 3);
        let points: Vec<_> = grouped[0].answers.iter().map(|a| a.point).collect();
        assert_eq!(points, vec![10, 20]);
        assert_eq!(grouped[1].answers.len(), 1);
        assert!(grouped[2].answers.is_empty());
    }

    #[test]
    fn test_question_response_serializes_camel_case() {
        let dto = QuestionResponseDto::from_parts(row(Uuid::now_v7()), Vec::new());
        let value = serde_json::to_value(dto).unwrap();

        assert_eq!(value["questionText"], "q");
        assert_eq!(value["isActive"], true);
        assert_eq!(value["category"]["categoryText"], "80s");
        assert_eq!(value["category"]["isAllIn"], false);
    }

    #[tokio::test]
    #[ignore = "requires a Postgres database (DATABASE_URL)"]
    async fn test_get_and_toggle_seeded_question() {
        let pool = test_pool().await;
        let game = GameService::new(pool.clone(), Arc::new(CatalogSeeder::new(test_bank())))
            .create_game(CreateGameDto::default())
            .await
            .unwrap();
        let seeded = &game.questions[0];
        let service = QuestionService::new(pool);

        let fetched = service.get_by_id(seeded.id).await.unwrap();
        assert_eq!(fetched.id, seeded.id);
        assert_eq!(fetched.game_id, game.id);
        assert_eq!(fetched.category.id, seeded.category.id);
        assert_eq!(fetched.category.category_text, seeded.category.category_text);
        let answer_ids: Vec<Uuid> = fetched.answers.iter().map(|a| a.id).collect();
        let seeded_ids: Vec<Uuid> = seeded.answers.iter().map(|a| a.id).collect();
        assert_eq!(answer_ids, seeded_ids);

        let off = service.toggle(seeded.id, false).await.unwrap();
        assert!(!off.is_active);
        assert!(!service.get_by_id(seeded.id).await.unwrap().is_active);

        let on = service.toggle(seeded.id, true).await.unwrap();
        assert!(on.is_active);
        assert_eq!(on.answers.len(), seeded.answers.len());
    }

    #[tokio::test]
    #[ignore = "requires a Postgres database (DATABASE_URL)"]
    async fn test_unknown_question_is_not_found() {
        let service = QuestionService::new(test_pool().await);
        let missing = Uuid::now_v7();

        let err = service.get_by_id(missing).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = service.toggle(missing, false).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
