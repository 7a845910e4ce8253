//! Catalog seeding: makes the stored categories a superset of the question
//! bank's categories, then materializes questions and answers for a game.
//!
//! Every function takes a `&mut PgConnection` so callers decide the
//! transaction boundary. The planning steps are pure and do not touch the
//! database.

use std::collections::HashSet;
use std::sync::Arc;

use sqlx::{PgConnection, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{db_error, Result};
use crate::features::catalog::models::{validate_entry, Category, NewCategory, QuestionBank};
use crate::features::questions::models::{Answer, Question};

/// Rows per multi-row INSERT, keeps bind parameters well below the Postgres limit
const BULK_INSERT_CHUNK: usize = 1000;

/// Flat, ordered rows for one game's catalog
#[derive(Debug, Default)]
pub struct CatalogRows {
    pub questions: Vec<Question>,
    pub answers: Vec<Answer>,
}

/// Categories of `bank` whose display text is not in `existing`.
///
/// Bank order is preserved and repeated names in the bank collapse to the
/// first occurrence, so the result never holds the same text twice.
pub fn missing_categories(existing: &[Category], bank: &QuestionBank) -> Vec<NewCategory> {
    let mut known: HashSet<&str> = existing
        .iter()
        .map(|category| category.category_text.as_str())
        .collect();

    let mut missing = Vec::new();
    for entry in bank.entries() {
        if known.insert(entry.category_name.as_str()) {
            missing.push(NewCategory::new(&entry.category_name));
        }
    }
    missing
}

/// Build question and answer rows for `game_id`.
///
/// Order: categories as given, then questions within each matching bank
/// entry, then answers within each question.
pub fn build_catalog(
    game_id: Uuid,
    categories: &[Category],
    bank: &QuestionBank,
) -> Result<CatalogRows> {
    let mut rows = CatalogRows::default();

    for category in categories {
        for entry in bank.entries_for(&category.category_text) {
            validate_entry(entry)?;

            for question_entry in &entry.questions {
                let question = Question {
                    id: Uuid::now_v7(),
                    game_id,
                    category_id: category.id,
                    question_text: question_entry.question_text.clone(),
                    music_name: question_entry.music_name.clone(),
                    music_name_path: question_entry.music_name_path.clone(),
                    difficulty: question_entry.difficulty,
                    is_active: true,
                };

                for answer_entry in &question_entry.answers {
                    rows.answers.push(Answer {
                        id: Uuid::now_v7(),
                        question_id: question.id,
                        answer_text: answer_entry.answer_text.clone(),
                        point: answer_entry.point,
                    });
                }

                rows.questions.push(question);
            }
        }
    }

    Ok(rows)
}

/// Seeds the catalog from the in-memory question bank
pub struct CatalogSeeder {
    bank: Arc<QuestionBank>,
}

impl CatalogSeeder {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self { bank }
    }

    /// Insert the bank's missing categories and return the full category set
    /// in insertion order. Calling it again inserts nothing.
    pub async fn seed_categories(&self, conn: &mut PgConnection) -> Result<Vec<Category>> {
        let existing = fetch_categories(conn).await?;
        let missing = missing_categories(&existing, &self.bank);

        if missing.is_empty() {
            tracing::debug!("Catalog categories up to date ({} stored)", existing.len());
            return Ok(existing);
        }

        insert_categories(conn, &missing).await?;
        tracing::info!(
            "Seeded {} new categories: {:?}",
            missing.len(),
            missing
                .iter()
                .map(|c| c.category_text.as_str())
                .collect::<Vec<_>>()
        );

        fetch_categories(conn).await
    }

    /// Create one question per bank question and one answer per bank answer
    /// for `game_id`, returning the inserted questions.
    pub async fn seed_questions_and_answers(
        &self,
        conn: &mut PgConnection,
        game_id: Uuid,
        categories: &[Category],
    ) -> Result<Vec<Question>> {
        let rows = build_catalog(game_id, categories, &self.bank)?;

        insert_questions(conn, &rows.questions).await?;
        insert_answers(conn, &rows.answers).await?;

        tracing::info!(
            "Seeded {} questions and {} answers for game {}",
            rows.questions.len(),
            rows.answers.len(),
            game_id
        );

        Ok(rows.questions)
    }
}

async fn fetch_categories(conn: &mut PgConnection) -> Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, category_text, is_all_in, created_at
        FROM categories
        ORDER BY id
        "#,
    )
    .fetch_all(&mut *conn)
    .await
    .map_err(|e| {
        tracing::error!("Failed to list categories: {:?}", e);
        db_error(e)
    })
}

async fn insert_categories(conn: &mut PgConnection, categories: &[NewCategory]) -> Result<()> {
    for chunk in categories.chunks(BULK_INSERT_CHUNK) {
        let mut builder =
            QueryBuilder::<Postgres>::new("INSERT INTO categories (id, category_text, is_all_in) ");
        builder.push_values(chunk, |mut row, category| {
            row.push_bind(category.id)
                .push_bind(category.category_text.clone())
                .push_bind(category.is_all_in);
        });

        builder.build().execute(&mut *conn).await.map_err(|e| {
            tracing::error!("Failed to insert categories: {:?}", e);
            db_error(e)
        })?;
    }
    Ok(())
}

async fn insert_questions(conn: &mut PgConnection, questions: &[Question]) -> Result<()> {
    for chunk in questions.chunks(BULK_INSERT_CHUNK) {
        let mut builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO questions (id, game_id, category_id, question_text, music_name, music_name_path, difficulty, is_active) ",
        );
        builder.push_values(chunk, |mut row, question| {
            row.push_bind(question.id)
                .push_bind(question.game_id)
                .push_bind(question.category_id)
                .push_bind(question.question_text.clone())
                .push_bind(question.music_name.clone())
                .push_bind(question.music_name_path.clone())
                .push_bind(question.difficulty)
                .push_bind(question.is_active);
        });

        builder.build().execute(&mut *conn).await.map_err(|e| {
            tracing::error!("Failed to insert questions: {:?}", e);
            db_error(e)
        })?;
    }
    Ok(())
}

async fn insert_answers(conn: &mut PgConnection, answers: &[Answer]) -> Result<()> {
    for chunk in answers.chunks(BULK_INSERT_CHUNK) {
        let mut builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO answers (id, question_id, answer_text, point) ",
        );
        builder.push_values(chunk, |mut row, answer| {
            row.push_bind(answer.id)
                .push_bind(answer.question_id)
                .push_bind(answer.answer_text.clone())
                .push_bind(answer.point);
        });

        builder.build().execute(&mut *conn).await.map_err(|e| {
            tracing::error!("Failed to insert answers: {:?}", e);
            db_error(e)
        })?;
    }
    Ok(())
}
