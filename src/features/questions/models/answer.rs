use sqlx::FromRow;
use uuid::Uuid;

/// Database model for answer
#[derive(Debug, Clone, FromRow)]
pub struct Answer {
    pub id: Uuid,
    pub question_id: Uuid,
    pub answer_text: String,
    pub point: i32,
}
