use sqlx::FromRow;
use uuid::Uuid;

/// Database model for question
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: Uuid,
    pub game_id: Uuid,
    pub category_id: Uuid,
    pub question_text: String,
    pub music_name: Option<String>,
    pub music_name_path: Option<String>,
    pub difficulty: i32,
    pub is_active: bool,
}

/// Question joined with its category
#[derive(Debug, Clone, FromRow)]
pub struct QuestionWithCategory {
    pub id: Uuid,
    pub game_id: Uuid,
    pub category_id: Uuid,
    pub question_text: String,
    pub music_name: Option<String>,
    pub music_name_path: Option<String>,
    pub difficulty: i32,
    pub is_active: bool,
    pub category_text: String,
    pub is_all_in: bool,
}
