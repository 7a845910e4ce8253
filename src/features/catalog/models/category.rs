use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::constants::ALL_IN_CATEGORY;

/// Database model for category
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub category_text: String,
    pub is_all_in: bool,
    pub created_at: DateTime<Utc>,
}

/// Category row that is not in the store yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub id: Uuid,
    pub category_text: String,
    pub is_all_in: bool,
}

impl NewCategory {
    pub fn new(category_text: &str) -> Self {
        Self {
            id: Uuid::now_v7(),
            category_text: category_text.to_string(),
            is_all_in: category_text == ALL_IN_CATEGORY,
        }
    }
}
