use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::catalog::dtos::CategoryResponseDto;
use crate::features::questions::models::{Answer, QuestionWithCategory};

/// Request DTO for switching a question on or off
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleQuestionDto {
    pub is_active: bool,
}

/// Response DTO for answer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponseDto {
    pub id: Uuid,
    pub answer_text: String,
    pub point: i32,
}

impl From<Answer> for AnswerResponseDto {
    fn from(a: Answer) -> Self {
        Self {
            id: a.id,
            answer_text: a.answer_text,
            point: a.point,
        }
    }
}

/// Response DTO for question, with its category and answers attached
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponseDto {
    pub id: Uuid,
    pub game_id: Uuid,
    pub question_text: String,
    pub music_name: Option<String>,
    pub music_name_path: Option<String>,
    pub difficulty: i32,
    pub is_active: bool,
    pub category: CategoryResponseDto,
    pub answers: Vec<AnswerResponseDto>,
}

impl QuestionResponseDto {
    pub fn from_parts(q: QuestionWithCategory, answers: Vec<AnswerResponseDto>) -> Self {
        Self {
            id: q.id,
            game_id: q.game_id,
            question_text: q.question_text,
            music_name: q.music_name,
            music_name_path: q.music_name_path,
            difficulty: q.difficulty,
            is_active: q.is_active,
            category: CategoryResponseDto {
                id: q.category_id,
                category_text: q.category_text,
                is_all_in: q.is_all_in,
            },
            answers,
        }
    }
}
