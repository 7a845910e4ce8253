mod question_dto;

pub use question_dto::{AnswerResponseDto, QuestionResponseDto, ToggleQuestionDto};
