mod score_dto;

pub use score_dto::{AnswerRefDto, PlayQuestionDto, ScoreResponseDto, TeamRefDto};
