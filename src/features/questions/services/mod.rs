mod question_service;

pub use question_service::{fetch_game_questions, QuestionService};
