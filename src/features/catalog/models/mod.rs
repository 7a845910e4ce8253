mod category;
mod question_bank;

pub use category::{Category, NewCategory};
pub use question_bank::{validate_entry, AnswerEntry, CategoryEntry, QuestionBank, QuestionEntry};
