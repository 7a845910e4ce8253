pub mod question_handler;

pub use question_handler::{__path_get_question, __path_toggle_question, get_question, toggle_question};
