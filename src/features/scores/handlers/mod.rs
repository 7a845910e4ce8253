pub mod score_handler;

pub use score_handler::{
    __path_get_game_scores, __path_list_scores, __path_play_question, get_game_scores,
    list_scores, play_question,
};
