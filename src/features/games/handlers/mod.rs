pub mod game_handler;

pub use game_handler::{
    __path_create_game, __path_get_latest_game, __path_toggle_game, create_game,
    get_latest_game, toggle_game,
};
