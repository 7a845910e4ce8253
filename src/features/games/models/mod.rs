mod game;

pub use game::Game;
