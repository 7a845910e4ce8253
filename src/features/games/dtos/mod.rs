mod game_dto;

pub use game_dto::{CreateGameDto, GameResponseDto, ToggleGameDto};
