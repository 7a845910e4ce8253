pub mod team_handler;

pub use team_handler::{__path_list_teams, __path_register_team, list_teams, register_team};
