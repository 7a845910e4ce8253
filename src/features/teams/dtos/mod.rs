mod team_dto;

pub use team_dto::{NewTeamDto, RegisterTeamDto, RegisteredUserDto, TeamResponseDto};
