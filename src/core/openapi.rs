use utoipa::{Modify, OpenApi};

use crate::features::catalog::dtos as catalog_dtos;
use crate::features::games::{dtos as games_dtos, handlers as games_handlers};
use crate::features::questions::{dtos as questions_dtos, handlers as questions_handlers};
use crate::features::scores::{dtos as scores_dtos, handlers as scores_handlers};
use crate::features::teams::{dtos as teams_dtos, handlers as teams_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Games
        games_handlers::get_latest_game,
        games_handlers::create_game,
        games_handlers::toggle_game,
        // Scores
        scores_handlers::play_question,
        scores_handlers::get_game_scores,
        scores_handlers::list_scores,
        // Questions
        questions_handlers::get_question,
        questions_handlers::toggle_question,
        // Teams
        teams_handlers::register_team,
        teams_handlers::list_teams,
    ),
    components(
        schemas(
            // Games
            games_dtos::CreateGameDto,
            games_dtos::ToggleGameDto,
            games_dtos::GameResponseDto,
            ApiResponse<games_dtos::GameResponseDto>,
            // Questions
            catalog_dtos::CategoryResponseDto,
            questions_dtos::ToggleQuestionDto,
            questions_dtos::AnswerResponseDto,
            questions_dtos::QuestionResponseDto,
            ApiResponse<questions_dtos::QuestionResponseDto>,
            // Scores
            scores_dtos::PlayQuestionDto,
            scores_dtos::AnswerRefDto,
            scores_dtos::TeamRefDto,
            scores_dtos::ScoreResponseDto,
            ApiResponse<scores_dtos::ScoreResponseDto>,
            ApiResponse<Vec<scores_dtos::ScoreResponseDto>>,
            // Teams
            teams_dtos::RegisterTeamDto,
            teams_dtos::NewTeamDto,
            teams_dtos::TeamResponseDto,
            teams_dtos::RegisteredUserDto,
            ApiResponse<teams_dtos::RegisteredUserDto>,
            ApiResponse<Vec<teams_dtos::TeamResponseDto>>,
        )
    ),
    tags(
        (name = "games", description = "Game bootstrap and lifecycle"),
        (name = "questions", description = "Single questions and their answers"),
        (name = "scores", description = "Playing questions and reading scores"),
        (name = "teams", description = "Team registration"),
    ),
    info(
        title = "Quiz Game API",
        version = "0.1.0",
        description = "API documentation for the quiz game backend",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
