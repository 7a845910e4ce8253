use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::questions::handlers;
use crate::features::questions::services::QuestionService;

/// Create routes for the questions feature
pub fn routes(service: Arc<QuestionService>) -> Router {
    Router::new()
        .route("/question/{question_id}", get(handlers::get_question))
        .route(
            "/question/toggle/{question_id}",
            post(handlers::toggle_question),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::shared::test_helpers::test_router;

    #[tokio::test]
    async fn test_get_question_rejects_malformed_id() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server.get("/question/abc").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("Invalid path parameter"));
    }
}
