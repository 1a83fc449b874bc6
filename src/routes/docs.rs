//! OpenAPI document for the `/api` surface.

use crate::handlers::{genres, questions, quizzes, scores, users};
use crate::models::{Genre, Question, Quiz, Score, User};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        users::create_user,
        users::list_users,
        users::get_user,
        users::delete_user,
        genres::create_genre,
        genres::list_genres,
        genres::delete_genre,
        quizzes::create_quiz,
        quizzes::delete_quiz,
        questions::create_question,
        questions::list_quiz_questions,
        questions::edit_question,
        questions::delete_question,
        scores::create_score,
        scores::list_user_scores,
    ),
    components(schemas(User, Genre, Quiz, Question, Score)),
    tags(
        (name = "users", description = "Quiz players and admins"),
        (name = "genres", description = "Genres and the quizzes filed under them"),
        (name = "quizzes"),
        (name = "questions"),
        (name = "scores", description = "Per-user quiz results")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /api-docs/openapi.json
pub fn docs_routes() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}
