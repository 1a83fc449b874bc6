//! `/api/*` routes. Collection paths answer with or without a trailing slash.

use crate::handlers::genres::{create_genre, delete_genre, list_genres};
use crate::handlers::questions::{create_question, delete_question, edit_question, list_quiz_questions};
use crate::handlers::quizzes::{create_quiz, delete_quiz};
use crate::handlers::scores::{create_score, list_user_scores};
use crate::handlers::users::{create_user, delete_user, get_user, list_users};
use crate::state::AppState;
use axum::{
    routing::{get, post, MethodRouter},
    Router,
};

fn collection(router: Router<AppState>, path: &str, methods: MethodRouter<AppState>) -> Router<AppState> {
    router
        .route(path, methods.clone())
        .route(&format!("{}/", path), methods)
}

pub fn api_routes(state: AppState) -> Router {
    let router = Router::new();
    let router = collection(router, "/api/users", post(create_user).get(list_users));
    let router = collection(router, "/api/genres", post(create_genre).get(list_genres));
    let router = collection(router, "/api/quizzes", post(create_quiz));
    let router = collection(router, "/api/questions", post(create_question));
    let router = collection(router, "/api/scores", post(create_score));
    router
        .route("/api/users/:id", get(get_user).delete(delete_user))
        .route("/api/genres/:id", axum::routing::delete(delete_genre))
        .route("/api/quizzes/:id", axum::routing::delete(delete_quiz))
        .route(
            "/api/questions/:id",
            get(list_quiz_questions).put(edit_question).delete(delete_question),
        )
        .route("/api/scores/:id", get(list_user_scores))
        .with_state(state)
}
