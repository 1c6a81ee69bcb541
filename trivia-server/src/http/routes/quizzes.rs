//! Quiz play endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use trivia_core::quiz::{self, ALL_CATEGORIES};
use trivia_core::Question;

use crate::db::repos::QuestionRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;

/// Category selection as the frontend sends it; id 0 means all categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizCategory {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Quiz turn request. The previous-questions list is maintained entirely by
/// the caller; the server is stateless across turns.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    pub previous_questions: Vec<i32>,
}

/// Quiz turn response. `question` is null once the pool is exhausted, and
/// `previous_questions` comes back unchanged; the caller appends the
/// returned question's id before the next turn.
#[derive(Serialize)]
pub struct QuizResponse {
    pub quiz_category: QuizCategory,
    pub question: Option<Question>,
    pub previous_questions: Vec<i32>,
}

/// POST /quizzes - draw one unseen question for the session
async fn play_quiz(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let repo = QuestionRepo::new(&state.pool);
    let pool = if req.quiz_category.id == ALL_CATEGORIES {
        repo.list_all().await?
    } else {
        // An unknown category yields an empty pool, which reads as an
        // exhausted quiz rather than an error.
        repo.list_by_category(req.quiz_category.id).await?
    };

    let question = quiz::draw(&pool, &req.previous_questions, &mut rand::thread_rng()).cloned();

    Ok(Json(QuizResponse {
        quiz_category: req.quiz_category,
        question,
        previous_questions: req.previous_questions,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(play_quiz))
}
