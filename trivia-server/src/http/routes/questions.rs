//! Question endpoints: listing, search, create, delete

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use trivia_core::category;
use trivia_core::{Category, NewQuestion, PageParams, Pagination, Question, ValidationError};

use crate::db::repos::{CategoryRepo, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;

/// Paginated listing response
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<Category>,
}

/// GET /questions?page=N - paginated listing across all categories
///
/// A page past the last one is a not-found; the frontend renders page
/// links from `total_questions` and never asks for more.
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let categories = CategoryRepo::new(&state.pool).list().await?;
    let questions = QuestionRepo::new(&state.pool).list_all().await?;

    let page = Pagination::from(params);
    if page.beyond_last(questions.len()) {
        return Err(ApiError::NotFound {
            resource: "page",
            id: page.page.to_string(),
        });
    }

    Ok(Json(QuestionListResponse {
        success: true,
        categories: category::by_id(&categories),
        questions: page.slice(&questions).to_vec(),
        total_questions: questions.len(),
        current_category: None,
    }))
}

/// POST /questions body. The same endpoint serves search and create; which
/// one is decided by [`QuestionPost::try_from`] before any storage work.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionPostBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

/// The two operations POST /questions can carry.
#[derive(Debug)]
pub enum QuestionPost {
    Search { term: String },
    Create(NewQuestion),
}

impl TryFrom<QuestionPostBody> for QuestionPost {
    type Error = ValidationError;

    fn try_from(body: QuestionPostBody) -> Result<Self, Self::Error> {
        match body.search_term {
            // An empty search term is not a search; the body must then
            // hold a complete new question.
            Some(term) if !term.is_empty() => Ok(Self::Search { term }),
            _ => NewQuestion::new(body.question, body.answer, body.category, body.difficulty)
                .map(Self::Create),
        }
    }
}

/// Search response
#[derive(Serialize)]
pub struct SearchResponse {
    pub questions: Vec<Question>,
    pub search_term: String,
    pub results_number: usize,
}

/// Create response
#[derive(Serialize)]
pub struct CreateResponse {
    pub success: bool,
    pub added_question_id: i32,
}

/// POST /questions - search by term, or add a new question
async fn search_or_create(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<QuestionPostBody>,
) -> Result<Response, ApiError> {
    match QuestionPost::try_from(body)? {
        QuestionPost::Search { term } => {
            let questions = QuestionRepo::new(&state.pool).search(&term).await?;
            let results_number = questions.len();

            Ok(Json(SearchResponse {
                questions,
                search_term: term,
                results_number,
            })
            .into_response())
        }
        QuestionPost::Create(new) => {
            let added_question_id = QuestionRepo::new(&state.pool).create(new).await?;

            Ok(Json(CreateResponse {
                success: true,
                added_question_id,
            })
            .into_response())
        }
    }
}

/// Delete response
#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted_question_id: i32,
}

/// DELETE /questions/{id} - remove a question permanently
async fn delete_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted_question_id = QuestionRepo::new(&state.pool).delete(id).await?;

    Ok(Json(DeleteResponse {
        success: true,
        deleted_question_id,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(search_or_create))
        .route("/questions/{id}", delete(delete_question))
}
