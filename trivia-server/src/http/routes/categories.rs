//! Category endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use trivia_core::category;
use trivia_core::{Category, PageParams, Pagination, Question};

use crate::db::repos::{CategoryRepo, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Category dictionary response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
}

/// GET /categories - every category as an `{id: type}` dictionary
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = CategoryRepo::new(&state.pool).list().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category::by_id(&categories),
    }))
}

/// Category-filtered listing response
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub current_category: Category,
    pub questions_number: usize,
}

/// GET /categories/{id}/questions - questions in one category
///
/// The category must exist in the store; there is no assumption about the
/// seeded id range. Unlike the main listing, a page past the end comes back
/// as an empty page rather than a not-found.
async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
    Query(params): Query<PageParams>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let current_category = CategoryRepo::new(&state.pool).get(category_id).await?;
    let questions = QuestionRepo::new(&state.pool)
        .list_by_category(category_id)
        .await?;

    let page = Pagination::from(params);

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page.slice(&questions).to_vec(),
        current_category,
        questions_number: questions.len(),
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(list_category_questions))
}
