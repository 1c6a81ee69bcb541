//! Question repository

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use trivia_core::{NewQuestion, Question};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

fn question_from_row(row: &PgRow) -> Question {
    Question {
        id: row.get("id"),
        question: row.get("question"),
        answer: row.get("answer"),
        category: row.get("category"),
        difficulty: row.get("difficulty"),
    }
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every question, in insertion (id) order.
    pub async fn list_all(&self) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    /// Questions belonging to one category, in insertion order.
    pub async fn list_by_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query(
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE category = $1 ORDER BY id",
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    /// Case-insensitive substring match on the question text.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query(
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE question ILIKE $1 ORDER BY id",
        )
        .bind(format!("%{term}%"))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    /// Insert a validated question, returning the assigned id.
    pub async fn create(&self, new: NewQuestion) -> Result<i32, DbError> {
        let row = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(self.pool)
        .await?;

        Ok(row.get("id"))
    }

    /// Remove a question permanently, returning the deleted id.
    pub async fn delete(&self, id: i32) -> Result<i32, DbError> {
        let row = sqlx::query("DELETE FROM questions WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            })?;

        Ok(row.get("id"))
    }
}
