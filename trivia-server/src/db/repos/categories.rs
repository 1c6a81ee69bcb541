//! Category repository

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use trivia_core::Category;

use super::questions::DbError;

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

fn category_from_row(row: &PgRow) -> Category {
    Category {
        id: row.get("id"),
        kind: row.get("type"),
    }
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All categories, in id order.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let rows = sqlx::query("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.iter().map(category_from_row).collect())
    }

    /// Look up one category. A missing id is a not-found, whatever its
    /// numeric value; there is no assumption about the seeded range.
    pub async fn get(&self, id: i32) -> Result<Category, DbError> {
        let row = sqlx::query("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "category",
                id: id.to_string(),
            })?;

        Ok(category_from_row(&row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    #[tokio::test]
    #[ignore = "requires database"]
    async fn seeded_categories_resolve() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");

        let repo = CategoryRepo::new(&pool);
        let science = repo.get(1).await.expect("category 1 missing");
        assert_eq!(science.kind, "Science");

        let err = repo.get(999).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "category", .. }));
    }
}
