//! Schema setup and category seed data

use sqlx::PgPool;

/// Create the tables and seed the category reference data.
///
/// Idempotent; runs at every startup. Categories are fixed reference data
/// seeded once, so the insert is a no-op on an already-initialized store.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL REFERENCES categories(id),
            difficulty INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO categories (id, type) VALUES
            (1, 'Science'),
            (2, 'Art'),
            (3, 'Geography'),
            (4, 'History'),
            (5, 'Entertainment'),
            (6, 'Sports')
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
