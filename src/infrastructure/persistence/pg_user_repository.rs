//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for users.
///
/// Each method runs a single statement, so every write is its own atomic unit.
/// Deletes are hard deletes.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User::new(r.first_name, r.last_name, r.email).with_id(r.id)
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, email
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn save(&self, user: User) -> Result<Option<User>, AppError> {
        let row = match user.id {
            None => {
                sqlx::query_as::<_, UserRow>(
                    r#"
                    INSERT INTO users (first_name, last_name, email)
                    VALUES ($1, $2, $3)
                    RETURNING id, first_name, last_name, email
                    "#,
                )
                .bind(&user.first_name)
                .bind(&user.last_name)
                .bind(&user.email)
                .fetch_optional(self.pool.as_ref())
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, UserRow>(
                    r#"
                    UPDATE users SET
                        first_name = $2,
                        last_name  = $3,
                        email      = $4
                    WHERE id = $1
                    RETURNING id, first_name, last_name, email
                    "#,
                )
                .bind(id)
                .bind(&user.first_name)
                .bind(&user.last_name)
                .bind(&user.email)
                .fetch_optional(self.pool.as_ref())
                .await?
            }
        };

        Ok(row.map(User::from))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        tracing::debug!(id, rows = result.rows_affected(), "User delete executed");

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
