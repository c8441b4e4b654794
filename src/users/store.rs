use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::error::StoreError;
use super::model::{User, UserFields};

/// Durable storage for user records.
///
/// Implementations assign `id`, `created_at` and `updated_at`, and enforce
/// email uniqueness by returning [`StoreError::Conflict`].
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, newest first.
    async fn list_all(&self) -> Result<Vec<User>, StoreError>;

    async fn insert(&self, fields: UserFields) -> Result<User, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Overwrites the stored columns of `user`. `None` means the row is gone.
    async fn update(&self, user: &User, fields: UserFields) -> Result<Option<User>, StoreError>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn insert(&self, fields: UserFields) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.password_hash)
        .fetch_one(&self.db)
        .await
        .map_err(StoreError::from_sqlx)?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn update(&self, user: &User, fields: UserFields) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $2, email = $3, password_hash = $4, updated_at = now()
            WHERE id = $1
            RETURNING id, name, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(user.id)
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.password_hash)
        .fetch_optional(&self.db)
        .await
        .map_err(StoreError::from_sqlx)?;
        Ok(user)
    }
}
