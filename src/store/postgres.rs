use std::sync::Arc;

use axum::async_trait;
use chrono::{DateTime, Utc};
use secrecy::Secret;
use sqlx::PgPool;
use uuid::Uuid;

use super::UserStore;
use crate::{domain::User, Result};

#[derive(Clone)]
pub struct PgUserStore {
    pool: Arc<PgPool>,
}

impl PgUserStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        self.pool.as_ref()
    }
}

#[derive(sqlx::FromRow)]
struct UserRecord {
    id: Uuid,
    username: Option<String>,
    password: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            password: record.password.map(Secret::new),
            created_at: record.created_at,
        }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    #[tracing::instrument(name = "Fetching the first user", skip(self))]
    async fn find_first(&self) -> Result<Option<User>> {
        let row: Option<UserRecord> = sqlx::query_as(
            r#"
            SELECT id, username, password, created_at
            FROM users
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool())
        .await?;
        Ok(row.map(User::from))
    }
}
