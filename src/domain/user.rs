use chrono::{DateTime, Utc};
use secrecy::Secret;
use uuid::Uuid;

/// A row of the `users` table.
///
/// Both text columns are nullable. The password stays wrapped so it never
/// ends up in `Debug` output or in a log line.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password: password.map(Secret::new),
            created_at: Utc::now(),
        }
    }
}
