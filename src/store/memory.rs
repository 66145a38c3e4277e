use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum::async_trait;

use super::UserStore;
use crate::{domain::User, errors::Error, Result};

/// Store backed by a fixed list of users, for tests and local demos.
///
/// Clones share the fetch counter.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<Vec<User>>,
    fetches: Arc<AtomicUsize>,
    failure: Option<String>,
}

impl MemoryUserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(users),
            ..Default::default()
        }
    }

    /// A store whose every query fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    /// Number of `find_first` calls served so far.
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_first(&self) -> Result<Option<User>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            return Err(Error::string(message));
        }
        Ok(self.users.first().cloned())
    }
}
