//! Read access to the `users` table.

mod memory;
mod postgres;

use axum::async_trait;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

use crate::{domain::User, Result};

/// The only query the site needs. The trait has no write methods, so serving
/// a page cannot change what is stored.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// First row of `users`, no filter and no ordering. Which row that is
    /// depends on the database.
    async fn find_first(&self) -> Result<Option<User>>;
}
