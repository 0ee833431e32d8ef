// UserStore port: what the write side needs from the registered-user sequence.
//
// Purpose
// - Describe the storage capability as a trait so the core stays independent
//   of the backing structure.
//
// Boundaries
// - No concrete input or output here. Adapters implement this trait.
//
// Testing guidance
// - Use the in memory implementation for tests and local development.

use crate::modules::users::core::record::UserRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("username already stored: {username}")]
    Duplicate { username: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Appends a record, re-checking username uniqueness under the write lock.
    /// Returns `StoreError::Duplicate` when a concurrent register won the race.
    async fn append(&self, record: UserRecord) -> Result<(), StoreError>;
}

pub mod in_memory;
