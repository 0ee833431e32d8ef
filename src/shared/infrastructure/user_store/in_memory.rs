// In memory implementation of the UserStore port.
//
// Purpose
// - Back the service with a transient record sequence; no database involved.
//
// Responsibilities
// - Keep records in insertion order behind an async RwLock.
// - Enforce username uniqueness at append time so check-then-append stays
//   atomic at the store boundary.
// - Offer failure toggles so handler tests can exercise backend errors and
//   append races.

use crate::modules::users::core::record::UserRecord;
use crate::modules::users::use_cases::check_user_registration::queries_port::UserQueries;
use crate::shared::infrastructure::user_store::{StoreError, UserStore};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Vec<UserRecord>>,
    offline: AtomicBool,
    append_delay_ms: AtomicU64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn set_append_delay_ms(&self, delay: u64) {
        self.append_delay_ms.store(delay, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("user store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        self.check_online()?;
        let guard = self.inner.read().await;
        Ok(guard.iter().find(|r| r.username == username).cloned())
    }

    async fn append(&self, record: UserRecord) -> Result<(), StoreError> {
        self.check_online()?;
        let delay = self.append_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let mut guard = self.inner.write().await;
        if guard.iter().any(|r| r.username == record.username) {
            return Err(StoreError::Duplicate {
                username: record.username,
            });
        }
        guard.push(record);
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserQueries for InMemoryUserStore {
    async fn is_registered(&self, username: &str) -> anyhow::Result<bool> {
        Ok(self.find_by_username(username).await?.is_some())
    }
}
