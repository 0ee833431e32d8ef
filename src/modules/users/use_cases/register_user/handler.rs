// Registration command handler orchestrates the write flow.
//
// Responsibilities
// - Look up the existing record for the requested username.
// - Call the decider with the command.
// - Append the accepted record; no failing decision touches the store.

use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::modules::users::use_cases::register_user::decide::decide_register;
use crate::modules::users::use_cases::register_user::decision::{DecideError, Decision};
use crate::shared::infrastructure::user_store::{StoreError, UserStore};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("domain rejected: {0}")]
    Domain(DecideError),
}

pub struct RegisterUserHandler<TStore>
where
    TStore: UserStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RegisterUserHandler<TStore>
where
    TStore: UserStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: RegisterUser) -> Result<(), ApplicationError> {
        let existing = self.store.find_by_username(&command.username).await?;

        match decide_register(existing.as_ref(), command) {
            Decision::Accepted { record } => {
                self.store.append(record).await?;
                Ok(())
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
        }
    }
}
