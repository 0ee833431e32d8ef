use crate::modules::users::use_cases::check_user_registration::queries_port::UserQueries;
use crate::modules::users::use_cases::register_user::handler::RegisterUserHandler;
use crate::shared::infrastructure::user_store::in_memory::InMemoryUserStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn UserQueries + Send + Sync>,
    pub register_handler: Arc<RegisterUserHandler<InMemoryUserStore>>,
}
