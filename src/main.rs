use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use user_registrations::modules::users::use_cases::register_user::handler::RegisterUserHandler;
use user_registrations::shared::infrastructure::user_store::in_memory::InMemoryUserStore;
use user_registrations::shell::config::ShellConfig;
use user_registrations::shell::http::router;
use user_registrations::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = ShellConfig::from_env()?;

    // In-memory deps; registrations do not survive a restart
    let user_store = Arc::new(InMemoryUserStore::new());
    let register_handler = Arc::new(RegisterUserHandler::new(user_store.clone()));

    let state = AppState {
        queries: user_store,
        register_handler,
    };

    let app = router(state).layer(TraceLayer::new_for_http());

    tracing::info!("registration endpoint: http://{}/register-user", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
