use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use activities::modules::activities::adapters::outbound::registry_in_memory::InMemoryActivityRegistry;
use activities::shared::infrastructure::config::Config;
use activities::shell::{http, server, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // Seeded once per process; nothing is persisted.
    let registry = Arc::new(InMemoryActivityRegistry::default());
    let state = AppState::new(registry);

    let app = http::app(state, &config.static_dir);
    server::serve(&config, app).await
}
