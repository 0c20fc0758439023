mod adapters;
mod app_state;
mod config;
mod domain;
mod router;
mod routes;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    adapters::outbound::JsonFileEntryRepository, app_state::AppState,
    domain::services::EntryServiceImpl,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reading_log_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = config::read_config()?;

    let storage_path = settings.storage.resolved_path();
    let repository = Arc::new(JsonFileEntryRepository::open(&storage_path).await?);
    let entry_service = EntryServiceImpl::new(repository, settings.validation.page_limits());
    let app_state = AppState::new(Arc::new(entry_service));

    let app = router::create(app_state, &settings.application);

    let address = format!(
        "{}:{}",
        settings.application.host, settings.application.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        "reading log at {}, listening on http://{}",
        storage_path.display(),
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;

    Ok(())
}
