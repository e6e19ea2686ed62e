use anyhow::Context;
use ims_urls::{app, config::Config, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ims_urls=info,tower_http=info")),
        )
        .init();

    tracing::info!("ims-urls starting");

    let config = Config::from_env()?;
    config.log_startup();

    let addr = config.bind_addr();
    let state = AppState::new(config);
    tracing::info!("Serving {} routes", ims_urls::routes::ROUTES.len());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app::router(state))
        .await
        .context("Server error")?;

    Ok(())
}
