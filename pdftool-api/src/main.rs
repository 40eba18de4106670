use anyhow::Context;
use pdftool::{FileSystemLoader, FormFieldService};
use pdftool_api::{app, ApiConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdftool=debug,pdftool_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();
    info!("Serving forms from {}", config.resource_root.display());

    let service = FormFieldService::new(FileSystemLoader::new(&config.resource_root));
    let app = app(service);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    info!("pdftool API listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
