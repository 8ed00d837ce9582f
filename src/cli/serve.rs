use std::path::Path;

use tracing::info;

use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config::load_config;
use crate::errors::VulndeckError;

pub async fn handle_serve(args: ServeArgs) -> Result<(), VulndeckError> {
    let config = load_config(args.config.as_deref().map(Path::new)).await?;

    let state = api::create_app_state(&config).await?;
    let app = api::build_router(state);

    let host = args.host.as_deref().unwrap_or(config.bind_host());
    let port = args.port.unwrap_or(config.bind_port());
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| VulndeckError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
