//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    let config = with_overrides(args, config);
    tracing::info!("Starting server...");

    let db = Arc::new(Database::connect(&config.database_url).await?);

    let app_state = AppState::from_database(db);
    let app = create_router(app_state);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// CLI flags win over the environment-derived config.
fn with_overrides(args: ServeArgs, mut config: Config) -> Config {
    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_used_without_flags() {
        let config = with_overrides(ServeArgs::default(), Config::default());
        assert_eq!(config.server_addr(), "0.0.0.0:6001");
    }

    #[test]
    fn test_flags_override_config() {
        let args = ServeArgs {
            host: Some("127.0.0.1".into()),
            port: Some(9000),
        };
        let config = with_overrides(args, Config::default());
        assert_eq!(config.server_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_partial_override_keeps_config_host() {
        let args = ServeArgs {
            host: None,
            port: Some(7000),
        };
        let config = with_overrides(args, Config::default());
        assert_eq!(config.server_addr(), "0.0.0.0:7000");
    }
}
