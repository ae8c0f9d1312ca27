// Copyright (c) 2026 Voltaic Systems s.r.o.
//
// This file is part of Voltaic.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: licensing@voltaic-systems.example

use tracing::info;
use tracing_subscriber::EnvFilter;

use voltaic_server::config::ServerConfig;
use voltaic_server::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "server_config.toml".to_owned());
    let config = if std::path::Path::new(&config_path).exists() {
        ServerConfig::from_file(&config_path)?
    } else {
        ServerConfig::default()
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("voltaic_server={}", config.logging.level))),
        )
        .init();

    info!(path = %config_path, "configuration loaded");

    let app = router();
    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Voltaic server listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
