use std::net::SocketAddr;

use anyhow::Result;
use tracing::info;

use spacegate_lib::Client;
use spacegate_server::{create_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spacegate_server=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let config = Config::from_env()?;

    let state = AppState::new(Client::new(config.api_key.clone()));
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("gateway listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
