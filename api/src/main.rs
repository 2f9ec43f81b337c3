use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::http::server::http_server::{router, state};
use crate::args::Args;

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Arc::new(Args::parse());

    let state = state(args.clone()).await?;
    let router = router(state)?;

    let addr = format!("0.0.0.0:{}", args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
