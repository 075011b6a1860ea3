//! Task service HTTP server.
//!
//! Wires the in-memory repository, clock, and task service together and
//! hands the service to the REST router. Dependencies are constructed once
//! here and injected explicitly; there is no process-global state.

use clap::Parser;
use mockable::DefaultClock;
use std::net::SocketAddr;
use std::sync::Arc;
use taskforge::task::{
    adapters::{http, memory::InMemoryTaskRepository},
    services::TaskService,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line options for the task server.
#[derive(Debug, Parser)]
#[command(name = "taskforge-server", about = "In-memory task management REST service")]
struct Args {
    /// Socket address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let repository = Arc::new(InMemoryTaskRepository::new());
    let service = Arc::new(TaskService::new(repository, Arc::new(DefaultClock)));
    let router = http::build_router(service);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("task service listening on http://{}", args.bind);
    axum::serve(listener, router).await?;
    Ok(())
}
