use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use customer_api::database::{CustomerGateway, DatabaseManager, MemoryCustomerGateway, PgCustomerGateway};
use customer_api::shutdown::{drain, shutdown_signal};
use customer_api::{app, AppState};

#[derive(Parser)]
#[command(name = "customer-api")]
#[command(about = "Customer CRUD API server")]
#[command(version)]
struct Args {
    #[arg(long, help = "Bind host (overrides SERVER_HOST)")]
    host: Option<String>,

    #[arg(long, help = "Bind port (overrides SERVER_PORT)")]
    port: Option<u16>,

    #[arg(
        long,
        value_name = "SECONDS",
        help = "How long to wait for in-flight requests after a shutdown signal"
    )]
    graceful_timeout: Option<u64>,

    #[arg(long, help = "Keep customers in process memory instead of PostgreSQL")]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = customer_api::config::config();
    info!("Starting Customer API in {:?} mode", config.environment);

    let mut server = config.server.clone();
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }
    if let Some(secs) = args.graceful_timeout {
        server.graceful_timeout_secs = secs;
    }

    let mut pool = None;
    let gateway: Arc<dyn CustomerGateway> = if args.in_memory {
        warn!("Using in-memory customer store; data is lost on exit");
        Arc::new(MemoryCustomerGateway::new())
    } else {
        let pg = DatabaseManager::connect(&config.database)
            .await
            .context("failed to connect to database")?;
        pool = Some(pg.clone());
        Arc::new(PgCustomerGateway::new(pg))
    };

    let app = app(AppState::new(gateway), server.request_timeout());

    let bind_addr = server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!("Customer API listening on http://{}", bind_addr);

    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();
    let server_future = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = signalled_tx.send(());
    });
    let mut serving = tokio::spawn(async move { server_future.await });

    let drained = match signalled_rx.await {
        Ok(()) => {
            let grace = server.graceful_timeout();
            info!("Shutdown signal received, draining connections for up to {:?}", grace);
            drain(&mut serving, grace).await?
        }
        // Server stopped without a signal
        Err(_) => {
            serving.await??;
            true
        }
    };

    if let Some(pool) = pool {
        if drained {
            pool.close().await;
            info!("Closed database pool");
        } else {
            // Aborted connections may still hold checkouts; close() would wait on them
            warn!("Skipping database pool close after forced shutdown");
        }
    }
    info!("Customer API stopped");
    Ok(())
}
