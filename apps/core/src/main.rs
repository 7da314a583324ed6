//! CircuitChat Backend Entry Point
//!
//! A small physics tutor: answers short questions about Ohm's Law, logic
//! gates and resistor networks over a JSON API. The interesting part lives
//! in `brain`; everything here is transport.
//!
//! ## Environment Variables
//! - `CIRCUITCHAT_HOST`: Host to bind to (default: 127.0.0.1)
//! - `CIRCUITCHAT_PORT`: Port to listen on (default: 3000)
//! - `CIRCUITCHAT_INTENTS`: Path to the intent table JSON (default: intents.json)
//! - `RUST_LOG`: Tracing filter (default: circuitchat_core=info,tower_http=info)

mod brain;
mod error;
mod handlers;
mod models;
mod routes;

#[cfg(test)]
mod tests;

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brain::{IntentTable, MessageClassifier};
use error::AppError;
use handlers::AppState;

#[derive(Parser)]
#[command(name = "circuitchat-core")]
#[command(version)]
#[command(about = "Chat backend for Ohm's Law, logic gates and resistor networks", long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "CIRCUITCHAT_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000, env = "CIRCUITCHAT_PORT")]
    port: u16,

    /// Path to the intent table
    #[arg(long, default_value = "intents.json", env = "CIRCUITCHAT_INTENTS")]
    intents: String,

    /// Enable CORS for all origins
    #[arg(long, default_value_t = false)]
    cors: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "circuitchat_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // The intent table is the only process-wide state; a broken table is a
    // startup failure, never a request-time one.
    let table = IntentTable::from_path(&args.intents)
        .with_context(|| format!("failed to load intent table from {}", args.intents))?;

    let state = AppState::new(MessageClassifier::new(table));
    let mut app = routes::create_router(state);

    if args.cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }
    app = app.layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| AppError::Config(format!("invalid bind address: {e}")))?;

    tracing::info!("CircuitChat core starting on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  POST /chat           - Classify a chat message");
    tracing::info!("  POST /api/ohm        - Solve Ohm's Law directly");
    tracing::info!("  POST /api/resistors  - Series/parallel equivalents");
    tracing::info!("  GET  /api/info       - Service information");
    tracing::info!("  GET  /health         - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
