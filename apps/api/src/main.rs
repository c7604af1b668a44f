mod analysis;
mod config;
mod errors;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::analysis::analyzer::AtsAnalyzer;
use crate::analysis::reference::ReferenceTables;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    // Reference tables: built-in unless ATS_REFERENCE_TABLES points at an override
    let tables = match &config.reference_tables {
        Some(path) => ReferenceTables::from_json_file(path)?,
        None => ReferenceTables::default(),
    };
    info!(
        "Analyzer ready: {} stopwords, {} action verbs, {} section phrases",
        tables.stopwords.len(),
        tables.action_verbs.len(),
        tables.section_phrases.len()
    );
    let analyzer = Arc::new(AtsAnalyzer::new(tables));

    // Build app state
    let state = AppState { analyzer };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
