//! # Career Mantra API Server
//!
//! Backend for the Career Mantra job board and AI career coach:
//! - Registration, login, and role-based access (user/recruiter/admin)
//! - Job postings with owner-scoped management and a public board
//! - Applications with per-recruiter review scoping
//! - Gemini-backed chat, resume analysis, and roadmap generation
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p careermantra-api
//! ```

use std::sync::Arc;

use careermantra_api::{
    ai::{ChatModel, DisabledModel, GeminiClient},
    app::{build_router, AppState},
    config::Config,
};
use careermantra_shared::store::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "careermantra_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Career Mantra API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let ai: Arc<dyn ChatModel> = match config.ai.api_key.clone() {
        Some(key) => {
            tracing::info!(model = %config.ai.model, "AI backend: Gemini");
            Arc::new(GeminiClient::new(key, config.ai.model.clone())?)
        }
        None => {
            tracing::warn!("GEMINI_API_KEY not set; AI endpoints will answer 503");
            Arc::new(DisabledModel)
        }
    };

    let bind_address = config.bind_address();
    let state = AppState::new(Store::new(), ai, config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
