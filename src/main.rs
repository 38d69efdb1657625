mod app;
mod auth;
mod config;
mod error;
mod extractors;
mod images;
mod routes;
mod state;
mod utils;
mod video;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "modemode=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = AppState::init()?;

    if app_state.config.has_gemini_key() {
        tracing::info!("GEMINI_API_KEY is set");
    } else {
        tracing::warn!("GEMINI_API_KEY is not set; serving placeholder images");
    }
    if !app_state.config.index_file().is_file() {
        tracing::warn!(
            path = %app_state.config.index_file().display(),
            "SPA entry document not found; unmatched routes will return 404"
        );
    }

    let app = app::build_app(app_state.clone());
    app::serve(app, &app_state).await
}
