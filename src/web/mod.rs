pub mod pages;
mod routes;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::handler::HandlerWithoutStateExt;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::chat::{ChatModel, GeminiClient};
use crate::config::Config;
use crate::content::NewsService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub news: Arc<NewsService>,
    /// `None` when no model API key is configured.
    pub chat: Option<Arc<dyn ChatModel>>,
}

impl AppState {
    /// Build the state from configuration, connecting the content backend
    /// and chat model when they are configured.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be constructed.
    pub fn from_config(config: Config) -> Result<Self> {
        let news = NewsService::from_config(&config).context("Failed to initialize content backend")?;
        if news.is_configured() {
            info!(
                dataset = %config.sanity_dataset,
                cache_ttl_secs = config.article_cache_ttl.as_secs(),
                "Content backend configured"
            );
        } else {
            warn!("SANITY_PROJECT_ID not set; serving built-in articles only");
        }

        let chat = GeminiClient::from_config(&config)
            .context("Failed to initialize chat model client")?
            .map(|client| Arc::new(client) as Arc<dyn ChatModel>);
        if chat.is_some() {
            info!(model = %config.gemini_model, "Chat model configured");
        } else {
            warn!("GEMINI_API_KEY not set; chat requests will fail");
        }

        Ok(Self {
            config: Arc::new(config),
            news: Arc::new(news),
            chat,
        })
    }
}

/// Start the web server.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn serve(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let state = AppState::from_config(config)?;
    let app = create_app(state);

    info!(addr = %addr, "Starting HTTP web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app)
        .await
        .context("Web server error")?;

    Ok(())
}

/// Create the main application router.
pub fn create_app(state: AppState) -> Router {
    let static_dir = find_static_dir();
    info!(static_dir = ?static_dir, "Serving static files");

    Router::new()
        .merge(routes::router())
        .nest_service("/static", ServeDir::new(&static_dir))
        // Article images are referenced from the site root.
        .fallback_service(
            ServeDir::new(&static_dir).not_found_service(routes::not_found.into_service()),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Find the static files directory.
///
/// Checks in order:
/// 1. ./static (development)
/// 2. /usr/share/para-sports-news/static (installed)
/// 3. Falls back to ./static
fn find_static_dir() -> PathBuf {
    let candidates = [
        PathBuf::from("./static"),
        PathBuf::from("/usr/share/para-sports-news/static"),
    ];

    for path in &candidates {
        if path.exists() && path.is_dir() {
            return path.clone();
        }
    }

    PathBuf::from("./static")
}
