use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use serde::Serialize;
use serde_json::{json, Value};

use super::pages;
use super::AppState;
use crate::chat::{ChatError, ChatMessage, ChatReply, Usage, SYSTEM_PROMPT};
use crate::config::Config;
use crate::content::cache::WEBHOOK_TAGS;
use crate::content::fallback::fallback_slugs;
use crate::sanity::queries;
use crate::sports::find_sport;

const CHAT_FAILURE: &str =
    "Failed to process chat request. There was an issue connecting to the AI service.";

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/news", get(news_list))
        .route("/news/:slug", get(article_detail))
        .route("/news/:slug/", get(article_detail))
        .route("/sports", get(sports_index))
        .route("/sports/:sport", get(sport_detail))
        .route("/sports/:sport/", get(sport_detail))
        .route("/healthz", get(health))
        .route("/api/articles", get(api_articles))
        .route("/api/chat", post(api_chat))
        .route("/api/sanity/webhook", post(sanity_webhook))
        // Debug routes
        .route("/api/debug/sanity-connection", get(debug_sanity_connection))
        .route("/api/debug/sanity-data", get(debug_sanity_data))
        .route("/api/debug/image-refs", get(debug_image_refs))
}

// ========== HTML Routes ==========

async fn home(State(state): State<AppState>) -> Response {
    let featured = state.news.featured_articles().await;
    let latest = state.news.latest_articles().await;

    let html = pages::render_home_page(&featured, &latest, state.chat.is_some());
    Html(html.into_string()).into_response()
}

async fn news_list(State(state): State<AppState>) -> Response {
    let articles = state.news.all_articles().await;
    Html(pages::render_news_list_page(&articles).into_string()).into_response()
}

async fn article_detail(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.news.article_page(&slug).await {
        Some(detail) => {
            let html = pages::render_article_page(&detail, state.news.images());
            Html(html.into_string()).into_response()
        }
        None => {
            tracing::info!(slug = %slug, "Article not found");
            let html = pages::render_not_found_page(
                "Article Not Found",
                "We couldn't find the story you were looking for.",
                "/news",
                "Back to News",
            );
            (StatusCode::NOT_FOUND, Html(html.into_string())).into_response()
        }
    }
}

async fn sports_index() -> Response {
    Html(pages::render_sports_index_page().into_string()).into_response()
}

async fn sport_detail(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let Some(sport) = find_sport(&slug) else {
        let html = pages::render_not_found_page(
            "Sport Not Found",
            "We don't have a guide for that sport yet.",
            "/sports",
            "All sports",
        );
        return (StatusCode::NOT_FOUND, Html(html.into_string())).into_response();
    };

    let news = state.news.sport_articles(sport.slug).await;
    Html(pages::render_sport_page(sport, &news).into_string()).into_response()
}

/// Fallback for paths that match neither a route nor a static file.
pub(super) async fn not_found() -> Response {
    let html = pages::render_not_found_page(
        "Page Not Found",
        "The page you requested does not exist.",
        "/",
        "Back to Home",
    );
    (StatusCode::NOT_FOUND, Html(html.into_string())).into_response()
}

async fn health() -> &'static str {
    "OK"
}

// ========== API Routes ==========

async fn api_articles(State(state): State<AppState>) -> Response {
    Json(state.news.featured_articles().await).into_response()
}

/// A validated chat request.
#[derive(Debug, PartialEq, Eq)]
enum ChatRequest {
    /// A full conversation; answered with `{content}`.
    Conversation(Vec<ChatMessage>),
    /// A single question; answered with `{response, usage}`.
    Single(String),
}

impl ChatRequest {
    fn parse(body: &Value) -> Result<Self, String> {
        if let Some(messages) = body.get("messages") {
            let messages: Vec<ChatMessage> = serde_json::from_value(messages.clone())
                .map_err(|e| format!("`messages` must be an array of {{role, content}}: {e}"))?;
            if messages.is_empty() {
                return Err("`messages` must not be empty".to_string());
            }
            return Ok(Self::Conversation(messages));
        }

        match body.get("message").and_then(Value::as_str).map(str::trim) {
            Some(message) if !message.is_empty() => Ok(Self::Single(message.to_string())),
            Some(_) => Err("`message` must not be empty".to_string()),
            None => Err("Request must include `messages` or `message`".to_string()),
        }
    }

    fn messages(&self) -> Vec<ChatMessage> {
        match self {
            Self::Conversation(messages) => messages.clone(),
            Self::Single(message) => vec![ChatMessage::user(message.as_str())],
        }
    }
}

#[derive(Serialize)]
struct SingleReply {
    response: String,
    usage: Option<Usage>,
}

async fn api_chat(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(body)) => ChatRequest::parse(&body),
        Err(rejection) => Err(rejection.body_text()),
    };
    let request = match request {
        Ok(r) => r,
        Err(details) => {
            tracing::warn!(details = %details, "Rejected chat request");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid messages format", "details": details })),
            )
                .into_response();
        }
    };

    let messages = request.messages();
    tracing::debug!(count = messages.len(), "Forwarding chat request");

    let result = match state.chat.as_deref() {
        Some(model) => model.generate(SYSTEM_PROMPT, &messages).await,
        None => Err(ChatError::NotConfigured),
    };

    match result {
        Ok(ChatReply { text, usage }) => match request {
            ChatRequest::Conversation(_) => Json(json!({ "content": text })).into_response(),
            ChatRequest::Single(_) => Json(SingleReply {
                response: text,
                usage,
            })
            .into_response(),
        },
        Err(e) => {
            tracing::error!(error = %e, kind = e.kind(), "Chat request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": CHAT_FAILURE,
                    "details": e.to_string(),
                    "errorType": e.kind(),
                })),
            )
                .into_response()
        }
    }
}

async fn sanity_webhook(State(state): State<AppState>) -> Response {
    let dropped = state.news.invalidate(WEBHOOK_TAGS);
    tracing::info!(dropped, "Content webhook received");
    Json(json!({ "message": "Webhook received and cache revalidated successfully" }))
        .into_response()
}

// ========== Debug Routes ==========

fn backend_summary(config: &Config) -> Value {
    json!({
        "projectId": config.sanity_project_id,
        "dataset": config.sanity_dataset,
        "apiVersion": config.sanity_api_version,
        "configured": config.sanity_configured(),
    })
}

fn debug_unconfigured(config: &Config) -> Response {
    Json(json!({
        "success": false,
        "config": backend_summary(config),
        "message": "Content backend not configured - missing SANITY_PROJECT_ID",
    }))
    .into_response()
}

fn debug_failure(config: &Config, error: &dyn std::fmt::Display) -> Response {
    tracing::error!(error = %error, "Debug query failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "error": error.to_string(),
            "config": backend_summary(config),
        })),
    )
        .into_response()
}

fn array_len(value: &Value) -> usize {
    value.as_array().map_or(0, Vec::len)
}

async fn debug_sanity_connection(State(state): State<AppState>) -> Response {
    let posts = match state.news.raw_query(queries::DEBUG_CONNECTION, &[]).await {
        Ok(Some(posts)) => posts,
        Ok(None) => return debug_unconfigured(&state.config),
        Err(e) => return debug_failure(&state.config, &e),
    };

    Json(json!({
        "success": true,
        "config": backend_summary(&state.config),
        "postsCount": array_len(&posts),
        "posts": posts,
        "message": "Content backend connection successful",
    }))
    .into_response()
}

async fn debug_sanity_data(State(state): State<AppState>) -> Response {
    let params = [("slugs", json!(fallback_slugs()))];
    let data = match state.news.raw_query(queries::DEBUG_DATA, &params).await {
        Ok(Some(data)) => data,
        Ok(None) => return debug_unconfigured(&state.config),
        Err(e) => return debug_failure(&state.config, &e),
    };

    let field = |name: &str| data.get(name).cloned().unwrap_or_else(|| json!([]));
    let (articles, posts, categories) = (field("articles"), field("posts"), field("categories"));

    Json(json!({
        "success": true,
        "config": backend_summary(&state.config),
        "articlesCount": array_len(&articles),
        "postsCount": array_len(&posts),
        "categoriesCount": array_len(&categories),
        "articles": articles,
        "posts": posts,
        "categories": categories,
        "specificArticles": field("specificArticles"),
        "message": "Content data debug successful",
    }))
    .into_response()
}

async fn debug_image_refs(State(state): State<AppState>) -> Response {
    let posts = match state.news.raw_query(queries::DEBUG_IMAGE_REFS, &[]).await {
        Ok(Some(posts)) => posts,
        Ok(None) => return debug_unconfigured(&state.config),
        Err(e) => return debug_failure(&state.config, &e),
    };

    let location = state.news.asset_location();
    let results: Vec<Value> = posts
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .map(|post| {
            let image_ref = post.pointer("/image/asset/_ref").and_then(Value::as_str);
            let generated_url = image_ref
                .zip(location)
                .and_then(|(reference, location)| location.original_url(reference));
            json!({
                "title": post.get("title"),
                "imageRef": image_ref,
                "generatedUrl": generated_url,
                "rawImage": post.get("image"),
            })
        })
        .collect();

    Json(json!({
        "success": true,
        "posts": results,
        "config": backend_summary(&state.config),
    }))
    .into_response()
}
