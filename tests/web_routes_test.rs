//! Integration tests for web routes.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use para_sports_news::chat::{ChatError, ChatMessage, ChatModel, ChatReply, Usage};
use para_sports_news::config::Config;
use para_sports_news::content::{AssetLocation, NewsService};
use para_sports_news::sanity::{ContentBackend, SanityClient};
use para_sports_news::web::{create_app, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Chat model that answers with a fixed reply.
struct CannedModel;

#[async_trait]
impl ChatModel for CannedModel {
    async fn generate(
        &self,
        _system: &str,
        messages: &[ChatMessage],
    ) -> Result<ChatReply, ChatError> {
        Ok(ChatReply {
            text: format!("You said {} thing(s).", messages.len()),
            usage: Some(Usage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            }),
        })
    }
}

/// Chat model whose upstream always rejects the request.
struct FailingModel;

#[async_trait]
impl ChatModel for FailingModel {
    async fn generate(&self, _: &str, _: &[ChatMessage]) -> Result<ChatReply, ChatError> {
        Err(ChatError::Api {
            status: 429,
            message: "Resource has been exhausted".to_string(),
        })
    }
}

/// Create a test app with no content backend.
fn create_test_app(chat: Option<Arc<dyn ChatModel>>) -> Router {
    create_app(AppState {
        config: Arc::new(Config::for_testing()),
        news: Arc::new(NewsService::offline()),
        chat,
    })
}

async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(app: Router, uri: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = get(create_test_app(None), "/healthz").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn test_home_page_offline() {
    let response = get(create_test_app(None), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Dan Brooke Named Chair of ParalympicsGB"));
    assert!(html.contains("article-card-lead"));
    assert!(html.contains("The assistant is not available right now."));
}

#[tokio::test]
async fn test_home_page_with_chat_has_widget() {
    let response = get(create_test_app(Some(Arc::new(CannedModel))), "/").await;
    let html = body_string(response).await;
    assert!(html.contains(r#"id="chat-form""#));
    assert!(html.contains("/static/js/chat.js"));
}

#[tokio::test]
async fn test_news_pages() {
    let response = get(create_test_app(None), "/news").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("<h1>Latest News</h1>"));

    let response = get(
        create_test_app(None),
        "/news/patrick-anderson-the-unstoppable-force-of-wheelchair-basketball",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("<h1>Patrick Anderson: The Unstoppable Force of Wheelchair Basketball</h1>"));
    assert!(html.contains("Related Sports"));
}

#[tokio::test]
async fn test_article_slug_variants_resolve() {
    for uri in [
        "/news/From-Oceania-To-Euro/",
        "/news/from-oceania-to-euro/",
        "/news/From-Oceania-To-Euro%2F",
    ] {
        let response = get(create_test_app(None), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "uri: {uri}");
        let html = body_string(response).await;
        assert!(html.contains("From Oceania to Euro: A Paralympic Journey"));
    }
}

#[tokio::test]
async fn test_sport_page_with_trailing_slash() {
    let response = get(create_test_app(None), "/sports/para-swimming/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("<h1>Para Swimming</h1>"));
}

#[tokio::test]
async fn test_unknown_article_is_404() {
    let response = get(create_test_app(None), "/news/no-such-story-anywhere").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("Article Not Found"));
}

#[tokio::test]
async fn test_sport_pages() {
    let response = get(create_test_app(None), "/sports").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains(r#"href="/sports/para-cycling""#));

    let response = get(create_test_app(None), "/sports/para-cycling").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("<h1>Para Cycling</h1>"));
    assert!(html.contains("classification-table"));

    let response = get(create_test_app(None), "/sports/curling").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let response = get(create_test_app(None), "/definitely/not/here").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("Page Not Found"));
}

#[tokio::test]
async fn test_api_articles_returns_fallback_json() {
    let response = get(create_test_app(None), "/api/articles").await;
    assert_eq!(response.status(), StatusCode::OK);

    let articles = body_json(response).await;
    let articles = articles.as_array().unwrap();
    assert_eq!(articles.len(), 3);
    assert_eq!(articles[0]["id"], "fallback-1");
    assert_eq!(articles[0]["sportTags"], json!(["paralympicsgb"]));
}

#[tokio::test]
async fn test_chat_conversation_reply() {
    let app = create_test_app(Some(Arc::new(CannedModel)));
    let response = post_json(
        app,
        "/api/chat",
        r#"{"messages":[{"role":"user","content":"hi"},{"role":"assistant","content":"hello"},{"role":"user","content":"rules?"}]}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "content": "You said 3 thing(s)." }));
}

#[tokio::test]
async fn test_chat_single_message_reply() {
    let app = create_test_app(Some(Arc::new(CannedModel)));
    let response = post_json(app, "/api/chat", r#"{"message":"What is boccia?"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "response": "You said 1 thing(s).",
            "usage": { "promptTokens": 10, "completionTokens": 5, "totalTokens": 15 }
        })
    );
}

#[tokio::test]
async fn test_chat_invalid_shape_is_400() {
    for body in [r#"{"messages":"hi"}"#, r"{}", "not json"] {
        let app = create_test_app(Some(Arc::new(CannedModel)));
        let response = post_json(app, "/api/chat", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");

        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid messages format");
        assert!(json["details"].is_string());
    }
}

#[tokio::test]
async fn test_chat_without_model_is_structured_500() {
    let response = post_json(create_test_app(None), "/api/chat", r#"{"message":"hi"}"#).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Failed to process chat request. There was an issue connecting to the AI service."
    );
    assert_eq!(json["errorType"], "NotConfigured");
}

#[tokio::test]
async fn test_chat_upstream_failure_is_structured_500() {
    let app = create_test_app(Some(Arc::new(FailingModel)));
    let response = post_json(app, "/api/chat", r#"{"messages":[{"role":"user","content":"hi"}]}"#).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["errorType"], "ApiError");
    assert!(json["details"].as_str().unwrap().contains("Resource has been exhausted"));
}

#[tokio::test]
async fn test_webhook_acknowledges() {
    let response = post_json(create_test_app(None), "/api/sanity/webhook", r#"{"_id":"x"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Webhook received and cache revalidated successfully" })
    );
}

#[tokio::test]
async fn test_debug_endpoints_report_unconfigured() {
    for uri in [
        "/api/debug/sanity-connection",
        "/api/debug/sanity-data",
        "/api/debug/image-refs",
    ] {
        let response = get(create_test_app(None), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "uri: {uri}");

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["message"].is_string());
        assert_eq!(json["config"]["configured"], false);
    }
}

/// Create a test app backed by the mock query API.
fn create_backed_app(server: &MockServer) -> Router {
    let config = Config {
        sanity_project_id: Some("testproj".to_string()),
        sanity_api_host: Some(server.uri()),
        ..Config::for_testing()
    };
    let backend = SanityClient::from_config(&config).unwrap().unwrap();
    let news = NewsService::new(
        Some(Arc::new(backend) as Arc<dyn ContentBackend>),
        Some(AssetLocation {
            project_id: "testproj".to_string(),
            dataset: "production".to_string(),
        }),
        Duration::ZERO,
    );
    create_app(AppState {
        config: Arc::new(config),
        news: Arc::new(news),
        chat: None,
    })
}

#[tokio::test]
async fn test_debug_image_refs_builds_urls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2023-05-03/data/query/production"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [
                { "_id": "p1", "title": "With image", "image": { "asset": { "_ref": "image-abc123-1600x900-jpg" } } },
                { "_id": "p2", "title": "Without image" }
            ]
        })))
        .mount(&server)
        .await;

    let response = get(create_backed_app(&server), "/api/debug/image-refs").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["posts"][0]["imageRef"], "image-abc123-1600x900-jpg");
    assert_eq!(
        json["posts"][0]["generatedUrl"],
        "https://cdn.sanity.io/images/testproj/production/abc123-1600x900.jpg"
    );
    assert_eq!(json["posts"][1]["generatedUrl"], Value::Null);
}

#[tokio::test]
async fn test_debug_backend_error_is_500() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Unauthorized" })))
        .mount(&server)
        .await;

    let response = get(create_backed_app(&server), "/api/debug/sanity-connection").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("Unauthorized"));
}
