//! Integration tests for the content backend client and the news service
//! running against a mock query API.

use para_sports_news::config::Config;
use para_sports_news::content::NewsService;
use para_sports_news::sanity::{queries, BackendError, ContentBackend, SanityClient};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUERY_PATH: &str = "/v2023-05-03/data/query/production";

/// Create a test configuration pointing at the mock server.
fn create_test_config(server: &MockServer) -> Config {
    Config {
        sanity_project_id: Some("testproj".to_string()),
        sanity_api_host: Some(server.uri()),
        ..Config::for_testing()
    }
}

fn post_record(id: &str, slug: &str, title: &str) -> serde_json::Value {
    json!({
        "_type": "post",
        "_id": id,
        "title": title,
        "slug": { "current": slug },
        "publishedAt": "2025-03-01T09:30:00Z",
        "body": [
            { "_type": "block", "children": [{ "_type": "span", "text": "First paragraph." }] }
        ],
        "image": { "asset": { "_ref": "image-abc123-1600x900-jpg" } },
        "sportTags": ["wheelchair-basketball"]
    })
}

#[tokio::test]
async fn test_query_returns_result_member() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .and(query_param("query", queries::POST_SLUGS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ms": 3,
            "query": queries::POST_SLUGS,
            "result": ["a", "b"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SanityClient::from_config(&create_test_config(&server))
        .unwrap()
        .unwrap();
    let result = client.query(queries::POST_SLUGS, &[]).await.unwrap();
    assert_eq!(result, json!(["a", "b"]));
}

#[tokio::test]
async fn test_query_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .and(header("authorization", "Bearer sekret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        sanity_token: Some("sekret".to_string()),
        ..create_test_config(&server)
    };
    let client = SanityClient::from_config(&config).unwrap().unwrap();
    assert_eq!(client.query("*", &[]).await.unwrap(), json!([]));
}

#[tokio::test]
async fn test_query_error_status_is_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "description": "expected ']' following expression", "type": "queryParseError" }
        })))
        .mount(&server)
        .await;

    let client = SanityClient::from_config(&create_test_config(&server))
        .unwrap()
        .unwrap();
    let err = client.query("*[", &[]).await.unwrap_err();
    match err {
        BackendError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "expected ']' following expression");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_featured_articles_are_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .and(query_param("query", queries::FEATURED.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [
                post_record("p1", "wheelchair-final/", "Wheelchair Final"),
                { "_type": "category", "title": "not an article" }
            ]
        })))
        .mount(&server)
        .await;

    let news = NewsService::from_config(&create_test_config(&server)).unwrap();
    let articles = news.featured_articles().await;

    assert_eq!(articles.len(), 1);
    let article = &articles[0];
    assert_eq!(article.id, "p1");
    assert_eq!(article.url, "/news/wheelchair-final");
    assert_eq!(article.excerpt, "First paragraph....");
    assert_eq!(article.date, "March 1, 2025");
    assert!(article
        .image
        .starts_with("https://cdn.sanity.io/images/testproj/production/abc123-1600x900.jpg"));
}

#[tokio::test]
async fn test_backend_failure_falls_back_to_builtin_articles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let news = NewsService::from_config(&create_test_config(&server)).unwrap();
    let articles = news.featured_articles().await;
    assert_eq!(articles.len(), 3);
    assert_eq!(articles[0].id, "fallback-1");

    // The article page falls back to the built-in stories too.
    let detail = news.article_page("from-oceania-to-euro").await.unwrap();
    assert_eq!(detail.article.title, "From Oceania to Euro: A Paralympic Journey");
}

#[tokio::test]
async fn test_find_article_reruns_on_fuzzy_match() {
    let server = MockServer::start().await;
    let stored = "patrick-anderson-the-unstoppable-force";

    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .and(query_param("query", queries::BY_SLUG.as_str()))
        .and(query_param("$type", r#""post""#))
        .and(query_param("$slugs", format!(r#"["{stored}"]"#)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": post_record("p9", stored, "Patrick Anderson")
        })))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .and(query_param("query", queries::BY_SLUG.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": null })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .and(query_param("query", queries::POST_SLUGS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": ["another-story", stored]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let news = NewsService::from_config(&create_test_config(&server)).unwrap();
    let detail = news
        .find_article("Patrick-Anderson/")
        .await
        .unwrap()
        .expect("fuzzy match should find the post");

    assert_eq!(detail.article.id, "p9");
    assert_eq!(detail.article.url, format!("/news/{stored}"));
    assert_eq!(detail.body.len(), 1);
}

#[tokio::test]
async fn test_find_article_returns_none_when_nothing_matches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .and(query_param("query", queries::POST_SLUGS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": ["unrelated"] })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .and(query_param("query", queries::BY_SLUG.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": null })))
        .expect(2)
        .mount(&server)
        .await;

    let news = NewsService::from_config(&create_test_config(&server)).unwrap();
    assert!(news.find_article("missing-story").await.unwrap().is_none());
}
