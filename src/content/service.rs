//! Article lookups for the web layer.
//!
//! Wraps the content backend with normalization, slug resolution, caching and
//! the built-in fallback articles. Nothing here surfaces a backend failure to
//! a page: errors are logged and the fallback data is served instead.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::cache::{TagCache, TAG_ARTICLES, TAG_FEATURED, TAG_LATEST};
use super::fallback::{fallback_article, fallback_articles};
use super::image::{AssetLocation, ImageResolver};
use super::normalize::{normalize, normalize_detail};
use super::slug::{find_slug_match, slug_variants};
use super::types::{Article, ArticleDetail, ContentKind, RawRecord};
use crate::config::Config;
use crate::sanity::{queries, BackendError, ContentBackend, SanityClient};

const FEATURED_KEY: &str = "featured";
const LATEST_KEY: &str = "latest";

pub struct NewsService {
    backend: Option<Arc<dyn ContentBackend>>,
    images: ImageResolver,
    location: Option<AssetLocation>,
    cache: TagCache<Vec<Article>>,
}

impl NewsService {
    #[must_use]
    pub fn new(
        backend: Option<Arc<dyn ContentBackend>>,
        location: Option<AssetLocation>,
        cache_ttl: Duration,
    ) -> Self {
        let images = location
            .clone()
            .map_or_else(ImageResolver::unconfigured, ImageResolver::new);
        Self {
            backend,
            images,
            location,
            cache: TagCache::new(cache_ttl),
        }
    }

    /// Build the service, connecting to the hosted backend when configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend client cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self, BackendError> {
        let backend = SanityClient::from_config(config)?
            .map(|client| Arc::new(client) as Arc<dyn ContentBackend>);
        let location = config
            .sanity_project_id
            .as_ref()
            .map(|project_id| AssetLocation {
                project_id: project_id.clone(),
                dataset: config.sanity_dataset.clone(),
            });
        Ok(Self::new(backend, location, config.article_cache_ttl))
    }

    /// A service with no backend, serving only built-in articles.
    #[must_use]
    pub fn offline() -> Self {
        Self::new(None, None, Duration::ZERO)
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// Resolver used for card, hero and inline body images.
    #[must_use]
    pub const fn images(&self) -> &ImageResolver {
        &self.images
    }

    #[must_use]
    pub const fn asset_location(&self) -> Option<&AssetLocation> {
        self.location.as_ref()
    }

    /// Drop cached lists carrying any of `tags`.
    pub fn invalidate(&self, tags: &[&str]) -> usize {
        let dropped = self.cache.invalidate(tags);
        info!(?tags, dropped, "Invalidated article cache");
        dropped
    }

    /// The newest articles for the home page.
    pub async fn featured_articles(&self) -> Vec<Article> {
        self.cached_recent(FEATURED_KEY, &[TAG_ARTICLES, TAG_FEATURED])
            .await
    }

    /// The newest articles for the "latest" strip. Same query as featured.
    pub async fn latest_articles(&self) -> Vec<Article> {
        self.cached_recent(LATEST_KEY, &[TAG_ARTICLES, TAG_LATEST])
            .await
    }

    /// Featured followed by latest, without duplicates.
    pub async fn all_articles(&self) -> Vec<Article> {
        let mut articles = self.featured_articles().await;
        for article in self.latest_articles().await {
            if !articles.iter().any(|a| a.id == article.id) {
                articles.push(article);
            }
        }
        articles
    }

    /// Articles tagged with the given sport.
    pub async fn sport_articles(&self, sport: &str) -> Vec<Article> {
        self.all_articles()
            .await
            .into_iter()
            .filter(|a| a.sport_tags.iter().any(|t| t.eq_ignore_ascii_case(sport)))
            .collect()
    }

    /// Resolve a requested slug against the backend.
    ///
    /// Tries an exact post lookup over all slug variants, then a fuzzy match
    /// against every stored post slug, then an exact article lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a backend query fails.
    pub async fn find_article(&self, raw_slug: &str) -> Result<Option<ArticleDetail>, BackendError> {
        let Some(backend) = self.backend.as_deref() else {
            return Ok(None);
        };
        let variants = slug_variants(raw_slug);
        if variants.is_empty() {
            return Ok(None);
        }

        if let Some(detail) = self.exact(backend, ContentKind::Post, &variants).await? {
            return Ok(Some(detail));
        }

        let stored: Vec<String> = match backend.query(queries::POST_SLUGS, &[]).await? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        };
        if let Some(matched) = find_slug_match(&stored, String::as_str, &variants) {
            debug!(slug = raw_slug, matched = %matched, "Fuzzy slug match");
            let matched = vec![matched.clone()];
            if let Some(detail) = self.exact(backend, ContentKind::Post, &matched).await? {
                return Ok(Some(detail));
            }
        }

        self.exact(backend, ContentKind::Article, &variants).await
    }

    /// Article page content: backend first, then the built-in stories.
    pub async fn article_page(&self, slug: &str) -> Option<ArticleDetail> {
        match self.find_article(slug).await {
            Ok(Some(detail)) => return Some(detail),
            Ok(None) => debug!(slug, "No backend article for slug"),
            Err(e) => warn!(slug, error = %e, "Article lookup failed, trying built-in articles"),
        }
        fallback_article(slug)
    }

    /// Run a raw query, for the diagnostics endpoints.
    ///
    /// Returns `Ok(None)` when no backend is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn raw_query(
        &self,
        groq: &str,
        params: &[(&str, Value)],
    ) -> Result<Option<Value>, BackendError> {
        match &self.backend {
            Some(backend) => backend.query(groq, params).await.map(Some),
            None => Ok(None),
        }
    }

    async fn cached_recent(&self, key: &'static str, tags: &[&'static str]) -> Vec<Article> {
        if let Some(articles) = self.cache.get(key) {
            debug!(key, count = articles.len(), "Article list cache hit");
            return articles;
        }

        match self.fetch_recent().await {
            Ok(articles) if !articles.is_empty() => {
                self.cache.insert(key, tags, articles.clone());
                articles
            }
            Ok(_) => {
                info!(key, "Backend returned no articles, using built-in articles");
                fallback_articles()
            }
            Err(e) => {
                warn!(key, error = %e, "Failed to fetch articles, using built-in articles");
                fallback_articles()
            }
        }
    }

    async fn fetch_recent(&self) -> Result<Vec<Article>, BackendError> {
        let Some(backend) = self.backend.as_deref() else {
            return Ok(Vec::new());
        };
        let Value::Array(items) = backend.query(&queries::FEATURED, &[]).await? else {
            return Err(BackendError::Decode("expected an array of records".to_string()));
        };

        let articles: Vec<Article> = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<RawRecord>(item) {
                Ok(record) => Some(normalize(&record, &self.images)),
                Err(e) => {
                    warn!(error = %e, "Skipping undecodable record");
                    None
                }
            })
            .collect();
        debug!(count = articles.len(), "Fetched recent articles");
        Ok(articles)
    }

    async fn exact(
        &self,
        backend: &dyn ContentBackend,
        kind: ContentKind,
        slugs: &[String],
    ) -> Result<Option<ArticleDetail>, BackendError> {
        let params = [("type", json!(kind.type_name())), ("slugs", json!(slugs))];
        let value = backend.query(&queries::BY_SLUG, &params).await?;
        if value.is_null() {
            return Ok(None);
        }
        match serde_json::from_value::<RawRecord>(value) {
            Ok(record) => Ok(Some(normalize_detail(&record, &self.images))),
            Err(e) => {
                warn!(kind = kind.type_name(), error = %e, "Matched record could not be decoded");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// Backend that replays canned responses in order and records queries.
    #[derive(Default)]
    struct ScriptedBackend {
        responses: Mutex<VecDeque<Result<Value, BackendError>>>,
        calls: Mutex<Vec<(String, Vec<(String, Value)>)>>,
    }

    impl ScriptedBackend {
        fn new(responses: Vec<Result<Value, BackendError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::default(),
            })
        }

        fn calls(&self) -> Vec<(String, Vec<(String, Value)>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ContentBackend for ScriptedBackend {
        async fn query(&self, groq: &str, params: &[(&str, Value)]) -> Result<Value, BackendError> {
            self.calls.lock().unwrap().push((
                groq.to_string(),
                params
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), v.clone()))
                    .collect(),
            ));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(Value::Null))
        }
    }

    fn service(backend: &Arc<ScriptedBackend>, ttl: Duration) -> NewsService {
        NewsService::new(
            Some(backend.clone() as Arc<dyn ContentBackend>),
            Some(AssetLocation {
                project_id: "proj1".to_string(),
                dataset: "production".to_string(),
            }),
            ttl,
        )
    }

    fn post(id: &str, slug: &str) -> Value {
        json!({
            "_type": "post",
            "_id": id,
            "title": format!("Title {id}"),
            "slug": { "current": slug },
            "publishedAt": "2024-06-15T10:00:00Z",
            "sportTags": ["para-cycling"],
            "body": [{ "_type": "block", "children": [{ "_type": "span", "text": "Body" }] }]
        })
    }

    #[tokio::test]
    async fn test_offline_serves_fallback() {
        let service = NewsService::offline();
        assert!(!service.is_configured());
        assert_eq!(service.featured_articles().await, fallback_articles());
        assert!(service.find_article("anything").await.unwrap().is_none());
        assert!(service.article_page("from-oceania-to-euro").await.is_some());
        assert!(service.raw_query("*", &[]).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_backend_error_serves_fallback() {
        let backend = ScriptedBackend::new(vec![Err(BackendError::Status {
            status: 503,
            message: "down".to_string(),
        })]);
        let service = service(&backend, Duration::from_secs(60));
        assert_eq!(service.featured_articles().await, fallback_articles());
    }

    #[tokio::test]
    async fn test_empty_result_serves_fallback() {
        let backend = ScriptedBackend::new(vec![Ok(json!([]))]);
        let service = service(&backend, Duration::from_secs(60));
        assert_eq!(service.featured_articles().await, fallback_articles());
    }

    #[tokio::test]
    async fn test_undecodable_records_are_skipped() {
        let backend = ScriptedBackend::new(vec![Ok(json!([
            post("a", "first"),
            { "_type": "category", "title": "x" },
            "garbage",
            post("b", "second")
        ]))]);
        let service = service(&backend, Duration::ZERO);
        let articles = service.featured_articles().await;
        let ids: Vec<&str> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(articles[0].url, "/news/first");
        assert_eq!(articles[0].date, "June 15, 2024");
    }

    #[tokio::test]
    async fn test_featured_list_is_cached_until_invalidated() {
        let backend = ScriptedBackend::new(vec![
            Ok(json!([post("a", "first")])),
            Ok(json!([post("b", "second")])),
        ]);
        let service = service(&backend, Duration::from_secs(60));

        assert_eq!(service.featured_articles().await[0].id, "a");
        assert_eq!(service.featured_articles().await[0].id, "a");
        assert_eq!(backend.calls().len(), 1);

        service.invalidate(&[TAG_FEATURED]);
        assert_eq!(service.featured_articles().await[0].id, "b");
        assert_eq!(backend.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_fallback_is_not_cached() {
        let backend = ScriptedBackend::new(vec![
            Err(BackendError::Decode("boom".to_string())),
            Ok(json!([post("a", "first")])),
        ]);
        let service = service(&backend, Duration::from_secs(60));
        assert_eq!(service.featured_articles().await, fallback_articles());
        assert_eq!(service.featured_articles().await[0].id, "a");
    }

    #[tokio::test]
    async fn test_all_articles_dedupes_by_id() {
        let backend = ScriptedBackend::new(vec![
            Ok(json!([post("a", "first"), post("b", "second")])),
            Ok(json!([post("b", "second"), post("c", "third")])),
        ]);
        let service = service(&backend, Duration::ZERO);
        let ids: Vec<String> = service
            .all_articles()
            .await
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_sport_articles_filter_by_tag() {
        let service = NewsService::offline();
        let ipc = service.sport_articles("ipc").await;
        assert_eq!(ipc.len(), 1);
        assert_eq!(ipc[0].id, "fallback-3");
        assert!(service.sport_articles("para-cycling").await.is_empty());
    }

    #[tokio::test]
    async fn test_exact_post_match_uses_all_variants() {
        let backend = ScriptedBackend::new(vec![Ok(post("a", "from-oceania-to-euro"))]);
        let service = service(&backend, Duration::ZERO);

        let detail = service
            .find_article("From-Oceania-To-Euro/")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.article.id, "a");
        assert_eq!(detail.body.len(), 1);

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        let params = &calls[0].1;
        assert_eq!(params[0], ("type".to_string(), json!("post")));
        let slugs = params[1].1.as_array().unwrap();
        assert_eq!(slugs[0], json!("From-Oceania-To-Euro"));
        assert!(slugs.contains(&json!("from-oceania-to-euro")));
    }

    #[tokio::test]
    async fn test_fuzzy_match_reruns_exact_query_once() {
        let backend = ScriptedBackend::new(vec![
            Ok(Value::Null),
            Ok(json!(["other-story", "dan-brooke-named-chair-of-paralympicsgb"])),
            Ok(post("dan", "dan-brooke-named-chair-of-paralympicsgb")),
        ]);
        let service = service(&backend, Duration::ZERO);

        let detail = service.find_article("dan-brooke").await.unwrap().unwrap();
        assert_eq!(detail.article.id, "dan");

        let calls = backend.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(
            calls[2].1[1].1,
            json!(["dan-brooke-named-chair-of-paralympicsgb"])
        );
    }

    #[tokio::test]
    async fn test_article_type_is_tried_last() {
        let backend = ScriptedBackend::new(vec![
            Ok(Value::Null),
            Ok(json!([])),
            Ok(json!({ "_type": "article", "_id": "art", "slug": { "current": "x" } })),
        ]);
        let service = service(&backend, Duration::ZERO);

        let detail = service.find_article("x").await.unwrap().unwrap();
        assert_eq!(detail.article.id, "art");
        assert_eq!(backend.calls()[2].1[0].1, json!("article"));
    }

    #[tokio::test]
    async fn test_article_page_falls_back_on_error() {
        let backend = ScriptedBackend::new(vec![Err(BackendError::Decode("boom".to_string()))]);
        let service = service(&backend, Duration::ZERO);
        let detail = service.article_page("from-oceania-to-euro").await.unwrap();
        assert_eq!(detail.article.id, "static-1");
        assert!(service.article_page("no-such-story").await.is_none());
    }
}
