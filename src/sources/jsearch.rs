//! JSearch (RapidAPI) job source implementation.

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::config::JSearchConfig;
use crate::sources::{JobSource, SourceError};

/// Client for the JSearch job-search API on RapidAPI.
///
/// Holds read-only configuration injected at construction; nothing is
/// mutated after startup, so a single instance is shared freely across
/// concurrent searches.
#[derive(Debug, Clone)]
pub struct JSearchSource {
    client: Arc<Client>,
    config: JSearchConfig,
}

impl JSearchSource {
    /// Create a new JSearch source.
    pub fn new(config: JSearchConfig) -> Self {
        Self {
            client: Arc::new(
                Client::builder()
                    .user_agent(concat!(
                        env!("CARGO_PKG_NAME"),
                        "/",
                        env!("CARGO_PKG_VERSION")
                    ))
                    .timeout(Duration::from_secs(30))
                    .connect_timeout(Duration::from_secs(10))
                    .build()
                    .expect("Failed to create HTTP client"),
            ),
            config,
        }
    }

    /// The configured credential, or a configuration error when it is
    /// missing or blank. Checked before any request is attempted.
    fn api_key(&self) -> Result<&str, SourceError> {
        match self.config.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(SourceError::Config(
                "missing RapidAPI key; set the JSEARCH_API_KEY environment variable".to_string(),
            )),
        }
    }
}

#[async_trait]
impl JobSource for JSearchSource {
    fn id(&self) -> &str {
        "jsearch"
    }

    fn name(&self) -> &str {
        "JSearch"
    }

    async fn fetch_page(
        &self,
        query: &str,
        page: u32,
        num_pages: u32,
    ) -> Result<String, SourceError> {
        let key = self.api_key()?;
        let page = page.max(1);
        let num_pages = num_pages.max(1);

        debug!(%query, page, num_pages, "requesting jobs from JSearch");

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("query", query.to_string()),
                ("page", page.to_string()),
                ("num_pages", num_pages.to_string()),
            ])
            .header("X-RapidAPI-Key", key)
            .header("X-RapidAPI-Host", &self.config.host)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SourceError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn test_config(server: &mockito::ServerGuard, api_key: Option<&str>) -> JSearchConfig {
        JSearchConfig {
            endpoint: format!("{}/search", server.url()),
            host: "jsearch.p.rapidapi.com".to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_fetch_sends_params_and_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".into(), "rust developer remote".into()),
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("num_pages".into(), "1".into()),
            ]))
            .match_header("x-rapidapi-key", "test-key")
            .match_header("x-rapidapi-host", "jsearch.p.rapidapi.com")
            .match_header(
                "user-agent",
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            )
            .with_status(200)
            .with_body(r#"{"data":[]}"#)
            .create_async()
            .await;

        let source = JSearchSource::new(test_config(&server, Some("test-key")));
        let body = source
            .fetch_page("rust developer remote", 2, 1)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body, r#"{"data":[]}"#);
    }

    #[tokio::test]
    async fn test_page_clamped_to_minimum_one() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("num_pages".into(), "1".into()),
            ]))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let source = JSearchSource::new(test_config(&server, Some("test-key")));
        source.fetch_page("qa", 0, 0).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_2xx_is_api_error_with_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(429)
            .with_body("rate limited")
            .create_async()
            .await;

        let source = JSearchSource::new(test_config(&server, Some("test-key")));
        let err = source.fetch_page("qa", 1, 1).await.unwrap_err();

        match err {
            SourceError::Api { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .expect(0)
            .create_async()
            .await;

        for key in [None, Some(""), Some("   ")] {
            let source = JSearchSource::new(test_config(&server, key));
            let err = source.fetch_page("qa", 1, 1).await.unwrap_err();
            assert!(matches!(err, SourceError::Config(_)));
        }

        mock.assert_async().await;
    }
}
