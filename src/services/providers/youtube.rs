/// YouTube Data API v3 provider
///
/// Lists a channel's videos through `GET /search`:
/// `part=snippet&type=video&channelId=...&maxResults=50[&q=...]`, authenticated
/// with an API key query parameter. One page, one call, no retries.
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{SearchListResponse, VideoMetadata},
    services::providers::{VideoProvider, MAX_RESULTS},
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct YouTubeProvider {
    http_client: HttpClient,
    api_key: String,
    channel_id: String,
    api_url: String,
}

impl YouTubeProvider {
    /// Creates a provider with explicit credentials
    pub fn new(
        api_key: impl Into<String>,
        channel_id: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: api_key.into(),
            channel_id: channel_id.into(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a provider from application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.youtube_api_key.clone(),
            config.channel(),
            config.youtube_api_url.clone(),
        )
    }

    /// Query parameters for a channel search
    ///
    /// `query` is forwarded unchanged as `q`, but reqwest percent-encodes it, so
    /// characters like `&` or `#` cannot add or truncate parameters.
    fn search_params(&self, query: Option<&str>) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("key", self.api_key.clone()),
            ("channelId", self.channel_id.clone()),
            ("part", "snippet".to_string()),
            ("type", "video".to_string()),
            ("maxResults", MAX_RESULTS.to_string()),
        ];

        if let Some(q) = query.filter(|q| !q.is_empty()) {
            params.push(("q", q.to_string()));
        }

        params
    }

    /// Turns a search response body into videos, in upstream order
    fn parse_search_response(body: &str) -> AppResult<Vec<VideoMetadata>> {
        let response: SearchListResponse = serde_json::from_str(body).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %body,
                "Failed to deserialize YouTube search response"
            );
            AppError::Decode(e)
        })?;

        Ok(response
            .items
            .into_iter()
            .map(VideoMetadata::from)
            .collect())
    }
}

#[async_trait::async_trait]
impl VideoProvider for YouTubeProvider {
    async fn search_channel(&self, query: Option<String>) -> AppResult<Vec<VideoMetadata>> {
        let url = format!("{}/search", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&self.search_params(query.as_deref()))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "YouTube API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw YouTube API response");

        let videos = Self::parse_search_response(&response_text)?;

        tracing::info!(
            query = query.as_deref().unwrap_or_default(),
            results = videos.len(),
            provider = self.name(),
            "Channel search completed"
        );

        Ok(videos)
    }

    fn name(&self) -> &'static str {
        "youtube"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider() -> YouTubeProvider {
        YouTubeProvider::new("test_key", "UCtest", "http://test.local/youtube/v3/")
    }

    fn param<'a>(params: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let provider = create_test_provider();
        assert_eq!(provider.api_url, "http://test.local/youtube/v3");
    }

    #[test]
    fn test_search_params_without_query() {
        let provider = create_test_provider();
        let params = provider.search_params(None);

        assert_eq!(param(&params, "key"), Some("test_key"));
        assert_eq!(param(&params, "channelId"), Some("UCtest"));
        assert_eq!(param(&params, "part"), Some("snippet"));
        assert_eq!(param(&params, "type"), Some("video"));
        assert_eq!(param(&params, "maxResults"), Some("50"));
        assert_eq!(param(&params, "q"), None);
    }

    #[test]
    fn test_search_params_with_query_passed_through() {
        let provider = create_test_provider();
        let params = provider.search_params(Some("  knee surgery & rehab "));
        assert_eq!(param(&params, "q"), Some("  knee surgery & rehab "));
    }

    #[test]
    fn test_empty_query_is_not_sent() {
        let provider = create_test_provider();
        let params = provider.search_params(Some(""));
        assert_eq!(param(&params, "q"), None);
    }

    #[test]
    fn test_parse_keeps_upstream_order() {
        let body = r#"{
            "kind": "youtube#searchListResponse",
            "items": [
                { "id": { "videoId": "b" }, "snippet": { "title": "Second" } },
                { "id": { "videoId": "a" }, "snippet": { "title": "First" } },
                { "id": { "videoId": "b" }, "snippet": { "title": "Second again" } }
            ]
        }"#;

        let videos = YouTubeProvider::parse_search_response(body).unwrap();
        let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_parse_without_items() {
        let videos = YouTubeProvider::parse_search_response(r#"{"pageInfo": {}}"#).unwrap();
        assert!(videos.is_empty());
    }

    #[test]
    fn test_parse_fails_whole_page_on_missing_key() {
        let body = r#"{
            "items": [
                { "id": { "videoId": "ok" }, "snippet": { "title": "Fine" } },
                { "id": { "playlistId": "PL1" }, "snippet": { "title": "Broken" } }
            ]
        }"#;

        let result = YouTubeProvider::parse_search_response(body);
        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[test]
    fn test_parse_malformed_json() {
        let result = YouTubeProvider::parse_search_response("<html>oops</html>");
        assert!(matches!(result, Err(AppError::Decode(_))));
    }
}
