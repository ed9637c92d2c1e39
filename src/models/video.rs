use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

/// Public watch page for a video, the id is appended verbatim
pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Builds the watch URL for a video id
pub fn watch_url(video_id: &str) -> String {
    format!("{}{}", WATCH_URL_PREFIX, video_id)
}

/// Normalized video record returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    pub id: String,
    pub title: String,
    pub url: String,
    pub published_at: Option<String>,
    pub description: Option<String>,
    /// Never populated, transcripts are not fetched.
    pub transcription: Option<String>,
}

impl VideoMetadata {
    /// Creates a record for `id`, deriving the watch URL
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            url: watch_url(&id),
            id,
            title: title.into(),
            published_at: None,
            description: None,
            transcription: None,
        }
    }
}

// ============================================================================
// YouTube Data API v3 Types
// ============================================================================

/// Body of `GET /search`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

/// One entry of `items`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
    pub snippet: SearchSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    pub video_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippet {
    pub title: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<SearchResult> for VideoMetadata {
    fn from(result: SearchResult) -> Self {
        let SearchResult { id, snippet } = result;
        VideoMetadata {
            url: watch_url(&id.video_id),
            id: id.video_id,
            title: snippet.title,
            published_at: snippet.published_at,
            description: snippet.description,
            transcription: None,
        }
    }
}

/// Single-video response body.
///
/// Serializes the video when there is one and the empty object `{}` otherwise,
/// which is what front-end clients of `/video/{id}` and `/random_video` expect.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoResponse(pub Option<VideoMetadata>);

impl From<Option<VideoMetadata>> for VideoResponse {
    fn from(video: Option<VideoMetadata>) -> Self {
        Self(video)
    }
}

impl Serialize for VideoResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(video) => video.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }
}
