use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::{error::AppResult, models::VideoMetadata, services::providers::VideoProvider};

/// Lookup operations over the configured channel's videos
///
/// Every call re-fetches the channel listing from the provider; nothing is
/// cached between requests.
#[derive(Clone)]
pub struct VideoLookupService {
    provider: Arc<dyn VideoProvider>,
}

impl VideoLookupService {
    pub fn new(provider: Arc<dyn VideoProvider>) -> Self {
        Self { provider }
    }

    /// Lists channel videos, optionally filtered by `query`
    pub async fn search_videos(&self, query: Option<String>) -> AppResult<Vec<VideoMetadata>> {
        self.provider.search_channel(query).await
    }

    /// Finds a video by id within the unfiltered channel listing
    ///
    /// Only the first page of the listing is scanned, so older videos are
    /// reported as missing.
    pub async fn get_video_by_id(&self, video_id: &str) -> AppResult<Option<VideoMetadata>> {
        let videos = self.search_videos(None).await?;
        let found = videos.into_iter().find(|video| video.id == video_id);

        tracing::debug!(
            video_id = %video_id,
            found = found.is_some(),
            provider = self.provider.name(),
            "Video lookup completed"
        );

        Ok(found)
    }

    /// Picks one video uniformly at random from the unfiltered listing
    pub async fn get_random_video(&self) -> AppResult<Option<VideoMetadata>> {
        let videos = self.search_videos(None).await?;
        Ok(videos.choose(&mut rand::thread_rng()).cloned())
    }
}
