/// Video data provider abstraction
///
/// The lookup service only needs "all videos of the configured channel,
/// optionally filtered by a search term". Providers hide where that list
/// comes from; the YouTube Data API is the only production implementation.
use crate::{error::AppResult, models::VideoMetadata};

pub mod youtube;

/// Upper bound on results per upstream call; only one page is ever fetched.
pub const MAX_RESULTS: u32 = 50;

/// Trait for channel video providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait VideoProvider: Send + Sync {
    /// Search the configured channel's videos
    ///
    /// `None` (or an empty query) lists the channel without a filter. Results keep
    /// the provider's order and are capped at [`MAX_RESULTS`].
    async fn search_channel(&self, query: Option<String>) -> AppResult<Vec<VideoMetadata>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
