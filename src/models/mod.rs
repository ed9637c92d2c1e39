pub mod video;

pub use video::{
    watch_url, SearchListResponse, SearchResult, SearchResultId, SearchSnippet, VideoMetadata,
    VideoResponse,
};
