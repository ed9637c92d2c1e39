use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{VideoMetadata, VideoResponse},
    routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct VideoSearchQuery {
    query: Option<String>,
}

/// Handler for `GET /videos`
pub async fn list(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<VideoSearchQuery>,
) -> AppResult<Json<Vec<VideoMetadata>>> {
    tracing::info!(
        request_id = %request_id,
        query = params.query.as_deref().unwrap_or_default(),
        "Listing channel videos"
    );

    let videos = state.video_lookup.search_videos(params.query).await?;
    Ok(Json(videos))
}

/// Handler for `GET /video/:video_id`, `{}` when the id is not in the listing
pub async fn get_by_id(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(video_id): Path<String>,
) -> AppResult<Json<VideoResponse>> {
    tracing::info!(request_id = %request_id, video_id = %video_id, "Looking up video");

    let video = state.video_lookup.get_video_by_id(&video_id).await?;
    Ok(Json(video.into()))
}

/// Handler for `GET /random_video`, `{}` when the channel has no videos
pub async fn random(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<VideoResponse>> {
    tracing::info!(request_id = %request_id, "Picking random video");

    let video = state.video_lookup.get_random_video().await?;
    Ok(Json(video.into()))
}
