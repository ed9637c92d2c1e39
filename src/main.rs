use std::sync::Arc;

use channel_video_api::{
    config::Config,
    routes::{create_router, AppState},
    services::{providers::youtube::YouTubeProvider, VideoLookupService},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    if config.youtube_api_key.is_empty() {
        tracing::warn!("YOUTUBE_API_KEY is not set, upstream searches will be rejected");
    }
    if config.channel().is_empty() {
        tracing::warn!("Neither YOUTUBE_CHANNEL_ID nor CHANNEL_ID is set");
    }

    let provider = YouTubeProvider::from_config(&config);
    let state = Arc::new(AppState::new(VideoLookupService::new(Arc::new(provider))));
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
