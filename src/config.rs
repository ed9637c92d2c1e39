use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// YouTube Data API key
    #[serde(default)]
    pub youtube_api_key: String,

    /// Channel whose videos are searched
    #[serde(default)]
    pub youtube_channel_id: Option<String>,

    /// Legacy name for `youtube_channel_id`
    #[serde(default)]
    pub channel_id: Option<String>,

    /// YouTube Data API base URL
    #[serde(default = "default_youtube_api_url")]
    pub youtube_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_youtube_api_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing credentials are not an error here; the upstream API rejects
    /// the first search instead.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Channel to search, `YOUTUBE_CHANNEL_ID` first, then `CHANNEL_ID`
    pub fn channel(&self) -> &str {
        [&self.youtube_channel_id, &self.channel_id]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|id| !id.is_empty())
            .unwrap_or_default()
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.youtube_api_key, "");
        assert_eq!(config.channel(), "");
        assert_eq!(config.youtube_api_url, "https://www.googleapis.com/youtube/v3");
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_youtube_channel_id_wins() {
        let config = Config::from_vars(vars(&[
            ("YOUTUBE_CHANNEL_ID", "UCprimary"),
            ("CHANNEL_ID", "UCfallback"),
        ]))
        .unwrap();
        assert_eq!(config.channel(), "UCprimary");
    }

    #[test]
    fn test_channel_id_fallback() {
        let config = Config::from_vars(vars(&[("CHANNEL_ID", "UCfallback")])).unwrap();
        assert_eq!(config.channel(), "UCfallback");
    }

    #[test]
    fn test_empty_channel_id_falls_back() {
        let config = Config::from_vars(vars(&[
            ("YOUTUBE_CHANNEL_ID", ""),
            ("CHANNEL_ID", "UCfallback"),
        ]))
        .unwrap();
        assert_eq!(config.channel(), "UCfallback");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[
            ("YOUTUBE_API_KEY", "secret"),
            ("YOUTUBE_API_URL", "http://localhost:9999"),
            ("HOST", "0.0.0.0"),
            ("PORT", "3000"),
        ]))
        .unwrap();
        assert_eq!(config.youtube_api_key, "secret");
        assert_eq!(config.youtube_api_url, "http://localhost:9999");
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(Config::from_vars(vars(&[("PORT", "not-a-port")])).is_err());
    }
}
