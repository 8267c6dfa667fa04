use anyhow::{Context, Result};
use std::path::PathBuf;

use super::categories::{Category, default_categories, parse_categories};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub rate_limit_ms: u64,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub cms_base_url: String,
    pub players_base_url: String,
    pub players_api_key: String,
    /// Query the CMS for sub-events and entries instead of the bundled data
    pub live_cms: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            rate_limit_ms: 100,
            user_agent: "WttPlayers/1.0".to_string(),
            timeout_secs: 30,
            cms_base_url: "https://wttapigateway-new.azure-api.net/prod/api/cms".to_string(),
            players_base_url: "https://tabletennisapitest.azurewebsites.net".to_string(),
            players_api_key: String::new(),
            live_cms: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventSettings {
    pub event_id: i64,
    pub enabled_categories: Vec<Category>,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            event_id: 2932,
            enabled_categories: default_categories(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockSettings {
    /// Directory whose JSON files shadow the bundled fallback data
    pub override_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub event: EventSettings,
    pub mock: MockSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `WTT_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(event_id) = lookup("WTT_EVENT_ID") {
            config.event.event_id = event_id
                .parse()
                .with_context(|| format!("Invalid WTT_EVENT_ID: {}", event_id))?;
        }
        if let Some(categories) = lookup("WTT_CATEGORIES") {
            config.event.enabled_categories =
                parse_categories(&categories).context("Invalid WTT_CATEGORIES")?;
        }
        if let Some(api_key) = lookup("WTT_API_KEY") {
            config.api.players_api_key = api_key;
        }
        if let Some(live) = lookup("WTT_LIVE_API") {
            config.api.live_cms = matches!(live.as_str(), "1" | "true" | "yes");
        }
        if let Some(url) = lookup("WTT_CMS_URL") {
            config.api.cms_base_url = url;
        }
        if let Some(url) = lookup("WTT_PLAYERS_URL") {
            config.api.players_base_url = url;
        }
        if let Some(dir) = lookup("WTT_MOCK_DIR").filter(|d| !d.is_empty()) {
            config.mock.override_dir = Some(PathBuf::from(dir));
        }

        Ok(config)
    }
}
