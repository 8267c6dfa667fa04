use crate::api::parsers;
use crate::config::settings::ApiSettings;
use crate::domain::{Participant, PlayerHeadshot, RankedPlayer, SubEvent};
use crate::errors::{fetch_context, parse_context, with_parse_context};
use crate::http::RateLimitedClient;
use anyhow::{Context, Result};
use log::info;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Client for the WTT CMS gateway and the all-players API
pub struct WttClient {
    client: RateLimitedClient,
    cms_base_url: String,
    players_base_url: String,
    api_key: String,
}

impl WttClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = RateLimitedClient::new(
            &settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;
        Ok(Self {
            client,
            cms_base_url: settings.cms_base_url.trim_end_matches('/').to_string(),
            players_base_url: settings.players_base_url.trim_end_matches('/').to_string(),
            api_key: settings.players_api_key.clone(),
        })
    }

    /// Fetch the live or active sub-events of an event
    pub async fn fetch_sub_events(&self, event_id: i64) -> Result<Vec<SubEvent>> {
        let url = self.build_sub_events_url(event_id);
        info!("Fetching sub-events for event {}", event_id);
        self.get_json(&url, "sub-events").await
    }

    /// Fetch the player entries of one sub-event
    pub async fn fetch_entries(&self, event_id: i64, sub_event_id: i64) -> Result<Vec<Participant>> {
        let url = self.build_entries_url(event_id, sub_event_id);
        info!("Fetching entries for sub-event {}", sub_event_id);
        let entries: Vec<Participant> = self.get_json(&url, "player entries").await?;
        info!("Fetched {} entries for sub-event {}", entries.len(), sub_event_id);
        Ok(entries)
    }

    pub async fn fetch_headshots(&self) -> Result<Vec<PlayerHeadshot>> {
        let url = format!("{}/GetAllPlayerProfilePics", self.cms_base_url);
        self.get_json(&url, "player headshots").await
    }

    /// Fetch the ranked players listing, authenticated with the `ApiKey` header
    pub async fn fetch_all_players(&self) -> Result<Vec<RankedPlayer>> {
        let url = format!("{}/Players/GetPlayers", self.players_base_url);
        info!("Fetching all players from {}", url);

        let response = self
            .client
            .get_with_headers(&url, &[("ApiKey", self.api_key.as_str())])
            .await?;
        let response = Self::ensure_success(response, &url)?;
        let data: Value = with_parse_context(response.json().await, "all players")?;

        let players = parsers::parse_players(&data);
        info!("Fetched {} players", players.len());
        Ok(players)
    }

    // --- Helper Methods ---

    async fn get_json<T: DeserializeOwned>(&self, url: &str, data_type: &str) -> Result<T> {
        let response = self.client.get(url).await?;
        let response = Self::ensure_success(response, url)?;
        let text = response.text().await.with_context(|| fetch_context(url))?;
        serde_json::from_str(&text).with_context(|| parse_context(data_type))
    }

    fn ensure_success(response: reqwest::Response, url: &str) -> Result<reqwest::Response> {
        if !response.status().is_success() {
            anyhow::bail!("{}: API returned status {}", fetch_context(url), response.status());
        }
        Ok(response)
    }

    fn build_sub_events_url(&self, event_id: i64) -> String {
        format!("{}/GetAllLiveOrActiveSubEventsDetails/{}", self.cms_base_url, event_id)
    }

    fn build_entries_url(&self, event_id: i64, sub_event_id: i64) -> String {
        format!(
            "{}/GetPlayerEntriesforEventBySubEventId_WithParticDetails/{}/{}",
            self.cms_base_url, event_id, sub_event_id
        )
    }
}
