use anyhow::Result;
use log::{info, warn};
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;

use crate::api::{WttClient, parsers};
use crate::config::AppConfig;
use crate::domain::{Participant, PlayerHeadshot, SubEvent, SubEventCode};
use crate::mock::MockStore;

const ALL_PLAYERS_FILE: &str = "all-players";
const SUB_EVENTS_FILE: &str = "sub-events";
const HEADSHOTS_FILE: &str = "player-headshots";

/// Anything that can supply the entries of a sub-event.
///
/// Takes `&self` so one source can serve overlapping fetches.
pub trait ParticipantSource {
    fn fetch_participants(
        &self,
        sub_event_code: &str,
    ) -> impl Future<Output = Result<Vec<Participant>>> + Send;
}

/// Sub-events of the event plus player photos keyed by ITTF id
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    pub sub_events: Vec<SubEvent>,
    pub profile_pics: HashMap<String, String>,
}

/// Participant source backed by the WTT APIs, falling back to bundled data
pub struct ParticipantService {
    client: WttClient,
    mock: MockStore,
    event_id: i64,
    live_cms: bool,
    offline: bool,
    sub_event_ids: HashMap<String, i64>,
}

impl ParticipantService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: WttClient::new(&config.api)?,
            mock: MockStore::new(config.mock.override_dir.clone()),
            event_id: config.event.event_id,
            live_cms: config.api.live_cms,
            offline: false,
            sub_event_ids: HashMap::new(),
        })
    }

    /// Never touch the network, serve fallback data only
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    /// Load sub-events (with the All Players entry first) and profile pictures
    pub async fn load_catalogue(&mut self) -> Result<Catalogue> {
        let sub_events = self.load_sub_events().await?;
        let headshots = self.load_headshots().await?;

        self.sub_event_ids = sub_events
            .iter()
            .map(|se| (se.sub_event_code.clone(), se.sub_event_id))
            .collect();

        let mut all = Vec::with_capacity(sub_events.len() + 1);
        all.push(SubEvent::all_players(self.event_id));
        all.extend(sub_events);

        info!("Catalogue has {} sub-events and {} headshots", all.len(), headshots.len());

        Ok(Catalogue {
            sub_events: all,
            profile_pics: headshots
                .into_iter()
                .map(|h| (h.ittfid, h.head_shot))
                .collect(),
        })
    }

    async fn load_sub_events(&self) -> Result<Vec<SubEvent>> {
        if self.uses_live_cms() {
            match self.client.fetch_sub_events(self.event_id).await {
                Ok(sub_events) => return Ok(sub_events),
                Err(e) => warn!("Falling back to bundled sub-events: {:#}", e),
            }
        }
        self.mock.require(SUB_EVENTS_FILE)
    }

    async fn load_headshots(&self) -> Result<Vec<PlayerHeadshot>> {
        if self.uses_live_cms() {
            match self.client.fetch_headshots().await {
                Ok(headshots) => return Ok(headshots),
                Err(e) => warn!("Falling back to bundled headshots: {:#}", e),
            }
        }
        self.mock.require(HEADSHOTS_FILE)
    }

    async fn fetch_all_players(&self) -> Result<Vec<Participant>> {
        let players = if self.offline {
            self.load_fallback_players()?
        } else {
            match self.client.fetch_all_players().await {
                Ok(players) => players,
                Err(e) => {
                    warn!("All players API failed, loading fallback data: {:#}", e);
                    self.load_fallback_players()?
                }
            }
        };

        Ok(players
            .into_iter()
            .map(|player| player.into_participant())
            .collect())
    }

    fn load_fallback_players(&self) -> Result<Vec<crate::domain::RankedPlayer>> {
        let data: Value = self.mock.require(ALL_PLAYERS_FILE)?;
        Ok(parsers::parse_players(&data))
    }

    async fn fetch_entries(&self, sub_event_code: &str) -> Result<Vec<Participant>> {
        if self.uses_live_cms() {
            if let Some(&sub_event_id) = self.sub_event_ids.get(sub_event_code) {
                match self.client.fetch_entries(self.event_id, sub_event_id).await {
                    Ok(entries) => return Ok(entries),
                    Err(e) => warn!(
                        "Entries API failed for {}, loading fallback data: {:#}",
                        sub_event_code, e
                    ),
                }
            }
        }

        self.mock
            .load(sub_event_code)?
            .ok_or_else(|| anyhow::anyhow!("No data available for sub-event code: {}", sub_event_code))
    }

    fn uses_live_cms(&self) -> bool {
        self.live_cms && !self.offline
    }
}

impl ParticipantSource for ParticipantService {
    async fn fetch_participants(&self, sub_event_code: &str) -> Result<Vec<Participant>> {
        match sub_event_code.parse::<SubEventCode>() {
            Ok(SubEventCode::All) => self.fetch_all_players().await,
            _ => self.fetch_entries(sub_event_code).await,
        }
    }
}
