use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{error, info, warn};

use crate::config::Category;
use crate::domain::{AggregatedPlayers, Participant, SubEvent, aggregate, is_doubles_sub_event};
use crate::services::participants::ParticipantSource;

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load participants. Please try again.";

/// Handle for one fetch issued by a [`PlayersGrid`].
///
/// Only the most recently issued ticket is accepted when results come back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub sub_event_code: String,
}

/// Selection state of the players grid: category, sub-event, draw and the
/// aggregated entries of the selected sub-event
#[derive(Debug, Clone)]
pub struct PlayersGrid {
    categories: Vec<Category>,
    sub_events: Vec<SubEvent>,
    selected_category: Option<Category>,
    selected_sub_event: Option<SubEvent>,
    selected_draw: Option<String>,
    players: AggregatedPlayers,
    loading: bool,
    error: Option<String>,
    failure: Option<String>,
    generation: u64,
    updated_at: Option<DateTime<Utc>>,
}

impl PlayersGrid {
    /// Start on the first category and its sub-event, or the first sub-event
    /// when the category has none
    pub fn new(categories: Vec<Category>, sub_events: Vec<SubEvent>) -> Self {
        let selected_category = categories.first().copied();
        let selected_sub_event = selected_category
            .and_then(|category| find_sub_event(&sub_events, category))
            .or_else(|| sub_events.first().cloned());

        Self {
            categories,
            sub_events,
            selected_category,
            selected_sub_event,
            selected_draw: None,
            players: AggregatedPlayers::default(),
            loading: false,
            error: None,
            failure: None,
            generation: 0,
            updated_at: None,
        }
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.selected_category
    }

    pub fn selected_sub_event(&self) -> Option<&SubEvent> {
        self.selected_sub_event.as_ref()
    }

    pub fn selected_draw(&self) -> Option<&str> {
        self.selected_draw.as_deref()
    }

    pub fn players(&self) -> &AggregatedPlayers {
        &self.players
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Fail with the cause of the last fetch when it did not succeed
    pub fn ensure_loaded(&self) -> Result<()> {
        match (&self.error, &self.failure) {
            (Some(message), Some(cause)) => anyhow::bail!("{}: {}", message, cause),
            (Some(message), None) => anyhow::bail!("{}", message),
            _ => Ok(()),
        }
    }

    pub fn is_doubles(&self) -> bool {
        self.selected_sub_event
            .as_ref()
            .is_some_and(|se| is_doubles_sub_event(&se.sub_event_code))
    }

    /// Switch category and issue a fetch for the resulting sub-event.
    ///
    /// When no sub-event matches the category the current sub-event stays
    /// selected and is fetched again.
    pub fn select_category(&mut self, category: Category) -> Result<Option<FetchTicket>> {
        if !self.categories.contains(&category) {
            anyhow::bail!("Category {} is not enabled", category);
        }

        self.selected_category = Some(category);
        match find_sub_event(&self.sub_events, category) {
            Some(sub_event) => self.selected_sub_event = Some(sub_event),
            None => warn!("No sub-event for category {}, keeping current selection", category),
        }

        Ok(self.begin_fetch())
    }

    /// Issue a fetch for the selected sub-event, superseding any pending one
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        let sub_event_code = self.selected_sub_event.as_ref()?.sub_event_code.clone();
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.failure = None;

        Some(FetchTicket {
            generation: self.generation,
            sub_event_code,
        })
    }

    /// Apply a fetch result, returns false when the ticket was superseded
    pub fn apply(&mut self, ticket: &FetchTicket, result: Result<Vec<Participant>>) -> bool {
        if ticket.generation != self.generation {
            info!(
                "Ignoring stale result for {} (fetch {}, latest {})",
                ticket.sub_event_code, ticket.generation, self.generation
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(participants) => {
                self.players = aggregate(&participants, &ticket.sub_event_code);
                self.error = None;
                self.failure = None;
                self.updated_at = Some(Utc::now());
            }
            Err(e) => {
                error!("Error fetching participants for {}: {:#}", ticket.sub_event_code, e);
                self.failure = Some(format!("{:#}", e));
                self.players = AggregatedPlayers {
                    is_doubles: is_doubles_sub_event(&ticket.sub_event_code),
                    ..AggregatedPlayers::default()
                };
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        self.sync_selected_draw();
        true
    }

    /// Fetch `ticket` from `source` and apply the result
    pub async fn load<S: ParticipantSource>(&mut self, source: &S, ticket: &FetchTicket) -> bool {
        let result = source.fetch_participants(&ticket.sub_event_code).await;
        self.apply(ticket, result)
    }

    pub fn select_draw(&mut self, draw_name: &str) -> Result<()> {
        if !self.players.draw_names.iter().any(|name| name == draw_name) {
            anyhow::bail!("Unknown draw: {}", draw_name);
        }
        self.selected_draw = Some(draw_name.to_string());
        Ok(())
    }

    pub fn draw_names(&self) -> &[String] {
        &self.players.draw_names
    }

    /// Draw selection is only offered when there is more than one draw
    pub fn show_draw_selection(&self) -> bool {
        self.players.draw_names.len() > 1
    }

    /// Draws to display: the selected one when there is a choice, otherwise all
    pub fn visible_draws(&self) -> Vec<&str> {
        let names = self.players.draw_names.iter().map(String::as_str);
        if self.show_draw_selection() {
            names.filter(|name| Some(*name) == self.selected_draw()).collect()
        } else {
            names.collect()
        }
    }

    fn sync_selected_draw(&mut self) {
        let still_available = self
            .selected_draw
            .as_ref()
            .is_some_and(|draw| self.players.draw_names.contains(draw));
        if !still_available {
            self.selected_draw = self.players.draw_names.first().cloned();
        }
    }
}

fn find_sub_event(sub_events: &[SubEvent], category: Category) -> Option<SubEvent> {
    let code = category.sub_event_code();
    sub_events
        .iter()
        .find(|se| se.sub_event_code == code.as_str())
        .cloned()
}
