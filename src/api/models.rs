use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use urlencoding::encode;

use crate::config::Category;
use crate::domain::{DoublesTeam, Participant, SubEvent};
use crate::services::grid::PlayersGrid;

const PROFILE_URL: &str = "https://worldtabletennis.com/playerDescription?playerId=";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItem {
    pub key: String,
    pub label: String,
    pub sub_event_code: String,
}

impl From<Category> for CategoryItem {
    fn from(category: Category) -> Self {
        Self {
            key: category.key().to_string(),
            label: category.label().to_string(),
            sub_event_code: category.sub_event_code().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubEventItem {
    pub sub_event_id: i64,
    pub name: String,
    pub code: String,
    pub gender: String,
}

impl From<&SubEvent> for SubEventItem {
    fn from(sub_event: &SubEvent) -> Self {
        Self {
            sub_event_id: sub_event.sub_event_id,
            name: sub_event.sub_event_name.clone(),
            code: sub_event.sub_event_code.clone(),
            gender: sub_event.gender.clone(),
        }
    }
}

/// One player card: photo or initials, world ranking, country, points and seed
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCardView {
    pub ittf_id: String,
    pub name: String,
    pub initials: String,
    pub country: String,
    pub world_ranking: Option<i64>,
    pub points: f64,
    pub seed: Option<i64>,
    pub photo_url: Option<String>,
    pub profile_url: String,
}

impl PlayerCardView {
    pub fn new(participant: &Participant, profile_pics: &HashMap<String, String>) -> Self {
        Self {
            ittf_id: participant.ittf_id.clone(),
            name: participant.display_name().to_uppercase(),
            initials: participant.initials(),
            country: participant.org_code.clone(),
            world_ranking: participant.world_ranking(),
            points: participant.current_ranking_points,
            seed: participant.seed,
            photo_url: profile_pics.get(&participant.ittf_id).cloned(),
            profile_url: format!("{}{}", PROFILE_URL, encode(&participant.ittf_id)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoublesCardView {
    pub team_name: String,
    pub player1: PlayerCardView,
    pub player2: PlayerCardView,
}

impl DoublesCardView {
    pub fn new(team: &DoublesTeam, profile_pics: &HashMap<String, String>) -> Self {
        Self {
            team_name: team.team_name.clone(),
            player1: PlayerCardView::new(&team.player1, profile_pics),
            player2: PlayerCardView::new(&team.player2, profile_pics),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawView {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub players: Vec<PlayerCardView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<DoublesCardView>,
}

/// Everything the players grid shows for the current selection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayersGridView {
    pub category: Option<String>,
    pub sub_event_name: Option<String>,
    pub is_doubles: bool,
    pub loading: bool,
    pub draw_names: Vec<String>,
    pub show_draw_selection: bool,
    pub selected_draw: Option<String>,
    pub draws: Vec<DrawView>,
    pub empty_message: Option<String>,
    pub error: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PlayersGridView {
    pub fn new(grid: &PlayersGrid, profile_pics: &HashMap<String, String>) -> Self {
        let players = grid.players();
        let draws = grid
            .visible_draws()
            .into_iter()
            .map(|name| DrawView {
                name: name.to_string(),
                players: players
                    .singles_by_draw
                    .get(name)
                    .map(|entries| {
                        entries
                            .iter()
                            .map(|p| PlayerCardView::new(p, profile_pics))
                            .collect()
                    })
                    .unwrap_or_default(),
                teams: players
                    .doubles_by_draw
                    .get(name)
                    .map(|teams| {
                        teams
                            .iter()
                            .map(|t| DoublesCardView::new(t, profile_pics))
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect();

        let sub_event_name = grid.selected_sub_event().map(|se| se.sub_event_name.clone());
        let empty_message = (grid.error().is_none() && players.is_empty())
            .then(|| empty_state_message(grid.is_doubles(), sub_event_name.as_deref()));

        Self {
            category: grid.selected_category().map(|c| c.key().to_string()),
            sub_event_name,
            is_doubles: grid.is_doubles(),
            loading: grid.is_loading(),
            draw_names: grid.draw_names().to_vec(),
            show_draw_selection: grid.show_draw_selection(),
            selected_draw: grid.selected_draw().map(str::to_string),
            draws,
            empty_message,
            error: grid.error().map(str::to_string),
            updated_at: grid.updated_at(),
        }
    }
}

fn empty_state_message(is_doubles: bool, sub_event_name: Option<&str>) -> String {
    let what = if is_doubles { "teams" } else { "participants" };
    format!("No {} found for {}.", what, sub_event_name.unwrap_or("this category"))
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_card_without_photo() {
        let participant = Participant {
            ittf_id: "121558".to_string(),
            player_given_name: "Zhendong".to_string(),
            player_family_name: "Fan".to_string(),
            org_code: "CHN".to_string(),
            current_ranking: Some(0),
            seed: Some(1),
            ..Participant::default()
        };

        let card = PlayerCardView::new(&participant, &HashMap::new());

        assert_eq!(card.name, "ZHENDONG FAN");
        assert_eq!(card.initials, "ZF");
        assert_eq!(card.world_ranking, None);
        assert_eq!(card.photo_url, None);
        assert_eq!(
            card.profile_url,
            "https://worldtabletennis.com/playerDescription?playerId=121558"
        );
    }

    #[test]
    fn test_player_card_with_photo() {
        let participant = Participant {
            ittf_id: "1".to_string(),
            ..Participant::default()
        };
        let pics = HashMap::from([("1".to_string(), "https://img/1.png".to_string())]);

        let card = PlayerCardView::new(&participant, &pics);

        assert_eq!(card.photo_url.as_deref(), Some("https://img/1.png"));
    }

    #[test]
    fn test_empty_grid_view_message() {
        let mut grid = PlayersGrid::new(
            vec![Category::MensDoubles],
            vec![SubEvent {
                sub_event_code: "MD".to_string(),
                sub_event_name: "Men's Doubles".to_string(),
                ..SubEvent::all_players(1)
            }],
        );
        let ticket = grid.begin_fetch().unwrap();
        assert!(PlayersGridView::new(&grid, &HashMap::new()).loading);
        grid.apply(&ticket, Ok(vec![]));

        let view = PlayersGridView::new(&grid, &HashMap::new());

        assert!(!view.loading);
        assert!(view.is_doubles);
        assert!(view.draws.is_empty());
        assert_eq!(
            view.empty_message.as_deref(),
            Some("No teams found for Men's Doubles.")
        );
    }
}
