use serde::{Deserialize, Deserializer, Serialize};

/// Draw name the all-players listing files every player under
pub const ALL_PLAYERS_DRAW: &str = "All Players";

/// Sub-event id reserved for the synthetic all-players sub-event
pub const ALL_PLAYERS_SUB_EVENT_ID: i64 = 9999;

/// One player entry in a sub-event, as served by the WTT CMS
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Participant {
    pub event_id: i64,
    pub sub_event_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_event_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_event_age_category: String,
    #[serde(rename = "ittfid", deserialize_with = "null_as_default")]
    pub ittf_id: String,
    #[serde(rename = "birthDate", deserialize_with = "null_as_default")]
    pub birth_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub player_given_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub player_family_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub individual_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub org_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub seed: Option<i64>,
    pub current_ranking: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub current_ranking_points: f64,
    pub is_double_entry: Option<bool>,
    pub team_name: Option<String>,
    pub team_number: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub entry_draw_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub entry_quota_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gender_value: String,
}

impl Participant {
    /// Current world ranking, `None` when the player is unranked.
    ///
    /// The CMS reports unranked players with a null, missing or zero ranking.
    /// Any other value, negative ones included, is a ranking.
    pub fn world_ranking(&self) -> Option<i64> {
        self.current_ranking.filter(|rank| *rank != 0)
    }

    /// Team name when it can link this entry to a partner
    pub fn team_key(&self) -> Option<&str> {
        self.team_name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.player_given_name, self.player_family_name)
            .trim()
            .to_string()
    }

    pub fn initials(&self) -> String {
        self.player_given_name
            .chars()
            .take(1)
            .chain(self.player_family_name.chars().take(1))
            .collect()
    }
}

/// Reads `null` as the type's default, the CMS sends nulls for blank text fields
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Two entries sharing a team name in a doubles sub-event.
///
/// `player1` is whichever entry came first in the source data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoublesTeam {
    pub player1: Participant,
    pub player2: Participant,
    pub team_name: String,
}

impl DoublesTeam {
    pub fn draw_name(&self) -> &str {
        &self.player1.entry_draw_name
    }

    pub fn world_ranking(&self) -> Option<i64> {
        self.player1.world_ranking()
    }
}

/// Sub-event descriptor from the CMS sub-events listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubEvent {
    pub sub_event_id: i64,
    pub sub_event_name: String,
    #[serde(default)]
    pub sub_event_desc: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default)]
    pub min_team_size: i64,
    #[serde(default)]
    pub max_team_size: i64,
    #[serde(default)]
    pub waiting_list_allowed: bool,
    #[serde(default)]
    pub event_id: i64,
    pub sub_event_code: String,
    #[serde(default)]
    pub number_of_total_matches: i64,
    #[serde(default)]
    pub sub_event_draw_type_id: String,
    #[serde(default)]
    pub gender: String,
}

impl SubEvent {
    /// Synthetic sub-event listing every ranked player of the event
    pub fn all_players(event_id: i64) -> Self {
        Self {
            sub_event_id: ALL_PLAYERS_SUB_EVENT_ID,
            sub_event_name: "All Players".to_string(),
            sub_event_desc: None,
            is_active: true,
            is_deleted: false,
            is_optional: false,
            min_team_size: 0,
            max_team_size: 0,
            waiting_list_allowed: false,
            event_id,
            sub_event_code: "ALL".to_string(),
            number_of_total_matches: 0,
            sub_event_draw_type_id: "0".to_string(),
            gender: "A".to_string(),
        }
    }
}

/// Player record from the all-players API, after field normalisation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedPlayer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub ranking: i64,
    pub points: f64,
    pub gender: String,
}

impl RankedPlayer {
    pub fn into_participant(self) -> Participant {
        let individual_name = format!("{} {}", self.first_name, self.last_name);
        Participant {
            sub_event_id: ALL_PLAYERS_SUB_EVENT_ID,
            sub_event_code: "ALL".to_string(),
            sub_event_age_category: "SEN".to_string(),
            ittf_id: self.id,
            player_given_name: self.first_name,
            player_family_name: self.last_name,
            individual_name,
            org_code: self.country,
            status: "Confirmed".to_string(),
            seed: Some(0),
            current_ranking: Some(self.ranking),
            current_ranking_points: self.points,
            entry_draw_name: ALL_PLAYERS_DRAW.to_string(),
            entry_quota_type: "ALL".to_string(),
            gender_value: self.gender,
            ..Participant::default()
        }
    }
}

/// Profile picture record from the headshots listing
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerHeadshot {
    pub ittfid: String,
    pub head_shot: String,
}
