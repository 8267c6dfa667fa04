use log::debug;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::codes::is_doubles_sub_event;
use super::models::{DoublesTeam, Participant};

/// Substring that marks the draw shown first
const MAIN_DRAW: &str = "Main Draw";

pub type DrawMap<T> = BTreeMap<String, Vec<T>>;

/// Draw-keyed, rank-sorted view of one sub-event's entries.
///
/// Only one of `singles_by_draw` and `doubles_by_draw` is populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedPlayers {
    pub is_doubles: bool,
    pub draw_names: Vec<String>,
    pub singles_by_draw: DrawMap<Participant>,
    pub doubles_by_draw: DrawMap<DoublesTeam>,
}

impl AggregatedPlayers {
    pub fn is_empty(&self) -> bool {
        self.draw_names.is_empty()
    }
}

/// Group a sub-event's entries into draws, pairing doubles entries into teams
pub fn aggregate(participants: &[Participant], sub_event_code: &str) -> AggregatedPlayers {
    if is_doubles_sub_event(sub_event_code) {
        let doubles_by_draw = build_doubles_teams(participants);
        AggregatedPlayers {
            is_doubles: true,
            draw_names: ordered_draw_names(doubles_by_draw.keys()),
            singles_by_draw: DrawMap::new(),
            doubles_by_draw,
        }
    } else {
        let singles_by_draw = build_singles_groups(participants);
        AggregatedPlayers {
            is_doubles: false,
            draw_names: ordered_draw_names(singles_by_draw.keys()),
            singles_by_draw,
            doubles_by_draw: DrawMap::new(),
        }
    }
}

/// Pair entries sharing a team name and group the teams by draw.
///
/// Entries without a team name are skipped. Team names with anything other
/// than two entries are dropped. Each team takes its draw and ranking from
/// its first entry.
pub fn build_doubles_teams(participants: &[Participant]) -> DrawMap<DoublesTeam> {
    let teams = pair_teams(participants);
    let mut grouped = group_by_draw(teams, |team| team.draw_name().to_string());
    sort_groups(&mut grouped, DoublesTeam::world_ranking);
    grouped
}

/// Group entries by draw, each draw sorted by world ranking
pub fn build_singles_groups(participants: &[Participant]) -> DrawMap<Participant> {
    let mut grouped = group_by_draw(participants.iter().cloned(), |participant| {
        participant.entry_draw_name.clone()
    });
    sort_groups(&mut grouped, Participant::world_ranking);
    grouped
}

/// Draw names with any "Main Draw" first and the rest in ascending order
pub fn ordered_draw_names<'a, I>(draw_names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let unique: BTreeSet<&String> = draw_names.into_iter().collect();
    let mut names: Vec<String> = unique.into_iter().cloned().collect();
    names.sort_by(|a, b| compare_draw_names(a, b));
    names
}

/// Ranking order: ascending rank, unranked entries last and equal to each other
pub fn compare_rankings(left: Option<i64>, right: Option<i64>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(&b),
    }
}

fn compare_draw_names(a: &str, b: &str) -> Ordering {
    let a_main = a.contains(MAIN_DRAW);
    let b_main = b.contains(MAIN_DRAW);
    b_main.cmp(&a_main).then_with(|| a.cmp(b))
}

fn pair_teams(participants: &[Participant]) -> Vec<DoublesTeam> {
    let mut order: Vec<&str> = Vec::new();
    let mut members: HashMap<&str, Vec<&Participant>> = HashMap::new();

    for participant in participants {
        let Some(team_name) = participant.team_key() else {
            continue;
        };
        members
            .entry(team_name)
            .or_insert_with(|| {
                order.push(team_name);
                Vec::new()
            })
            .push(participant);
    }

    order
        .into_iter()
        .filter_map(|team_name| match members.get(team_name).map(Vec::as_slice) {
            Some([player1, player2]) => Some(DoublesTeam {
                player1: (*player1).clone(),
                player2: (*player2).clone(),
                team_name: team_name.to_string(),
            }),
            Some(entries) => {
                debug!(
                    "Dropping team {} with {} entries",
                    team_name,
                    entries.len()
                );
                None
            }
            None => None,
        })
        .collect()
}

fn group_by_draw<T, I, F>(items: I, draw_of: F) -> DrawMap<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> String,
{
    let mut grouped = DrawMap::new();
    for item in items {
        grouped
            .entry(draw_of(&item))
            .or_insert_with(Vec::new)
            .push(item);
    }
    grouped
}

fn sort_groups<T, F>(grouped: &mut DrawMap<T>, ranking_of: F)
where
    F: Fn(&T) -> Option<i64>,
{
    // sort_by is stable, unranked entries keep their input order
    for entries in grouped.values_mut() {
        entries.sort_by(|a, b| compare_rankings(ranking_of(a), ranking_of(b)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, draw: &str, ranking: Option<i64>) -> Participant {
        Participant {
            ittf_id: id.to_string(),
            entry_draw_name: draw.to_string(),
            current_ranking: ranking,
            ..Participant::default()
        }
    }

    fn team_entry(id: &str, team: Option<&str>, draw: &str, ranking: Option<i64>) -> Participant {
        Participant {
            team_name: team.map(str::to_string),
            ..entry(id, draw, ranking)
        }
    }

    fn ids(entries: &[Participant]) -> Vec<&str> {
        entries.iter().map(|p| p.ittf_id.as_str()).collect()
    }

    #[test]
    fn test_singles_sorted_by_ranking_with_unranked_last() {
        let participants = vec![
            entry("r5", "Main Draw", Some(5)),
            entry("u1", "Main Draw", None),
            entry("r2", "Main Draw", Some(2)),
            entry("u2", "Main Draw", None),
            entry("r1", "Main Draw", Some(1)),
        ];

        let grouped = build_singles_groups(&participants);

        assert_eq!(grouped.len(), 1);
        assert_eq!(ids(&grouped["Main Draw"]), vec!["r1", "r2", "r5", "u1", "u2"]);
    }

    #[test]
    fn test_zero_ranking_sorts_with_unranked() {
        let participants = vec![
            entry("zero", "Main Draw", Some(0)),
            entry("r9", "Main Draw", Some(9)),
        ];

        let grouped = build_singles_groups(&participants);

        assert_eq!(ids(&grouped["Main Draw"]), vec!["r9", "zero"]);
    }

    #[test]
    fn test_negative_ranking_counts_as_ranked() {
        let participants = vec![
            entry("r3", "Main Draw", Some(3)),
            entry("neg", "Main Draw", Some(-1)),
            entry("none", "Main Draw", None),
        ];

        let grouped = build_singles_groups(&participants);

        assert_eq!(ids(&grouped["Main Draw"]), vec!["neg", "r3", "none"]);
    }

    #[test]
    fn test_singles_draw_keys_come_from_input() {
        let participants = vec![
            entry("a", "Main Draw", Some(3)),
            entry("b", "Qualification", Some(40)),
            entry("c", "Main Draw", Some(1)),
        ];

        let grouped = build_singles_groups(&participants);

        let keys: Vec<&String> = grouped.keys().collect();
        assert_eq!(keys, vec!["Main Draw", "Qualification"]);
        assert_eq!(ids(&grouped["Main Draw"]), vec!["c", "a"]);
        assert_eq!(ids(&grouped["Qualification"]), vec!["b"]);
    }

    #[test]
    fn test_doubles_keep_only_two_member_teams() {
        let participants = vec![
            team_entry("a1", Some("A"), "Main Draw", Some(4)),
            team_entry("a2", Some("A"), "Main Draw", Some(8)),
            team_entry("b1", Some("B"), "Main Draw", Some(1)),
            team_entry("b2", Some("B"), "Main Draw", Some(2)),
            team_entry("b3", Some("B"), "Main Draw", Some(3)),
        ];

        let teams = build_doubles_teams(&participants);

        assert_eq!(teams.len(), 1);
        let main = &teams["Main Draw"];
        assert_eq!(main.len(), 1);
        assert_eq!(main[0].team_name, "A");
        let mut members = vec![main[0].player1.ittf_id.as_str(), main[0].player2.ittf_id.as_str()];
        members.sort();
        assert_eq!(members, vec!["a1", "a2"]);
    }

    #[test]
    fn test_doubles_skip_entries_without_team() {
        let participants = vec![
            team_entry("solo", None, "Main Draw", Some(1)),
            team_entry("blank", Some(""), "Main Draw", Some(2)),
            team_entry("single", Some("C"), "Main Draw", Some(3)),
        ];

        assert!(build_doubles_teams(&participants).is_empty());
    }

    #[test]
    fn test_doubles_grouped_by_first_player_draw_and_sorted() {
        let participants = vec![
            team_entry("x1", Some("X"), "Main Draw", None),
            team_entry("y1", Some("Y"), "Main Draw", Some(12)),
            team_entry("x2", Some("X"), "Main Draw", Some(1)),
            team_entry("y2", Some("Y"), "Main Draw", Some(30)),
            team_entry("z1", Some("Z"), "Main Draw", Some(3)),
            team_entry("q1", Some("Q"), "Qualification", Some(90)),
            team_entry("z2", Some("Z"), "Main Draw", Some(5)),
            team_entry("q2", Some("Q"), "Main Draw", Some(91)),
        ];

        let teams = build_doubles_teams(&participants);

        let main: Vec<&str> = teams["Main Draw"].iter().map(|t| t.team_name.as_str()).collect();
        assert_eq!(main, vec!["Z", "Y", "X"]);
        assert_eq!(teams["Qualification"].len(), 1);
        assert_eq!(teams["Qualification"][0].team_name, "Q");
    }

    #[test]
    fn test_draw_names_put_main_draw_first() {
        let names = vec![
            "Qualification".to_string(),
            "Main Draw".to_string(),
            "Round of 16".to_string(),
        ];

        assert_eq!(
            ordered_draw_names(&names),
            vec!["Main Draw", "Qualification", "Round of 16"]
        );
    }

    #[test]
    fn test_draw_names_with_several_main_draws() {
        let names = vec![
            "Consolation".to_string(),
            "Main Draw - Stage 2".to_string(),
            "Main Draw".to_string(),
        ];

        let ordered = ordered_draw_names(&names);

        assert_eq!(ordered.len(), 3);
        assert!(ordered[0].contains("Main Draw"));
        assert!(ordered[1].contains("Main Draw"));
        assert_eq!(ordered[2], "Consolation");
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert!(build_singles_groups(&[]).is_empty());
        assert!(build_doubles_teams(&[]).is_empty());
        assert!(ordered_draw_names(&Vec::<String>::new()).is_empty());

        let aggregated = aggregate(&[], "MD");
        assert!(aggregated.is_doubles);
        assert!(aggregated.is_empty());
    }

    #[test]
    fn test_aggregate_fills_one_side_only() {
        let participants = vec![
            team_entry("a1", Some("A"), "Main Draw", Some(4)),
            team_entry("a2", Some("A"), "Main Draw", Some(8)),
        ];

        let doubles = aggregate(&participants, "XD");
        assert!(doubles.is_doubles);
        assert!(doubles.singles_by_draw.is_empty());
        assert_eq!(doubles.doubles_by_draw["Main Draw"].len(), 1);

        let singles = aggregate(&participants, "MS");
        assert!(!singles.is_doubles);
        assert!(singles.doubles_by_draw.is_empty());
        assert_eq!(singles.singles_by_draw["Main Draw"].len(), 2);
        assert_eq!(singles.draw_names, vec!["Main Draw"]);
    }

    #[test]
    fn test_aggregate_is_repeatable_and_leaves_input_alone() {
        let participants = vec![
            entry("r5", "Qualification", Some(5)),
            entry("u1", "Main Draw", None),
            entry("r2", "Main Draw", Some(2)),
        ];
        let before = participants.clone();

        let first = aggregate(&participants, "WS");
        let second = aggregate(&participants, "WS");

        assert_eq!(first, second);
        assert_eq!(participants, before);
    }
}
