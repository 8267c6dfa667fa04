use serde_json::Value;

use crate::domain::RankedPlayer;

const ID_KEYS: &[&str] = &["id", "Id", "IttfId", "PlayerId"];
const FIRST_NAME_KEYS: &[&str] = &["FirstName", "firstName", "PlayerGivenName"];
const LAST_NAME_KEYS: &[&str] = &["LastName", "lastName", "PlayerFamilyName"];
const COUNTRY_KEYS: &[&str] = &["Country", "country", "OrgCode", "OrganizationCode"];
const RANKING_KEYS: &[&str] = &["Ranking", "ranking", "CurrentRanking"];
const POINTS_KEYS: &[&str] = &["Points", "points", "CurrentRankingPoints"];
const GENDER_KEYS: &[&str] = &["Gender", "gender", "GenderValue"];

/// Extract players from an all-players payload (`{"Result": [...]}`).
///
/// A payload without a `Result` array yields no players.
pub fn parse_players(data: &Value) -> Vec<RankedPlayer> {
    data.get("Result")
        .and_then(Value::as_array)
        .map(|players| players.iter().map(parse_player).collect())
        .unwrap_or_default()
}

/// Map one player record, accepting the field spellings both the live API and
/// the bundled snapshot use
pub fn parse_player(player: &Value) -> RankedPlayer {
    RankedPlayer {
        id: first_text(player, ID_KEYS).unwrap_or_default(),
        first_name: first_text(player, FIRST_NAME_KEYS).unwrap_or_default(),
        last_name: first_text(player, LAST_NAME_KEYS).unwrap_or_default(),
        country: first_text(player, COUNTRY_KEYS).unwrap_or_default(),
        ranking: first_number(player, RANKING_KEYS).map_or(0, |n| n as i64),
        points: first_number(player, POINTS_KEYS).unwrap_or(0.0),
        gender: first_text(player, GENDER_KEYS).unwrap_or_else(|| "M".to_string()),
    }
}

fn first_text(player: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| as_text(player.get(*key)?))
}

fn first_number(player: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| as_number(player.get(*key)?))
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numbers, or strings starting with an integer; zero counts as missing
fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => leading_integer(s),
        _ => None,
    }?;
    (number != 0.0).then_some(number)
}

fn leading_integer(s: &str) -> Option<f64> {
    let trimmed = s.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits = trimmed[sign_len..]
        .chars()
        .take_while(char::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_live_field_names() {
        let data = json!({
            "Result": [{
                "Id": "131163",
                "FirstName": "Chuqin",
                "LastName": "WANG",
                "Country": "CHN",
                "Ranking": 1,
                "Points": 9800,
                "Gender": "M"
            }]
        });

        let players = parse_players(&data);

        assert_eq!(players.len(), 1);
        assert_eq!(players[0].id, "131163");
        assert_eq!(players[0].first_name, "Chuqin");
        assert_eq!(players[0].ranking, 1);
        assert_eq!(players[0].points, 9800.0);
    }

    #[test]
    fn test_snapshot_field_names_with_numeric_strings() {
        let player = parse_player(&json!({
            "IttfId": "121582",
            "PlayerGivenName": "Hina",
            "PlayerFamilyName": "HAYATA",
            "OrganizationCode": "JPN",
            "CurrentRanking": "5",
            "CurrentRankingPoints": "6000.5",
            "Gender": "F"
        }));

        assert_eq!(player.id, "121582");
        assert_eq!(player.country, "JPN");
        assert_eq!(player.ranking, 5);
        assert_eq!(player.points, 6000.0);
        assert_eq!(player.gender, "F");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let player = parse_player(&json!({ "PlayerId": 42, "CurrentRanking": "n/a" }));

        assert_eq!(player.id, "42");
        assert_eq!(player.first_name, "");
        assert_eq!(player.ranking, 0);
        assert_eq!(player.points, 0.0);
        assert_eq!(player.gender, "M");
    }

    #[test]
    fn test_payload_without_result_array() {
        assert!(parse_players(&json!({ "Result": null })).is_empty());
        assert!(parse_players(&json!([])).is_empty());
    }
}
