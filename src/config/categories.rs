use std::fmt;
use std::str::FromStr;

use crate::domain::SubEventCode;

/// Player categories the grid can be switched between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    AllPlayers,
    MensSingles,
    WomensSingles,
    MensDoubles,
    WomensDoubles,
    MixedDoubles,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::AllPlayers,
        Category::MensSingles,
        Category::WomensSingles,
        Category::MensDoubles,
        Category::WomensDoubles,
        Category::MixedDoubles,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::AllPlayers => "all_players",
            Category::MensSingles => "mens_singles",
            Category::WomensSingles => "womens_singles",
            Category::MensDoubles => "mens_doubles",
            Category::WomensDoubles => "womens_doubles",
            Category::MixedDoubles => "mixed_doubles",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::AllPlayers => "ALL PLAYERS",
            Category::MensSingles => "MEN'S SINGLES",
            Category::WomensSingles => "WOMEN'S SINGLES",
            Category::MensDoubles => "MEN'S DOUBLES",
            Category::WomensDoubles => "WOMEN'S DOUBLES",
            Category::MixedDoubles => "MIXED DOUBLES",
        }
    }

    pub fn sub_event_code(&self) -> SubEventCode {
        match self {
            Category::AllPlayers => SubEventCode::All,
            Category::MensSingles => SubEventCode::MenSingles,
            Category::WomensSingles => SubEventCode::WomenSingles,
            Category::MensDoubles => SubEventCode::MenDoubles,
            Category::WomensDoubles => SubEventCode::WomenDoubles,
            Category::MixedDoubles => SubEventCode::MixedDoubles,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown category: {}", s))
    }
}

/// Categories shown when the event configuration names none
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::AllPlayers,
        Category::MensSingles,
        Category::WomensSingles,
    ]
}

/// Parse a comma separated category list, e.g. `mens_singles,mixed_doubles`
pub fn parse_categories(list: &str) -> anyhow::Result<Vec<Category>> {
    list.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(|key| key.parse::<Category>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_to_sub_event_code_table() {
        let codes: Vec<&str> = Category::ALL
            .iter()
            .map(|c| c.sub_event_code().as_str())
            .collect();
        assert_eq!(codes, vec!["ALL", "MS", "WS", "MD", "WD", "XD"]);
    }

    #[test]
    fn test_parse_categories() {
        let categories = parse_categories("mens_doubles, mixed_doubles,").unwrap();
        assert_eq!(categories, vec![Category::MensDoubles, Category::MixedDoubles]);

        assert!(parse_categories("mens_singles,darts").is_err());
    }
}
