mod all_players;

pub use all_players::{parse_player, parse_players};
