pub mod aggregation;
pub mod codes;
pub mod models;

pub use aggregation::{AggregatedPlayers, aggregate};
pub use codes::{SubEventCode, is_doubles_sub_event};
pub use models::*;
