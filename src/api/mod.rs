pub mod handlers;
pub mod models;
pub mod parsers;
pub mod routes;
mod wtt_client;

pub use wtt_client::WttClient;
