pub mod grid;
pub mod participants;
pub mod report;
pub mod server;
