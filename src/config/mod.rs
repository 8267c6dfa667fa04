pub mod categories;
pub mod settings;

pub use categories::Category;
pub use settings::AppConfig;
