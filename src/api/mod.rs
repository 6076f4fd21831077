// API layer - HTTP endpoints

pub mod health;
pub mod items;
pub mod map_items;
pub mod requests;
pub mod trust_score;

pub use health::HealthApi;
pub use items::ItemsApi;
pub use map_items::MapItemsApi;
pub use requests::RequestsApi;
pub use trust_score::TrustScoreApi;
