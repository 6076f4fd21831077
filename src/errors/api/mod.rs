// API error responses, one enum per resource area

pub mod items;
pub mod trust;

pub use items::ItemError;
pub use trust::TrustError;
