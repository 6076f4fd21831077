// Stores layer - Data access and repository pattern
//
// Each store is a trait so the in-memory implementations can later be
// swapped for a persistence backend without touching service logic.

pub mod catalog_store;
pub mod map_location_store;
pub mod request_store;
pub mod seed;

pub use catalog_store::{CatalogStore, MemoryCatalogStore};
pub use map_location_store::{MapLocationStore, MemoryMapLocationStore};
pub use request_store::{MemoryRequestStore, RequestStore};
