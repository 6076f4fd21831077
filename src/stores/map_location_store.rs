use async_trait::async_trait;

use crate::stores::seed;
use crate::types::dto::map::MapItem;

/// Read-only index of item locations, keyed by item id
#[async_trait]
pub trait MapLocationStore: Send + Sync {
    /// All known locations
    async fn list(&self) -> Vec<MapItem>;

    /// Location of a single item, if one is recorded
    async fn get(&self, item_id: &str) -> Option<MapItem>;
}

/// In-memory location index; static reference data, so no lock is needed
pub struct MemoryMapLocationStore {
    locations: Vec<MapItem>,
}

impl MemoryMapLocationStore {
    pub fn new(locations: Vec<MapItem>) -> Self {
        Self { locations }
    }

    /// Create a location index pre-loaded with the seed locations
    pub fn seeded() -> Self {
        Self::new(seed::map_items())
    }
}

#[async_trait]
impl MapLocationStore for MemoryMapLocationStore {
    async fn list(&self) -> Vec<MapItem> {
        self.locations.clone()
    }

    async fn get(&self, item_id: &str) -> Option<MapItem> {
        self.locations.iter().find(|loc| loc.item_id == item_id).cloned()
    }
}
