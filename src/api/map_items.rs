use std::sync::Arc;

use poem_openapi::{param::Query, payload::Json, OpenApi, Tags};

use crate::services::filter::{filter_map_items, AvailabilityFilter, ALL_CATEGORIES};
use crate::stores::{CatalogStore, MapLocationStore};
use crate::types::dto::map::MapPin;

/// Map view API endpoints
pub struct MapItemsApi {
    locations: Arc<dyn MapLocationStore>,
    catalog: Arc<dyn CatalogStore>,
}

impl MapItemsApi {
    pub fn new(locations: Arc<dyn MapLocationStore>, catalog: Arc<dyn CatalogStore>) -> Self {
        Self { locations, catalog }
    }
}

/// API tags for map endpoints
#[derive(Tags)]
enum ApiTags {
    /// Map location endpoints
    Map,
}

#[OpenApi]
impl MapItemsApi {
    /// List item locations as map pins
    ///
    /// Each pin carries the owning item's availability, joined at read time
    /// against the catalog. Optional `category` and `availability` params
    /// apply the same predicates as the catalog view; there is no text
    /// search on the map.
    #[oai(path = "/map-items", method = "get", tag = "ApiTags::Map")]
    async fn list_map_items(
        &self,
        category: Query<Option<String>>,
        availability: Query<Option<String>>,
    ) -> Json<Vec<MapPin>> {
        let locations = self.locations.list().await;
        let items = self.catalog.list().await;
        let pins = filter_map_items(
            &locations,
            &items,
            category.0.as_deref().unwrap_or(ALL_CATEGORIES),
            AvailabilityFilter::parse(availability.0.as_deref().unwrap_or("All")),
        );
        Json(pins)
    }
}
