//! The filter engine: pure, deterministic predicates over the catalog and
//! the map locations. The catalog view and the map view share the category
//! and availability predicates; free-text search applies to the catalog
//! only. Predicates compose by conjunction.

use crate::types::dto::items::Item;
use crate::types::dto::map::{MapItem, MapPin};

/// Availability predicate for catalog and map filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityFilter {
    #[default]
    All,
    Available,
    Borrowed,
}

impl AvailabilityFilter {
    /// Parse a query-string value; anything unrecognized behaves as `All`
    pub fn parse(value: &str) -> Self {
        match value {
            "Available" => AvailabilityFilter::Available,
            "Borrowed" => AvailabilityFilter::Borrowed,
            _ => AvailabilityFilter::All,
        }
    }

    /// Whether an item with the given availability passes the filter
    ///
    /// `None` (item missing from the catalog) matches neither the
    /// `Available` nor the `Borrowed` branch, so those filters drop it.
    fn matches(self, available: Option<bool>) -> bool {
        match self {
            AvailabilityFilter::All => true,
            AvailabilityFilter::Available => available == Some(true),
            AvailabilityFilter::Borrowed => available == Some(false),
        }
    }
}

/// Category sentinel meaning "no category filter"
pub const ALL_CATEGORIES: &str = "All";

/// Compute the visible subset of the catalog
///
/// - non-empty `search`: case-insensitive substring match on name or
///   description (no tokenization or ranking)
/// - `category` other than "All": exact match
/// - availability: tri-state as above
pub fn filter_catalog(
    items: &[Item],
    search: &str,
    category: &str,
    availability: AvailabilityFilter,
) -> Vec<Item> {
    let term = search.to_lowercase();
    items
        .iter()
        .filter(|item| {
            term.is_empty()
                || item.name.to_lowercase().contains(&term)
                || item.description.to_lowercase().contains(&term)
        })
        .filter(|item| category == ALL_CATEGORIES || item.category == category)
        .filter(|item| availability.matches(Some(item.available)))
        .cloned()
        .collect()
}

/// Join map locations against the catalog and filter the resulting pins
///
/// Each location is left-joined to its item by id to derive availability;
/// a pin whose item no longer exists carries `available: None` and is
/// implicitly excluded by the `Available`/`Borrowed` filters.
pub fn filter_map_items(
    locations: &[MapItem],
    items: &[Item],
    category: &str,
    availability: AvailabilityFilter,
) -> Vec<MapPin> {
    locations
        .iter()
        .map(|loc| MapPin {
            item_id: loc.item_id.clone(),
            lat: loc.lat,
            lng: loc.lng,
            address: loc.address.clone(),
            name: loc.name.clone(),
            category: loc.category.clone(),
            available: items
                .iter()
                .find(|item| item.id == loc.item_id)
                .map(|item| item.available),
        })
        .filter(|pin| category == ALL_CATEGORIES || pin.category == category)
        .filter(|pin| availability.matches(pin.available))
        .collect()
}
