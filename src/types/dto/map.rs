use poem_openapi::Object;

/// Static geographic location of a catalog item
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct MapItem {
    /// Id of the catalog item this location belongs to
    pub item_id: String,

    pub lat: f64,

    pub lng: f64,

    /// Human-readable pickup address
    pub address: String,

    pub name: String,

    pub category: String,
}

/// A map location joined with the owning item's availability
///
/// `available` is `None` when the location references an item that no
/// longer exists in the catalog; the availability filter then excludes
/// the pin since neither branch matches.
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct MapPin {
    pub item_id: String,
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub name: String,
    pub category: String,
    pub available: Option<bool>,
}
