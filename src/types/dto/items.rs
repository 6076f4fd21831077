use poem_openapi::Object;

/// A shareable physical item in the community catalog
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier ("itm" + zero-padded ordinal)
    pub id: String,

    /// Display name of the item
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Category (e.g. "Tools", "Kitchen")
    pub category: String,

    /// Name of the owner offering the item
    pub owner: String,

    /// Physical condition (e.g. "Good", "Like New")
    pub condition: String,

    /// Whether the item can currently be borrowed
    pub available: bool,

    /// URL of the item photo
    pub image: String,

    /// Name of the current borrower; set exactly when `available` is false
    pub borrowed_by: Option<String>,
}

/// Request model for listing a new item
///
/// All fields are required by the service; they are optional here so the
/// validation layer can report which one is missing rather than failing
/// at parse time.
#[derive(Object, Debug, Default)]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub owner: Option<String>,
    pub condition: Option<String>,
    pub image: Option<String>,
}

/// Response model for a successful item creation
#[derive(Object, Debug)]
pub struct CreateItemResponse {
    pub success: bool,

    /// The item as stored, with its assigned id
    pub item: Item,

    pub message: String,
}

/// Response model for an accepted borrow request
#[derive(Object, Debug)]
pub struct BorrowResponse {
    pub success: bool,

    /// Always "requested" on success
    pub status: String,

    pub message: String,
}

/// Categories offered by the catalog, including the "All" filter sentinel
pub const CATEGORIES: [&str; 6] = ["All", "Tools", "Outdoors", "Kitchen", "Fitness", "Games"];

/// Accepted condition labels for new listings
pub const CONDITIONS: [&str; 5] = ["Like New", "Excellent", "Very Good", "Good", "Fair"];
