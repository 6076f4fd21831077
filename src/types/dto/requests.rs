use poem_openapi::{Enum, Object};

/// Lifecycle status of a borrow request
///
/// One-way progression: pending -> approved -> returned, or
/// pending -> rejected.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
#[oai(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Returned,
    Rejected,
}

/// A record of one user's intent to borrow one item
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct BorrowRequest {
    pub id: String,

    /// Id of the requested catalog item
    pub item_id: String,

    /// Denormalized item name for display
    pub item_name: String,

    pub status: RequestStatus,

    /// Date the request was made (YYYY-MM-DD)
    pub request_date: String,

    pub user_id: String,

    pub user_name: String,
}
