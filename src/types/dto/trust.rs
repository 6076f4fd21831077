use poem_openapi::Object;

/// Reputation summary for a user
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct TrustScore {
    pub user_id: String,

    pub name: String,

    /// Reputation on a 0-10 scale
    pub trust_score: f64,

    /// Number of items this user has lent out
    pub lending_count: u32,

    /// Number of items this user has borrowed
    pub borrowing_count: u32,

    /// Percentage of positive feedback received
    pub positive_feedback: u32,
}
