use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::stores::RequestStore;
use crate::types::dto::requests::BorrowRequest;

/// Borrow request listing API
pub struct RequestsApi {
    store: Arc<dyn RequestStore>,
}

impl RequestsApi {
    pub fn new(store: Arc<dyn RequestStore>) -> Self {
        Self { store }
    }
}

/// API tags for request endpoints
#[derive(Tags)]
enum ApiTags {
    /// Borrow request endpoints
    Requests,
}

#[OpenApi]
impl RequestsApi {
    /// List borrow requests
    ///
    /// Display-only sample data; the borrow flow does not file new records
    /// in this version.
    #[oai(path = "/requests", method = "get", tag = "ApiTags::Requests")]
    async fn list_requests(&self) -> Json<Vec<BorrowRequest>> {
        Json(self.store.list().await)
    }
}
