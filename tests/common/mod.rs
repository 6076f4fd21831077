// Common test utilities for integration tests

use std::sync::Arc;

use poem::{test::TestClient, Route};
use poem_openapi::OpenApiService;

use neighborshare_backend::api::{HealthApi, ItemsApi, MapItemsApi, RequestsApi, TrustScoreApi};
use neighborshare_backend::providers::{FailurePolicy, TrustScoreProvider};
use neighborshare_backend::services::{BorrowService, CatalogService};
use neighborshare_backend::stores::{
    MemoryCatalogStore, MemoryMapLocationStore, MemoryRequestStore,
};

/// Borrower identity used by the test app
pub const TEST_USER: &str = "Current User";

/// Build a full API app over freshly seeded stores with the given failure
/// policy; returns the catalog store for direct state assertions.
pub fn test_app(policy: impl FailurePolicy + 'static) -> (Arc<MemoryCatalogStore>, TestClient<Route>) {
    let catalog = Arc::new(MemoryCatalogStore::seeded());
    let requests = Arc::new(MemoryRequestStore::seeded());
    let locations = Arc::new(MemoryMapLocationStore::seeded());
    let trust = Arc::new(TrustScoreProvider::seeded());

    let policy: Arc<dyn FailurePolicy> = Arc::new(policy);
    let catalog_service = Arc::new(CatalogService::new(catalog.clone(), policy.clone()));
    let borrow_service = Arc::new(BorrowService::new(catalog.clone(), policy));

    let api_service = OpenApiService::new(
        (
            HealthApi,
            ItemsApi::new(catalog_service, borrow_service, TEST_USER.to_string()),
            RequestsApi::new(requests),
            MapItemsApi::new(locations, catalog.clone()),
            TrustScoreApi::new(trust),
        ),
        "NeighborShare API",
        "test",
    );

    let app = Route::new().nest("/api", api_service);
    (catalog, TestClient::new(app))
}

/// A complete item draft as posted by the add-item form
pub fn valid_draft() -> serde_json::Value {
    serde_json::json!({
        "name": "Pressure Washer",
        "description": "Electric pressure washer, 1800 PSI.",
        "category": "Tools",
        "owner": "Morgan Reyes",
        "condition": "Good",
        "image": "https://example.com/washer.jpg"
    })
}
