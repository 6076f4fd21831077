use std::sync::Arc;

use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;

use neighborshare_backend::api::{HealthApi, ItemsApi, MapItemsApi, RequestsApi, TrustScoreApi};
use neighborshare_backend::config::{logging::init_logging, AppConfig};
use neighborshare_backend::providers::{RandomFailurePolicy, TrustScoreProvider};
use neighborshare_backend::services::{BorrowService, CatalogService};
use neighborshare_backend::stores::{
    MemoryCatalogStore, MemoryMapLocationStore, MemoryRequestStore,
};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let config = AppConfig::from_env();

    // Seed the in-memory stores; everything resets to this state on restart
    let catalog = Arc::new(MemoryCatalogStore::seeded());
    let requests = Arc::new(MemoryRequestStore::seeded());
    let locations = Arc::new(MemoryMapLocationStore::seeded());
    let trust = Arc::new(TrustScoreProvider::seeded());

    let failure_policy = Arc::new(RandomFailurePolicy::new(config.failure_rate));

    let catalog_service = Arc::new(CatalogService::new(catalog.clone(), failure_policy.clone()));
    let borrow_service = Arc::new(BorrowService::new(catalog.clone(), failure_policy));

    let items_api = ItemsApi::new(catalog_service, borrow_service, config.current_user.clone());
    let requests_api = RequestsApi::new(requests);
    let map_api = MapItemsApi::new(locations, catalog);
    let trust_api = TrustScoreApi::new(trust);

    // Create OpenAPI service with API implementations
    let api_service = OpenApiService::new(
        (HealthApi, items_api, requests_api, map_api, trust_api),
        "NeighborShare API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://{}/api", config.bind_addr));

    // Generate Swagger UI from OpenAPI service
    let ui = api_service.swagger_ui();

    // Compose routes: nest API service under /api and Swagger UI under /swagger
    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    tracing::info!(bind_addr = %config.bind_addr, "starting server");
    tracing::info!("Swagger UI available under /swagger");

    Server::new(TcpListener::bind(&config.bind_addr))
        .run(app)
        .await
}
