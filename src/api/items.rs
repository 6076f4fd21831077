use std::sync::Arc;

use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi, Tags,
};

use crate::errors::api::ItemError;
use crate::services::filter::{filter_catalog, AvailabilityFilter, ALL_CATEGORIES};
use crate::services::{BorrowOutcome, BorrowService, CatalogService, CreateOutcome};
use crate::types::dto::items::{BorrowResponse, CreateItemRequest, CreateItemResponse, Item};

/// Item catalog API endpoints
pub struct ItemsApi {
    catalog: Arc<CatalogService>,
    borrow: Arc<BorrowService>,
    /// Identity credited as borrower on approved requests; a stand-in for
    /// real session-derived identity
    current_user: String,
}

impl ItemsApi {
    pub fn new(catalog: Arc<CatalogService>, borrow: Arc<BorrowService>, current_user: String) -> Self {
        Self {
            catalog,
            borrow,
            current_user,
        }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Catalog browsing and item lifecycle endpoints
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// List catalog items
    ///
    /// Returns the full catalog in insertion order. The optional `search`,
    /// `category` and `availability` parameters apply the filter engine
    /// server-side; omitting all of them is the identity filter.
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(
        &self,
        search: Query<Option<String>>,
        category: Query<Option<String>>,
        availability: Query<Option<String>>,
    ) -> Json<Vec<Item>> {
        let items = self.catalog.list_items().await;
        let filtered = filter_catalog(
            &items,
            search.0.as_deref().unwrap_or(""),
            category.0.as_deref().unwrap_or(ALL_CATEGORIES),
            AvailabilityFilter::parse(availability.0.as_deref().unwrap_or("All")),
        );
        Json(filtered)
    }

    /// Get a single item by id
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, id: Path<String>) -> Result<Json<Item>, ItemError> {
        match self.catalog.get_item(&id.0).await {
            Some(item) => Ok(Json(item)),
            None => Err(ItemError::not_found()),
        }
    }

    /// Add a new item to the catalog
    ///
    /// All six draft fields are required; the first missing one is named in
    /// the error. A valid draft is always appended, even when the simulated
    /// failure draw reports an error to the caller.
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(
        &self,
        body: Json<CreateItemRequest>,
    ) -> Result<Json<CreateItemResponse>, ItemError> {
        match self.catalog.create_item(body.0).await? {
            CreateOutcome::Created(item) => Ok(Json(CreateItemResponse {
                success: true,
                item,
                message: "Item added successfully".to_string(),
            })),
            CreateOutcome::FailureReported(_) => Err(ItemError::create_failed()),
        }
    }

    /// Request to borrow an item
    ///
    /// Approval marks the item borrowed by the configured current user.
    /// A simulated failure is retryable and leaves the item untouched.
    #[oai(path = "/items/:id", method = "post", tag = "ApiTags::Items")]
    async fn request_borrow(&self, id: Path<String>) -> Result<Json<BorrowResponse>, ItemError> {
        match self.borrow.request_borrow(&id.0, &self.current_user).await? {
            BorrowOutcome::Approved(_) => Ok(Json(BorrowResponse {
                success: true,
                status: "requested".to_string(),
                message: "Borrow request submitted successfully".to_string(),
            })),
            BorrowOutcome::SimulatedFailure => Err(ItemError::borrow_failed()),
        }
    }
}
