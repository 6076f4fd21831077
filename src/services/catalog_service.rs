use std::sync::Arc;

use crate::errors::internal::ValidationError;
use crate::providers::FailurePolicy;
use crate::stores::CatalogStore;
use crate::types::dto::items::{CreateItemRequest, Item};

/// Outcome of a valid `create_item` call
///
/// Both variants carry the stored item: the append happens *before* the
/// failure draw, so a reported failure still grows the catalog (see
/// DESIGN.md).
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    Created(Item),
    /// The item was appended but the call reports a retryable failure
    FailureReported(Item),
}

/// Creation and listing of catalog items
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
    failure_policy: Arc<dyn FailurePolicy>,
}

/// Required draft fields, in the order validation reports them
const REQUIRED_FIELDS: [&str; 6] = [
    "name",
    "description",
    "category",
    "owner",
    "condition",
    "image",
];

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>, failure_policy: Arc<dyn FailurePolicy>) -> Self {
        Self {
            store,
            failure_policy,
        }
    }

    /// Full catalog snapshot, insertion order preserved
    pub async fn list_items(&self) -> Vec<Item> {
        self.store.list().await
    }

    /// Single item by id
    pub async fn get_item(&self, id: &str) -> Option<Item> {
        self.store.get(id).await
    }

    /// Validate a draft and append it to the catalog
    ///
    /// Validation checks field presence only: a missing or empty field fails
    /// with the first offender named, while whitespace-only values pass.
    /// The id is derived from the current catalog length, so it is not
    /// collision-safe under concurrent creates.
    pub async fn create_item(
        &self,
        draft: CreateItemRequest,
    ) -> Result<CreateOutcome, ValidationError> {
        let fields = [
            &draft.name,
            &draft.description,
            &draft.category,
            &draft.owner,
            &draft.condition,
            &draft.image,
        ];
        for (name, value) in REQUIRED_FIELDS.into_iter().zip(fields) {
            if value.as_deref().unwrap_or("").is_empty() {
                return Err(ValidationError::MissingField(name));
            }
        }

        let count = self.store.count().await;
        let item = Item {
            id: format!("itm{:03}", count + 1),
            name: draft.name.unwrap_or_default(),
            description: draft.description.unwrap_or_default(),
            category: draft.category.unwrap_or_default(),
            owner: draft.owner.unwrap_or_default(),
            condition: draft.condition.unwrap_or_default(),
            available: true,
            image: draft.image.unwrap_or_default(),
            borrowed_by: None,
        };

        // The append happens before the failure draw, and is kept even when
        // the draw reports a failure.
        self.store.append(item.clone()).await;

        if self.failure_policy.should_fail() {
            tracing::warn!(item_id = %item.id, "simulated failure reported for created item");
            Ok(CreateOutcome::FailureReported(item))
        } else {
            tracing::info!(item_id = %item.id, "item added to catalog");
            Ok(CreateOutcome::Created(item))
        }
    }
}
