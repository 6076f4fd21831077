use std::sync::Arc;

use crate::errors::internal::BorrowError;
use crate::providers::FailurePolicy;
use crate::stores::CatalogStore;
use crate::types::dto::items::Item;

/// Outcome of a borrow request that passed the existence and
/// availability checks
#[derive(Debug, Clone, PartialEq)]
pub enum BorrowOutcome {
    /// The item is now marked borrowed by the caller
    Approved(Item),
    /// Retryable failure; no state was touched
    SimulatedFailure,
}

/// The Available -> Borrowed transition of a single item
///
/// No reverse transition exists: returns are not modeled in this version.
pub struct BorrowService {
    store: Arc<dyn CatalogStore>,
    failure_policy: Arc<dyn FailurePolicy>,
}

impl BorrowService {
    pub fn new(store: Arc<dyn CatalogStore>, failure_policy: Arc<dyn FailurePolicy>) -> Self {
        Self {
            store,
            failure_policy,
        }
    }

    /// Request to borrow an item on behalf of the named borrower
    ///
    /// Checks run in a fixed order: unknown id, then availability, then the
    /// failure draw. The draw is only reached for a borrowable item, and a
    /// failed draw leaves the catalog untouched.
    pub async fn request_borrow(
        &self,
        item_id: &str,
        borrower: &str,
    ) -> Result<BorrowOutcome, BorrowError> {
        let item = self
            .store
            .get(item_id)
            .await
            .ok_or_else(|| BorrowError::ItemNotFound(item_id.to_string()))?;

        if !item.available {
            return Err(BorrowError::NotAvailable(item_id.to_string()));
        }

        if self.failure_policy.should_fail() {
            tracing::warn!(item_id, "simulated failure for borrow request");
            return Ok(BorrowOutcome::SimulatedFailure);
        }

        let borrowed = self.store.mark_borrowed(item_id, borrower).await?;
        tracing::info!(item_id, borrower, "borrow request approved");
        Ok(BorrowOutcome::Approved(borrowed))
    }
}
