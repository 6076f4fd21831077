use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::internal::BorrowError;
use crate::stores::seed;
use crate::types::dto::items::Item;

/// Data access contract for the item catalog
///
/// The catalog is append-only: items are never removed or reordered, and
/// the only in-place mutation is the availability flip performed by a
/// successful borrow.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Snapshot of the full catalog, insertion order preserved
    async fn list(&self) -> Vec<Item>;

    /// Look up a single item by id
    async fn get(&self, id: &str) -> Option<Item>;

    /// Append a new item to the catalog
    async fn append(&self, item: Item);

    /// Mark an item as borrowed, recording the borrower's name
    ///
    /// Re-validates existence and availability under the write lock so a
    /// concurrent borrow cannot double-lend the same item.
    async fn mark_borrowed(&self, id: &str, borrower: &str) -> Result<Item, BorrowError>;

    /// Current number of items in the catalog
    async fn count(&self) -> usize;
}

/// In-memory catalog; all mutations serialize behind a single write lock
pub struct MemoryCatalogStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryCatalogStore {
    /// Create a catalog store holding the given items
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Create a catalog store pre-loaded with the seed catalog
    pub fn seeded() -> Self {
        Self::new(seed::items())
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn list(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    async fn get(&self, id: &str) -> Option<Item> {
        self.items.read().await.iter().find(|item| item.id == id).cloned()
    }

    async fn append(&self, item: Item) {
        self.items.write().await.push(item);
    }

    async fn mark_borrowed(&self, id: &str, borrower: &str) -> Result<Item, BorrowError> {
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| BorrowError::ItemNotFound(id.to_string()))?;

        if !item.available {
            return Err(BorrowError::NotAvailable(id.to_string()));
        }

        item.available = false;
        item.borrowed_by = Some(borrower.to_string());
        Ok(item.clone())
    }

    async fn count(&self) -> usize {
        self.items.read().await.len()
    }
}
