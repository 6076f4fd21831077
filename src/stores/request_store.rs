use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::stores::seed;
use crate::types::dto::requests::BorrowRequest;

/// Data access contract for borrow requests
///
/// Read-only in this version: the borrow flow flips item availability
/// directly and never files a request record.
#[async_trait]
pub trait RequestStore: Send + Sync {
    /// Snapshot of all borrow requests
    async fn list(&self) -> Vec<BorrowRequest>;
}

/// In-memory request store holding the static sample requests
pub struct MemoryRequestStore {
    requests: RwLock<Vec<BorrowRequest>>,
}

impl MemoryRequestStore {
    pub fn new(requests: Vec<BorrowRequest>) -> Self {
        Self {
            requests: RwLock::new(requests),
        }
    }

    /// Create a request store pre-loaded with the sample requests
    pub fn seeded() -> Self {
        Self::new(seed::requests())
    }
}

#[async_trait]
impl RequestStore for MemoryRequestStore {
    async fn list(&self) -> Vec<BorrowRequest> {
        self.requests.read().await.clone()
    }
}
