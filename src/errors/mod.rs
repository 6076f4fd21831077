// Errors layer - Error type definitions
//
// Internal enums (thiserror) stay inside the service/store layers;
// endpoints convert them into the ApiResponse enums under `api`.

pub mod api;
pub mod internal;

// Re-exports for convenience
pub use api::{ItemError, TrustError};
pub use internal::{BorrowError, ValidationError};
