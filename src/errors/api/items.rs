use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::errors::internal::{BorrowError, ValidationError};
use crate::types::dto::common::{ErrorBody, FailureBody};

/// Error responses for the item endpoints
#[derive(ApiResponse, Debug)]
pub enum ItemError {
    /// No item exists with the requested id
    #[oai(status = 404)]
    NotFound(Json<ErrorBody>),

    /// The item is already lent out
    #[oai(status = 400)]
    NotAvailable(Json<ErrorBody>),

    /// A required field is missing from the item draft
    #[oai(status = 400)]
    MissingField(Json<ErrorBody>),

    /// Artificial random failure; the caller may retry unchanged
    #[oai(status = 400)]
    SimulatedFailure(Json<FailureBody>),
}

impl ItemError {
    /// Create a NotFound error
    pub fn not_found() -> Self {
        ItemError::NotFound(Json(ErrorBody {
            error: "Item not found".to_string(),
        }))
    }

    /// Create a NotAvailable error
    pub fn not_available() -> Self {
        ItemError::NotAvailable(Json(ErrorBody {
            error: "Item is not available for borrowing".to_string(),
        }))
    }

    /// Create a MissingField error naming the offending field
    pub fn missing_field(field: &str) -> Self {
        ItemError::MissingField(Json(ErrorBody {
            error: format!("{} is required", field),
        }))
    }

    /// Simulated failure of item creation
    pub fn create_failed() -> Self {
        ItemError::SimulatedFailure(Json(FailureBody {
            success: false,
            error: "Failed to add item. Please try again.".to_string(),
        }))
    }

    /// Simulated failure of a borrow request
    pub fn borrow_failed() -> Self {
        ItemError::SimulatedFailure(Json(FailureBody {
            success: false,
            error: "Failed to submit request. Please try again.".to_string(),
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ItemError::NotFound(json) => json.0.error.clone(),
            ItemError::NotAvailable(json) => json.0.error.clone(),
            ItemError::MissingField(json) => json.0.error.clone(),
            ItemError::SimulatedFailure(json) => json.0.error.clone(),
        }
    }
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<ValidationError> for ItemError {
    fn from(err: ValidationError) -> Self {
        ItemError::missing_field(err.field())
    }
}

impl From<BorrowError> for ItemError {
    fn from(err: BorrowError) -> Self {
        match err {
            BorrowError::ItemNotFound(_) => ItemError::not_found(),
            BorrowError::NotAvailable(_) => ItemError::not_available(),
        }
    }
}
