use thiserror::Error;

/// Validation failure for an item draft
///
/// Fields are checked in a fixed order (name, description, category, owner,
/// condition, image) and the first absent one is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

impl ValidationError {
    /// The name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field) => field,
        }
    }
}

/// Failures of the borrow flow, before any state is touched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BorrowError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Item is not available for borrowing: {0}")]
    NotAvailable(String),
}
