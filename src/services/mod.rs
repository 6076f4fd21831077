// Services layer - Business logic and orchestration

pub mod borrow_service;
pub mod catalog_service;
pub mod filter;

pub use borrow_service::{BorrowOutcome, BorrowService};
pub use catalog_service::{CatalogService, CreateOutcome};



#[cfg(test)]
mod filter_test;
