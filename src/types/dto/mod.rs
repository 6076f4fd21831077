// DTO layer - models exposed through the API

pub mod common;
pub mod items;
pub mod map;
pub mod requests;
pub mod trust;
