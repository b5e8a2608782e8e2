// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod dataset;
pub mod result_item;

pub use dataset::{Country, Dataset, Place};
pub use result_item::ResultItem;
