// file: src/search/mod.rs
// description: keyword matching and result de-duplication exports
// reference: internal module structure

pub mod dedup;
pub mod matcher;

pub use dedup::dedup_results;
pub use matcher::{BEACH_CATEGORY, QueryIntent, SearchQuery, TEMPLE_CATEGORY, match_items};
