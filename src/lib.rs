// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod controller;
pub mod error;
pub mod loader;
pub mod models;
pub mod render;
pub mod search;
pub mod utils;

pub use config::{Config, DisplayConfig, SourceConfig};
pub use controller::{
    Action, Bindings, Button, Controller, Event, Handled, OutputRegion, Page, SearchInput,
    SearchOutcome, Trigger, event_for_line,
};
pub use error::{LoadError, RecommendationError, Result};
pub use loader::{DatasetSource, FileSource, HttpSource, SourceKind};
pub use models::{Country, Dataset, Place, ResultItem};
pub use render::{Card, CardImage, Renderer, View};
pub use search::{QueryIntent, SearchQuery, dedup_results, match_items};
pub use utils::Validator;
