// file: src/loader/mod.rs
// description: dataset loader module exports
// reference: internal module structure

pub mod file;
pub mod http;
pub mod source;

pub use file::FileSource;
pub use http::HttpSource;
pub use source::{DatasetSource, SourceKind};
