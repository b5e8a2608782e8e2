// file: src/loader/source.rs
// description: dataset source abstraction and location-based source selection
// reference: trait seam injected into the search controller

use crate::error::LoadError;
use crate::loader::{FileSource, HttpSource};
use crate::models::Dataset;
use crate::utils::Validator;
use std::future::Future;

/// Anything that can produce a fresh copy of the dataset.
///
/// Sources never cache: every call performs a full fetch and parse.
pub trait DatasetSource {
    fn fetch(&self) -> impl Future<Output = Result<Dataset, LoadError>> + Send;

    /// Human readable origin, used in log lines.
    fn describe(&self) -> String;
}

#[derive(Debug, Clone)]
pub enum SourceKind {
    Http(HttpSource),
    File(FileSource),
}

impl SourceKind {
    /// `http://` and `https://` locations are fetched over the network,
    /// everything else is read from disk.
    pub fn from_location(location: &str) -> Self {
        let location = location.trim();
        if Validator::is_http_url(location) {
            SourceKind::Http(HttpSource::new(location))
        } else {
            SourceKind::File(FileSource::new(location))
        }
    }
}

impl DatasetSource for SourceKind {
    async fn fetch(&self) -> Result<Dataset, LoadError> {
        match self {
            SourceKind::Http(source) => source.fetch().await,
            SourceKind::File(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            SourceKind::Http(source) => source.describe(),
            SourceKind::File(source) => source.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_locations_select_http_source() {
        assert!(matches!(
            SourceKind::from_location("https://example.com/data.json"),
            SourceKind::Http(_)
        ));
        assert!(matches!(
            SourceKind::from_location(" http://localhost:8080/data.json "),
            SourceKind::Http(_)
        ));
    }

    #[test]
    fn test_other_locations_select_file_source() {
        let source = SourceKind::from_location("./travel_recommendation_api.json");
        assert!(matches!(source, SourceKind::File(_)));
        assert_eq!(source.describe(), "./travel_recommendation_api.json");
    }
}
