// file: src/loader/file.rs
// description: dataset source reading the JSON document from the local filesystem

use crate::error::LoadError;
use crate::loader::DatasetSource;
use crate::models::Dataset;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileSource {
    async fn fetch(&self) -> Result<Dataset, LoadError> {
        debug!("Reading dataset from {}", self.path.display());

        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;

        let dataset = Dataset::from_json(&raw)?;
        debug!("Parsed {} places", dataset.place_count());
        Ok(dataset)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
