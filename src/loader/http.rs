// file: src/loader/http.rs
// description: dataset source fetching the JSON document over HTTP
// reference: https://docs.rs/reqwest

use crate::error::LoadError;
use crate::loader::DatasetSource;
use crate::models::Dataset;
use reqwest::Client;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    fn request_error(&self, err: reqwest::Error) -> LoadError {
        LoadError::Request {
            url: self.url.clone(),
            message: err.to_string(),
        }
    }
}

impl DatasetSource for HttpSource {
    async fn fetch(&self) -> Result<Dataset, LoadError> {
        debug!("Fetching dataset from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| self.request_error(e))?;
        let dataset = Dataset::from_json(&body)?;

        debug!("Fetched {} places ({} bytes)", dataset.place_count(), body.len());
        Ok(dataset)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
