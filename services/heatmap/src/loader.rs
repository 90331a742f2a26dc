//! Dataset loading over HTTP or from a local file.
//!
//! A single best-effort request: no retry, no timeout, no caching.

use std::fmt;
use std::path::PathBuf;

use heatmap_common::{HeatmapError, HeatmapResult, TemperatureDataset};
use reqwest::Client;
use tracing::{debug, info, instrument};

/// Published monthly global land-surface temperature dataset.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{}", url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches and parses temperature datasets.
pub struct DatasetLoader {
    client: Client,
}

impl DatasetLoader {
    pub fn new() -> HeatmapResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("heatmap/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HeatmapError::Fetch {
                url: String::new(),
                message: format!("failed to create HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }

    /// Load from whichever source was configured.
    pub async fn load(&self, source: &DataSource) -> HeatmapResult<TemperatureDataset> {
        match source {
            DataSource::Url(url) => self.fetch(url).await,
            DataSource::File(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|e| HeatmapError::Io(format!("{}: {}", path.display(), e)))?;
                let dataset = TemperatureDataset::from_slice(&bytes)?;
                info!(path = %path.display(), records = dataset.len(), "Loaded dataset from file");
                Ok(dataset)
            }
        }
    }

    /// GET `url` and parse the body as a dataset.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> HeatmapResult<TemperatureDataset> {
        let fetch_error = |e: reqwest::Error| HeatmapError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(HeatmapError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(fetch_error)?;
        debug!(bytes = body.len(), "Received dataset payload");

        let dataset = TemperatureDataset::from_slice(&body)?;
        info!(
            records = dataset.len(),
            base_temperature = dataset.base_temperature,
            "Fetched dataset"
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_display() {
        assert_eq!(
            DataSource::Url("http://example.com/data.json".into()).to_string(),
            "http://example.com/data.json"
        );
        assert_eq!(
            DataSource::File(PathBuf::from("data/global.json")).to_string(),
            "data/global.json"
        );
    }
}
