//! Error types for the heatmap crates.

use thiserror::Error;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Primary error type for loading, scaling and rendering.
#[derive(Debug, Error)]
pub enum HeatmapError {
    // === Loader Errors ===
    #[error("Failed to fetch dataset from {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Dataset request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid dataset payload: {0}")]
    Parse(String),

    // === Scale Errors ===
    #[error("Dataset contains no monthly variance records")]
    EmptyDataset,

    // === Configuration Errors ===
    #[error("Invalid chart configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl HeatmapError {
    /// Whether the error came from the network or payload rather than local state.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            HeatmapError::Fetch { .. } | HeatmapError::HttpStatus { .. } | HeatmapError::Parse(_)
        )
    }
}

impl From<std::io::Error> for HeatmapError {
    fn from(err: std::io::Error) -> Self {
        HeatmapError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HeatmapError {
    fn from(err: serde_json::Error) -> Self {
        HeatmapError::Parse(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for HeatmapError {
    fn from(err: serde_yaml::Error) -> Self {
        HeatmapError::InvalidConfig(format!("YAML error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_classification() {
        assert!(HeatmapError::Parse("bad".into()).is_load_error());
        assert!(HeatmapError::HttpStatus {
            url: "http://x".into(),
            status: 404
        }
        .is_load_error());
        assert!(!HeatmapError::EmptyDataset.is_load_error());
        assert!(!HeatmapError::Render("oops".into()).is_load_error());
    }

    #[test]
    fn test_json_error_converts_to_parse() {
        let err: HeatmapError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, HeatmapError::Parse(_)));
    }
}
