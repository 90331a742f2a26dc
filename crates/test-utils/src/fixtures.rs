//! Fixed datasets mirroring the published global temperature payload.

use heatmap_common::{TemperatureDataset, VarianceRecord};

/// Base temperature of the published dataset in degrees Celsius.
pub const BASE_TEMPERATURE: f64 = 8.66;

/// A small payload in the exact shape served by the data source.
///
/// Covers 1753 (January to March), 1754 (January) and 1755 (December).
/// The coldest record is 1753 January at 6.24C, the warmest 1755 December at 10.26C.
pub const SAMPLE_DATASET_JSON: &str = r#"{
  "baseTemperature": 8.66,
  "monthlyVariance": [
    { "year": 1753, "month": 1, "variance": -2.42 },
    { "year": 1753, "month": 2, "variance": -1.366 },
    { "year": 1753, "month": 3, "variance": 0.05 },
    { "year": 1754, "month": 1, "variance": 0.8 },
    { "year": 1755, "month": 12, "variance": 1.6 }
  ]
}"#;

/// The sample payload as a parsed dataset.
pub fn sample_dataset() -> TemperatureDataset {
    TemperatureDataset::new(
        BASE_TEMPERATURE,
        vec![
            VarianceRecord::new(1753, 1, -2.42),
            VarianceRecord::new(1753, 2, -1.366),
            VarianceRecord::new(1753, 3, 0.05),
            VarianceRecord::new(1754, 1, 0.8),
            VarianceRecord::new(1755, 12, 1.6),
        ],
    )
}

/// Payloads that must be rejected by the loader.
pub mod invalid {
    /// Not JSON at all
    pub const NOT_JSON: &str = "<html>rate limited</html>";

    /// Valid JSON, missing `monthlyVariance`
    pub const MISSING_VARIANCE: &str = r#"{ "baseTemperature": 8.66 }"#;

    /// Record with a string where a number belongs
    pub const WRONG_TYPE: &str =
        r#"{ "baseTemperature": 8.66, "monthlyVariance": [{ "year": "1753", "month": 1, "variance": 0.1 }] }"#;
}

/// Chart config overrides used across tests.
pub mod configs {
    /// A narrower chart without `data-temp` attributes.
    pub const COMPACT_YAML: &str = r#"
plot_width: 600
plot_height: 240
padding_x: 120
padding_y: 170
cells:
  emit_data_temp: false
"#;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_json_matches_parsed_fixture() {
        let parsed = TemperatureDataset::from_json(SAMPLE_DATASET_JSON).unwrap();
        assert_eq!(parsed, sample_dataset());
    }

    #[test]
    fn test_invalid_payloads_are_rejected() {
        for payload in [invalid::NOT_JSON, invalid::MISSING_VARIANCE, invalid::WRONG_TYPE] {
            assert!(TemperatureDataset::from_json(payload).is_err());
        }
    }
}
