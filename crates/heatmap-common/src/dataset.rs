//! Monthly temperature variance dataset.
//!
//! The JSON payload looks like:
//!
//! ```json
//! {
//!   "baseTemperature": 8.66,
//!   "monthlyVariance": [{ "year": 1753, "month": 1, "variance": -1.366 }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{HeatmapError, HeatmapResult};

/// Temperature deviation from the base temperature for one year/month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarianceRecord {
    pub year: i32,
    /// Calendar month, 1 = January.
    pub month: u32,
    /// Signed delta from the dataset base temperature.
    pub variance: f64,
}

impl VarianceRecord {
    pub fn new(year: i32, month: u32, variance: f64) -> Self {
        Self { year, month, variance }
    }

    /// Zero-based month index, `None` when the month is 0.
    pub fn month_index(&self) -> Option<u32> {
        self.month.checked_sub(1)
    }
}

/// The full dataset: a base temperature plus ordered monthly variances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureDataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<VarianceRecord>,
}

impl TemperatureDataset {
    pub fn new(base_temperature: f64, monthly_variance: Vec<VarianceRecord>) -> Self {
        Self {
            base_temperature,
            monthly_variance,
        }
    }

    /// Parse a dataset from a JSON string.
    pub fn from_json(json: &str) -> HeatmapResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a dataset from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> HeatmapResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Load a dataset from a JSON file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> HeatmapResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path)
            .map_err(|e| HeatmapError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_slice(&content)
    }

    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// Absolute temperature for a record.
    pub fn temperature(&self, record: &VarianceRecord) -> f64 {
        self.base_temperature + record.variance
    }

    /// Minimum and maximum absolute temperature, `None` when empty.
    pub fn temperature_extent(&self) -> Option<(f64, f64)> {
        extent(self.monthly_variance.iter().map(|r| self.temperature(r)))
    }

    /// First and last year covered, `None` when empty.
    pub fn year_extent(&self) -> Option<(i32, i32)> {
        let mut years = self.monthly_variance.iter().map(|r| r.year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// Distinct years in first-encounter order.
    pub fn distinct_years(&self) -> Vec<i32> {
        let mut seen = HashSet::new();
        self.monthly_variance
            .iter()
            .map(|r| r.year)
            .filter(|year| seen.insert(*year))
            .collect()
    }
}

/// Minimum and maximum of a sequence, ignoring NaN.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TemperatureDataset {
        TemperatureDataset::new(
            8.66,
            vec![
                VarianceRecord::new(1753, 1, -1.366),
                VarianceRecord::new(1753, 2, -2.223),
                VarianceRecord::new(1754, 1, 0.5),
                VarianceRecord::new(1756, 12, 1.2),
            ],
        )
    }

    #[test]
    fn test_parse_camel_case_payload() {
        let json = r#"{
            "baseTemperature": 8.66,
            "monthlyVariance": [
                {"year": 1753, "month": 1, "variance": -1.366},
                {"year": 1753, "month": 2, "variance": -2.223}
            ]
        }"#;
        let dataset = TemperatureDataset::from_json(json).unwrap();
        assert_eq!(dataset.base_temperature, 8.66);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.monthly_variance[1].month, 2);
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let err = TemperatureDataset::from_json(r#"{"baseTemperature": 8.66}"#).unwrap_err();
        assert!(matches!(err, HeatmapError::Parse(_)));
    }

    #[test]
    fn test_temperature_extent() {
        let (min, max) = sample().temperature_extent().unwrap();
        assert!((min - (8.66 - 2.223)).abs() < 1e-9);
        assert!((max - (8.66 + 1.2)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_dataset_has_no_extent() {
        let empty = TemperatureDataset::new(8.66, vec![]);
        assert!(empty.is_empty());
        assert_eq!(empty.temperature_extent(), None);
        assert_eq!(empty.year_extent(), None);
    }

    #[test]
    fn test_distinct_years_first_encounter_order() {
        assert_eq!(sample().distinct_years(), vec![1753, 1754, 1756]);
        assert_eq!(sample().year_extent(), Some((1753, 1756)));
    }

    #[test]
    fn test_month_index() {
        assert_eq!(VarianceRecord::new(2000, 1, 0.0).month_index(), Some(0));
        assert_eq!(VarianceRecord::new(2000, 0, 0.0).month_index(), None);
    }
}
