//! Synthetic temperature datasets with predictable contents.

use heatmap_common::{TemperatureDataset, VarianceRecord};

/// Creates a dataset covering `years` consecutive years, all 12 months each.
///
/// Variance follows a deterministic pattern so tests can predict values:
/// a seasonal swing of +/-2 degrees plus a slow warming trend of 0.01 per year.
///
/// # Example
///
/// ```
/// use test_utils::create_dataset;
///
/// let dataset = create_dataset(1800, 10, 8.66);
/// assert_eq!(dataset.len(), 120);
/// assert_eq!(dataset.monthly_variance[0].year, 1800);
/// assert_eq!(dataset.monthly_variance[0].month, 1);
/// ```
pub fn create_dataset(first_year: i32, years: usize, base_temperature: f64) -> TemperatureDataset {
    let year_list: Vec<i32> = (0..years).map(|i| first_year + i as i32).collect();
    create_dataset_for_years(&year_list, base_temperature)
}

/// Creates a full-year dataset for an explicit (possibly gapped) list of years.
pub fn create_dataset_for_years(years: &[i32], base_temperature: f64) -> TemperatureDataset {
    let mut records = Vec::with_capacity(years.len() * 12);
    for (i, &year) in years.iter().enumerate() {
        for month in 1..=12u32 {
            records.push(VarianceRecord::new(year, month, seasonal_variance(i, month)));
        }
    }
    TemperatureDataset::new(base_temperature, records)
}

/// Variance used by the generators for the `year_offset`-th year and 1-based month.
pub fn seasonal_variance(year_offset: usize, month: u32) -> f64 {
    let phase = (month as f64 - 1.0) / 12.0 * std::f64::consts::TAU;
    let value = 2.0 * phase.sin() + 0.01 * year_offset as f64;
    // Keep three decimals like the published dataset.
    (value * 1000.0).round() / 1000.0
}

/// Creates a dataset where every record has the same variance.
///
/// Useful for the degenerate case where min and max temperature coincide.
pub fn create_constant_dataset(first_year: i32, years: usize, variance: f64) -> TemperatureDataset {
    let mut records = Vec::with_capacity(years * 12);
    for i in 0..years {
        for month in 1..=12u32 {
            records.push(VarianceRecord::new(first_year + i as i32, month, variance));
        }
    }
    TemperatureDataset::new(8.66, records)
}

/// Serialize a dataset into the camelCase JSON payload served by the data source.
pub fn dataset_json(dataset: &TemperatureDataset) -> String {
    serde_json::to_string(dataset).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dataset_shape() {
        let dataset = create_dataset(1753, 3, 8.66);
        assert_eq!(dataset.len(), 36);
        assert_eq!(dataset.distinct_years(), vec![1753, 1754, 1755]);
        assert!(dataset.monthly_variance.iter().all(|r| (1..=12).contains(&r.month)));
    }

    #[test]
    fn test_seasonal_variance_pattern() {
        assert_eq!(seasonal_variance(0, 1), 0.0);
        assert_eq!(seasonal_variance(0, 4), 2.0);
        assert_eq!(seasonal_variance(100, 1), 1.0);
    }

    #[test]
    fn test_dataset_json_round_trips_field_names() {
        let json = dataset_json(&create_dataset(2000, 1, 9.0));
        assert!(json.contains("\"baseTemperature\":9.0"));
        assert!(json.contains("\"monthlyVariance\""));
    }

    #[test]
    fn test_gapped_years() {
        let dataset = create_dataset_for_years(&[1900, 1950], 8.0);
        assert_eq!(dataset.distinct_years(), vec![1900, 1950]);
    }
}
