//! Band, linear and threshold scales.
//!
//! These map data values onto pixel positions or discrete outputs. Band
//! scales place ordered categories into equal-width intervals, linear scales
//! interpolate continuously, threshold scales classify a continuous value by
//! comparing it against sorted boundaries.

use std::collections::HashMap;
use std::hash::Hash;

use heatmap_common::{HeatmapError, HeatmapResult};

/// Ordered categories mapped to contiguous equal-width intervals.
///
/// No inner or outer padding: `bandwidth() == step()`.
#[derive(Debug, Clone)]
pub struct BandScale<T> {
    domain: Vec<T>,
    index: HashMap<T, usize>,
    range: (f64, f64),
    step: f64,
}

impl<T: Clone + Eq + Hash> BandScale<T> {
    /// Build a band scale; duplicate categories keep their first position.
    pub fn new(domain: impl IntoIterator<Item = T>, range: (f64, f64)) -> Self {
        let mut values = Vec::new();
        let mut index = HashMap::new();
        for value in domain {
            if !index.contains_key(&value) {
                index.insert(value.clone(), values.len());
                values.push(value);
            }
        }

        let (r0, r1) = range;
        let step = (r1 - r0).abs() / values.len().max(1) as f64;

        Self {
            domain: values,
            index,
            range,
            step,
        }
    }

    /// Start offset of the band for `value`, `None` if not in the domain.
    pub fn scale(&self, value: &T) -> Option<f64> {
        let i = *self.index.get(value)?;
        let (r0, r1) = self.range;
        if r1 < r0 {
            // Reversed range: first category sits at the high end.
            let n = self.domain.len();
            Some(r1 + (n - 1 - i) as f64 * self.step)
        } else {
            Some(r0 + i as f64 * self.step)
        }
    }

    pub fn bandwidth(&self) -> f64 {
        self.step
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn len(&self) -> usize {
        self.domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }
}

/// Continuous linear map from a numeric domain to a numeric range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to the range. A zero-width domain maps everything
    /// to the middle of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    /// Map a range value back into the domain.
    pub fn invert(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        let t = if span == 0.0 { 0.5 } else { (value - r0) / span };
        d0 + t * (d1 - d0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Classifies a continuous value into one of `n + 1` outputs using `n`
/// sorted boundaries. A value equal to a boundary belongs to the bucket above.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale<R> {
    domain: Vec<f64>,
    range: Vec<R>,
}

impl<R: PartialEq> ThresholdScale<R> {
    /// Build from explicit boundaries; `range` must hold one more entry than `domain`.
    pub fn new(domain: Vec<f64>, range: Vec<R>) -> HeatmapResult<Self> {
        if range.len() != domain.len() + 1 {
            return Err(HeatmapError::InvalidConfig(format!(
                "threshold scale needs {} outputs for {} boundaries, got {}",
                domain.len() + 1,
                domain.len(),
                range.len()
            )));
        }
        if domain.windows(2).any(|w| w[1] < w[0]) {
            return Err(HeatmapError::InvalidConfig(
                "threshold boundaries must be sorted".to_string(),
            ));
        }
        Ok(Self { domain, range })
    }

    /// Split `[min, max]` into `range.len()` equal buckets.
    ///
    /// Boundaries are `min + i * (max - min) / n` for `i` in `1..n`.
    pub fn uniform(min: f64, max: f64, range: Vec<R>) -> HeatmapResult<Self> {
        if range.is_empty() {
            return Err(HeatmapError::InvalidConfig(
                "threshold scale needs at least one output".to_string(),
            ));
        }
        let n = range.len();
        let step = (max - min) / n as f64;
        let domain = (1..n).map(|i| min + i as f64 * step).collect();
        Self::new(domain, range)
    }

    /// Index of the bucket holding `value`, `None` for NaN.
    pub fn bucket(&self, value: f64) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        Some(self.domain.partition_point(|&b| b <= value))
    }

    pub fn scale(&self, value: f64) -> Option<&R> {
        self.bucket(value).map(|i| &self.range[i])
    }

    /// Boundaries enclosing the bucket that maps to `output`.
    ///
    /// The first bucket has no lower boundary and the last has no upper one.
    pub fn invert_extent(&self, output: &R) -> Option<(Option<f64>, Option<f64>)> {
        let i = self.range.iter().position(|r| r == output)?;
        let lower = i.checked_sub(1).map(|j| self.domain[j]);
        let upper = self.domain.get(i).copied();
        Some((lower, upper))
    }

    pub fn domain(&self) -> &[f64] {
        &self.domain
    }

    pub fn range(&self) -> &[R] {
        &self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_scale_even_split() {
        let scale = BandScale::new(0u32..12, (0.0, 300.0));
        assert_eq!(scale.len(), 12);
        assert_eq!(scale.bandwidth(), 25.0);
        assert_eq!(scale.scale(&0), Some(0.0));
        assert_eq!(scale.scale(&11), Some(275.0));
        assert_eq!(scale.scale(&12), None);
    }

    #[test]
    fn test_band_scale_deduplicates() {
        let scale = BandScale::new(vec![2000, 2000, 2001, 2000], (0.0, 100.0));
        assert_eq!(scale.domain(), &[2000, 2001]);
        assert_eq!(scale.bandwidth(), 50.0);
    }

    #[test]
    fn test_band_scale_reversed_range() {
        let scale = BandScale::new(vec!['a', 'b'], (100.0, 0.0));
        assert_eq!(scale.scale(&'a'), Some(50.0));
        assert_eq!(scale.scale(&'b'), Some(0.0));
    }

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((2.0, 12.0), (0.0, 400.0));
        assert_eq!(scale.scale(2.0), 0.0);
        assert_eq!(scale.scale(7.0), 200.0);
        assert_eq!(scale.scale(12.0), 400.0);
        assert_eq!(scale.invert(100.0), 4.5);
    }

    #[test]
    fn test_linear_scale_degenerate_domain() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 400.0));
        assert_eq!(scale.scale(5.0), 200.0);
    }

    #[test]
    fn test_threshold_boundary_goes_up() {
        let scale = ThresholdScale::new(vec![0.0, 10.0], vec!["low", "mid", "high"]).unwrap();
        assert_eq!(scale.scale(-1.0), Some(&"low"));
        assert_eq!(scale.scale(0.0), Some(&"mid"));
        assert_eq!(scale.scale(9.99), Some(&"mid"));
        assert_eq!(scale.scale(10.0), Some(&"high"));
        assert_eq!(scale.scale(f64::NAN), None);
    }

    #[test]
    fn test_threshold_invert_extent_open_ends() {
        let scale = ThresholdScale::new(vec![0.0, 10.0], vec!["low", "mid", "high"]).unwrap();
        assert_eq!(scale.invert_extent(&"low"), Some((None, Some(0.0))));
        assert_eq!(scale.invert_extent(&"mid"), Some((Some(0.0), Some(10.0))));
        assert_eq!(scale.invert_extent(&"high"), Some((Some(10.0), None)));
        assert_eq!(scale.invert_extent(&"missing"), None);
    }

    #[test]
    fn test_threshold_uniform_boundaries() {
        let scale = ThresholdScale::uniform(0.0, 11.0, (0..11).collect::<Vec<u8>>()).unwrap();
        assert_eq!(scale.domain().len(), 10);
        assert_eq!(scale.domain()[0], 1.0);
        assert_eq!(scale.domain()[9], 10.0);
    }

    #[test]
    fn test_threshold_rejects_mismatched_lengths() {
        assert!(ThresholdScale::new(vec![1.0], vec![1, 2, 3]).is_err());
        assert!(ThresholdScale::new(vec![2.0, 1.0], vec![1, 2, 3]).is_err());
        assert!(ThresholdScale::<u8>::uniform(0.0, 1.0, vec![]).is_err());
    }
}
