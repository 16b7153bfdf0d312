//! Validated numeric series (one value per category)

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected series input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("series value at index {index} is negative ({value})")]
    Negative { index: usize, value: f64 },
    #[error("series value at index {index} is not a finite number")]
    NonFinite { index: usize },
}

/// Ordered, non-negative, finite values for one data track
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Series(pub(crate) Vec<f64>);

impl Series {
    pub fn new(values: Vec<f64>) -> Result<Self, SeriesError> {
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(SeriesError::NonFinite { index });
            }
            if value < 0.0 {
                return Err(SeriesError::Negative { index, value });
            }
        }
        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<f64>> for Series {
    type Error = SeriesError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<Series> for Vec<f64> {
    fn from(series: Series) -> Self {
        series.0
    }
}

impl AsRef<[f64]> for Series {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_accepts_non_negative() {
        let series = Series::new(vec![0.0, 12.5, 30.0]).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.as_slice(), &[0.0, 12.5, 30.0]);
    }

    #[test]
    fn test_series_rejects_negative() {
        let err = Series::new(vec![1.0, -2.0]).unwrap_err();
        assert_eq!(err, SeriesError::Negative { index: 1, value: -2.0 });
    }

    #[test]
    fn test_series_rejects_nan() {
        let err = Series::new(vec![f64::NAN]).unwrap_err();
        assert_eq!(err, SeriesError::NonFinite { index: 0 });
    }

    #[test]
    fn test_series_deserialize_validates() {
        let ok: Series = serde_json::from_str("[8, 9, 10]").unwrap();
        assert_eq!(ok.as_slice(), &[8.0, 9.0, 10.0]);

        let bad = serde_json::from_str::<Series>("[8, -1]");
        assert!(bad.is_err());
    }

    #[test]
    fn test_empty_series() {
        let series = Series::new(Vec::new()).unwrap();
        assert!(series.is_empty());
        assert_eq!(series, Series::default());
    }
}
