//! Spacing statistics over consecutive dots in input order

use crate::geometry::point::Point;
use crate::io::configuration::UNIFORMITY_RATIO;
use serde::{Deserialize, Serialize};

/// Mean and spread of consecutive-pair distances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingStats {
    /// Whether the standard deviation is small relative to the mean
    pub uniform: bool,
    /// Mean consecutive distance
    pub average: f64,
    /// Population standard deviation, absent for fewer than two points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std_dev: Option<f64>,
    /// Population variance, absent for fewer than two points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance: Option<f64>,
}

impl SpacingStats {
    /// Statistics of a set too small to have any spacing
    pub const fn empty() -> Self {
        Self {
            uniform: false,
            average: 0.0,
            std_dev: None,
            variance: None,
        }
    }

    /// `std_dev / average`, `None` when either is missing or the mean is zero
    pub fn relative_deviation(&self) -> Option<f64> {
        self.std_dev
            .filter(|_| self.average > 0.0)
            .map(|sd| sd / self.average)
    }

    /// `variance / average²`, `None` when either is missing or the mean is zero
    pub fn relative_variance(&self) -> Option<f64> {
        self.variance
            .filter(|_| self.average > 0.0)
            .map(|v| v / (self.average * self.average))
    }
}

/// Distances between each point and its successor in input order
pub fn consecutive_distances(points: &[Point]) -> Vec<f64> {
    points
        .windows(2)
        .filter_map(|pair| match pair {
            [a, b] => Some(a.distance(b)),
            _ => None,
        })
        .collect()
}

/// Upper median (`sorted[n / 2]`), `None` for an empty slice
pub fn upper_median(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.get(sorted.len() / 2).copied()
}

/// Compute spacing statistics over consecutive input-order distances
pub fn analyze_spacing(points: &[Point]) -> SpacingStats {
    if points.len() < 2 {
        return SpacingStats::empty();
    }

    let distances = consecutive_distances(points);
    let n = distances.len() as f64;
    let average = distances.iter().sum::<f64>() / n;
    let variance = distances
        .iter()
        .map(|d| (d - average).powi(2))
        .sum::<f64>()
        / n;
    let std_dev = variance.sqrt();

    SpacingStats {
        uniform: std_dev < average * UNIFORMITY_RATIO,
        average,
        std_dev: Some(std_dev),
        variance: Some(variance),
    }
}
