//! Heuristic scores for the six traditional design principles

use crate::analysis::statistics::{SpacingStats, analyze_spacing, consecutive_distances, upper_median};
use crate::analysis::symmetry::{SymmetryResult, analyze_symmetry};
use crate::geometry::point::{Point, centroid, within_linf};
use crate::io::configuration::{BALANCE_TOLERANCE, EMPHASIS_SATURATION, REPETITION_BAND};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed design principles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Principle {
    /// Recurring spacing between consecutive dots
    Repetition,
    /// Counterweights opposite the centroid
    Balance,
    /// Gated symmetry score
    Symmetry,
    /// Point count proxy for focal density
    Emphasis,
    /// Evenness of spacing
    Harmony,
    /// Relative variance of spacing
    Proportion,
}

impl Principle {
    /// All principles in reporting order
    pub const ALL: [Self; 6] = [
        Self::Repetition,
        Self::Balance,
        Self::Symmetry,
        Self::Emphasis,
        Self::Harmony,
        Self::Proportion,
    ];

    /// Lowercase name used in serialized output
    pub const fn name(self) -> &'static str {
        match self {
            Self::Repetition => "repetition",
            Self::Balance => "balance",
            Self::Symmetry => "symmetry",
            Self::Emphasis => "emphasis",
            Self::Harmony => "harmony",
            Self::Proportion => "proportion",
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scores for every principle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PrincipleScores {
    /// Share of distances near the median distance
    pub repetition: f64,
    /// Share of points with an antipodal counterpart
    pub balance: f64,
    /// Gated symmetry score
    pub symmetry: f64,
    /// Saturating point count
    pub emphasis: f64,
    /// `1 - stdDev / average`, floored at 0
    pub harmony: f64,
    /// `1 - variance / average²`, floored at 0
    pub proportion: f64,
}

impl PrincipleScores {
    /// Score of a single principle
    pub const fn get(&self, principle: Principle) -> f64 {
        match principle {
            Principle::Repetition => self.repetition,
            Principle::Balance => self.balance,
            Principle::Symmetry => self.symmetry,
            Principle::Emphasis => self.emphasis,
            Principle::Harmony => self.harmony,
            Principle::Proportion => self.proportion,
        }
    }

    /// Principle and score pairs in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (Principle, f64)> + '_ {
        Principle::ALL.into_iter().map(|p| (p, self.get(p)))
    }
}

/// Fraction of consecutive distances within the repetition band of their median
pub fn repetition(points: &[Point]) -> f64 {
    let distances = consecutive_distances(points);
    let Some(median) = upper_median(&distances) else {
        return 0.0;
    };

    let similar = distances
        .iter()
        .filter(|d| (*d - median).abs() < median * REPETITION_BAND)
        .count();

    similar as f64 / distances.len() as f64
}

/// Fraction of points mirrored through the centroid by a point of the set
pub fn balance(points: &[Point]) -> f64 {
    let Some(center) = centroid(points) else {
        return 0.0;
    };

    let offsets: Vec<(f64, f64)> = points.iter().map(|p| p.offset_from(&center)).collect();
    let balanced = offsets
        .iter()
        .filter(|&&(dx, dy)| {
            offsets
                .iter()
                .any(|&other| within_linf((-dx, -dy), other, BALANCE_TOLERANCE))
        })
        .count();

    balanced as f64 / points.len() as f64
}

/// Point count saturating at twenty dots
pub const fn emphasis(points: &[Point]) -> f64 {
    (points.len() as f64 / EMPHASIS_SATURATION).min(1.0)
}

/// Evenness of spacing derived from precomputed statistics
pub fn harmony(spacing: &SpacingStats) -> f64 {
    spacing
        .relative_deviation()
        .map_or(0.0, |ratio| (1.0 - ratio).max(0.0))
}

/// Proportionality of spacing derived from precomputed statistics
pub fn proportion(spacing: &SpacingStats) -> f64 {
    spacing
        .relative_variance()
        .map_or(0.0, |ratio| (1.0 - ratio).max(0.0))
}

/// Score all principles reusing already computed spacing and symmetry
pub fn score_principles(
    points: &[Point],
    spacing: &SpacingStats,
    symmetry: &SymmetryResult,
) -> PrincipleScores {
    PrincipleScores {
        repetition: repetition(points),
        balance: balance(points),
        symmetry: symmetry.score,
        emphasis: emphasis(points),
        harmony: harmony(spacing),
        proportion: proportion(spacing),
    }
}

/// Score all principles of a point set
pub fn extract_principles(points: &[Point]) -> PrincipleScores {
    let spacing = analyze_spacing(points);
    let symmetry = analyze_symmetry(points);
    score_principles(points, &spacing, &symmetry)
}
