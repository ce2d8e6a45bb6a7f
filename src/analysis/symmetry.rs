//! Rotational and reflective symmetry scoring about the centroid

use crate::geometry::point::{Point, centroid, within_linf};
use crate::io::configuration::{ROTATION_ANGLES_DEGREES, SYMMETRY_THRESHOLD, SYMMETRY_TOLERANCE};
use serde::{Deserialize, Serialize};

/// Dominant symmetry of a point set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymmetryKind {
    /// Neither score passed the threshold
    None,
    /// Invariant under one of the candidate rotations
    Rotational,
    /// Invariant under a horizontal or vertical mirror
    Reflection,
}

/// Outcome of symmetry analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymmetryResult {
    /// Classified symmetry type
    #[serde(rename = "type")]
    pub kind: SymmetryKind,
    /// Score of the classified type, 0 when no type passed the threshold
    pub score: f64,
    /// Best rotational match fraction over all candidate angles
    pub rotational: f64,
    /// Best mirror match fraction over both axes
    pub reflection: f64,
    /// Match fraction under the horizontal mirror
    #[serde(default)]
    pub horizontal: f64,
    /// Match fraction under the vertical mirror
    #[serde(default)]
    pub vertical: f64,
    /// Centroid the transforms were applied about
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Point>,
}

impl SymmetryResult {
    /// Result for sets too small to carry symmetry
    pub const fn none(center: Option<Point>) -> Self {
        Self {
            kind: SymmetryKind::None,
            score: 0.0,
            rotational: 0.0,
            reflection: 0.0,
            horizontal: 0.0,
            vertical: 0.0,
            center,
        }
    }

    /// Whether the gated score passes the classification threshold
    pub const fn is_significant(&self) -> bool {
        self.score > SYMMETRY_THRESHOLD
    }
}

/// Symmetry scorer with configurable tolerance and threshold
#[derive(Debug, Clone, Copy)]
pub struct SymmetryAnalyzer {
    /// L-infinity match tolerance
    pub tolerance: f64,
    /// Score a type must exceed to be reported
    pub threshold: f64,
}

impl Default for SymmetryAnalyzer {
    fn default() -> Self {
        Self {
            tolerance: SYMMETRY_TOLERANCE,
            threshold: SYMMETRY_THRESHOLD,
        }
    }
}

impl SymmetryAnalyzer {
    /// Score rotational and reflective symmetry of `points`
    pub fn analyze(&self, points: &[Point]) -> SymmetryResult {
        let Some(center) = centroid(points) else {
            return SymmetryResult::none(None);
        };
        if points.len() < 2 {
            return SymmetryResult::none(Some(center));
        }

        let offsets: Vec<(f64, f64)> = points.iter().map(|p| p.offset_from(&center)).collect();

        let rotational = self.rotational_score(&offsets);
        let (horizontal, vertical) = self.reflection_scores(&offsets);
        let reflection = horizontal.max(vertical);

        let (kind, score) = if rotational > self.threshold {
            (SymmetryKind::Rotational, rotational)
        } else if reflection > self.threshold {
            (SymmetryKind::Reflection, reflection)
        } else {
            (SymmetryKind::None, 0.0)
        };

        SymmetryResult {
            kind,
            score,
            rotational,
            reflection,
            horizontal,
            vertical,
            center: Some(center),
        }
    }

    /// Best match fraction over the candidate rotation angles
    pub fn rotational_score(&self, offsets: &[(f64, f64)]) -> f64 {
        ROTATION_ANGLES_DEGREES
            .iter()
            .map(|angle| {
                let (sin, cos) = angle.to_radians().sin_cos();
                self.match_fraction(offsets, |(dx, dy)| {
                    (dx.mul_add(cos, -dy * sin), dx.mul_add(sin, dy * cos))
                })
            })
            .fold(0.0, f64::max)
    }

    /// Match fractions under the horizontal and vertical mirrors
    pub fn reflection_scores(&self, offsets: &[(f64, f64)]) -> (f64, f64) {
        let horizontal = self.match_fraction(offsets, |(dx, dy)| (-dx, dy));
        let vertical = self.match_fraction(offsets, |(dx, dy)| (dx, -dy));
        (horizontal, vertical)
    }

    // A point may match itself, so points on an axis of the transform count
    fn match_fraction<F>(&self, offsets: &[(f64, f64)], transform: F) -> f64
    where
        F: Fn((f64, f64)) -> (f64, f64),
    {
        if offsets.is_empty() {
            return 0.0;
        }

        let matches = offsets
            .iter()
            .filter(|&&offset| {
                let image = transform(offset);
                offsets
                    .iter()
                    .any(|&other| within_linf(image, other, self.tolerance))
            })
            .count();

        matches as f64 / offsets.len() as f64
    }
}

/// Analyze symmetry with the default tolerance and threshold
pub fn analyze_symmetry(points: &[Point]) -> SymmetryResult {
    SymmetryAnalyzer::default().analyze(points)
}
