//! Pattern-type decision tree and complexity score

use crate::analysis::statistics::{SpacingStats, analyze_spacing};
use crate::analysis::symmetry::{SymmetryKind, SymmetryResult, analyze_symmetry};
use crate::geometry::point::{Point, Segment};
use crate::io::configuration::{
    COMPLEXITY_DOT_SATURATION, COMPLEXITY_DOT_WEIGHT, COMPLEXITY_SEGMENT_SATURATION,
    COMPLEXITY_SEGMENT_WEIGHT, SIMPLE_PATTERN_MAX_POINTS,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical label for a point set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    /// Too few dots to say more
    Simple,
    /// Strong rotational symmetry
    Mandala,
    /// Strong reflective symmetry
    Symmetric,
    /// Evenly spaced without strong symmetry
    Geometric,
    /// None of the above
    Freeform,
}

impl PatternType {
    /// Lowercase label used in serialized output
    pub const fn label(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Mandala => "mandala",
            Self::Symmetric => "symmetric",
            Self::Geometric => "geometric",
            Self::Freeform => "freeform",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify from precomputed symmetry and spacing; first matching rule wins
pub fn classify(point_count: usize, symmetry: &SymmetryResult, spacing: &SpacingStats) -> PatternType {
    if point_count < SIMPLE_PATTERN_MAX_POINTS {
        PatternType::Simple
    } else if symmetry.is_significant() && symmetry.kind == SymmetryKind::Rotational {
        PatternType::Mandala
    } else if symmetry.is_significant() {
        PatternType::Symmetric
    } else if spacing.uniform {
        PatternType::Geometric
    } else {
        PatternType::Freeform
    }
}

/// Classify a point set
pub fn detect_pattern_type(points: &[Point]) -> PatternType {
    if points.len() < SIMPLE_PATTERN_MAX_POINTS {
        return PatternType::Simple;
    }
    classify(points.len(), &analyze_symmetry(points), &analyze_spacing(points))
}

/// Weighted, saturating blend of dot and segment counts on a 0-100 scale
pub fn calculate_complexity(points: &[Point], segments: &[Segment]) -> f64 {
    let dot_factor = (points.len() as f64 / COMPLEXITY_DOT_SATURATION).min(1.0);
    let segment_factor = (segments.len() as f64 / COMPLEXITY_SEGMENT_SATURATION).min(1.0);

    dot_factor.mul_add(
        COMPLEXITY_DOT_WEIGHT,
        segment_factor * COMPLEXITY_SEGMENT_WEIGHT,
    ) * 100.0
}
