//! Symmetry, spacing and design-principle analysis of point sets

/// Pattern-type decision tree and complexity score
pub mod classification;
/// Heuristic design principle scores
pub mod principles;
/// Input normalization and the full analysis pipeline
pub mod recognizer;
/// Advice derived from analysis results
pub mod recommendations;
/// Spacing statistics over consecutive dots
pub mod statistics;
/// Rotational and reflective symmetry scoring
pub mod symmetry;

pub use classification::{PatternType, calculate_complexity, detect_pattern_type};
pub use principles::{PrincipleScores, extract_principles};
pub use recognizer::{AnalysisResult, PatternInput, PatternRecognizer, analyze_image, detect_dots};
pub use statistics::{SpacingStats, analyze_spacing};
pub use symmetry::{SymmetryKind, SymmetryResult, analyze_symmetry};
