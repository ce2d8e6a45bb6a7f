//! End-to-end analysis pipeline from raw input to a composite result
//!
//! Every entry point is total: input that cannot be turned into a usable
//! point set is replaced by the nine-way mandala and the result carries a
//! note saying so.

use crate::analysis::classification::{PatternType, calculate_complexity, classify};
use crate::analysis::principles::{PrincipleScores, score_principles};
use crate::analysis::statistics::{SpacingStats, analyze_spacing};
use crate::analysis::symmetry::{SymmetryAnalyzer, SymmetryResult};
use crate::geometry::chain::ChainBuilder;
use crate::geometry::point::{Point, Segment};
use crate::io::configuration::DATA_URL_PREFIX;
use crate::synthesis::generators::{mandala, synthesize};
use serde::{Deserialize, Serialize};

/// Note attached to results computed on the fallback layout
pub const FALLBACK_NOTE: &str = "Using default pattern - could not analyze the supplied input";

/// Raw material the pipeline can analyze
#[derive(Debug, Clone, PartialEq)]
pub enum PatternInput {
    /// Caller-supplied dots
    Points(Vec<Point>),
    /// Image encoded as a `data:` URL
    DataUrl(String),
    /// Raw bytes of an image file
    ImageBytes(Vec<u8>),
}

impl From<Vec<Point>> for PatternInput {
    fn from(points: Vec<Point>) -> Self {
        Self::Points(points)
    }
}

/// Request body shape accepted by the analysis endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Explicit dots, preferred when present and non-empty
    #[serde(default)]
    pub dots: Option<Vec<Point>>,
    /// Encoded image used when no dots are given
    #[serde(default)]
    pub image_data: Option<String>,
}

impl AnalysisRequest {
    /// Pick the dots if any were sent, else the encoded image
    pub fn into_input(self) -> PatternInput {
        match (self.dots, self.image_data) {
            (Some(dots), _) if !dots.is_empty() => PatternInput::Points(dots),
            (_, Some(image)) => PatternInput::DataUrl(image),
            (dots, None) => PatternInput::Points(dots.unwrap_or_default()),
        }
    }
}

/// Composite outcome of analyzing one pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Dots the analysis ran on
    pub dots: Vec<Point>,
    /// Closed nearest-neighbor chain segments
    pub connections: Vec<Segment>,
    /// Symmetry scores
    pub symmetry: SymmetryResult,
    /// Spacing statistics in input order
    pub spacing: SpacingStats,
    /// Design principle scores
    pub principles: PrincipleScores,
    /// Complexity on a 0-100 scale
    pub complexity: f64,
    /// Classified pattern type
    pub pattern_type: PatternType,
    /// Present when the fallback layout replaced unusable input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AnalysisResult {
    /// Whether the fallback layout was analyzed instead of the input
    pub const fn used_fallback(&self) -> bool {
        self.note.is_some()
    }
}

/// Runs chaining, symmetry, spacing, principle scoring and classification
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternRecognizer {
    /// Segment derivation settings
    pub chain: ChainBuilder,
    /// Symmetry tolerance and threshold
    pub symmetry: SymmetryAnalyzer,
}

impl PatternRecognizer {
    /// Create a recognizer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn input into dots
    ///
    /// Explicit points pass through. `data:` URLs and recognizable image
    /// bytes map to a synthetic layout chosen by their content. Anything
    /// else yields no dots.
    pub fn detect_dots(&self, input: &PatternInput) -> Vec<Point> {
        match input {
            PatternInput::Points(points) => points.clone(),
            PatternInput::DataUrl(url) if url.starts_with(DATA_URL_PREFIX) => {
                synthesize(url.as_bytes())
            }
            PatternInput::DataUrl(_) => Vec::new(),
            PatternInput::ImageBytes(bytes) if image::guess_format(bytes).is_ok() => {
                synthesize(bytes)
            }
            PatternInput::ImageBytes(_) => Vec::new(),
        }
    }

    /// Analyze any input, falling back to the mandala layout when needed
    pub fn analyze(&self, input: &PatternInput) -> AnalysisResult {
        let dots = self.detect_dots(input);

        if dots.is_empty() || dots.iter().any(|p| !p.is_finite()) {
            tracing::warn!(
                detected = dots.len(),
                "no usable dots in input, analyzing default pattern"
            );
            let mut result = self.analyze_points(mandala());
            result.note = Some(FALLBACK_NOTE.to_string());
            return result;
        }

        self.analyze_points(dots)
    }

    /// Analyze an explicit point set
    pub fn analyze_points(&self, dots: Vec<Point>) -> AnalysisResult {
        let connections = self.chain.connect(&dots);
        let symmetry = self.symmetry.analyze(&dots);
        let spacing = analyze_spacing(&dots);
        let principles = score_principles(&dots, &spacing, &symmetry);
        let complexity = calculate_complexity(&dots, &connections);
        let pattern_type = classify(dots.len(), &symmetry, &spacing);

        tracing::debug!(
            dots = dots.len(),
            connections = connections.len(),
            symmetry = symmetry.score,
            complexity,
            pattern_type = pattern_type.label(),
            "analyzed pattern"
        );

        AnalysisResult {
            dots,
            connections,
            symmetry,
            spacing,
            principles,
            complexity,
            pattern_type,
            note: None,
        }
    }
}

/// Detect dots with default settings
pub fn detect_dots(input: &PatternInput) -> Vec<Point> {
    PatternRecognizer::default().detect_dots(input)
}

/// Analyze input with default settings
pub fn analyze_image(input: &PatternInput) -> AnalysisResult {
    PatternRecognizer::default().analyze(input)
}
