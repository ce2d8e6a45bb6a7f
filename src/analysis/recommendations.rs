//! Design advice derived from analysis results

use crate::analysis::recognizer::AnalysisResult;
use crate::io::configuration::{
    BEGINNER_COMPLEXITY, LOW_REPETITION_SCORE, LOW_SYMMETRY_SCORE, MODERATE_COMPLEXITY,
    SPARSE_DOT_COUNT,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single piece of advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Recommendation {
    /// The design has very few dots
    AddDots,
    /// Symmetry is weak
    UseSymmetryMode,
    /// Low complexity
    BeginnerLevel,
    /// Medium complexity
    ModerateLevel,
    /// High complexity
    AdvancedLevel,
    /// Spacing rarely repeats
    RepeatElements,
}

impl Recommendation {
    /// Human-readable advice text
    pub const fn message(self) -> &'static str {
        match self {
            Self::AddDots => "Add more dots to create a more complex design",
            Self::UseSymmetryMode => {
                "Consider using symmetry mode to create more balanced designs"
            }
            Self::BeginnerLevel => "This is a simple design - perfect for beginners!",
            Self::ModerateLevel => "This is a moderately complex design with good structure",
            Self::AdvancedLevel => "This is an advanced design with excellent complexity",
            Self::RepeatElements => "Try repeating elements to create visual rhythm",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Advice for an analyzed design, in display order
///
/// Exactly one complexity level is always included.
pub fn recommend(result: &AnalysisResult) -> Vec<Recommendation> {
    let mut advice = Vec::new();

    if result.dots.len() < SPARSE_DOT_COUNT {
        advice.push(Recommendation::AddDots);
    }

    if result.symmetry.score < LOW_SYMMETRY_SCORE {
        advice.push(Recommendation::UseSymmetryMode);
    }

    advice.push(if result.complexity < BEGINNER_COMPLEXITY {
        Recommendation::BeginnerLevel
    } else if result.complexity < MODERATE_COMPLEXITY {
        Recommendation::ModerateLevel
    } else {
        Recommendation::AdvancedLevel
    });

    if result.principles.repetition < LOW_REPETITION_SCORE {
        advice.push(Recommendation::RepeatElements);
    }

    advice
}
