//! Dots, the segments between them, and basic planar measurements

use crate::io::configuration::DEFAULT_CONFIDENCE;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single pattern dot
///
/// `confidence` is carried for consumers of detection output and plays no
/// part in any geometric computation.
///
/// Deserialization is lenient: `px`/`py` stand in for a missing `x`/`y`, and
/// a coordinate that is absent or not a JSON number reads as 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPoint")]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
    /// Detection confidence in `[0, 1]`
    pub confidence: f64,
}

/// Wire shape of a point before coordinates are resolved
#[derive(Deserialize)]
struct RawPoint {
    #[serde(default)]
    x: Option<Value>,
    #[serde(default)]
    y: Option<Value>,
    #[serde(default)]
    px: Option<Value>,
    #[serde(default)]
    py: Option<Value>,
    #[serde(default)]
    confidence: Option<Value>,
}

fn number(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64)
}

impl From<RawPoint> for Point {
    fn from(raw: RawPoint) -> Self {
        let coordinate = |primary: Option<&Value>, legacy: Option<&Value>| {
            number(primary).or_else(|| number(legacy)).unwrap_or(0.0)
        };

        Self {
            x: coordinate(raw.x.as_ref(), raw.px.as_ref()),
            y: coordinate(raw.y.as_ref(), raw.py.as_ref()),
            confidence: number(raw.confidence.as_ref()).unwrap_or(DEFAULT_CONFIDENCE),
        }
    }
}

impl Point {
    /// Create a point with full confidence
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            confidence: 1.0,
        }
    }

    /// Create a point with an explicit confidence
    pub const fn with_confidence(x: f64, y: f64, confidence: f64) -> Self {
        Self { x, y, confidence }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Offset of this point from `origin`
    pub const fn offset_from(&self, origin: &Self) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }

    /// Whether both coordinates are finite
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Arithmetic mean of all coordinates, `None` for an empty set
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }

    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let n = points.len() as f64;

    Some(Point::new(sum_x / n, sum_y / n))
}

/// Whether two offsets lie within `tolerance` of each other on both axes
pub const fn within_linf(a: (f64, f64), b: (f64, f64), tolerance: f64) -> bool {
    (a.0 - b.0).abs() < tolerance && (a.1 - b.1).abs() < tolerance
}

/// Kind of a derived connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Straight line between two dots
    Line,
}

/// Connection between two consecutive dots of a chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start of the segment
    pub from: Point,
    /// End of the segment
    pub to: Point,
    /// Euclidean length
    pub distance: f64,
    /// Segment kind, always a line
    #[serde(rename = "type")]
    pub kind: SegmentKind,
}

impl Segment {
    /// Create a line segment, measuring its length
    pub fn line(from: Point, to: Point) -> Self {
        Self {
            distance: from.distance(&to),
            from,
            to,
            kind: SegmentKind::Line,
        }
    }
}
