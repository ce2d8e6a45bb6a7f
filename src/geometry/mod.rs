//! Geometric primitives and nearest-neighbor chaining of pattern dots

/// Nearest-neighbor tours and segment derivation
pub mod chain;
/// Points, segments, distances and centroids
pub mod point;

pub use chain::{ChainBuilder, connect_dots};
pub use point::{Point, Segment, SegmentKind, centroid};
