//! Nearest-neighbor tours over dot sets and the segments they produce

use crate::geometry::point::{Point, Segment};
use crate::io::configuration::{MAX_SEGMENT_DISTANCE, MIN_SEGMENT_DISTANCE};
use bitvec::prelude::*;
use ndarray::Array2;

/// Pairwise Euclidean distances, `[i, j]` holding `|p_i - p_j|`
pub fn distance_matrix(points: &[Point]) -> Array2<f64> {
    let n = points.len();
    let mut matrix = Array2::<f64>::zeros((n, n));

    for (i, a) in points.iter().enumerate() {
        for (j, b) in points.iter().enumerate().skip(i + 1) {
            let d = a.distance(b);
            if let Some(cell) = matrix.get_mut([i, j]) {
                *cell = d;
            }
            if let Some(cell) = matrix.get_mut([j, i]) {
                *cell = d;
            }
        }
    }

    matrix
}

/// Greedy nearest-neighbor tour over the input indices
///
/// Starts at index 0 and repeatedly moves to the closest unvisited point.
/// Candidates are scanned in ascending index order and only a strictly
/// closer point replaces the current best, so equidistant candidates
/// resolve to the lowest original index.
pub fn nearest_neighbor_order(points: &[Point]) -> Vec<usize> {
    let n = points.len();
    if n == 0 {
        return Vec::new();
    }

    let distances = distance_matrix(points);
    let mut visited = bitvec![0; n];
    let mut order = Vec::with_capacity(n);

    let mut current = 0;
    visited.set(current, true);
    order.push(current);

    while order.len() < n {
        let mut nearest = None;
        let mut min_distance = f64::INFINITY;

        for candidate in visited.iter_zeros() {
            let d = distances
                .get([current, candidate])
                .copied()
                .unwrap_or(f64::INFINITY);
            if nearest.is_none() || d < min_distance {
                min_distance = d;
                nearest = Some(candidate);
            }
        }

        let Some(next) = nearest else {
            break;
        };
        visited.set(next, true);
        order.push(next);
        current = next;
    }

    order
}

/// Points rearranged into nearest-neighbor tour order
pub fn chain_points(points: &[Point]) -> Vec<Point> {
    nearest_neighbor_order(points)
        .into_iter()
        .filter_map(|i| points.get(i).copied())
        .collect()
}

/// Builds closed nearest-neighbor chains and filters their segments by length
#[derive(Debug, Clone, Copy)]
pub struct ChainBuilder {
    /// Exclusive lower bound on segment length
    pub min_distance: f64,
    /// Exclusive upper bound on segment length
    pub max_distance: f64,
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self {
            min_distance: MIN_SEGMENT_DISTANCE,
            max_distance: MAX_SEGMENT_DISTANCE,
        }
    }
}

impl ChainBuilder {
    /// Segments between consecutive tour points, including the closing pair
    ///
    /// Only segments with length strictly between the builder's bounds are kept.
    pub fn connect(&self, points: &[Point]) -> Vec<Segment> {
        if points.len() < 2 {
            return Vec::new();
        }

        let chain = chain_points(points);
        let closing = chain.first().copied();

        chain
            .iter()
            .zip(chain.iter().skip(1).copied().chain(closing))
            .map(|(from, to)| Segment::line(*from, to))
            .filter(|segment| {
                segment.distance > self.min_distance && segment.distance < self.max_distance
            })
            .collect()
    }
}

/// Connect dots with the default segment bounds
pub fn connect_dots(points: &[Point]) -> Vec<Segment> {
    ChainBuilder::default().connect(points)
}
