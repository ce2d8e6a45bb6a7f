//! Canned geometric layouts substituted when no real point set is available
//!
//! Selection hashes the leading bytes of the encoded input. The same hash
//! seeds the generators that scatter points randomly, so identical input
//! always yields an identical layout.

use crate::geometry::point::Point;
use crate::io::configuration::{HASH_PREFIX_BYTES, SYNTHETIC_CENTER};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

/// One of the six synthetic layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntheticPattern {
    /// Concentric rings of 16, 12 and 8 dots around a center dot
    Circular,
    /// 10x10 grid with roughly a quarter of the cells left empty
    Grid,
    /// Four-turn spiral of 40 dots
    Spiral,
    /// Four rings with nine-fold multiples of dots around a center dot
    Mandala,
    /// Random quadrant cluster mirrored into all four quadrants
    Symmetric,
    /// Six hexagonal petals around a small central ring
    Flower,
}

impl SyntheticPattern {
    /// All layouts in selection order
    pub const ALL: [Self; 6] = [
        Self::Circular,
        Self::Grid,
        Self::Spiral,
        Self::Mandala,
        Self::Symmetric,
        Self::Flower,
    ];

    /// Lowercase name of the layout
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circular => "circular",
            Self::Grid => "grid",
            Self::Spiral => "spiral",
            Self::Mandala => "mandala",
            Self::Symmetric => "symmetric",
            Self::Flower => "flower",
        }
    }

    /// Layout selected for the given encoded input
    pub fn select(encoded: &[u8]) -> Self {
        let bucket = (selection_hash(encoded) % 100) as usize;
        Self::ALL
            .get(bucket % Self::ALL.len())
            .copied()
            .unwrap_or(Self::Mandala)
    }

    /// Produce the layout's dots, drawing any randomness from `rng`
    pub fn generate(self, rng: &mut impl Rng) -> Vec<Point> {
        match self {
            Self::Circular => circular(),
            Self::Grid => grid(rng),
            Self::Spiral => spiral(),
            Self::Mandala => mandala(),
            Self::Symmetric => mirrored_cluster(rng),
            Self::Flower => flower(),
        }
    }

    /// Produce the layout deterministically from a seed
    pub fn generate_seeded(self, seed: u64) -> Vec<Point> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

impl fmt::Display for SyntheticPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SyntheticPattern {
    type Err = crate::io::error::KolamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                crate::io::error::invalid_parameter(
                    "pattern",
                    &s,
                    &"expected circular, grid, spiral, mandala, symmetric or flower",
                )
            })
    }
}

/// 31-multiplier rolling hash over the leading input bytes, absolute value
///
/// Arithmetic wraps at 32 bits so long inputs stay well defined.
pub fn selection_hash(encoded: &[u8]) -> u32 {
    encoded
        .iter()
        .take(HASH_PREFIX_BYTES)
        .fold(0i32, |hash, &byte| {
            hash.wrapping_mul(31).wrapping_add(i32::from(byte))
        })
        .unsigned_abs()
}

/// Synthesize the layout chosen by `encoded`
///
/// An empty layout, possible only for the randomly thinned generators,
/// is replaced by the mandala.
pub fn synthesize(encoded: &[u8]) -> Vec<Point> {
    let hash = selection_hash(encoded);
    let pattern = SyntheticPattern::select(encoded);
    tracing::debug!(hash, pattern = pattern.name(), "selected synthetic pattern");

    let points = pattern.generate_seeded(u64::from(hash));
    if points.is_empty() {
        mandala()
    } else {
        points
    }
}

fn ring(radius: f64, count: usize, phase: f64, confidence: f64) -> impl Iterator<Item = Point> {
    let (cx, cy) = SYNTHETIC_CENTER;
    (0..count).map(move |i| {
        let angle = (i as f64 / count as f64).mul_add(TAU, phase);
        Point::with_confidence(
            radius.mul_add(angle.cos(), cx),
            radius.mul_add(angle.sin(), cy),
            confidence,
        )
    })
}

const fn center(confidence: f64) -> Point {
    Point::with_confidence(SYNTHETIC_CENTER.0, SYNTHETIC_CENTER.1, confidence)
}

/// Rings of 16, 12 (offset by half a step) and 8 dots plus the center
pub fn circular() -> Vec<Point> {
    let mut dots: Vec<Point> = ring(120.0, 16, 0.0, 0.85)
        .chain(ring(70.0, 12, TAU / 24.0, 0.80))
        .chain(ring(30.0, 8, 0.0, 0.90))
        .collect();
    dots.push(center(0.95));
    dots
}

/// 10x10 lattice at spacing 50, each cell kept with probability 0.75
pub fn grid(rng: &mut impl Rng) -> Vec<Point> {
    let mut dots = Vec::new();
    for row in 0..10 {
        for col in 0..10 {
            if rng.random_bool(0.75) {
                dots.push(Point::with_confidence(
                    f64::from(col).mul_add(50.0, 50.0),
                    f64::from(row).mul_add(50.0, 50.0),
                    rng.random::<f64>().mul_add(0.2, 0.75),
                ));
            }
        }
    }
    dots
}

/// Forty dots over four turns with radius growing from 20 to 120
pub fn spiral() -> Vec<Point> {
    let (cx, cy) = SYNTHETIC_CENTER;
    let count = 40;
    (0..count)
        .map(|i| {
            let t = f64::from(i) / f64::from(count);
            let angle = t * 4.0 * TAU;
            let radius = t.mul_add(100.0, 20.0);
            Point::with_confidence(
                radius.mul_add(angle.cos(), cx),
                radius.mul_add(angle.sin(), cy),
                0.8,
            )
        })
        .collect()
}

/// Rings 1 to 4 at radius 40r carrying 9r dots, plus the center
pub fn mandala() -> Vec<Point> {
    let mut dots: Vec<Point> = (1..=4u32)
        .flat_map(|r| {
            let ring_index = f64::from(r);
            ring(
                40.0 * ring_index,
                9 * r as usize,
                0.0,
                ring_index.mul_add(-0.05, 0.85),
            )
        })
        .collect();
    dots.push(center(0.95));
    dots
}

/// Random 6x6 quadrant cluster mirrored horizontally, vertically and diagonally
pub fn mirrored_cluster(rng: &mut impl Rng) -> Vec<Point> {
    let (cx, cy) = SYNTHETIC_CENTER;
    let mut dots = Vec::new();
    for i in 0..6 {
        for j in 0..6 {
            if !rng.random_bool(0.7) {
                continue;
            }
            let x = f64::from(i).mul_add(40.0, cx - 100.0);
            let y = f64::from(j).mul_add(40.0, cy - 100.0);
            let mx = 2.0f64.mul_add(cx, -x);
            let my = 2.0f64.mul_add(cy, -y);
            dots.extend([
                Point::with_confidence(x, y, 0.8),
                Point::with_confidence(mx, y, 0.8),
                Point::with_confidence(x, my, 0.8),
                Point::with_confidence(mx, my, 0.8),
            ]);
        }
    }
    dots
}

/// Six petals of six dots at distance 80, an inner ring of 8, and the center
pub fn flower() -> Vec<Point> {
    let (cx, cy) = SYNTHETIC_CENTER;
    let mut dots = Vec::new();

    for petal in 0..6 {
        let petal_angle = f64::from(petal) / 6.0 * TAU;
        let petal_x = 80.0f64.mul_add(petal_angle.cos(), cx);
        let petal_y = 80.0f64.mul_add(petal_angle.sin(), cy);
        for i in 0..6 {
            let angle = f64::from(i) / 6.0 * TAU;
            dots.push(Point::with_confidence(
                30.0f64.mul_add(angle.cos(), petal_x),
                30.0f64.mul_add(angle.sin(), petal_y),
                0.85,
            ));
        }
    }

    dots.extend(ring(20.0, 8, 0.0, 0.90));
    dots.push(center(0.95));
    dots
}
