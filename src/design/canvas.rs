//! Drawing state of a single design

use crate::geometry::chain::nearest_neighbor_order;
use crate::geometry::point::Point;
use crate::io::configuration::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_DOT_COLOR, DEFAULT_DOT_SIZE,
    MIN_STROKE_LENGTH, STROKE_WIDTH,
};
use crate::io::error::{Result, invalid_input};
use serde::{Deserialize, Serialize};

/// A dot placed by the designer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Hex fill color
    pub color: String,
    /// Display radius
    pub size: f64,
}

/// A straight stroke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Start position
    pub start: (f64, f64),
    /// End position
    pub end: (f64, f64),
    /// Hex stroke color
    pub color: String,
    /// Stroke width
    pub width: f64,
}

impl Line {
    /// Euclidean length of the stroke
    pub fn length(&self) -> f64 {
        (self.end.0 - self.start.0).hypot(self.end.1 - self.start.1)
    }
}

/// A circular stroke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center position
    pub center: (f64, f64),
    /// Radius
    pub radius: f64,
    /// Hex stroke color
    pub color: String,
    /// Stroke width
    pub width: f64,
}

/// Brush settings applied to new elements
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    /// Hex color for new elements
    pub color: String,
    /// Radius for new dots
    pub size: f64,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: DEFAULT_DOT_COLOR.to_string(),
            size: DEFAULT_DOT_SIZE,
        }
    }
}

/// Everything drawn on one canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    /// Canvas width
    pub width: u32,
    /// Canvas height
    pub height: u32,
    /// Placed dots
    pub dots: Vec<Dot>,
    /// Straight strokes
    pub lines: Vec<Line>,
    /// Circular strokes
    pub circles: Vec<Circle>,
}

impl Default for Design {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}

impl Design {
    /// Create an empty design on a canvas of the given size
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            dots: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
        }
    }

    /// Center of the canvas
    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Place a dot, returning how many dots were added
    ///
    /// With `mirrored` set the dot is also reflected across both canvas axes
    /// and through the center, adding four dots in total.
    pub fn add_dot(&mut self, x: f64, y: f64, brush: &Brush, mirrored: bool) -> usize {
        let dot = |px: f64, py: f64| Dot {
            x: px,
            y: py,
            color: brush.color.clone(),
            size: brush.size,
        };

        self.dots.push(dot(x, y));
        if !mirrored {
            return 1;
        }

        let (cx, cy) = self.center();
        let mx = 2.0f64.mul_add(cx, -x);
        let my = 2.0f64.mul_add(cy, -y);
        self.dots.extend([dot(mx, y), dot(x, my), dot(mx, my)]);
        4
    }

    /// Remove the dot at `index`, if any
    pub fn remove_dot(&mut self, index: usize) -> Option<Dot> {
        (index < self.dots.len()).then(|| self.dots.remove(index))
    }

    /// Record a straight stroke; strokes shorter than the minimum are ignored
    pub fn add_line(&mut self, start: (f64, f64), end: (f64, f64), brush: &Brush) -> bool {
        let line = Line {
            start,
            end,
            color: brush.color.clone(),
            width: STROKE_WIDTH,
        };
        if line.length() < MIN_STROKE_LENGTH {
            return false;
        }
        self.lines.push(line);
        true
    }

    /// Record a circle through `edge`; tiny circles are ignored
    pub fn add_circle(&mut self, center: (f64, f64), edge: (f64, f64), brush: &Brush) -> bool {
        let radius = (edge.0 - center.0).hypot(edge.1 - center.1);
        if radius < MIN_STROKE_LENGTH {
            return false;
        }
        self.circles.push(Circle {
            center,
            radius,
            color: brush.color.clone(),
            width: STROKE_WIDTH,
        });
        true
    }

    /// Replace all lines with the closed nearest-neighbor chain through the dots
    ///
    /// Each line takes the color of the dot it starts from.
    ///
    /// # Errors
    ///
    /// Returns an error if the design has fewer than two dots
    pub fn connect_dots(&mut self) -> Result<usize> {
        if self.dots.len() < 2 {
            return Err(invalid_input(&"at least two dots are needed to connect"));
        }

        let order = nearest_neighbor_order(&self.to_points());
        let successors = order.iter().skip(1).chain(order.first());

        self.lines = order
            .iter()
            .zip(successors)
            .filter_map(|(&from_index, &to_index)| {
                let from = self.dots.get(from_index)?;
                let to = self.dots.get(to_index)?;
                Some(Line {
                    start: (from.x, from.y),
                    end: (to.x, to.y),
                    color: from.color.clone(),
                    width: STROKE_WIDTH,
                })
            })
            .collect();

        Ok(self.lines.len())
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.dots.clear();
        self.lines.clear();
        self.circles.clear();
    }

    /// Dots as analysis points
    pub fn to_points(&self) -> Vec<Point> {
        self.dots.iter().map(|d| Point::new(d.x, d.y)).collect()
    }

    /// Rebuild a design from analysis points, e.g. detected dots
    pub fn from_points(points: &[Point], width: u32, height: u32, brush: &Brush) -> Self {
        let mut design = Self::new(width, height);
        for p in points {
            design.add_dot(p.x, p.y, brush, false);
        }
        design
    }
}
