//! Color and style decoration of a point set for rendering

use crate::geometry::chain::connect_dots;
use crate::geometry::point::{Point, Segment};
use crate::io::configuration::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_PALETTE, DEFAULT_STYLE, RANGOLI_DOT_RADIUS,
};
use crate::io::error::{Result, invalid_parameter};
use serde::{Deserialize, Serialize};

/// A pattern dot carrying its display color and radius
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledDot {
    /// Underlying position and confidence
    #[serde(flatten)]
    pub point: Point,
    /// Hex color string such as `#C44569`
    pub color: String,
    /// Display radius
    pub radius: f64,
}

/// Options for composing a rangoli
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangoliOptions {
    /// Canvas width
    pub width: u32,
    /// Canvas height
    pub height: u32,
    /// Palette cycled over the dots
    pub colors: Vec<String>,
    /// Free-form style tag
    pub style: String,
}

impl Default for RangoliOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            colors: DEFAULT_PALETTE.iter().map(ToString::to_string).collect(),
            style: DEFAULT_STYLE.to_string(),
        }
    }
}

/// A decorated design ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rangoli {
    /// Canvas width
    pub width: u32,
    /// Canvas height
    pub height: u32,
    /// Dots with palette colors assigned in input order
    pub dots: Vec<StyledDot>,
    /// Closed nearest-neighbor chain over the dots
    pub connections: Vec<Segment>,
    /// Style tag
    pub style: String,
    /// Palette the dots were colored from
    pub colors: Vec<String>,
}

/// Decorate `points` with palette colors and connect them
///
/// # Errors
///
/// Returns an error if the palette is empty
pub fn compose(points: &[Point], options: RangoliOptions) -> Result<Rangoli> {
    if options.colors.is_empty() {
        return Err(invalid_parameter(
            "colors",
            &"[]",
            &"at least one color is required",
        ));
    }

    let dots = points
        .iter()
        .zip(options.colors.iter().cycle())
        .map(|(point, color)| StyledDot {
            point: *point,
            color: color.clone(),
            radius: RANGOLI_DOT_RADIUS,
        })
        .collect();

    Ok(Rangoli {
        width: options.width,
        height: options.height,
        dots,
        connections: connect_dots(points),
        style: options.style,
        colors: options.colors,
    })
}
