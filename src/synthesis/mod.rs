//! Synthetic layouts and rangoli composition

/// Hash-selected canned layouts
pub mod generators;
/// Palette and style decoration for rendering
pub mod rangoli;

pub use generators::{SyntheticPattern, synthesize};
pub use rangoli::{Rangoli, RangoliOptions, compose};
