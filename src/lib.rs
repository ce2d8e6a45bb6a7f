//! Analysis, synthesis and rendering of kolam dot patterns
//!
//! Dot sets are chained into closed nearest-neighbor tours, scored for
//! rotational and reflective symmetry, measured for spacing regularity and
//! rated against six design principles. Inputs with no usable dots fall back
//! to deterministic synthetic layouts.

#![forbid(unsafe_code)]

/// Symmetry, spacing, principle and pattern-type analysis
pub mod analysis;
/// Editable designs with undo and redo
pub mod design;
/// Points, segments and nearest-neighbor chaining
pub mod geometry;
/// Input/output operations, configuration and error handling
pub mod io;
/// Synthetic layouts and rangoli composition
pub mod synthesis;

pub use io::error::{KolamError, Result};
