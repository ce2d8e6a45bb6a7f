//! Explicit drawing state with snapshot undo/redo

/// Dots, strokes and circles of a design
pub mod canvas;
/// Snapshot history and the editor that records it
pub mod history;

pub use canvas::{Brush, Design};
pub use history::{Editor, History};
