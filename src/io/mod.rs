//! Input loading, rendering, configuration, error handling and the command line

/// Command-line parsing and batch processing
pub mod cli;
/// Analysis constants and runtime configuration defaults
pub mod configuration;
/// Optional remote vision enrichment
pub mod enrichment;
/// Error type shared across the crate
pub mod error;
/// PNG rendering and export
pub mod image;
/// Reading pattern input from files
pub mod input;
/// Terminal progress display for batch runs
pub mod progress;
