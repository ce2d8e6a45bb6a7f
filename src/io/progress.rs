//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

/// Steps each file passes through during batch analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Reading and decoding the input file
    Loading,
    /// Running the analysis pipeline
    Analyzing,
    /// Writing the analysis document
    Writing,
    /// All steps finished
    Done,
}

impl Stage {
    /// Every stage in processing order
    pub const ALL: [Self; 4] = [Self::Loading, Self::Analyzing, Self::Writing, Self::Done];

    /// Number of completed steps once this stage is reached
    pub const fn position(self) -> u64 {
        match self {
            Self::Loading => 0,
            Self::Analyzing => 1,
            Self::Writing => 2,
            Self::Done => 3,
        }
    }

    /// Steps a file goes through
    pub const fn total() -> u64 {
        Self::Done.position()
    }

    /// Short label shown next to the bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Analyzing => "analyzing",
            Self::Writing => "writing",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coordinates progress display for batch operations
///
/// Automatically switches between individual progress bars (for small batches)
/// and a single batch progress bar (for large batches) based on file count
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_count: usize,
    /// Stores (`filename`, `stage`) for rolling window display
    file_states: Vec<(String, Stage)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>9} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_count: 0,
            file_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        // Large batches get one summary bar instead of one bar per file
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(Stage::total());
            pb.set_style(PROGRESS_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of files announced by [`Self::initialize`]
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Whether a single summary bar is used instead of per-file bars
    pub const fn is_batched(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Register a new file at the loading stage
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states
                .resize(index + 1, (String::new(), Stage::Loading));
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = (display_name, Stage::Loading);
        }
        self.update_bars();
    }

    /// Move a file to `stage`
    pub fn advance(&mut self, index: usize, stage: Stage) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.1 = stage;
        }
        self.update_bars();
    }

    /// Current stage of a file, if it has been started
    pub fn stage(&self, index: usize) -> Option<Stage> {
        self.file_states
            .get(index)
            .filter(|(name, _)| !name.is_empty())
            .map(|&(_, stage)| stage)
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = Stage::Done;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Show the most recently started files on the available bars
    fn update_bars(&self) {
        let active_files: Vec<&(String, Stage)> = self
            .file_states
            .iter()
            .filter(|(name, _)| !name.is_empty())
            .collect();

        let start_idx = active_files
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible_files = active_files.get(start_idx..).unwrap_or(&[]);

        for (bar, (name, stage)) in self.file_bars.iter().zip(visible_files) {
            bar.set_length(Stage::total());
            bar.set_position(stage.position());
            bar.set_message(stage.label());
            bar.set_prefix(name.clone());
        }

        // Clear any unused bars
        for bar in self.file_bars.iter().skip(visible_files.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
