//! Command-line interface for analyzing, generating and rendering kolam patterns

use crate::analysis::recognizer::PatternRecognizer;
use crate::io::configuration::{
    ANALYSIS_SUFFIX, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_SEED, DEFAULT_STYLE,
    RENDER_SUFFIX,
};
use crate::io::enrichment::{AnalysisService, EnrichmentConfig};
use crate::io::error::{KolamError, Result, invalid_input};
use crate::io::image::{export_png, render_rangoli};
use crate::io::input::{is_supported, load_input};
use crate::io::progress::{ProgressManager, Stage};
use crate::synthesis::generators::{SyntheticPattern, synthesize};
use crate::synthesis::rangoli::{RangoliOptions, compose};
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kolam")]
#[command(
    author,
    version,
    about = "Analyze, generate and render kolam dot patterns"
)]
/// Command-line arguments for the kolam tool
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Operations offered by the command line
#[derive(Subcommand)]
pub enum Command {
    /// Analyze point files or images, writing `<name>_analysis.json` beside each
    Analyze(AnalyzeArgs),
    /// Print a synthetic layout as a JSON point array
    Generate(GenerateArgs),
    /// Compose a rangoli from an input and save it as PNG
    Render(RenderArgs),
    /// Show the remote enrichment configuration
    Status,
}

/// Arguments of `kolam analyze`
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl AnalyzeArgs {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Arguments of `kolam generate`
#[derive(Args)]
pub struct GenerateArgs {
    /// Layout to generate (circular, grid, spiral, mandala, symmetric, flower)
    #[arg(value_name = "PATTERN", conflicts_with = "from")]
    pub pattern: Option<SyntheticPattern>,

    /// Choose and seed the layout by hashing this text instead
    #[arg(short, long, value_name = "TEXT")]
    pub from: Option<String>,

    /// Random seed for layouts with random placement
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Write the points to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments of `kolam render`
#[derive(Args)]
pub struct RenderArgs {
    /// Point file, request file or image to render
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output PNG path, defaults to `<name>_render.png` beside the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Style tag recorded on the composition
    #[arg(long, default_value = DEFAULT_STYLE)]
    pub style: String,

    /// Comma-separated hex palette cycled over the dots
    #[arg(short, long, value_delimiter = ',')]
    pub colors: Vec<String>,

    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: u32,
}

impl RenderArgs {
    /// Composition options, falling back to the default palette
    pub fn options(&self) -> RangoliOptions {
        let defaults = RangoliOptions::default();
        RangoliOptions {
            width: self.width,
            height: self.height,
            colors: if self.colors.is_empty() {
                defaults.colors
            } else {
                self.colors.clone()
            },
            style: self.style.clone(),
        }
    }

    /// Where the rendered PNG is written
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| sibling_path(&self.input, RENDER_SUFFIX, "png"))
    }
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` is honored unless `verbose` forces debug output.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed, e.g. by a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Execute the parsed command line
///
/// # Errors
///
/// Returns an error if the selected operation fails
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Analyze(args) => {
            let analyzed = FileProcessor::new(args).process()?;
            tracing::debug!(analyzed, "batch analysis finished");
            Ok(())
        }
        Command::Generate(args) => generate(&args),
        Command::Render(args) => {
            let output = render(&args)?;
            write_stdout(&format!("Saved {}", output.display()))
        }
        Command::Status => {
            let status = EnrichmentConfig::from_env().status();
            let json =
                serde_json::to_string_pretty(&status).map_err(|e| KolamError::Serialization {
                    operation: "format status",
                    source: e,
                })?;
            write_stdout(&json)
        }
    }
}

/// Produce the layout requested by `args` and write it as JSON
///
/// # Errors
///
/// Returns an error if the points cannot be serialized or written
pub fn generate(args: &GenerateArgs) -> Result<()> {
    let points = match (&args.from, args.pattern) {
        (Some(text), _) => synthesize(text.as_bytes()),
        (None, pattern) => pattern
            .unwrap_or(SyntheticPattern::Mandala)
            .generate_seeded(args.seed),
    };
    tracing::debug!(count = points.len(), "generated layout");

    let json = serde_json::to_string_pretty(&points).map_err(|e| KolamError::Serialization {
        operation: "format points",
        source: e,
    })?;

    match &args.output {
        Some(path) => std::fs::write(path, json).map_err(|e| KolamError::FileSystem {
            path: path.clone(),
            operation: "write points",
            source: e,
        }),
        None => write_stdout(&json),
    }
}

/// Compose and save a rangoli for `args.input`, returning the PNG path
///
/// Inputs without usable dots are rendered from the fallback layout.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded, the palette is invalid,
/// or the image cannot be saved
pub fn render(args: &RenderArgs) -> Result<PathBuf> {
    let input = load_input(&args.input)?;
    let analysis = PatternRecognizer::default().analyze(&input);
    let rangoli = compose(&analysis.dots, args.options())?;
    let rendered = render_rangoli(&rangoli)?;

    let output_path = args.output_path();
    export_png(&rendered, &output_path)?;
    tracing::debug!(path = %output_path.display(), dots = rangoli.dots.len(), "rendered rangoli");

    Ok(output_path)
}

fn write_stdout(text: &str) -> Result<()> {
    writeln!(std::io::stdout().lock(), "{text}").map_err(|e| KolamError::FileSystem {
        path: PathBuf::from("<stdout>"),
        operation: "write",
        source: e,
    })
}

fn sibling_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

/// Orchestrates batch analysis of input files with progress tracking
pub struct FileProcessor {
    args: AnalyzeArgs,
    service: AnalysisService,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a processor running local analysis only
    pub fn new(args: AnalyzeArgs) -> Self {
        Self::with_service(args, AnalysisService::local())
    }

    /// Create a processor that analyzes through `service`
    pub fn with_service(args: AnalyzeArgs, service: AnalysisService) -> Self {
        let progress_manager = args.should_show_progress().then(ProgressManager::new);

        Self {
            args,
            service,
            progress_manager,
        }
    }

    /// Analyze every selected file, returning how many were written
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<usize> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(0);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(files.len())
    }

    /// Path of the analysis document written for `input_path`
    pub fn output_path(input_path: &Path) -> PathBuf {
        sibling_path(input_path, ANALYSIS_SUFFIX, "json")
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.args.target;

        if target.is_file() {
            if !is_supported(target) {
                return Err(invalid_input(&format!(
                    "{} is not a JSON point file or image",
                    target.display()
                )));
            }
            return Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            });
        }

        if !target.is_dir() {
            return Err(invalid_input(&format!(
                "{} is neither a file nor a directory",
                target.display()
            )));
        }

        let read_error = |e| KolamError::FileSystem {
            path: target.clone(),
            operation: "read directory",
            source: e,
        };
        let mut files = Vec::new();
        for entry in std::fs::read_dir(target).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            if path.is_file() && is_supported(&path) && self.should_process_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.args.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.args.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let output_path = Self::output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }
        let input = load_input(input_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.advance(index, Stage::Analyzing);
        }
        let analysis = self.service.analyze(&input);
        if analysis.analysis.used_fallback() {
            tracing::debug!(path = %input_path.display(), "analysis used the fallback layout");
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.advance(index, Stage::Writing);
        }
        let file = File::create(&output_path).map_err(|e| KolamError::FileSystem {
            path: output_path.clone(),
            operation: "create",
            source: e,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &analysis).map_err(|e| {
            KolamError::Serialization {
                operation: "write analysis",
                source: e,
            }
        })?;
        writer.flush().map_err(|e| KolamError::FileSystem {
            path: output_path.clone(),
            operation: "write",
            source: e,
        })?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }
}
