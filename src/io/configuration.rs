//! Analysis constants and runtime configuration defaults

// Segment filtering for nearest-neighbor chains
/// Segments at or below this length are dropped
pub const MIN_SEGMENT_DISTANCE: f64 = 5.0;
/// Segments at or above this length are dropped
pub const MAX_SEGMENT_DISTANCE: f64 = 500.0;

// Symmetry detection
/// L-infinity distance under which a transformed point matches another point
pub const SYMMETRY_TOLERANCE: f64 = 10.0;
/// Candidate rotation angles in degrees, tried in order
pub const ROTATION_ANGLES_DEGREES: [f64; 4] = [90.0, 60.0, 45.0, 30.0];
/// Score a symmetry must exceed to be reported as its type
pub const SYMMETRY_THRESHOLD: f64 = 0.7;

// Design principles
/// L-infinity distance for an antipodal counterweight to count as balance
pub const BALANCE_TOLERANCE: f64 = 20.0;
/// Relative band around the median distance that counts as a repetition
pub const REPETITION_BAND: f64 = 0.2;
/// Point count at which emphasis saturates
pub const EMPHASIS_SATURATION: f64 = 20.0;
/// Spacing is uniform when its standard deviation is below this share of the mean
pub const UNIFORMITY_RATIO: f64 = 0.2;

// Classification and complexity
/// Patterns with fewer points are always classified as simple
pub const SIMPLE_PATTERN_MAX_POINTS: usize = 10;
/// Point count at which the dot factor of complexity saturates
pub const COMPLEXITY_DOT_SATURATION: f64 = 50.0;
/// Segment count at which the connection factor of complexity saturates
pub const COMPLEXITY_SEGMENT_SATURATION: f64 = 100.0;
/// Weight of the dot factor in complexity
pub const COMPLEXITY_DOT_WEIGHT: f64 = 0.6;
/// Weight of the connection factor in complexity
pub const COMPLEXITY_SEGMENT_WEIGHT: f64 = 0.4;

// Synthetic patterns
/// Number of leading input bytes that feed the selection hash
pub const HASH_PREFIX_BYTES: usize = 100;
/// Center of every synthetic layout
pub const SYNTHETIC_CENTER: (f64, f64) = (250.0, 250.0);
/// Prefix identifying an encoded image passed as text
pub const DATA_URL_PREFIX: &str = "data:";
/// Confidence assumed for points that arrive without one
pub const DEFAULT_CONFIDENCE: f64 = 0.8;
/// Seed used when generating a layout without an explicit seed
pub const DEFAULT_SEED: u64 = 42;

// Recommendation thresholds
/// Below this many dots the design is considered sparse
pub const SPARSE_DOT_COUNT: usize = 10;
/// Symmetry score under which symmetry mode is suggested
pub const LOW_SYMMETRY_SCORE: f64 = 0.6;
/// Complexity under which a design is rated beginner level
pub const BEGINNER_COMPLEXITY: f64 = 30.0;
/// Complexity under which a design is rated moderate
pub const MODERATE_COMPLEXITY: f64 = 60.0;
/// Repetition score under which repeating elements is suggested
pub const LOW_REPETITION_SCORE: f64 = 0.5;

// Canvas and rendering
/// Default canvas width
pub const DEFAULT_CANVAS_WIDTH: u32 = 500;
/// Default canvas height
pub const DEFAULT_CANVAS_HEIGHT: u32 = 500;
/// Radius given to composed rangoli dots
pub const RANGOLI_DOT_RADIUS: f64 = 5.0;
/// Stroke width for lines and circles
pub const STROKE_WIDTH: f64 = 2.0;
/// Spacing of the background guide grid
pub const GUIDE_GRID_SPACING: u32 = 50;
/// Lines and circles smaller than this are not recorded
pub const MIN_STROKE_LENGTH: f64 = 3.0;
/// Default rangoli palette
pub const DEFAULT_PALETTE: [&str; 3] = ["#FF6B9D", "#C44569", "#F8B500"];
/// Default rangoli style
pub const DEFAULT_STYLE: &str = "traditional";
/// Default dot color in the design canvas
pub const DEFAULT_DOT_COLOR: &str = "#FFD700";
/// Default dot size in the design canvas
pub const DEFAULT_DOT_SIZE: f64 = 5.0;

// Output settings
/// Suffix added to analysis output filenames
pub const ANALYSIS_SUFFIX: &str = "_analysis";
/// Suffix added to rendered image filenames
pub const RENDER_SUFFIX: &str = "_render";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Enrichment environment
/// Enables remote enrichment when set to `true`
pub const ENV_ENABLE_AI: &str = "ENABLE_AI_ANALYSIS";
/// Selects the remote vision service
pub const ENV_AI_SERVICE: &str = "AI_SERVICE";
/// API key for the `openai` backend
pub const ENV_OPENAI_KEY: &str = "OPENAI_API_KEY";
/// API key for the Google Vision backend
pub const ENV_GOOGLE_KEY: &str = "GOOGLE_VISION_API_KEY";
/// API key for the Anthropic backend
pub const ENV_ANTHROPIC_KEY: &str = "ANTHROPIC_API_KEY";
/// Service used when none is configured
pub const DEFAULT_AI_SERVICE: &str = "openai";
