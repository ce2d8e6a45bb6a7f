//! Loading pattern input from JSON documents and image files

use crate::analysis::recognizer::{AnalysisRequest, PatternInput};
use crate::geometry::point::Point;
use crate::io::configuration::{ANALYSIS_SUFFIX, DATA_URL_PREFIX};
use crate::io::error::{KolamError, Result};
use serde::Deserialize;
use std::path::Path;

/// File extensions treated as images
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInput {
    Points(Vec<Point>),
    Encoded(String),
    Request(AnalysisRequest),
}

impl From<RawInput> for PatternInput {
    fn from(raw: RawInput) -> Self {
        match raw {
            RawInput::Points(points) => Self::Points(points),
            RawInput::Encoded(url) => Self::DataUrl(url),
            RawInput::Request(request) => request.into_input(),
        }
    }
}

/// Parse a JSON document holding a point array, a data URL string, or a
/// request object with `dots` and/or `imageData`
///
/// # Errors
///
/// Returns an error if the text is not JSON of one of those shapes
pub fn parse_input(text: &str) -> serde_json::Result<PatternInput> {
    serde_json::from_str::<RawInput>(text).map(PatternInput::from)
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Whether `path` looks like something [`load_input`] understands
///
/// Analysis outputs written next to their inputs are excluded.
pub fn is_supported(path: &Path) -> bool {
    let is_output = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with(ANALYSIS_SUFFIX));
    let known = extension(path)
        .is_some_and(|ext| ext == "json" || IMAGE_EXTENSIONS.contains(&ext.as_str()));

    known && !is_output
}

/// Load pattern input from a file
///
/// `.json` files are parsed with [`parse_input`]. Other files holding a
/// `data:` URL as text become [`PatternInput::DataUrl`]; anything else is
/// passed on as raw image bytes.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a `.json` file does not parse
pub fn load_input(path: &Path) -> Result<PatternInput> {
    let bytes = std::fs::read(path).map_err(|e| KolamError::InputRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if extension(path).as_deref() == Some("json") {
        let text = String::from_utf8_lossy(&bytes);
        return parse_input(&text).map_err(|e| KolamError::InputParse {
            path: path.to_path_buf(),
            source: e,
        });
    }

    if bytes.starts_with(DATA_URL_PREFIX.as_bytes()) {
        return Ok(PatternInput::DataUrl(
            String::from_utf8_lossy(&bytes).trim_end().to_string(),
        ));
    }

    Ok(PatternInput::ImageBytes(bytes))
}
