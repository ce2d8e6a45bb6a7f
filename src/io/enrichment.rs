//! Optional remote vision enrichment on top of local analysis
//!
//! Remote services are reached through [`VisionBackend`] implementations
//! supplied by the embedding application. Local analysis always runs and a
//! backend failure never prevents a result.

use crate::analysis::recognizer::{AnalysisResult, PatternInput, PatternRecognizer};
use crate::analysis::recommendations::recommend;
use crate::io::configuration::{
    DEFAULT_AI_SERVICE, ENV_AI_SERVICE, ENV_ANTHROPIC_KEY, ENV_ENABLE_AI, ENV_GOOGLE_KEY,
    ENV_OPENAI_KEY,
};
use crate::io::error::{KolamError, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Remote vision services the configuration can name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisionService {
    /// Chat completions with image input
    OpenAi,
    /// Google Cloud Vision annotate
    Google,
    /// Anthropic messages with image content
    Anthropic,
}

impl VisionService {
    /// Configuration name of the service
    pub const fn name(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Google => "google",
            Self::Anthropic => "anthropic",
        }
    }

    /// Environment variable holding the service's API key
    pub const fn key_variable(self) -> &'static str {
        match self {
            Self::OpenAi => ENV_OPENAI_KEY,
            Self::Google => ENV_GOOGLE_KEY,
            Self::Anthropic => ENV_ANTHROPIC_KEY,
        }
    }
}

impl fmt::Display for VisionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VisionService {
    type Err = KolamError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "google" => Ok(Self::Google),
            "anthropic" => Ok(Self::Anthropic),
            other => Err(KolamError::Enrichment {
                service: other.to_string(),
                reason: "unknown AI service".to_string(),
            }),
        }
    }
}

/// Enrichment settings, normally read from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentConfig {
    /// Whether remote enrichment was requested
    pub enabled: bool,
    /// Requested service name, lowercased
    pub service: String,
    /// API key for the `openai` service
    pub openai_api_key: Option<String>,
    /// API key for the `google` service
    pub google_api_key: Option<String>,
    /// API key for the `anthropic` service
    pub anthropic_api_key: Option<String>,
}

impl EnrichmentConfig {
    /// Read settings from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        Self {
            enabled: get(ENV_ENABLE_AI).is_some_and(|v| v == "true"),
            service: get(ENV_AI_SERVICE)
                .unwrap_or_else(|| DEFAULT_AI_SERVICE.to_string())
                .to_ascii_lowercase(),
            openai_api_key: get(ENV_OPENAI_KEY),
            google_api_key: get(ENV_GOOGLE_KEY),
            anthropic_api_key: get(ENV_ANTHROPIC_KEY),
        }
    }

    /// API key configured for `service`
    pub fn api_key(&self, service: VisionService) -> Option<&str> {
        match service {
            VisionService::OpenAi => self.openai_api_key.as_deref(),
            VisionService::Google => self.google_api_key.as_deref(),
            VisionService::Anthropic => self.anthropic_api_key.as_deref(),
        }
    }

    /// Resolve the service that enrichment would use
    ///
    /// # Errors
    ///
    /// Returns an error if enrichment is disabled, the service is unknown,
    /// or its API key is missing
    pub fn validate(&self) -> Result<VisionService> {
        if !self.enabled {
            return Err(KolamError::Enrichment {
                service: self.service.clone(),
                reason: format!("disabled; set {ENV_ENABLE_AI}=true to enable"),
            });
        }

        let service: VisionService = self.service.parse()?;
        if self.api_key(service).is_none() {
            return Err(KolamError::Enrichment {
                service: service.name().to_string(),
                reason: format!("{} is not set", service.key_variable()),
            });
        }

        Ok(service)
    }

    /// Summary of the configuration for display
    pub fn status(&self) -> EnrichmentStatus {
        let api_key_set = self
            .service
            .parse::<VisionService>()
            .ok()
            .and_then(|service| self.api_key(service))
            .is_some();

        EnrichmentStatus {
            enabled: self.enabled,
            service: self.service.clone(),
            configured: self.validate().is_ok(),
            api_key_set,
        }
    }
}

/// Reportable state of the enrichment configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentStatus {
    /// Enrichment was requested
    pub enabled: bool,
    /// Requested service name
    pub service: String,
    /// Enrichment would actually run
    pub configured: bool,
    /// An API key exists for the requested service
    pub api_key_set: bool,
}

/// A remote service that describes an image as structured JSON
pub trait VisionBackend {
    /// Which configured service this backend talks to
    fn service(&self) -> VisionService;

    /// Describe the pattern input
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails or returns nothing usable
    fn describe(&self, input: &PatternInput) -> Result<Value>;
}

/// Extract the JSON object embedded in a free-text model reply
///
/// Takes the span from the first `{` to the last `}`. Replies without a
/// parseable object are wrapped as `{"raw": text}`.
pub fn parse_model_reply(text: &str) -> Value {
    text.find('{')
        .zip(text.rfind('}'))
        .filter(|(start, end)| start < end)
        .and_then(|(start, end)| text.get(start..=end))
        .and_then(|object| serde_json::from_str::<Value>(object).ok())
        .unwrap_or_else(|| serde_json::json!({ "raw": text }))
}

/// Local analysis plus optional remote description and advice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedAnalysis {
    /// Local heuristic analysis
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    /// Advice derived from the local analysis
    pub recommendations: Vec<String>,
    /// Remote description when a backend is configured and succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichment: Option<Value>,
}

/// Runs local analysis and, when available, a remote backend
pub struct AnalysisService {
    recognizer: PatternRecognizer,
    backend: Option<Box<dyn VisionBackend>>,
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::local()
    }
}

impl AnalysisService {
    /// Service running local analysis only
    pub fn local() -> Self {
        Self {
            recognizer: PatternRecognizer::default(),
            backend: None,
        }
    }

    /// Service that also consults `backend` if `config` enables its service
    pub fn with_backend(config: &EnrichmentConfig, backend: Box<dyn VisionBackend>) -> Self {
        let backend = match config.validate() {
            Ok(service) if service == backend.service() => Some(backend),
            Ok(service) => {
                tracing::warn!(
                    configured = service.name(),
                    backend = backend.service().name(),
                    "backend does not match configured service, using local analysis"
                );
                None
            }
            Err(err) => {
                tracing::debug!(%err, "remote enrichment unavailable");
                None
            }
        };

        Self {
            recognizer: PatternRecognizer::default(),
            backend,
        }
    }

    /// Whether a remote backend is attached
    pub const fn is_enriched(&self) -> bool {
        self.backend.is_some()
    }

    /// Analyze locally and attach any remote description
    pub fn analyze(&self, input: &PatternInput) -> EnrichedAnalysis {
        let analysis = self.recognizer.analyze(input);
        let recommendations = recommend(&analysis)
            .into_iter()
            .map(|r| r.message().to_string())
            .collect();

        let enrichment = self.backend.as_ref().and_then(|backend| {
            backend
                .describe(input)
                .inspect_err(|err| {
                    tracing::warn!(
                        service = backend.service().name(),
                        %err,
                        "remote enrichment failed, keeping local analysis"
                    );
                })
                .ok()
        });

        EnrichedAnalysis {
            analysis,
            recommendations,
            enrichment,
        }
    }
}
