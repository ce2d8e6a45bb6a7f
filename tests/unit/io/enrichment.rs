//! Tests for enrichment configuration and the analysis service

#[cfg(test)]
mod tests {
    use kolam::KolamError;
    use kolam::analysis::recognizer::PatternInput;
    use kolam::geometry::point::Point;
    use kolam::io::enrichment::{
        AnalysisService, EnrichmentConfig, VisionBackend, VisionService, parse_model_reply,
    };
    use serde_json::{Value, json};
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> EnrichmentConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        EnrichmentConfig::from_lookup(|name| map.get(name).cloned())
    }

    struct StubBackend {
        service: VisionService,
        reply: Option<Value>,
    }

    impl VisionBackend for StubBackend {
        fn service(&self) -> VisionService {
            self.service
        }

        fn describe(&self, _input: &PatternInput) -> kolam::Result<Value> {
            self.reply.clone().ok_or_else(|| KolamError::Enrichment {
                service: self.service.name().to_string(),
                reason: "stub failure".to_string(),
            })
        }
    }

    fn square() -> PatternInput {
        PatternInput::Points(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ])
    }

    // Tests defaults when nothing is configured
    // Verified by enabling enrichment by default
    #[test]
    fn test_defaults() {
        let cfg = config(&[]);
        assert!(!cfg.enabled);
        assert_eq!(cfg.service, "openai");

        let status = cfg.status();
        assert!(!status.enabled);
        assert!(!status.configured);
        assert!(!status.api_key_set);
    }

    // Tests a complete configuration validates to its service
    // Verified by checking the wrong key variable
    #[test]
    fn test_configured_service() {
        let cfg = config(&[
            ("ENABLE_AI_ANALYSIS", "true"),
            ("AI_SERVICE", "Anthropic"),
            ("ANTHROPIC_API_KEY", "secret"),
        ]);

        assert_eq!(cfg.validate().ok(), Some(VisionService::Anthropic));
        let status = cfg.status();
        assert!(status.configured && status.api_key_set);
        assert_eq!(status.service, "anthropic");
    }

    // Tests validation failures for disabled, unknown and keyless services
    // Verified by skipping the API key check
    #[test]
    fn test_validation_failures() {
        assert!(config(&[("OPENAI_API_KEY", "k")]).validate().is_err());
        assert!(config(&[("ENABLE_AI_ANALYSIS", "yes"), ("OPENAI_API_KEY", "k")])
            .validate()
            .is_err());

        let unknown = config(&[("ENABLE_AI_ANALYSIS", "true"), ("AI_SERVICE", "bing")]);
        assert!(matches!(unknown.validate(), Err(KolamError::Enrichment { .. })));
        assert!(!unknown.status().api_key_set);

        let keyless = config(&[
            ("ENABLE_AI_ANALYSIS", "true"),
            ("AI_SERVICE", "google"),
            ("GOOGLE_VISION_API_KEY", ""),
        ]);
        let message = keyless.validate().err().map(|e| e.to_string()).unwrap_or_default();
        assert!(message.contains("GOOGLE_VISION_API_KEY"));
    }

    // Tests status serializes with camelCase keys
    // Verified by removing rename_all
    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_value(config(&[]).status()).expect("status serializes");
        assert_eq!(
            json,
            json!({"enabled": false, "service": "openai", "configured": false, "apiKeySet": false})
        );
    }

    // Tests JSON is extracted from free-text replies
    // Verified by parsing the whole reply
    #[test]
    fn test_parse_model_reply() {
        let reply = "Here you go:\n{\"patternType\": \"mandala\", \"dots\": 12}\nEnjoy!";
        assert_eq!(
            parse_model_reply(reply),
            json!({"patternType": "mandala", "dots": 12})
        );

        assert_eq!(parse_model_reply("no json here"), json!({"raw": "no json here"}));
        assert_eq!(parse_model_reply("} {"), json!({"raw": "} {"}));
    }

    // Tests local analysis carries recommendations and no enrichment
    // Verified by attaching an empty enrichment object
    #[test]
    fn test_local_service() {
        let service = AnalysisService::local();
        assert!(!service.is_enriched());

        let result = service.analyze(&square());
        assert!(result.enrichment.is_none());
        assert!(!result.recommendations.is_empty());

        let json = serde_json::to_value(&result).expect("result serializes");
        assert!(json.get("patternType").is_some());
        assert!(json.get("enrichment").is_none());
    }

    // Tests a configured backend contributes its description
    // Verified by ignoring the backend reply
    #[test]
    fn test_backend_enrichment() {
        let cfg = config(&[("ENABLE_AI_ANALYSIS", "true"), ("OPENAI_API_KEY", "k")]);
        let backend = StubBackend {
            service: VisionService::OpenAi,
            reply: Some(json!({"style": "pulli"})),
        };

        let service = AnalysisService::with_backend(&cfg, Box::new(backend));
        assert!(service.is_enriched());
        assert_eq!(service.analyze(&square()).enrichment, Some(json!({"style": "pulli"})));
    }

    // Tests backend failures and mismatches keep the local analysis
    // Verified by propagating the backend error
    #[test]
    fn test_backend_failure_falls_back() {
        let cfg = config(&[("ENABLE_AI_ANALYSIS", "true"), ("OPENAI_API_KEY", "k")]);
        let failing = StubBackend {
            service: VisionService::OpenAi,
            reply: None,
        };
        let result = AnalysisService::with_backend(&cfg, Box::new(failing)).analyze(&square());
        assert!(result.enrichment.is_none());
        assert_eq!(result.analysis.dots.len(), 4);

        let mismatched = StubBackend {
            service: VisionService::Google,
            reply: Some(json!({})),
        };
        assert!(!AnalysisService::with_backend(&cfg, Box::new(mismatched)).is_enriched());
    }

    // Tests service names round-trip through parsing
    // Verified by matching names case-sensitively
    #[test]
    fn test_service_names() {
        for service in [VisionService::OpenAi, VisionService::Google, VisionService::Anthropic] {
            assert_eq!(service.to_string().parse::<VisionService>().ok(), Some(service));
        }
        assert_eq!(VisionService::Google.key_variable(), "GOOGLE_VISION_API_KEY");
    }
}
