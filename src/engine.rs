use crate::config::ScoringConfig;
use crate::domain_utils::DomainUtils;
use crate::features::{ExtractedFeatures, FeatureExtractor};
use crate::machine_learning::UrlClassifier;
use crate::verdict::{self, RiskStatus};
use serde::{Deserialize, Serialize};

/// Final structured verdict for one analyzed target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskResult {
    pub target: String,
    /// Composite risk in [0, 1].
    pub final_score: f64,
    pub status: RiskStatus,
    pub color: String,
    /// Evidence-calibrated confidence in [0, 0.99].
    pub confidence: f64,
    /// Displayed classifier probability. Forced down alongside the score
    /// when the trusted-infrastructure override fires.
    pub classifier_probability: f64,
    pub features: ExtractedFeatures,
}

/// The risk-scoring engine. Holds the configuration and the classifier
/// trained once at construction; immutable afterwards, so shared references
/// can score concurrently.
pub struct RiskEngine {
    config: ScoringConfig,
    extractor: FeatureExtractor,
    classifier: UrlClassifier,
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl RiskEngine {
    pub fn new(config: ScoringConfig) -> Self {
        let extractor = FeatureExtractor::new(&config);
        let classifier = UrlClassifier::train(&config.training_set, &config.classifier);
        Self {
            config,
            extractor,
            classifier,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Cleaned host for a raw input, for callers needing it independently
    /// of a full scoring pass.
    pub fn normalize_domain(&self, raw_input: &str) -> String {
        DomainUtils::normalize_domain(raw_input)
    }

    /// Score one target. `blacklist_hits` and `provider_label` are
    /// externally fetched signals; pass 0 and "" when unknown. Never fails,
    /// whatever the input looks like.
    pub fn score(&self, raw_input: &str, blacklist_hits: u32, provider_label: &str) -> RiskResult {
        let features = self.extractor.extract(raw_input);
        // The classifier deliberately sees the raw input, not the
        // normalized domain
        let ia_prob = self.classifier.predict(raw_input);
        let weights = &self.config.weights;

        let mut base =
            ia_prob * weights.classifier_weight
                + features.brand_similarity_risk * weights.brand_weight;
        let mut displayed_prob = ia_prob;

        // Trusted infrastructure suppresses the local signals, but only
        // while no external blacklist engine disagrees
        let trust_override = blacklist_hits == 0
            && self
                .config
                .trusted_providers
                .iter()
                .any(|p| provider_label.contains(p.as_str()));
        if trust_override {
            base = weights.trusted_score;
            displayed_prob = weights.trusted_score;
        }

        if features.is_homograph {
            base += weights.homograph_penalty;
        }
        if features.entropy > weights.entropy_threshold {
            base += weights.entropy_penalty;
        }
        // Any brand-similarity signal guarantees at least medium risk
        if features.brand_similarity_risk > 0.0 {
            base = base.max(weights.brand_floor);
        }
        if blacklist_hits > 0 {
            base += weights.blacklist_base_penalty
                + blacklist_hits as f64 * weights.blacklist_per_hit;
        }

        let final_score = base.min(1.0);

        let status = verdict::map_status(final_score, blacklist_hits, &self.config.thresholds);
        let evidence =
            verdict::evidence_count(&features, weights.entropy_threshold, blacklist_hits);
        let confidence = verdict::derive_confidence(
            evidence,
            blacklist_hits,
            final_score,
            trust_override,
            &self.config.confidence,
            self.config.thresholds.high_blacklist_hits,
        );

        log::debug!(
            "verdict for {:?}: score={:.3} status={} confidence={:.2} (evidence={}, hits={})",
            raw_input,
            final_score,
            status.label(),
            confidence,
            evidence,
            blacklist_hits
        );

        RiskResult {
            target: raw_input.to_string(),
            final_score,
            status,
            color: status.color().to_string(),
            confidence,
            classifier_probability: displayed_prob,
            features,
        }
    }
}
