pub mod brand_similarity;
pub mod entropy;
pub mod homograph;

use crate::config::ScoringConfig;
use crate::domain_utils::DomainUtils;
use serde::{Deserialize, Serialize};

/// Signals derived from a single input string. One value per analysis call;
/// nothing here touches the network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedFeatures {
    pub normalized_domain: String,
    pub entropy: f64,
    pub is_homograph: bool,
    /// IDN-encoded form of the domain, kept for display.
    pub punycode_form: String,
    /// 0.0 for clean or exact watch-list matches, otherwise the configured
    /// similarity risk.
    pub brand_similarity_risk: f64,
}

pub struct FeatureExtractor {
    watchlist: Vec<String>,
    max_edit_distance: usize,
    similarity_risk: f64,
}

impl FeatureExtractor {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            watchlist: config.watchlist.clone(),
            max_edit_distance: config.brand_similarity.max_edit_distance,
            similarity_risk: config.brand_similarity.similarity_risk,
        }
    }

    /// Straight-line feature extraction: normalize, then measure. Every step
    /// recovers locally, so this cannot fail for any input string.
    pub fn extract(&self, raw_input: &str) -> ExtractedFeatures {
        let normalized_domain = DomainUtils::normalize_domain(raw_input);
        let entropy = entropy::shannon_entropy(&normalized_domain);
        let (is_homograph, punycode_form) = homograph::check_homograph(&normalized_domain);
        let brand_similarity_risk = brand_similarity::brand_similarity_risk(
            &normalized_domain,
            &self.watchlist,
            self.max_edit_distance,
            self.similarity_risk,
        );

        log::debug!(
            "features for {:?}: domain={} entropy={:.2} homograph={} brand_risk={}",
            raw_input,
            normalized_domain,
            entropy,
            is_homograph,
            brand_similarity_risk
        );

        ExtractedFeatures {
            normalized_domain,
            entropy,
            is_homograph,
            punycode_form,
            brand_similarity_risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> FeatureExtractor {
        FeatureExtractor::new(&ScoringConfig::default())
    }

    #[test]
    fn test_extract_clean_brand_domain() {
        let features = extractor().extract("https://www.google.com/search");
        assert_eq!(features.normalized_domain, "google.com");
        assert!(!features.is_homograph);
        assert_eq!(features.brand_similarity_risk, 0.0);
    }

    #[test]
    fn test_extract_typosquatted_domain() {
        let features = extractor().extract("go0gle.com");
        assert_eq!(features.normalized_domain, "go0gle.com");
        assert_eq!(features.brand_similarity_risk, 0.85);
    }

    #[test]
    fn test_extract_never_fails_on_garbage() {
        let features = extractor().extract("::: definitely not a url :::");
        assert!(!features.normalized_domain.is_empty());
        assert!(features.entropy >= 0.0);
    }
}
