use serde::{Deserialize, Serialize};

/// Full scoring configuration. Every override rule constant is data rather
/// than code so deployments can re-tune thresholds without a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Brand domains the engine protects against imitation.
    #[serde(default = "default_watchlist")]
    pub watchlist: Vec<String>,
    /// Provider/ASN label substrings that suppress false positives on major
    /// hosting infrastructure. Matched case-sensitively.
    #[serde(default = "default_trusted_providers")]
    pub trusted_providers: Vec<String>,
    #[serde(default)]
    pub weights: ScoreWeights,
    #[serde(default)]
    pub brand_similarity: BrandSimilarityParams,
    #[serde(default)]
    pub thresholds: VerdictThresholds,
    #[serde(default)]
    pub confidence: ConfidenceParams,
    #[serde(default)]
    pub classifier: ClassifierParams,
    /// Built-in labeled set used to train the classifier when no external
    /// model is supplied.
    #[serde(default = "default_training_set")]
    pub training_set: Vec<TrainingExample>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight of the classifier probability in the base score.
    pub classifier_weight: f64,
    /// Weight of the brand-similarity signal in the base score.
    pub brand_weight: f64,
    /// Added when the domain's IDN encoding carries the ACE prefix.
    pub homograph_penalty: f64,
    /// Added when entropy exceeds `entropy_threshold`.
    pub entropy_penalty: f64,
    pub entropy_threshold: f64,
    /// Minimum score whenever any brand-similarity signal fired.
    pub brand_floor: f64,
    /// Added once when the external blacklist reports any hits.
    pub blacklist_base_penalty: f64,
    /// Added per blacklist hit.
    pub blacklist_per_hit: f64,
    /// Score forced when the trusted-infrastructure override fires.
    pub trusted_score: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            classifier_weight: 0.3,
            brand_weight: 0.7,
            homograph_penalty: 0.5,
            entropy_penalty: 0.3,
            entropy_threshold: 3.8,
            brand_floor: 0.45,
            blacklist_base_penalty: 0.3,
            blacklist_per_hit: 0.1,
            trusted_score: 0.01,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandSimilarityParams {
    /// Maximum Levenshtein distance still considered an imitation.
    pub max_edit_distance: usize,
    /// Risk assigned when a watch-list entry is within tolerance.
    pub similarity_risk: f64,
}

impl Default for BrandSimilarityParams {
    fn default() -> Self {
        BrandSimilarityParams {
            max_edit_distance: 2,
            similarity_risk: 0.85,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictThresholds {
    pub high_score: f64,
    pub medium_score: f64,
    /// Blacklist hit count that forces a high-risk verdict on its own.
    pub high_blacklist_hits: u32,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        VerdictThresholds {
            high_score: 0.7,
            medium_score: 0.4,
            high_blacklist_hits: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceParams {
    /// Baseline confidence with zero corroborating signals.
    pub base: f64,
    /// Added per corroborating evidence signal.
    pub per_evidence: f64,
    /// Cap for evidence-derived confidence.
    pub evidence_cap: f64,
    /// Floor once the external blacklist corroborates at all.
    pub corroborated_floor: f64,
    /// Confidence when the blacklist count reaches the high-risk threshold.
    pub authoritative: f64,
    /// Scores below this cap confidence at `low_score_cap`.
    pub low_score_threshold: f64,
    pub low_score_cap: f64,
    /// Confidence forced by the trusted-infrastructure override.
    pub trusted_override: f64,
}

impl Default for ConfidenceParams {
    fn default() -> Self {
        ConfidenceParams {
            base: 0.30,
            per_evidence: 0.15,
            evidence_cap: 0.85,
            corroborated_floor: 0.80,
            authoritative: 0.99,
            low_score_threshold: 0.2,
            low_score_cap: 0.30,
            trusted_override: 0.01,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierParams {
    pub trees: usize,
    pub seed: u64,
    pub min_ngram: usize,
    pub max_ngram: usize,
}

impl Default for ClassifierParams {
    fn default() -> Self {
        ClassifierParams {
            trees: 100,
            seed: 42,
            min_ngram: 2,
            max_ngram: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingExample {
    pub text: String,
    pub phishing: bool,
}

impl TrainingExample {
    pub fn new(text: &str, phishing: bool) -> Self {
        TrainingExample {
            text: text.to_string(),
            phishing,
        }
    }
}

fn default_watchlist() -> Vec<String> {
    [
        "google.com.br",
        "google.com",
        "itau.com.br",
        "bradesco.com.br",
        "facebook.com",
        "netflix.com",
        "nubank.com.br",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_trusted_providers() -> Vec<String> {
    vec!["Google".to_string(), "Cloudflare".to_string()]
}

fn default_training_set() -> Vec<TrainingExample> {
    vec![
        TrainingExample::new("google.com.br", false),
        TrainingExample::new("itau.com.br", false),
        TrainingExample::new("facebook.com", false),
        TrainingExample::new("go0gle.com.br", true),
        TrainingExample::new("itau-seguranca.tk", true),
        TrainingExample::new("login-confirmar.net", true),
    ]
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            watchlist: default_watchlist(),
            trusted_providers: default_trusted_providers(),
            weights: ScoreWeights::default(),
            brand_similarity: BrandSimilarityParams::default(),
            thresholds: VerdictThresholds::default(),
            confidence: ConfidenceParams::default(),
            classifier: ClassifierParams::default(),
            training_set: default_training_set(),
        }
    }
}

impl ScoringConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ScoringConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject configurations the engine cannot score with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.training_set.is_empty() {
            anyhow::bail!("training_set must not be empty");
        }
        if !self.training_set.iter().any(|e| e.phishing)
            || !self.training_set.iter().any(|e| !e.phishing)
        {
            anyhow::bail!("training_set needs at least one example of each class");
        }
        if self.classifier.trees == 0 {
            anyhow::bail!("classifier.trees must be at least 1");
        }
        if self.classifier.min_ngram == 0 || self.classifier.min_ngram > self.classifier.max_ngram {
            anyhow::bail!("classifier ngram range is invalid");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ScoringConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.training_set.len(), 6);
        assert_eq!(config.classifier.trees, 100);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = ScoringConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.watchlist, config.watchlist);
        assert_eq!(parsed.classifier.seed, config.classifier.seed);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "watchlist:\n  - example.com\n";
        let config: ScoringConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.watchlist, vec!["example.com".to_string()]);
        assert_eq!(config.weights.brand_weight, 0.7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_single_class_training_set_rejected() {
        let mut config = ScoringConfig::default();
        config.training_set.retain(|e| !e.phishing);
        assert!(config.validate().is_err());
    }
}
