use crate::config::{ConfidenceParams, VerdictThresholds};
use crate::features::ExtractedFeatures;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskStatus {
    Low,
    Medium,
    High,
}

impl RiskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RiskStatus::Low => "LOW RISK",
            RiskStatus::Medium => "MEDIUM RISK",
            RiskStatus::High => "HIGH RISK",
        }
    }

    /// Display color tag for the verdict banner.
    pub fn color(&self) -> &'static str {
        match self {
            RiskStatus::Low => "green",
            RiskStatus::Medium => "orange",
            RiskStatus::High => "red",
        }
    }
}

/// First matching rule wins: an authoritative blacklist count forces high
/// risk no matter how benign the computed score looks, and any blacklist
/// corroboration rules out a low verdict.
pub fn map_status(
    final_score: f64,
    blacklist_hits: u32,
    thresholds: &VerdictThresholds,
) -> RiskStatus {
    if final_score >= thresholds.high_score || blacklist_hits >= thresholds.high_blacklist_hits {
        RiskStatus::High
    } else if final_score >= thresholds.medium_score || blacklist_hits > 0 {
        RiskStatus::Medium
    } else {
        RiskStatus::Low
    }
}

/// Number of independent signals corroborating the verdict (0-4).
pub fn evidence_count(
    features: &ExtractedFeatures,
    entropy_threshold: f64,
    blacklist_hits: u32,
) -> u32 {
    let mut count = 0;
    if features.brand_similarity_risk > 0.0 {
        count += 1;
    }
    if features.is_homograph {
        count += 1;
    }
    if features.entropy > entropy_threshold {
        count += 1;
    }
    if blacklist_hits > 0 {
        count += 1;
    }
    count
}

/// Calibrated confidence for the verdict, derived from the volume of
/// evidence rather than from the score itself. The trusted-infrastructure
/// override wins outright when active.
pub fn derive_confidence(
    evidence: u32,
    blacklist_hits: u32,
    final_score: f64,
    trust_override_active: bool,
    params: &ConfidenceParams,
    authoritative_hits: u32,
) -> f64 {
    if trust_override_active {
        return params.trusted_override;
    }

    let mut confidence =
        (params.base + evidence as f64 * params.per_evidence).min(params.evidence_cap);

    // External blacklist engines carry more authority than local signals
    if blacklist_hits >= authoritative_hits {
        confidence = params.authoritative;
    } else if blacklist_hits > 0 {
        confidence = confidence.max(params.corroborated_floor);
    }

    // A near-zero score means an absence of signals; confidence must say so
    if final_score < params.low_score_threshold {
        confidence = confidence.min(params.low_score_cap);
    }

    confidence
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> VerdictThresholds {
        VerdictThresholds::default()
    }

    fn params() -> ConfidenceParams {
        ConfidenceParams::default()
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(map_status(0.1, 0, &thresholds()), RiskStatus::Low);
        assert_eq!(map_status(0.4, 0, &thresholds()), RiskStatus::Medium);
        assert_eq!(map_status(0.69, 0, &thresholds()), RiskStatus::Medium);
        assert_eq!(map_status(0.7, 0, &thresholds()), RiskStatus::High);
    }

    #[test]
    fn test_blacklist_overrides_score() {
        // Any corroboration rules out LOW, five engines force HIGH
        assert_eq!(map_status(0.0, 1, &thresholds()), RiskStatus::Medium);
        assert_eq!(map_status(0.0, 5, &thresholds()), RiskStatus::High);
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(RiskStatus::Low.color(), "green");
        assert_eq!(RiskStatus::Medium.color(), "orange");
        assert_eq!(RiskStatus::High.color(), "red");
    }

    #[test]
    fn test_confidence_scales_with_evidence() {
        assert_eq!(derive_confidence(0, 0, 0.5, false, &params(), 5), 0.30);
        assert!((derive_confidence(1, 0, 0.5, false, &params(), 5) - 0.45).abs() < 1e-9);
        assert!((derive_confidence(2, 0, 0.5, false, &params(), 5) - 0.60).abs() < 1e-9);
        // Capped at 0.85 even with all four signals
        assert_eq!(derive_confidence(4, 0, 0.5, false, &params(), 5), 0.85);
    }

    #[test]
    fn test_blacklist_raises_confidence() {
        let c = derive_confidence(1, 2, 0.8, false, &params(), 5);
        assert_eq!(c, 0.80);
        let c = derive_confidence(0, 5, 1.0, false, &params(), 5);
        assert_eq!(c, 0.99);
    }

    #[test]
    fn test_low_score_caps_confidence() {
        let c = derive_confidence(1, 0, 0.1, false, &params(), 5);
        assert_eq!(c, 0.30);
    }

    #[test]
    fn test_trust_override_wins_outright() {
        let c = derive_confidence(3, 0, 0.01, true, &params(), 5);
        assert_eq!(c, 0.01);
    }
}
