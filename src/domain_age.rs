use serde::{Deserialize, Serialize};

/// Registration age below which a domain is considered recently created.
pub const RECENT_DOMAIN_DAYS: u32 = 30;
/// Registration age below which the TLS certificate is necessarily fresh.
pub const BRAND_NEW_DOMAIN_DAYS: u32 = 7;

/// Assessment of a domain's registration age. The age itself is an
/// externally fetched signal (WHOIS belongs to the caller); this module
/// only maps it to a display verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainAgeAssessment {
    /// Registered within the last week.
    BrandNew,
    /// Registered within the last month.
    Recent,
    Established,
    /// No registration data was available.
    Unknown,
}

impl DomainAgeAssessment {
    pub fn label(&self) -> &'static str {
        match self {
            DomainAgeAssessment::BrandNew => "registered this week",
            DomainAgeAssessment::Recent => "recently registered",
            DomainAgeAssessment::Established => "established domain",
            DomainAgeAssessment::Unknown => "registration age unknown",
        }
    }

    /// Whether the age alone warrants a warning to the user.
    pub fn is_suspicious(&self) -> bool {
        matches!(
            self,
            DomainAgeAssessment::BrandNew | DomainAgeAssessment::Recent
        )
    }
}

pub fn assess(age_days: Option<u32>) -> DomainAgeAssessment {
    match age_days {
        Some(days) if days < BRAND_NEW_DOMAIN_DAYS => DomainAgeAssessment::BrandNew,
        Some(days) if days < RECENT_DOMAIN_DAYS => DomainAgeAssessment::Recent,
        Some(_) => DomainAgeAssessment::Established,
        None => DomainAgeAssessment::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_boundaries() {
        assert_eq!(assess(Some(0)), DomainAgeAssessment::BrandNew);
        assert_eq!(assess(Some(6)), DomainAgeAssessment::BrandNew);
        assert_eq!(assess(Some(7)), DomainAgeAssessment::Recent);
        assert_eq!(assess(Some(29)), DomainAgeAssessment::Recent);
        assert_eq!(assess(Some(30)), DomainAgeAssessment::Established);
        assert_eq!(assess(Some(7300)), DomainAgeAssessment::Established);
    }

    #[test]
    fn test_missing_age_is_unknown_not_suspicious() {
        let assessment = assess(None);
        assert_eq!(assessment, DomainAgeAssessment::Unknown);
        assert!(!assessment.is_suspicious());
    }

    #[test]
    fn test_young_domains_are_suspicious() {
        assert!(assess(Some(3)).is_suspicious());
        assert!(assess(Some(15)).is_suspicious());
        assert!(!assess(Some(400)).is_suspicious());
    }
}
