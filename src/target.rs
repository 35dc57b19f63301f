use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::sync::OnceLock;

/// What kind of indicator the user pasted in. Drives which external
/// reputation endpoints the caller should consult; the scoring engine
/// itself treats every kind the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Url,
    Ip,
    Email,
    /// MD5, SHA-1 or SHA-256 digest.
    Hash,
    Domain,
}

impl TargetKind {
    pub fn label(&self) -> &'static str {
        match self {
            TargetKind::Url => "URL",
            TargetKind::Ip => "IP address",
            TargetKind::Email => "email address",
            TargetKind::Hash => "file hash",
            TargetKind::Domain => "domain",
        }
    }
}

fn hash_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:[a-fA-F0-9]{32}|[a-fA-F0-9]{40}|[a-fA-F0-9]{64})$")
            .expect("hash pattern is valid")
    })
}

/// Classify a raw indicator. Checks run from most to least specific, so a
/// digest is never mistaken for a domain and an IP literal is never treated
/// as a URL host.
pub fn classify(raw: &str) -> TargetKind {
    let trimmed = raw.trim();

    if hash_pattern().is_match(trimmed) {
        return TargetKind::Hash;
    }
    if trimmed.parse::<IpAddr>().is_ok() {
        return TargetKind::Ip;
    }
    if let Some((local, domain)) = trimmed.split_once('@') {
        if trimmed.matches('@').count() == 1
            && !local.is_empty()
            && domain.contains('.')
            && !domain.contains('/')
        {
            return TargetKind::Email;
        }
    }
    if trimmed.contains("://") || trimmed.contains('/') {
        return TargetKind::Url;
    }
    TargetKind::Domain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_hashes() {
        assert_eq!(classify("d41d8cd98f00b204e9800998ecf8427e"), TargetKind::Hash);
        assert_eq!(
            classify("da39a3ee5e6b4b0d3255bfef95601890afd80709"),
            TargetKind::Hash
        );
        assert_eq!(
            classify("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
            TargetKind::Hash
        );
    }

    #[test]
    fn test_classify_ip_literals() {
        assert_eq!(classify("8.8.8.8"), TargetKind::Ip);
        assert_eq!(classify("2606:4700:4700::1111"), TargetKind::Ip);
    }

    #[test]
    fn test_classify_emails() {
        assert_eq!(classify("user@example.com"), TargetKind::Email);
        assert_eq!(classify("a.b@sub.example.co.uk"), TargetKind::Email);
    }

    #[test]
    fn test_classify_urls_and_domains() {
        assert_eq!(classify("https://example.com/login"), TargetKind::Url);
        assert_eq!(classify("example.com/login"), TargetKind::Url);
        assert_eq!(classify("example.com"), TargetKind::Domain);
        assert_eq!(classify("www.site.com.br"), TargetKind::Domain);
    }

    #[test]
    fn test_classify_odd_input_defaults_to_domain() {
        assert_eq!(classify(""), TargetKind::Domain);
        assert_eq!(classify("@@not-an-email@@"), TargetKind::Domain);
    }
}
