use url::Url;

/// Minimal domain normalization utilities
pub struct DomainUtils;

impl DomainUtils {
    /// Normalize arbitrary input down to a bare host. Lower-cases, assumes
    /// https when no scheme is given, takes the URL host, and strips a
    /// leading "www.". Unparsable input falls back to the lower-cased raw
    /// string so the caller always gets something to score.
    pub fn normalize_domain(raw: &str) -> String {
        let cleaned = raw.trim().to_lowercase();

        let with_scheme = if cleaned.starts_with("http://") || cleaned.starts_with("https://") {
            cleaned.clone()
        } else {
            format!("https://{}", cleaned)
        };

        match Url::parse(&with_scheme) {
            Ok(parsed) => match parsed.host_str() {
                Some(host) => Self::canonicalize_domain(host),
                None => cleaned,
            },
            Err(e) => {
                log::debug!("falling back to raw input, URL parse failed: {}", e);
                cleaned
            }
        }
    }

    /// Canonicalize domain (remove www prefix)
    pub fn canonicalize_domain(domain: &str) -> String {
        let domain_lower = domain.to_lowercase();
        if let Some(stripped) = domain_lower.strip_prefix("www.") {
            stripped.to_string()
        } else {
            domain_lower
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_domain_full_url() {
        assert_eq!(
            DomainUtils::normalize_domain("HTTPS://WWW.Example.COM/path"),
            "example.com"
        );
    }

    #[test]
    fn test_normalize_domain_bare_host() {
        assert_eq!(DomainUtils::normalize_domain("example.com"), "example.com");
        assert_eq!(
            DomainUtils::normalize_domain("  www.example.com  "),
            "example.com"
        );
    }

    #[test]
    fn test_normalize_domain_keeps_subdomains() {
        assert_eq!(
            DomainUtils::normalize_domain("http://login.bank.example.com/reset"),
            "login.bank.example.com"
        );
    }

    #[test]
    fn test_normalize_domain_fails_open() {
        // No host component to extract, so the raw input comes back
        assert_eq!(DomainUtils::normalize_domain("not a url"), "not a url");
        assert_eq!(DomainUtils::normalize_domain(""), "");
    }

    #[test]
    fn test_canonicalize_domain() {
        assert_eq!(
            DomainUtils::canonicalize_domain("www.example.com"),
            "example.com"
        );
        assert_eq!(
            DomainUtils::canonicalize_domain("example.com"),
            "example.com"
        );
    }
}
