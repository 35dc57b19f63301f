use serde::{Deserialize, Serialize};

/// Outcome of validating a pasted Authentication-Results header blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStatus {
    /// At least one of SPF, DKIM or DMARC reports a pass.
    Authenticated,
    /// Authentication results are present but none of them pass.
    Failed,
    /// No recognizable authentication results in the input.
    Missing,
}

impl AuthStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AuthStatus::Authenticated => "sender authenticated",
            AuthStatus::Failed => "authentication failed",
            AuthStatus::Missing => "no authentication results",
        }
    }
}

const AUTH_MECHANISMS: [&str; 3] = ["spf", "dkim", "dmarc"];

/// Scan raw header text for SPF/DKIM/DMARC verdicts. Purely lexical — the
/// caller pastes whatever their mail client exposes and this never fails.
pub fn authenticate(header_blob: &str) -> AuthStatus {
    let content = header_blob.to_lowercase();

    let mut any_mechanism = false;
    for mechanism in AUTH_MECHANISMS {
        if content.contains(&format!("{}=pass", mechanism)) {
            return AuthStatus::Authenticated;
        }
        if content.contains(&format!("{}=", mechanism)) {
            any_mechanism = true;
        }
    }

    if any_mechanism {
        AuthStatus::Failed
    } else {
        AuthStatus::Missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spf_pass_authenticates() {
        assert_eq!(
            authenticate("Authentication-Results: mx.example.com; spf=pass smtp.mailfrom=example.com"),
            AuthStatus::Authenticated
        );
    }

    #[test]
    fn test_dkim_pass_authenticates_case_insensitively() {
        assert_eq!(
            authenticate("ARC-Authentication-Results: i=1; DKIM=PASS header.d=example.com"),
            AuthStatus::Authenticated
        );
    }

    #[test]
    fn test_all_failures_report_failed() {
        assert_eq!(
            authenticate("spf=fail (sender IP is 203.0.113.7); dkim=none; dmarc=fail"),
            AuthStatus::Failed
        );
    }

    #[test]
    fn test_unrelated_text_reports_missing() {
        assert_eq!(authenticate("Subject: hello world"), AuthStatus::Missing);
        assert_eq!(authenticate(""), AuthStatus::Missing);
    }
}
