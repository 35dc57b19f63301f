/// ACE prefix marking a Punycode-encoded DNS label.
const ACE_PREFIX: &str = "xn--";

/// Detect homograph impersonation through IDN encoding: a domain whose
/// ASCII-compatible form carries the ACE prefix is rendering characters the
/// literal form hides. Returns the encoded form for display alongside the
/// flag. Encoding failures report no homograph and echo the original, so
/// hostile input degrades to the other signals instead of an error.
pub fn check_homograph(domain: &str) -> (bool, String) {
    match idna::domain_to_ascii(domain) {
        Ok(punycode) => {
            let is_homograph = punycode.contains(ACE_PREFIX);
            (is_homograph, punycode)
        }
        Err(e) => {
            log::debug!("IDN encoding failed for {:?}: {:?}", domain, e);
            (false, domain.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii_domain_is_not_homograph() {
        let (flag, puny) = check_homograph("google.com");
        assert!(!flag);
        assert_eq!(puny, "google.com");
    }

    #[test]
    fn test_unicode_lookalike_is_flagged() {
        // Cyrillic small a in place of Latin a
        let (flag, puny) = check_homograph("p\u{0430}ypal.com");
        assert!(flag);
        assert!(puny.starts_with(ACE_PREFIX));
    }

    #[test]
    fn test_already_encoded_ace_form_is_flagged() {
        let (flag, puny) = check_homograph("xn--exmple-cua.com");
        assert!(flag);
        assert!(puny.contains(ACE_PREFIX));
    }

    #[test]
    fn test_encoding_failure_fails_open() {
        // Invalid Punycode in an ACE label makes the encoder reject it
        let (flag, puny) = check_homograph("xn--999999999.com");
        assert!(!flag);
        assert_eq!(puny, "xn--999999999.com");
    }
}
