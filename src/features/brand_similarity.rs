use strsim::levenshtein;

/// Typosquatting check against the brand watch-list.
///
/// The list is scanned in declaration order and the first qualifying entry
/// decides the result: an exact match is trusted outright (0.0), anything
/// within `max_edit_distance` returns `similarity_risk`. Entries after the
/// first qualifying one are never consulted.
pub fn brand_similarity_risk(
    domain: &str,
    watchlist: &[String],
    max_edit_distance: usize,
    similarity_risk: f64,
) -> f64 {
    for target in watchlist {
        if domain == target {
            return 0.0;
        }
        if levenshtein(domain, target) <= max_edit_distance {
            return similarity_risk;
        }
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn watchlist() -> Vec<String> {
        vec![
            "google.com".to_string(),
            "itau.com.br".to_string(),
            "facebook.com".to_string(),
        ]
    }

    #[test]
    fn test_exact_match_is_trusted() {
        assert_eq!(brand_similarity_risk("google.com", &watchlist(), 2, 0.85), 0.0);
    }

    #[test]
    fn test_close_imitation_is_flagged() {
        assert_eq!(brand_similarity_risk("go0gle.com", &watchlist(), 2, 0.85), 0.85);
        assert_eq!(brand_similarity_risk("faceb00k.com", &watchlist(), 2, 0.85), 0.85);
    }

    #[test]
    fn test_unrelated_domain_is_clean() {
        assert_eq!(
            brand_similarity_risk("wikipedia.org", &watchlist(), 2, 0.85),
            0.0
        );
    }

    #[test]
    fn test_distance_beyond_tolerance_is_clean() {
        // Same brand name, but structurally far from every watch-list entry
        assert_eq!(
            brand_similarity_risk("itau-seguranca.tk", &watchlist(), 2, 0.85),
            0.0
        );
    }

    #[test]
    fn test_first_qualifying_entry_wins() {
        // Exact match on a later entry is never reached when an earlier
        // entry is already within edit-distance tolerance.
        let list = vec!["gooole.com".to_string(), "google.com".to_string()];
        assert_eq!(brand_similarity_risk("google.com", &list, 2, 0.85), 0.85);
    }
}
