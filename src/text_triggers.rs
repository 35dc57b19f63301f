/// Suspicious-phrase scan for pasted message bodies. The default phrase set
/// covers the urgency, credential-harvesting and prize-bait patterns common
/// in Brazilian and English-language phishing mail.
pub struct TriggerScanner {
    phrases: Vec<String>,
}

impl Default for TriggerScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TriggerScanner {
    pub fn new() -> Self {
        let phrases = [
            // urgency
            "urgent",
            "urgente",
            "act now",
            "immediately",
            "sua conta sera bloqueada",
            "conta bloqueada",
            "limited time",
            // credential harvesting
            "verify your account",
            "confirme sua senha",
            "confirmar senha",
            "atualize seus dados",
            "click here",
            "clique aqui",
            "suspended",
            "senha expirada",
            // prize bait
            "you have won",
            "voce ganhou",
            "premio",
            "congratulations",
            "winner",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        Self { phrases }
    }

    pub fn with_phrases(phrases: Vec<String>) -> Self {
        Self { phrases }
    }

    /// Return every configured phrase found in `text`, in configuration
    /// order. An empty result means no obvious fraud patterns.
    pub fn scan(&self, text: &str) -> Vec<String> {
        let haystack = text.to_lowercase();
        self.phrases
            .iter()
            .filter(|phrase| haystack.contains(phrase.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_urgency_and_credentials() {
        let scanner = TriggerScanner::new();
        let hits = scanner.scan("URGENT: verify your account or it will be suspended");
        assert!(hits.contains(&"urgent".to_string()));
        assert!(hits.contains(&"verify your account".to_string()));
        assert!(hits.contains(&"suspended".to_string()));
    }

    #[test]
    fn test_detects_portuguese_patterns() {
        let scanner = TriggerScanner::new();
        let hits = scanner.scan("Clique aqui para confirmar senha, sua conta bloqueada!");
        assert!(hits.contains(&"clique aqui".to_string()));
        assert!(hits.contains(&"confirmar senha".to_string()));
        assert!(hits.contains(&"conta bloqueada".to_string()));
    }

    #[test]
    fn test_benign_text_has_no_hits() {
        let scanner = TriggerScanner::new();
        assert!(scanner.scan("Meeting notes attached, see you Friday.").is_empty());
        assert!(scanner.scan("").is_empty());
    }

    #[test]
    fn test_custom_phrase_list() {
        let scanner = TriggerScanner::with_phrases(vec!["wire transfer".to_string()]);
        assert_eq!(scanner.scan("Please approve this WIRE TRANSFER today").len(), 1);
    }
}
