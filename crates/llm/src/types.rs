//! Provider identifiers and the model catalogue offered to users.

/// Gemini models users may choose between.
pub const SUPPORTED_GEMINI_MODELS: [&str; 3] =
    ["gemini-1.5-flash", "gemini-1.5-pro", "gemini-1.0-pro"];

/// Model used when none is chosen.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Whether `model` is one of the enumerated Gemini choices.
pub fn is_supported_model(model: &str) -> bool {
    SUPPORTED_GEMINI_MODELS.contains(&model)
}

/// Provider type enum for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    Gemini,
    Ollama,
}

impl ProviderType {
    /// Parse provider type from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gemini" => Some(Self::Gemini),
            "ollama" => Some(Self::Ollama),
            _ => None,
        }
    }

    /// Get the canonical provider name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Ollama => "ollama",
        }
    }

    /// Whether the provider refuses to run without an API key.
    pub fn requires_api_key(&self) -> bool {
        matches!(self, Self::Gemini)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_type_parsing() {
        assert_eq!(ProviderType::parse("gemini"), Some(ProviderType::Gemini));
        assert_eq!(ProviderType::parse("Gemini"), Some(ProviderType::Gemini));
        assert_eq!(ProviderType::parse("google"), None);
        assert_eq!(ProviderType::parse("ollama"), Some(ProviderType::Ollama));
        assert_eq!(ProviderType::parse("unknown"), None);
    }

    #[test]
    fn test_supported_models() {
        assert!(is_supported_model(DEFAULT_GEMINI_MODEL));
        assert!(is_supported_model("gemini-1.0-pro"));
        assert!(!is_supported_model("gemini-ultra"));
    }

    #[test]
    fn test_requires_api_key() {
        assert!(ProviderType::Gemini.requires_api_key());
        assert!(!ProviderType::Ollama.requires_api_key());
    }
}
