//! Configuration module

use std::env;
use std::fmt;
use std::path::PathBuf;

/// Application configuration
#[derive(Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Gemini API key, if any was provided
    pub gemini_api_key: Option<String>,

    /// Gemini model name
    pub gemini_model: String,

    /// Generative Language API base URL
    pub gemini_base_url: String,

    /// Client-side timeout for provider calls
    pub provider_timeout_secs: u64,

    /// Where the latest contact submission is written (memory only when unset)
    pub contact_store_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from any variable source
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            environment: var("ENVIRONMENT")
                .unwrap_or_else(|| "development".to_string()),

            gemini_api_key: ["GEMINI_API_KEY", "GOOGLE_API_KEY", "GOOGLE_GENAI_API_KEY"]
                .iter()
                .filter_map(|name| var(*name))
                .find(|key| !key.trim().is_empty()),

            gemini_model: var("GEMINI_MODEL")
                .unwrap_or_else(|| "gemini-2.5-flash".to_string()),

            gemini_base_url: var("GEMINI_BASE_URL")
                .unwrap_or_else(|| "https://generativelanguage.googleapis.com".to_string()),

            // Zero would fail every call immediately
            provider_timeout_secs: var("PROVIDER_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .filter(|&secs: &u64| secs > 0)
                .unwrap_or(30),

            contact_store_path: var("CONTACT_STORE_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether a provider credential was configured
    pub fn api_key_present(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            environment: "development".to_string(),
            gemini_api_key: None,
            gemini_model: "gemini-2.5-flash".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
            provider_timeout_secs: 30,
            contact_store_path: None,
        }
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("environment", &self.environment)
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "***"))
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("provider_timeout_secs", &self.provider_timeout_secs)
            .field("contact_store_path", &self.contact_store_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_from_lookup_empty_matches_defaults() {
        let config = from_vars(&[]);
        let defaults = Config::default();
        assert_eq!(config.port, defaults.port);
        assert_eq!(config.environment, defaults.environment);
        assert_eq!(config.gemini_model, defaults.gemini_model);
        assert_eq!(config.gemini_base_url, defaults.gemini_base_url);
        assert_eq!(config.provider_timeout_secs, defaults.provider_timeout_secs);
        assert!(config.gemini_api_key.is_none());
        assert!(config.contact_store_path.is_none());
    }

    #[test]
    fn test_api_key_fallback_order() {
        let config = from_vars(&[
            ("GEMINI_API_KEY", "gemini"),
            ("GOOGLE_API_KEY", "google"),
            ("GOOGLE_GENAI_API_KEY", "genai"),
        ]);
        assert_eq!(config.gemini_api_key.as_deref(), Some("gemini"));

        let config = from_vars(&[("GOOGLE_API_KEY", "google"), ("GOOGLE_GENAI_API_KEY", "genai")]);
        assert_eq!(config.gemini_api_key.as_deref(), Some("google"));

        let config = from_vars(&[("GOOGLE_GENAI_API_KEY", "genai")]);
        assert_eq!(config.gemini_api_key.as_deref(), Some("genai"));
    }

    #[test]
    fn test_blank_api_keys_are_skipped() {
        let config = from_vars(&[
            ("GEMINI_API_KEY", "   "),
            ("GOOGLE_API_KEY", ""),
            ("GOOGLE_GENAI_API_KEY", "genai"),
        ]);
        assert_eq!(config.gemini_api_key.as_deref(), Some("genai"));

        let config = from_vars(&[("GEMINI_API_KEY", " ")]);
        assert!(!config.api_key_present());
    }

    #[test]
    fn test_contact_store_path() {
        let config = from_vars(&[("CONTACT_STORE_PATH", "")]);
        assert!(config.contact_store_path.is_none());

        let config = from_vars(&[("CONTACT_STORE_PATH", "/var/lib/secure360/contact.json")]);
        assert_eq!(
            config.contact_store_path,
            Some(PathBuf::from("/var/lib/secure360/contact.json"))
        );
    }

    #[test]
    fn test_provider_timeout() {
        assert_eq!(from_vars(&[("PROVIDER_TIMEOUT_SECS", "0")]).provider_timeout_secs, 30);
        assert_eq!(from_vars(&[("PROVIDER_TIMEOUT_SECS", "abc")]).provider_timeout_secs, 30);
        assert_eq!(from_vars(&[("PROVIDER_TIMEOUT_SECS", "5")]).provider_timeout_secs, 5);
    }

    #[test]
    fn test_port_and_environment() {
        let config = from_vars(&[("PORT", "9090"), ("ENVIRONMENT", "production")]);
        assert_eq!(config.port, 9090);
        assert!(config.is_production());
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = Config {
            gemini_api_key: Some("AIza-secret-value".to_string()),
            ..Config::default()
        };

        let debug = format!("{:?}", config);
        assert!(!debug.contains("AIza-secret-value"));
        assert!(debug.contains("***"));
        assert!(config.api_key_present());
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert!(!config.is_production());
        assert!(!config.api_key_present());
        assert!(config.contact_store_path.is_none());
    }
}
