//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::time::Duration;

/// Upstream exchange-rate source used when `EXCHANGE_RATES_URL` is not set
pub const DEFAULT_EXCHANGE_RATES_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

/// How long a successful upstream answer is reused
pub const DEFAULT_RATES_TTL_SECS: u64 = 3600;

/// Upstream request timeout
pub const DEFAULT_RATES_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Upstream exchange-rate URL
    /// Example: https://api.exchangerate-api.com/v4/latest/USD
    pub exchange_rates_url: String,

    /// Seconds a successful rate lookup stays cached
    pub rates_ttl_secs: u64,

    /// Seconds before an upstream rate request is abandoned
    pub rates_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset, empty or unparsable values
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let exchange_rates_url = lookup("EXCHANGE_RATES_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_EXCHANGE_RATES_URL.to_string());

        Self {
            exchange_rates_url,
            rates_ttl_secs: parse_secs(lookup("EXCHANGE_RATES_TTL_SECS"), DEFAULT_RATES_TTL_SECS),
            rates_timeout_secs: parse_secs(
                lookup("EXCHANGE_RATES_TIMEOUT_SECS"),
                DEFAULT_RATES_TIMEOUT_SECS,
            )
            .max(1),
        }
    }

    /// Check if the default upstream is overridden
    pub fn has_custom_rates_url(&self) -> bool {
        self.exchange_rates_url != DEFAULT_EXCHANGE_RATES_URL
    }

    /// Check if successful lookups are cached at all
    pub fn has_rates_cache(&self) -> bool {
        self.rates_ttl_secs > 0
    }

    pub fn rates_ttl(&self) -> Duration {
        Duration::from_secs(self.rates_ttl_secs)
    }

    pub fn rates_timeout(&self) -> Duration {
        Duration::from_secs(self.rates_timeout_secs)
    }
}

fn parse_secs(value: Option<String>, default: u64) -> u64 {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.exchange_rates_url, DEFAULT_EXCHANGE_RATES_URL);
        assert_eq!(config.rates_ttl_secs, 3600);
        assert_eq!(config.rates_timeout_secs, 10);
        assert!(!config.has_custom_rates_url());
        assert!(config.has_rates_cache());
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup_from(&[
            ("EXCHANGE_RATES_URL", "http://localhost:9000/latest"),
            ("EXCHANGE_RATES_TTL_SECS", "60"),
            ("EXCHANGE_RATES_TIMEOUT_SECS", "3"),
        ]));

        assert_eq!(config.exchange_rates_url, "http://localhost:9000/latest");
        assert_eq!(config.rates_ttl(), Duration::from_secs(60));
        assert_eq!(config.rates_timeout(), Duration::from_secs(3));
        assert!(config.has_custom_rates_url());
    }

    #[test]
    fn test_config_with_invalid_numbers() {
        let config = Config::from_lookup(lookup_from(&[
            ("EXCHANGE_RATES_TTL_SECS", "one hour"),
            ("EXCHANGE_RATES_TIMEOUT_SECS", "-5"),
        ]));

        assert_eq!(config.rates_ttl_secs, DEFAULT_RATES_TTL_SECS);
        assert_eq!(config.rates_timeout_secs, DEFAULT_RATES_TIMEOUT_SECS);
    }

    #[test]
    fn test_config_with_empty_string_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("EXCHANGE_RATES_URL", "   "),
            ("EXCHANGE_RATES_TTL_SECS", ""),
        ]));

        assert_eq!(config.exchange_rates_url, DEFAULT_EXCHANGE_RATES_URL);
        assert_eq!(config.rates_ttl_secs, DEFAULT_RATES_TTL_SECS);
    }

    #[test]
    fn test_zero_ttl_disables_cache() {
        let config = Config::from_lookup(lookup_from(&[("EXCHANGE_RATES_TTL_SECS", "0")]));
        assert!(!config.has_rates_cache());
    }

    #[test]
    fn test_zero_timeout_is_raised() {
        let config = Config::from_lookup(lookup_from(&[("EXCHANGE_RATES_TIMEOUT_SECS", "0")]));
        assert_eq!(config.rates_timeout_secs, 1);
    }

    #[test]
    fn test_values_are_trimmed() {
        let config = Config::from_lookup(lookup_from(&[
            ("EXCHANGE_RATES_URL", " http://rates.local/usd \n"),
            ("EXCHANGE_RATES_TTL_SECS", " 120 "),
        ]));

        assert_eq!(config.exchange_rates_url, "http://rates.local/usd");
        assert_eq!(config.rates_ttl_secs, 120);
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so only check the invariants
        let config = Config::from_env();
        assert!(!config.exchange_rates_url.is_empty());
        assert!(config.rates_timeout_secs >= 1);
    }

    #[test]
    fn test_config_default_calls_from_env() {
        assert_eq!(Config::default(), Config::from_env());
    }

    #[test]
    fn test_config_debug() {
        let config = Config::from_lookup(|_| None);
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("exchange_rates_url"));
        assert!(debug_str.contains("api.exchangerate-api.com"));
    }
}
