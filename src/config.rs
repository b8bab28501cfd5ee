use std::env;
use std::time::Duration;

/// Tunables for the DNS lookups the cleaning pipeline performs.
#[derive(Debug, Clone)]
pub struct CleanerConfig {
    /// Per-request DNS timeout.
    pub dns_timeout: Duration,
    /// Retry attempts per DNS query.
    pub dns_attempts: usize,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            dns_timeout: Duration::from_secs(2),
            dns_attempts: 2,
        }
    }
}

impl CleanerConfig {
    /// Builds a configuration from the environment, falling back to the
    /// defaults for anything unset or unparseable.
    ///
    /// Recognized variables: `EMAIL_CLEANER_DNS_TIMEOUT_MS`,
    /// `EMAIL_CLEANER_DNS_ATTEMPTS`.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("EMAIL_CLEANER_DNS_TIMEOUT_MS").ok(),
            env::var("EMAIL_CLEANER_DNS_ATTEMPTS").ok(),
        )
    }

    fn from_vars(timeout_ms: Option<String>, attempts: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            dns_timeout: timeout_ms
                .and_then(|value| value.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.dns_timeout),
            dns_attempts: attempts
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.dns_attempts),
        }
    }
}
