use crate::sources::PricingError;

pub const BASE_URL: &str = "https://inara.cz";

/// Request timeout for a single fetch or form submission (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Site root without trailing slash (INARA_BASE_URL)
    pub base_url: String,
    /// HTTP_TIMEOUT_SECS
    pub timeout_secs: u64,
    /// HTTP_USER_AGENT
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, PricingError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PricingError> {
        let timeout_secs = match lookup("HTTP_TIMEOUT_SECS") {
            Some(value) => value.trim().parse::<u64>().map_err(|_| {
                PricingError::InvalidConfig(format!(
                    "HTTP_TIMEOUT_SECS must be a number of seconds, got {:?}",
                    value
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url: lookup("INARA_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_owned())
                .unwrap_or_else(|| BASE_URL.to_owned()),
            timeout_secs,
            user_agent: lookup("HTTP_USER_AGENT").unwrap_or_else(default_user_agent),
        })
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
