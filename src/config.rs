//! Site configuration from environment variables.
//!
//! | Variable                 | Default                     |
//! |--------------------------|-----------------------------|
//! | `PORT`                   | 3000                        |
//! | `PROFILE_API_URL`        | `http://localhost:5000/api` |
//! | `DEFAULT_SCHOOL_ID`      | unset                       |
//! | `PROFILE_CACHE_CAPACITY` | unset (unbounded)           |
//! | `FETCH_TIMEOUT_SECS`     | 10                          |
//! | `GOALS_ICONS_ONLY`       | false                       |
//! | `GOALS_MAX_ITEMS`        | unset (no cap)              |
//!
//! Invalid values are logged and replaced by the default.

use std::str::FromStr;
use std::time::Duration;

use crate::composer::{ComposeOptions, GoalsOptions};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROFILE_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub port: u16,
    pub profile_api_url: String,
    pub default_school_id: Option<String>,
    /// Optional entry bound; when set, moka may evict past it.
    pub cache_capacity: Option<u64>,
    pub fetch_timeout: Duration,
    pub goals_icons_only: bool,
    pub goals_max_items: Option<usize>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            profile_api_url: DEFAULT_PROFILE_API_URL.to_string(),
            default_school_id: None,
            cache_capacity: None,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            goals_icons_only: false,
            goals_max_items: None,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup; `from_env` uses the process env.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            port: parsed(&var, "PORT").unwrap_or(defaults.port),
            profile_api_url: var("PROFILE_API_URL").unwrap_or(defaults.profile_api_url),
            default_school_id: var("DEFAULT_SCHOOL_ID"),
            cache_capacity: parsed(&var, "PROFILE_CACHE_CAPACITY"),
            fetch_timeout: parsed(&var, "FETCH_TIMEOUT_SECS")
                .filter(|secs: &u64| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.fetch_timeout),
            goals_icons_only: var("GOALS_ICONS_ONLY")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.goals_icons_only),
            goals_max_items: parsed(&var, "GOALS_MAX_ITEMS"),
        }
    }

    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            goals: GoalsOptions {
                icons_only: self.goals_icons_only,
                max_items: self.goals_max_items,
            },
        }
    }

    pub fn log_summary(&self) {
        tracing::info!("Configuration:");
        tracing::info!("  PORT: {}", self.port);
        tracing::info!("  PROFILE_API_URL: {}", self.profile_api_url);
        tracing::info!(
            "  DEFAULT_SCHOOL_ID: {}",
            self.default_school_id.as_deref().unwrap_or("(none)")
        );
        match self.cache_capacity {
            Some(capacity) => tracing::info!("  PROFILE_CACHE_CAPACITY: {}", capacity),
            None => tracing::info!("  PROFILE_CACHE_CAPACITY: unbounded"),
        }
        tracing::info!("  FETCH_TIMEOUT_SECS: {}", self.fetch_timeout.as_secs());
        tracing::info!(
            "  GOALS: icons_only={}, max_items={:?}",
            self.goals_icons_only,
            self.goals_max_items
        );
    }
}

fn parsed<T, F>(var: &F, name: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = var(name)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}={:?}, using default", name, raw);
            None
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            tracing::warn!("Ignoring invalid flag value {:?}, using default", raw);
            None
        }
    }
}
