//! Server configuration.
//!
//! Every setting has a default and can be overridden through a `VOYAGE_*`
//! environment variable.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::DisplayZone;
use crate::keywords::DEFAULT_KEYWORDS_PATH;

/// Default upper bound on the length of a search window.
pub const DEFAULT_MAX_WINDOW_DAYS: u32 = 31;

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: String,
}

impl ConfigError {
    fn new(var: &'static str, value: &str, reason: impl ToString) -> Self {
        Self {
            var,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Configuration for the voyage server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Path to the keyword alias file.
    pub keywords_path: PathBuf,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Zone departure times are displayed in.
    pub zone: DisplayZone,

    /// How often to reload the keyword file (seconds). Zero disables reloading.
    pub reload_interval_secs: u64,

    /// Longest search window a request may ask for (days).
    pub max_window_days: u32,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("VOYAGE_BIND_ADDR") {
            config.bind_addr = value
                .parse()
                .map_err(|e| ConfigError::new("VOYAGE_BIND_ADDR", &value, e))?;
        }

        if let Some(value) = lookup("VOYAGE_KEYWORDS_PATH") {
            config.keywords_path = PathBuf::from(value);
        }

        if let Some(value) = lookup("VOYAGE_STATIC_DIR") {
            config.static_dir = PathBuf::from(value);
        }

        let offset = match lookup("VOYAGE_TZ_OFFSET_MINS") {
            Some(value) => value
                .parse::<i32>()
                .map_err(|e| ConfigError::new("VOYAGE_TZ_OFFSET_MINS", &value, e))?,
            None => config.zone.offset().local_minus_utc() / 60,
        };
        let label = lookup("VOYAGE_TZ_LABEL").unwrap_or_else(|| config.zone.label().to_string());
        config.zone = DisplayZone::new(offset, label)
            .map_err(|e| ConfigError::new("VOYAGE_TZ_OFFSET_MINS", &offset.to_string(), e))?;

        if let Some(value) = lookup("VOYAGE_RELOAD_SECS") {
            config.reload_interval_secs = value
                .parse()
                .map_err(|e| ConfigError::new("VOYAGE_RELOAD_SECS", &value, e))?;
        }

        if let Some(value) = lookup("VOYAGE_MAX_WINDOW_DAYS") {
            let days: u32 = value
                .parse()
                .map_err(|e| ConfigError::new("VOYAGE_MAX_WINDOW_DAYS", &value, e))?;
            if days == 0 {
                return Err(ConfigError::new(
                    "VOYAGE_MAX_WINDOW_DAYS",
                    &value,
                    "must be at least one day",
                ));
            }
            config.max_window_days = days;
        }

        Ok(config)
    }

    /// Returns the keyword reload interval, if reloading is enabled.
    pub fn reload_interval(&self) -> Option<Duration> {
        (self.reload_interval_secs > 0).then(|| Duration::from_secs(self.reload_interval_secs))
    }

    /// Returns the longest search window a request may ask for.
    pub fn max_window(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.max_window_days))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            keywords_path: PathBuf::from(DEFAULT_KEYWORDS_PATH),
            static_dir: PathBuf::from("static"),
            zone: DisplayZone::utc(),
            reload_interval_secs: 60 * 60, // 1 hour
            max_window_days: DEFAULT_MAX_WINDOW_DAYS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.keywords_path, PathBuf::from("data/route_keywords.json"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.zone, DisplayZone::utc());
        assert_eq!(config.reload_interval(), Some(Duration::from_secs(3600)));
        assert_eq!(config.max_window(), chrono::Duration::days(31));
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, ServerConfig::default().bind_addr);
        assert_eq!(config.zone, DisplayZone::utc());
    }

    #[test]
    fn overrides_from_environment() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("VOYAGE_BIND_ADDR", "0.0.0.0:8080"),
            ("VOYAGE_KEYWORDS_PATH", "/etc/voyage/keywords.json"),
            ("VOYAGE_STATIC_DIR", "/srv/static"),
            ("VOYAGE_TZ_OFFSET_MINS", "-480"),
            ("VOYAGE_TZ_LABEL", "PST"),
            ("VOYAGE_RELOAD_SECS", "0"),
            ("VOYAGE_MAX_WINDOW_DAYS", "7"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.keywords_path, PathBuf::from("/etc/voyage/keywords.json"));
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
        assert_eq!(config.zone, DisplayZone::new(-480, "PST").unwrap());
        assert_eq!(config.reload_interval(), None);
        assert_eq!(config.max_window(), chrono::Duration::days(7));
    }

    #[test]
    fn label_without_offset_keeps_utc_offset() {
        let config = ServerConfig::from_lookup(lookup(&[("VOYAGE_TZ_LABEL", "GMT")])).unwrap();
        assert_eq!(config.zone, DisplayZone::new(0, "GMT").unwrap());
    }

    #[test]
    fn invalid_values_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("VOYAGE_BIND_ADDR", "nowhere")])).unwrap_err();
        assert!(err.to_string().starts_with("invalid VOYAGE_BIND_ADDR=\"nowhere\""));

        assert!(ServerConfig::from_lookup(lookup(&[("VOYAGE_TZ_OFFSET_MINS", "abc")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("VOYAGE_TZ_OFFSET_MINS", "5000")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("VOYAGE_RELOAD_SECS", "-1")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("VOYAGE_MAX_WINDOW_DAYS", "0")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("VOYAGE_MAX_WINDOW_DAYS", "lots")])).is_err());
    }
}
