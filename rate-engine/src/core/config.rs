use std::time::Duration;

/// Rate engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | RATE_CARDS_PATH | data/rate_cards.json | JSON rate-card file |
/// | RELOAD_INTERVAL_SECS | 300 | reload period, 0 disables reloads |
/// | DEFAULT_ZONE | 1 | zone answered by the fixed zone resolver |
/// | DEFAULT_VOLUME_TIER | 1 | tier answered by the fixed volume classifier |
/// | LOG_LEVEL | info | tracing filter directive |
/// | LOG_JSON | false | JSON log lines |
/// | LOG_DIR | (unset) | directory for daily log files |
/// | ENVIRONMENT | development | development / staging / production |
///
/// # Example
///
/// ```ignore
/// RATE_CARDS_PATH=/etc/rates.json RELOAD_INTERVAL_SECS=60 cargo run
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rate_cards_path: String,
    /// Seconds between reloads, 0 = never
    pub reload_interval_secs: u64,
    pub default_zone: String,
    pub default_volume_tier: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load from the process environment, defaults for anything unset
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            rate_cards_path: non_empty("RATE_CARDS_PATH")
                .unwrap_or_else(|| "data/rate_cards.json".into()),
            reload_interval_secs: non_empty("RELOAD_INTERVAL_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(300),
            default_zone: non_empty("DEFAULT_ZONE").unwrap_or_else(|| "1".into()),
            default_volume_tier: non_empty("DEFAULT_VOLUME_TIER").unwrap_or_else(|| "1".into()),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: non_empty("LOG_JSON")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(false),
            log_dir: non_empty("LOG_DIR"),
            environment: non_empty("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// Reload period, `None` when reloading is disabled
    pub fn reload_interval(&self) -> Option<Duration> {
        (self.reload_interval_secs > 0).then(|| Duration::from_secs(self.reload_interval_secs))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.rate_cards_path, "data/rate_cards.json");
        assert_eq!(config.reload_interval(), Some(Duration::from_secs(300)));
        assert_eq!(config.default_zone, "1");
        assert_eq!(config.default_volume_tier, "1");
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert_eq!(config.log_dir, None);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("RATE_CARDS_PATH", "/etc/rates.json"),
            ("RELOAD_INTERVAL_SECS", "60"),
            ("DEFAULT_ZONE", "3"),
            ("LOG_JSON", "true"),
            ("LOG_DIR", "/var/log/rates"),
            ("ENVIRONMENT", "production"),
        ]);
        assert_eq!(config.rate_cards_path, "/etc/rates.json");
        assert_eq!(config.reload_interval(), Some(Duration::from_secs(60)));
        assert_eq!(config.default_zone, "3");
        assert!(config.log_json);
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/rates"));
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_zero_interval_disables_reload() {
        assert_eq!(config_from(&[("RELOAD_INTERVAL_SECS", "0")]).reload_interval(), None);
    }

    #[test]
    fn test_unparseable_and_blank_values_fall_back() {
        let config = config_from(&[
            ("RELOAD_INTERVAL_SECS", "soon"),
            ("LOG_JSON", "yes"),
            ("LOG_DIR", "  "),
        ]);
        assert_eq!(config.reload_interval_secs, 300);
        assert!(!config.log_json);
        assert_eq!(config.log_dir, None);
    }
}
