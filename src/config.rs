use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Runtime configuration, loaded from `config.ron` when present.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// Seconds between automatic list refreshes.
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter when RUST_LOG is not set (e.g. "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for the rotating log file; "logs" when unset.
    #[serde(default)]
    pub log_directory: Option<String>,
}

fn default_refresh_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            refresh_secs: default_refresh_secs(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_directory: None,
        }
    }
}

impl AppConfig {
    /// Look for `config.ron` in the current directory, then next to the
    /// executable. A missing or unparsable file falls back to defaults.
    pub fn load() -> Self {
        let mut candidates = vec![PathBuf::from("config.ron")];

        if let Ok(exe) = std::env::current_exe()
            && let Some(dir) = exe.parent()
        {
            candidates.push(dir.join("config.ron"));
        }

        for path in candidates {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match ron::from_str::<AppConfig>(&content) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse config at {}: {}", path.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_fields_missing() {
        let config: AppConfig = ron::from_str("()").unwrap();
        assert_eq!(config.refresh_secs, 30);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.log_directory, None);
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let config: AppConfig = ron::from_str(
            r#"(
                refresh_secs: 10,
                logging: (level: "debug", log_directory: Some("/tmp/hn-pager")),
            )"#,
        )
        .unwrap();
        assert_eq!(config.refresh_secs, 10);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.log_directory.as_deref(), Some("/tmp/hn-pager"));
    }

    #[test]
    fn garbage_input_is_an_error_not_a_panic() {
        assert!(ron::from_str::<AppConfig>("refresh_secs,,(").is_err());
    }
}
