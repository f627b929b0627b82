use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub port: u16,
    pub notifications: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup("APP_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data"));
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let notifications = lookup("APP_NOTIFICATIONS")
            .map(|value| !value.trim().eq_ignore_ascii_case("off"))
            .unwrap_or(true);

        Self {
            data_dir,
            port,
            notifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.port, 8080);
        assert!(config.notifications);
    }

    #[test]
    fn reads_overrides_and_ignores_bad_port() {
        let config = config_from(&[
            ("APP_DATA_DIR", "/tmp/tracker"),
            ("PORT", "not-a-port"),
            ("APP_NOTIFICATIONS", "OFF"),
        ]);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/tracker"));
        assert_eq!(config.port, 8080);
        assert!(!config.notifications);
    }
}
