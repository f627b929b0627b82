use crate::storage::KeyValueStore;
use tracing::warn;

pub const THEME_KEY: &str = "internship-tracker-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Only an exact `"light"` selects the light theme.
    pub fn parse(value: &str) -> Self {
        if value.trim() == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub fn load_theme(storage: &dyn KeyValueStore) -> Theme {
    match storage.get(THEME_KEY) {
        Ok(Some(value)) => Theme::parse(&value),
        Ok(None) => Theme::default(),
        Err(err) => {
            warn!("failed to read theme preference: {err}");
            Theme::default()
        }
    }
}

pub fn save_theme(storage: &dyn KeyValueStore, theme: Theme) {
    if let Err(err) = storage.set(THEME_KEY, theme.as_str()) {
        warn!("discarding theme preference write: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn theme_defaults_to_dark() {
        let storage = MemoryStore::new();
        assert_eq!(load_theme(&storage), Theme::Dark);
        storage.set(THEME_KEY, "solarized").unwrap();
        assert_eq!(load_theme(&storage), Theme::Dark);
    }

    #[test]
    fn theme_toggle_round_trips_through_storage() {
        let storage = MemoryStore::new();
        let next = load_theme(&storage).toggled();
        save_theme(&storage, next);
        assert_eq!(load_theme(&storage), Theme::Light);
    }

    #[test]
    fn theme_write_failure_is_silent() {
        let storage = MemoryStore::new();
        storage.reject_writes(true);
        save_theme(&storage, Theme::Light);
        assert_eq!(load_theme(&storage), Theme::Dark);
    }
}
