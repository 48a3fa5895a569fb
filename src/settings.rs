//! Persisted user preferences, stored as settings.json in the app data directory

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Last window placement
    pub window_pos: Option<(f32, f32)>,
    pub window_size: Option<(f32, f32)>,

    // Backend
    pub api_base_url: String,
    pub request_timeout_secs: u64,

    // Run against the built-in demo dataset instead of a live backend
    pub offline_demo: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_pos: None,
            window_size: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            offline_demo: false,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE);
        let Ok(raw) = std::fs::read_to_string(&path) else {
            debug!("No settings file, starting with defaults");
            return Self::default();
        };
        match serde_json::from_str(&raw) {
            Ok(settings) => {
                debug!(path = %path.display(), "Loaded settings");
                settings
            }
            Err(e) => {
                warn!(error = %e, "Could not parse settings file, falling back to defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Could not serialize settings");
                return;
            }
        };
        let path = data_dir.join(SETTINGS_FILE);
        if let Err(e) = std::fs::write(&path, json) {
            warn!(error = %e, path = %path.display(), "Could not write settings file");
        }
    }

    /// Base URL with any trailing slash removed, so endpoint paths can be
    /// appended unconditionally
    pub fn api_base(&self) -> String {
        self.api_base_url.trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_strips_trailing_slash() {
        let mut settings = Settings::default();
        settings.api_base_url = "http://host:8080/api/".to_string();
        assert_eq!(settings.api_base(), "http://host:8080/api");
    }

    #[test]
    fn test_old_settings_files_still_load() {
        let parsed: Settings =
            serde_json::from_str(r#"{"window_size": [1200.0, 800.0], "unknown_field": true}"#)
                .unwrap();
        assert_eq!(parsed.window_size, Some((1200.0, 800.0)));
        assert_eq!(parsed.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(parsed.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }
}
