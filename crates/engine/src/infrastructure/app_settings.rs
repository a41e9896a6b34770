//! Engine settings loaded from the environment.
//!
//! Every value has a default so the engine starts with no configuration at
//! all. Values that fail to parse fall back to their default and log a
//! warning instead of aborting startup.
//!
//! | Variable                  | Default  |
//! |---------------------------|----------|
//! | `WARBAND_DATA_DIR`        | `./data` |
//! | `WARBAND_USER_ID`         | `local`  |
//! | `WARBAND_UNDO_TIMEOUT_MS` | `5000`   |

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_USER_ID: &str = "local";
pub const DEFAULT_UNDO_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSettings {
    /// Directory holding one JSON document per user.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// How long a recorded undo action stays available.
    #[serde(default = "default_undo_timeout_ms")]
    pub undo_timeout_ms: u64,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

fn default_undo_timeout_ms() -> u64 {
    DEFAULT_UNDO_TIMEOUT_MS
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            user_id: default_user_id(),
            undo_timeout_ms: default_undo_timeout_ms(),
        }
    }
}

impl EngineSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(dir) = non_blank(lookup("WARBAND_DATA_DIR")) {
            settings.data_dir = PathBuf::from(dir);
        }
        if let Some(user_id) = non_blank(lookup("WARBAND_USER_ID")) {
            settings.user_id = user_id;
        }
        if let Some(raw) = non_blank(lookup("WARBAND_UNDO_TIMEOUT_MS")) {
            match raw.parse::<u64>() {
                Ok(ms) => settings.undo_timeout_ms = ms,
                Err(e) => tracing::warn!(
                    error = %e,
                    value = %raw,
                    default = DEFAULT_UNDO_TIMEOUT_MS,
                    "Invalid WARBAND_UNDO_TIMEOUT_MS, using default"
                ),
            }
        }

        settings
    }

    pub fn undo_timeout(&self) -> chrono::Duration {
        i64::try_from(self.undo_timeout_ms)
            .ok()
            .and_then(chrono::Duration::try_milliseconds)
            .unwrap_or(chrono::Duration::MAX)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
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

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = EngineSettings::from_lookup(|_| None);
        assert_eq!(settings, EngineSettings::default());
        assert_eq!(settings.data_dir, PathBuf::from("./data"));
        assert_eq!(settings.user_id, "local");
        assert_eq!(settings.undo_timeout_ms, 5000);
    }

    #[test]
    fn reads_overrides() {
        let settings = EngineSettings::from_lookup(lookup_from(&[
            ("WARBAND_DATA_DIR", "/tmp/warbands"),
            ("WARBAND_USER_ID", "alice"),
            ("WARBAND_UNDO_TIMEOUT_MS", "2500"),
        ]));
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/warbands"));
        assert_eq!(settings.user_id, "alice");
        assert_eq!(settings.undo_timeout(), chrono::Duration::milliseconds(2500));
    }

    #[test]
    fn invalid_timeout_falls_back_to_default() {
        let settings =
            EngineSettings::from_lookup(lookup_from(&[("WARBAND_UNDO_TIMEOUT_MS", "soon")]));
        assert_eq!(settings.undo_timeout_ms, DEFAULT_UNDO_TIMEOUT_MS);
    }

    #[test]
    fn blank_values_are_ignored() {
        let settings = EngineSettings::from_lookup(lookup_from(&[("WARBAND_USER_ID", "   ")]));
        assert_eq!(settings.user_id, DEFAULT_USER_ID);
    }
}
