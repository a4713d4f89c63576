// Settings module
// Client configuration persisted as TOML in the platform config directory

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the events resource. Mutation URLs are formed by
    /// appending the event id directly to this base.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000/events/".to_string(),
            request_timeout_secs: 10,
            dark_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "http://127.0.0.1:8000/events/");
        assert_eq!(settings.request_timeout_secs, 10);
        assert!(!settings.dark_mode);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let settings: Settings = toml::from_str("dark_mode = true").unwrap();
        assert!(settings.dark_mode);
        assert_eq!(settings.api_base_url, Settings::default().api_base_url);
        assert_eq!(settings.request_timeout_secs, 10);
    }
}
