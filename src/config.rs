//! Deployment configuration.
//!
//! The browser build has no process environment, so values are baked in at
//! compile time from `GITA_*` variables.

use crate::playback::VerseKey;
use crate::text::LinePolicy;
use serde::{Deserialize, Serialize};

const DEFAULT_AUDIO_BASE_URL: &str = "/audio";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub backend_anon_key: String,
    /// Folder holding the vibe renditions, one `{chapter}_{verse}.mp3` each.
    pub audio_base_url: String,
    /// Traditional chant hosting. Unset disables that channel.
    #[serde(default)]
    pub traditional_audio_base_url: Option<String>,
    #[serde(default)]
    pub line_policy: LinePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            backend_anon_key: String::new(),
            audio_base_url: DEFAULT_AUDIO_BASE_URL.to_string(),
            traditional_audio_base_url: None,
            line_policy: LinePolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                "GITA_BACKEND_URL" => option_env!("GITA_BACKEND_URL"),
                "GITA_BACKEND_ANON_KEY" => option_env!("GITA_BACKEND_ANON_KEY"),
                "GITA_AUDIO_BASE_URL" => option_env!("GITA_AUDIO_BASE_URL"),
                "GITA_TRADITIONAL_AUDIO_BASE_URL" => option_env!("GITA_TRADITIONAL_AUDIO_BASE_URL"),
                "GITA_LINE_POLICY" => option_env!("GITA_LINE_POLICY"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(url) = non_empty("GITA_BACKEND_URL") {
            config.backend_url = url.trim_end_matches('/').to_string();
        }
        if let Some(key) = non_empty("GITA_BACKEND_ANON_KEY") {
            config.backend_anon_key = key;
        }
        if let Some(url) = non_empty("GITA_AUDIO_BASE_URL") {
            config.audio_base_url = url.trim_end_matches('/').to_string();
        }
        config.traditional_audio_base_url = non_empty("GITA_TRADITIONAL_AUDIO_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string());
        if let Some(raw) = non_empty("GITA_LINE_POLICY") {
            match LinePolicy::parse(&raw) {
                Some(policy) => config.line_policy = policy,
                None => tracing::warn!(value = %raw, "unknown GITA_LINE_POLICY, keeping default"),
            }
        }
        config
    }

    pub fn vibe_audio_url(&self, key: VerseKey) -> String {
        format!("{}/{}.mp3", self.audio_base_url, key.asset_stem())
    }

    pub fn traditional_audio_url(&self, key: VerseKey) -> Option<String> {
        self.traditional_audio_base_url
            .as_ref()
            .map(|base| format!("{}/{}.mp3", base, key.asset_stem()))
    }
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
    fn defaults_leave_traditional_audio_disabled() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.traditional_audio_url(VerseKey::new(18, 66)), None);
        assert_eq!(config.vibe_audio_url(VerseKey::new(18, 66)), "/audio/18_66.mp3");
    }

    #[test]
    fn values_are_trimmed_and_parsed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GITA_BACKEND_URL", "https://db.example.org/ "),
            ("GITA_AUDIO_BASE_URL", "https://cdn.example.org/vibe/"),
            ("GITA_TRADITIONAL_AUDIO_BASE_URL", "https://cdn.example.org/chant"),
            ("GITA_LINE_POLICY", "pause-marks"),
        ]));
        assert_eq!(config.backend_url, "https://db.example.org");
        assert_eq!(config.line_policy, LinePolicy::PauseMarks);
        assert_eq!(
            config.vibe_audio_url(VerseKey::new(2, 47)),
            "https://cdn.example.org/vibe/2_47.mp3"
        );
        assert_eq!(
            config.traditional_audio_url(VerseKey::new(2, 47)).as_deref(),
            Some("https://cdn.example.org/chant/2_47.mp3")
        );
    }

    #[test]
    fn blank_traditional_base_stays_disabled() {
        let config = AppConfig::from_lookup(lookup_from(&[("GITA_TRADITIONAL_AUDIO_BASE_URL", "  ")]));
        assert_eq!(config.traditional_audio_base_url, None);
    }

    #[test]
    fn unknown_line_policy_keeps_default() {
        let config = AppConfig::from_lookup(lookup_from(&[("GITA_LINE_POLICY", "zigzag")]));
        assert_eq!(config.line_policy, LinePolicy::WordGroups);
    }
}
