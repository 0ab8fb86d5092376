//! Installation-wide user preferences.
//!
//! # Invariants
//! - `Settings::default()` is the single source of fallback values.
//! - `hotkeys` always carries exactly `record`, `play` and `stop`.

use crate::model::catalog::{PlaybackSpeed, VoiceId};
use serde::{Deserialize, Serialize};

/// Color scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Key combinations bound to recorder/reader actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkeys {
    pub record: String,
    pub play: String,
    pub stop: String,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            record: "Ctrl+R".to_string(),
            play: "Ctrl+P".to_string(),
            stop: "Ctrl+S".to_string(),
        }
    }
}

/// Singleton settings object persisted as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub default_voice: VoiceId,
    pub default_speed: PlaybackSpeed,
    /// BCP 47 tag, one of `LANGUAGE_CATALOG` codes in practice.
    pub language: String,
    pub theme: Theme,
    pub hotkeys: Hotkeys,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_voice: VoiceId::Sarah,
            default_speed: PlaybackSpeed::Normal,
            language: "en-US".to_string(),
            theme: Theme::Light,
            hotkeys: Hotkeys::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Settings, Theme};

    #[test]
    fn defaults_serialize_with_camel_case_fields() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["defaultVoice"], "sarah");
        assert_eq!(json["defaultSpeed"], 1.0);
        assert_eq!(json["language"], "en-US");
        assert_eq!(json["theme"], "light");
        assert_eq!(json["hotkeys"]["record"], "Ctrl+R");
        assert_eq!(json["hotkeys"]["play"], "Ctrl+P");
        assert_eq!(json["hotkeys"]["stop"], "Ctrl+S");
    }

    #[test]
    fn theme_parses_lowercase_names() {
        let theme: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(theme, Theme::Dark);
    }
}
