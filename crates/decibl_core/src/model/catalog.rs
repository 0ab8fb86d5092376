//! Fixed catalogs: reader voices, playback speeds and UI languages.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Voice profile identifier from the fixed reader catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceId {
    #[default]
    Sarah,
    James,
    Maria,
    Pierre,
}

impl VoiceId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sarah => "sarah",
            Self::James => "james",
            Self::Maria => "maria",
            Self::Pierre => "pierre",
        }
    }

    /// Catalog entry for this voice.
    pub fn profile(self) -> &'static VoiceProfile {
        match self {
            Self::Sarah => &VOICE_CATALOG[0],
            Self::James => &VOICE_CATALOG[1],
            Self::Maria => &VOICE_CATALOG[2],
            Self::Pierre => &VOICE_CATALOG[3],
        }
    }
}

/// Display metadata for one voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceProfile {
    pub id: VoiceId,
    pub name: &'static str,
    pub language: &'static str,
}

pub static VOICE_CATALOG: [VoiceProfile; 4] = [
    VoiceProfile {
        id: VoiceId::Sarah,
        name: "Sarah",
        language: "English (US)",
    },
    VoiceProfile {
        id: VoiceId::James,
        name: "James",
        language: "English (UK)",
    },
    VoiceProfile {
        id: VoiceId::Maria,
        name: "Maria",
        language: "Spanish",
    },
    VoiceProfile {
        id: VoiceId::Pierre,
        name: "Pierre",
        language: "French",
    },
];

/// Selectable UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGE_CATALOG: [LanguageOption; 5] = [
    LanguageOption {
        code: "en-US",
        name: "English (US)",
    },
    LanguageOption {
        code: "en-GB",
        name: "English (UK)",
    },
    LanguageOption {
        code: "es-ES",
        name: "Spanish",
    },
    LanguageOption {
        code: "fr-FR",
        name: "French",
    },
    LanguageOption {
        code: "de-DE",
        name: "German",
    },
];

/// Playback-rate multiplier restricted to the discrete reader steps.
///
/// Serialized as a plain JSON number (`1.25`), so stored settings and
/// fixtures stay readable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum PlaybackSpeed {
    Half,
    ThreeQuarters,
    #[default]
    Normal,
    OneAndQuarter,
    OneAndHalf,
    OneAndThreeQuarters,
    Double,
}

impl PlaybackSpeed {
    /// All speeds in ascending order.
    pub const ALL: [PlaybackSpeed; 7] = [
        Self::Half,
        Self::ThreeQuarters,
        Self::Normal,
        Self::OneAndQuarter,
        Self::OneAndHalf,
        Self::OneAndThreeQuarters,
        Self::Double,
    ];

    pub fn as_f64(self) -> f64 {
        match self {
            Self::Half => 0.5,
            Self::ThreeQuarters => 0.75,
            Self::Normal => 1.0,
            Self::OneAndQuarter => 1.25,
            Self::OneAndHalf => 1.5,
            Self::OneAndThreeQuarters => 1.75,
            Self::Double => 2.0,
        }
    }
}

/// Rejected playback-rate value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidSpeed(pub f64);

impl Display for InvalidSpeed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported playback speed `{}`; expected 0.5|0.75|1.0|1.25|1.5|1.75|2.0",
            self.0
        )
    }
}

impl Error for InvalidSpeed {}

impl TryFrom<f64> for PlaybackSpeed {
    type Error = InvalidSpeed;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|speed| (speed.as_f64() - value).abs() < f64::EPSILON)
            .ok_or(InvalidSpeed(value))
    }
}

impl From<PlaybackSpeed> for f64 {
    fn from(value: PlaybackSpeed) -> Self {
        value.as_f64()
    }
}

impl Display for PlaybackSpeed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x", self.as_f64())
    }
}
