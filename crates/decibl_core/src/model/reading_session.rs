//! Reading session record for the simulated text-to-speech reader.

use crate::model::catalog::{PlaybackSpeed, VoiceId};
use crate::model::entity::{Entity, EntityId, EntityKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coerces a progress value into `[0, 100]`; NaN becomes 0.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 100.0)
    }
}

/// One "read aloud" request with its playback state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingSession {
    pub id: EntityId,
    /// Raw text as pasted by the user.
    pub text: String,
    /// `text` after markdown/citation cleanup.
    pub cleaned_text: String,
    pub voice: VoiceId,
    pub speed: PlaybackSpeed,
    /// Percentage in `[0, 100]`, enforced by `clamp_progress`.
    pub progress: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct NewReadingSession {
    pub text: String,
    pub cleaned_text: String,
    pub voice: VoiceId,
    pub speed: PlaybackSpeed,
    pub progress: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ReadingSessionPatch {
    pub text: Option<String>,
    pub cleaned_text: Option<String>,
    pub voice: Option<VoiceId>,
    pub speed: Option<PlaybackSpeed>,
    pub progress: Option<f64>,
}

impl Entity for ReadingSession {
    type Draft = NewReadingSession;
    type Patch = ReadingSessionPatch;

    const KIND: EntityKind = EntityKind::ReadingSession;

    fn id(&self) -> EntityId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: EntityId, created_at: DateTime<Utc>, draft: NewReadingSession) -> Self {
        Self {
            id,
            text: draft.text,
            cleaned_text: draft.cleaned_text,
            voice: draft.voice,
            speed: draft.speed,
            progress: clamp_progress(draft.progress),
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: ReadingSessionPatch) {
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(cleaned_text) = patch.cleaned_text {
            self.cleaned_text = cleaned_text;
        }
        if let Some(voice) = patch.voice {
            self.voice = voice;
        }
        if let Some(speed) = patch.speed {
            self.speed = speed;
        }
        if let Some(progress) = patch.progress {
            self.progress = clamp_progress(progress);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::clamp_progress;

    #[test]
    fn progress_is_kept_within_percent_range() {
        assert_eq!(clamp_progress(42.5), 42.5);
        assert_eq!(clamp_progress(-3.0), 0.0);
        assert_eq!(clamp_progress(250.0), 100.0);
        assert_eq!(clamp_progress(f64::NAN), 0.0);
        assert_eq!(clamp_progress(f64::INFINITY), 100.0);
    }
}
